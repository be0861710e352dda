use super::{
    brush::{Bgr, Brush, BrushSize},
    canvas::Canvas,
    point::Point,
};
use crate::{
    err_new,
    error::{Kind, Result},
};
use std::mem::swap;
use std::ops::RangeInclusive;

/// 画家：持有一块（可能尚未挂载的）像素画布以及画笔状态。
///
/// 所有绘制操作都以画笔颜色和尺寸为准，写入时裁剪到画布范围内，不会越界。
/// 坐标统一为 `(row, col)`：`row` 对应画布高度方向，`col` 对应宽度方向。
#[derive(Debug, Clone)]
pub struct Painter<C> {
    surface: Option<C>,
    brush: Brush,
}

impl<C> Default for Painter<C> {
    fn default() -> Self {
        Self {
            surface: None,
            brush: Brush::default(),
        }
    }
}

impl<C: Canvas> Painter<C> {
    #[must_use]
    pub fn new(surface: C) -> Self {
        Self::with_brush(surface, Brush::default())
    }

    #[must_use]
    pub fn with_brush(surface: C, brush: Brush) -> Self {
        Self {
            surface: Some(surface),
            brush,
        }
    }

    /// 挂载新的画布，返回之前挂载的画布（如果有）。
    pub fn attach(&mut self, surface: C) -> Option<C> {
        self.surface.replace(surface)
    }

    /// 卸下画布，之后的绘制操作将失败或不做任何事。
    pub fn detach(&mut self) -> Option<C> {
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&C> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut C> {
        self.surface.as_mut()
    }

    pub fn into_surface(self) -> Option<C> {
        self.surface
    }

    #[must_use]
    pub fn brush(&self) -> Brush {
        self.brush
    }

    /// 设置画笔颜色，内部按 B、G、R 顺序存放以匹配像素布局。
    ///
    /// # Errors
    /// 目前不会失败。
    ///
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) -> Result<()> {
        self.brush.color = Bgr::new(r, g, b);
        Ok(())
    }

    /// 设置画笔尺寸。
    ///
    /// # Parameters
    /// - `size`: 点的边长，必须为奇数。
    ///
    /// # Errors
    /// - `size` 为偶数（包括 0）时返回 `Kind::InvalidBrushSize`，画笔保持不变。
    ///
    pub fn set_brush_size(&mut self, size: u32) -> Result<()> {
        self.brush.size = BrushSize::new(size)?;
        Ok(())
    }

    /// 以 `at` 为中心画一个边长为画笔尺寸的实心正方形。
    ///
    /// 超出画布的部分被裁掉；完全落在画布外时什么也不画。未挂载画布时不做任何事。
    pub fn draw_dot(&mut self, at: impl Into<Point>) {
        let Point { row, col } = at.into();
        let Brush { color, size } = self.brush;
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        let (width, height) = surface.dimensions();
        let half = i64::from(size.half());
        let (Some(rows), Some(cols)) = (
            clamp_span(i64::from(row), half, height),
            clamp_span(i64::from(col), half, width),
        ) else {
            return;
        };

        for r in rows {
            for c in cols.clone() {
                surface.draw_pixel(r, c, color);
            }
        }
    }

    /// 画一条宽度为画笔尺寸的线段。
    ///
    /// 端点相同时退化为一个点；竖直、水平线逐行/逐列落点；
    /// 其他情况按斜率选择主轴（`|Δcol| <= |Δrow|` 时以行为主轴），
    /// 在主轴的每个整数位置上用截断整除插值出另一轴坐标并落点。
    ///
    /// # Errors
    /// - 未挂载画布时返回 `Kind::MissingPixels`，不做任何绘制。
    ///
    pub fn draw_line(&mut self, start: impl Into<Point>, end: impl Into<Point>) -> Result<()> {
        let Some((width, height)) = self.surface.as_ref().map(Canvas::dimensions) else {
            return Err(err_new!(
                Kind::MissingPixels,
                "draw_line: no pixel buffer attached"
            ));
        };
        let (mut a, mut b) = (start.into(), end.into());

        if a == b {
            self.draw_dot(a);
            return Ok(());
        }

        if a.col == b.col {
            if a.row > b.row {
                swap(&mut a, &mut b);
            }
            for row in self.major_span(a.row, b.row, height)? {
                self.draw_dot((row, a.col));
            }
            return Ok(());
        }

        if a.row == b.row {
            if a.col > b.col {
                swap(&mut a, &mut b);
            }
            for col in self.major_span(a.col, b.col, width)? {
                self.draw_dot((a.row, col));
            }
            return Ok(());
        }

        let steep = (i64::from(b.col) - i64::from(a.col)).abs()
            <= (i64::from(b.row) - i64::from(a.row)).abs();

        if steep {
            if a.row > b.row {
                swap(&mut a, &mut b);
            }
            for row in self.major_span(a.row, b.row, height)? {
                let col = interpolate(row, (a.row, a.col), (b.row, b.col))?;
                self.draw_dot((row, col));
            }
        } else {
            if a.col > b.col {
                swap(&mut a, &mut b);
            }
            for col in self.major_span(a.col, b.col, width)? {
                let row = interpolate(col, (a.col, a.row), (b.col, b.row))?;
                self.draw_dot((row, col));
            }
        }
        Ok(())
    }

    /// 画矩形的四条边。
    ///
    /// `width` 沿行方向延伸，`height` 沿列方向延伸，依次画出
    /// `(r,c)-(r+w,c)`、`(r,c+h)-(r+w,c+h)`、`(r,c)-(r,c+h)`、`(r+w,c)-(r+w,c+h)`。
    ///
    /// # Errors
    /// - 任何一条边失败即返回，已画出的边保留在画布上。
    /// - 角点坐标超出 `i32` 范围时返回 `Kind::Other`。
    ///
    pub fn draw_rectangle(
        &mut self,
        corner: impl Into<Point>,
        width: i32,
        height: i32,
    ) -> Result<()> {
        let corner = corner.into();
        let overflow = || err_new!(Kind::Other, "draw_rectangle: corner out of i32 range");

        let row_end = corner.checked_offset(width, 0).ok_or_else(overflow)?;
        self.draw_line(corner, row_end)?;

        let col_end = corner.checked_offset(0, height).ok_or_else(overflow)?;
        let opposite = corner.checked_offset(width, height).ok_or_else(overflow)?;
        self.draw_line(col_end, opposite)?;
        self.draw_line(corner, col_end)?;
        self.draw_line(row_end, opposite)?;
        Ok(())
    }

    /// 画三角形的三条边：`a-c`、`b-c`、`a-b`。
    ///
    /// # Errors
    /// - 任何一条边失败即返回，已画出的边保留在画布上。
    ///
    pub fn draw_triangle(
        &mut self,
        a: impl Into<Point>,
        b: impl Into<Point>,
        c: impl Into<Point>,
    ) -> Result<()> {
        let (a, b, c) = (a.into(), b.into(), c.into());
        self.draw_line(a, c)?;
        self.draw_line(b, c)?;
        self.draw_line(a, b)?;
        Ok(())
    }

    // Positions on the major axis whose dot can touch the canvas; dots
    // further out than half a brush are skipped.
    fn major_span(&self, lo: i32, hi: i32, extent: u32) -> Result<RangeInclusive<i32>> {
        let half = i64::from(self.brush.size.half());
        let lo = i64::from(lo).max(-half);
        let hi = i64::from(hi).min(i64::from(extent) - 1 + half);
        if lo > hi {
            return Ok(RangeInclusive::new(1, 0));
        }
        Ok(i32::try_from(lo)?..=i32::try_from(hi)?)
    }
}

/// 画笔中心为 `center` 时在一个轴上实际覆盖的下标范围，已裁剪到 `[0, extent)`。
fn clamp_span(center: i64, half: i64, extent: u32) -> Option<RangeInclusive<u32>> {
    let start = (center - half).max(0);
    let end = (center + half).min(i64::from(extent) - 1);
    if start > end {
        return None;
    }
    Some(u32::try_from(start).ok()?..=u32::try_from(end).ok()?)
}

/// 主轴坐标 `t` 处副轴的坐标：`(Δs*(t - t0) + Δt*s0) / Δt`，截断整除。
///
/// `(t0, s0)` 与 `(t1, s1)` 为两个端点，要求 `t0 != t1`。
fn interpolate(t: i32, (t0, s0): (i32, i32), (t1, s1): (i32, i32)) -> Result<i32> {
    let d_t = i128::from(t1) - i128::from(t0);
    let d_s = i128::from(s1) - i128::from(s0);
    let s = (d_s * (i128::from(t) - i128::from(t0)) + d_t * i128::from(s0)) / d_t;
    Ok(i32::try_from(s)?)
}

/// `Painter` 的构建器，画笔尺寸在 `build` 时校验。
#[derive(Debug, Clone)]
pub struct PainterBuilder {
    color: Bgr,
    brush_size: u32,
}

impl Default for PainterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PainterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            color: Bgr::default(),
            brush_size: BrushSize::default().get(),
        }
    }

    /// 设置画笔颜色
    pub fn color(&mut self, r: u8, g: u8, b: u8) -> &mut Self {
        self.color = Bgr::new(r, g, b);
        self
    }

    /// 设置画笔尺寸，必须为奇数
    pub fn brush_size(&mut self, brush_size: u32) -> &mut Self {
        self.brush_size = brush_size;
        self
    }

    /// 构建 `Painter` 实例。
    ///
    /// # Errors
    /// - 画笔尺寸为偶数时返回 `Kind::InvalidBrushSize`。
    ///
    pub fn build<C: Canvas>(&self, surface: C) -> Result<Painter<C>> {
        let brush = Brush::new(self.color, BrushSize::new(self.brush_size)?);
        Ok(Painter::with_brush(surface, brush))
    }
}

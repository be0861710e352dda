use crate::{
    err_new,
    error::{Kind, Result},
    raster::{Bgr, Bitmap, Brush, Canvas, Painter},
};
use serde::{Deserialize, Serialize};

/// 一条绘制指令，对应 `Painter` 的一个公开操作。
///
/// JSON 形式以 `op` 字段区分，例如
/// `{"op": "line", "row1": 0, "col1": 0, "row2": 5, "col2": 5}`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    SetColor { r: u8, g: u8, b: u8 },
    SetBrushSize { size: u32 },
    Dot { row: i32, col: i32 },
    Line { row1: i32, col1: i32, row2: i32, col2: i32 },
    Rectangle { row: i32, col: i32, width: i32, height: i32 },
    Triangle { points: [[i32; 2]; 3] },
}

impl<C: Canvas> Painter<C> {
    /// 执行一条指令。
    ///
    /// # Errors
    /// - 与对应的 `Painter` 操作相同。
    ///
    pub fn apply(&mut self, command: &Command) -> Result<()> {
        match *command {
            Command::SetColor { r, g, b } => self.set_color(r, g, b),
            Command::SetBrushSize { size } => self.set_brush_size(size),
            Command::Dot { row, col } => {
                self.draw_dot((row, col));
                Ok(())
            }
            Command::Line {
                row1,
                col1,
                row2,
                col2,
            } => self.draw_line((row1, col1), (row2, col2)),
            Command::Rectangle {
                row,
                col,
                width,
                height,
            } => self.draw_rectangle((row, col), width, height),
            Command::Triangle { points: [a, b, c] } => self.draw_triangle(a, b, c),
        }
    }

    /// 依次执行指令，遇到第一条失败的指令即停止，之前的绘制结果保留。
    ///
    /// # Errors
    /// - 返回第一条失败指令的错误。
    ///
    pub fn apply_all(&mut self, commands: &[Command]) -> Result<()> {
        commands.iter().try_for_each(|command| self.apply(command))
    }
}

/// 一份完整的绘制脚本：画布尺寸、底色、初始画笔与指令列表。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub background: Bgr,
    #[serde(default)]
    pub brush: Brush,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Script {
    /// 在新建的位图上执行整份脚本。
    ///
    /// # Errors
    /// - 任一指令失败时返回其错误。
    ///
    pub fn render(&self) -> Result<Bitmap<Vec<u8>>> {
        let mut bitmap = Bitmap::new(self.width, self.height);
        bitmap.fill(self.background);

        let mut painter = Painter::with_brush(bitmap, self.brush);
        painter.apply_all(&self.commands)?;
        painter
            .into_surface()
            .ok_or_else(|| err_new!(Kind::MissingPixels, "script lost its bitmap"))
    }
}

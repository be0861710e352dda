use crate::{
    err_new,
    error::{Error, Kind, Result},
};
use image::Rgb;
use serde::{Deserialize, Serialize};

/// 一个像素的颜色，按位图像素布局以 B、G、R 顺序存放。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bgr(pub [u8; 3]);

impl Bgr {
    /// 由 R、G、B 三个通道构造，内部按 B、G、R 存放。
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([b, g, r])
    }

    #[must_use]
    pub const fn r(self) -> u8 {
        self.0[2]
    }

    #[must_use]
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    #[must_use]
    pub const fn b(self) -> u8 {
        self.0[0]
    }
}

impl From<Bgr> for Rgb<u8> {
    fn from(value: Bgr) -> Self {
        Rgb([value.r(), value.g(), value.b()])
    }
}

impl From<Rgb<u8>> for Bgr {
    fn from(Rgb([r, g, b]): Rgb<u8>) -> Self {
        Bgr::new(r, g, b)
    }
}

/// 画笔尺寸：点的正方形边长，只能是奇数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct BrushSize(u32);

impl BrushSize {
    /// # Errors
    /// - 如果 `size` 为偶数（包括 0），返回 `Kind::InvalidBrushSize`。
    pub fn new(size: u32) -> Result<Self> {
        if size % 2 == 0 {
            return Err(err_new!(
                Kind::InvalidBrushSize,
                &format!("brush size must be odd, got {size}")
            ));
        }
        Ok(Self(size))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// 中心到边缘的距离，即 `size / 2`。
    #[must_use]
    pub const fn half(self) -> u32 {
        self.0 / 2
    }
}

impl Default for BrushSize {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u32> for BrushSize {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<BrushSize> for u32 {
    fn from(value: BrushSize) -> Self {
        value.0
    }
}

/// 画笔状态：颜色与尺寸，由 `Painter` 持有。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brush {
    #[serde(default)]
    pub color: Bgr,
    #[serde(default)]
    pub size: BrushSize,
}

impl Brush {
    #[must_use]
    pub fn new(color: Bgr, size: BrushSize) -> Self {
        Self { color, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bgr_channel_order() {
        let c = Bgr::new(1, 2, 3);
        assert_eq!(c.0, [3, 2, 1]);
        assert_eq!((c.r(), c.g(), c.b()), (1, 2, 3));
        assert_eq!(Rgb::<u8>::from(c), Rgb([1, 2, 3]));
        assert_eq!(Bgr::from(Rgb([1, 2, 3])), c);
    }

    #[test]
    fn test_brush_size_rejects_even() {
        for size in (0..64).step_by(2) {
            let err = BrushSize::new(size).unwrap_err();
            assert_eq!(err.kind(), &Kind::InvalidBrushSize);
        }
        for size in (1..64).step_by(2) {
            let s = BrushSize::new(size).unwrap();
            assert_eq!(s.get(), size);
            assert_eq!(s.half(), size / 2);
        }
    }

    #[test]
    fn test_brush_deserialize() {
        let brush: Brush = serde_json::from_str(r#"{"color":[0,0,255],"size":5}"#).unwrap();
        assert_eq!(brush.color, Bgr::new(255, 0, 0));
        assert_eq!(brush.size.get(), 5);

        assert!(serde_json::from_str::<Brush>(r#"{"size":4}"#).is_err());

        let brush: Brush = serde_json::from_str("{}").unwrap();
        assert_eq!(brush, Brush::default());
        assert_eq!(brush.size.get(), 1);
    }
}

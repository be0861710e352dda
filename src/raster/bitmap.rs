use super::{brush::Bgr, canvas::Canvas};
use crate::{
    err_new,
    error::{Kind, Result},
};
use image::{Rgb, RgbImage};
use std::ops::{Deref, DerefMut};

/// 每个像素占用的字节数（B、G、R）
pub const BYTES_PER_PIXEL: usize = 3;

/// 24 位位图的像素区：按行存放，每像素 B、G、R 三个字节。
///
/// `Container` 可以是调用方持有的 `&mut [u8]`，也可以是 `Vec<u8>`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap<Container> {
    width: u32,
    height: u32,
    data: Container,
}

impl Bitmap<Vec<u8>> {
    /// 创建一个全黑的位图。
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }
}

impl<Container> Bitmap<Container>
where
    Container: Deref<Target = [u8]>,
{
    /// 包装一段已分配好的像素缓冲。
    ///
    /// # Parameters
    /// - `width`: 每行像素数。
    /// - `height`: 行数。
    /// - `data`: 长度必须等于 `width * height * 3`。
    ///
    /// # Errors
    /// - 缓冲长度不符时返回 `Kind::BufferSizeMismatch`。
    ///
    pub fn from_raw(width: u32, height: u32, data: Container) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL));
        if expected != Some(data.len()) {
            return Err(err_new!(
                Kind::BufferSizeMismatch,
                &format!(
                    "buffer of {} bytes does not hold {width}x{height} pixels",
                    data.len()
                )
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Container {
        self.data
    }

    fn offset(&self, row: u32, col: u32) -> usize {
        (row as usize * self.width as usize + col as usize) * BYTES_PER_PIXEL
    }

    /// 转为 `image::RgbImage`，通道换成 R、G、B，行顺序与缓冲一致。
    #[must_use]
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |col, row| {
            let i = self.offset(row, col);
            Rgb([self.data[i + 2], self.data[i + 1], self.data[i]])
        })
    }
}

impl<Container> Bitmap<Container>
where
    Container: Deref<Target = [u8]> + DerefMut,
{
    pub fn fill(&mut self, color: Bgr) {
        for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.copy_from_slice(&color.0);
        }
    }
}

impl<Container> Canvas for Bitmap<Container>
where
    Container: Deref<Target = [u8]> + DerefMut,
{
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn get_pixel(&self, row: u32, col: u32) -> Bgr {
        assert!(
            self.in_bounds(row, col),
            "pixel ({row}, {col}) out of bounds for {}x{} bitmap",
            self.width,
            self.height
        );
        let i = self.offset(row, col);
        Bgr([self.data[i], self.data[i + 1], self.data[i + 2]])
    }

    fn draw_pixel(&mut self, row: u32, col: u32, color: Bgr) {
        if !self.in_bounds(row, col) {
            return;
        }
        let i = self.offset(row, col);
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_checks_length() {
        let mut buf = vec![0u8; 4 * 3 * 3];
        assert!(Bitmap::from_raw(4, 3, buf.as_mut_slice()).is_ok());

        let err = Bitmap::from_raw(4, 4, buf.as_mut_slice()).unwrap_err();
        assert_eq!(err.kind(), &Kind::BufferSizeMismatch);

        let err = Bitmap::from_raw(u32::MAX, u32::MAX, Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.kind(), &Kind::BufferSizeMismatch);
    }

    #[test]
    fn test_draw_pixel_writes_bgr_bytes() {
        let mut buf = vec![0u8; 3 * 2 * 3];
        {
            let mut bmp = Bitmap::from_raw(3, 2, buf.as_mut_slice()).unwrap();
            bmp.draw_pixel(1, 2, Bgr::new(0xAA, 0xBB, 0xCC));
            bmp.draw_pixel(2, 0, Bgr::new(1, 1, 1));
            bmp.draw_pixel(0, 3, Bgr::new(1, 1, 1));
        }
        let offset = (3 + 2) * 3;
        assert_eq!(&buf[offset..offset + 3], &[0xCC, 0xBB, 0xAA]);
        assert_eq!(buf.iter().filter(|&&b| b != 0).count(), 3);
    }

    #[test]
    fn test_fill_and_to_rgb_image() {
        let mut bmp = Bitmap::new(2, 2);
        bmp.fill(Bgr::new(1, 2, 3));
        bmp.draw_pixel(1, 0, Bgr::new(9, 8, 7));
        assert_eq!(&bmp.as_raw()[..3], &[3, 2, 1]);

        let img = bmp.to_rgb_image();
        assert_eq!(*img.get_pixel(0, 0), Rgb([1, 2, 3]));
        assert_eq!(*img.get_pixel(0, 1), Rgb([9, 8, 7]));
        assert_eq!(bmp.get_pixel(1, 0), Bgr::new(9, 8, 7));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_pixel_out_of_bounds() {
        Bitmap::new(2, 2).get_pixel(2, 0);
    }
}

use super::brush::Bgr;
use image::{Rgb, RgbImage};

/// A surface that can be drawn on, addressed by `(row, col)`.
///
/// `row` is bounded by `height()`, `col` by `width()`.
pub trait Canvas {
    /// The width and height of this canvas.
    fn dimensions(&self) -> (u32, u32);

    /// The width of this canvas.
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    /// The height of this canvas.
    fn height(&self) -> u32 {
        self.dimensions().1
    }

    /// Returns the pixel located at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    fn get_pixel(&self, row: u32, col: u32) -> Bgr;

    /// Set the pixel at (row, col) to color.
    ///
    /// Out of bounds coordinates are ignored.
    fn draw_pixel(&mut self, row: u32, col: u32, color: Bgr);

    /// Whether `(row, col)` lies on this canvas.
    fn in_bounds(&self, row: u32, col: u32) -> bool {
        let (width, height) = self.dimensions();
        row < height && col < width
    }
}

impl Canvas for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        image::GenericImageView::dimensions(self)
    }

    fn get_pixel(&self, row: u32, col: u32) -> Bgr {
        let Rgb([r, g, b]) = *image::ImageBuffer::get_pixel(self, col, row);
        Bgr::new(r, g, b)
    }

    fn draw_pixel(&mut self, row: u32, col: u32, color: Bgr) {
        if let Some(pixel) = self.get_pixel_mut_checked(col, row) {
            *pixel = color.into();
        }
    }
}

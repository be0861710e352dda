//! 画笔式光栅化：在 24 位位图像素缓冲上画点、线、矩形和三角形。

mod bitmap;
mod brush;
mod canvas;
mod painter;
mod point;

pub use self::{
    bitmap::{Bitmap, BYTES_PER_PIXEL},
    brush::{Bgr, Brush, BrushSize},
    canvas::Canvas,
    painter::{Painter, PainterBuilder},
    point::Point,
};

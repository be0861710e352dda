pub mod command;
pub mod error;
pub mod prelude;
pub mod raster;

pub use command::{Command, Script};
pub use raster::{Bgr, Bitmap, Brush, BrushSize, Canvas, Painter, PainterBuilder, Point};

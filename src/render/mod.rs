pub mod axis;
pub mod geometry;
pub mod palette;
pub mod pixel_buffer;
pub mod waterfall;

pub use axis::{AxisLayout, is_grid_line};
pub use geometry::Geometry;
pub use palette::Palette;
pub use pixel_buffer::{PixelBuffer, Rgb, hex_rgb};
pub use waterfall::WaterfallCompositor;

use super::axis::is_grid_line;
use super::geometry::Geometry;
use super::palette::Palette;
use super::pixel_buffer::{PixelBuffer, Rgb};
use crate::analyzer::SpectrumSource;

/// The scrolling engine. Owns the canvas pixel buffer for the session and,
/// once per tick while recording, shifts the plot region one pixel left and
/// paints the newest magnitude frame into the leading column.
pub struct WaterfallCompositor {
    geom: Geometry,
    band_width: f64,
    palette: Palette,
    buffer: PixelBuffer,
    scratch: Vec<u8>,
    background: Rgb,
    gridline: Rgb,
    starved: bool,
}

impl WaterfallCompositor {
    pub fn new(geom: Geometry, band_width: f64, background: Rgb, gridline: Rgb) -> Self {
        Self {
            geom,
            band_width,
            palette: Palette::jet(),
            buffer: PixelBuffer::new(geom.width, geom.height, background),
            scratch: vec![0; (geom.plot_width() - 1) * 3],
            background,
            gridline,
            starved: false,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    /// Advance the waterfall by one column: scroll, then paint the frame the
    /// analyzer hands back. When no frame is ready the shift stands and the
    /// paint is skipped; that is a transient condition, reported once per
    /// stall, never fatal.
    pub fn tick(&mut self, source: &mut dyn SpectrumSource) {
        self.shift_left_one_column();

        match source.magnitudes() {
            Some(frame) => {
                self.paint_leading_column(frame);
                self.starved = false;
            }
            None => {
                if !self.starved {
                    eprintln!("Warning: no capture data this tick; column skipped");
                    self.starved = true;
                }
            }
        }
    }

    /// Drop the oldest plot column by moving the kept history one pixel left.
    /// Each row is staged through a scratch buffer so the read is never
    /// overtaken by the write.
    fn shift_left_one_column(&mut self) {
        let first = self.geom.first_plot_column();
        let last = self.geom.leading_column();
        let top = self.geom.row_for_bin(self.geom.plot_height() - 1);
        let bottom = self.geom.axis_row();

        for y in top..=bottom {
            self.scratch
                .copy_from_slice(self.buffer.row_span(y, first + 1, last));
            self.buffer
                .row_span_mut(y, first, last - 1)
                .copy_from_slice(&self.scratch);
        }
    }

    /// Write the new rightmost column, ascending frequency upward. Gridline
    /// rows take the overlay color over whatever the magnitude would map to;
    /// rows beyond the frame length take the background color.
    fn paint_leading_column(&mut self, frame: &[u8]) {
        let x = self.geom.leading_column();
        for i in 0..self.geom.plot_height() {
            let color = if is_grid_line(i, self.band_width) {
                self.gridline
            } else if i < frame.len() {
                self.palette.color(frame[i])
            } else {
                self.background
            };
            self.buffer.set_px(x, self.geom.row_for_bin(i), color);
        }
    }
}

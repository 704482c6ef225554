use super::geometry::Geometry;
use super::pixel_buffer::{PixelBuffer, Rgb};

/// True when plot row `i` is the row nearest a multiple of 1000 Hz.
#[inline]
pub fn is_grid_line(row: usize, band_width: f64) -> bool {
    (row as f64 * band_width) % 1000.0 < band_width
}

/// One frequency label, anchored just left of the plot region.
/// `x` is the right edge of the text; `y` its vertical center.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabel {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// Static axis layout: label placements and the L-shaped border.
///
/// Computed once at startup from the band width and plot height; never
/// recomputed per tick. The border lines are rasterized straight into the
/// pixel buffer, while the labels are drawn as text by the widget's draw
/// callback at the positions computed here.
pub struct AxisLayout {
    geom: Geometry,
    labels: Vec<AxisLabel>,
}

impl AxisLayout {
    pub fn compute(geom: Geometry, band_width: f64) -> Self {
        let mut labels = Vec::new();
        for i in 0..geom.plot_height() {
            if is_grid_line(i, band_width) {
                let hz = (i as f64 * band_width / 1000.0).floor() as i64 * 1000;
                labels.push(AxisLabel {
                    text: format!("{}Hz", hz),
                    x: (geom.offset_h - 8) as i32,
                    y: geom.row_for_bin(i) as i32,
                });
            }
        }
        Self { geom, labels }
    }

    pub fn labels(&self) -> &[AxisLabel] {
        &self.labels
    }

    /// Rasterize the two static border lines: horizontal along the bottom of
    /// the plot region, vertical along its left edge.
    pub fn draw_borders(&self, buf: &mut PixelBuffer, color: Rgb) {
        let geom = &self.geom;
        buf.hline(geom.axis_row(), geom.offset_h, geom.width - geom.offset_h, color);
        buf.vline(geom.offset_h, geom.offset_v, geom.axis_row(), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 44100 Hz sample rate / 2048-sample window
    const BAND_WIDTH: f64 = 21.533203125;

    #[test]
    fn test_gridline_rows_at_default_rate() {
        let rows: Vec<usize> = (0..320).filter(|&i| is_grid_line(i, BAND_WIDTH)).collect();
        assert_eq!(rows, vec![0, 47, 93, 140, 186, 233, 279]);
    }

    #[test]
    fn test_gridline_period_matches_band_width() {
        // One gridline per 1000 Hz: spacing is 1000/band_width rows, +-1.
        let rows: Vec<usize> = (0..2000).filter(|&i| is_grid_line(i, BAND_WIDTH)).collect();
        let period = 1000.0 / BAND_WIDTH;
        for pair in rows.windows(2) {
            let gap = (pair[1] - pair[0]) as f64;
            assert!((gap - period).abs() <= 1.0, "gap {} vs period {}", gap, period);
        }
    }

    #[test]
    fn test_labels_ascend_from_bottom() {
        let geom = Geometry::new(720, 480);
        let layout = AxisLayout::compute(geom, BAND_WIDTH);

        let texts: Vec<&str> = layout.labels().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["0Hz", "1000Hz", "2000Hz", "3000Hz", "4000Hz", "5000Hz", "6000Hz"]
        );

        // Bottom row (0 Hz) sits at the axis row; higher frequencies above it
        assert_eq!(layout.labels()[0].y, 400);
        for pair in layout.labels().windows(2) {
            assert!(pair[1].y < pair[0].y);
        }
    }

    #[test]
    fn test_layout_is_idempotent() {
        let geom = Geometry::new(720, 480);
        let first = AxisLayout::compute(geom, BAND_WIDTH);
        let second = AxisLayout::compute(geom, BAND_WIDTH);
        assert_eq!(first.labels(), second.labels());
    }

    #[test]
    fn test_borders_form_an_l() {
        let geom = Geometry::new(720, 480);
        let layout = AxisLayout::compute(geom, BAND_WIDTH);
        let mut buf = PixelBuffer::new(720, 480, (0, 0, 0));

        layout.draw_borders(&mut buf, (255, 255, 255));

        // Horizontal line along the plot bottom
        assert_eq!(buf.px(120, 400), (255, 255, 255));
        assert_eq!(buf.px(600, 400), (255, 255, 255));
        // Vertical line along the plot left edge
        assert_eq!(buf.px(120, 80), (255, 255, 255));
        assert_eq!(buf.px(120, 399), (255, 255, 255));
        // Plot interior untouched
        assert_eq!(buf.px(300, 200), (0, 0, 0));
    }
}

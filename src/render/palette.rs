use super::pixel_buffer::Rgb;

/// 256-shade "jet" palette: one entry per possible magnitude byte, so the
/// per-pixel lookup is a plain index with no interpolation at paint time.
pub struct Palette {
    table: [Rgb; 256],
}

impl Palette {
    /// Build the jet colormap: dark blue through cyan and yellow to dark red,
    /// piecewise-linear between the classic stop table.
    pub fn jet() -> Self {
        // Jet gradient stops: (position, r, g, b)
        const STOPS: [(f32, f32, f32, f32); 6] = [
            (0.000, 0.0, 0.0, 131.0),   // dark blue
            (0.125, 0.0, 60.0, 170.0),  // blue
            (0.375, 5.0, 255.0, 255.0), // cyan
            (0.625, 255.0, 255.0, 0.0), // yellow
            (0.875, 250.0, 0.0, 0.0),   // red
            (1.000, 128.0, 0.0, 0.0),   // dark red
        ];

        let mut table = [(0, 0, 0); 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let t = i as f32 / 255.0;

            // Find the two stops we're between
            let mut idx = 0;
            for k in 1..STOPS.len() - 1 {
                if t < STOPS[k].0 {
                    break;
                }
                idx = k;
            }

            let (pos0, r0, g0, b0) = STOPS[idx];
            let (pos1, r1, g1, b1) = STOPS[idx + 1];
            let seg_t = ((t - pos0) / (pos1 - pos0)).clamp(0.0, 1.0);

            *entry = (
                (r0 + (r1 - r0) * seg_t) as u8,
                (g0 + (g1 - g0) * seg_t) as u8,
                (b0 + (b1 - b0) * seg_t) as u8,
            );
        }

        Self { table }
    }

    /// Color for a magnitude byte. Total over the input domain.
    #[inline]
    pub fn color(&self, magnitude: u8) -> Rgb {
        self.table[magnitude as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_endpoints() {
        let palette = Palette::jet();
        assert_eq!(palette.color(0), (0, 0, 131));
        assert_eq!(palette.color(255), (128, 0, 0));
    }

    #[test]
    fn test_all_entries_distinct() {
        let palette = Palette::jet();
        let unique: HashSet<Rgb> = (0..=255).map(|m| palette.color(m)).collect();
        assert_eq!(unique.len(), 256);
    }

    #[test]
    fn test_cool_to_warm() {
        let palette = Palette::jet();
        let (low_r, _, low_b) = palette.color(10);
        let (high_r, _, high_b) = palette.color(245);
        assert!(low_b > low_r);
        assert!(high_r > high_b);
    }

    #[test]
    fn test_lookup_is_deterministic() {
        let a = Palette::jet();
        let b = Palette::jet();
        for m in 0..=255u8 {
            assert_eq!(a.color(m), b.color(m));
        }
    }
}

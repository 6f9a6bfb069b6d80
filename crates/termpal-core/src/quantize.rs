use crate::colors::{Color, Rgb};
use crate::config::{QuantizerConfig, SearchRange};
use crate::table::PaletteTable;

/// Squared Euclidean distance between two colors in RGB space.
pub fn squared_distance(a: Rgb, b: Rgb) -> u32 {
    let sq = |x: u8, y: u8| {
        let d = i32::from(x) - i32::from(y);
        (d * d) as u32
    };
    sq(a.r, b.r) + sq(a.g, b.g) + sq(a.b, b.b)
}

/// Nearest-neighbor search over the palette.
///
/// Candidates are scanned in ascending index order and a candidate only
/// replaces the current best when strictly closer, so the lowest index wins
/// ties.
#[derive(Debug, Clone, Copy)]
pub struct Quantizer {
    table: &'static PaletteTable,
    range: SearchRange,
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new(QuantizerConfig::default())
    }
}

impl Quantizer {
    pub fn new(config: QuantizerConfig) -> Self {
        Self {
            table: PaletteTable::global(),
            range: config.search_range,
        }
    }

    pub fn search_range(&self) -> SearchRange {
        self.range
    }

    /// Closest palette index to `rgb` and its squared distance.
    pub fn nearest(&self, rgb: Rgb) -> (u8, u32) {
        let indices = self.range.indices();
        let first = *indices.start();
        let seed = (first, squared_distance(self.table.get(first), rgb));
        indices.skip(1).fold(seed, |best, c| {
            let d = squared_distance(self.table.get(c), rgb);
            if d < best.1 {
                (c, d)
            } else {
                best
            }
        })
    }

    pub fn quantize(&self, rgb: Rgb) -> u8 {
        self.nearest(rgb).0
    }
}

/// Quantize an RGB value to an xterm color index in 16-255.
pub fn quantize(r: u8, g: u8, b: u8) -> u8 {
    Quantizer::default().quantize(Rgb::new(r, g, b))
}

impl Color {
    /// Reduce to a palette index. Named and indexed colors keep their index.
    pub fn downsample(&self, quantizer: &Quantizer) -> u8 {
        match self {
            Self::Named(c) => c.to_index(),
            Self::Indexed(i) => *i,
            Self::Rgb(rgb) => quantizer.quantize(*rgb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{decode, NamedColor};
    use std::collections::HashSet;

    #[test]
    fn test_squared_distance() {
        assert_eq!(squared_distance(Rgb::new(0, 0, 0), Rgb::new(0, 0, 0)), 0);
        assert_eq!(
            squared_distance(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)),
            3 * 255 * 255
        );
        assert_eq!(squared_distance(Rgb::new(10, 20, 30), Rgb::new(7, 24, 30)), 25);
    }

    #[test]
    fn test_palette_distinct_above_basic16() {
        let colors: HashSet<Rgb> = (16..=255u8).map(decode).collect();
        // exact round trips depend on this
        assert_eq!(colors.len(), 240);
    }

    #[test]
    fn test_round_trip_exact_colors() {
        for i in 16..=255u8 {
            let c = decode(i);
            assert_eq!(quantize(c.r, c.g, c.b), i, "index {}", i);
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(quantize(0, 0, 0), 16);
        assert_eq!(quantize(255, 255, 255), 231);
    }

    #[test]
    fn test_known_quantizations() {
        // #FAB82A and #525252
        assert_eq!(quantize(0xfa, 0xb8, 0x2a), 214);
        assert_eq!(quantize(0x52, 0x52, 0x52), 239);
        let (index, dist) = Quantizer::default().nearest(Rgb::new(0x52, 0x52, 0x52));
        assert_eq!(index, 239);
        assert_eq!(dist, 3 * 4 * 4);
    }

    #[test]
    fn test_tie_goes_to_lower_index() {
        // (4,4,4) is 48 from both 16 (0,0,0) and 232 (8,8,8)
        assert_eq!(quantize(4, 4, 4), 16);
    }

    #[test]
    fn test_never_returns_basic16() {
        let q = Quantizer::default();
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(5) {
                for b in (0..=255u8).step_by(5) {
                    let index = q.quantize(Rgb::new(r, g, b));
                    assert!(index >= 16, "{} {} {} -> {}", r, g, b, index);
                }
            }
        }
        // bright blue resolves to the cube, not index 12
        assert!(quantize(92, 92, 255) >= 16);
    }

    #[test]
    fn test_full_range_includes_basic16() {
        let q = Quantizer::new(QuantizerConfig {
            search_range: SearchRange::Full,
        });
        assert_eq!(q.quantize(Rgb::new(0, 0, 0)), 0);
        assert_eq!(q.quantize(Rgb::new(92, 92, 255)), 12);
        assert_eq!(q.quantize(Rgb::new(255, 255, 255)), 15);
        assert_eq!(q.quantize(Rgb::new(8, 8, 8)), 232);
    }

    #[test]
    fn test_downsample() {
        let q = Quantizer::default();
        assert_eq!(Color::Named(NamedColor::Red).downsample(&q), 1);
        assert_eq!(Color::Indexed(42).downsample(&q), 42);
        assert_eq!(Color::Rgb(Rgb::new(255, 0, 0)).downsample(&q), 196);
    }
}

//! Rain drops and snowflakes.

use super::GLYPH_SPACING;
use crate::canvas::Canvas;
use crate::color::PaletteColor;

const GLYPH_COUNT: usize = 3;

const RAIN_WIDTH: f32 = 4.0;
/// Each drop falls 15 px while drifting 5 px left.
const RAIN_DROP: (f32, f32) = (-5.0, 15.0);

const SNOW_WIDTH: f32 = 3.0;
const SNOW_ARM: f32 = 5.0;
const SNOW_DROP: f32 = 10.0;

/// Draws three slanted blue rain drops, the first starting at `(x, y)`.
pub fn draw_rain(canvas: &mut Canvas, x: f32, y: f32) {
    for i in 0..GLYPH_COUNT {
        let dx = x + i as f32 * GLYPH_SPACING;
        canvas.stroke_line(
            (dx, y),
            (dx + RAIN_DROP.0, y + RAIN_DROP.1),
            RAIN_WIDTH,
            PaletteColor::Blue,
        );
    }
}

/// Draws three blue `+` snowflakes, the first centered 10 px below `(x, y)`.
pub fn draw_snow(canvas: &mut Canvas, x: f32, y: f32) {
    let cy = y + SNOW_DROP;
    for i in 0..GLYPH_COUNT {
        let cx = x + i as f32 * GLYPH_SPACING;
        canvas.stroke_line(
            (cx - SNOW_ARM, cy),
            (cx + SNOW_ARM, cy),
            SNOW_WIDTH,
            PaletteColor::Blue,
        );
        canvas.stroke_line(
            (cx, cy - SNOW_ARM),
            (cx, cy + SNOW_ARM),
            SNOW_WIDTH,
            PaletteColor::Blue,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rain_drops_are_evenly_spaced() {
        let mut canvas = Canvas::new();
        draw_rain(&mut canvas, 35.0, 70.0);

        // Midpoint of each drop sits 2-3 px left of its start column.
        for start in [35u32, 50, 65] {
            assert_eq!(canvas.color_at(start - 3, 78), Some(PaletteColor::Blue));
        }
        // Nothing between the drops.
        assert_eq!(canvas.color_at(40, 78), Some(PaletteColor::White));
        assert_eq!(canvas.color_at(55, 78), Some(PaletteColor::White));
    }

    #[test]
    fn rain_uses_only_blue() {
        let mut canvas = Canvas::new();
        draw_rain(&mut canvas, 35.0, 70.0);

        let colors = canvas.colors();
        assert!(colors.contains(&PaletteColor::Blue.rgb()));
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn snowflakes_are_crosses() {
        let mut canvas = Canvas::new();
        draw_snow(&mut canvas, 35.0, 70.0);

        for cx in [35u32, 50, 65] {
            assert_eq!(canvas.color_at(cx, 80), Some(PaletteColor::Blue));
            assert_eq!(canvas.color_at(cx, 76), Some(PaletteColor::Blue));
            assert_eq!(canvas.color_at(cx, 84), Some(PaletteColor::Blue));
            assert_eq!(canvas.color_at(cx - 4, 80), Some(PaletteColor::Blue));
            assert_eq!(canvas.color_at(cx + 4, 80), Some(PaletteColor::Blue));
            // Diagonal neighbours stay empty.
            assert_eq!(canvas.color_at(cx + 4, 76), Some(PaletteColor::White));
        }
    }
}

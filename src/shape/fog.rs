//! Wavy mist bands.

use crate::canvas::Canvas;
use crate::color::PaletteColor;

const BAND_COUNT: usize = 3;
const BAND_SPACING: f32 = 12.0;
const BAND_LENGTH: u32 = 54;
const BAND_WIDTH: f32 = 2.0;

const WAVE_AMPLITUDE: f32 = 4.0;
/// Radians of phase per horizontal pixel.
const WAVE_FREQUENCY: f32 = 0.2;
/// Horizontal distance between sampled wave points.
const WAVE_STEP: usize = 2;

/// Returns the sampled points of one fog band starting at `(x, base_y)`.
pub fn band_points(x: f32, base_y: f32) -> Vec<(f32, f32)> {
    (0..=BAND_LENGTH)
        .step_by(WAVE_STEP)
        .map(|px| {
            let px = px as f32;
            (
                x + px,
                base_y + WAVE_AMPLITUDE * (px * WAVE_FREQUENCY).sin(),
            )
        })
        .collect()
}

/// Draws three black sine-wave bands, the first starting at `(x, y)`.
pub fn draw_fog(canvas: &mut Canvas, x: f32, y: f32) {
    for i in 0..BAND_COUNT {
        let points = band_points(x, y + i as f32 * BAND_SPACING);
        canvas.stroke_polyline(&points, BAND_WIDTH, PaletteColor::Black);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_is_sampled_every_two_pixels() {
        let points = band_points(20.0, 35.0);
        assert_eq!(points.len(), 28);
        assert_eq!(points[0], (20.0, 35.0));
        assert_eq!(points[27].0, 74.0);
        assert!(
            points
                .iter()
                .all(|&(_, y)| (y - 35.0).abs() <= WAVE_AMPLITUDE)
        );
    }

    #[test]
    fn draws_three_separate_bands() {
        let mut canvas = Canvas::new();
        draw_fog(&mut canvas, 20.0, 35.0);

        let column: Vec<bool> = (0..canvas.height())
            .map(|y| canvas.color_at(47, y) == Some(PaletteColor::Black))
            .collect();
        let runs = column
            .windows(2)
            .filter(|w| !w[0] && w[1])
            .count();
        assert_eq!(runs, 3);
    }
}

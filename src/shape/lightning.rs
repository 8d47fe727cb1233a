//! Zig-zag lightning bolt.

use crate::canvas::Canvas;
use crate::color::PaletteColor;

const OUTLINE_WIDTH: f32 = 6.0;
const FILL_WIDTH: f32 = 2.0;

/// Returns the bolt path for an anchor at the top of the bolt.
pub fn bolt_points(x: f32, y: f32) -> [(f32, f32); 4] {
    [
        (x, y),
        (x - 15.0, y + 25.0),
        (x + 5.0, y + 25.0),
        (x - 5.0, y + 50.0),
    ]
}

/// Draws a yellow lightning bolt with a red outline, starting at `(x, y)`.
pub fn draw_lightning(canvas: &mut Canvas, x: f32, y: f32) {
    let points = bolt_points(x, y);
    canvas.stroke_polyline(&points, OUTLINE_WIDTH, PaletteColor::Red);
    canvas.stroke_polyline(&points, FILL_WIDTH, PaletteColor::Yellow);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_runs_inside_outline() {
        let mut canvas = Canvas::new();
        draw_lightning(&mut canvas, 48.0, 20.0);

        // Horizontal middle stroke at y = 45, from x = 33 to x = 53.
        assert_eq!(canvas.color_at(43, 45), Some(PaletteColor::Yellow));
        assert_eq!(canvas.color_at(43, 43), Some(PaletteColor::Red));
        assert_eq!(canvas.color_at(43, 47), Some(PaletteColor::Red));
        assert_eq!(canvas.color_at(43, 50), Some(PaletteColor::White));
    }

    #[test]
    fn bolt_zig_zags_down() {
        let points = bolt_points(48.0, 65.0);
        assert_eq!(points[0], (48.0, 65.0));
        assert_eq!(points[3], (43.0, 115.0));
        assert!(points.windows(2).all(|w| w[1].1 >= w[0].1));
    }
}

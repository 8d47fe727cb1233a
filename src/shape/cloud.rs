//! Puffy cloud built from overlapping circles.

use super::OUTLINE_MARGIN;
use crate::canvas::Canvas;
use crate::color::PaletteColor;

/// Cloud lobes as `(dx, dy, radius)` relative to the anchor, at scale 1.0.
///
/// Lobes are drawn in this order in both passes.
pub const CLOUD_LOBES: [(f32, f32, f32); 4] = [
    (0.0, 0.0, 20.0),
    (15.0, -10.0, 25.0),
    (35.0, 0.0, 20.0),
    (15.0, 5.0, 20.0),
];

/// Draws a white cloud with a black outline.
///
/// Every lobe offset and radius is multiplied by `scale`. All outlines are
/// painted before any fill, so the outline only survives on the silhouette
/// edge and lobes merge without seams.
pub fn draw_cloud(canvas: &mut Canvas, x: f32, y: f32, scale: f32) {
    let lobes = CLOUD_LOBES.map(|(dx, dy, r)| (x + dx * scale, y + dy * scale, r * scale));

    for (cx, cy, r) in lobes {
        canvas.fill_circle(cx, cy, r + OUTLINE_MARGIN, PaletteColor::Black);
    }
    for (cx, cy, r) in lobes {
        canvas.fill_circle(cx, cy, r, PaletteColor::White);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_is_seamless() {
        let mut canvas = Canvas::new();
        draw_cloud(&mut canvas, 25.0, 45.0, 1.0);

        // Points where neighbouring lobes overlap stay white.
        for (x, y) in [(25, 45), (33, 42), (40, 38), (52, 45), (45, 52)] {
            assert_eq!(canvas.color_at(x, y), Some(PaletteColor::White), "({x}, {y})");
        }
    }

    #[test]
    fn silhouette_has_black_outline() {
        let mut canvas = Canvas::new();
        draw_cloud(&mut canvas, 25.0, 45.0, 1.0);

        // Left edge of the first lobe: fill ends at x = 5, outline reaches x = 2.
        assert_eq!(canvas.color_at(3, 45), Some(PaletteColor::Black));
        assert_eq!(canvas.color_at(0, 45), Some(PaletteColor::White));
        // Top of the tallest lobe: fill ends at y = 10, outline reaches y = 7.
        assert_eq!(canvas.color_at(40, 8), Some(PaletteColor::Black));
    }

    #[test]
    fn scale_enlarges_lobes() {
        let mut small = Canvas::new();
        draw_cloud(&mut small, 25.0, 45.0, 1.0);
        let mut large = Canvas::new();
        draw_cloud(&mut large, 25.0, 45.0, 1.2);

        // Right edge of the third lobe moves from x = 80 to x = 91.
        assert_eq!(small.color_at(88, 45), Some(PaletteColor::White));
        assert_eq!(large.color_at(88, 45), Some(PaletteColor::White));
        assert_eq!(small.color_at(82, 45), Some(PaletteColor::Black));
        assert_eq!(large.color_at(82, 45), Some(PaletteColor::White));
    }
}

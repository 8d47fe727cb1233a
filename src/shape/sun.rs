//! Sun disc.

use super::OUTLINE_MARGIN;
use crate::canvas::Canvas;
use crate::color::PaletteColor;

/// Draws a yellow sun with a red rim, centered on `(x, y)`.
pub fn draw_sun(canvas: &mut Canvas, x: f32, y: f32, radius: f32) {
    canvas.fill_circle(x, y, radius + OUTLINE_MARGIN, PaletteColor::Red);
    canvas.fill_circle(x, y, radius, PaletteColor::Yellow);
}

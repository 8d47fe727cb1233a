//! Curling wind gusts.

use crate::canvas::Canvas;
use crate::color::PaletteColor;

const GUST_LENGTH: f32 = 35.0;
const GUST_WIDTH: f32 = 3.0;
const CURL_RADIUS: f32 = 10.0;
/// The curl sweeps clockwise from the top of its circle to just past the bottom.
const CURL_START: f32 = 270.0;
const CURL_END: f32 = 100.0;
/// Offset of the second gust relative to the first.
const SECOND_GUST: (f32, f32) = (15.0, 20.0);

/// Draws two blue gusts, each a horizontal stroke ending in a curl.
///
/// The first gust starts at `(x, y)`; the second is shifted right and down.
pub fn draw_wind(canvas: &mut Canvas, x: f32, y: f32) {
    draw_gust(canvas, x, y);
    draw_gust(canvas, x + SECOND_GUST.0, y + SECOND_GUST.1);
}

fn draw_gust(canvas: &mut Canvas, x: f32, y: f32) {
    let end = (x + GUST_LENGTH, y);
    canvas.stroke_line((x, y), end, GUST_WIDTH, PaletteColor::Blue);
    canvas.stroke_arc(
        end,
        CURL_RADIUS,
        CURL_START,
        CURL_END,
        GUST_WIDTH,
        PaletteColor::Blue,
    );
}

//! Drawing surface for icon rendering.
//!
//! [`Canvas`] wraps a `tiny_skia` pixmap and exposes the handful of drawing
//! operations the shape primitives need. All drawing is aliasing-free: a pixel
//! is either painted with the exact palette color or left untouched, so the
//! output never contains blended in-between colors.
//!
//! Coordinates are pixel indices. A shape anchored at `(x, y)` is centered on
//! the middle of pixel `(x, y)`. A disc of radius `r` is filled out to
//! `r + 0.5`, so it covers the inclusive box `[x - r, x + r]` on each axis,
//! the same pixels as an ellipse drawn into that bounding box.

use std::collections::BTreeSet;
use std::fmt;
use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use resvg::tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

use crate::color::{PaletteColor, pack_rgb565};
use crate::error::{Error, Result};

/// Width and height of an icon canvas, in pixels.
pub const ICON_SIZE: u32 = 96;

/// Angular step used to flatten arcs into polylines, in degrees.
const ARC_STEP_DEGREES: f32 = 5.0;

// ============================================================================
// Canvas
// ============================================================================

/// An RGB raster surface, initialized to white.
#[derive(Clone)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Creates a blank [`ICON_SIZE`]×[`ICON_SIZE`] icon canvas.
    pub fn new() -> Self {
        Self::with_size(ICON_SIZE, ICON_SIZE).expect("icon size is a valid surface size")
    }

    /// Creates a blank white canvas of arbitrary size.
    pub fn with_size(width: u32, height: u32) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height).ok_or(Error::Surface { width, height })?;
        let [r, g, b] = PaletteColor::White.rgb();
        pixmap.fill(Color::from_rgba8(r, g, b, 255));
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    // ---- Drawing ----

    /// Fills a disc centered on pixel `(cx, cy)`.
    ///
    /// A non-positive radius draws nothing.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: PaletteColor) {
        if radius <= 0.0 {
            return;
        }
        let Some(path) = PathBuilder::from_circle(cx + 0.5, cy + 0.5, radius + 0.5) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &solid_paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Strokes a straight segment between two pixel positions.
    pub fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: PaletteColor,
    ) {
        self.stroke_polyline(&[from, to], width, color);
    }

    /// Strokes an open polyline through the given pixel positions.
    ///
    /// Segments are joined with round joins and end in butt caps. Fewer than
    /// two points draws nothing.
    pub fn stroke_polyline(&mut self, points: &[(f32, f32)], width: f32, color: PaletteColor) {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() || width <= 0.0 {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(x0 + 0.5, y0 + 0.5);
        for &(x, y) in rest {
            pb.line_to(x + 0.5, y + 0.5);
        }
        let Some(path) = pb.finish() else {
            return;
        };

        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &solid_paint(color), &stroke, Transform::identity(), None);
    }

    /// Strokes a circular arc.
    ///
    /// Angles are in degrees, measured clockwise from the positive x axis
    /// (y grows downwards). The arc runs from `start` to `end`; an `end` smaller
    /// than `start` wraps past 360°. The stroke lies inside the circle of the
    /// given radius, so its outer edge touches the circle.
    pub fn stroke_arc(
        &mut self,
        center: (f32, f32),
        radius: f32,
        start: f32,
        end: f32,
        width: f32,
        color: PaletteColor,
    ) {
        let points = arc_points(center, (radius - width / 2.0).max(0.0), start, end);
        self.stroke_polyline(&points, width, color);
    }

    /// Copies another canvas onto this one with its top-left corner at `(x, y)`.
    ///
    /// Parts falling outside this canvas are clipped.
    pub fn blit(&mut self, src: &Canvas, x: i32, y: i32) {
        self.pixmap.draw_pixmap(
            x,
            y,
            src.pixmap.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    // ---- Inspection ----

    /// Returns the RGB value of a pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let px = self.pixmap.pixel(x, y)?.demultiply();
        Some([px.red(), px.green(), px.blue()])
    }

    /// Returns the palette color of a pixel.
    ///
    /// `None` if the pixel is outside the canvas or not a palette color.
    pub fn color_at(&self, x: u32, y: u32) -> Option<PaletteColor> {
        self.pixel(x, y).and_then(PaletteColor::from_rgb)
    }

    /// Returns the set of distinct RGB values present on the canvas.
    pub fn colors(&self) -> BTreeSet<[u8; 3]> {
        self.pixmap
            .pixels()
            .iter()
            .map(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue()]
            })
            .collect()
    }

    /// Returns `true` if every pixel is a palette color.
    pub fn is_palette_only(&self) -> bool {
        self.colors()
            .into_iter()
            .all(|rgb| PaletteColor::from_rgb(rgb).is_some())
    }

    // ---- Encoding ----

    /// Converts the canvas into an `image` RGB buffer.
    pub fn to_rgb_image(&self) -> RgbImage {
        let width = self.width();
        let pixels = self.pixmap.pixels();
        RgbImage::from_fn(width, self.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            Rgb([c.red(), c.green(), c.blue()])
        })
    }

    /// Encodes the canvas as a PNG file in memory.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.to_rgb_image()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Returns the canvas as RGB565 words, row-major.
    pub fn to_rgb565(&self) -> Vec<u16> {
        self.pixmap
            .pixels()
            .iter()
            .map(|px| {
                let c = px.demultiply();
                pack_rgb565([c.red(), c.green(), c.blue()])
            })
            .collect()
    }

    /// Encodes the canvas as raw little-endian RGB565 bytes, row-major.
    pub fn encode_rgb565(&self) -> Vec<u8> {
        self.to_rgb565()
            .into_iter()
            .flat_map(u16::to_le_bytes)
            .collect()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Canvas {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.pixmap.data() == other.pixmap.data()
    }
}

impl Eq for Canvas {}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn solid_paint(color: PaletteColor) -> Paint<'static> {
    let [r, g, b] = color.rgb();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, 255);
    paint.anti_alias = false;
    paint
}

/// Flattens an arc into points spaced at most [`ARC_STEP_DEGREES`] apart.
fn arc_points(center: (f32, f32), radius: f32, start: f32, end: f32) -> Vec<(f32, f32)> {
    let mut end = end;
    while end < start {
        end += 360.0;
    }
    let sweep = end - start;
    let steps = ((sweep / ARC_STEP_DEGREES).ceil() as usize).max(1);

    (0..=steps)
        .map(|i| {
            let angle = (start + sweep * i as f32 / steps as f32).to_radians();
            (
                center.0 + radius * angle.cos(),
                center.1 + radius * angle.sin(),
            )
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

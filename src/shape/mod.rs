//! Shape primitives for weather icons.
//!
//! Each primitive is a free function drawing one weather glyph onto a
//! [`Canvas`](crate::Canvas) at an anchor pixel. Primitives keep no state, can
//! be called any number of times on the same canvas, and only ever paint
//! palette colors.
//!
//! Filled shapes use an outline-then-fill technique: the shape is first drawn
//! enlarged by [`OUTLINE_MARGIN`] in the outline color, then at true size in
//! the fill color. Stroked shapes get the same effect from a wide outline
//! stroke followed by a narrow fill stroke along the same path.

pub mod cloud;
pub mod fog;
pub mod lightning;
pub mod precipitation;
pub mod sun;
pub mod wind;

pub use cloud::draw_cloud;
pub use fog::draw_fog;
pub use lightning::draw_lightning;
pub use precipitation::{draw_rain, draw_snow};
pub use sun::draw_sun;
pub use wind::draw_wind;

/// How far the outline pass extends past the fill, in pixels.
pub const OUTLINE_MARGIN: f32 = 3.0;

/// Horizontal distance between repeated glyphs (rain drops, snowflakes).
pub const GLYPH_SPACING: f32 = 15.0;

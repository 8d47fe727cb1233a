//! weather-icon-renderer: procedurally drawn weather icons
//!
//! This crate renders a fixed set of 96×96 weather icons (clear, partly
//! cloudy, cloudy, rain, snow, storm, fog, wind) from a small library of shape
//! primitives, using a closed six-color palette suitable for color e-paper
//! displays. Weather provider condition names such as `"heavy_rain"` or
//! `"mostly_clear"` resolve to one of these icons through a fixed catalog.
//!
//! # Example
//!
//! ```
//! use weather_icon_renderer::{Catalog, IconKind};
//!
//! let kind = Catalog::global().resolve("showers").unwrap();
//! assert_eq!(kind, IconKind::Rain);
//!
//! let canvas = kind.render();
//! assert_eq!((canvas.width(), canvas.height()), (96, 96));
//! assert!(canvas.is_palette_only());
//!
//! // Unknown names are an error, never a default icon.
//! assert!(Catalog::global().resolve("blizzard_tornado_combo").is_err());
//! ```
//!
//! # Composing Shapes
//!
//! Primitives draw onto any [`Canvas`], so custom compositions are possible:
//!
//! ```
//! use weather_icon_renderer::{Canvas, PaletteColor, shape};
//!
//! let mut canvas = Canvas::new();
//! shape::draw_sun(&mut canvas, 48.0, 48.0, 30.0);
//! shape::draw_cloud(&mut canvas, 30.0, 60.0, 0.8);
//!
//! assert_eq!(canvas.color_at(48, 20), Some(PaletteColor::Yellow));
//! let png = canvas.encode_png().unwrap();
//! assert!(!png.is_empty());
//! ```
//!
//! # Exporting
//!
//! [`Exporter`] writes every icon to a directory, configured through the
//! serializable [`ExportConfig`]. See the [`export`] module.

mod canvas;
mod catalog;
mod color;
mod error;
pub mod export;
mod icon;
mod recipe;
pub mod shape;

pub use canvas::{Canvas, ICON_SIZE};
pub use catalog::{CONDITIONS, Catalog, render_condition, resolve};
pub use color::PaletteColor;
pub use error::{Error, Result};
pub use export::{
    ExportConfig, ExportFormat, ExportReport, ExportedFile, Exporter, Manifest, ManifestEntry,
    OutputLayout, render_sheet,
};
pub use icon::{IconSet, RenderedIcon};
pub use recipe::IconKind;

//! Rendered icons and icon sets.
//!
//! A [`RenderedIcon`] pairs an identity with its finished canvas. An
//! [`IconSet`] groups rendered icons so each identity is rendered once and
//! then shared between every condition name that aliases it.

use crate::canvas::Canvas;
use crate::error::Result;
use crate::export::ExportFormat;
use crate::recipe::IconKind;

/// A single finished icon.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedIcon {
    /// The identity this icon was rendered from.
    pub kind: IconKind,

    /// The completed raster.
    pub canvas: Canvas,
}

impl RenderedIcon {
    /// Renders the recipe for `kind`.
    pub fn render(kind: IconKind) -> Self {
        Self {
            kind,
            canvas: kind.render(),
        }
    }

    /// Encodes the icon in the given file format.
    pub fn encode(&self, format: ExportFormat) -> Result<Vec<u8>> {
        match format {
            ExportFormat::Png => self.canvas.encode_png(),
            ExportFormat::Rgb565 => Ok(self.canvas.encode_rgb565()),
        }
    }
}

/// A collection of rendered icons, at most one per identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    /// The rendered icons.
    pub icons: Vec<RenderedIcon>,
}

impl IconSet {
    /// Creates a new empty icon set.
    pub fn new() -> Self {
        Self { icons: Vec::new() }
    }

    /// Renders every identity in [`IconKind::ALL`] order.
    pub fn render_all() -> Self {
        Self::from_icons(IconKind::ALL.into_iter().map(RenderedIcon::render).collect())
    }

    /// Creates an icon set from already rendered icons.
    pub fn from_icons(icons: Vec<RenderedIcon>) -> Self {
        Self { icons }
    }

    /// Adds an icon, replacing any existing icon of the same identity.
    pub fn add_icon(&mut self, icon: RenderedIcon) {
        match self.icons.iter_mut().find(|i| i.kind == icon.kind) {
            Some(existing) => *existing = icon,
            None => self.icons.push(icon),
        }
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Finds the icon for an identity.
    pub fn find(&self, kind: IconKind) -> Option<&RenderedIcon> {
        self.icons.iter().find(|icon| icon.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderedIcon> {
        self.icons.iter()
    }
}

impl IntoIterator for IconSet {
    type Item = RenderedIcon;
    type IntoIter = std::vec::IntoIter<RenderedIcon>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.into_iter()
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a RenderedIcon;
    type IntoIter = std::slice::Iter<'a, RenderedIcon>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}

//! Condition-name resolution.
//!
//! Weather providers describe conditions with their own strings
//! (`"heavy_rain"`, `"mostly_clear"`, ...). The catalog maps each supported
//! string to exactly one [`IconKind`]. Lookup is exact and case-sensitive, and
//! there is no fallback icon: a name missing from the table is an error, so an
//! incomplete table shows up instead of being papered over.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::recipe::IconKind;

/// Every supported condition name and the icon it renders as.
pub const CONDITIONS: &[(&str, IconKind)] = &[
    ("clear_day", IconKind::Clear),
    ("clear_night", IconKind::Clear),
    ("sunny", IconKind::Clear),
    ("partly_cloudy", IconKind::PartlyCloudy),
    ("partly_cloudy_day", IconKind::PartlyCloudy),
    ("partly_cloudy_night", IconKind::PartlyCloudy),
    ("partly_clear", IconKind::PartlyCloudy),
    ("mostly_clear", IconKind::PartlyCloudy),
    ("cloudy", IconKind::Cloudy),
    ("mostly_cloudy", IconKind::Cloudy),
    ("rain", IconKind::Rain),
    ("showers", IconKind::Rain),
    ("heavy_rain", IconKind::Rain),
    ("light_rain", IconKind::Rain),
    ("scattered_showers", IconKind::Rain),
    ("snow", IconKind::Snow),
    ("snow_showers", IconKind::Snow),
    ("flurries", IconKind::Snow),
    ("thunderstorm", IconKind::Storm),
    ("fog", IconKind::Fog),
    ("mist", IconKind::Fog),
    ("haze", IconKind::Fog),
    ("wind", IconKind::Wind),
    ("windy", IconKind::Wind),
];

static GLOBAL: LazyLock<Catalog> = LazyLock::new(Catalog::new);

// ============================================================================
// Catalog
// ============================================================================

/// Read-only mapping from condition names to icon identities.
#[derive(Debug, Clone)]
pub struct Catalog {
    index: HashMap<&'static str, IconKind>,
}

impl Catalog {
    /// Builds a catalog from [`CONDITIONS`].
    pub fn new() -> Self {
        let index: HashMap<_, _> = CONDITIONS.iter().copied().collect();
        debug_assert_eq!(index.len(), CONDITIONS.len(), "duplicate condition name");
        Self { index }
    }

    /// Returns the process-wide catalog, built on first use.
    pub fn global() -> &'static Catalog {
        &GLOBAL
    }

    /// Resolves a condition name to its icon identity.
    pub fn resolve(&self, condition: &str) -> Result<IconKind> {
        self.index
            .get(condition)
            .copied()
            .ok_or_else(|| Error::UnknownCondition(condition.to_string()))
    }

    /// Resolves a condition name and renders its icon.
    pub fn render(&self, condition: &str) -> Result<Canvas> {
        self.resolve(condition).map(IconKind::render)
    }

    /// Returns `true` if the condition name has an entry.
    pub fn contains(&self, condition: &str) -> bool {
        self.index.contains_key(condition)
    }

    /// Iterates over all entries in table order.
    pub fn conditions(&self) -> impl Iterator<Item = (&'static str, IconKind)> + '_ {
        CONDITIONS.iter().copied()
    }

    /// Iterates over the condition names that resolve to `kind`, in table order.
    pub fn aliases(&self, kind: IconKind) -> impl Iterator<Item = &'static str> + '_ {
        self.conditions()
            .filter(move |&(_, k)| k == kind)
            .map(|(name, _)| name)
    }

    /// Number of condition names.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves a condition name using the global catalog.
pub fn resolve(condition: &str) -> Result<IconKind> {
    Catalog::global().resolve(condition)
}

/// Resolves a condition name using the global catalog and renders its icon.
pub fn render_condition(condition: &str) -> Result<Canvas> {
    Catalog::global().render(condition)
}

// ============================================================================
// Tests
// ============================================================================

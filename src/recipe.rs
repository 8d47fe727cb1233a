//! Icon recipes: the fixed composition of each canonical weather icon.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::Error;
use crate::export::ExportFormat;
use crate::shape::{draw_cloud, draw_fog, draw_lightning, draw_rain, draw_snow, draw_sun, draw_wind};

// ============================================================================
// IconKind
// ============================================================================

/// A canonical icon identity.
///
/// Every condition name in the [`Catalog`](crate::Catalog) resolves to one of
/// these. Each identity has exactly one recipe, so rendering the same identity
/// always produces the same pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum IconKind {
    Clear,
    PartlyCloudy,
    Cloudy,
    Rain,
    Snow,
    Storm,
    Fog,
    Wind,
}

impl IconKind {
    /// Every identity, in catalog order.
    pub const ALL: [IconKind; 8] = [
        Self::Clear,
        Self::PartlyCloudy,
        Self::Cloudy,
        Self::Rain,
        Self::Snow,
        Self::Storm,
        Self::Fog,
        Self::Wind,
    ];

    /// Canonical snake_case name, also used as the output file stem.
    pub fn name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::PartlyCloudy => "partly_cloudy",
            Self::Cloudy => "cloudy",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Storm => "storm",
            Self::Fog => "fog",
            Self::Wind => "wind",
        }
    }

    /// Output file name for this identity, e.g. `rain.png`.
    pub fn file_name(self, format: ExportFormat) -> String {
        format!("{}.{}", self.name(), format.extension())
    }

    /// Draws this icon's recipe onto an existing canvas.
    ///
    /// Shapes are painted back to front; later shapes cover earlier ones.
    pub fn draw(self, canvas: &mut Canvas) {
        match self {
            Self::Clear => draw_sun(canvas, 48.0, 48.0, 30.0),
            Self::PartlyCloudy => {
                draw_sun(canvas, 65.0, 30.0, 20.0);
                draw_cloud(canvas, 20.0, 55.0, 1.0);
            }
            Self::Cloudy => draw_cloud(canvas, 25.0, 45.0, 1.2),
            Self::Rain => {
                draw_cloud(canvas, 25.0, 35.0, 1.1);
                draw_rain(canvas, 35.0, 70.0);
            }
            Self::Snow => {
                draw_cloud(canvas, 25.0, 35.0, 1.1);
                draw_snow(canvas, 35.0, 70.0);
            }
            Self::Storm => {
                draw_cloud(canvas, 25.0, 35.0, 1.1);
                // Hangs from the cloud's lower edge and runs off the bottom.
                draw_lightning(canvas, 48.0, 65.0);
            }
            Self::Fog => draw_fog(canvas, 20.0, 35.0),
            Self::Wind => draw_wind(canvas, 20.0, 40.0),
        }
    }

    /// Renders this icon onto a fresh white canvas.
    pub fn render(self) -> Canvas {
        let mut canvas = Canvas::new();
        self.draw(&mut canvas);
        canvas
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconKind {
    type Err = Error;

    /// Parses a canonical identity name. Condition aliases are not accepted;
    /// use [`Catalog::resolve`](crate::Catalog::resolve) for those.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownIcon(s.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ICON_SIZE;
    use crate::color::PaletteColor;
    use std::collections::BTreeSet;

    fn palette_set(colors: &[PaletteColor]) -> BTreeSet<[u8; 3]> {
        colors.iter().map(|c| c.rgb()).collect()
    }

    #[test]
    fn every_recipe_is_deterministic_and_palette_only() {
        for kind in IconKind::ALL {
            let first = kind.render();
            let second = kind.render();
            assert_eq!(first, second, "{kind} is not deterministic");
            assert_eq!((first.width(), first.height()), (ICON_SIZE, ICON_SIZE));
            assert!(first.is_palette_only(), "{kind} has off-palette pixels");
        }
    }

    #[test]
    fn recipes_are_distinct() {
        let rendered: Vec<_> = IconKind::ALL.iter().map(|k| k.render()).collect();
        for (i, a) in rendered.iter().enumerate() {
            for b in &rendered[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn clear_is_a_rimmed_sun() {
        let canvas = IconKind::Clear.render();

        assert_eq!(
            canvas.colors(),
            palette_set(&[PaletteColor::White, PaletteColor::Red, PaletteColor::Yellow])
        );
        assert_eq!(canvas.color_at(48, 48), Some(PaletteColor::Yellow));

        // 33 px above the center: inside the rim, outside the fill.
        let rim = canvas.color_at(48, 15);
        assert!(matches!(rim, Some(PaletteColor::Red | PaletteColor::White)));
        assert_ne!(rim, Some(PaletteColor::Yellow));
        assert_eq!(canvas.color_at(48, 5), Some(PaletteColor::White));
    }

    #[test]
    fn partly_cloudy_cloud_covers_sun() {
        // In the overlap, the sun alone would be yellow...
        let mut sun_only = Canvas::new();
        draw_sun(&mut sun_only, 65.0, 30.0, 20.0);
        assert_eq!(sun_only.color_at(58, 40), Some(PaletteColor::Yellow));

        // ...but the cloud is drawn on top.
        let canvas = IconKind::PartlyCloudy.render();
        assert_eq!(canvas.color_at(58, 40), Some(PaletteColor::White));

        // Sun remains visible outside the cloud.
        assert_eq!(canvas.color_at(70, 22), Some(PaletteColor::Yellow));
        assert_eq!(
            canvas.colors(),
            palette_set(&[
                PaletteColor::White,
                PaletteColor::Black,
                PaletteColor::Red,
                PaletteColor::Yellow,
            ])
        );
    }

    #[test]
    fn cloudy_is_black_and_white() {
        let canvas = IconKind::Cloudy.render();
        assert_eq!(
            canvas.colors(),
            palette_set(&[PaletteColor::White, PaletteColor::Black])
        );
    }

    #[test]
    fn precipitation_falls_below_cloud() {
        let rain = IconKind::Rain.render();
        assert_eq!(rain.color_at(32, 78), Some(PaletteColor::Blue));

        let snow = IconKind::Snow.render();
        assert_eq!(snow.color_at(35, 77), Some(PaletteColor::Blue));
        assert_eq!(snow.color_at(50, 80), Some(PaletteColor::Blue));

        // Same cloud in both.
        assert_eq!(rain.color_at(45, 30), Some(PaletteColor::White));
        assert_eq!(snow.color_at(45, 30), Some(PaletteColor::White));
    }

    #[test]
    fn storm_bolt_is_drawn_over_everything() {
        let canvas = IconKind::Storm.render();
        assert_eq!(canvas.color_at(43, 90), Some(PaletteColor::Yellow));
        assert_eq!(canvas.color_at(43, 88), Some(PaletteColor::Red));
        assert_eq!(
            canvas.colors(),
            palette_set(&[
                PaletteColor::White,
                PaletteColor::Black,
                PaletteColor::Red,
                PaletteColor::Yellow,
            ])
        );
    }

    #[test]
    fn fog_and_wind_have_no_cloud() {
        assert_eq!(
            IconKind::Fog.render().colors(),
            palette_set(&[PaletteColor::White, PaletteColor::Black])
        );
        assert_eq!(
            IconKind::Wind.render().colors(),
            palette_set(&[PaletteColor::White, PaletteColor::Blue])
        );
    }

    #[test]
    fn parses_canonical_names_only() {
        for kind in IconKind::ALL {
            assert_eq!(kind.name().parse::<IconKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert!(matches!(
            "heavy_rain".parse::<IconKind>(),
            Err(Error::UnknownIcon(name)) if name == "heavy_rain"
        ));
    }

    #[test]
    fn file_names_follow_identity() {
        assert_eq!(IconKind::Rain.file_name(ExportFormat::Png), "rain.png");
        assert_eq!(
            IconKind::PartlyCloudy.file_name(ExportFormat::Rgb565),
            "partly_cloudy.rgb565"
        );
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&IconKind::PartlyCloudy).unwrap();
        assert_eq!(json, "\"partly_cloudy\"");
        let kind: IconKind = serde_json::from_str("\"storm\"").unwrap();
        assert_eq!(kind, IconKind::Storm);
    }
}

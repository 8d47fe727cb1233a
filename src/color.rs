//! The closed six-color palette.
//!
//! Every pixel of every icon is one of these colors. The set matches the
//! seven-color e-paper panels the icons were drawn for (minus orange), so
//! each color also carries the panel driver's RGB565 value.

use palette::Srgb;
use serde::{Deserialize, Serialize};

/// One of the six colors an icon may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum PaletteColor {
    White,
    Black,
    Red,
    Green,
    Blue,
    Yellow,
}

impl PaletteColor {
    /// All palette colors.
    pub const ALL: [PaletteColor; 6] = [
        Self::White,
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
    ];

    /// Returns the sRGB value of this color.
    pub fn srgb(self) -> Srgb<u8> {
        match self {
            Self::White => Srgb::new(255, 255, 255),
            Self::Black => Srgb::new(0, 0, 0),
            Self::Red => Srgb::new(255, 0, 0),
            Self::Green => Srgb::new(0, 255, 0),
            Self::Blue => Srgb::new(0, 0, 255),
            Self::Yellow => Srgb::new(255, 255, 0),
        }
    }

    /// Returns the color as an `[r, g, b]` triple.
    pub fn rgb(self) -> [u8; 3] {
        let c = self.srgb();
        [c.red, c.green, c.blue]
    }

    /// Looks up the palette color with exactly this RGB value.
    pub fn from_rgb(rgb: [u8; 3]) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.rgb() == rgb)
    }

    /// Packs the color as RGB565 (5 bits red, 6 green, 5 blue).
    pub fn rgb565(self) -> u16 {
        pack_rgb565(self.rgb())
    }

    /// Lowercase color name.
    pub fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
        }
    }
}

/// Packs an 8-bit RGB triple into RGB565.
pub fn pack_rgb565([r, g, b]: [u8; 3]) -> u16 {
    ((u16::from(r) >> 3) << 11) | ((u16::from(g) >> 2) << 5) | (u16::from(b) >> 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb565_matches_panel_constants() {
        assert_eq!(PaletteColor::White.rgb565(), 0xFFFF);
        assert_eq!(PaletteColor::Black.rgb565(), 0x0000);
        assert_eq!(PaletteColor::Red.rgb565(), 0xF800);
        assert_eq!(PaletteColor::Green.rgb565(), 0x07E0);
        assert_eq!(PaletteColor::Blue.rgb565(), 0x001F);
        assert_eq!(PaletteColor::Yellow.rgb565(), 0xFFE0);
    }

    #[test]
    fn from_rgb_is_exact() {
        for color in PaletteColor::ALL {
            assert_eq!(PaletteColor::from_rgb(color.rgb()), Some(color));
        }
        assert_eq!(PaletteColor::from_rgb([254, 255, 255]), None);
        assert_eq!(PaletteColor::from_rgb([128, 128, 128]), None);
    }

    #[test]
    fn palette_colors_are_distinct() {
        let mut seen: Vec<[u8; 3]> = PaletteColor::ALL.iter().map(|c| c.rgb()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn serializes_lowercase() {
        for color in PaletteColor::ALL {
            let json = serde_json::to_string(&color).unwrap();
            assert_eq!(json, format!("\"{}\"", color.name()));
        }
    }
}

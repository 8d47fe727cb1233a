//! Writing rendered icons to disk.
//!
//! An [`ExportConfig`] describes where and how icons are written. It is a
//! plain serde struct, so it can be loaded from a JSON file:
//!
//! ```json
//! {
//!   "outputDir": "data",
//!   "layout": "conditions",
//!   "format": "png",
//!   "manifest": true,
//!   "sheet": false
//! }
//! ```
//!
//! [`Exporter::run`] renders every identity once and writes the files,
//! overwriting previous output.
//!
//! # Example
//!
//! ```no_run
//! use weather_icon_renderer::{ExportConfig, Exporter, OutputLayout};
//!
//! let config = ExportConfig::new("data")
//!     .with_layout(OutputLayout::Conditions)
//!     .with_manifest(true);
//!
//! let report = Exporter::new(config).run()?;
//! println!("wrote {} icons", report.files.len());
//! # Ok::<(), weather_icon_renderer::Error>(())
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::canvas::{Canvas, ICON_SIZE};
use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::icon::IconSet;
use crate::recipe::IconKind;

/// File name of the JSON manifest.
pub const MANIFEST_FILE: &str = "manifest.json";

/// File name of the contact sheet.
pub const SHEET_FILE: &str = "sheet.png";

// ============================================================================
// Configuration
// ============================================================================

/// Which file names the icons are written under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum OutputLayout {
    /// One file per identity, e.g. `rain.png`.
    #[default]
    Identities,
    /// One file per condition name, e.g. `heavy_rain.png` and `showers.png`.
    Conditions,
}

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub enum ExportFormat {
    /// 8-bit RGB PNG.
    #[default]
    Png,
    /// Raw little-endian RGB565 words, row-major, no header.
    Rgb565,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Rgb565 => "rgb565",
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ExportConfig {
    /// Directory the files are written to. Created if missing.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File naming scheme.
    #[serde(default)]
    pub layout: OutputLayout,

    /// File format of the icons.
    #[serde(default)]
    pub format: ExportFormat,

    /// Also write [`MANIFEST_FILE`].
    #[serde(default)]
    pub manifest: bool,

    /// Also write [`SHEET_FILE`].
    #[serde(default)]
    pub sheet: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            layout: OutputLayout::default(),
            format: ExportFormat::default(),
            manifest: false,
            sheet: false,
        }
    }
}

impl ExportConfig {
    /// Creates a config writing PNGs per identity into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_manifest(mut self, manifest: bool) -> Self {
        self.manifest = manifest;
        self
    }

    pub fn with_sheet(mut self, sheet: bool) -> Self {
        self.sheet = sheet;
        self
    }

    /// Serializes the config to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the config to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_json(&json)
    }
}

// ============================================================================
// Manifest
// ============================================================================

/// Describes which file each condition name should display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Manifest {
    /// Icon width and height in pixels.
    pub size: u32,

    /// File format of every icon file.
    pub format: ExportFormat,

    /// Condition name to icon entry.
    pub conditions: BTreeMap<String, ManifestEntry>,
}

/// One condition's icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ManifestEntry {
    pub icon: IconKind,
    pub file: String,
}

impl Manifest {
    /// Builds the manifest for every catalog entry under the given config.
    pub fn build(catalog: &Catalog, config: &ExportConfig) -> Self {
        let conditions = catalog
            .conditions()
            .map(|(name, kind)| {
                let file = match config.layout {
                    OutputLayout::Identities => kind.file_name(config.format),
                    OutputLayout::Conditions => {
                        format!("{name}.{}", config.format.extension())
                    }
                };
                (name.to_string(), ManifestEntry { icon: kind, file })
            })
            .collect();

        Self {
            size: ICON_SIZE,
            format: config.format,
            conditions,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Contact sheet
// ============================================================================

/// Lays the icons of a set side by side in a single row, in set order.
pub fn render_sheet(icons: &IconSet) -> Result<Canvas> {
    let count = icons.len().max(1) as u32;
    let mut sheet = Canvas::with_size(ICON_SIZE * count, ICON_SIZE)?;
    for (i, icon) in icons.iter().enumerate() {
        sheet.blit(&icon.canvas, (i as u32 * ICON_SIZE) as i32, 0);
    }
    Ok(sheet)
}

// ============================================================================
// Exporter
// ============================================================================

/// A file written by an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub kind: IconKind,
    /// The condition name the file is named after, for the
    /// [`Conditions`](OutputLayout::Conditions) layout.
    pub condition: Option<&'static str>,
}

/// Everything an export run wrote.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    pub files: Vec<ExportedFile>,
    pub manifest: Option<PathBuf>,
    pub sheet: Option<PathBuf>,
}

/// Renders the catalog's icons and writes them according to an [`ExportConfig`].
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Runs the export using the global catalog.
    pub fn run(&self) -> Result<ExportReport> {
        self.run_with(Catalog::global())
    }

    /// Runs the export for the given catalog.
    pub fn run_with(&self, catalog: &Catalog) -> Result<ExportReport> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        info!(
            dir = %dir.display(),
            layout = ?self.config.layout,
            format = ?self.config.format,
            "exporting weather icons"
        );

        let icons = IconSet::render_all();
        let mut report = ExportReport::default();

        for icon in &icons {
            let bytes = icon.encode(self.config.format)?;
            match self.config.layout {
                OutputLayout::Identities => {
                    let path = dir.join(icon.kind.file_name(self.config.format));
                    write_file(&path, &bytes)?;
                    report.files.push(ExportedFile {
                        path,
                        kind: icon.kind,
                        condition: None,
                    });
                }
                OutputLayout::Conditions => {
                    for name in catalog.aliases(icon.kind) {
                        let path =
                            dir.join(format!("{name}.{}", self.config.format.extension()));
                        write_file(&path, &bytes)?;
                        report.files.push(ExportedFile {
                            path,
                            kind: icon.kind,
                            condition: Some(name),
                        });
                    }
                }
            }
        }

        if self.config.manifest {
            let path = dir.join(MANIFEST_FILE);
            let json = Manifest::build(catalog, &self.config).to_json_pretty()?;
            write_file(&path, json.as_bytes())?;
            report.manifest = Some(path);
        }

        if self.config.sheet {
            let path = dir.join(SHEET_FILE);
            write_file(&path, &render_sheet(&icons)?.encode_png()?)?;
            report.sheet = Some(path);
        }

        info!(files = report.files.len(), "export finished");
        Ok(report)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

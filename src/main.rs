//! weather-icons: render the weather icon set to disk.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use weather_icon_renderer::{Catalog, ExportConfig, ExportFormat, Exporter, OutputLayout};

/// Weather icon generator
#[derive(Parser, Debug)]
#[command(name = "weather-icons")]
#[command(about = "Render procedurally drawn weather icons for e-paper displays")]
struct Args {
    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render every icon and write it to the output directory
    Generate(GenerateArgs),

    /// List every supported condition name and its icon
    List,

    /// Print the icon a condition name resolves to
    Resolve {
        /// Provider condition name, e.g. "heavy_rain"
        condition: String,
    },
}

#[derive(ClapArgs, Debug)]
struct GenerateArgs {
    /// JSON export config; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// File naming scheme
    #[arg(long, value_enum)]
    layout: Option<OutputLayout>,

    /// Output file format
    #[arg(long, value_enum)]
    format: Option<ExportFormat>,

    /// Also write manifest.json
    #[arg(long)]
    manifest: bool,

    /// Also write a contact sheet with every icon
    #[arg(long)]
    sheet: bool,
}

impl GenerateArgs {
    /// Loads the config file, if any, and applies the command-line overrides.
    fn export_config(self) -> weather_icon_renderer::Result<ExportConfig> {
        let mut export = match self.config {
            Some(path) => ExportConfig::load(path)?,
            None => ExportConfig::default(),
        };
        if let Some(out) = self.out {
            export.output_dir = out;
        }
        if let Some(layout) = self.layout {
            export.layout = layout;
        }
        if let Some(format) = self.format {
            export.format = format;
        }
        export.manifest |= self.manifest;
        export.sheet |= self.sheet;
        Ok(export)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> weather_icon_renderer::Result<()> {
    match command {
        Command::Generate(generate) => {
            let report = Exporter::new(generate.export_config()?).run()?;
            for file in &report.files {
                info!("  - {}", file.path.display());
            }
            if let Some(path) = &report.manifest {
                info!("  - {}", path.display());
            }
            if let Some(path) = &report.sheet {
                info!("  - {}", path.display());
            }
            info!("done");
        }
        Command::List => {
            for (name, kind) in Catalog::global().conditions() {
                println!("{name}\t{kind}");
            }
        }
        Command::Resolve { condition } => {
            let kind = Catalog::global().resolve(&condition)?;
            println!("{kind}");
        }
    }
    Ok(())
}

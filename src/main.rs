//! Craft Snapshot - Entry Point
//!
//! Stand-in host: loads a world definition from TOML, runs one export, and
//! writes the snapshot document.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use craft_snapshot::core::config::ExportConfig;
use craft_snapshot::core::error::Result;
use craft_snapshot::export::{export_snapshot, ExportSummary};
use craft_snapshot::model::WorldDefinition;

#[derive(Parser, Debug)]
#[command(name = "craft-snapshot")]
#[command(about = "Export a crafting knowledge graph as a localized JSON snapshot")]
struct Args {
    /// World definition (skills, items, tags, talents, recipes, translations)
    #[arg(short, long)]
    world: PathBuf,

    /// Export configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file, overrides the config
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write compact JSON instead of indented
    #[arg(long)]
    compact: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("craft_snapshot=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    match run(args) {
        Ok(summary) => {
            println!(
                "Exported {} skills, {} items, {} tags, {} recipes to {}",
                summary.skills,
                summary.items,
                summary.tags,
                summary.recipes,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Export failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExportSummary> {
    let mut config = match &args.config {
        Some(path) => ExportConfig::load(path)?,
        None => ExportConfig::default(),
    };
    if let Some(output) = args.output {
        config.output_path = output;
    }
    if args.compact {
        config.pretty = false;
    }

    let (data, localizer) = WorldDefinition::load_file(&args.world)?.into_parts();
    tracing::info!(
        world = %args.world.display(),
        cultures = localizer.culture_count(),
        "Loaded world definition"
    );

    export_snapshot(&data, &localizer, &config)
}

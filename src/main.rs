//! Filament Swatch CLI
//!
//! Interactive catalog editor plus export helpers for the swatch generator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use filament_swatch::catalog::CatalogStore;
use filament_swatch::config::{self, AppConfig};
use filament_swatch::export::{self, LabelPreviewRenderer, preview};
use filament_swatch::shell::{Shell, write_profile_list};
use filament_swatch::{ExportJob, SwatchError};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Filament swatch catalog tool
#[derive(Parser, Debug)]
#[command(name = "swatch-cli")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Catalog file (defaults to filaments.json next to this executable)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive profile editor (default)
    Shell,

    /// Print all profiles
    List,

    /// Print the export job manifest as JSON
    Jobs {
        /// Write the manifest to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a PNG label preview for every job
    Preview {
        /// Output directory (defaults to the output folder next to the catalog)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Show resolved settings
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match config::load_config() {
        Err(SwatchError::ConfigDirUnavailable) => AppConfig::default(),
        other => other.context("Failed to load config")?,
    };
    let catalog_path = config
        .resolve_catalog_path(args.catalog.as_deref())
        .context("Failed to resolve catalog path")?;
    let store = CatalogStore::new(&catalog_path);

    match args.command.unwrap_or(Command::Shell) {
        Command::Shell => cmd_shell(store),
        Command::List => cmd_list(&store),
        Command::Jobs { output } => cmd_jobs(&store, output.as_deref()),
        Command::Preview { out } => cmd_preview(&store, &config, out.as_deref()),
        Command::Config { init } => cmd_config(&config, &catalog_path, init),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

// =============================================================================
// Command Implementations
// =============================================================================

fn cmd_shell(store: CatalogStore) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    Shell::new(store, stdin.lock(), stdout.lock())
        .run()
        .context("Terminal I/O failed")
}

fn cmd_list(store: &CatalogStore) -> Result<()> {
    let catalog = store.load().context("Failed to load catalog")?;
    write_profile_list(&catalog, &mut std::io::stdout().lock())?;
    Ok(())
}

/// Flatten the catalog, turning an empty result into a friendly message.
fn load_jobs(store: &CatalogStore) -> Result<Option<Vec<ExportJob>>> {
    let catalog = store.load().context("Failed to load catalog")?;

    match export::flatten(&catalog) {
        Ok(jobs) => Ok(Some(jobs)),
        Err(SwatchError::EmptyCatalog) => {
            eprintln!("Nothing to export: add profiles and colours first (swatch-cli shell).");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_jobs(store: &CatalogStore, output: Option<&Path>) -> Result<()> {
    let Some(jobs) = load_jobs(store)? else {
        return Ok(());
    };

    match output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            export::write_manifest(&jobs, std::io::BufWriter::new(file))
                .context("Failed to write manifest")?;
            println!("✓ Wrote {} job(s) to {}", jobs.len(), path.display());
        }
        None => {
            export::write_manifest(&jobs, std::io::stdout().lock())
                .context("Failed to write manifest")?;
        }
    }

    Ok(())
}

fn cmd_preview(store: &CatalogStore, config: &AppConfig, out: Option<&Path>) -> Result<()> {
    let Some(jobs) = load_jobs(store)? else {
        return Ok(());
    };

    let font = preview::load_font(config.font_path.as_deref()).context("Failed to load font")?;
    let mut renderer = LabelPreviewRenderer::new(font);
    let output_dir = config.resolve_output_dir(out, store.path());

    println!("\n{}", "=".repeat(40));
    println!("GENERATING LABEL PREVIEWS");
    println!("{}", "=".repeat(40));

    let summary = export::run_export(&jobs, &mut renderer, &output_dir)
        .context("Preview export failed")?;

    for (i, file) in summary.files.iter().enumerate() {
        let name = file.file_name().unwrap_or_default().to_string_lossy();
        println!("  [{}/{}] Exported: {}", i + 1, summary.files.len(), name);
    }

    println!("{}", "=".repeat(40));
    println!(
        "DONE! {} files saved to: {}",
        summary.files.len(),
        summary.output_dir.display()
    );
    println!("{}\n", "=".repeat(40));

    Ok(())
}

fn cmd_config(config: &AppConfig, catalog_path: &Path, init: bool) -> Result<()> {
    let config_path = config::get_config_path()?;

    if init {
        if config_path.exists() {
            println!("Config already exists at {}", config_path.display());
        } else {
            config::save_config_to(&AppConfig::default(), &config_path)
                .context("Failed to write config")?;
            println!("✓ Created default config at {}", config_path.display());
        }
    }

    println!("Config file:   {}", config_path.display());
    println!("Catalog:       {}", catalog_path.display());
    println!(
        "Output folder: {}",
        config.resolve_output_dir(None, catalog_path).display()
    );
    match &config.font_path {
        Some(font) => println!("Font:          {}", font.display()),
        None => println!("Font:          (system default)"),
    }

    Ok(())
}

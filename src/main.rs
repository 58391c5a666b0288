//! Pragma Inventory CLI - declaration inventory with per-scope pragma versions

use clap::{Parser, Subcommand};
use pragma_inventory::config::{self, InventoryConfig};
use pragma_inventory::inventory::{self, ReportMode, TraversalOrder};
use pragma_inventory::output::is_quiet;
use pragma_inventory::ui;
use pragma_inventory::{DeclarationKind, Project};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pragma-inventory")]
#[command(version)]
#[command(about = "Finds contracts, interfaces, libraries and top-level types with their pragma version range")]
#[command(long_about = r#"
Pragma Inventory reads the compilation units exported by a Solidity analyzer
and lists every top-level declaration together with the `pragma solidity`
constraints of its file scope. Declarations under node_modules are skipped.

Example usage:
  pragma-inventory report --snapshot build/units.json
  pragma-inventory report --snapshot build/units.json --interfaces-only --json
  pragma-inventory init
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the declaration inventory of an analyzer snapshot
    Report {
        /// JSON snapshot of the compilation units
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Config file (defaults to ./pragma-inventory.toml if present)
        #[arg(short, long = "config")]
        config_path: Option<PathBuf>,

        /// Only list interfaces
        #[arg(short, long)]
        interfaces_only: bool,

        /// Row order: `category` or `unit`
        #[arg(long)]
        order: Option<String>,

        /// Extra path substring marking vendored code (repeatable)
        #[arg(short = 'x', long = "exclude-marker")]
        exclude_markers: Vec<String>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default config file
    Init {
        /// Where to write the config
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// List declaration kinds in report order
    Kinds,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Report {
            snapshot,
            config_path,
            interfaces_only,
            order,
            exclude_markers,
            json,
        } => {
            let file_config = match config::load_config(config_path.as_deref())? {
                Some(loaded) => {
                    if !is_quiet() && !json {
                        let shown = config_path.unwrap_or_else(config::default_config_path);
                        ui::info("Config", &shown.display().to_string());
                    }
                    loaded
                }
                None => InventoryConfig::default(),
            };
            let mut options = file_config.to_options()?;

            if interfaces_only {
                options.mode = ReportMode::InterfacesOnly;
            }
            if let Some(order) = order {
                options.order = order.parse::<TraversalOrder>()?;
            }
            options.vendor_markers.extend(exclude_markers);

            let project = Project::load(&snapshot)?;
            if project.is_empty() && !json {
                ui::warn("Snapshot contains no compilation units");
            }
            let output = inventory::generate_report(&project, &options);

            if json {
                println!("{}", output.to_json()?);
            } else {
                if !is_quiet() {
                    ui::header(&format!("Pragma inventory for {}", snapshot.display()));
                    ui::summary_row("Compilation units:", &project.compilation_units.len().to_string());
                    ui::summary_row("Order:", options.order.as_str());
                    println!();
                }
                print!("{}", output.description);
            }
        }

        Commands::Init { path, force } => {
            let path = path.unwrap_or_else(config::default_config_path);
            config::write_config(&path, &InventoryConfig::default_template(), force)?;
            ui::success(&format!("Wrote {}", path.display()));
        }

        Commands::Kinds => {
            for kind in DeclarationKind::all() {
                println!("{}", kind);
            }
        }
    }

    Ok(())
}

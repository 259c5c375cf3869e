//! DhruvaPick - Pick-path generator for VastuPick warehouses
//!
//! Loads a warehouse description, draws random item selections from its
//! catalogue, plans a pick path for each and writes them all to one
//! pick-path JSON file.
//!
//! ```text
//! dhruva-pick data/warehouse.json --items 8 --paths 5 --seed 42 --solver both
//! ```

mod config;
mod error;
mod pipeline;
mod selection;
mod solver;

use clap::Parser;
use config::{LoggingConfig, PickConfig, SolverKind};
use error::Result;
use pipeline::generate_pick_paths;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vastu_pick::io::{load_warehouse, save_pick_paths};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Warehouse description (JSON)
    warehouse: PathBuf,

    /// Config file (TOML); dhruva-pick.toml is used when present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Items per pick path
    #[arg(short, long)]
    items: Option<usize>,

    /// Number of item selections to plan
    #[arg(short, long)]
    paths: Option<usize>,

    /// RNG seed for item selection
    #[arg(short, long)]
    seed: Option<u64>,

    /// Tour solver
    #[arg(long, value_enum)]
    solver: Option<SolverKind>,

    /// Output pick-path file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn apply(&self, config: &mut PickConfig) {
        if let Some(items) = self.items {
            config.selection.items_per_path = items;
        }
        if let Some(paths) = self.paths {
            config.selection.path_count = paths;
        }
        if self.seed.is_some() {
            config.selection.seed = self.seed;
        }
        if let Some(solver) = self.solver {
            config.selection.solver = solver;
        }
        if let Some(output) = &self.output {
            config.output.pick_path_file = output.display().to_string();
        }
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = PickConfig::load_or_default(args.config.as_deref())?;
    args.apply(&mut config);

    init_logging(&config.logging);

    info!("DhruvaPick starting");
    info!(
        "Selection: {} paths x {} items, solver {:?}, seed {:?}",
        config.selection.path_count,
        config.selection.items_per_path,
        config.selection.solver,
        config.selection.seed
    );

    let warehouse = load_warehouse(&args.warehouse)?;
    let (rows, cols) = warehouse.dimensions();
    info!(
        "Warehouse {}x{}: {} columns, {} items",
        rows,
        cols,
        warehouse.total_columns(),
        warehouse.items().len()
    );

    let file = generate_pick_paths(&warehouse, &config)?;

    let output = Path::new(&config.output.pick_path_file);
    save_pick_paths(&file, output)?;
    info!("Wrote {} pick paths to {:?}", file.pick_paths.len(), output);

    Ok(())
}

use clap::Parser;
use std::path::PathBuf;

/// Rebuild the featpath graph snapshot from a collaborations CSV.
///
/// The whole previous graph is discarded on every import.
#[derive(Parser, Debug)]
#[command(name = "featpath-import", version, about)]
pub struct Args {
    /// Path to the collaborations dataset (CSV)
    pub csv_path: PathBuf,

    /// Where to write the graph snapshot
    #[arg(short, long, default_value = "data/featpath.snapshot")]
    pub output: PathBuf,

    /// Keep only rows at or above this popularity score
    #[arg(long, default_value_t = 65.0)]
    pub min_popularity: f64,

    /// Triples per insertion batch
    #[arg(long, default_value_t = featpath_core::DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,
}

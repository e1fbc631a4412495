use clap::Parser;
use colored::Colorize;
use featpath_cli::{Args, parse_dataset};
use featpath_core::{GraphStore, bulk_load, save_snapshot};
use indicatif::{ProgressBar, ProgressStyle};

fn main() {
    let args = Args::parse();

    if let Err(error_message) = run(&args) {
        eprintln!("{} {}", "error:".red().bold(), error_message);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    println!("📖 Reading {}", args.csv_path.display());
    let raw = std::fs::read_to_string(&args.csv_path)
        .map_err(|e| format!("cannot read {}: {e}", args.csv_path.display()))?;

    let collabs = parse_dataset(&raw, args.min_popularity)?;
    println!(
        "🎵 {} collaboration triples after filtering (popularity >= {})",
        collabs.len(),
        args.min_popularity
    );

    let progress = ProgressBar::new(collabs.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} triples")
            .map_err(|e| e.to_string())?,
    );

    let mut store = GraphStore::new();
    let stats = bulk_load(&mut store, &collabs, args.batch_size, |processed| {
        progress.set_position(processed as u64);
    })
    .map_err(|e| e.to_string())?;
    progress.finish_and_clear();

    save_snapshot(&store, &args.output)
        .map_err(|e| format!("cannot write {}: {e}", args.output.display()))?;

    println!(
        "{} {} artists and {} collaborations ({} triples) -> {}",
        "✅ Imported".green().bold(),
        stats.nodes_created,
        stats.edges_created,
        stats.triples_processed,
        args.output.display()
    );
    Ok(())
}

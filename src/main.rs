use std::path::PathBuf;

use album_index::synth::{DEFAULT_COORDINATES, RunDefaults};
use album_index::yadisk::YadiskLister;
use album_index::{catalog, crawl, merge, output, synth};
use clap::Parser;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "album-index")]
#[command(about = "Build gallery catalog entries from a public Yandex.Disk folder")]
#[command(long_about = "\
Build gallery catalog entries from a public Yandex.Disk folder

Walks every subfolder of the share; each folder that directly contains
image files becomes one catalog entry in the photo array of data.json.
The entry's date comes from the folder name (15.03.2021, 2021-03-15,
15.03, …) or, failing that, from the newest file's modified timestamp.
Its link opens the exact subfolder in the share viewer (?path=...).

Entries already present in the catalog (same link, or same name and
date) are skipped. New entries get ids continuing past the existing
maximum, in date order. Without --write nothing is persisted; the new
entries are printed as JSON for review.

Coordinates default to --default-coords for every entry — adjust them
in the catalog by hand afterwards.")]
#[command(version)]
struct Cli {
    /// Public link of the shared folder to catalog
    public_url: String,

    /// Persist new entries to the catalog (default is a dry run)
    #[arg(long)]
    write: bool,

    /// Coordinates applied to every new entry, as "lat,lon"
    #[arg(long, value_name = "LAT,LON")]
    default_coords: Option<String>,

    /// Mark every new entry as common
    #[arg(long)]
    common: bool,

    /// Path to the catalog document
    #[arg(long, default_value = "js/data.json")]
    catalog: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let defaults = RunDefaults {
        coordinates: parse_coords(cli.default_coords.as_deref()),
        common: cli.common,
    };

    // An unparsable catalog must abort before any crawling or candidate work.
    let existing = catalog::load(&cli.catalog)?;

    println!("==> Scanning public folder: {}", cli.public_url);
    let lister = YadiskLister::new(&cli.public_url);
    let listing = crawl::crawl(&lister);
    output::print_crawl_summary(&listing);

    let candidates = synth::synthesize(&listing, &cli.public_url, &defaults);
    let fresh = merge::merge(&existing.photo, candidates);

    if fresh.is_empty() {
        println!("No new albums to add.");
        return Ok(());
    }

    if cli.write {
        let mut updated = existing;
        updated.photo.extend(fresh.iter().cloned());
        catalog::save(&cli.catalog, &updated)?;
        output::print_new_entries(&fresh);
        println!(
            "==> Added {} entries to {}",
            fresh.len(),
            cli.catalog.display()
        );
    } else {
        println!("New entries (dry run):");
        println!("{}", serde_json::to_string_pretty(&fresh)?);
        println!(
            "\nRe-run with --write to update {}",
            cli.catalog.display()
        );
    }

    Ok(())
}

/// Parse a `lat,lon` pair. A malformed value is never fatal: it logs a
/// warning and falls back to the built-in default.
fn parse_coords(raw: Option<&str>) -> [f64; 2] {
    let Some(raw) = raw else {
        return DEFAULT_COORDINATES;
    };
    let parsed: Vec<Result<f64, _>> = raw.split(',').map(|s| s.trim().parse::<f64>()).collect();
    if let [Ok(lat), Ok(lon)] = parsed.as_slice()
        && lat.is_finite()
        && lon.is_finite()
    {
        return [*lat, *lon];
    }
    tracing::warn!(value = raw, "unparsable --default-coords; using built-in default");
    DEFAULT_COORDINATES
}

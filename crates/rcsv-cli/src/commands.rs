use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tracing::info_span;

use rcsv_ingest::{LoadOptions, load_table_with_report, resolve_direct_link};
use rcsv_output::cleaned_csv_artifact;

use crate::cli::{FetchArgs, ResolveArgs};
use crate::types::FetchOutcome;

pub fn run_fetch(args: &FetchArgs) -> Result<FetchOutcome> {
    let span = info_span!("fetch", share_url = %args.share_url);
    let _guard = span.enter();

    let options = LoadOptions::default()
        .with_chunk_size(args.chunk_size)
        .with_timeout(Duration::from_secs(args.timeout_secs));

    let spinner = loading_spinner();
    let loaded = load_table_with_report(&args.share_url, &options);
    spinner.finish_and_clear();
    let (table, report) =
        loaded.with_context(|| format!("load table from {}", args.share_url))?;

    let table = if args.columns.is_empty() {
        table
    } else {
        table.select(&args.columns).context("select columns")?
    };

    let written = match &args.output {
        Some(path) => {
            let artifact = cleaned_csv_artifact(&table).context("serialize cleaned CSV")?;
            std::fs::write(path, &artifact.bytes)
                .with_context(|| format!("write {}", path.display()))?;
            Some(path.clone())
        }
        None => None,
    };

    Ok(FetchOutcome {
        table,
        report,
        written,
    })
}

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let direct_url = resolve_direct_link(&args.share_url)?;
    println!("{direct_url}");
    Ok(())
}

fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Loading data in chunks...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

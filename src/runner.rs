// src/runner.rs
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    config::options::{AppOptions, ScrapeOptions, Source},
    core::net::HttpFetcher,
    error::RunError,
    fetch::{CachedFetcher, DirFetcher, Fetch},
    file::export_rows,
    progress::Progress,
    scrape::collect_games,
    store::PageStore,
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub rows: usize,
    pub games_ok: usize,
    pub games_failed: Vec<(u32, String)>,
}

/// Page source for the selected options.
pub fn build_fetcher(scrape: &ScrapeOptions) -> Arc<dyn Fetch> {
    let fetcher: Arc<dyn Fetch> = match (&scrape.source, scrape.use_cache) {
        (Source::Dir(dir), _) => Arc::new(DirFetcher::new(dir.clone())),
        (Source::Web, true) => Arc::new(CachedFetcher::new(HttpFetcher::new(), PageStore::default())),
        (Source::Web, false) => Arc::new(HttpFetcher::new()),
    };
    fetcher
}

/// Top-level runner: collect the selected games, then export what parsed.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let fetcher = build_fetcher(&opts.scrape);
    run_with(opts, fetcher, progress)
}

/// Same as `run`, with the page source supplied by the caller.
pub fn run_with(
    opts: &AppOptions,
    fetcher: Arc<dyn Fetch>,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, RunError> {
    let ids = opts.scrape.games.ids();
    if ids.is_empty() {
        return Err(RunError::NoGames);
    }
    logf!("Run: {} games, {} workers", ids.len(), opts.scrape.workers);

    let outcome = collect_games(&ids, fetcher, opts.scrape.matching, opts.scrape.workers, progress);
    let files_written = export_rows(&outcome.rows, &opts.export)?;

    logf!(
        "Run: {} ok, {} failed, {} rows, {} files",
        outcome.games_ok.len(),
        outcome.failed.len(),
        outcome.rows.len(),
        files_written.len()
    );

    Ok(RunSummary {
        files_written,
        rows: outcome.rows.len(),
        games_ok: outcome.games_ok.len(),
        games_failed: outcome.failed,
    })
}

// src/runner.rs
use tracing::info;
use url::Url;

use crate::config::options::AppOptions;
use crate::config::schema::PageSchema;
use crate::core::net::{ Fetch, HttpFetcher };
use crate::error::ScrapeError;
use crate::file::CsvFileSink;
use crate::progress::Progress;
use crate::scrape;
use crate::sink::Sink;
use crate::specs::Site;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows: usize,
    pub columns: usize,
    pub warnings: usize,
    /// False when every location was skipped and nothing reached the sink.
    pub written: bool,
}

/// Reject bad inputs before any network activity.
pub fn validate(opts: &AppOptions) -> Result<(), ScrapeError> {
    let url = &opts.scrape.listing_url;
    match Url::parse(url) {
        Ok(u) if matches!(u.scheme(), "http" | "https") => {}
        Ok(u) => return Err(ScrapeError::Input(format!("unsupported URL scheme '{}' in {url}", u.scheme()))),
        Err(e) => return Err(ScrapeError::Input(format!("bad listing URL '{url}': {e}"))),
    }
    if opts.export.out_path().as_os_str().is_empty() {
        return Err(ScrapeError::Input(s!("output file name is empty")));
    }
    Ok(())
}

/// Full run against the live site, writing the configured file.
pub fn run(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary, ScrapeError> {
    validate(opts)?;
    let fetcher = HttpFetcher::new()?;
    let mut sink = CsvFileSink::new(&opts.export);
    run_with(opts, &fetcher, &mut sink, progress)
}

/// Listing fetch → assemble → sink, with injectable collaborators.
pub fn run_with<F, S>(
    opts: &AppOptions,
    fetch: &F,
    sink: &mut S,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, ScrapeError>
where
    F: Fetch + ?Sized,
    S: Sink + ?Sized,
{
    let site = Site::new(PageSchema::default(), &opts.scrape.base_url)?;

    let listing_url = &opts.scrape.listing_url;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Downloading data from: {listing_url}"));
    }
    let listing = fetch.fetch(listing_url)?;

    let ds = scrape::assemble(&site, &opts.scrape, &listing, fetch, progress.as_deref_mut())?;

    let mut summary = RunSummary {
        rows: ds.rows.len(),
        columns: ds.header.len(),
        warnings: ds.warnings.len(),
        written: false,
    };
    if ds.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No data to write.");
        }
        return Ok(summary);
    }

    sink.write(&ds.header, &ds.rows)?;
    summary.written = true;
    info!(rows = summary.rows, columns = summary.columns, "run complete");
    Ok(summary)
}

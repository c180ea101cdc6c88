// src/scrape/assemble.rs
//! Dataset assembly: listing → universe → one row per location.
//!
//! Strictly sequential; one fetch at a time. Each location's fetch+extract is
//! an independent unit with its own outcome. Under [`FailurePolicy::Abort`]
//! the first failed location ends the run; under [`FailurePolicy::Skip`]
//! failures are collected and reported once the scan is over.

use tracing::{ info, warn };

use crate::config::options::{ FailurePolicy, ScrapeOptions };
use crate::core::net::Fetch;
use crate::data::{ build_header, reserved_names, DataSet, OutputRow };
use crate::error::{ ScrapeError, Warning };
use crate::progress::Progress;
use crate::specs::{ candidates, locations, results, CandidateUniverse, LocationEntry, LocationResult, Site };

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocationOutcome {
    Ok(LocationResult),
    Failed(String),
}

fn report(progress: &mut Option<&mut (dyn Progress + '_)>, warnings: &mut Vec<Warning>, w: Warning) {
    warn!("{w}");
    if let Some(p) = progress.as_deref_mut() {
        p.warn(&w);
    }
    warnings.push(w);
}

/// Union of the universes of the given locations, first-seen order.
/// The first location is trusted to be representative; a larger sample
/// widens the net. Fetch failures here are fatal: no universe, no schema.
pub fn build_universe<F>(site: &Site, sample: &[LocationEntry], fetch: &F) -> Result<CandidateUniverse, ScrapeError>
where
    F: Fetch + ?Sized,
{
    let mut universe = CandidateUniverse::new();
    for loc in sample {
        let markup = fetch.fetch(&loc.url)?;
        universe.merge(&candidates::extract(site, &markup));
    }
    info!(candidates = universe.len(), sampled = sample.len(), "candidate universe ready");
    Ok(universe)
}

fn process<F>(site: &Site, loc: &LocationEntry, universe: &CandidateUniverse, fetch: &F) -> LocationOutcome
where
    F: Fetch + ?Sized,
{
    match fetch.fetch(&loc.url) {
        Ok(markup) => LocationOutcome::Ok(results::extract(site, &markup, universe, &loc.url)),
        Err(e) => LocationOutcome::Failed(e.to_string()),
    }
}

/// Build the dataset for one listing page.
///
/// Fatal: no usable locations, the universe page(s) cannot be fetched, or
/// (under [`FailurePolicy::Abort`]) a location failed, which stops the scan there.
pub fn assemble<F>(
    site: &Site,
    opts: &ScrapeOptions,
    listing: &str,
    fetch: &F,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<DataSet, ScrapeError>
where
    F: Fetch + ?Sized,
{
    let locs = locations::extract(site, listing);
    if locs.is_empty() {
        return Err(ScrapeError::NoLocations { url: opts.listing_url.clone() });
    }
    info!(locations = locs.len(), "listing parsed");

    if let Some(p) = progress.as_deref_mut() {
        p.log("Reading candidate list…");
    }
    let sample = opts.sample_size().min(locs.len());
    let universe = build_universe(site, &locs[..sample], fetch)?;

    let mut warnings: Vec<Warning> = Vec::new();
    for name in reserved_names(&universe) {
        report(&mut progress, &mut warnings, Warning::ReservedName { name: s!(name) });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(locs.len());
    }

    let mut outcomes: Vec<LocationOutcome> = Vec::with_capacity(locs.len());

    for (i, loc) in locs.iter().enumerate() {
        let mut outcome = process(site, loc, &universe, fetch);
        match &mut outcome {
            LocationOutcome::Ok(res) => {
                for w in res.warnings.drain(..) {
                    report(&mut progress, &mut warnings, w);
                }
            }
            LocationOutcome::Failed(reason) if opts.on_failure == FailurePolicy::Abort => {
                // first failure ends the scan; the rest is never fetched
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Err(ScrapeError::LocationFailed {
                    position: i + 1,
                    total: locs.len(),
                    reason: format!("{}: {}", loc.code, reason),
                });
            }
            LocationOutcome::Failed(_) => {}
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i + 1, &loc.name);
        }
        outcomes.push(outcome);
    }

    // only Skip gets here with failures
    for (loc, o) in locs.iter().zip(&outcomes) {
        if let LocationOutcome::Failed(reason) = o {
            report(&mut progress, &mut warnings, Warning::LocationFailed {
                code: loc.code.clone(),
                url: loc.url.clone(),
                reason: reason.clone(),
            });
        }
    }

    let rows: Vec<OutputRow> = locs
        .iter()
        .zip(&outcomes)
        .filter_map(|(loc, o)| match o {
            LocationOutcome::Ok(res) => Some(OutputRow::from_parts(loc, res)),
            LocationOutcome::Failed(_) => None,
        })
        .collect();

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(DataSet { header: build_header(&universe), rows, warnings })
}

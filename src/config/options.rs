// src/config/options.rs
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/// What to do once the scan is over and some locations could not be fetched or read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Any failed location fails the whole run; nothing is written.
    #[default]
    Abort,
    /// Drop failed locations, keep the rest, warn per failure.
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub listing_url: String,
    /// Page-relative links on the listing are resolved against this.
    pub base_url: String,
    /// How many leading locations feed the candidate universe (min 1).
    pub universe_sample: usize,
    pub on_failure: FailurePolicy,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            listing_url: s!(),
            base_url: s!(BASE_URL),
            universe_sample: UNIVERSE_SAMPLE,
            on_failure: FailurePolicy::Abort,
        }
    }
}

impl ScrapeOptions {
    pub fn sample_size(&self) -> usize {
        self.universe_sample.max(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_path: PathBuf,
    pub delimiter: u8,
    pub bom: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_path: PathBuf::new(),
            delimiter: EXPORT_DELIM,
            bom: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> &Path {
        &self.out_path
    }

    /// Takes the destination as typed; surrounding whitespace is dropped.
    pub fn set_path(&mut self, text: &str) {
        self.out_path = PathBuf::from(text.trim());
    }
}

//! # Scraping "specs" module
//!
//! Page-specific extraction for the results site. Each spec reads one kind of
//! page and returns plain values; nothing here fetches, caches or writes.
//!
//! ## Pages
//! - `locations` – the territorial listing: one [`LocationEntry`] per usable row,
//!   in document order, with the detail address resolved against the base URL.
//! - `candidates` – a detail page read as the *candidate universe*: distinct
//!   names in first-seen order.
//! - `results` – a detail page read as one location's totals and votes,
//!   reconciled against the universe (absent candidates get `"0"`).
//!
//! ## Conventions & invariants
//! - Every structural assumption comes from [`PageSchema`]; row decisions go
//!   through [`PageSchema::classify`].
//! - All qualifying tables on a page are scanned, not just the first.
//! - Structural surprises degrade to "missing" (plus a [`Warning`]), never to
//!   an error. Only the caller decides what is fatal.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::assemble → specs::locations::extract      (listing)
//!                           → specs::candidates::extract     (sample pages)
//!                           → specs::results::extract        (every location)
//! ```
//!
//! [`Warning`]: crate::error::Warning

use scraper::Selector;
use url::Url;

use crate::config::schema::PageSchema;
use crate::core::html::{ marker_selector, Scanner };
use crate::error::ScrapeError;

pub mod candidates;
pub mod locations;
pub mod results;

pub use candidates::CandidateUniverse;
pub use locations::LocationEntry;
pub use results::{ LocationResult, Totals };

/// Compiled view of one site format: schema, selectors and base address.
#[derive(Debug)]
pub struct Site {
    pub schema: PageSchema,
    pub base: Url,
    scanner: Scanner,
    registered: Selector,
    envelopes: Selector,
    valid: Selector,
}

impl Site {
    pub fn new(schema: PageSchema, base_url: &str) -> Result<Self, ScrapeError> {
        let base = Url::parse(base_url)
            .map_err(|e| ScrapeError::Input(format!("bad base URL '{base_url}': {e}")))?;
        Ok(Self {
            scanner: Scanner::new(&schema)?,
            registered: marker_selector(&schema.markers.registered)?,
            envelopes: marker_selector(&schema.markers.envelopes)?,
            valid: marker_selector(&schema.markers.valid)?,
            schema,
            base,
        })
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }
}

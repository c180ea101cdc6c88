// src/specs/locations.rs
//! Listing page → location entries.
//!
//! A usable row has at least three cells, a real code in the first one
//! (not `-`), and a link in that same cell pointing at the detail page.
//! Rows without a link cannot be followed and are dropped.

use std::collections::HashSet;

use tracing::debug;

use crate::config::schema::RowKind;
use crate::core::html::Page;
use super::Site;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationEntry {
    pub code: String,
    pub name: String,
    /// Absolute address of the location's detail page.
    pub url: String,
}

/// Source row order is kept; it becomes the dataset's row order.
pub fn extract(site: &Site, listing: &str) -> Vec<LocationEntry> {
    let page = Page::parse(listing);
    let schema = &site.schema;
    let rule = schema.locations;

    let mut out = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for table in site.scanner().tables(&page) {
        for row in table.data_rows(schema.header_rows) {
            let cells = row.cells();
            if schema.classify(&rule, &cells) != RowKind::Data { continue; }

            let Some(href) = row.link(rule.key_col) else { continue; };
            let url = match site.base.join(href.trim()) {
                Ok(u) => u.to_string(),
                Err(e) => {
                    debug!(href, error = %e, "unresolvable location link");
                    continue;
                }
            };

            let code = cells[rule.key_col].clone();
            if !seen.insert(code.clone()) {
                debug!(code = %code, "duplicate location code; keeping first");
                continue;
            }
            let name = cells.get(rule.key_col + 1).cloned().unwrap_or_default();
            out.push(LocationEntry { code, name, url });
        }
    }

    debug!(count = out.len(), "locations extracted");
    out
}

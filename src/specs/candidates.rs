// src/specs/candidates.rs
//! Detail page → candidate universe.
//!
//! The universe is the canonical set of vote columns. Names come from the
//! second cell of each data row; separators, sums and numeric cells are not
//! names (see [`PageSchema::classify`](crate::config::schema::PageSchema::classify)).

use std::collections::HashSet;

use tracing::debug;

use crate::config::schema::RowKind;
use crate::core::html::Page;
use super::Site;

/// Distinct candidate names in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidateUniverse {
    names: Vec<String>,
    index: HashSet<String>,
}

impl CandidateUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the name was already present.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.index.contains(name) {
            return false;
        }
        self.index.insert(s!(name));
        self.names.push(s!(name));
        true
    }

    /// Adds the other universe's new names after ours.
    pub fn merge(&mut self, other: &CandidateUniverse) {
        for name in other.iter() {
            self.insert(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CandidateUniverse {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut u = CandidateUniverse::new();
        for name in iter {
            u.insert(name.as_ref());
        }
        u
    }
}

/// An empty universe is valid: the dataset just has no vote columns.
pub fn extract(site: &Site, detail: &str) -> CandidateUniverse {
    let page = Page::parse(detail);
    let schema = &site.schema;
    let rule = schema.candidates;

    let mut universe = CandidateUniverse::new();
    for table in site.scanner().tables(&page) {
        for row in table.data_rows(schema.header_rows) {
            let cells = row.cells();
            if schema.classify(&rule, &cells) == RowKind::Data {
                universe.insert(&cells[rule.key_col]);
            }
        }
    }

    debug!(count = universe.len(), "candidate universe extracted");
    universe
}

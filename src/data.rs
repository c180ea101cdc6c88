// src/data.rs
//
// Final denormalized dataset.
//
// - header: fixed prefix columns + candidate names in universe order.
// - rows:   one OutputRow per location, in listing order.
//
// A row keeps its fixed fields apart from its votes, so a candidate named
// like a fixed column cannot overwrite it. Unset columns (missing totals)
// are written as empty fields.

use std::collections::HashMap;

use crate::config::consts::*;
use crate::error::{ Field, Warning };
use crate::specs::{ CandidateUniverse, LocationEntry, LocationResult };

pub const PREFIX_COLUMNS: [&str; 5] = [COL_CODE, COL_NAME, COL_REGISTERED, COL_ENVELOPES, COL_VALID];

pub fn build_header(universe: &CandidateUniverse) -> Vec<String> {
    let mut h: Vec<String> = PREFIX_COLUMNS.iter().map(|c| s!(*c)).collect();
    h.extend(universe.iter().map(|n| s!(n)));
    h
}

/// Candidate names that repeat a fixed column name in the header.
pub fn reserved_names(universe: &CandidateUniverse) -> Vec<&str> {
    universe.iter().filter(|n| PREFIX_COLUMNS.iter().any(|c| *c == *n)).collect()
}

/// Header position `i` is a fixed column when it holds `PREFIX_COLUMNS[i]`;
/// every other position is a candidate, even one that shares a fixed name.
fn is_prefix_at(i: usize, column: &str) -> bool {
    PREFIX_COLUMNS.get(i) == Some(&column)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputRow {
    fixed: HashMap<String, String>,
    votes: HashMap<String, String>,
}

impl OutputRow {
    /// `code`/`name` from the entry, totals and votes from the result.
    pub fn from_parts(entry: &LocationEntry, result: &LocationResult) -> Self {
        let mut row = Self::default();
        row.set(COL_CODE, &entry.code);
        row.set(COL_NAME, &entry.name);
        for f in [Field::Registered, Field::Envelopes, Field::Valid] {
            if let Some(v) = result.totals.get(f) {
                row.set(f.column(), v);
            }
        }
        row.votes = result.votes.clone();
        row
    }

    /// Fixed (non-candidate) column value.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fixed.get(column).map(String::as_str)
    }

    pub fn set(&mut self, column: &str, value: &str) {
        self.fixed.insert(s!(column), s!(value));
    }

    pub fn votes_for(&self, name: &str) -> Option<&str> {
        self.votes.get(name).map(String::as_str)
    }

    pub fn set_votes(&mut self, name: &str, count: &str) {
        self.votes.insert(s!(name), s!(count));
    }

    /// Values in `header` order; unset columns become "".
    pub fn record(&self, header: &[String]) -> Vec<String> {
        header
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let v = if is_prefix_at(i, c) { self.get(c) } else { self.votes_for(c) };
                v.map(String::from).unwrap_or_default()
            })
            .collect()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DataSet {
    pub header: Vec<String>,
    pub rows: Vec<OutputRow>,
    /// Non-fatal conditions met while assembling, in occurrence order.
    pub warnings: Vec<Warning>,
}

impl DataSet {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows as header-ordered records.
    pub fn records(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| r.record(&self.header)).collect()
    }
}

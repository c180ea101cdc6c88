// src/config/schema.rs
//! Structural contract of the results site.
//!
//! Everything the extractors assume about the markup lives here: which tables
//! carry data, how many caption rows each table opens with, which `headers`
//! tokens mark the administrative totals, and how a row is told apart from
//! separators and sums. A site-format change should only touch this file.

use super::consts::*;

/// Tag for one table row, as seen by a given [`RowRule`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    /// Caption/heading row: no data cells, or fewer than the rule needs.
    Header,
    /// Empty or placeholder (`-`) key cell.
    Separator,
    /// Sum row: aggregate label, or a number where a name belongs.
    Aggregate,
    Data,
}

/// Row shape one extractor expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowRule {
    /// Cell holding the row's identity (code or candidate name).
    pub key_col: usize,
    pub min_cells: usize,
    /// Wholly numeric key means a misaligned/summary row.
    pub reject_numeric: bool,
}

/// `headers` attribute tokens of the three administrative total cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TotalsMarkers {
    pub registered: String,
    pub envelopes: String,
    pub valid: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageSchema {
    pub table_class: String,
    /// Leading `<tr>` count skipped in every data table.
    pub header_rows: usize,
    pub placeholder: String,
    pub aggregate_labels: Vec<String>,
    pub markers: TotalsMarkers,
    pub locations: RowRule,
    pub candidates: RowRule,
    pub votes: RowRule,
}

impl Default for PageSchema {
    fn default() -> Self {
        Self {
            table_class: s!(TABLE_CLASS),
            header_rows: HEADER_ROWS,
            placeholder: s!(PLACEHOLDER),
            aggregate_labels: AGGREGATE_LABELS.iter().map(|l| s!(*l)).collect(),
            markers: TotalsMarkers {
                registered: s!(MARKER_REGISTERED),
                envelopes: s!(MARKER_ENVELOPES),
                valid: s!(MARKER_VALID),
            },
            // code | name | ... ; codes are numeric
            locations: RowRule { key_col: 0, min_cells: 3, reject_numeric: false },
            // number | name | votes | ...
            candidates: RowRule { key_col: 1, min_cells: 2, reject_numeric: true },
            votes: RowRule { key_col: 1, min_cells: 3, reject_numeric: true },
        }
    }
}

impl PageSchema {
    /// Single row classifier shared by every extractor.
    pub fn classify(&self, rule: &RowRule, cells: &[String]) -> RowKind {
        if cells.len() < rule.min_cells {
            return RowKind::Header;
        }
        let Some(key) = cells.get(rule.key_col).map(|c| c.trim()) else {
            return RowKind::Header;
        };
        if key.is_empty() || key == self.placeholder {
            return RowKind::Separator;
        }
        if self.aggregate_labels.iter().any(|l| l == key) {
            return RowKind::Aggregate;
        }
        if rule.reject_numeric && key.chars().all(char::is_numeric) {
            return RowKind::Aggregate;
        }
        RowKind::Data
    }
}

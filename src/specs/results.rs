// src/specs/results.rs
//! Detail page → one location's totals and per-candidate votes.
//!
//! Totals sit in cells tagged by `headers` tokens (`sa2`, `sa3`, `sa6`).
//! Votes are `name | count` pairs from the candidate tables, kept only for
//! names in the universe; every universe name without a row gets `"0"`.

use std::collections::HashMap;

use tracing::debug;

use crate::config::schema::RowKind;
use crate::core::html::Page;
use crate::error::{ Field, Warning };
use super::{ CandidateUniverse, Site };

pub const ZERO_VOTES: &str = "0";

/// Raw count texts; `None` when the marker cell is absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Totals {
    pub registered: Option<String>,
    pub envelopes: Option<String>,
    pub valid: Option<String>,
}

impl Totals {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Registered => self.registered.as_deref(),
            Field::Envelopes => self.envelopes.as_deref(),
            Field::Valid => self.valid.as_deref(),
        }
    }

    pub fn missing(&self) -> Vec<Field> {
        [Field::Registered, Field::Envelopes, Field::Valid]
            .into_iter()
            .filter(|f| self.get(*f).is_none())
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationResult {
    pub totals: Totals,
    /// One entry per universe name after reconciliation.
    pub votes: HashMap<String, String>,
    pub warnings: Vec<Warning>,
}

impl LocationResult {
    pub fn votes_for(&self, name: &str) -> Option<&str> {
        self.votes.get(name).map(String::as_str)
    }
}

/// `url` is only used to label warnings.
pub fn extract(site: &Site, detail: &str, universe: &CandidateUniverse, url: &str) -> LocationResult {
    let page = Page::parse(detail);
    let scanner = site.scanner();
    let mut warnings = Vec::new();

    // 1) administrative totals
    let totals = Totals {
        registered: scanner.first_text(&page, &site.registered),
        envelopes: scanner.first_text(&page, &site.envelopes),
        valid: scanner.first_text(&page, &site.valid),
    };
    let missing = totals.missing();
    if !missing.is_empty() {
        warnings.push(Warning::MissingFields { url: s!(url), fields: missing });
    }

    // 2) votes from every candidate table
    let schema = &site.schema;
    let rule = schema.votes;
    let count_col = rule.key_col + 1;
    let mut votes: HashMap<String, String> = HashMap::with_capacity(universe.len());
    let mut unknown: Vec<String> = Vec::new();

    for table in scanner.tables(&page) {
        for row in table.data_rows(schema.header_rows) {
            let cells = row.cells();
            let kind = schema.classify(&rule, &cells);
            if kind == RowKind::Header { continue; }

            let name = &cells[rule.key_col];
            if universe.contains(name) {
                let count = row.count(count_col).unwrap_or_default();
                // last write wins; flag disagreement
                if let Some(prev) = votes.insert(name.clone(), count.clone()) {
                    if prev != count {
                        warnings.push(Warning::ConflictingVotes {
                            url: s!(url),
                            name: name.clone(),
                            previous: prev,
                            current: count,
                        });
                    }
                }
            } else if kind == RowKind::Data && !unknown.contains(name) {
                unknown.push(name.clone());
            }
        }
    }

    if !unknown.is_empty() {
        warnings.push(Warning::UnknownCandidates { url: s!(url), names: unknown });
    }

    // 3) zero-fill, unconditionally
    for name in universe.iter() {
        votes.entry(s!(name)).or_insert_with(|| s!(ZERO_VOTES));
    }

    debug!(url, votes = votes.len(), warnings = warnings.len(), "location extracted");
    LocationResult { totals, votes, warnings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ consts::BASE_URL, schema::PageSchema };

    fn site() -> Site {
        Site::new(PageSchema::default(), BASE_URL).unwrap()
    }

    const TOTALS: &str = r#"
        <table id="ps311_t1">
          <tr><td headers="sa2">1&nbsp;205</td><td headers="sa3">811</td><td headers="sa6">806</td></tr>
        </table>"#;

    fn parties(rows: &str) -> String {
        format!(
            r#"<table class="table">
                 <tr><th colspan="3">Strana</th></tr>
                 <tr><th>číslo</th><th>název</th><th>celkem</th></tr>
                 {rows}
               </table>"#
        )
    }

    fn universe() -> CandidateUniverse {
        ["Party X", "Party Y"].into_iter().collect()
    }

    #[test]
    fn absent_candidate_is_zero_filled() {
        let html = format!("{TOTALS}{}", parties(r#"<tr><td>1</td><td>Party X</td><td>50</td></tr>"#));
        let res = extract(&site(), &html, &universe(), "u");
        assert_eq!(res.votes_for("Party X"), Some("50"));
        assert_eq!(res.votes_for("Party Y"), Some("0"));
        assert_eq!(res.votes.len(), universe().len());
        assert_eq!(res.totals.registered.as_deref(), Some("1205"));
        assert!(res.warnings.is_empty());
    }

    #[test]
    fn missing_marker_is_a_warning_not_an_error() {
        let html = format!(
            r#"<table><tr><td headers="sa2">100</td><td headers="sa6">90</td></tr></table>{}"#,
            parties(r#"<tr><td>1</td><td>Party X</td><td>90</td></tr>"#),
        );
        let res = extract(&site(), &html, &universe(), "http://x/2");
        assert_eq!(res.totals.registered.as_deref(), Some("100"));
        assert_eq!(res.totals.envelopes, None);
        assert_eq!(res.totals.valid.as_deref(), Some("90"));
        assert_eq!(res.warnings, vec![Warning::MissingFields {
            url: s!("http://x/2"),
            fields: vec![Field::Envelopes],
        }]);
    }

    #[test]
    fn votes_are_read_from_every_table() {
        let html = format!(
            "{TOTALS}{}{}",
            parties(r#"<tr><td>1</td><td>Party X</td><td>1&nbsp;001</td></tr>"#),
            parties(r#"<tr><td>2</td><td>Party Y</td><td>7</td></tr>"#),
        );
        let res = extract(&site(), &html, &universe(), "u");
        assert_eq!(res.votes_for("Party X"), Some("1001"));
        assert_eq!(res.votes_for("Party Y"), Some("7"));
    }

    #[test]
    fn conflicting_counts_keep_last_and_warn() {
        let html = format!(
            "{TOTALS}{}{}",
            parties(r#"<tr><td>1</td><td>Party X</td><td>10</td></tr>"#),
            parties(r#"<tr><td>1</td><td>Party X</td><td>12</td></tr>"#),
        );
        let res = extract(&site(), &html, &universe(), "u");
        assert_eq!(res.votes_for("Party X"), Some("12"));
        assert!(res.warnings.contains(&Warning::ConflictingVotes {
            url: s!("u"),
            name: s!("Party X"),
            previous: s!("10"),
            current: s!("12"),
        }));
    }

    #[test]
    fn names_outside_universe_are_reported_not_captured() {
        let html = format!(
            "{TOTALS}{}",
            parties(
                r#"<tr><td>1</td><td>Party X</td><td>5</td></tr>
                   <tr><td>9</td><td>Party Z</td><td>3</td></tr>
                   <tr><td></td><td>Celkem</td><td>8</td></tr>"#
            ),
        );
        let res = extract(&site(), &html, &universe(), "u");
        assert!(!res.votes.contains_key("Party Z"));
        assert_eq!(res.votes.len(), 2);
        assert_eq!(res.warnings, vec![Warning::UnknownCandidates {
            url: s!("u"),
            names: vec![s!("Party Z")],
        }]);
    }

    #[test]
    fn two_cell_rows_are_ignored() {
        let html = format!("{TOTALS}{}", parties(r#"<tr><td>1</td><td>Party X</td></tr>"#));
        let res = extract(&site(), &html, &universe(), "u");
        assert_eq!(res.votes_for("Party X"), Some("0"));
    }

    #[test]
    fn empty_universe_gives_no_votes() {
        let html = format!("{TOTALS}{}", parties(r#"<tr><td>1</td><td>Party X</td><td>5</td></tr>"#));
        let res = extract(&site(), &html, &CandidateUniverse::new(), "u");
        assert!(res.votes.is_empty());
    }
}

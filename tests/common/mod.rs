// tests/common/mod.rs
//
// Offline fixtures shaped like the results site: a listing page and
// detail pages, served by a closure-based fetcher.
#![allow(dead_code)]

use std::collections::HashMap;

use volby_scrape::error::FetchError;

pub const BASE: &str = "https://www.volby.cz/pls/ps2017nss/";
pub const LISTING_URL: &str = "https://www.volby.cz/pls/ps2017nss/ps32?xjazyk=CZ&xkraj=2&xnumnuts=2101";

pub fn detail_url(code: &str) -> String {
    format!("{BASE}ps311?xobec={code}")
}

/// Listing with one data table; `rows` are (code, name) pairs.
pub fn listing(rows: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (code, name) in rows {
        if *code == "-" {
            body.push_str("<tr><td>-</td><td>-</td><td>-</td></tr>\n");
        } else {
            body.push_str(&format!(
                r#"<tr><td class="cislo"><a href="ps311?xobec={code}">{code}</a></td><td class="overflow_name">{name}</td><td><a href="ps33?x={code}">X</a></td></tr>
"#
            ));
        }
    }
    format!(
        r#"<html><body><div id="inner">
<table class="table">
<tr><th id="t1sa1" colspan="3">Obec</th></tr>
<tr><th>číslo</th><th>název</th><th>Výběr okrsku</th></tr>
{body}</table></div></body></html>"#
    )
}

/// Detail page; `totals` is (registered, envelopes, valid), `None` drops the marker.
pub fn detail(totals: (Option<&str>, Option<&str>, Option<&str>), parties: &[(&str, &str, &str)]) -> String {
    let cell = |marker: &str, v: Option<&str>| match v {
        Some(v) => format!(r#"<td class="cislo" headers="sa1 {marker}">{v}</td>"#),
        None => String::new(),
    };
    let mut rows = String::new();
    for (num, name, votes) in parties {
        rows.push_str(&format!(
            r#"<tr><td class="cislo">{num}</td><td class="overflow_name">{name}</td><td class="cislo">{votes}</td><td class="cislo">1,00</td></tr>
"#
        ));
    }
    format!(
        r#"<html><body>
<table class="table" id="ps311_t1">
<tr><th id="sa1">Okrsky</th><th id="sa2">Voliči v seznamu</th><th id="sa3">Vydané obálky</th><th id="sa6">Platné hlasy</th></tr>
<tr><th>celkem</th><th></th><th></th><th></th></tr>
<tr>{}{}{}</tr>
</table>
<div class="t2_470">
<table class="table">
<tr><th>Strana</th><th>Platné hlasy</th></tr>
<tr><th>číslo</th><th>název</th><th>celkem</th><th>v %</th></tr>
{rows}</table>
</div></body></html>"#,
        cell("sa2", totals.0),
        cell("sa3", totals.1),
        cell("sa6", totals.2),
    )
}

pub const FULL: (Option<&str>, Option<&str>, Option<&str>) = (Some("205"), Some("145"), Some("144"));

/// Address → markup; unknown addresses answer 404.
pub struct FakeSite {
    pub pages: HashMap<String, String>,
}

impl FakeSite {
    pub fn new() -> Self {
        Self { pages: HashMap::new() }
    }

    pub fn page(mut self, url: &str, markup: String) -> Self {
        self.pages.insert(url.to_string(), markup);
        self
    }

    pub fn get(&self, url: &str) -> Result<String, FetchError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
    }
}

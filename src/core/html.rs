// src/core/html.rs
//! Structural access to the result tables of a page.
//!
//! No business rules here: a [`Scanner`] finds every table carrying the
//! schema's class, walks its `<tr>` rows and hands out normalized `<td>` texts.
//! Deciding which rows matter is the extractors' job.

use scraper::{ ElementRef, Html, Selector };

use crate::config::schema::PageSchema;
use crate::core::sanitize::{ normalize_count, normalize_ws };
use crate::error::ScrapeError;

/// Parsed markup of one page.
pub struct Page {
    doc: Html,
}

impl Page {
    pub fn parse(markup: &str) -> Self {
        Self { doc: Html::parse_document(markup) }
    }
}

/// Selectors compiled once from a [`PageSchema`].
#[derive(Debug)]
pub struct Scanner {
    table: Selector,
    row: Selector,
    cell: Selector,
    link: Selector,
}

fn compile(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Schema(format!("invalid selector '{css}': {e}")))
}

/// `<td>` whose `headers` attribute carries `token` (it is a token list).
pub fn marker_selector(token: &str) -> Result<Selector, ScrapeError> {
    compile(&format!(r#"td[headers~="{token}"]"#))
}

impl Scanner {
    pub fn new(schema: &PageSchema) -> Result<Self, ScrapeError> {
        Ok(Self {
            table: compile(&format!("table.{}", schema.table_class))?,
            row: compile("tr")?,
            cell: compile("td")?,
            link: compile("a[href]")?,
        })
    }

    /// Every qualifying table in document order; empty when there are none.
    pub fn tables<'a>(&'a self, page: &'a Page) -> impl Iterator<Item = Table<'a>> + 'a {
        page.doc.select(&self.table).map(move |el| Table { el, scanner: self })
    }

    /// Text of the first cell matched by `sel`, counts-normalized.
    pub fn first_text(&self, page: &Page, sel: &Selector) -> Option<String> {
        page.doc.select(sel).next().map(|el| normalize_count(&raw_text(el)))
    }
}

#[derive(Clone, Copy)]
pub struct Table<'a> {
    el: ElementRef<'a>,
    scanner: &'a Scanner,
}

impl<'a> Table<'a> {
    /// All `<tr>` rows, captions included.
    pub fn rows(self) -> impl Iterator<Item = Row<'a>> {
        let scanner = self.scanner;
        self.el.select(&scanner.row).map(move |el| Row {
            cells: el.select(&scanner.cell).collect(),
            scanner,
        })
    }

    /// Rows after the fixed caption block.
    pub fn data_rows(self, header_rows: usize) -> impl Iterator<Item = Row<'a>> {
        self.rows().skip(header_rows)
    }
}

pub struct Row<'a> {
    cells: Vec<ElementRef<'a>>,
    scanner: &'a Scanner,
}

impl<'a> Row<'a> {
    /// Cell texts, whitespace-collapsed and trimmed.
    pub fn cells(&self) -> Vec<String> {
        self.cells.iter().map(|c| normalize_ws(&raw_text(*c))).collect()
    }

    /// Cell `i` read as a count (NBSP separators removed).
    pub fn count(&self, i: usize) -> Option<String> {
        self.cells.get(i).map(|c| normalize_count(&raw_text(*c)))
    }

    /// `href` of the first link inside cell `i`.
    pub fn link(&self, i: usize) -> Option<&'a str> {
        let cell = self.cells.get(i)?;
        cell.select(&self.scanner.link).next()?.value().attr("href")
    }
}

fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_TABLES: &str = r#"
        <html><body>
        <table class="table"><tr><th>a</th></tr><tr><th>b</th></tr>
          <tr><td><a href="x?1">1</a></td><td> First&nbsp;row </td><td>1&nbsp;000</td></tr>
        </table>
        <table class="other"><tr><td>ignored</td></tr></table>
        <table class="table wide"><tr><th>a</th></tr><tr><th>b</th></tr>
          <tr><td>2</td><td>Second</td></tr>
        </table>
        </body></html>"#;

    #[test]
    fn finds_every_classed_table() {
        let page = Page::parse(TWO_TABLES);
        let scanner = Scanner::new(&PageSchema::default()).unwrap();
        assert_eq!(scanner.tables(&page).count(), 2);
    }

    #[test]
    fn skips_captions_and_normalizes_cells() {
        let page = Page::parse(TWO_TABLES);
        let scanner = Scanner::new(&PageSchema::default()).unwrap();
        let rows: Vec<Row> = scanner.tables(&page).flat_map(|t| t.data_rows(2)).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells(), vec!["1", "First row", "1 000"]);
        assert_eq!(rows[0].count(2).as_deref(), Some("1000"));
        assert_eq!(rows[0].link(0), Some("x?1"));
        assert_eq!(rows[1].link(0), None);
        assert_eq!(rows[1].count(5), None);
    }

    #[test]
    fn no_tables_is_empty() {
        let page = Page::parse("<p>nothing here</p>");
        let scanner = Scanner::new(&PageSchema::default()).unwrap();
        assert_eq!(scanner.tables(&page).count(), 0);
    }

    #[test]
    fn marker_matches_header_token() {
        let page = Page::parse(r#"<table><tr><td headers="sa1 sa2">1&nbsp;024</td></tr></table>"#);
        let scanner = Scanner::new(&PageSchema::default()).unwrap();
        let sel = marker_selector("sa2").unwrap();
        assert_eq!(scanner.first_text(&page, &sel).as_deref(), Some("1024"));
        let missing = marker_selector("sa3").unwrap();
        assert_eq!(scanner.first_text(&page, &missing), None);
    }

    #[test]
    fn bad_class_is_schema_error() {
        let schema = PageSchema { table_class: s!("[["), ..PageSchema::default() };
        assert!(matches!(Scanner::new(&schema), Err(ScrapeError::Schema(_))));
    }
}

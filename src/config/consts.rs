// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.volby.cz/pls/ps2017nss/";
pub const USER_AGENT: &str = concat!("volby_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Scrape
pub const UNIVERSE_SAMPLE: usize = 1; // first location only

// Page schema
pub const TABLE_CLASS: &str = "table";
pub const HEADER_ROWS: usize = 2;
pub const PLACEHOLDER: &str = "-";
pub const AGGREGATE_LABELS: &[&str] = &["Celkem", "Total"];
pub const MARKER_REGISTERED: &str = "sa2";
pub const MARKER_ENVELOPES: &str = "sa3";
pub const MARKER_VALID: &str = "sa6";

// Export
pub const COL_CODE: &str = "code";
pub const COL_NAME: &str = "name";
pub const COL_REGISTERED: &str = "registered";
pub const COL_ENVELOPES: &str = "envelopes";
pub const COL_VALID: &str = "valid";
pub const EXPORT_DELIM: u8 = b';';
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

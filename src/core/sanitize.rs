// src/core/sanitize.rs

pub const NBSP: char = '\u{a0}';

/// Collapse whitespace runs (NBSP included) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Counts use NBSP as a thousands separator ("1 234"); drop it entirely.
pub fn normalize_count(s: &str) -> String {
    let joined: String = s.chars().filter(|&c| c != NBSP).collect();
    joined.trim().to_string()
}

// src/progress.rs
use std::io::{ self, Write };

use crate::error::Warning;

/// Lightweight progress reporting used by the long-running scan.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of locations.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One location processed (1-based index, location name).
    fn item_done(&mut self, _index: usize, _name: &str) {}

    /// Non-fatal condition, once per occurrence.
    fn warn(&mut self, _warning: &Warning) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Status lines on stdout, warnings on stderr.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, index: usize, name: &str) {
        self.done += 1;
        println!("Processing location ({}/{}): {}", index, self.total, name);
    }
    fn warn(&mut self, warning: &Warning) {
        eprintln!("Warning: {warning}");
    }
    fn finish(&mut self) {
        if self.done < self.total {
            println!("Stopped after {}/{} locations", self.done, self.total);
        }
        let _ = io::stdout().flush();
    }
}

/// Collects everything; handy in tests.
#[derive(Default, Debug)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub lines: Vec<String>,
    pub done: Vec<(usize, String)>,
    pub warnings: Vec<Warning>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }
    fn item_done(&mut self, index: usize, name: &str) {
        self.done.push((index, s!(name)));
    }
    fn warn(&mut self, warning: &Warning) {
        self.warnings.push(warning.clone());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

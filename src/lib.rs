// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod sink;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;

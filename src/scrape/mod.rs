// src/scrape/mod.rs
mod assemble;

pub use assemble::{ assemble, build_universe, LocationOutcome };

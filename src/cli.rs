// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{ Result, WrapErr };

use crate::config::consts::{ BASE_URL, UNIVERSE_SAMPLE };
use crate::config::options::{ AppOptions, FailurePolicy };
use crate::progress::{ ConsoleProgress, Progress };

#[derive(Debug, Parser)]
#[command(name = "volby", version)]
#[command(about = "Flatten one volby.cz territorial listing into a semicolon CSV")]
pub struct Args {
    /// Listing page of the territorial unit
    pub url: String,

    /// Output file (semicolon separated, UTF-8 with BOM)
    pub output: PathBuf,

    /// Base address that listing links are relative to
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Leading locations whose candidates form the column set
    #[arg(long, default_value_t = UNIVERSE_SAMPLE)]
    pub sample: usize,

    /// Write the locations that succeeded instead of failing the run
    #[arg(long)]
    pub skip_failed: bool,

    /// Omit the UTF-8 byte-order mark
    #[arg(long)]
    pub no_bom: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.scrape.listing_url = self.url.trim().to_string();
        opts.scrape.base_url = self.base_url.clone();
        opts.scrape.universe_sample = self.sample;
        opts.scrape.on_failure = if self.skip_failed { FailurePolicy::Skip } else { FailurePolicy::Abort };
        opts.export.set_path(&self.output.to_string_lossy());
        opts.export.bom = !self.no_bom;
        opts
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(args.verbose);

    let opts = args.to_options();
    let mut progress = ConsoleProgress::new();

    let summary = crate::runner::run(&opts, Some(&mut progress as &mut dyn Progress))
        .wrap_err("scrape failed")?;

    if summary.written {
        println!("DONE. Data saved to: {}", opts.export.out_path().display());
    }
    Ok(())
}

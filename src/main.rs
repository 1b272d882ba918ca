// Copyright Sebastian Wiesner <sebastian@swsnr.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![deny(warnings, missing_docs, clippy::all)]

//! Find the cheapest or fastest deal between two cities.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, event, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trips::{DealSelector, SortMode};

mod config;
mod render;

use config::*;
use render::*;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
struct Arguments {
    /// Use a different configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// JSON file with deals, instead of the one from the configuration
    #[arg(long, value_name = "FILE")]
    deals: Option<PathBuf>,
    /// City to depart from
    #[arg(short = 'f', long = "from", value_name = "CITY")]
    departure: Option<String>,
    /// City to arrive in
    #[arg(short = 't', long = "to", value_name = "CITY")]
    arrival: Option<String>,
    /// Order of deals, either "cheapest" or "fastest"
    #[arg(short = 's', long, value_name = "MODE")]
    sort: Option<SortMode>,
    /// List departure and arrival cities instead of searching
    #[arg(long)]
    cities: bool,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl Arguments {
    fn output(&self) -> Output {
        if self.json {
            Output::Json
        } else {
            Output::Text
        }
    }

    /// The deals file, from the command line or else from `config`.
    fn deals_file<'a>(&'a self, config: &'a Config) -> Result<&'a Path> {
        self.deals
            .as_deref()
            .or(config.deals.as_deref())
            .with_context(|| "No deals file given, use --deals or set deals in configuration")
    }

    /// The sort mode, from the command line or else from `config`.
    fn sort_mode(&self, config: &Config) -> SortMode {
        self.sort.unwrap_or(config.sort)
    }
}

fn load_selector<P: AsRef<Path>>(path: P) -> Result<DealSelector> {
    debug!("Loading deals from {}", path.as_ref().display());
    let contents = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read deals from {}", path.as_ref().display()))?;
    DealSelector::from_json(&contents)
        .with_context(|| format!("Failed to load deals from {}", path.as_ref().display()))
}

fn process_args(args: Arguments) -> Result<()> {
    let config = match &args.config {
        Some(file) => Config::from_file(file)?,
        None => Config::from_default_location()?,
    };

    let mut selector = load_selector(args.deals_file(&config)?)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.cities {
        return write_cities(
            &mut out,
            selector.departure_cities(),
            selector.arrival_cities(),
            args.output(),
        );
    }

    if let Some(departure) = &args.departure {
        selector.set_departure(departure.as_str());
    }
    if let Some(arrival) = &args.arrival {
        selector.set_arrival(arrival.as_str());
    }
    selector.set_sort_mode(args.sort_mode(&config));
    event!(
        Level::INFO,
        "Searching {:?} to {:?} by {}",
        args.departure,
        args.arrival,
        selector.selection().sort_mode()
    );

    let outcome = selector.search()?;
    write_outcome(&mut out, outcome, args.output())
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("error"))
                .unwrap(),
        )
        .init();

    let args = Arguments::parse();
    if let Err(err) = process_args(args) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

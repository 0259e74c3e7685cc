#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;

use clap::{Parser, crate_version};
use solstice::prelude::*;

use crate::cli::{Args, Command, estimate};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Estimate(args) => {
            estimate(&args)?;
        }
        Command::Assumptions(args) => {
            print!("{}", args.load()?.to_toml()?);
        }
    }

    info!("done!");
    Ok(())
}

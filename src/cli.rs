mod assumptions;
mod estimate;

use clap::{Parser, Subcommand};

pub use self::{
    assumptions::AssumptionsArgs,
    estimate::{EstimateArgs, estimate},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: size the installation, cost it, and estimate the payback.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Print the effective hardware and price assumptions as TOML.
    #[clap(name = "assumptions")]
    Assumptions(AssumptionsArgs),
}

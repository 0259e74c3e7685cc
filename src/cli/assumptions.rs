use std::path::PathBuf;

use clap::Parser;
use solstice::{assumptions::Assumptions, prelude::*};

#[derive(Parser)]
pub struct AssumptionsArgs {
    /// TOML file overriding the default panel, inverter and battery ratings and prices.
    #[clap(long = "assumptions", env = "ASSUMPTIONS_PATH")]
    pub path: Option<PathBuf>,
}

impl AssumptionsArgs {
    pub fn load(&self) -> Result<Assumptions> {
        self.path.as_ref().map_or_else(|| Ok(Assumptions::default()), Assumptions::read_from)
    }
}

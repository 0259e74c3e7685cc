#[macro_use]
mod macros;

pub mod currency;
pub mod electric;
pub mod energy;
pub mod power;
pub mod time;

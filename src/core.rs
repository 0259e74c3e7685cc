//! Pure sizing and payback calculations.

pub mod roi;
pub mod sizing;
pub mod usage;

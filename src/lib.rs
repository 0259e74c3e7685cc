#![doc = include_str!("../README.md")]

pub mod assumptions;
pub mod core;
pub mod prelude;
pub mod quantity;
pub mod report;
mod tables;

//! Common functionality for the chaseplan production planner.
#![warn(missing_docs)]
pub mod cli;
pub mod costs;
pub mod input;
pub mod log;
pub mod output;
pub mod plan;
pub mod settings;
pub mod units;

#[cfg(test)]
mod fixture;

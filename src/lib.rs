//! Purchase frequency tracking for a daily grocery record.
//!
//! [`record`] turns the raw log into a [`store::FrequencyMap`], [`store`]
//! answers lookups and writes the histogram snapshot, and [`engine`] wraps
//! both behind the three queries the shell needs.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod menu;
pub mod record;
pub mod report;
pub mod store;

pub use engine::Engine;
pub use error::Error;
pub use store::{FrequencyMap, Lookup};

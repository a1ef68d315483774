extern crate colored;
extern crate serde;
extern crate serde_json;

mod board;

pub mod config;
pub mod error;
pub mod filters;
pub mod query;
pub mod seed;
pub mod storage;
pub mod task;
pub mod traits;
pub mod validate;
pub mod viewer;

#[cfg(test)]
mod strategies;

pub use board::*;
pub use config::Config;
pub use error::{Error, SeedError};

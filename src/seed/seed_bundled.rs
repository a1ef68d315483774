use crate::{error::SeedError, task::Task};

use super::seed::SeedSource;

const BUNDLED_TASKS: &str = include_str!("../../data/tasks.json");

/// The sample board shipped inside the binary.
pub struct BundledSeed {}

impl BundledSeed {
  pub fn new() -> Self {
    return Self {};
  }
}

impl SeedSource for BundledSeed {
  fn fetch(&self) -> Result<Vec<Task>, SeedError> {
    Ok(serde_json::from_str(BUNDLED_TASKS)?)
  }
}

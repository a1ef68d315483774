use crate::{error::SeedError, task::Task};

pub trait SeedSource {
  fn fetch(&self) -> Result<Vec<Task>, SeedError>;
}

use std::collections::HashMap;

use log::{error, warn};

use crate::{filters::Filters, task::Task};

use super::storage::{Storage, FILTERS_KEY, TASKS_KEY};

/// Process-local storage. Records are kept serialized so reads see exactly
/// what a durable store would return.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
  records: HashMap<&'static str, String>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Places a raw record under `key`, bypassing serialization.
  #[cfg(test)]
  pub(crate) fn with_record(mut self, key: &'static str, raw: &str) -> Self {
    self.records.insert(key, raw.to_owned());
    self
  }

  #[cfg(test)]
  pub(crate) fn raw(&self, key: &str) -> Option<&str> {
    self.records.get(key).map(|r| r.as_str())
  }

  fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
    let raw = self.records.get(key)?;
    match serde_json::from_str(raw) {
      Ok(value) => Some(value),
      Err(err) => {
        warn!("ignoring corrupt record {}: {}", key, err);
        None
      }
    }
  }

  fn set<T: serde::Serialize + ?Sized>(&mut self, key: &'static str, value: &T) {
    match serde_json::to_string(value) {
      Ok(raw) => {
        self.records.insert(key, raw);
      }
      Err(err) => error!("can't serialize {}: {}", key, err),
    }
  }
}

impl Storage for MemoryStorage {
  fn tasks(&self) -> Option<Vec<Task>> {
    self.get(TASKS_KEY)
  }

  fn set_tasks(&mut self, tasks: &[Task]) {
    self.set(TASKS_KEY, tasks);
  }

  fn filters(&self) -> Option<Filters> {
    self.get(FILTERS_KEY)
  }

  fn set_filters(&mut self, filters: &Filters) {
    self.set(FILTERS_KEY, filters);
  }

  fn clear(&mut self) {
    self.records.remove(TASKS_KEY);
    self.records.remove(FILTERS_KEY);
  }
}

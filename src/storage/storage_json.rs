use std::{
  io::Write,
  path::{Path, PathBuf},
};

use log::{debug, error, warn};

use crate::{filters::Filters, task::Task};

use super::storage::{Storage, FILTERS_KEY, TASKS_KEY};

/// Keeps each record as a pretty-printed JSON file named after its key.
pub struct JsonStorage {
  tasks: JsonStorageItem,
  filters: JsonStorageItem,
}

impl JsonStorage {
  pub fn new(database_folder: &Path) -> Self {
    let join_path = |key: &str| database_folder.join(format!("{}.json", key));

    Self {
      tasks: JsonStorageItem::new(join_path(TASKS_KEY)),
      filters: JsonStorageItem::new(join_path(FILTERS_KEY)),
    }
  }

  #[cfg(test)]
  pub(crate) fn tasks_filepath(&self) -> &Path {
    &self.tasks.filepath
  }

  #[cfg(test)]
  pub(crate) fn filters_filepath(&self) -> &Path {
    &self.filters.filepath
  }
}

impl Storage for JsonStorage {
  fn tasks(&self) -> Option<Vec<Task>> {
    let tasks: Vec<Task> = self.tasks.restore()?;
    debug!(
      "restored {} tasks from: {}",
      tasks.len(),
      self.tasks.filepath.display()
    );
    Some(tasks)
  }

  fn set_tasks(&mut self, tasks: &[Task]) {
    self.tasks.flush(tasks);
  }

  fn filters(&self) -> Option<Filters> {
    self.filters.restore()
  }

  fn set_filters(&mut self, filters: &Filters) {
    self.filters.flush(filters);
  }

  fn clear(&mut self) {
    self.tasks.remove();
    self.filters.remove();
  }
}

struct JsonStorageItem {
  filepath: PathBuf,
}

impl JsonStorageItem {
  fn new(filepath: PathBuf) -> Self {
    Self { filepath }
  }

  fn restore<T: serde::de::DeserializeOwned>(&self) -> Option<T> {
    let content = match std::fs::read_to_string(&self.filepath) {
      Ok(content) => content,
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
      Err(err) => {
        error!("can't read {}: {}", self.filepath.display(), err);
        return None;
      }
    };

    if content.trim().is_empty() {
      return None;
    }

    match serde_json::from_str(&content) {
      Ok(value) => Some(value),
      Err(err) => {
        warn!("ignoring corrupt record {}: {}", self.filepath.display(), err);
        None
      }
    }
  }

  fn flush<T: serde::Serialize + ?Sized>(&self, value: &T) {
    if let Err(err) = self.write(value) {
      error!("can't write {}: {}", self.filepath.display(), err);
    }
  }

  // Readers see either the previous file or the new one, never a partial write.
  fn write<T: serde::Serialize + ?Sized>(&self, value: &T) -> std::io::Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    let folder = self.filepath.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp_file = tempfile::Builder::new()
      .prefix(".taskboard")
      .suffix(".json")
      .tempfile_in(folder)?;
    tmp_file.write_all(content.as_bytes())?;
    tmp_file.flush()?;
    tmp_file.persist(&self.filepath).map_err(|err| err.error)?;

    debug!("saved {} bytes to: {}", content.len(), self.filepath.display());
    Ok(())
  }

  fn remove(&self) {
    match std::fs::remove_file(&self.filepath) {
      Ok(_) => {}
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
      Err(err) => error!("can't remove {}: {}", self.filepath.display(), err),
    }
  }
}

use log::debug;

use crate::{error::SeedError, task::Task};

use super::seed::SeedSource;

pub struct FileSeed {
  path: String,
}

impl FileSeed {
  pub fn new(path: &str) -> Self {
    Self {
      path: path.to_owned(),
    }
  }
}

impl SeedSource for FileSeed {
  fn fetch(&self) -> Result<Vec<Task>, SeedError> {
    debug!("reading seed tasks from: {}", self.path);
    let content = std::fs::read_to_string(&self.path).map_err(SeedError::Unavailable)?;
    Ok(serde_json::from_str(&content)?)
  }
}

#[cfg(test)]
mod test {
  use std::io::Write;

  use super::{FileSeed, SeedSource};

  #[test]
  fn missing_file_fails_with_load_message() {
    let err = FileSeed::new("/nonexistent/taskboard/tasks.json")
      .fetch()
      .expect_err("missing seed file must fail");
    assert_eq!(err.to_string(), "Failed to load tasks");
  }

  #[test]
  fn reads_task_array() {
    let mut file = tempfile::Builder::new()
      .prefix("taskboard")
      .suffix(".json")
      .tempfile()
      .unwrap();
    file
      .write_all(
        br#"[{"id":5,"title":"Fix bug","description":"Investigate crash on load","priority":"High","assignee":"Ann","status":"Done"}]"#,
      )
      .unwrap();

    let tasks = FileSeed::new(file.path().to_str().unwrap()).fetch().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title(), "Fix bug");
  }

  #[test]
  fn malformed_body_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"tasks\": []}").unwrap();

    let result = FileSeed::new(file.path().to_str().unwrap()).fetch();
    assert!(result.is_err());
  }
}

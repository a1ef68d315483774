#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("HOME is not set, use TASKBOARD_CONFIG to point at a config file")]
  HomeNotSet,

  #[error("unknown priority: '{0}', expected one of High, Medium, Low")]
  UnknownPriority(String),

  #[error("unknown status: '{0}', expected one of To Do, In Progress, Done")]
  UnknownStatus(String),

  #[error("config file {path}: {source}")]
  Config {
    path: String,
    #[source]
    source: serde_json::Error,
  },

  #[error(transparent)]
  Io(#[from] std::io::Error),
}

/// Failure of the seed dataset fetch, the only failure surfaced to the board.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
  #[error("Failed to load tasks")]
  Unavailable(#[source] std::io::Error),

  #[error("Failed to load tasks")]
  Status(u16),

  #[error("Failed to load tasks")]
  Request(#[from] reqwest::Error),

  #[error("{0}")]
  Malformed(#[from] serde_json::Error),
}

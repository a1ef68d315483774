use super::{BundledSeed, FileSeed, HttpSeed, SeedSource};

/// Where the default task list comes from when nothing is persisted yet.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum SeedConfig {
  #[default]
  Bundled,
  File {
    path: String,
  },
  Http {
    url: String,
  },
}

impl SeedConfig {
  pub fn source(&self) -> Box<dyn SeedSource> {
    match self {
      SeedConfig::Bundled => Box::new(BundledSeed::new()),
      SeedConfig::File { path } => Box::new(FileSeed::new(path)),
      SeedConfig::Http { url } => Box::new(HttpSeed::new(url)),
    }
  }
}

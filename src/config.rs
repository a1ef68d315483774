use std::path::{Path, PathBuf};

use log::debug;

use crate::{error::Error, seed::SeedConfig};

const TASKBOARD_DEFAULT_STORAGE_DIR: &str = ".taskboard";
const TASKBOARD_DEFAULT_CONFIG_NAME: &str = ".taskboard.json";
const TASKBOARD_CONFIG_ENV: &str = "TASKBOARD_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Config {
  pub storage_dir_path: String,
  #[serde(default)]
  pub seed: SeedConfig,
}

impl Config {
  /// Reads the config from `$TASKBOARD_CONFIG` or `~/.taskboard.json`,
  /// writing a default one on first run.
  pub fn new() -> Result<Self, Error> {
    let config_file_path = match std::env::var(TASKBOARD_CONFIG_ENV) {
      Ok(file_path) => PathBuf::from(file_path),
      Err(_) => home_dir()?.join(TASKBOARD_DEFAULT_CONFIG_NAME),
    };

    if !config_file_path.exists() {
      let config = Self::with_storage_dir(&home_dir()?.join(TASKBOARD_DEFAULT_STORAGE_DIR));
      config.save(&config_file_path)?;
      debug!("created default config: {}", config_file_path.display());
      return Ok(config);
    }

    return Self::load(&config_file_path);
  }

  pub fn with_storage_dir(storage_dir: &Path) -> Self {
    Self {
      storage_dir_path: storage_dir.to_string_lossy().into_owned(),
      seed: SeedConfig::Bundled,
    }
  }

  pub fn load(path: &Path) -> Result<Self, Error> {
    let file = std::fs::File::open(path)?;
    serde_json::from_reader(file).map_err(|source| Error::Config {
      path: path.display().to_string(),
      source,
    })
  }

  pub fn save(&self, path: &Path) -> Result<(), Error> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, self).map_err(|source| Error::Config {
      path: path.display().to_string(),
      source,
    })
  }
}

fn home_dir() -> Result<PathBuf, Error> {
  std::env::var("HOME")
    .map(PathBuf::from)
    .map_err(|_| Error::HomeNotSet)
}

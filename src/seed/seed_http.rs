use log::{debug, warn};

use crate::{error::SeedError, task::Task};

use super::seed::SeedSource;

/// Fetches the seed list with a blocking GET.
pub struct HttpSeed {
  url: String,
  system_proxy: bool,
}

impl HttpSeed {
  pub fn new(url: &str) -> Self {
    Self {
      url: url.to_owned(),
      system_proxy: true,
    }
  }

  /// Ignore `HTTP_PROXY` and friends.
  #[cfg(test)]
  pub(crate) fn without_proxy(mut self) -> Self {
    self.system_proxy = false;
    self
  }

  fn client(&self) -> reqwest::Result<reqwest::blocking::Client> {
    let mut builder = reqwest::blocking::Client::builder();
    if !self.system_proxy {
      builder = builder.no_proxy();
    }
    builder.build()
  }
}

impl SeedSource for HttpSeed {
  fn fetch(&self) -> Result<Vec<Task>, SeedError> {
    debug!("fetching seed tasks from: {}", self.url);
    let response = self.client()?.get(&self.url).send()?;

    let status = response.status();
    if !status.is_success() {
      warn!("seed fetch {} answered {}", self.url, status);
      return Err(SeedError::Status(status.as_u16()));
    }

    let body = response.text()?;
    Ok(serde_json::from_str(&body)?)
  }
}

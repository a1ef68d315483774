use log::warn;

use crate::{error::Error, task::Priority};

/// The three AND-combined criteria applied to the board.
///
/// An absent value means "no filter". On the string boundary (setters and the
/// persisted record) the empty string also means "no filter".
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(into = "StoredFilters", from = "StoredFilters")]
pub struct Filters {
  search_term: Option<String>,
  priority: Option<Priority>,
  assignee: Option<String>,
}

impl Filters {
  pub fn new(search_term: &str, priority: Option<Priority>, assignee: &str) -> Self {
    Self {
      search_term: non_empty(search_term),
      priority,
      assignee: non_empty(assignee),
    }
  }

  pub fn search_term(&self) -> Option<&str> {
    self.search_term.as_deref()
  }

  pub fn priority(&self) -> Option<Priority> {
    self.priority
  }

  pub fn assignee(&self) -> Option<&str> {
    self.assignee.as_deref()
  }

  pub fn set_search_term(&mut self, search_term: &str) {
    self.search_term = non_empty(search_term);
  }

  pub fn set_priority(&mut self, priority: Option<Priority>) {
    self.priority = priority;
  }

  pub fn set_assignee(&mut self, assignee: &str) {
    self.assignee = non_empty(assignee);
  }

  pub fn is_active(&self) -> bool {
    self.search_term.is_some() || self.priority.is_some() || self.assignee.is_some()
  }
}

/// Parses a priority filter as typed by a user. `""` and `"all"` clear it.
pub fn parse_priority_filter(value: &str) -> Result<Option<Priority>, Error> {
  match value.trim() {
    "" => Ok(None),
    v if v.eq_ignore_ascii_case("all") => Ok(None),
    v => v.parse().map(Some),
  }
}

fn non_empty(value: &str) -> Option<String> {
  match value.is_empty() {
    true => None,
    false => Some(value.to_owned()),
  }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredFilters {
  search_term: String,
  priority_filter: String,
  assignee_filter: String,
}

impl From<Filters> for StoredFilters {
  fn from(filters: Filters) -> Self {
    Self {
      search_term: filters.search_term.unwrap_or_default(),
      priority_filter: filters
        .priority
        .map(|p| p.as_str().to_owned())
        .unwrap_or_default(),
      assignee_filter: filters.assignee.unwrap_or_default(),
    }
  }
}

// The stored priority is matched exactly. An unknown value only drops the
// priority filter, the other two keep their stored values.
impl From<StoredFilters> for Filters {
  fn from(stored: StoredFilters) -> Self {
    let priority = match stored.priority_filter.as_str() {
      "" => None,
      p => {
        let priority = Priority::ALL.into_iter().find(|known| known.as_str() == p);
        if priority.is_none() {
          warn!("ignoring unknown stored priority filter: {:?}", p);
        }
        priority
      }
    };
    Filters::new(&stored.search_term, priority, &stored.assignee_filter)
  }
}

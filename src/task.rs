use std::{fmt::Display, str::FromStr};

use crate::{error::Error, traits::Indexable};

#[derive(
  Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Priority {
  High,
  #[default]
  Medium,
  Low,
}

impl Priority {
  pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

  pub fn as_str(&self) -> &'static str {
    match self {
      Priority::High => "High",
      Priority::Medium => "Medium",
      Priority::Low => "Low",
    }
  }
}

impl Display for Priority {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Priority {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "high" => Ok(Priority::High),
      "medium" => Ok(Priority::Medium),
      "low" => Ok(Priority::Low),
      _ => Err(Error::UnknownPriority(s.to_owned())),
    }
  }
}

/// Board column of a task. Columns are ordered `To Do -> In Progress -> Done`.
#[derive(
  Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Status {
  #[default]
  #[serde(rename = "To Do")]
  ToDo,
  #[serde(rename = "In Progress")]
  InProgress,
  #[serde(rename = "Done")]
  Done,
}

impl Status {
  pub const ALL: [Status; 3] = [Status::ToDo, Status::InProgress, Status::Done];

  pub fn as_str(&self) -> &'static str {
    match self {
      Status::ToDo => "To Do",
      Status::InProgress => "In Progress",
      Status::Done => "Done",
    }
  }

  /// One column to the right, `None` for `Done`.
  pub fn next(&self) -> Option<Status> {
    match self {
      Status::ToDo => Some(Status::InProgress),
      Status::InProgress => Some(Status::Done),
      Status::Done => None,
    }
  }

  /// One column to the left, `None` for `To Do`.
  pub fn previous(&self) -> Option<Status> {
    match self {
      Status::ToDo => None,
      Status::InProgress => Some(Status::ToDo),
      Status::Done => Some(Status::InProgress),
    }
  }
}

impl Display for Status {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Status {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let normalized: String = s
      .trim()
      .to_lowercase()
      .chars()
      .filter(|c| c.is_alphanumeric())
      .collect();

    match normalized.as_str() {
      "todo" => Ok(Status::ToDo),
      "inprogress" => Ok(Status::InProgress),
      "done" => Ok(Status::Done),
      _ => Err(Error::UnknownStatus(s.to_owned())),
    }
  }
}

/// Task payload without an id, as dispatched by `Board::add_task`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NewTask {
  pub title: String,
  pub description: String,
  pub priority: Priority,
  pub assignee: String,
  pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Task {
  id: u64,
  title: String,
  description: String,
  priority: Priority,
  assignee: String,
  status: Status,
}

impl Indexable for Task {
  fn id(&self) -> u64 {
    self.id
  }
}

impl Task {
  pub fn new(id: u64, fields: NewTask) -> Self {
    Self {
      id,
      title: fields.title,
      description: fields.description,
      priority: fields.priority,
      assignee: fields.assignee,
      status: fields.status,
    }
  }

  pub fn title(&self) -> &str {
    self.title.as_str()
  }

  pub fn description(&self) -> &str {
    self.description.as_str()
  }

  pub fn priority(&self) -> Priority {
    self.priority
  }

  pub fn assignee(&self) -> &str {
    self.assignee.as_str()
  }

  pub fn status(&self) -> Status {
    self.status
  }

  pub fn set_status(&mut self, status: Status) {
    self.status = status;
  }
}

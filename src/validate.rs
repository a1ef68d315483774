//! Checks applied to user input before it reaches the board.
//!
//! The board itself accepts any well-formed task; rejecting short titles and
//! the like is the caller's job.

use crate::task::{NewTask, Priority, Status, Task};

pub const MIN_TITLE_LEN: usize = 3;
pub const MIN_DESCRIPTION_LEN: usize = 10;
pub const MIN_ASSIGNEE_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
  #[error("Title is required")]
  TitleRequired,
  #[error("Title must be at least 3 characters")]
  TitleTooShort,
  #[error("Description is required")]
  DescriptionRequired,
  #[error("Description must be at least 10 characters")]
  DescriptionTooShort,
  #[error("Assignee is required")]
  AssigneeRequired,
  #[error("Assignee name must be at least 2 characters")]
  AssigneeTooShort,
}

/// Raw task fields as entered by a user.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskForm {
  pub title: String,
  pub description: String,
  pub priority: Priority,
  pub assignee: String,
  pub status: Status,
}

impl From<&Task> for TaskForm {
  fn from(task: &Task) -> Self {
    Self {
      title: task.title().to_owned(),
      description: task.description().to_owned(),
      priority: task.priority(),
      assignee: task.assignee().to_owned(),
      status: task.status(),
    }
  }
}

impl TaskForm {
  pub fn validate(&self) -> Result<NewTask, ValidationError> {
    let title = self.title.trim();
    let description = self.description.trim();
    let assignee = self.assignee.trim();

    check(
      title,
      MIN_TITLE_LEN,
      ValidationError::TitleRequired,
      ValidationError::TitleTooShort,
    )?;
    check(
      description,
      MIN_DESCRIPTION_LEN,
      ValidationError::DescriptionRequired,
      ValidationError::DescriptionTooShort,
    )?;
    check(
      assignee,
      MIN_ASSIGNEE_LEN,
      ValidationError::AssigneeRequired,
      ValidationError::AssigneeTooShort,
    )?;

    Ok(NewTask {
      title: title.to_owned(),
      description: description.to_owned(),
      priority: self.priority,
      assignee: assignee.to_owned(),
      status: self.status,
    })
  }
}

fn check(
  value: &str,
  min_len: usize,
  missing: ValidationError,
  too_short: ValidationError,
) -> Result<(), ValidationError> {
  if value.is_empty() {
    return Err(missing);
  }
  if value.chars().count() < min_len {
    return Err(too_short);
  }
  Ok(())
}

#[cfg(test)]
mod test {
  use super::{TaskForm, ValidationError};
  use crate::task::{Priority, Status};

  fn form(title: &str, description: &str, assignee: &str) -> TaskForm {
    TaskForm {
      title: title.to_owned(),
      description: description.to_owned(),
      assignee: assignee.to_owned(),
      ..TaskForm::default()
    }
  }

  #[test]
  fn defaults_to_medium_todo() {
    let task = form("Fix bug", "Investigate crash on load", "Ann")
      .validate()
      .unwrap();
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.status, Status::ToDo);
  }

  #[test]
  fn reports_first_failing_field() {
    assert_eq!(
      form("", "", "").validate(),
      Err(ValidationError::TitleRequired)
    );
    assert_eq!(
      form("Fi", "Investigate crash on load", "Ann").validate(),
      Err(ValidationError::TitleTooShort)
    );
    assert_eq!(
      form("Fix bug", "Too short", "Ann").validate(),
      Err(ValidationError::DescriptionTooShort)
    );
    assert_eq!(
      form("Fix bug", "Investigate crash on load", "   ").validate(),
      Err(ValidationError::AssigneeRequired)
    );
    assert_eq!(
      form("Fix bug", "Investigate crash on load", "A").validate(),
      Err(ValidationError::AssigneeTooShort)
    );
  }

  #[test]
  fn trims_fields() {
    let task = form("  Fix bug ", "Investigate crash on load", " Ann ")
      .validate()
      .unwrap();
    assert_eq!(task.title, "Fix bug");
    assert_eq!(task.assignee, "Ann");
  }

  #[test]
  fn messages_match_form_copy() {
    assert_eq!(
      ValidationError::TitleTooShort.to_string(),
      "Title must be at least 3 characters"
    );
    assert_eq!(
      ValidationError::AssigneeTooShort.to_string(),
      "Assignee name must be at least 2 characters"
    );
  }
}

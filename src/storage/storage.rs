use crate::{filters::Filters, task::Task};

pub const TASKS_KEY: &str = "tasks";
pub const FILTERS_KEY: &str = "task-filters";

/// Durable key-value boundary holding the task list and the filter triple.
///
/// Implementations never fail past this trait: unreadable or corrupt records
/// read back as `None`, failed writes are logged and dropped.
pub trait Storage {
  fn tasks(&self) -> Option<Vec<Task>>;
  fn set_tasks(&mut self, tasks: &[Task]);

  fn filters(&self) -> Option<Filters>;
  fn set_filters(&mut self, filters: &Filters);

  /// Erases both records.
  fn clear(&mut self);
}

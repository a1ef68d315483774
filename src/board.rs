use std::path::Path;

use log::{debug, warn};

use crate::{
  config::Config,
  error::Error,
  filters::Filters,
  query::{self, FilterSummary, StatusColumns},
  seed::SeedSource,
  storage::{JsonStorage, Storage},
  task::{NewTask, Priority, Status, Task},
  traits::Indexable,
};

/// The task board state: tasks, filters and the load lifecycle.
///
/// Every mutation is applied in memory and then written through the storage
/// in the same call. Storage is only read by `load_tasks` and `load_filters`.
pub struct Board {
  storage: Box<dyn Storage>,
  seed: Box<dyn SeedSource>,
  tasks: Vec<Task>,
  filters: Filters,
  loading: bool,
  error: Option<String>,
}

impl Board {
  pub fn new(storage: Box<dyn Storage>, seed: Box<dyn SeedSource>) -> Self {
    Self {
      storage,
      seed,
      tasks: Vec::new(),
      filters: Filters::default(),
      loading: false,
      error: None,
    }
  }

  pub fn open(config: &Config) -> Result<Self, Error> {
    debug!("taskboard data folder: {}", config.storage_dir_path);
    std::fs::create_dir_all(&config.storage_dir_path)?;

    Ok(Self::new(
      Box::new(JsonStorage::new(Path::new(&config.storage_dir_path))),
      config.seed.source(),
    ))
  }

  /// Loads persisted tasks, falling back to the seed list when none are
  /// stored. A failed seed fetch leaves the board empty with `error()` set.
  pub fn load_tasks(&mut self) {
    self.loading = true;
    self.error = None;

    let loaded = match self.storage.tasks() {
      Some(tasks) if !tasks.is_empty() => Ok(tasks),
      _ => {
        debug!("no stored tasks, fetching seed list");
        self.seed.fetch()
      }
    };

    match loaded {
      Ok(tasks) => {
        debug!("loaded {} tasks", tasks.len());
        self.tasks = tasks;
        self.storage.set_tasks(&self.tasks);
      }
      Err(err) => {
        warn!("load tasks err: {:?}", err);
        self.tasks.clear();
        self.error = Some(err.to_string());
      }
    }

    self.loading = false;
  }

  pub fn load_filters(&mut self) {
    self.filters = self.storage.filters().unwrap_or_default();
  }

  pub fn add_task(&mut self, fields: NewTask) -> Task {
    let task = Task::new(self.next_id(), fields);
    self.tasks.push(task.clone());
    self.storage.set_tasks(&self.tasks);
    return task;
  }

  /// Replaces the task with the same id. Returns false, writing nothing, when
  /// there is no such task.
  pub fn update_task(&mut self, task: Task) -> bool {
    match self.position_by_id(task.id()) {
      Some(position) => {
        self.tasks[position] = task;
        self.storage.set_tasks(&self.tasks);
        true
      }
      None => false,
    }
  }

  /// Removes the task with `task_id`. The list is written even when nothing
  /// was removed.
  pub fn delete_task(&mut self, task_id: u64) -> bool {
    let before = self.tasks.len();
    self.tasks.retain(|t| t.id() != task_id);
    self.storage.set_tasks(&self.tasks);
    return self.tasks.len() != before;
  }

  pub fn move_task(&mut self, task_id: u64, status: Status) -> bool {
    match self.position_by_id(task_id) {
      Some(position) => {
        self.tasks[position].set_status(status);
        self.storage.set_tasks(&self.tasks);
        true
      }
      None => false,
    }
  }

  pub fn set_search_term(&mut self, search_term: &str) {
    self.filters.set_search_term(search_term);
    self.storage.set_filters(&self.filters);
  }

  pub fn set_priority_filter(&mut self, priority: Option<Priority>) {
    self.filters.set_priority(priority);
    self.storage.set_filters(&self.filters);
  }

  pub fn set_assignee_filter(&mut self, assignee: &str) {
    self.filters.set_assignee(assignee);
    self.storage.set_filters(&self.filters);
  }

  pub fn clear_filters(&mut self) {
    self.set_search_term("");
    self.set_priority_filter(None);
    self.set_assignee_filter("");
  }

  pub fn clear_all_data(&mut self) {
    self.tasks.clear();
    self.filters = Filters::default();
    self.storage.clear();
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn task_by_id(&self, task_id: u64) -> Option<&Task> {
    self.tasks.iter().find(|t| t.id() == task_id)
  }

  pub fn filters(&self) -> &Filters {
    &self.filters
  }

  pub fn is_loading(&self) -> bool {
    self.loading
  }

  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  pub fn filtered_tasks(&self) -> Vec<&Task> {
    query::filter_tasks(&self.tasks, &self.filters)
  }

  pub fn columns(&self) -> StatusColumns<'_> {
    query::group_by_status(&self.filtered_tasks())
  }

  pub fn unique_assignees(&self) -> Vec<&str> {
    query::unique_assignees(&self.tasks)
  }

  pub fn has_no_results(&self) -> bool {
    query::has_no_results(&self.tasks, &self.filtered_tasks())
  }

  pub fn summary(&self) -> FilterSummary {
    query::summary(&self.tasks, &self.filters)
  }

  /// `max + 1` over live ids. Once the max id is `u64::MAX` the lowest free
  /// id is handed out instead.
  fn next_id(&self) -> u64 {
    let max_id = self.tasks.iter().map(|t| t.id()).max().unwrap_or(0);
    match max_id.checked_add(1) {
      Some(id) => id,
      None => {
        warn!("task ids exhausted at {}, reusing a free id", max_id);
        (1..u64::MAX)
          .find(|id| self.position_by_id(*id).is_none())
          .unwrap_or(0)
      }
    }
  }

  fn position_by_id(&self, task_id: u64) -> Option<usize> {
    self.tasks.iter().position(|t| t.id() == task_id)
  }
}

//! Read-only projections of the board state.
//!
//! Everything here is recomputed from the task list and filters on each call.

use crate::{
  filters::Filters,
  task::{Status, Task},
};

pub fn matches(task: &Task, filters: &Filters) -> bool {
  let matches_search = match filters.search_term() {
    Some(term) => {
      let term = term.to_lowercase();
      task.title().to_lowercase().contains(&term)
        || task.description().to_lowercase().contains(&term)
        || task.assignee().to_lowercase().contains(&term)
    }
    None => true,
  };

  let matches_priority = filters.priority().map_or(true, |p| task.priority() == p);
  let matches_assignee = filters.assignee().map_or(true, |a| task.assignee() == a);

  return matches_search && matches_priority && matches_assignee;
}

pub fn filter_tasks<'a>(tasks: &'a [Task], filters: &Filters) -> Vec<&'a Task> {
  tasks.iter().filter(|t| matches(t, filters)).collect()
}

/// Filtered tasks split into the three board columns, each in list order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusColumns<'a> {
  pub todo: Vec<&'a Task>,
  pub in_progress: Vec<&'a Task>,
  pub done: Vec<&'a Task>,
}

impl<'a> StatusColumns<'a> {
  pub fn get(&self, status: Status) -> &[&'a Task] {
    match status {
      Status::ToDo => &self.todo,
      Status::InProgress => &self.in_progress,
      Status::Done => &self.done,
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = (Status, &[&'a Task])> + '_ {
    Status::ALL.into_iter().map(move |s| (s, self.get(s)))
  }

  pub fn len(&self) -> usize {
    self.todo.len() + self.in_progress.len() + self.done.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

pub fn group_by_status<'a>(tasks: &[&'a Task]) -> StatusColumns<'a> {
  let mut columns = StatusColumns::default();
  for task in tasks.iter().copied() {
    match task.status() {
      Status::ToDo => columns.todo.push(task),
      Status::InProgress => columns.in_progress.push(task),
      Status::Done => columns.done.push(task),
    }
  }
  return columns;
}

/// Assignees across all tasks in order of first appearance.
pub fn unique_assignees(tasks: &[Task]) -> Vec<&str> {
  let mut assignees: Vec<&str> = Vec::new();
  for task in tasks.iter() {
    if !assignees.contains(&task.assignee()) {
      assignees.push(task.assignee());
    }
  }
  return assignees;
}

pub fn sorted_assignees(tasks: &[Task]) -> Vec<&str> {
  let mut assignees = unique_assignees(tasks);
  assignees.sort_unstable();
  return assignees;
}

/// True when there are tasks but the filters exclude all of them.
pub fn has_no_results(tasks: &[Task], filtered: &[&Task]) -> bool {
  filtered.is_empty() && !tasks.is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
  pub shown: usize,
  pub total: usize,
}

pub fn summary(tasks: &[Task], filters: &Filters) -> FilterSummary {
  FilterSummary {
    shown: filter_tasks(tasks, filters).len(),
    total: tasks.len(),
  }
}

#[cfg(test)]
mod test {
  use proptest::prelude::*;

  use super::{
    filter_tasks, group_by_status, has_no_results, sorted_assignees, summary, unique_assignees,
  };
  use crate::{
    filters::Filters,
    strategies::{arb_filters, arb_tasks},
    task::{NewTask, Priority, Status, Task},
    traits::Indexable,
  };

  fn task(id: u64, title: &str, assignee: &str, priority: Priority, status: Status) -> Task {
    Task::new(
      id,
      NewTask {
        title: title.to_owned(),
        description: format!("{} description", title),
        priority,
        assignee: assignee.to_owned(),
        status,
      },
    )
  }

  fn sample() -> Vec<Task> {
    vec![
      task(1, "Fix bug", "Ann", Priority::High, Status::ToDo),
      task(2, "Write docs", "Bob", Priority::Low, Status::Done),
      task(3, "Review PR", "Ann", Priority::Medium, Status::InProgress),
      task(4, "Deploy", "Cid", Priority::High, Status::ToDo),
    ]
  }

  fn ids(tasks: &[&Task]) -> Vec<u64> {
    tasks.iter().map(|t| t.id()).collect()
  }

  #[test]
  fn search_matches_title_only_task() {
    let tasks = vec![
      task(1, "Fix bug", "Ann", Priority::High, Status::ToDo),
      task(2, "Write docs", "Bob", Priority::Low, Status::ToDo),
    ];
    let filters = Filters::new("bug", None, "");
    assert_eq!(ids(&filter_tasks(&tasks, &filters)), vec![1]);
  }

  #[test]
  fn search_is_case_insensitive_across_fields() {
    let tasks = sample();
    assert_eq!(ids(&filter_tasks(&tasks, &Filters::new("ANN", None, ""))), vec![1, 3]);
    assert_eq!(
      ids(&filter_tasks(&tasks, &Filters::new("docs DESCRIPTION", None, ""))),
      vec![2]
    );
  }

  #[test]
  fn filters_combine_with_and() {
    let tasks = sample();
    let filters = Filters::new("", Some(Priority::High), "Ann");
    assert_eq!(ids(&filter_tasks(&tasks, &filters)), vec![1]);

    let filters = Filters::new("deploy", Some(Priority::High), "Ann");
    assert!(filter_tasks(&tasks, &filters).is_empty());
  }

  #[test]
  fn assignee_filter_is_exact() {
    let tasks = sample();
    assert!(filter_tasks(&tasks, &Filters::new("", None, "An")).is_empty());
    assert!(filter_tasks(&tasks, &Filters::new("", None, "ann")).is_empty());
  }

  #[test]
  fn no_filters_keep_everything() {
    let tasks = sample();
    assert_eq!(filter_tasks(&tasks, &Filters::default()).len(), tasks.len());
  }

  #[test]
  fn groups_keep_list_order() {
    let tasks = sample();
    let filtered = filter_tasks(&tasks, &Filters::default());
    let columns = group_by_status(&filtered);

    assert_eq!(ids(&columns.todo), vec![1, 4]);
    assert_eq!(ids(&columns.in_progress), vec![3]);
    assert_eq!(ids(&columns.done), vec![2]);
    assert_eq!(columns.len(), 4);
  }

  #[test]
  fn assignee_lists() {
    let tasks = vec![
      task(1, "a", "Zed", Priority::Low, Status::ToDo),
      task(2, "b", "Ann", Priority::Low, Status::ToDo),
      task(3, "c", "Zed", Priority::Low, Status::ToDo),
    ];
    assert_eq!(unique_assignees(&tasks), vec!["Zed", "Ann"]);
    assert_eq!(sorted_assignees(&tasks), vec!["Ann", "Zed"]);
  }

  #[test]
  fn no_results_needs_tasks() {
    let empty: Vec<Task> = Vec::new();
    assert!(!has_no_results(&empty, &[]));

    let tasks = sample();
    let filtered = filter_tasks(&tasks, &Filters::new("nothing like this", None, ""));
    assert!(has_no_results(&tasks, &filtered));

    let filtered = filter_tasks(&tasks, &Filters::default());
    assert!(!has_no_results(&tasks, &filtered));
  }

  #[test]
  fn summary_counts() {
    let tasks = sample();
    let s = summary(&tasks, &Filters::new("", Some(Priority::High), ""));
    assert_eq!((s.shown, s.total), (2, 4));
  }

  fn arb_board_tasks() -> impl Strategy<Value = Vec<Task>> {
    arb_tasks("[a-dA-D ]{0,8}".boxed(), "[a-c]{1,2}".boxed())
  }

  fn arb_board_filters() -> impl Strategy<Value = Filters> {
    arb_filters("[a-dA-D]{0,2}".boxed(), "[a-c]{0,2}".boxed())
  }

  proptest! {
    #[test]
    fn filtering_is_idempotent(tasks in arb_board_tasks(), filters in arb_board_filters()) {
      let once: Vec<Task> = filter_tasks(&tasks, &filters).into_iter().cloned().collect();
      let twice: Vec<Task> = filter_tasks(&once, &filters).into_iter().cloned().collect();
      prop_assert_eq!(once, twice);
    }

    #[test]
    fn columns_partition_filtered_list(tasks in arb_board_tasks(), filters in arb_board_filters()) {
      let filtered = filter_tasks(&tasks, &filters);
      let columns = group_by_status(&filtered);

      prop_assert_eq!(columns.len(), filtered.len());
      for (status, column) in columns.iter() {
        let expected: Vec<u64> = filtered
          .iter()
          .filter(|t| t.status() == status)
          .map(|t| t.id())
          .collect();
        prop_assert_eq!(ids(column), expected);
      }
    }
  }
}

//! Proptest strategies shared by the test modules.

use proptest::prelude::*;

use crate::{
  filters::Filters,
  task::{NewTask, Priority, Status, Task},
};

/// Any text, control characters and quotes included.
pub fn any_text() -> BoxedStrategy<String> {
  prop::collection::vec(any::<char>(), 0..16)
    .prop_map(|chars| chars.into_iter().collect::<String>())
    .boxed()
}

pub fn arb_priority() -> impl Strategy<Value = Priority> {
  prop_oneof![Just(Priority::High), Just(Priority::Medium), Just(Priority::Low)]
}

pub fn arb_status() -> impl Strategy<Value = Status> {
  prop_oneof![Just(Status::ToDo), Just(Status::InProgress), Just(Status::Done)]
}

/// Up to 24 tasks with ids `1..=n`. `text` feeds title and description.
pub fn arb_tasks(
  text: BoxedStrategy<String>,
  assignee: BoxedStrategy<String>,
) -> impl Strategy<Value = Vec<Task>> {
  prop::collection::vec(
    (text.clone(), text, assignee, arb_priority(), arb_status()),
    0..24,
  )
  .prop_map(|rows| {
    rows
      .into_iter()
      .enumerate()
      .map(|(i, (title, description, assignee, priority, status))| {
        Task::new(
          i as u64 + 1,
          NewTask {
            title,
            description,
            priority,
            assignee,
            status,
          },
        )
      })
      .collect()
  })
}

pub fn arb_filters(
  search: BoxedStrategy<String>,
  assignee: BoxedStrategy<String>,
) -> impl Strategy<Value = Filters> {
  (search, prop::option::of(arb_priority()), assignee)
    .prop_map(|(search, priority, assignee)| Filters::new(&search, priority, &assignee))
}

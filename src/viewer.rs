use std::{cell::RefCell, fmt::Write, rc::Rc};

use colored::{Color, Colorize};

use crate::{
  board::Board,
  filters::Filters,
  query::FilterSummary,
  task::{Priority, Status, Task},
  traits::Indexable,
};

const LINE_INDENT: &str = "    ";
const DESCRIPTION_WIDTH: usize = 60;

struct ViewColors {}
impl ViewColors {
  const ID: Color = Color::BrightBlack;
  const HEADER: Color = Color::Cyan;
  const ASSIGNEE: Color = Color::Magenta;
  const FILTER_BADGE: Color = Color::BrightYellow;
  const MUTED: Color = Color::BrightBlack;
  const ERROR: Color = Color::Red;

  fn status(status: Status) -> Color {
    match status {
      Status::ToDo => Color::Red,
      Status::InProgress => Color::Yellow,
      Status::Done => Color::Green,
    }
  }

  fn priority(priority: Priority) -> Color {
    match priority {
      Priority::High => Color::Red,
      Priority::Medium => Color::Yellow,
      Priority::Low => Color::Green,
    }
  }
}

pub struct Viewer {
  board: Rc<RefCell<Board>>,
}

impl Viewer {
  pub fn new(board: Rc<RefCell<Board>>) -> Self {
    Self { board }
  }

  pub fn print_board(&self, show_full: bool) {
    print!("{}", format_board(&self.board.borrow(), show_full));
  }

  pub fn print_task(&self, task: &Task, show_full: bool) {
    println!("{}", format_task(task, show_full));
  }

  pub fn print_assignees(&self) {
    let board = self.board.borrow();
    let assignees = crate::query::sorted_assignees(board.tasks());
    if assignees.is_empty() {
      println!("no assignees yet");
      return;
    }
    for assignee in assignees {
      println!("{}", assignee.color(ViewColors::ASSIGNEE));
    }
  }

  pub fn print_filters(&self) {
    let board = self.board.borrow();
    match format_filters(board.filters(), board.summary()) {
      Some(line) => println!("{}", line),
      None => println!("no active filters"),
    }
  }

  pub fn print_load_error(&self, message: &str) {
    println!("{}", format_load_error(message));
    println!(
      "{}",
      "Run the command again to retry.".color(ViewColors::MUTED)
    );
  }
}

pub fn format_board(board: &Board, show_full: bool) -> String {
  let mut out = String::new();

  let _ = writeln!(
    out,
    "{} {}",
    "Task board".bold().color(ViewColors::HEADER),
    format!("— {} tasks", board.tasks().len()).color(ViewColors::MUTED)
  );
  if let Some(line) = format_filters(board.filters(), board.summary()) {
    let _ = writeln!(out, "{}", line);
  }
  let _ = writeln!(out);

  if board.has_no_results() {
    let _ = writeln!(out, "{}", "No tasks found".bold());
    let _ = writeln!(
      out,
      "{}",
      "Try adjusting your search terms or filters to find what you're looking for."
        .color(ViewColors::MUTED)
    );
    return out;
  }

  let columns = board.columns();
  for (status, tasks) in columns.iter() {
    let _ = writeln!(
      out,
      "{} {}",
      status.as_str().bold().color(ViewColors::status(status)),
      format!("({})", tasks.len()).color(ViewColors::MUTED)
    );

    if tasks.is_empty() {
      let _ = writeln!(
        out,
        "{}{}",
        LINE_INDENT,
        "No tasks yet".color(ViewColors::MUTED)
      );
    }
    for task in tasks.iter() {
      let _ = writeln!(out, "{}", format_task(task, show_full));
    }
    let _ = writeln!(out);
  }

  return out;
}

pub fn format_task(task: &Task, show_full: bool) -> String {
  let mut line = format!(
    "{}{}  {}  {}  {}",
    LINE_INDENT,
    format!("#{:<3}", task.id()).color(ViewColors::ID),
    task.title().bold(),
    format!("[{}]", task.priority()).color(ViewColors::priority(task.priority())),
    task.assignee().color(ViewColors::ASSIGNEE),
  );

  let description = match show_full {
    true => task.description().to_owned(),
    false => shorten(task.description(), DESCRIPTION_WIDTH),
  };
  line.push('\n');
  line.push_str(LINE_INDENT);
  line.push_str(LINE_INDENT);
  line.push_str(&description.color(ViewColors::MUTED).to_string());

  return line;
}

pub fn format_load_error(message: &str) -> String {
  format!("Something went wrong: {}", message)
    .bold()
    .color(ViewColors::ERROR)
    .to_string()
}

/// `N of M tasks` followed by a badge per active filter, `None` without filters.
pub fn format_filters(filters: &Filters, summary: FilterSummary) -> Option<String> {
  if !filters.is_active() {
    return None;
  }

  let mut badges = Vec::new();
  if let Some(term) = filters.search_term() {
    badges.push(format!("\"{}\"", term));
  }
  if let Some(priority) = filters.priority() {
    badges.push(priority.to_string());
  }
  if let Some(assignee) = filters.assignee() {
    badges.push(assignee.to_owned());
  }

  Some(format!(
    "{} of {} tasks  {}",
    summary.shown,
    summary.total,
    badges.join(" ").color(ViewColors::FILTER_BADGE)
  ))
}

fn shorten(text: &str, width: usize) -> String {
  let first_line = text.lines().next().unwrap_or_default();
  if first_line.chars().count() <= width && first_line.len() == text.len() {
    return first_line.to_owned();
  }
  let head: String = first_line.chars().take(width.saturating_sub(1)).collect();
  format!("{}…", head.trim_end())
}

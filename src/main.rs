use std::{cell::RefCell, process::ExitCode, rc::Rc};

use log::debug;
use taskboard::{
  filters::parse_priority_filter,
  task::{Status, Task},
  validate::{TaskForm, ValidationError},
  viewer::Viewer,
  Board, Config, Error,
};

#[derive(Debug, thiserror::Error)]
enum CommandError {
  #[error(transparent)]
  Board(#[from] Error),

  #[error(transparent)]
  Invalid(#[from] ValidationError),

  #[error("task with id: {0} not found")]
  NotFound(u64),

  #[error("{0}")]
  Usage(String),
}

fn cli() -> clap::Command<'static> {
  let id_arg = || clap::Arg::new("id").required(true).index(1);
  let task_field_args = |required: bool| {
    [
      clap::Arg::new("description")
        .long("description")
        .short('d')
        .takes_value(true)
        .required(required),
      clap::Arg::new("assignee")
        .long("assignee")
        .short('a')
        .takes_value(true)
        .required(required),
      clap::Arg::new("priority")
        .long("priority")
        .short('p')
        .takes_value(true)
        .help("High, Medium or Low"),
      clap::Arg::new("status")
        .long("status")
        .short('s')
        .takes_value(true)
        .help("\"To Do\", \"In Progress\" or Done"),
    ]
  };

  clap::Command::new("taskboard")
    .about("Task board with To Do, In Progress and Done columns")
    .subcommand(
      clap::Command::new("board")
        .about("show the filtered board")
        .arg(clap::Arg::new("full").long("full")),
    )
    .subcommand(
      clap::Command::new("add")
        .about("add a task")
        .arg(clap::Arg::new("title").required(true).index(1))
        .args(&task_field_args(true)),
    )
    .subcommand(
      clap::Command::new("edit")
        .about("change fields of a task")
        .arg(id_arg())
        .arg(clap::Arg::new("title").long("title").short('t').takes_value(true))
        .args(&task_field_args(false)),
    )
    .subcommand(clap::Command::new("rm").about("delete a task").arg(id_arg()))
    .subcommand(
      clap::Command::new("move")
        .about("put a task into a column")
        .args(&[id_arg(), clap::Arg::new("status").required(true).index(2)]),
    )
    .subcommand(
      clap::Command::new("forward")
        .about("move a task one column right")
        .arg(id_arg()),
    )
    .subcommand(
      clap::Command::new("back")
        .about("move a task one column left")
        .arg(id_arg()),
    )
    .subcommand(
      clap::Command::new("search")
        .about("filter by text in title, description or assignee")
        .arg(clap::Arg::new("term").index(1)),
    )
    .subcommand(
      clap::Command::new("priority")
        .about("filter by priority, `all` to reset")
        .arg(clap::Arg::new("priority").required(true).index(1)),
    )
    .subcommand(
      clap::Command::new("assignee")
        .about("filter by assignee, `all` to reset")
        .arg(clap::Arg::new("assignee").required(true).index(1)),
    )
    .subcommand(clap::Command::new("clear-filters").about("drop all filters"))
    .subcommand(clap::Command::new("filters").about("show active filters"))
    .subcommand(clap::Command::new("assignees").about("list known assignees"))
    .subcommand(
      clap::Command::new("reset")
        .about("erase all tasks and filters")
        .arg(clap::Arg::new("yes").long("yes")),
    )
    .subcommand(
      clap::Command::new("completions")
        .about("print shell completions")
        .arg(clap::Arg::new("shell").required(true).index(1)),
    )
}

fn main() -> ExitCode {
  env_logger::init();

  let matches = cli().get_matches();

  if let Some(("completions", command_matches)) = matches.subcommand() {
    let shell: clap_complete::Shell = command_matches
      .value_of_t("shell")
      .unwrap_or_else(|err| err.exit());
    clap_complete::generate(shell, &mut cli(), "taskboard", &mut std::io::stdout());
    return ExitCode::SUCCESS;
  }

  match run(&matches) {
    Ok(code) => code,
    Err(err) => {
      eprintln!("{}", err);
      ExitCode::FAILURE
    }
  }
}

fn run(matches: &clap::ArgMatches) -> Result<ExitCode, CommandError> {
  let config = Config::new()?;
  let board = Rc::new(RefCell::new(Board::open(&config)?));
  let viewer = Viewer::new(Rc::clone(&board));

  {
    let mut b = board.borrow_mut();
    b.load_tasks();
    b.load_filters();
  }

  let load_error = board.borrow().error().map(|e| e.to_owned());
  if let Some(message) = load_error {
    if matches.subcommand_name() != Some("reset") {
      viewer.print_load_error(&message);
      return Ok(ExitCode::FAILURE);
    }
  }

  match matches.subcommand() {
    None => viewer.print_board(false),

    Some(("board", command_matches)) => viewer.print_board(command_matches.is_present("full")),

    Some(("add", command_matches)) => {
      let mut form = TaskForm {
        title: value(command_matches, "title").to_owned(),
        description: value(command_matches, "description").to_owned(),
        assignee: value(command_matches, "assignee").to_owned(),
        ..TaskForm::default()
      };
      apply_enum_args(&mut form, command_matches)?;

      let task = board.borrow_mut().add_task(form.validate()?);
      println!("task added:");
      viewer.print_task(&task, true);
    }

    Some(("edit", command_matches)) => {
      let id = task_id(command_matches);
      let existing = find_task(&board, id)?;

      let mut form = TaskForm::from(&existing);
      if let Some(title) = command_matches.value_of("title") {
        form.title = title.to_owned();
      }
      if let Some(description) = command_matches.value_of("description") {
        form.description = description.to_owned();
      }
      if let Some(assignee) = command_matches.value_of("assignee") {
        form.assignee = assignee.to_owned();
      }
      apply_enum_args(&mut form, command_matches)?;

      let task = Task::new(id, form.validate()?);
      board.borrow_mut().update_task(task.clone());
      println!("task updated:");
      viewer.print_task(&task, true);
    }

    Some(("rm", command_matches)) => {
      let id = task_id(command_matches);
      if !board.borrow_mut().delete_task(id) {
        return Err(CommandError::NotFound(id));
      }
      println!("task #{} removed", id);
    }

    Some(("move", command_matches)) => {
      let id = task_id(command_matches);
      let status: Status = value(command_matches, "status").parse()?;
      move_task(&board, &viewer, id, status)?;
    }

    Some(("forward", command_matches)) => {
      let id = task_id(command_matches);
      let status = find_task(&board, id)?.status();
      let next = status
        .next()
        .ok_or_else(|| CommandError::Usage(format!("task #{} is already {}", id, status)))?;
      move_task(&board, &viewer, id, next)?;
    }

    Some(("back", command_matches)) => {
      let id = task_id(command_matches);
      let status = find_task(&board, id)?.status();
      let previous = status
        .previous()
        .ok_or_else(|| CommandError::Usage(format!("task #{} is already {}", id, status)))?;
      move_task(&board, &viewer, id, previous)?;
    }

    Some(("search", command_matches)) => {
      let term = command_matches.value_of("term").unwrap_or_default();
      board.borrow_mut().set_search_term(term);
      viewer.print_board(false);
    }

    Some(("priority", command_matches)) => {
      let priority = parse_priority_filter(value(command_matches, "priority"))?;
      board.borrow_mut().set_priority_filter(priority);
      viewer.print_board(false);
    }

    Some(("assignee", command_matches)) => {
      let assignee = match value(command_matches, "assignee") {
        a if a.eq_ignore_ascii_case("all") => "",
        a => a,
      };
      board.borrow_mut().set_assignee_filter(assignee);
      viewer.print_board(false);
    }

    Some(("clear-filters", _)) => {
      board.borrow_mut().clear_filters();
      viewer.print_board(false);
    }

    Some(("filters", _)) => viewer.print_filters(),

    Some(("assignees", _)) => viewer.print_assignees(),

    Some(("reset", command_matches)) => {
      if !command_matches.is_present("yes") {
        return Err(CommandError::Usage(
          "this erases every task and filter, pass --yes to confirm".to_owned(),
        ));
      }
      board.borrow_mut().clear_all_data();
      println!("all tasks and filters removed");
    }

    Some((subcmd, _)) => {
      return Err(CommandError::Usage(format!("unknown subcommand {}", subcmd)));
    }
  };

  debug!("{} tasks on the board", board.borrow().tasks().len());
  Ok(ExitCode::SUCCESS)
}

fn value<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
  matches.value_of(name).unwrap_or_default()
}

fn task_id(matches: &clap::ArgMatches) -> u64 {
  matches.value_of_t("id").unwrap_or_else(|err| err.exit())
}

fn apply_enum_args(form: &mut TaskForm, matches: &clap::ArgMatches) -> Result<(), Error> {
  if let Some(priority) = matches.value_of("priority") {
    form.priority = priority.parse()?;
  }
  if let Some(status) = matches.value_of("status") {
    form.status = status.parse()?;
  }
  Ok(())
}

fn find_task(board: &Rc<RefCell<Board>>, id: u64) -> Result<Task, CommandError> {
  board
    .borrow()
    .task_by_id(id)
    .cloned()
    .ok_or(CommandError::NotFound(id))
}

fn move_task(
  board: &Rc<RefCell<Board>>,
  viewer: &Viewer,
  id: u64,
  status: Status,
) -> Result<(), CommandError> {
  if !board.borrow_mut().move_task(id, status) {
    return Err(CommandError::NotFound(id));
  }
  println!("task moved to {}:", status);
  if let Some(task) = board.borrow().task_by_id(id) {
    viewer.print_task(task, false);
  }
  Ok(())
}

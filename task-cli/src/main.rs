use clap::{Parser, Subcommand};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Logger, Root};
use task_cli::{Status, SystemClock, Task, TaskStore, store};

const TASK_FILE: &str = "tasks.json";

#[derive(Parser, Debug, PartialEq)]
#[command(name = "task-cli", about = "Track tasks in a local JSON file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
enum Commands {
    /// Add a new task
    Add { description: String },
    /// Replace the description of an existing task
    Update { id: u32, description: String },
    /// Delete a task and renumber the ones after it
    Delete { id: u32 },
    /// Mark a task as being worked on
    MarkInProgress { id: u32 },
    /// Mark a task as finished
    MarkDone { id: u32 },
    /// List tasks, optionally only those with the given status
    List {
        #[arg(value_enum)]
        status: Option<Status>,
    },
}

fn main() {
    init_logging();

    let args = Cli::try_parse().unwrap_or_else(|err| {
        if err.use_stderr() {
            let _ = err.print();
            std::process::exit(1);
        }
        // --help and friends keep clap's zero exit code.
        err.exit();
    });

    let mut tasks = TaskStore::load(TASK_FILE, SystemClock);
    if let Err(err) = run(args.command, &mut tasks) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Commands, tasks: &mut TaskStore<SystemClock>) -> Result<(), store::Error> {
    match command {
        Commands::Add { description } => {
            let id = tasks.add(&description)?;
            println!("Task added successfully (ID: {id})");
        }
        Commands::Update { id, description } => {
            tasks.update(id, &description)?;
            println!("Task {id} updated successfully");
        }
        Commands::Delete { id } => {
            tasks.delete(id)?;
            println!("Task {id} deleted successfully");
        }
        Commands::MarkInProgress { id } => {
            tasks.mark(id, Status::InProgress)?;
            println!("Task {id} marked as {} successfully", Status::InProgress);
        }
        Commands::MarkDone { id } => {
            tasks.mark(id, Status::Done)?;
            println!("Task {id} marked as {} successfully", Status::Done);
        }
        Commands::List { status } => print_tasks(&tasks.list(status)),
    }
    Ok(())
}

fn print_tasks(tasks: &[&Task]) {
    if tasks.is_empty() {
        println!("No task found.");
        return;
    }
    println!("ID | Description | Status | Created At | Updated At");
    println!("{}", "-".repeat(70));
    for task in tasks {
        println!("{task}");
    }
}

fn init_logging() {
    // Log to stderr; stdout is reserved for command output.
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .logger(Logger::builder().build("task_cli", LevelFilter::Info))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .unwrap();
    let _log4rs_handle = log4rs::init_config(config).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_description() {
        let args = Cli::parse_from(["task-cli", "add", "buy groceries"]);

        assert_eq!(
            args.command,
            Commands::Add {
                description: "buy groceries".to_string()
            }
        );
    }

    #[test]
    fn parses_update_with_id_and_description() {
        let args = Cli::parse_from(["task-cli", "update", "2", "new text"]);

        assert_eq!(
            args.command,
            Commands::Update {
                id: 2,
                description: "new text".to_string()
            }
        );
    }

    #[test]
    fn parses_kebab_case_mark_subcommands() {
        let in_progress = Cli::parse_from(["task-cli", "mark-in-progress", "3"]);
        let done = Cli::parse_from(["task-cli", "mark-done", "4"]);

        assert_eq!(in_progress.command, Commands::MarkInProgress { id: 3 });
        assert_eq!(done.command, Commands::MarkDone { id: 4 });
    }

    #[test]
    fn parses_list_filter_using_file_format_literals() {
        let all = Cli::parse_from(["task-cli", "list"]);
        let todo = Cli::parse_from(["task-cli", "list", "To Do"]);
        let in_progress = Cli::parse_from(["task-cli", "list", "in-progress"]);
        let done = Cli::parse_from(["task-cli", "list", "done"]);

        assert_eq!(all.command, Commands::List { status: None });
        assert_eq!(
            todo.command,
            Commands::List {
                status: Some(Status::ToDo)
            }
        );
        assert_eq!(
            in_progress.command,
            Commands::List {
                status: Some(Status::InProgress)
            }
        );
        assert_eq!(
            done.command,
            Commands::List {
                status: Some(Status::Done)
            }
        );
    }

    #[test]
    fn rejects_non_integer_ids() {
        assert!(Cli::try_parse_from(["task-cli", "delete", "abc"]).is_err());
        assert!(Cli::try_parse_from(["task-cli", "update", "1.5", "x"]).is_err());
    }

    #[test]
    fn rejects_missing_required_arguments() {
        assert!(Cli::try_parse_from(["task-cli"]).is_err());
        assert!(Cli::try_parse_from(["task-cli", "add"]).is_err());
        assert!(Cli::try_parse_from(["task-cli", "update", "1"]).is_err());
    }

    #[test]
    fn rejects_unknown_status_filters() {
        assert!(Cli::try_parse_from(["task-cli", "list", "blocked"]).is_err());
        // Casing matters: the file-format literal is "done", not "Done".
        assert!(Cli::try_parse_from(["task-cli", "list", "Done"]).is_err());
    }
}

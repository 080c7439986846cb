//! Command-line front end for the task tracker.
//!
//! Usage:
//!
//! ```text
//! taskdeck [--data-dir <dir>] <command>
//! ```
//!
//! The snapshot lives at `<data-dir>/<snapshot-file>`, configured through the
//! `TASKDECK_*` environment variables. Positions shown by `list` are the
//! zero-based indices accepted by `move`.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use mockable::DefaultClock;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use taskdeck::config::{ConfigError, TrackerConfig};
use taskdeck::task::{
    adapters::{
        file::{FileTaskStore, read_file, write_file},
        notify::TracingNotifier,
    },
    domain::{OverdueNotice, Task, TaskDomainError, TaskId},
    ports::{OverdueNotifier, TaskStoreError},
    services::{
        CreateTaskRequest, DueDateMonitor, TaskLifecycleError, TaskLifecycleService,
        UpdateTaskRequest, run_due_date_watch,
    },
};
use taskdeck::telemetry;
use thiserror::Error;
use tracing::info;

type Service = TaskLifecycleService<FileTaskStore, DefaultClock>;

#[derive(Parser, Debug)]
#[command(name = "taskdeck")]
#[command(about = "Ordered task tracker with due-date reminders", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the task snapshot (overrides `TASKDECK_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<Utf8PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tasks in their stored order
    List,

    /// Add a task to the end of the list
    Add {
        /// Task name
        name: String,

        /// Category (work, personal, shopping, other)
        #[arg(short, long, default_value = "work")]
        category: String,

        /// Priority (low, medium, high)
        #[arg(short, long, default_value = "medium")]
        priority: String,

        /// Due date (RFC 3339 or YYYY-MM-DDTHH:MM in local time)
        #[arg(short, long)]
        due: Option<String>,
    },

    /// Edit fields of an existing task
    Edit {
        /// Task ID
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New priority
        #[arg(short, long)]
        priority: Option<String>,

        /// New due date
        #[arg(short, long, conflicts_with = "clear_due")]
        due: Option<String>,

        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },

    /// Remove a task
    Remove {
        /// Task ID
        id: String,
    },

    /// Move a task to a new position
    Move {
        /// Task ID
        id: String,

        /// New zero-based position
        index: usize,
    },

    /// Report tasks that are overdue
    Check,

    /// Keep checking due dates until interrupted
    Watch,

    /// Write the task list to a JSON file
    Export {
        /// Destination file
        path: Utf8PathBuf,
    },

    /// Replace the task list with the contents of a JSON file
    Import {
        /// Source file
        path: Utf8PathBuf,
    },
}

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    #[error(transparent)]
    Task(#[from] TaskLifecycleError),
    #[error(transparent)]
    InvalidId(#[from] TaskDomainError),
    #[error("failed to access '{path}': {source}")]
    File {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Writes overdue notices to standard output as well as the log.
struct ConsoleNotifier;

impl OverdueNotifier for ConsoleNotifier {
    fn notify(&self, notice: &OverdueNotice) {
        TracingNotifier.notify(notice);
        let mut stdout = io::stdout().lock();
        if writeln!(stdout, "{}", describe_notice(notice)).is_err() {
            tracing::warn!(task_id = %notice.task_id, "could not write overdue notice");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Nothing else can be reported if stderr itself is gone.
            let _ignored = writeln!(io::stderr(), "error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = TrackerConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    let store = FileTaskStore::open(&config.data_dir, config.snapshot_file.as_str())?;
    let service = TaskLifecycleService::new(Arc::new(store), Arc::new(DefaultClock));
    let mut out = io::stdout();

    match cli.command {
        Command::List => {
            for (position, task) in service.load().await.iter().enumerate() {
                writeln!(out, "{position:>3}  {}", describe_task(task))?;
            }
        }
        Command::Add {
            name,
            category,
            priority,
            due,
        } => {
            let mut request = CreateTaskRequest::new(name, category, priority);
            if let Some(due_date) = due {
                request = request.with_due_date(due_date);
            }
            let task = service.create(request).await?;
            writeln!(out, "added {}", task.id())?;
        }
        Command::Edit {
            id,
            name,
            category,
            priority,
            due,
            clear_due,
        } => {
            let request = edit_request(TaskId::parse(id)?, name, category, priority, due, clear_due);
            let task = service.update(request).await?;
            writeln!(out, "updated {}", describe_task(&task))?;
        }
        Command::Remove { id } => {
            let task_id = TaskId::parse(id)?;
            service.delete(&task_id).await?;
            writeln!(out, "removed {task_id}")?;
        }
        Command::Move { id, index } => {
            let task_id = TaskId::parse(id)?;
            service.reorder(&task_id, index).await?;
            writeln!(out, "moved {task_id} to {index}")?;
        }
        Command::Check => {
            let mut monitor = DueDateMonitor::new();
            for notice in service.check_due_dates(&mut monitor).await? {
                writeln!(out, "{}", describe_notice(&notice))?;
            }
        }
        Command::Watch => {
            watch(&service, &config).await;
        }
        Command::Export { path } => {
            let bytes = service.export_snapshot().await?;
            write_file(&path, &bytes).map_err(|source| CliError::File {
                path: path.clone(),
                source,
            })?;
            info!(%path, "exported task snapshot");
        }
        Command::Import { path } => {
            let bytes = read_file(&path).map_err(|source| CliError::File {
                path: path.clone(),
                source,
            })?;
            let tasks = service.import_snapshot(&bytes).await?;
            writeln!(out, "imported {} task(s)", tasks.len())?;
        }
    }
    Ok(())
}

fn edit_request(
    id: TaskId,
    name: Option<String>,
    category: Option<String>,
    priority: Option<String>,
    due: Option<String>,
    clear_due: bool,
) -> UpdateTaskRequest {
    let mut request = UpdateTaskRequest::new(id);
    if let Some(value) = name {
        request = request.with_name(value);
    }
    if let Some(value) = category {
        request = request.with_category(value);
    }
    if let Some(value) = priority {
        request = request.with_priority(value);
    }
    if let Some(value) = due {
        request = request.with_due_date(value);
    }
    if clear_due {
        request = request.clear_due_date();
    }
    request
}

async fn watch(service: &Service, config: &TrackerConfig) {
    info!(
        interval_secs = config.monitor_interval.as_secs(),
        "watching due dates, press Ctrl-C to stop"
    );
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %err, "cannot listen for Ctrl-C, stopping watch");
        }
    };
    let monitor = run_due_date_watch(
        service,
        DueDateMonitor::new(),
        &ConsoleNotifier,
        config.monitor_interval,
        shutdown,
    )
    .await;
    info!(notified = monitor.notified_count(), "watch stopped");
}

fn describe_task(task: &Task) -> String {
    let due = task
        .due_date()
        .map_or_else(String::new, |due_date| format!("  due {due_date}"));
    format!(
        "{}  {}  [{}/{}]{due}",
        task.id(),
        task.name(),
        task.category(),
        task.priority()
    )
}

fn describe_notice(notice: &OverdueNotice) -> String {
    format!("overdue: {} (due {})", notice.name, notice.due_date)
}

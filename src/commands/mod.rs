pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod init;
pub mod login;
pub mod logout;
pub mod register;
pub mod show;
pub mod tasks;

use crate::api::tasks::TaskApi;
use crate::api::{ApiError, ListFilter};
use crate::libs::config::Config;
use crate::libs::notify::{ConsoleDialog, ConsoleNotifier};
use crate::libs::session::Session;
use crate::libs::sorting::{ScheduleSort, SortDirection};
use crate::libs::sync::{SyncError, TaskSync};
use crate::libs::table::PagedTable;
use crate::libs::task::RecurrenceKind;
use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Log in to the Task Master server")]
    Login(login::LoginArgs),
    #[command(about = "Log out and forget the stored session")]
    Logout,
    #[command(about = "Create a new account")]
    Register,
    #[command(about = "List tasks")]
    Tasks(tasks::TasksArgs),
    #[command(about = "Add a task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Show a task as it would appear in the edit form")]
    Show(show::ShowArgs),
    #[command(about = "Edit a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Toggle a task's completion", arg_required_else_help = true)]
    Complete(complete::CompleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd().await,
            Commands::Register => register::cmd().await,
            Commands::Tasks(args) => tasks::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Show(args) => show::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Complete(args) => complete::cmd(args).await,
        }
    }
}

/// A failure that has already been shown to the user.
#[derive(Debug, Error)]
#[error("request failed")]
pub struct Reported;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Daily,
    Weekly,
    Monthly,
}

impl From<Kind> for RecurrenceKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Daily => RecurrenceKind::Daily,
            Kind::Weekly => RecurrenceKind::Weekly,
            Kind::Monthly => RecurrenceKind::Monthly,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Sort {
    #[default]
    Asc,
    Desc,
}

/// Which tasks the table shows and in what order.
#[derive(Debug, Clone, Default, Args)]
pub struct TableArgs {
    /// Only daily tasks, ordered by time
    #[arg(long, conflicts_with_all = ["weekly", "monthly"])]
    pub daily: bool,
    /// Only weekly tasks, ordered by day and time
    #[arg(long, conflicts_with = "monthly")]
    pub weekly: bool,
    /// Only monthly tasks, ordered by day of month and time
    #[arg(long)]
    pub monthly: bool,
    /// Direction of the schedule ordering
    #[arg(long, value_enum, default_value_t = Sort::Asc)]
    pub sort: Sort,
}

impl TableArgs {
    pub fn of_kind(kind: Kind) -> Self {
        Self {
            daily: kind == Kind::Daily,
            weekly: kind == Kind::Weekly,
            monthly: kind == Kind::Monthly,
            sort: Sort::Asc,
        }
    }

    pub fn kind(&self) -> Option<Kind> {
        if self.daily {
            Some(Kind::Daily)
        } else if self.weekly {
            Some(Kind::Weekly)
        } else if self.monthly {
            Some(Kind::Monthly)
        } else {
            None
        }
    }
}

pub type Controller = TaskSync<TaskApi, PagedTable, ConsoleNotifier, ConsoleDialog>;

/// Builds a controller for the logged-in user with the table loaded.
pub async fn controller(table_args: &TableArgs, completed_only: bool, assume_yes: bool) -> Result<Controller> {
    let config = Config::read()?;
    let session = Session::read()?;
    let owner = config.owner(&session)?;
    let kind = table_args.kind().map(RecurrenceKind::from);

    let direction = match table_args.sort {
        Sort::Asc => SortDirection::Ascending,
        Sort::Desc => SortDirection::Descending,
    };
    let table = PagedTable::new(config.table.page_size);
    let table = match kind {
        Some(RecurrenceKind::Daily) => table.with_order(ScheduleSort::Daily, direction),
        Some(RecurrenceKind::Weekly) => table.with_order(ScheduleSort::Weekly(config.table.day_order()), direction),
        Some(RecurrenceKind::Monthly) => table.with_order(ScheduleSort::Monthly, direction),
        None => table,
    };

    let api = TaskApi::new(&config.base_url()?, session);
    let mut sync = TaskSync::new(api, table, ConsoleNotifier, ConsoleDialog { assume_yes }, owner);
    let filter = ListFilter {
        user_id: Some(owner),
        kind,
        completed_only,
    };
    reported(sync.load(&filter).await)?;
    Ok(sync)
}

/// Turns a controller failure into a quiet [`Reported`] error.
///
/// API failures were already toasted by the controller; a 401 also drops
/// the stored session.
pub fn reported<T>(result: Result<T, SyncError>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(SyncError::Api(err)) => {
            if err == ApiError::Unauthenticated {
                Session::delete()?;
            }
            Err(Reported.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Human-readable name of the table being shown.
pub fn table_header(kind: Option<Kind>) -> &'static str {
    match kind {
        Some(Kind::Daily) => "Daily",
        Some(Kind::Weekly) => "Weekly",
        Some(Kind::Monthly) => "Monthly",
        None => "All",
    }
}

//! Task synchronization controller.
//!
//! [`TaskSync`] performs the mutating task operations against a
//! [`TaskStore`] and reconciles the local [`TaskTable`] with the outcome:
//! rows are added, refreshed in place or removed, the page the user was on
//! is kept, row numbers are recomputed and the completion [`Badge`] follows
//! every change in row count or completion state.
//!
//! Each operation is one request-response exchange. Its side effects on the
//! table, forms, toasts and dialog are applied before it returns, and the
//! returned `Result` carries the same outcome to the caller. Nothing is
//! retried. Operations take `&mut self`, so a controller runs one at a time.
//!
//! ## Failure handling
//!
//! | failure | toast |
//! |---------|-------|
//! | 400 on create/update | "Please fill all the fields", plus the first message per field on the form (form-level for keys that name no field) |
//! | 400 on delete/complete | "Something went wrong" |
//! | 401 | "You are not authenticated. Please login first" |
//! | 403 | "You are unauthorized to {verb} this task" |
//! | 404 | "Task is not found" |
//! | anything else | "An error occurred. Please try again later" |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmaster::api::tasks::TaskApi;
//! use taskmaster::libs::notify::{ConsoleDialog, ConsoleNotifier};
//! use taskmaster::libs::session::Session;
//! use taskmaster::libs::sync::TaskSync;
//! use taskmaster::libs::table::PagedTable;
//!
//! # async fn run() -> Result<(), taskmaster::libs::sync::SyncError> {
//! let api = TaskApi::new("http://localhost:8000", Session::default());
//! let mut sync = TaskSync::new(api, PagedTable::new(10), ConsoleNotifier, ConsoleDialog::default(), 1);
//! sync.add_form_mut().set("title", "Pay rent").set("daily", "true").set("execution_time", "09:00");
//! sync.create().await?;
//! # Ok(())
//! # }
//! ```

use super::badge::Badge;
use super::form::TaskForm;
use super::messages::Message;
use super::notify::{Dialog, Notifier, Toast};
use super::row::DisplayRow;
use super::sorting::SortError;
use super::table::{renumber, TaskTable};
use super::task::{Task, TaskId};
use crate::api::{ApiError, ListFilter, TaskStore};
use thiserror::Error;
use tracing::{debug, warn};

/// The operation a request belongs to; decides how its failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Fetch,
    Edit,
    Delete,
    Complete,
}

impl Operation {
    pub fn verb(&self) -> &'static str {
        match self {
            Operation::Load => "list",
            Operation::Create => "add",
            Operation::Fetch => "view",
            Operation::Edit => "edit",
            Operation::Delete => "delete",
            Operation::Complete => "complete",
        }
    }
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("failed to order the task table: {0}")]
    Table(#[from] SortError),
    #[error("confirmation dialog failed: {0}")]
    Dialog(anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

pub struct TaskSync<S, T, N, D> {
    store: S,
    table: T,
    notifier: N,
    dialog: D,
    owner: i64,
    add_form: TaskForm,
    edit_form: TaskForm,
    edit_target: Option<TaskId>,
    delete_target: Option<TaskId>,
    badge: Badge,
}

impl<S, T, N, D> TaskSync<S, T, N, D>
where
    S: TaskStore,
    T: TaskTable,
    N: Notifier,
    D: Dialog,
{
    /// `owner` is the user id sent with every created or updated task.
    pub fn new(store: S, table: T, notifier: N, dialog: D, owner: i64) -> Self {
        let badge = Badge::compute(table.completed_count(), table.rows().len());
        Self {
            store,
            table,
            notifier,
            dialog,
            owner,
            add_form: TaskForm::new(),
            edit_form: TaskForm::new(),
            edit_target: None,
            delete_target: None,
            badge,
        }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut T {
        &mut self.table
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn dialog(&self) -> &D {
        &self.dialog
    }

    pub fn badge(&self) -> Badge {
        self.badge
    }

    pub fn add_form(&self) -> &TaskForm {
        &self.add_form
    }

    pub fn add_form_mut(&mut self) -> &mut TaskForm {
        &mut self.add_form
    }

    pub fn edit_form(&self) -> &TaskForm {
        &self.edit_form
    }

    pub fn edit_form_mut(&mut self) -> &mut TaskForm {
        &mut self.edit_form
    }

    /// Task the edit form was last populated from.
    pub fn edit_target(&self) -> Option<TaskId> {
        self.edit_target
    }

    /// Task awaiting delete confirmation or the delete response.
    pub fn delete_target(&self) -> Option<TaskId> {
        self.delete_target
    }

    /// Replaces the table contents with the tasks the server lists.
    pub async fn load(&mut self, filter: &ListFilter) -> Result<usize, SyncError> {
        let tasks = match self.store.list(filter).await {
            Ok(tasks) => tasks,
            Err(err) => return Err(self.report(Operation::Load, err)),
        };
        let count = tasks.len();

        self.table.clear();
        for task in &tasks {
            self.table.add_row(DisplayRow::from_task(task));
        }
        self.table.draw()?;
        renumber(&mut self.table);
        self.refresh_badge();
        debug!(count, "task table loaded");
        Ok(count)
    }

    /// Submits the add form and appends the created task to the table.
    pub async fn create(&mut self) -> Result<Task, SyncError> {
        let payload = self.add_form.payload(self.owner);
        let task = match self.store.create(&payload).await {
            Ok(task) => task,
            Err(err) => return Err(self.report(Operation::Create, err)),
        };

        let mut row = DisplayRow::from_task(&task);
        row.completed = false;
        self.table.add_row(row);
        self.table.draw()?;
        let last_page = self.table.page_info().pages.saturating_sub(1);
        self.table.set_page(last_page);
        renumber(&mut self.table);
        self.refresh_badge();
        self.add_form.reset();

        debug!(task_id = task.id, "task created");
        self.notifier.notify(Toast::success(Message::TaskAdded(task.title.clone())));
        Ok(task)
    }

    /// Fetches a task and fills the edit form with it. The table is untouched.
    pub async fn read_for_edit(&mut self, id: TaskId) -> Result<Task, SyncError> {
        let task = match self.store.fetch(id).await {
            Ok(task) => task,
            Err(err) => return Err(self.report(Operation::Fetch, err)),
        };
        self.edit_form.populate(&task);
        self.edit_target = Some(id);
        Ok(task)
    }

    /// Submits the edit form as a full replacement and re-renders that row in place.
    pub async fn update(&mut self, id: TaskId) -> Result<Task, SyncError> {
        let payload = self.edit_form.payload(self.owner);
        let task = match self.store.update(id, &payload).await {
            Ok(task) => task,
            Err(err) => return Err(self.report(Operation::Edit, err)),
        };

        match self.table.row_mut(id) {
            Some(row) => row.refresh(&task),
            None => warn!(task_id = id, "edited task is not in the table"),
        }
        self.edit_form.clear_errors();

        self.notifier.notify(Toast::success(Message::TaskEdited(task.title.clone())));
        Ok(task)
    }

    /// Asks for confirmation, deletes the task and removes its row.
    ///
    /// The page the user was on is restored afterwards if it still exists.
    pub async fn delete(&mut self, id: TaskId) -> Result<DeleteOutcome, SyncError> {
        let title = self.table.row(id).map(|row| row.title.clone()).unwrap_or_default();
        self.delete_target = Some(id);

        let confirmed = self.dialog.confirm(&Message::ConfirmDeleteTask(title.clone()));
        match confirmed {
            Ok(true) => {}
            Ok(false) => {
                self.delete_target = None;
                return Ok(DeleteOutcome::Cancelled);
            }
            Err(err) => {
                self.delete_target = None;
                return Err(SyncError::Dialog(err));
            }
        }

        let page = self.table.page_info().page;
        let result = self.store.delete(id).await;
        self.delete_target = None;
        if let Err(err) = result {
            return Err(self.report(Operation::Delete, err));
        }

        self.table.remove_row(id);
        self.table.draw()?;
        self.refresh_badge();
        self.table.set_page(page);
        renumber(&mut self.table);
        self.dialog.close();

        debug!(task_id = id, page, "task deleted");
        self.notifier.notify(Toast::success(Message::TaskDeleted(title)));
        Ok(DeleteOutcome::Deleted)
    }

    /// Toggles completion; the row follows whatever state the server returns.
    pub async fn toggle_complete(&mut self, id: TaskId) -> Result<bool, SyncError> {
        let status = match self.store.toggle_complete(id).await {
            Ok(status) => status,
            Err(err) => return Err(self.report(Operation::Complete, err)),
        };

        match self.table.row_mut(id) {
            Some(row) => row.completed = status.completed,
            None => warn!(task_id = id, "completed task is not in the table"),
        }
        self.refresh_badge();

        if status.completed {
            self.notifier.notify(Toast::success(Message::TaskCompleted(status.title)));
        }
        Ok(status.completed)
    }

    fn refresh_badge(&mut self) {
        self.badge = Badge::compute(self.table.completed_count(), self.table.rows().len());
    }

    /// Raises the toast (and inline field errors) for a failed request.
    fn report(&mut self, operation: Operation, err: ApiError) -> SyncError {
        warn!(operation = operation.verb(), error = %err, "task request failed");
        let message = match (&err, operation) {
            (_, Operation::Fetch) => Message::GenericError,
            (ApiError::Validation(errors), Operation::Create) => {
                self.add_form.apply_errors(errors);
                Message::FillAllFields
            }
            (ApiError::Validation(errors), Operation::Edit) => {
                self.edit_form.apply_errors(errors);
                Message::FillAllFields
            }
            (ApiError::Validation(_), _) => Message::SomethingWentWrong,
            (ApiError::Unauthenticated, _) => Message::NotAuthenticated,
            (ApiError::Forbidden, _) => Message::Unauthorized(operation),
            (ApiError::NotFound, _) => Message::TaskNotFound,
            _ => Message::GenericError,
        };
        self.notifier.notify(Toast::error(message));
        SyncError::Api(err)
    }
}

//! # Taskmaster - recurring task manager for the terminal
//!
//! A command-line client for a Task Master server: log in, then list,
//! add, edit, complete and delete daily, weekly and monthly tasks.
//!
//! ## Features
//!
//! - **Task Table**: paginated, chronologically ordered by schedule, with a completion badge
//! - **Synchronization**: every change is sent to the server and reflected in the table in place
//! - **Forms**: inline field errors from the server's validation responses
//! - **Accounts**: login, logout and registration against the server's CSRF-protected pages
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskmaster::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;

//! Core library modules for taskmaster.
//!
//! ## Features
//!
//! - **Core Infrastructure**: configuration, data storage, session, messaging
//! - **Task Model**: tasks and their recurrence, schedule formatting and ordering
//! - **Table**: display rows, pagination, completion badge
//! - **Synchronization**: the controller tying the API to the table, forms and toasts
//! - **Accounts**: login and registration forms
//!
//! ## Usage
//!
//! ```rust
//! use taskmaster::libs::formatter::convert_to_12_hour;
//!
//! assert_eq!(convert_to_12_hour("14:30:00").unwrap(), "2:30 p.m.");
//! ```

pub mod auth;
pub mod badge;
pub mod config;
pub mod data_storage;
pub mod form;
pub mod formatter;
pub mod messages;
pub mod notify;
pub mod row;
pub mod session;
pub mod sorting;
pub mod sync;
pub mod table;
pub mod task;
pub mod view;

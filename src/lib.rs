pub mod core;
pub mod form;
pub mod logging;
pub mod models;
pub mod shell;

pub use crate::core::{Action, Ledger, Notification, Notifier, Seed, Severity};
pub use models::{NewProject, Payment, PaymentId, PaymentStatus, Project, ProjectId, ProjectStatus};

#[cfg(feature = "gui")]
pub mod gui;

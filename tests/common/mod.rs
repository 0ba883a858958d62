mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from projtrack for tests
pub use projtrack::{
    Action, Ledger, NewProject, Notification, Payment, PaymentId, PaymentStatus, Project,
    ProjectId, ProjectStatus, Seed, Severity,
};

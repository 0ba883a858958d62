pub mod ids;
pub mod ledger;
pub mod notify;
pub mod seed;

pub use ids::IdGenerator;
pub use ledger::{Action, Ledger, LedgerError};
pub use notify::{Notification, Notifier, Severity};
pub use seed::{Seed, SeedError};

mod app;
mod message;
mod state;
mod screens;
mod widgets;

pub use app::{ProjtrackApp, run};
pub use message::Message;
pub use state::{AppState, Toast, Toasts};

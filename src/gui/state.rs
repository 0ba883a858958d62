use crate::core::{Ledger, Notification, Notifier};

/// How many toasts stay on screen before the oldest is dropped.
const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, notification: Notification) {
        self.next_id += 1;
        self.items.push(Toast {
            id: self.next_id,
            notification,
        });
        if self.items.len() > MAX_TOASTS {
            self.items.remove(0);
        }
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub ledger: Ledger,
    pub toasts: Toasts,
}

impl AppState {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger,
            toasts: Toasts::default(),
        }
    }
}

//! Dispatcher allows effects to send actions back to the store

use crate::actions::Action;
use tokio::sync::mpsc;

/// Dispatcher for sending actions back to the UI thread
///
/// Actions sent here are drained by the main loop and dispatched through
/// the store in arrival order.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    pub fn new(tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { tx }
    }

    /// Queue an action for the next iteration of the main loop
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            log::error!("Failed to dispatch action: {}", e);
        }
    }
}

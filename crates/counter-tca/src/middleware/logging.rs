//! LoggingMiddleware - logs all actions for debugging

use super::Middleware;
use crate::actions::Action;
use crate::state::CounterState;

pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &CounterState) -> bool {
        log::debug!(
            "Action: {:?} (count={}, loading={})",
            action,
            state.count,
            state.is_loading
        );
        true
    }
}

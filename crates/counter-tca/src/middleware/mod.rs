use crate::actions::Action;
use crate::state::CounterState;

pub mod logging;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs in registration order on the UI thread, so it must not
/// block. Async work belongs in effects.
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current state, before the reducer runs
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &CounterState) -> bool;
}

use crate::actions::Action;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::runner::EffectRunner;
use crate::state::CounterState;

/// Callback invoked with the new state after it changed
pub type Observer = Box<dyn Fn(&CounterState)>;

/// Handle returned by `Store::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Store - holds the counter state and runs the dispatch loop
///
/// ```text
/// Action → Middleware Chain → Reducer → State → Observers
///                                 │
///                                 └→ Effects → EffectRunner → Dispatcher → Action
/// ```
pub struct Store {
    state: CounterState,
    middleware: Vec<Box<dyn Middleware>>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    runner: EffectRunner,
}

impl Store {
    pub fn new(initial_state: CounterState, runner: EffectRunner) -> Self {
        Self {
            state: initial_state,
            middleware: Vec::new(),
            observers: Vec::new(),
            next_subscription: 0,
            runner,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &CounterState {
        &self.state
    }

    /// Register an observer that is called after every state change
    pub fn subscribe(&mut self, observer: impl Fn(&CounterState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; returns false if it was not registered
    #[allow(dead_code)]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Process an action through middleware chain and reducer, then run its effects
    pub fn dispatch(&mut self, action: Action) {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state) {
                log::debug!("Action consumed by middleware: {:?}", action);
                return;
            }
        }

        let (new_state, effects) = reduce(self.state.clone(), &action);

        if new_state != self.state {
            self.state = new_state;
            for (_, observer) in &self.observers {
                observer(&self.state);
            }
        }

        for effect in effects {
            self.runner.run(effect);
        }
    }
}

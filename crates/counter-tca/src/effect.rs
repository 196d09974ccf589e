//! Effects - side effects declared by the reducer
//!
//! Effects are returned from the reducer and handed to the `EffectRunner`.
//! This keeps the reducer pure while making async operations explicit.

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch a fact about `count`, the value captured when the request was made
    FetchFact { count: i64 },
}

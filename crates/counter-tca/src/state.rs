//! Counter State

/// State of the counter screen
///
/// Owned by the store and replaced only by the reducer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
    /// Last fetched fact, cleared whenever the count changes
    pub fact: Option<String>,
    /// True while a fact fetch is in flight
    pub is_loading: bool,
    pub is_timer_on: bool,
}

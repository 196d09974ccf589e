/// Actions represent all possible state changes of the counter screen.
///
/// User actions come from key presses; `FactReceived` is only ever sent by
/// the effect runner once a fetch completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// ## User actions
    Decrement,
    Increment,
    ToggleTimer,
    RequestFact,

    /// ## Effect results
    FactReceived(String),
}

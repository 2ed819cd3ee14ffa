use super::intent::Intent;
use super::state::UiState;

/// The only place where a feature's state changes.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure transition: (State, Intent) -> State.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

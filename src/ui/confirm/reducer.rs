use crate::ui::mvi::Reducer;

use super::intent::ConfirmIntent;
use super::state::ConfirmDialogState;

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmDialogState;
    type Intent = ConfirmIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A newer rating replaces whatever is on screen.
            ConfirmIntent::Show { rating, unit_count } => {
                ConfirmDialogState::Visible { rating, unit_count }
            }
            ConfirmIntent::Dismiss => ConfirmDialogState::Hidden,
        }
    }
}

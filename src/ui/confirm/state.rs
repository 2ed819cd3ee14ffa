use crate::ui::mvi::UiState;

pub const CONFIRM_TITLE: &str = "Cool!";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmDialogState {
    #[default]
    Hidden,
    Visible {
        rating: usize,
        unit_count: usize,
    },
}

impl UiState for ConfirmDialogState {}

impl ConfirmDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Body text of the dialog, `None` while hidden.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Hidden => None,
            Self::Visible { rating, .. } => Some(format!("You rate this with {}", rating)),
        }
    }
}

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmIntent {
    /// The user picked a rating.
    Show { rating: usize, unit_count: usize },
    /// OK pressed (Enter, Space or Escape).
    Dismiss,
}

impl Intent for ConfirmIntent {}

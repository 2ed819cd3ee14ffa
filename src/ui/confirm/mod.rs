//! Confirmation dialog shown after the user rates.
//!
//! - `state.rs` - Hidden / Visible with the chosen rating
//! - `intent.rs` - Show, Dismiss
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_confirm_dialog;
pub use intent::ConfirmIntent;
pub use reducer::ConfirmReducer;
pub use state::{ConfirmDialogState, CONFIRM_TITLE};

//! Terminal host screen for the rating control.
//!
//! The screen owns a [`RatingControl`](crate::rating::RatingControl),
//! draws it with [`star_row::StarRow`], turns keys and clicks into
//! activations and shows a confirmation dialog for every user rating.

pub mod app;
pub mod confirm;
pub mod events;
pub mod feed;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod star_row;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;

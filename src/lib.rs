pub mod config;
pub mod error;
pub mod logging;
pub mod rating;
pub mod ui;

//! Star rating control.
//!
//! Holds a row of selectable units ("stars") and the current rating,
//! keeps every unit's filled state in sync with the rating and reports
//! user-driven rating changes to a single observer.
//!
//! The module has no terminal dependencies. Renderers consume a
//! [`RatingSnapshot`] and feed user input back through
//! [`RatingControl::activate_unit`].
//!
//! ```text
//! activate_unit(i) ──→ set rating i+1 ──→ refill units ──→ observer
//! set_rating(r)    ──→ refill units (silent)
//! reconfigure(n)   ──→ rebuild units ──→ clamp rating ──→ refill units
//! ```

mod bounds;
mod control;
mod error;
mod observer;

pub use bounds::{UnitBounds, DEFAULT_MAX_UNITS, DEFAULT_MIN_UNITS};
pub use control::{RatingControl, RatingSnapshot, Unit};
pub use error::RatingError;
pub use observer::RatingObserver;

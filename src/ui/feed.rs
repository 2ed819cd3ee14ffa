//! Host-side observer for the rating control.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::rating::{RatingControl, RatingObserver};

/// A rating change reported by the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingChanged {
    pub rating: usize,
    pub unit_count: usize,
}

/// Queues rating changes until the app drains them after handling input.
///
/// The app owns the feed through an `Rc` and hands the control a `Weak`
/// to it.
#[derive(Debug, Default)]
pub struct RatingFeed {
    pending: RefCell<VecDeque<RatingChanged>>,
}

impl RatingFeed {
    /// Oldest unread change.
    pub fn take(&self) -> Option<RatingChanged> {
        self.pending.borrow_mut().pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl RatingObserver for RatingFeed {
    fn on_rating_changed(&self, rating: usize, source: &RatingControl) {
        self.pending.borrow_mut().push_back(RatingChanged {
            rating,
            unit_count: source.unit_count(),
        });
    }
}

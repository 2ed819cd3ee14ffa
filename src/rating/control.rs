use std::rc::Weak;

use super::bounds::UnitBounds;
use super::error::RatingError;
use super::observer::RatingObserver;

/// One selectable star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    index: usize,
    filled: bool,
}

impl Unit {
    fn empty(index: usize) -> Self {
        Self {
            index,
            filled: false,
        }
    }

    /// Position within the row, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }
}

/// Plain copy of the control's visible state, handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RatingSnapshot {
    pub rating: usize,
    pub filled: Vec<bool>,
}

impl RatingSnapshot {
    pub fn len(&self) -> usize {
        self.filled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filled.is_empty()
    }
}

/// A row of stars with a current rating.
///
/// Invariant: after every state change, unit `i` is filled exactly when
/// `i < rating`, and `rating <= unit_count`.
///
/// Two range policies are offered for the unit count:
/// - [`new`](Self::new), [`with_bounds`](Self::with_bounds) and
///   [`reconfigure`](Self::reconfigure) clamp: an out-of-range request is
///   logged and replaced by the maximum.
/// - [`try_new`](Self::try_new) and [`try_reconfigure`](Self::try_reconfigure)
///   are strict and return [`RatingError::OutOfRange`].
///
/// Neither policy applies to user input: activating a unit that does not
/// exist is a no-op.
#[derive(Debug)]
pub struct RatingControl {
    bounds: UnitBounds,
    rating: usize,
    units: Vec<Unit>,
    observer: Option<Weak<dyn RatingObserver>>,
}

impl RatingControl {
    /// Create a control with the default 3..=10 bounds.
    pub fn new(requested: usize) -> Self {
        Self::with_bounds(UnitBounds::default(), requested)
    }

    pub fn with_bounds(bounds: UnitBounds, requested: usize) -> Self {
        let count = bounds.resolve(requested);
        Self::build(bounds, count)
    }

    pub fn try_new(bounds: UnitBounds, requested: usize) -> Result<Self, RatingError> {
        let count = bounds.check(requested)?;
        Ok(Self::build(bounds, count))
    }

    fn build(bounds: UnitBounds, count: usize) -> Self {
        Self {
            bounds,
            rating: 0,
            units: (0..count).map(Unit::empty).collect(),
            observer: None,
        }
    }

    pub fn bounds(&self) -> UnitBounds {
        self.bounds
    }

    pub fn rating(&self) -> usize {
        self.rating
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Filled state of the unit at `index`, `None` past the end of the row.
    pub fn is_filled(&self, index: usize) -> Option<bool> {
        self.units.get(index).map(Unit::is_filled)
    }

    pub fn snapshot(&self) -> RatingSnapshot {
        RatingSnapshot {
            rating: self.rating,
            filled: self.units.iter().map(Unit::is_filled).collect(),
        }
    }

    /// Rebuild the row with a new unit count, clamping out-of-range requests.
    ///
    /// The rating is kept, capped at the new unit count, and the fresh
    /// units are filled from it.
    pub fn reconfigure(&mut self, requested: usize) {
        let count = self.bounds.resolve(requested);
        self.rebuild(count);
    }

    /// Like [`reconfigure`](Self::reconfigure), but leaves the control
    /// untouched and returns an error for an out-of-range request.
    pub fn try_reconfigure(&mut self, requested: usize) -> Result<(), RatingError> {
        let count = self.bounds.check(requested)?;
        self.rebuild(count);
        Ok(())
    }

    fn rebuild(&mut self, count: usize) {
        self.units = (0..count).map(Unit::empty).collect();
        self.rating = self.rating.min(count);
        self.refill();
        tracing::debug!(units = count, rating = self.rating, "Rating control rebuilt");
    }

    /// Set the rating without notifying the observer.
    ///
    /// Values above the unit count are stored as the unit count.
    pub fn set_rating(&mut self, value: usize) {
        self.rating = value.min(self.units.len());
        self.refill();
    }

    /// Handle the user selecting the unit at `index`.
    ///
    /// Fills every unit up to and including `index`, then notifies the
    /// observer with the new rating. Returns `false` without touching any
    /// state when `index` is past the end of the row.
    pub fn activate_unit(&mut self, index: usize) -> bool {
        if index >= self.units.len() {
            tracing::debug!(index, units = self.units.len(), "Ignoring activation outside the row");
            return false;
        }

        self.set_rating(index + 1);
        tracing::debug!(rating = self.rating, "Unit activated");
        self.notify();
        true
    }

    /// Register the single observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: Weak<dyn RatingObserver>) {
        self.observer = Some(observer);
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// True while an observer is registered and still alive.
    pub fn has_observer(&self) -> bool {
        self.observer
            .as_ref()
            .is_some_and(|observer| observer.strong_count() > 0)
    }

    fn notify(&self) {
        if let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) {
            observer.on_rating_changed(self.rating, self);
        }
    }

    fn refill(&mut self) {
        let rating = self.rating;
        for unit in &mut self.units {
            unit.filled = unit.index < rating;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(usize, usize)>>,
    }

    impl RatingObserver for Recorder {
        fn on_rating_changed(&self, rating: usize, source: &RatingControl) {
            self.calls.borrow_mut().push((rating, source.unit_count()));
        }
    }

    fn filled(control: &RatingControl) -> Vec<bool> {
        control.units().iter().map(Unit::is_filled).collect()
    }

    #[test]
    fn new_starts_empty() {
        let control = RatingControl::new(6);
        assert_eq!(control.unit_count(), 6);
        assert_eq!(control.rating(), 0);
        assert_eq!(filled(&control), vec![false; 6]);
    }

    #[test]
    fn units_carry_their_position() {
        let control = RatingControl::new(4);
        let indices: Vec<usize> = control.units().iter().map(Unit::index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn out_of_range_request_uses_max() {
        assert_eq!(RatingControl::new(2).unit_count(), 10);
        assert_eq!(RatingControl::new(11).unit_count(), 10);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        let result = RatingControl::try_new(UnitBounds::default(), 1);
        assert!(matches!(
            result,
            Err(RatingError::OutOfRange { requested: 1, .. })
        ));
    }

    #[test]
    fn set_rating_fills_prefix() {
        let mut control = RatingControl::new(5);
        control.set_rating(2);
        assert_eq!(filled(&control), vec![true, true, false, false, false]);
    }

    #[test]
    fn set_rating_caps_at_unit_count() {
        let mut control = RatingControl::new(5);
        control.set_rating(9);
        assert_eq!(control.rating(), 5);
        assert_eq!(filled(&control), vec![true; 5]);
    }

    #[test]
    fn set_rating_zero_clears_row() {
        let mut control = RatingControl::new(3);
        control.set_rating(3);
        control.set_rating(0);
        assert_eq!(filled(&control), vec![false; 3]);
    }

    #[test]
    fn activate_notifies_with_one_based_rating() {
        let recorder = Rc::new(Recorder::default());
        let mut control = RatingControl::new(6);
        control.set_observer(Rc::downgrade(&recorder) as Weak<dyn RatingObserver>);

        assert!(control.activate_unit(3));

        assert_eq!(control.rating(), 4);
        assert_eq!(filled(&control), vec![true, true, true, true, false, false]);
        assert_eq!(*recorder.calls.borrow(), vec![(4, 6)]);
    }

    #[test]
    fn activating_lower_unit_unfills_the_rest() {
        let mut control = RatingControl::new(5);
        control.activate_unit(4);
        control.activate_unit(0);
        assert_eq!(control.rating(), 1);
        assert_eq!(filled(&control), vec![true, false, false, false, false]);
    }

    #[test]
    fn activate_past_end_is_noop() {
        let recorder = Rc::new(Recorder::default());
        let mut control = RatingControl::new(3);
        control.set_observer(Rc::downgrade(&recorder) as Weak<dyn RatingObserver>);
        control.set_rating(2);

        assert!(!control.activate_unit(3));

        assert_eq!(control.rating(), 2);
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn set_rating_is_silent() {
        let recorder = Rc::new(Recorder::default());
        let mut control = RatingControl::new(6);
        control.set_observer(Rc::downgrade(&recorder) as Weak<dyn RatingObserver>);

        control.set_rating(3);

        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn dropped_observer_is_skipped() {
        let recorder = Rc::new(Recorder::default());
        let mut control = RatingControl::new(6);
        control.set_observer(Rc::downgrade(&recorder) as Weak<dyn RatingObserver>);
        assert!(control.has_observer());

        drop(recorder);

        assert!(!control.has_observer());
        assert!(control.activate_unit(1));
        assert_eq!(control.rating(), 2);
    }

    #[test]
    fn clear_observer_stops_notifications() {
        let recorder = Rc::new(Recorder::default());
        let mut control = RatingControl::new(6);
        control.set_observer(Rc::downgrade(&recorder) as Weak<dyn RatingObserver>);
        control.clear_observer();

        control.activate_unit(0);

        assert!(recorder.calls.borrow().is_empty());
        assert!(!control.has_observer());
    }

    #[test]
    fn reconfigure_grow_keeps_rating_and_refills() {
        let mut control = RatingControl::new(6);
        control.set_rating(3);

        control.reconfigure(10);

        assert_eq!(control.unit_count(), 10);
        assert_eq!(control.rating(), 3);
        assert_eq!(filled(&control).iter().filter(|f| **f).count(), 3);
    }

    #[test]
    fn reconfigure_shrink_clamps_rating() {
        let mut control = RatingControl::new(8);
        control.set_rating(7);

        control.reconfigure(4);

        assert_eq!(control.rating(), 4);
        assert_eq!(filled(&control), vec![true; 4]);
    }

    #[test]
    fn try_reconfigure_leaves_state_on_error() {
        let mut control = RatingControl::new(5);
        control.set_rating(2);

        let result = control.try_reconfigure(12);

        assert!(result.is_err());
        assert_eq!(control.unit_count(), 5);
        assert_eq!(control.rating(), 2);
    }

    #[test]
    fn is_filled_past_end_is_none() {
        let control = RatingControl::new(3);
        assert_eq!(control.is_filled(2), Some(false));
        assert_eq!(control.is_filled(3), None);
    }

    #[test]
    fn snapshot_mirrors_units() {
        let mut control = RatingControl::new(4);
        control.set_rating(1);
        let snapshot = control.snapshot();
        assert_eq!(snapshot.rating, 1);
        assert_eq!(snapshot.filled, vec![true, false, false, false]);
        assert_eq!(snapshot.len(), 4);
    }
}

use super::control::RatingControl;

/// Listener notified when the user changes the rating.
///
/// Programmatic changes through [`RatingControl::set_rating`] are silent;
/// only [`RatingControl::activate_unit`] reaches the observer.
///
/// The control stores the observer as a `Weak` handle, so implementors
/// that need to record state use interior mutability.
pub trait RatingObserver {
    /// Called once per activation, after the control's state is updated.
    fn on_rating_changed(&self, rating: usize, source: &RatingControl);
}

/// Marker for a feature's UI state.
///
/// States are cloneable values that hold everything the view needs and
/// start out in their `Default` (usually hidden) form.
pub trait UiState: Clone + PartialEq + Default + 'static {}

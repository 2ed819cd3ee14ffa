/// Marker for user actions or system events aimed at one feature.
pub trait Intent: 'static {}

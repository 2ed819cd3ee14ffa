use super::error::RatingError;

/// Fewest stars a control may show.
pub const DEFAULT_MIN_UNITS: usize = 3;

/// Most stars a control may show. Out-of-range requests fall back here.
pub const DEFAULT_MAX_UNITS: usize = 10;

/// Inclusive range of unit counts accepted by a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitBounds {
    min: usize,
    max: usize,
}

impl Default for UnitBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_UNITS,
            max: DEFAULT_MAX_UNITS,
        }
    }
}

impl UnitBounds {
    /// Build a range. A control needs at least one unit, so `min` must be
    /// non-zero and not exceed `max`.
    pub fn new(min: usize, max: usize) -> Result<Self, RatingError> {
        if min == 0 || min > max {
            return Err(RatingError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, requested: usize) -> bool {
        (self.min..=self.max).contains(&requested)
    }

    /// Strict policy: reject anything outside the range.
    pub fn check(&self, requested: usize) -> Result<usize, RatingError> {
        if self.contains(requested) {
            Ok(requested)
        } else {
            Err(RatingError::OutOfRange {
                requested,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Clamp-and-continue policy: an out-of-range request yields `max`.
    pub fn resolve(&self, requested: usize) -> usize {
        match self.check(requested) {
            Ok(count) => count,
            Err(err) => {
                tracing::warn!(
                    requested,
                    fallback = self.max,
                    "{}; falling back to the maximum",
                    err
                );
                self.max
            }
        }
    }
}

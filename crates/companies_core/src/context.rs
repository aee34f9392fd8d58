//! Validation context.
//!
//! Carries the settings one validation pass needs that are not part of the
//! data itself.

use chrono::{Local, NaiveDate};

/// Context for a validation pass.
///
/// `today` is the reference date for the "not in the future" rule on
/// `last_updated`. It defaults to the local current date; pinning it makes a
/// pass reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    /// Latest acceptable `last_updated` date
    pub today: NaiveDate,
}

impl ValidationContext {
    /// Creates a context using the local current date.
    pub fn new() -> Self {
        Self {
            today: Local::now().date_naive(),
        }
    }

    /// Pins the reference date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

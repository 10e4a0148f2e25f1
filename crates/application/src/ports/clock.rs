//! Clock port for time-related operations

use chrono::{DateTime, NaiveDate, Utc};

/// Port for getting the current time.
///
/// Export file names carry the current date; tests pin it with a fixed clock.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

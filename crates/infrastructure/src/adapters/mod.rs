//! Port adapters

mod system_clock;
mod tracing_navigator;

pub use system_clock::{FixedClock, SystemClock};
pub use tracing_navigator::TracingNavigator;

//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the panel and the components that do
//! the real work. Each port is a trait implemented by an adapter in the
//! infrastructure layer or by the host application.

mod clock;
mod exporter;
mod navigator;
mod project_store;
mod record_store;

pub use clock::Clock;
pub use exporter::{DataExporter, ExportOutcome};
pub use navigator::Navigator;
pub use project_store::ProjectStore;
pub use record_store::RecordStore;

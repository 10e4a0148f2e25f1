//! Application use cases (business logic orchestration).

mod assign_projects;
mod clear_saved;
mod delete_records;
mod export_records;
mod restore_records;
mod save_record;

#[cfg(test)]
mod test_support;

pub use assign_projects::*;
pub use clear_saved::*;
pub use delete_records::*;
pub use export_records::*;
pub use restore_records::*;
pub use save_record::*;

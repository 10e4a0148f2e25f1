//! ID and revision generation utilities.

use uuid::Uuid;

/// Generates a new time-ordered identifier for stored records and projects.
#[must_use]
pub fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

/// Builds the revision string that follows `previous`.
///
/// Revisions have the form `<generation>-<token>`. A missing or unparsable
/// previous revision starts at generation 1.
#[must_use]
pub fn next_revision(previous: Option<&str>) -> String {
    let generation = previous
        .and_then(|rev| rev.split_once('-'))
        .and_then(|(number, _)| number.parse::<u64>().ok())
        .unwrap_or(0);
    format!("{}-{}", generation + 1, Uuid::now_v7().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_format() {
        let id = generate_id();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_generate_id_uniqueness() {
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn test_next_revision_starts_at_one() {
        assert!(next_revision(None).starts_with("1-"));
        assert!(next_revision(Some("garbage")).starts_with("1-"));
    }

    #[test]
    fn test_next_revision_increments_generation() {
        let rev = next_revision(Some("7-abc"));
        assert!(rev.starts_with("8-"));
    }
}

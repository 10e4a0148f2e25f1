//! Navigation requests sent to the host router.

use serde::{Deserialize, Serialize};

use crate::record::RecordKind;

/// Asks the host to open a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTarget {
    /// Route base, `"request"` for request screens.
    pub base: String,
    /// Store partition of the opened item.
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Identifier of the opened item.
    pub id: String,
}

impl NavigationTarget {
    /// Target that opens a saved request in the request editor.
    #[must_use]
    pub fn saved_request(id: impl Into<String>) -> Self {
        Self {
            base: "request".to_string(),
            kind: RecordKind::Saved,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saved_request_target_shape() {
        let value = serde_json::to_value(NavigationTarget::saved_request("r1")).expect("valid");
        assert_eq!(
            value,
            serde_json::json!({"base": "request", "type": "saved", "id": "r1"})
        );
    }
}

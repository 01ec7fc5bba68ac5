//! Lanes
//!
//! The four fixed workflow columns a card can belong to.

use serde::{Deserialize, Serialize};

/// Workflow lane. Serialized with the lowercase keys the persisted blob
/// and the DOM `data-lane` attributes use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    Backlog,
    Todo,
    Progress,
    Complete,
}

impl Lane {
    /// All lanes in display order, left to right.
    pub const ALL: [Lane; 4] = [Lane::Backlog, Lane::Todo, Lane::Progress, Lane::Complete];

    /// Stable string key (matches the serde representation).
    pub fn key(&self) -> &'static str {
        match self {
            Lane::Backlog => "backlog",
            Lane::Todo => "todo",
            Lane::Progress => "progress",
            Lane::Complete => "complete",
        }
    }

    /// Column heading shown in the UI.
    pub fn title(&self) -> &'static str {
        match self {
            Lane::Backlog => "Backlog",
            Lane::Todo => "TODO",
            Lane::Progress => "In progress",
            Lane::Complete => "Complete",
        }
    }

    /// Parse a lane from its string key (e.g. from a DOM attribute).
    pub fn from_key(key: &str) -> Option<Lane> {
        Lane::ALL.iter().copied().find(|lane| lane.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for lane in Lane::ALL {
            assert_eq!(Lane::from_key(lane.key()), Some(lane));
        }
        assert_eq!(Lane::from_key("bogus"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&Lane::Progress).unwrap();
        assert_eq!(json, "\"progress\"");
        let back: Lane = serde_json::from_str("\"backlog\"").unwrap();
        assert_eq!(back, Lane::Backlog);
    }
}

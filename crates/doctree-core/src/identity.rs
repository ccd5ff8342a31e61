//! Node identity.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

use crate::error::TreeError;

/// Opaque, randomly generated identifier of a tree node.
///
/// A fresh id is drawn for every node at creation time and never changes
/// afterwards. Ids are not derived from paths, so building the same
/// directory twice yields different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for NodeId {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| TreeError::InvalidId(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_is_unique() {
        let ids: HashSet<_> = (0..1000).map(|_| NodeId::generate()).collect();

        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_display_parses_back() {
        let id = NodeId::generate();

        let parsed: NodeId = id.to_string().parse().unwrap();

        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "not-an-id".parse::<NodeId>().unwrap_err();

        assert!(matches!(err, TreeError::InvalidId(ref s) if s == "not-an-id"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = NodeId::generate();

        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, format!("\"{id}\""));
    }
}

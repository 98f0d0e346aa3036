//! Append-only merge of relationship metadata stored alongside each vector.

use serde::{Deserialize, Serialize};

/// Relationship metadata persisted per entity id.
///
/// The two sequences are positionally paired: `relationships[i]` names the
/// relation to `associated_conditions[i]`. Every merge keeps them equal
/// length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub relationships: Vec<String>,
    pub associated_conditions: Vec<String>,
}

impl MetadataRecord {
    /// Number of stored pairs, after truncating any length drift.
    pub fn len(&self) -> usize {
        self.relationships.len().min(self.associated_conditions.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Wire form used by the vector store: comma-joined strings.
    pub fn to_fields(&self) -> serde_json::Value {
        serde_json::json!({
            "relationships": self.relationships.join(", "),
            "associated_conditions": self.associated_conditions.join(", "),
        })
    }

    /// Parse the wire form back; absent or malformed fields become empty.
    pub fn from_fields(fields: &serde_json::Value) -> Self {
        Self {
            relationships: split_field(fields, "relationships"),
            associated_conditions: split_field(fields, "associated_conditions"),
        }
    }
}

fn split_field(fields: &serde_json::Value, key: &str) -> Vec<String> {
    match fields.get(key).and_then(|v| v.as_str()) {
        Some("") | None => Vec::new(),
        Some(joined) => joined.split(", ").map(str::to_string).collect(),
    }
}

/// Merge freshly selected `(relation, value)` pairs into a stored record.
///
/// Append-only: prior pairs are kept in order, new pairs whose value already
/// appears among the stored conditions are dropped (value-only dedup; the
/// relation side is not compared). An absent record is treated as empty, and
/// mismatched stored lengths are truncated to the shorter side rather than
/// surfaced as an error, so partial store responses never break data entry.
pub fn merge(existing: Option<&MetadataRecord>, new_pairs: &[(String, String)]) -> MetadataRecord {
    let empty = MetadataRecord::default();
    let existing = existing.unwrap_or(&empty);

    let mut relationships = Vec::new();
    let mut associated_conditions = Vec::new();
    for (relation, condition) in existing
        .relationships
        .iter()
        .zip(existing.associated_conditions.iter())
    {
        relationships.push(relation.clone());
        associated_conditions.push(condition.clone());
    }

    for (relation, condition) in new_pairs {
        if existing.associated_conditions.contains(condition) {
            continue;
        }
        relationships.push(relation.clone());
        associated_conditions.push(condition.clone());
    }

    MetadataRecord {
        relationships,
        associated_conditions,
    }
}

//! Association-based graph construction over nearest-neighbour matches.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::store::{metadata::MetadataRecord, Match};

const HIGHLIGHT_SIZE: u32 = 30;
const DEFAULT_SIZE: u32 = 10;

/// Node in the force-directed graph document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub size: u32,
    pub title: String,
}

/// Edge in the force-directed graph document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub title: String,
}

/// Serializable input for a force-directed renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDoc {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Build a graph from query matches.
///
/// Each match id becomes a highlighted node; each of its associated
/// conditions becomes a plain node. Edges run from a match id to each of its
/// relationship names, and between every pair of match ids sharing an
/// associated condition. Matches without metadata contribute only their own
/// node.
pub fn build(matches: &[Match]) -> GraphDoc {
    let mut nodes: IndexSet<String> = IndexSet::new();
    let mut highlighted: IndexSet<String> = IndexSet::new();
    let mut edges: Vec<GraphEdge> = Vec::new();
    let mut associated: IndexMap<String, Vec<String>> = IndexMap::new();

    for hit in matches {
        nodes.insert(hit.id.clone());
        highlighted.insert(hit.id.clone());

        let record = match &hit.metadata {
            Some(fields) => MetadataRecord::from_fields(fields),
            None => continue,
        };

        for condition in &record.associated_conditions {
            associated
                .entry(condition.clone())
                .or_default()
                .push(hit.id.clone());
            nodes.insert(condition.clone());
        }
        for relation in &record.relationships {
            edges.push(GraphEdge {
                source: hit.id.clone(),
                target: relation.clone(),
                title: relation.clone(),
            });
            nodes.insert(relation.clone());
        }
    }

    // Match ids sharing a condition attract each other in the layout.
    for related in associated.values() {
        for i in 0..related.len() {
            for j in (i + 1)..related.len() {
                edges.push(GraphEdge {
                    source: related[i].clone(),
                    target: related[j].clone(),
                    title: related[j].clone(),
                });
            }
        }
    }

    let nodes = nodes
        .into_iter()
        .map(|id| {
            let size = if highlighted.contains(&id) {
                HIGHLIGHT_SIZE
            } else {
                DEFAULT_SIZE
            };
            GraphNode {
                title: id.clone(),
                id,
                size,
            }
        })
        .collect();

    GraphDoc { nodes, edges }
}

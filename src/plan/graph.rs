use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Control-flow label on a task graph edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeLabel {
    Unconditional,
    True,
    False,
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeLabel::Unconditional => write!(f, "unconditional"),
            EdgeLabel::True => write!(f, "true"),
            EdgeLabel::False => write!(f, "false"),
        }
    }
}

/// Geographic point extracted from an action payload, for map rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// One atomic task declaration from a task plan.
///
/// Owned by the [`PlanGraph`] that produced it and never mutated after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tag found inside the task's `ActionType` element, e.g. `moveToLocation`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<String>,
    /// Coordinates for map rendering, when the action payload carries a location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<GeoPoint>,
    /// Full task subtree for downstream consumers that need the raw payload.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub raw: serde_json::Value,
}

/// A control-flow transition between two task declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MissionEdge {
    pub from: String,
    pub to: String,
    pub label: EdgeLabel,
}

/// The parsed task graph: a node table keyed by task identifier plus the
/// edge list in emission order.
///
/// Every edge endpoint is guaranteed to exist in `nodes`; the builder
/// rejects documents with dangling references before handing a graph out.
/// A repeated `TaskID` declaration replaces the earlier entry in `nodes`,
/// so a duplicate-heavy document still parses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanGraph {
    pub nodes: AHashMap<String, MissionNode>,
    pub edges: Vec<MissionEdge>,
}

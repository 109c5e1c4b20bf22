//! Task graph builder for the nested `Sequence`/`ConditionalActions` plan
//! dialect.
//!
//! Converts a `TaskTemplate` document into a [`PlanGraph`]: one node per
//! `AtomicTask` declaration and one labeled edge per control-flow
//! transition. The builder fails loudly: a missing root element or an edge
//! referencing an undeclared task is an error, never a silently broken
//! graph.

use crate::error::TaskGraphError;
use crate::plan::{EdgeLabel, GeoPoint, MissionNode, PlanGraph};
use crate::xml::{
    child_element, child_elements, child_text, element_to_value, parse_f64, strip_namespaces,
};
use ahash::AHashMap;
use roxmltree::{Document, Node};

mod walk;

use walk::walk_sequence;

/// Parses task plan XML into a [`PlanGraph`].
///
/// Namespace declarations are stripped before parsing so tag names match
/// without prefixes. Atomic tasks are indexed first, then every top-level
/// `Sequence` under `ActionSequence` is walked in document order, and
/// finally each edge's endpoints are checked against the node table.
///
/// # Errors
///
/// * [`TaskGraphError::XmlSyntax`] when the document does not parse at all.
/// * [`TaskGraphError::MissingTaskTemplate`] when the root element is not a
///   `TaskTemplate`.
/// * [`TaskGraphError::DanglingReference`] when a sequence references a task
///   identifier that no `AtomicTask` declares.
pub fn parse_task_graph(xml: &str) -> Result<PlanGraph, TaskGraphError> {
    let stripped = strip_namespaces(xml);
    let doc =
        Document::parse(&stripped).map_err(|e| TaskGraphError::XmlSyntax(e.to_string()))?;
    let root = doc.root_element();
    if root.tag_name().name() != "TaskTemplate" {
        return Err(TaskGraphError::MissingTaskTemplate);
    }

    let nodes = index_atomic_tasks(root);

    let mut edges = Vec::new();
    if let Some(action_sequence) = child_element(root, "ActionSequence") {
        for sequence in child_elements(action_sequence, "Sequence") {
            let (mut sequence_edges, _exits) =
                walk_sequence(sequence, EdgeLabel::Unconditional, &[]);
            edges.append(&mut sequence_edges);
        }
    }

    for edge in &edges {
        for id in [&edge.from, &edge.to] {
            if !nodes.contains_key(id.as_str()) {
                return Err(TaskGraphError::DanglingReference {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    missing_id: id.clone(),
                });
            }
        }
    }

    tracing::debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        "parsed task plan into graph"
    );

    Ok(PlanGraph { nodes, edges })
}

/// Indexes every `AtomicTask` declaration by its `TaskID`. A repeated
/// identifier overwrites the earlier entry; a task without a `TaskID` is
/// skipped.
fn index_atomic_tasks(template: Node) -> AHashMap<String, MissionNode> {
    let mut nodes = AHashMap::new();
    let Some(atomic_tasks) = child_element(template, "AtomicTasks") else {
        return nodes;
    };

    for task in child_elements(atomic_tasks, "AtomicTask") {
        let Some(id) = child_text(task, "TaskID").filter(|id| !id.is_empty()) else {
            continue;
        };
        let action = child_element(task, "Action");
        nodes.insert(
            id.to_string(),
            MissionNode {
                id: id.to_string(),
                description: child_text(task, "TaskDescription").map(str::to_string),
                action_type: action
                    .and_then(|a| child_text(a, "ActionType"))
                    .map(str::to_string),
                geometry: action.and_then(extract_location),
                raw: element_to_value(task),
            },
        );
    }

    nodes
}

/// Pulls latitude/longitude out of the action payloads that carry a
/// location. `moveToLocation` declares `Latitude`/`Longitude` children;
/// `goToPosition` uses `y`/`x`. Invalid or missing numerics leave the
/// geometry unset rather than failing the parse.
fn extract_location(action: Node) -> Option<GeoPoint> {
    if let Some(location) = child_element(action, "moveToLocation") {
        let lat = parse_f64(child_text(location, "Latitude"))?;
        let lon = parse_f64(child_text(location, "Longitude"))?;
        return Some(GeoPoint { lat, lon });
    }
    if let Some(position) = child_element(action, "goToPosition") {
        let lat = parse_f64(child_text(position, "y"))?;
        let lon = parse_f64(child_text(position, "x"))?;
        return Some(GeoPoint { lat, lon });
    }
    None
}

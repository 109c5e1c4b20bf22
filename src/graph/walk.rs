use crate::plan::{EdgeLabel, MissionEdge};
use crate::xml::child_text;
use itertools::Itertools;
use roxmltree::Node;

/// Walks one `Sequence` element in document order and returns the edges it
/// emits together with the sequence's exit frontier.
///
/// `frontier` holds the task identifiers that are "current" when the
/// sequence starts; every emitted edge attaches the next task to each of
/// them. `entry_label` is applied only when the sequence's first item is a
/// direct `TaskID` reference; this is how a conditional branch labels the
/// edge into its first task. Every later task reference gets an
/// unconditional edge.
///
/// A sequence with no task references returns its input frontier unchanged,
/// so a step following an empty conditional block still attaches to the
/// pre-conditional frontier.
pub(super) fn walk_sequence(
    sequence: Node,
    entry_label: EdgeLabel,
    frontier: &[String],
) -> (Vec<MissionEdge>, Vec<String>) {
    let mut edges = Vec::new();
    let mut current: Vec<String> = frontier.to_vec();
    let mut at_entry = true;

    for item in sequence.children().filter(Node::is_element) {
        match item.tag_name().name() {
            "TaskID" => {
                let id = item.text().map(str::trim).unwrap_or_default().to_string();
                let label = if at_entry {
                    entry_label
                } else {
                    EdgeLabel::Unconditional
                };
                for from in &current {
                    edges.push(MissionEdge {
                        from: from.clone(),
                        to: id.clone(),
                        label,
                    });
                }
                current = vec![id];
                at_entry = false;
            }
            "ConditionalActions" => {
                let (mut block_edges, exits) = walk_conditional(item, &current);
                edges.append(&mut block_edges);
                if !exits.is_empty() {
                    current = exits;
                }
                at_entry = false;
            }
            _ => {}
        }
    }

    (edges, current)
}

/// Walks a `ConditionalActions` block: each `Conditional` branch descriptor
/// pairs positionally with a `Sequence` sibling, and every branch sequence
/// is walked against the same entry frontier. The returned exits are the
/// order-preserving union of all branch exits (join semantics: a successor
/// after the block is reachable from any branch's end).
fn walk_conditional(block: Node, frontier: &[String]) -> (Vec<MissionEdge>, Vec<String>) {
    let branches: Vec<Node> = block
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Conditional")
        .collect();
    let bodies: Vec<Node> = block
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Sequence")
        .collect();

    let mut edges = Vec::new();
    let mut exits: Vec<String> = Vec::new();

    for (branch, body) in branches.iter().zip(&bodies) {
        let label = branch_label(*branch);
        let (mut branch_edges, branch_exits) = walk_sequence(*body, label, frontier);
        edges.append(&mut branch_edges);
        exits.extend(branch_exits);
    }

    (edges, exits.into_iter().unique().collect())
}

/// Reads a branch's declared return status. The schema the generator is
/// prompted with does not declare `ReturnStatus`, so in practice this often
/// falls through to `Unconditional` and true/false styling is lost; the
/// fallback is kept as observed rather than guessed around.
fn branch_label(branch: Node) -> EdgeLabel {
    match child_text(branch, "ReturnStatus") {
        Some("true") => EdgeLabel::True,
        Some("false") => EdgeLabel::False,
        _ => EdgeLabel::Unconditional,
    }
}

//! Mission geometry projector for the flat behavior-tree plan dialect.
//!
//! Walks the whitelisted actions of every `BehaviorTree` in document order,
//! dead-reckoning a position and heading across them, and emits the ordered
//! steps plus a rendering-ready feature collection. This side of the crate
//! fails soft: a momentarily bad or in-progress model response must never
//! crash a live map view, so unparseable input yields an empty geometry,
//! and "empty result" means "nothing to draw yet", not an error.

use crate::plan::{Coordinate, PlanGeometry, PlanStep, StepKind};
use crate::xml::attr_f64;
use roxmltree::{Document, Node};

mod features;
pub mod track;

use features::build_features;
use track::Track;

/// Action tags the projector recognizes. Traversal stops descending as soon
/// as one of these is found; whitelisted actions are leaves.
pub const ACTION_TAGS: [&str; 6] = [
    "MoveToTreeID",
    "MoveToGPSLocation",
    "MoveToRelativeLocation",
    "OrientRobotHeading",
    "DetectObject",
    "SampleLeaf",
];

fn is_action_tag(tag: &str) -> bool {
    ACTION_TAGS.contains(&tag)
}

/// Projects behavior-tree plan XML into a [`PlanGeometry`], dead-reckoning
/// from `origin` (`[longitude, latitude]`).
///
/// Empty or whitespace-only XML, unparseable XML, and documents without a
/// `BehaviorTree` all return an empty geometry. Actions with missing or
/// non-numeric attributes are recorded as plain task steps with no effect
/// on position or heading; partial plans are more useful than no plan.
pub fn build_plan_geometry(xml: &str, origin: Coordinate) -> PlanGeometry {
    if xml.trim().is_empty() {
        return PlanGeometry::default();
    }

    let doc = match Document::parse(xml) {
        Ok(doc) => doc,
        Err(err) => {
            tracing::warn!(%err, "failed to parse mission plan XML");
            return PlanGeometry::default();
        }
    };

    let trees: Vec<Node> = doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "BehaviorTree")
        .collect();
    if trees.is_empty() {
        return PlanGeometry::default();
    }

    let mut actions = Vec::new();
    for tree in &trees {
        for child in tree.children().filter(Node::is_element) {
            collect_actions(child, &mut actions);
        }
    }

    let steps = build_steps(&actions, origin);
    let (coordinates, feature_collection) = build_features(&steps);

    PlanGeometry {
        steps,
        coordinates,
        feature_collection,
    }
}

/// Depth-first collection of whitelisted action elements in document order.
/// Descent stops at the first whitelisted tag on each path.
fn collect_actions<'a, 'input>(node: Node<'a, 'input>, actions: &mut Vec<Node<'a, 'input>>) {
    if is_action_tag(node.tag_name().name()) {
        actions.push(node);
        return;
    }
    for child in node.children().filter(Node::is_element) {
        collect_actions(child, actions);
    }
}

/// Folds the ordered action list into steps, threading the dead-reckoning
/// track through each transition. The synthetic start step comes first.
fn build_steps(actions: &[Node], origin: Coordinate) -> Vec<PlanStep> {
    let mut track = Track::new(origin);
    let mut steps = vec![PlanStep {
        coordinate: Some(track.position),
        name: "Start".to_string(),
        action: "Start".to_string(),
        kind: StepKind::Start,
        draw_segment: false,
        details: None,
    }];

    for node in actions {
        let tag = node.tag_name().name();
        let mut step = PlanStep {
            coordinate: Some(track.position),
            name: node.attribute("name").unwrap_or(tag).to_string(),
            action: tag.to_string(),
            kind: StepKind::Task,
            draw_segment: false,
            details: None,
        };

        match tag {
            "MoveToRelativeLocation" => {
                if let (Some(forward), Some(left)) = (attr_f64(*node, "x"), attr_f64(*node, "y")) {
                    track = track.advanced(forward, left);
                    step.coordinate = Some(track.position);
                    step.kind = StepKind::RelativeMove;
                    step.draw_segment = true;
                    step.details = Some(format!(
                        "Relative move: forward {forward:.1}m, left {left:.1}m"
                    ));
                }
            }
            "MoveToGPSLocation" => {
                if let (Some(lat), Some(lon)) = (
                    attr_f64(*node, "latitude"),
                    attr_f64(*node, "longitude"),
                ) {
                    track = track.moved_to([lon, lat]);
                    step.coordinate = Some(track.position);
                    step.kind = StepKind::GpsMove;
                    step.draw_segment = true;
                    step.details =
                        Some(format!("Move to GPS location ({lat:.6}, {lon:.6})"));
                }
            }
            "OrientRobotHeading" => {
                if let Some(yaw) = attr_f64(*node, "yaw") {
                    let absolute = node.attribute("absolute") == Some("true");
                    track = track.oriented(yaw, absolute);
                    step.kind = StepKind::Orientation;
                    step.details = Some(format!(
                        "{} heading set to {:.1}°",
                        if absolute { "Absolute" } else { "Relative" },
                        track.heading
                    ));
                }
            }
            _ => {}
        }

        steps.push(step);
    }

    steps
}

use super::graph::PlanGraph;
use super::step::{Coordinate, PlanGeometry};
use crate::error::TaskGraphError;
use crate::xml::strip_namespaces;
use roxmltree::Document;

/// The two mission plan dialects the crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Nested `Sequence`/`ConditionalActions` task plan under a
    /// `TaskTemplate` root.
    TaskTemplate,
    /// Flat behavior-tree action timeline containing one or more
    /// `BehaviorTree` elements.
    BehaviorTree,
}

/// Sniffs which dialect a document is written in without committing to
/// either pipeline. Returns `None` for unparseable or unrecognized XML.
pub fn detect_dialect(xml: &str) -> Option<Dialect> {
    let stripped = strip_namespaces(xml);
    let doc = Document::parse(&stripped).ok()?;
    if doc.root_element().tag_name().name() == "TaskTemplate" {
        return Some(Dialect::TaskTemplate);
    }
    let has_tree = doc
        .descendants()
        .any(|n| n.is_element() && n.tag_name().name() == "BehaviorTree");
    has_tree.then_some(Dialect::BehaviorTree)
}

/// A parsed mission plan, whichever dialect it arrived in.
///
/// The two dialects have different structural assumptions (a tree with
/// branches versus a flat sequential timeline) and deliberately keep their
/// own result shapes; this enum is the seam for callers that receive
/// model output without knowing the dialect up front.
#[derive(Debug, Clone)]
pub enum MissionPlan {
    Graph(PlanGraph),
    Geometry(PlanGeometry),
}

impl MissionPlan {
    /// Parses either dialect, dispatching on the detected document shape.
    /// Documents that match neither dialect fall through to the projector's
    /// fail-soft path and come back as an empty geometry.
    ///
    /// # Errors
    ///
    /// Only the task graph dialect fails loudly; see
    /// [`parse_task_graph`](crate::graph::parse_task_graph).
    pub fn parse(xml: &str, origin: Coordinate) -> Result<Self, TaskGraphError> {
        match detect_dialect(xml) {
            Some(Dialect::TaskTemplate) => {
                crate::graph::parse_task_graph(xml).map(MissionPlan::Graph)
            }
            _ => Ok(MissionPlan::Geometry(crate::project::build_plan_geometry(
                xml, origin,
            ))),
        }
    }
}

use super::features::FeatureCollection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `[longitude, latitude]` pair, the coordinate order used by GeoJSON.
pub type Coordinate = [f64; 2];

/// What kind of plan step a behavior-tree action produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Start,
    RelativeMove,
    GpsMove,
    Orientation,
    Task,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Start => write!(f, "start"),
            StepKind::RelativeMove => write!(f, "relative-move"),
            StepKind::GpsMove => write!(f, "gps-move"),
            StepKind::Orientation => write!(f, "orientation"),
            StepKind::Task => write!(f, "task"),
        }
    }
}

/// One step of a projected mission, in document order.
///
/// A step's coordinate reflects the cumulative effect of every step before
/// it; position and heading are threaded state, not per-step values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanStep {
    pub coordinate: Option<Coordinate>,
    pub name: String,
    pub action: String,
    #[serde(rename = "type")]
    pub kind: StepKind,
    /// Whether a connecting line segment should be drawn back to the
    /// previous step.
    pub draw_segment: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// The projected mission geometry: ordered steps, their coordinates, and a
/// rendering-ready feature collection.
///
/// Recomputed from scratch whenever the source XML or origin changes;
/// stateless and disposable between calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanGeometry {
    pub steps: Vec<PlanStep>,
    pub coordinates: Vec<Coordinate>,
    pub feature_collection: FeatureCollection,
}

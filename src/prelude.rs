//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so consumers can
//! pull in the core surface with a single `use keiro::prelude::*;`.

// Parsing entry points
pub use crate::graph::parse_task_graph;
pub use crate::project::build_plan_geometry;

// Dialect dispatch
pub use crate::plan::{Dialect, MissionPlan, detect_dialect};

// Task graph model
pub use crate::plan::{EdgeLabel, GeoPoint, MissionEdge, MissionNode, PlanGraph};

// Geometry model
pub use crate::plan::{
    Coordinate, Feature, FeatureCollection, FeatureGeometry, PlanGeometry, PlanStep, StepKind,
};

// Dead reckoning
pub use crate::project::track::{Track, almost_equal, normalize_degrees};

// Shared XML ingestion
pub use crate::xml::strip_namespaces;

// Error types
pub use crate::error::TaskGraphError;

//! # Keiro - Mission Plan Parsing and Geometry Projection Engine
//!
//! **Keiro** turns model-generated robot mission plans (XML documents in one
//! of two dialects) back into structures a map can draw and a human can
//! verify. It sits on the contract boundary between an unreliable generator
//! (a language model) and safety-relevant consumers (path rendering, and
//! potentially a physical robot): every parse either produces a well-formed
//! result or a clearly diagnosed failure.
//!
//! ## Core Workflow
//!
//! Two independent pipelines share the XML-to-structure problem but operate
//! on different dialects:
//!
//! 1.  **Task Graph Builder** ([`graph::parse_task_graph`]): parses a nested
//!     `Sequence`/`ConditionalActions` task plan into a [`plan::PlanGraph`],
//!     a node table plus labeled control-flow edges, and verifies
//!     referential integrity. Structural problems fail loudly with a
//!     [`error::TaskGraphError`].
//! 2.  **Mission Geometry Projector** ([`project::build_plan_geometry`]):
//!     walks a flat behavior-tree action list in document order, dead
//!     reckoning a position and heading across the steps, and emits a
//!     [`plan::PlanGeometry`] with a rendering-ready GeoJSON feature
//!     collection. Bad input degrades to an empty geometry instead of
//!     failing, so an in-progress model response never crashes a live map.
//!
//! Callers that receive XML without knowing the dialect can dispatch through
//! [`plan::MissionPlan::parse`], which sniffs the document shape first.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! fn main() -> Result<(), TaskGraphError> {
//!     let task_plan = r#"
//!         <TaskTemplate>
//!           <AtomicTasks>
//!             <AtomicTask>
//!               <TaskID>scan_row</TaskID>
//!               <TaskDescription>Scan the first tree row</TaskDescription>
//!               <Action>
//!                 <ActionType>takeThermalPicture</ActionType>
//!               </Action>
//!             </AtomicTask>
//!           </AtomicTasks>
//!           <ActionSequence>
//!             <Sequence><TaskID>scan_row</TaskID></Sequence>
//!           </ActionSequence>
//!         </TaskTemplate>
//!     "#;
//!
//!     // Dialect A: a graph of tasks with labeled control-flow edges.
//!     let graph = parse_task_graph(task_plan)?;
//!     for edge in &graph.edges {
//!         println!("{} -> {} [{}]", edge.from, edge.to, edge.label);
//!     }
//!
//!     // Dialect B: dead-reckoned geometry from a behavior tree.
//!     let mission = r#"
//!         <BehaviorTree>
//!           <Sequence>
//!             <MoveToRelativeLocation name="into the row" x="10" y="0"/>
//!             <DetectObject name="find trunk"/>
//!           </Sequence>
//!         </BehaviorTree>
//!     "#;
//!     let geometry = build_plan_geometry(mission, [-120.4202, 37.2664]);
//!     println!("{} plan coordinates", geometry.coordinates.len());
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod graph;
pub mod plan;
pub mod prelude;
pub mod project;
pub mod xml;

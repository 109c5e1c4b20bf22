use thiserror::Error;

/// Errors that can occur while building a task graph from plan XML.
///
/// The graph builder fails loudly: a graph with structural problems must
/// never reach a renderer, because edges pointing at undeclared tasks would
/// corrupt downstream assumptions. The geometry projector has no error type
/// at all; it degrades to an empty [`PlanGeometry`](crate::plan::PlanGeometry)
/// instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskGraphError {
    #[error("Failed to parse task plan XML: {0}")]
    XmlSyntax(String),

    #[error("Malformed task plan: TaskTemplate root element not found")]
    MissingTaskTemplate,

    #[error(
        "Edge '{from}' -> '{to}' references task '{missing_id}', which is not declared in AtomicTasks"
    )]
    DanglingReference {
        from: String,
        to: String,
        missing_id: String,
    },
}

//! Common test utilities for building mission plan XML fixtures.

/// Builds a `TaskTemplate` document whose `ActionSequence` is a single flat
/// list of the given task identifiers, each declared as an atomic task.
#[allow(dead_code)]
pub fn flat_task_plan(ids: &[&str]) -> String {
    let tasks: String = ids
        .iter()
        .map(|id| atomic_task(id, &format!("Task {id}"), "takeThermalPicture", ""))
        .collect();
    let refs: String = ids
        .iter()
        .map(|id| format!("<TaskID>{id}</TaskID>"))
        .collect();
    format!(
        "<TaskTemplate>\
           <AtomicTasks>{tasks}</AtomicTasks>\
           <ActionSequence><Sequence>{refs}</Sequence></ActionSequence>\
         </TaskTemplate>"
    )
}

/// Builds one `AtomicTask` declaration. `payload` is placed inside the
/// `Action` element after the `ActionType`.
#[allow(dead_code)]
pub fn atomic_task(id: &str, description: &str, action_type: &str, payload: &str) -> String {
    format!(
        "<AtomicTask>\
           <TaskID>{id}</TaskID>\
           <TaskDescription>{description}</TaskDescription>\
           <Action><ActionType>{action_type}</ActionType>{payload}</Action>\
         </AtomicTask>"
    )
}

/// The two-branch conditional scenario: one task, a conditional block with
/// a true branch and a false branch (one task each), then a join task.
#[allow(dead_code)]
pub fn conditional_task_plan() -> String {
    let tasks: String = ["check", "spray", "skip", "report"]
        .iter()
        .map(|id| atomic_task(id, &format!("Task {id}"), "takeCO2Reading", ""))
        .collect();
    format!(
        "<TaskTemplate>\
           <AtomicTasks>{tasks}</AtomicTasks>\
           <ActionSequence>\
             <Sequence>\
               <TaskID>check</TaskID>\
               <ConditionalActions>\
                 <Conditional><Comparator>gt</Comparator><ReturnStatus>true</ReturnStatus></Conditional>\
                 <Conditional><Comparator>lte</Comparator><ReturnStatus>false</ReturnStatus></Conditional>\
                 <Sequence><TaskID>spray</TaskID></Sequence>\
                 <Sequence><TaskID>skip</TaskID></Sequence>\
               </ConditionalActions>\
               <TaskID>report</TaskID>\
             </Sequence>\
           </ActionSequence>\
         </TaskTemplate>"
    )
}

/// Wraps behavior-tree body XML in a `BehaviorTree` root.
#[allow(dead_code)]
pub fn behavior_tree(body: &str) -> String {
    format!("<root><BehaviorTree ID=\"MainTree\"><Sequence>{body}</Sequence></BehaviorTree></root>")
}

/// The test origin used throughout: a Central Valley orchard corner.
#[allow(dead_code)]
pub const ORIGIN: [f64; 2] = [-120.4202, 37.2664];

/// Asserts two floats are within `tolerance` of each other.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}

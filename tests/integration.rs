//! End-to-end tests: realistic model-generated documents through dialect
//! detection and both pipelines.
mod common;
use common::*;
use keiro::prelude::*;

/// A survey plan the way the generator actually emits it: namespaced root,
/// location payloads, and a battery conditional.
fn survey_plan() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<TaskTemplate xmlns="https://robotics.ucmerced.edu/task">
  <CompositeTaskInformation>
    <TaskID>survey</TaskID>
    <TaskDescription>Survey the north rows</TaskDescription>
  </CompositeTaskInformation>
  <AtomicTasks>
    <AtomicTask>
      <TaskID>go_row_1</TaskID>
      <TaskDescription>Move to the first row</TaskDescription>
      <Action>
        <ActionType>moveToLocation</ActionType>
        <moveToLocation>
          <Latitude>37.2664</Latitude>
          <Longitude>-120.4202</Longitude>
        </moveToLocation>
      </Action>
    </AtomicTask>
    <AtomicTask>
      <TaskID>thermal</TaskID>
      <TaskDescription>Take a thermal picture</TaskDescription>
      <Action>
        <ActionType>takeThermalPicture</ActionType>
        <takeThermalPicture><numberOfPictures>3</numberOfPictures></takeThermalPicture>
      </Action>
    </AtomicTask>
    <AtomicTask>
      <TaskID>co2</TaskID>
      <TaskDescription>Take a CO2 reading</TaskDescription>
      <Action>
        <ActionType>takeCO2Reading</ActionType>
        <takeCO2Reading><numberOfSamples>5</numberOfSamples></takeCO2Reading>
      </Action>
    </AtomicTask>
    <AtomicTask>
      <TaskID>go_home</TaskID>
      <TaskDescription>Return to the charger</TaskDescription>
      <Action>
        <ActionType>moveToLocation</ActionType>
        <moveToLocation>
          <Latitude>37.2650</Latitude>
          <Longitude>-120.4210</Longitude>
        </moveToLocation>
      </Action>
    </AtomicTask>
  </AtomicTasks>
  <ActionSequence>
    <Sequence>
      <TaskID>go_row_1</TaskID>
      <ConditionalActions>
        <Conditional>
          <Comparator>gt</Comparator>
          <HardValue>30.0</HardValue>
          <ReturnStatus>true</ReturnStatus>
        </Conditional>
        <Conditional>
          <Comparator>lte</Comparator>
          <HardValue>30.0</HardValue>
          <ReturnStatus>false</ReturnStatus>
        </Conditional>
        <Sequence><TaskID>thermal</TaskID></Sequence>
        <Sequence><TaskID>co2</TaskID></Sequence>
      </ConditionalActions>
      <TaskID>go_home</TaskID>
    </Sequence>
  </ActionSequence>
</TaskTemplate>"#
        .to_string()
}

fn orchard_mission() -> String {
    r#"<root BTCPP_format="4">
  <BehaviorTree ID="MainTree">
    <Sequence>
      <OrientRobotHeading name="face east" yaw="90" absolute="true"/>
      <MoveToRelativeLocation name="enter row" x="20" y="0"/>
      <DetectObject name="find trunk"/>
      <SampleLeaf name="sample"/>
      <MoveToGPSLocation name="charger" latitude="37.2650" longitude="-120.4210"/>
    </Sequence>
  </BehaviorTree>
</root>"#
        .to_string()
}

#[test]
fn test_survey_plan_end_to_end() {
    let graph = parse_task_graph(&survey_plan()).expect("survey plan should parse");

    assert_eq!(graph.nodes.len(), 4);
    let go_row = graph.nodes.get("go_row_1").expect("go_row_1 declared");
    assert_eq!(go_row.action_type.as_deref(), Some("moveToLocation"));
    let geometry = go_row.geometry.expect("location payload sets geometry");
    assert_close(geometry.lat, 37.2664, 1e-12);
    assert_close(geometry.lon, -120.4202, 1e-12);
    let thermal = graph.nodes.get("thermal").expect("thermal declared");
    assert!(thermal.geometry.is_none());
    assert_eq!(
        thermal.raw["Action"]["takeThermalPicture"]["numberOfPictures"],
        "3"
    );

    assert_eq!(graph.edges.len(), 4);
    assert!(graph.edges.contains(&MissionEdge {
        from: "go_row_1".to_string(),
        to: "thermal".to_string(),
        label: EdgeLabel::True,
    }));
    assert!(graph.edges.contains(&MissionEdge {
        from: "go_row_1".to_string(),
        to: "co2".to_string(),
        label: EdgeLabel::False,
    }));
    assert!(graph.edges.contains(&MissionEdge {
        from: "thermal".to_string(),
        to: "go_home".to_string(),
        label: EdgeLabel::Unconditional,
    }));
    assert!(graph.edges.contains(&MissionEdge {
        from: "co2".to_string(),
        to: "go_home".to_string(),
        label: EdgeLabel::Unconditional,
    }));
}

#[test]
fn test_orchard_mission_end_to_end() {
    let geometry = build_plan_geometry(&orchard_mission(), ORIGIN);

    // Start + five actions.
    assert_eq!(geometry.steps.len(), 6);
    assert_eq!(geometry.steps[1].kind, StepKind::Orientation);
    assert_eq!(geometry.steps[2].kind, StepKind::RelativeMove);
    assert_eq!(geometry.steps[3].kind, StepKind::Task);
    assert_eq!(geometry.steps[4].kind, StepKind::Task);
    assert_eq!(geometry.steps[5].kind, StepKind::GpsMove);

    // Facing east, the 20 m move is pure longitude.
    let after_move = geometry.steps[2].coordinate.expect("coordinate");
    assert!(after_move[0] > ORIGIN[0]);
    assert_close(after_move[1], ORIGIN[1], 1e-9);

    // The two task steps sit exactly where the move ended.
    assert_eq!(geometry.steps[3].coordinate, Some(after_move));
    assert_eq!(geometry.steps[4].coordinate, Some(after_move));

    let end = geometry.steps[5].coordinate.expect("coordinate");
    assert_eq!(end, [-120.4210, 37.2650]);

    // Path + two segments + six points.
    assert_eq!(geometry.feature_collection.features.len(), 9);
    assert_eq!(
        geometry.feature_collection.features[0].properties["label"],
        "Path"
    );
}

#[test]
fn test_detect_dialect_classifies_both() {
    assert_eq!(
        detect_dialect(&survey_plan()),
        Some(Dialect::TaskTemplate)
    );
    assert_eq!(
        detect_dialect(&orchard_mission()),
        Some(Dialect::BehaviorTree)
    );
    assert_eq!(detect_dialect("<Other/>"), None);
    assert_eq!(detect_dialect("not xml at all"), None);
}

#[test]
fn test_mission_plan_dispatches_on_dialect() {
    match MissionPlan::parse(&survey_plan(), ORIGIN).expect("survey plan parses") {
        MissionPlan::Graph(graph) => assert_eq!(graph.nodes.len(), 4),
        MissionPlan::Geometry(_) => panic!("survey plan should become a graph"),
    }

    match MissionPlan::parse(&orchard_mission(), ORIGIN).expect("mission parses") {
        MissionPlan::Geometry(geometry) => assert_eq!(geometry.steps.len(), 6),
        MissionPlan::Graph(_) => panic!("behavior tree should become a geometry"),
    }

    // Unrecognized documents fall through to the projector's soft path.
    match MissionPlan::parse("<Other/>", ORIGIN).expect("unknown dialect never errors") {
        MissionPlan::Geometry(geometry) => assert!(geometry.steps.is_empty()),
        MissionPlan::Graph(_) => panic!("unknown dialect should not become a graph"),
    }
}

#[test]
fn test_dangling_reference_in_generated_plan_is_rejected() {
    let xml = survey_plan().replace(
        "<TaskID>go_home</TaskID>\n    </Sequence>",
        "<TaskID>go_charge</TaskID>\n    </Sequence>",
    );
    let err = parse_task_graph(&xml).expect_err("dangling reference must fail");
    assert!(matches!(
        err,
        TaskGraphError::DanglingReference { missing_id, .. } if missing_id == "go_charge"
    ));
}

use super::track::almost_equal;
use crate::plan::{Coordinate, Feature, FeatureCollection, FeatureGeometry, PlanStep};
use serde_json::{Map, Value, json};

/// Builds the coordinate list and feature collection from the ordered
/// steps: one point feature per step, one line feature per consecutive pair
/// that actually moved, and an aggregate path feature spanning the whole
/// route when there is more than one distinct coordinate.
///
/// The aggregate path is always the first feature, followed by segment
/// lines and then points; that list order is part of the contract with
/// rendering consumers.
pub(super) fn build_features(steps: &[PlanStep]) -> (Vec<Coordinate>, FeatureCollection) {
    let mut points = Vec::new();
    let mut lines = Vec::new();
    let mut coordinates = Vec::new();

    let mut segment_origin = steps.first().and_then(|s| s.coordinate);

    for (index, step) in steps.iter().enumerate() {
        let Some(coordinate) = step.coordinate else {
            continue;
        };
        coordinates.push(coordinate);

        let mut properties = Map::new();
        properties.insert("index".to_string(), json!(index + 1));
        properties.insert(
            "label".to_string(),
            json!(format!("{}. {}", index + 1, step.name)),
        );
        properties.insert("action".to_string(), json!(step.action));
        properties.insert("type".to_string(), json!(step.kind.to_string()));
        if let Some(details) = &step.details {
            properties.insert("details".to_string(), json!(details));
        }
        points.push(Feature::new(
            properties,
            FeatureGeometry::Point {
                coordinates: coordinate,
            },
        ));

        if let Some(origin) = segment_origin
            && step.draw_segment
            && !almost_equal(origin, coordinate)
        {
            let mut properties = Map::new();
            properties.insert("fromStep".to_string(), json!(index));
            properties.insert("toStep".to_string(), json!(index + 1));
            properties.insert("label".to_string(), json!(step.name));
            properties.insert("type".to_string(), json!(step.kind.to_string()));
            lines.push(Feature::new(
                properties,
                FeatureGeometry::LineString {
                    coordinates: vec![origin, coordinate],
                },
            ));
        }

        segment_origin = Some(coordinate);
    }

    if has_distinct_coordinates(&coordinates) {
        let mut properties = Map::new();
        properties.insert("label".to_string(), Value::String("Path".to_string()));
        properties.insert("type".to_string(), Value::String("path".to_string()));
        lines.insert(
            0,
            Feature::new(
                properties,
                FeatureGeometry::LineString {
                    coordinates: coordinates.clone(),
                },
            ),
        );
    }

    let features = lines.into_iter().chain(points).collect();
    (coordinates, FeatureCollection::new(features))
}

/// The aggregate path is only worth drawing when the route visits at least
/// two distinct points; a plan that never leaves the origin stays path-free.
fn has_distinct_coordinates(coordinates: &[Coordinate]) -> bool {
    coordinates
        .split_first()
        .is_some_and(|(first, rest)| rest.iter().any(|c| !almost_equal(*first, *c)))
}

use super::step::Coordinate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Point or line geometry attached to a [`Feature`], serialized with the
/// GeoJSON `type` tag and `[longitude, latitude]` coordinate order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FeatureGeometry {
    Point { coordinates: Coordinate },
    LineString { coordinates: Vec<Coordinate> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureTag {
    Feature,
}

/// A single geographic feature: a geometry plus a property bag consumed by
/// map styling layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    tag: FeatureTag,
    pub properties: Map<String, Value>,
    pub geometry: FeatureGeometry,
}

impl Feature {
    pub fn new(properties: Map<String, Value>, geometry: FeatureGeometry) -> Self {
        Self {
            tag: FeatureTag::Feature,
            properties,
            geometry,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum FeatureCollectionTag {
    FeatureCollection,
}

/// A GeoJSON feature collection, consumed directly by map-rendering layers.
///
/// When the collection describes a projected mission, the aggregate path
/// feature (if present) is always the first entry, followed by per-segment
/// lines and then per-step points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    tag: FeatureCollectionTag,
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self {
        Self {
            tag: FeatureCollectionTag::FeatureCollection,
            features,
        }
    }

    /// An empty collection, the "nothing to draw yet" value.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::empty()
    }
}

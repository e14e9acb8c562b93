//! GeoJSON object model
//!
//! This module provides the closed set of node types the visitor
//! walks: the six simple geometries, geometry collections, features
//! and feature collections.

pub mod errors;
pub mod types;
#[cfg(test)]
mod tests;

pub use errors::{VisitError, VisitResult};
pub use types::{
    Feature, FeatureCollection, GeoJson, Geometry, GeometryCollection, GeometryType, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Position,
};

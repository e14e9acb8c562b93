//! GeoJSON tree traversal with in-place mutation
//!
//! Register per-type callbacks, walk an in-memory GeoJSON tree, and let
//! each callback keep, replace, or delete the node it sees, or abort
//! the walk entirely.

pub mod fixtures;
pub mod geojson;
pub mod visitor;

pub use crate::geojson::{
    Feature, FeatureCollection, GeoJson, Geometry, GeometryCollection, GeometryType, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Position, VisitError, VisitResult,
};
pub use crate::visitor::{
    each, each_coordinate, each_feature, each_geometry, each_geometry_collection,
    each_line_string, each_multi_line_string, each_multi_point, each_multi_polygon, each_point,
    each_polygon, visit, Callbacks, Flow, Outcome, Visit,
};

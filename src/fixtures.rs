//! Deterministic test-data builders
//!
//! Factory functions producing valid GeoJSON fixtures. Coordinates are
//! derived from a seed with a single linear-congruential step, so the
//! same seed always builds the same tree and test assertions stay
//! stable across runs.

use crate::geojson::{
    Feature, FeatureCollection, Geometry, GeometryCollection, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, Position,
};

// Knuth's MMIX constants
const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

/// Builds a vector of the given length by calling `f` with each index
pub fn array_of<T, F>(length: usize, mut f: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..length).map(|i| f(i)).collect()
}

/// Derives a longitude/latitude pair from a seed
///
/// Longitude lands in [-180, 180] and latitude in [-90, 90].
pub fn coordinate(seed: u64) -> Position {
    let state = seed.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT);
    let lon = (state >> 33) % 361;
    let lat = (state >> 13) % 181;
    Position::new(lon as f64 - 180.0, lat as f64 - 90.0)
}

/// Builds a point
pub fn point(seed: u64) -> Point {
    Point::new(coordinate(seed))
}

/// Builds a multi-point with `length` positions
pub fn multi_point(seed: u64, length: usize) -> MultiPoint {
    MultiPoint::new(array_of(length, |i| coordinate(seed + i as u64)))
}

/// Builds a line string with `length` vertices
pub fn line_string(seed: u64, length: usize) -> LineString {
    LineString::new(array_of(length, |i| coordinate(seed + i as u64)))
}

/// Builds a multi-line-string with `length` lines of `length` vertices
pub fn multi_line_string(seed: u64, length: usize) -> MultiLineString {
    MultiLineString::new(array_of(length, |i| {
        array_of(length, |j| coordinate(seed + (i * length + j) as u64))
    }))
}

/// Builds a polygon with `length` rings of `length` positions
pub fn polygon(seed: u64, length: usize) -> Polygon {
    Polygon::new(array_of(length, |i| {
        array_of(length, |j| coordinate(seed + (i * length + j) as u64))
    }))
}

/// Builds a multi-polygon with `length` polygons of `length` rings of
/// `length` positions
pub fn multi_polygon(seed: u64, length: usize) -> MultiPolygon {
    MultiPolygon::new(array_of(length, |i| {
        array_of(length, |j| {
            array_of(length, |k| {
                coordinate(seed + ((i * length + j) * length + k) as u64)
            })
        })
    }))
}

/// Wraps geometries in a collection
pub fn geometry_collection(geometries: Vec<Geometry>) -> GeometryCollection {
    GeometryCollection::new(geometries)
}

/// Wraps a geometry in a feature with empty properties
pub fn feature(geometry: Geometry) -> Feature {
    Feature::new(geometry)
}

/// Wraps features in a collection
pub fn feature_collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection::new(features)
}

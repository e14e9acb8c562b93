//! Single-hook convenience wrappers
//!
//! Each wrapper pre-binds one callback for one node type and returns a
//! reusable visitor function. The sugar is observation-only: the
//! wrapped callback sees the node through a shared reference and its
//! return value is discarded, so no mutation, deletion or abort
//! capability leaks through.

use crate::geojson::{
    Feature, GeoJson, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Position, VisitResult,
};
use crate::visitor::callbacks::{Callbacks, Flow, Outcome, Visit};
use crate::visitor::engine::visit;

/// Builds a reusable visitor from an arbitrary callback registry
pub fn each<'a>(mut callbacks: Callbacks<'a>) -> impl FnMut(&mut GeoJson) -> VisitResult<Visit> + 'a {
    move |data| visit(data, &mut callbacks)
}

/// Builds a visitor that calls `callback` for every Point in a tree
pub fn each_point<'a, F>(mut callback: F) -> impl FnMut(&mut GeoJson) -> VisitResult<Visit> + 'a
where
    F: FnMut(&Point) + 'a,
{
    each(Callbacks::new().on_point(move |point| {
        callback(point);
        Outcome::Keep
    }))
}

/// Builds a visitor that calls `callback` for every LineString in a tree
pub fn each_line_string<'a, F>(
    mut callback: F,
) -> impl FnMut(&mut GeoJson) -> VisitResult<Visit> + 'a
where
    F: FnMut(&LineString) + 'a,
{
    each(Callbacks::new().on_line_string(move |line_string| {
        callback(line_string);
        Outcome::Keep
    }))
}

/// Builds a visitor that calls `callback` for every Polygon in a tree
pub fn each_polygon<'a, F>(mut callback: F) -> impl FnMut(&mut GeoJson) -> VisitResult<Visit> + 'a
where
    F: FnMut(&Polygon) + 'a,
{
    each(Callbacks::new().on_polygon(move |polygon| {
        callback(polygon);
        Outcome::Keep
    }))
}

/// Builds a visitor that calls `callback` for every MultiPoint in a tree
pub fn each_multi_point<'a, F>(
    mut callback: F,
) -> impl FnMut(&mut GeoJson) -> VisitResult<Visit> + 'a
where
    F: FnMut(&MultiPoint) + 'a,
{
    each(Callbacks::new().on_multi_point(move |multi_point| {
        callback(multi_point);
        Outcome::Keep
    }))
}

/// Builds a visitor that calls `callback` for every MultiLineString in a tree
pub fn each_multi_line_string<'a, F>(
    mut callback: F,
) -> impl FnMut(&mut GeoJson) -> VisitResult<Visit> + 'a
where
    F: FnMut(&MultiLineString) + 'a,
{
    each(Callbacks::new().on_multi_line_string(move |multi_line_string| {
        callback(multi_line_string);
        Outcome::Keep
    }))
}

/// Builds a visitor that calls `callback` for every MultiPolygon in a tree
pub fn each_multi_polygon<'a, F>(
    mut callback: F,
) -> impl FnMut(&mut GeoJson) -> VisitResult<Visit> + 'a
where
    F: FnMut(&MultiPolygon) + 'a,
{
    each(Callbacks::new().on_multi_polygon(move |multi_polygon| {
        callback(multi_polygon);
        Outcome::Keep
    }))
}

/// Builds a visitor that calls `callback` for every GeometryCollection in a tree
pub fn each_geometry_collection<'a, F>(
    mut callback: F,
) -> impl FnMut(&mut GeoJson) -> VisitResult<Visit> + 'a
where
    F: FnMut(&GeometryCollection) + 'a,
{
    each(Callbacks::new().on_geometry_collection(move |collection| {
        callback(collection);
        Outcome::Keep
    }))
}

/// Builds a visitor that calls `callback` for every simple geometry in a tree
pub fn each_geometry<'a, F>(mut callback: F) -> impl FnMut(&mut GeoJson) -> VisitResult<Visit> + 'a
where
    F: FnMut(&Geometry) + 'a,
{
    each(Callbacks::new().on_geometry(move |geometry| {
        callback(geometry);
        Outcome::Keep
    }))
}

/// Builds a visitor that calls `callback` for every Feature in a tree
pub fn each_feature<'a, F>(mut callback: F) -> impl FnMut(&mut GeoJson) -> VisitResult<Visit> + 'a
where
    F: FnMut(&Feature) + 'a,
{
    each(Callbacks::new().on_feature(move |feature| {
        callback(feature);
        Outcome::Keep
    }))
}

/// Builds a visitor that calls `callback` for every coordinate in a tree
pub fn each_coordinate<'a, F>(
    mut callback: F,
) -> impl FnMut(&mut GeoJson) -> VisitResult<Visit> + 'a
where
    F: FnMut(&Position) + 'a,
{
    each(Callbacks::new().on_coordinate(move |position| {
        callback(position);
        Flow::Continue
    }))
}

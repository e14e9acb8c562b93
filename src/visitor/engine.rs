//! The recursive traversal engine
//!
//! Walks a GeoJSON tree depth-first, dispatching registered callbacks
//! and applying their verdicts in place. Collections are iterated in
//! reverse index order so removing the current element never disturbs
//! the indices still to be visited; the same tail-first order is used
//! for coordinate sequences at every nesting level.

use log::{debug, trace};

use crate::geojson::{
    Feature, FeatureCollection, GeoJson, Geometry, Position, VisitError, VisitResult,
};
use crate::visitor::callbacks::{Callbacks, CoordinateHook, Flow, NodeHook, Outcome, Visit};

/// Early-exit channel for the recursion: a callback asked to abort,
/// or a callback misbehaved. Forwarded with `?` from every frame so
/// the signal reaches the top-level call without further work.
enum Interrupt {
    Abort,
    Failed(VisitError),
}

/// Net effect of visiting one node, as seen by its parent
enum Verdict {
    Keep,
    Delete,
}

type Step<T> = Result<T, Interrupt>;

/// Walks a GeoJSON tree, firing registered callbacks and applying
/// their verdicts to the tree in place
///
/// # Arguments
///
/// * `data` - The tree to walk; the engine borrows it for the duration
///   of the call and may splice collections and reassign fields
/// * `callbacks` - The callback registry; any subset of slots may be set
///
/// # Returns
///
/// How the walk ended, or an error when a geometry callback returned a
/// replacement of the wrong kind
pub fn visit(data: &mut GeoJson, callbacks: &mut Callbacks<'_>) -> VisitResult<Visit> {
    let step = match data {
        GeoJson::Geometry(geometry) => visit_geometry(geometry, callbacks),
        GeoJson::Feature(feature) => visit_feature(feature, callbacks),
        GeoJson::FeatureCollection(collection) => {
            visit_feature_collection(collection, callbacks).map(|_| Verdict::Keep)
        }
    };

    match step {
        Ok(Verdict::Keep) => Ok(Visit::Completed),
        Ok(Verdict::Delete) => Ok(Visit::Detached),
        Err(Interrupt::Abort) => Ok(Visit::Aborted),
        Err(Interrupt::Failed(error)) => Err(error),
    }
}

/// Runs one optional callback slot against a node and folds the
/// outcome back into the node
fn apply<T>(slot: &mut Option<NodeHook<'_, T>>, node: &mut T, kind: &str) -> Step<Verdict> {
    let hook = match slot.as_mut() {
        Some(hook) => hook,
        None => return Ok(Verdict::Keep),
    };
    match hook(node) {
        Outcome::Keep => Ok(Verdict::Keep),
        Outcome::Replace(replacement) => {
            debug!("Applying {} replacement", kind);
            *node = replacement;
            Ok(Verdict::Keep)
        }
        Outcome::Delete => {
            debug!("{} callback requested deletion", kind);
            Ok(Verdict::Delete)
        }
        Outcome::Abort => {
            debug!("{} callback aborted the walk", kind);
            Err(Interrupt::Abort)
        }
    }
}

fn visit_geometry(geometry: &mut Geometry, callbacks: &mut Callbacks<'_>) -> Step<Verdict> {
    trace!("Visiting {}", geometry.geometry_type());

    if let Geometry::GeometryCollection(collection) = geometry {
        // Members first, tail first: removing the member at the current
        // index leaves every index still to be visited in place.
        for i in (0..collection.geometries.len()).rev() {
            if let Verdict::Delete = visit_geometry(&mut collection.geometries[i], callbacks)? {
                debug!("Removing geometry {} from collection", i);
                collection.geometries.remove(i);
            }
        }
        return apply(
            &mut callbacks.geometry_collection,
            collection,
            "GeometryCollection",
        );
    }

    if let Some(hook) = callbacks.coordinate.as_mut() {
        visit_positions(geometry, hook)?;
    }

    let verdict = match geometry {
        Geometry::Point(point) => apply(&mut callbacks.point, point, "Point")?,
        Geometry::LineString(line_string) => {
            apply(&mut callbacks.line_string, line_string, "LineString")?
        }
        Geometry::Polygon(polygon) => apply(&mut callbacks.polygon, polygon, "Polygon")?,
        Geometry::MultiPoint(multi_point) => {
            apply(&mut callbacks.multi_point, multi_point, "MultiPoint")?
        }
        Geometry::MultiLineString(multi_line_string) => apply(
            &mut callbacks.multi_line_string,
            multi_line_string,
            "MultiLineString",
        )?,
        Geometry::MultiPolygon(multi_polygon) => {
            apply(&mut callbacks.multi_polygon, multi_polygon, "MultiPolygon")?
        }
        // handled by the early return above
        Geometry::GeometryCollection(_) => Verdict::Keep,
    };

    if let Verdict::Delete = verdict {
        // the hierarchical callback never sees a node the specific
        // callback already deleted
        return Ok(Verdict::Delete);
    }

    visit_as_geometry(geometry, callbacks)
}

/// Runs the hierarchical geometry callback on a simple geometry,
/// enforcing that a replacement keeps the node's kind
fn visit_as_geometry(geometry: &mut Geometry, callbacks: &mut Callbacks<'_>) -> Step<Verdict> {
    let hook = match callbacks.geometry.as_mut() {
        Some(hook) => hook,
        None => return Ok(Verdict::Keep),
    };
    let expected = geometry.geometry_type();
    match hook(geometry) {
        Outcome::Keep => Ok(Verdict::Keep),
        Outcome::Replace(replacement) => {
            let actual = replacement.geometry_type();
            if actual != expected {
                return Err(Interrupt::Failed(VisitError::GeometryTypeMismatch {
                    expected,
                    actual,
                }));
            }
            debug!("Applying {} replacement from geometry callback", expected);
            *geometry = replacement;
            Ok(Verdict::Keep)
        }
        Outcome::Delete => {
            debug!("Geometry callback requested deletion of a {}", expected);
            Ok(Verdict::Delete)
        }
        Outcome::Abort => {
            debug!("Geometry callback aborted the walk");
            Err(Interrupt::Abort)
        }
    }
}

fn visit_feature(feature: &mut Feature, callbacks: &mut Callbacks<'_>) -> Step<Verdict> {
    trace!("Visiting Feature");

    if let Some(geometry) = feature.geometry.as_mut() {
        if let Verdict::Delete = visit_geometry(geometry, callbacks)? {
            debug!("Clearing feature geometry");
            feature.geometry = None;
        }
    }
    apply(&mut callbacks.feature, feature, "Feature")
}

fn visit_feature_collection(
    collection: &mut FeatureCollection,
    callbacks: &mut Callbacks<'_>,
) -> Step<()> {
    trace!("Visiting FeatureCollection ({} features)", collection.len());

    for i in (0..collection.features.len()).rev() {
        if let Verdict::Delete = visit_feature(&mut collection.features[i], callbacks)? {
            debug!("Removing feature {} from collection", i);
            collection.features.remove(i);
        }
    }
    Ok(())
}

/// Visits every coordinate belonging to a node, tail first at every
/// nesting level
fn visit_positions(geometry: &Geometry, hook: &mut CoordinateHook<'_>) -> Step<()> {
    match geometry {
        Geometry::Point(point) => touch(hook, &point.position),
        Geometry::LineString(line_string) => touch_each(hook, &line_string.positions),
        Geometry::MultiPoint(multi_point) => touch_each(hook, &multi_point.positions),
        Geometry::Polygon(polygon) => {
            for ring in polygon.rings.iter().rev() {
                touch_each(hook, ring)?;
            }
            Ok(())
        }
        Geometry::MultiLineString(multi_line_string) => {
            for line in multi_line_string.lines.iter().rev() {
                touch_each(hook, line)?;
            }
            Ok(())
        }
        Geometry::MultiPolygon(multi_polygon) => {
            for polygon in multi_polygon.polygons.iter().rev() {
                for ring in polygon.iter().rev() {
                    touch_each(hook, ring)?;
                }
            }
            Ok(())
        }
        Geometry::GeometryCollection(collection) => {
            for member in collection.geometries.iter().rev() {
                visit_positions(member, hook)?;
            }
            Ok(())
        }
    }
}

fn touch(hook: &mut CoordinateHook<'_>, position: &Position) -> Step<()> {
    match hook(position) {
        Flow::Continue => Ok(()),
        Flow::Abort => {
            debug!("Coordinate callback aborted the walk");
            Err(Interrupt::Abort)
        }
    }
}

fn touch_each(hook: &mut CoordinateHook<'_>, positions: &[Position]) -> Step<()> {
    for position in positions.iter().rev() {
        touch(hook, position)?;
    }
    Ok(())
}

//! Callback registry and verdict types for the traversal engine

use crate::geojson::{
    Feature, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon, Position,
};

/// Verdict a node callback hands back to the engine
pub enum Outcome<T> {
    /// Leave the node as it is and continue
    Keep,
    /// Substitute the node in its parent and continue with the replacement
    Replace(T),
    /// Remove the node from its parent collection; for a feature's
    /// geometry, clear the field
    Delete,
    /// Stop the whole traversal immediately
    Abort,
}

/// Verdict a coordinate callback hands back
///
/// Coordinates are observed through a shared reference, so the only
/// choice at a leaf is whether the walk goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the next coordinate
    Continue,
    /// Stop the whole traversal immediately
    Abort,
}

/// How a completed call to [`visit`](crate::visitor::visit) ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// The walk ran to completion
    Completed,
    /// A callback asked for the root node itself to be removed; the
    /// engine has no parent to splice it out of, so the tree is left
    /// as it was and the caller decides
    Detached,
    /// A callback aborted the walk
    Aborted,
}

pub(crate) type NodeHook<'a, T> = Box<dyn FnMut(&mut T) -> Outcome<T> + 'a>;
pub(crate) type CoordinateHook<'a> = Box<dyn FnMut(&Position) -> Flow + 'a>;

/// Optional callback slots, one per recognized node type
///
/// Any subset of slots may be filled; an empty slot never fires. The
/// specific-type slots take the concrete payload struct, so a
/// replacement of the wrong kind is rejected by the signature rather
/// than at run time. The `geometry` slot fires for every simple
/// geometry in addition to its specific slot, and checks replacement
/// kinds at run time.
#[derive(Default)]
pub struct Callbacks<'a> {
    pub(crate) point: Option<NodeHook<'a, Point>>,
    pub(crate) line_string: Option<NodeHook<'a, LineString>>,
    pub(crate) polygon: Option<NodeHook<'a, Polygon>>,
    pub(crate) multi_point: Option<NodeHook<'a, MultiPoint>>,
    pub(crate) multi_line_string: Option<NodeHook<'a, MultiLineString>>,
    pub(crate) multi_polygon: Option<NodeHook<'a, MultiPolygon>>,
    pub(crate) geometry_collection: Option<NodeHook<'a, GeometryCollection>>,
    pub(crate) geometry: Option<NodeHook<'a, Geometry>>,
    pub(crate) feature: Option<NodeHook<'a, Feature>>,
    pub(crate) coordinate: Option<CoordinateHook<'a>>,
}

impl<'a> Callbacks<'a> {
    /// Creates an empty registry
    pub fn new() -> Self {
        Callbacks::default()
    }

    /// Registers the callback fired for every Point
    pub fn on_point<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut Point) -> Outcome<Point> + 'a,
    {
        self.point = Some(Box::new(callback));
        self
    }

    /// Registers the callback fired for every LineString
    pub fn on_line_string<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut LineString) -> Outcome<LineString> + 'a,
    {
        self.line_string = Some(Box::new(callback));
        self
    }

    /// Registers the callback fired for every Polygon
    pub fn on_polygon<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut Polygon) -> Outcome<Polygon> + 'a,
    {
        self.polygon = Some(Box::new(callback));
        self
    }

    /// Registers the callback fired for every MultiPoint
    pub fn on_multi_point<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut MultiPoint) -> Outcome<MultiPoint> + 'a,
    {
        self.multi_point = Some(Box::new(callback));
        self
    }

    /// Registers the callback fired for every MultiLineString
    pub fn on_multi_line_string<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut MultiLineString) -> Outcome<MultiLineString> + 'a,
    {
        self.multi_line_string = Some(Box::new(callback));
        self
    }

    /// Registers the callback fired for every MultiPolygon
    pub fn on_multi_polygon<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut MultiPolygon) -> Outcome<MultiPolygon> + 'a,
    {
        self.multi_polygon = Some(Box::new(callback));
        self
    }

    /// Registers the callback fired for every GeometryCollection
    pub fn on_geometry_collection<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut GeometryCollection) -> Outcome<GeometryCollection> + 'a,
    {
        self.geometry_collection = Some(Box::new(callback));
        self
    }

    /// Registers the callback fired for every simple geometry, after
    /// its specific-type callback
    pub fn on_geometry<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut Geometry) -> Outcome<Geometry> + 'a,
    {
        self.geometry = Some(Box::new(callback));
        self
    }

    /// Registers the callback fired for every Feature
    pub fn on_feature<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut Feature) -> Outcome<Feature> + 'a,
    {
        self.feature = Some(Box::new(callback));
        self
    }

    /// Registers the callback fired for every coordinate leaf
    pub fn on_coordinate<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Position) -> Flow + 'a,
    {
        self.coordinate = Some(Box::new(callback));
        self
    }
}

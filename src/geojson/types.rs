//! Core GeoJSON data structures
//!
//! Node kinds are modeled as closed sum types so that dispatch in the
//! visitor is an exhaustive match rather than a string comparison.

use std::fmt;

use serde_json::Value;

/// A single coordinate: longitude, latitude and an optional altitude
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    /// Longitude in degrees
    pub lon: f64,
    /// Latitude in degrees
    pub lat: f64,
    /// Altitude or elevation, when the source data carries a third value
    pub alt: Option<f64>,
}

impl Position {
    /// Creates a position from a longitude/latitude pair
    pub fn new(lon: f64, lat: f64) -> Self {
        Position {
            lon,
            lat,
            alt: None,
        }
    }

    /// Creates a position carrying an altitude
    pub fn with_alt(lon: f64, lat: f64, alt: f64) -> Self {
        Position {
            lon,
            lat,
            alt: Some(alt),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alt {
            Some(alt) => write!(f, "[{}, {}, {}]", self.lon, self.lat, alt),
            None => write!(f, "[{}, {}]", self.lon, self.lat),
        }
    }
}

/// A single-position geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// The point's position
    pub position: Position,
}

impl Point {
    /// Creates a point at the given position
    pub fn new(position: Position) -> Self {
        Point { position }
    }
}

/// An ordered sequence of positions forming a line
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    /// The vertices of the line, in order
    pub positions: Vec<Position>,
}

impl LineString {
    /// Creates a line string from its vertices
    pub fn new(positions: Vec<Position>) -> Self {
        LineString { positions }
    }
}

/// An unconnected set of positions
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    /// The member positions
    pub positions: Vec<Position>,
}

impl MultiPoint {
    /// Creates a multi-point from its member positions
    pub fn new(positions: Vec<Position>) -> Self {
        MultiPoint { positions }
    }
}

/// A surface bounded by one or more rings
///
/// The first ring is the exterior boundary, any further rings are
/// holes. Ring validity (closure, winding) is not checked here.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// The rings of the polygon
    pub rings: Vec<Vec<Position>>,
}

impl Polygon {
    /// Creates a polygon from its rings
    pub fn new(rings: Vec<Vec<Position>>) -> Self {
        Polygon { rings }
    }
}

/// A set of line strings
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    /// The member lines
    pub lines: Vec<Vec<Position>>,
}

impl MultiLineString {
    /// Creates a multi-line-string from its member lines
    pub fn new(lines: Vec<Vec<Position>>) -> Self {
        MultiLineString { lines }
    }
}

/// A set of polygons
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    /// The member polygons, each a list of rings
    pub polygons: Vec<Vec<Vec<Position>>>,
}

impl MultiPolygon {
    /// Creates a multi-polygon from its member polygons
    pub fn new(polygons: Vec<Vec<Vec<Position>>>) -> Self {
        MultiPolygon { polygons }
    }
}

/// An ordered collection of geometries, possibly nested
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    /// The member geometries
    pub geometries: Vec<Geometry>,
}

impl GeometryCollection {
    /// Creates a collection from its member geometries
    pub fn new(geometries: Vec<Geometry>) -> Self {
        GeometryCollection { geometries }
    }

    /// Returns the number of member geometries
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    /// Returns true when the collection has no members
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

/// Discriminant for the geometry kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// Returns the GeoJSON type name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any GeoJSON geometry
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// Returns the discriminant for this geometry
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// Returns true for every kind except GeometryCollection
    pub fn is_simple(&self) -> bool {
        !matches!(self, Geometry::GeometryCollection(_))
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::Point(point)
    }
}

impl From<LineString> for Geometry {
    fn from(line_string: LineString) -> Self {
        Geometry::LineString(line_string)
    }
}

impl From<Polygon> for Geometry {
    fn from(polygon: Polygon) -> Self {
        Geometry::Polygon(polygon)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(multi_point: MultiPoint) -> Self {
        Geometry::MultiPoint(multi_point)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(multi_line_string: MultiLineString) -> Self {
        Geometry::MultiLineString(multi_line_string)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(multi_polygon: MultiPolygon) -> Self {
        Geometry::MultiPolygon(multi_polygon)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(collection: GeometryCollection) -> Self {
        Geometry::GeometryCollection(collection)
    }
}

/// A geometry with an opaque property bag attached
///
/// The property bag is carried along but never traversed. A feature
/// owns at most one geometry; `None` arises when a traversal deletes
/// it.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// The feature's geometry, if it still has one
    pub geometry: Option<Geometry>,
    /// Arbitrary properties attached to the feature
    pub properties: Value,
}

impl Feature {
    /// Creates a feature wrapping the given geometry with empty properties
    pub fn new(geometry: Geometry) -> Self {
        Feature {
            geometry: Some(geometry),
            properties: Value::Object(serde_json::Map::new()),
        }
    }

    /// Creates a feature with the given properties
    pub fn with_properties(geometry: Geometry, properties: Value) -> Self {
        Feature {
            geometry: Some(geometry),
            properties,
        }
    }
}

/// An ordered collection of features
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    /// The member features
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Creates a collection from its member features
    pub fn new(features: Vec<Feature>) -> Self {
        FeatureCollection { features }
    }

    /// Returns the number of member features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true when the collection has no members
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Any GeoJSON value a traversal can start from
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl From<Geometry> for GeoJson {
    fn from(geometry: Geometry) -> Self {
        GeoJson::Geometry(geometry)
    }
}

impl From<Feature> for GeoJson {
    fn from(feature: Feature) -> Self {
        GeoJson::Feature(feature)
    }
}

impl From<FeatureCollection> for GeoJson {
    fn from(collection: FeatureCollection) -> Self {
        GeoJson::FeatureCollection(collection)
    }
}

impl From<Point> for GeoJson {
    fn from(point: Point) -> Self {
        GeoJson::Geometry(point.into())
    }
}

impl From<LineString> for GeoJson {
    fn from(line_string: LineString) -> Self {
        GeoJson::Geometry(line_string.into())
    }
}

impl From<Polygon> for GeoJson {
    fn from(polygon: Polygon) -> Self {
        GeoJson::Geometry(polygon.into())
    }
}

impl From<MultiPoint> for GeoJson {
    fn from(multi_point: MultiPoint) -> Self {
        GeoJson::Geometry(multi_point.into())
    }
}

impl From<MultiLineString> for GeoJson {
    fn from(multi_line_string: MultiLineString) -> Self {
        GeoJson::Geometry(multi_line_string.into())
    }
}

impl From<MultiPolygon> for GeoJson {
    fn from(multi_polygon: MultiPolygon) -> Self {
        GeoJson::Geometry(multi_polygon.into())
    }
}

impl From<GeometryCollection> for GeoJson {
    fn from(collection: GeometryCollection) -> Self {
        GeoJson::Geometry(collection.into())
    }
}

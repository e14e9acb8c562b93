//! Tests for the single-hook convenience wrappers

use std::cell::{Cell, RefCell};

use crate::fixtures;
use crate::geojson::{GeoJson, Geometry, Point};
use crate::visitor::{
    each, each_coordinate, each_feature, each_geometry, each_geometry_collection,
    each_line_string, each_multi_line_string, each_multi_point, each_multi_polygon, each_point,
    each_polygon, Callbacks, Outcome,
};

#[test]
fn test_each_point_in_a_geometry_collection() {
    let first = fixtures::point(1);
    let second = fixtures::point(2);
    let mut collection = GeoJson::from(fixtures::geometry_collection(vec![
        first.clone().into(),
        fixtures::line_string(3, 10).into(),
        second.clone().into(),
    ]));

    let seen: RefCell<Vec<Point>> = RefCell::new(Vec::new());
    let mut count_points = each_point(|point| {
        seen.borrow_mut().push(point.clone());
    });

    count_points(&mut collection).unwrap();
    assert_eq!(*seen.borrow(), vec![second, first]);
}

#[test]
fn test_each_point_in_a_feature() {
    let count = Cell::new(0);
    let mut count_points = each_point(|_| {
        count.set(count.get() + 1);
    });

    let mut data = GeoJson::from(fixtures::feature(fixtures::point(1).into()));
    count_points(&mut data).unwrap();

    // the same visitor is reusable on another tree
    let mut data = GeoJson::from(fixtures::feature(fixtures::line_string(2, 10).into()));
    count_points(&mut data).unwrap();

    assert_eq!(count.get(), 1);
}

#[test]
fn test_each_point_skips_multi_point_parts() {
    let count = Cell::new(0);
    let mut count_points = each_point(|_| {
        count.set(count.get() + 1);
    });

    let mut data = GeoJson::from(fixtures::multi_point(1, 10));
    count_points(&mut data).unwrap();
    assert_eq!(count.get(), 0);
}

#[test]
fn test_each_point_in_a_feature_collection() {
    let first = fixtures::point(1);
    let second = fixtures::point(2);
    let mut collection = GeoJson::from(fixtures::feature_collection(vec![
        fixtures::feature(first.clone().into()),
        fixtures::feature(fixtures::polygon(3, 3).into()),
        fixtures::feature(second.clone().into()),
        fixtures::feature(fixtures::line_string(4, 10).into()),
    ]));

    let seen: RefCell<Vec<Point>> = RefCell::new(Vec::new());
    let mut count_points = each_point(|point| {
        seen.borrow_mut().push(point.clone());
    });

    count_points(&mut collection).unwrap();
    assert_eq!(*seen.borrow(), vec![second, first]);
}

#[test]
fn test_each_line_string_in_a_geometry_collection() {
    let mut geometries: Vec<Geometry> = Vec::new();
    for i in 0..10u64 {
        geometries.push(fixtures::line_string(i, 5).into());
        geometries.push(fixtures::point(i).into());
        geometries.push(fixtures::polygon(i, 3).into());
    }
    let mut collection = GeoJson::from(fixtures::geometry_collection(geometries));

    let count = Cell::new(0);
    let mut count_lines = each_line_string(|_| {
        count.set(count.get() + 1);
    });

    count_lines(&mut collection).unwrap();
    assert_eq!(count.get(), 10);
}

#[test]
fn test_each_line_string_skips_multi_line_string_parts() {
    let count = Cell::new(0);
    let mut count_lines = each_line_string(|_| {
        count.set(count.get() + 1);
    });

    let mut data = GeoJson::from(fixtures::multi_line_string(1, 3));
    count_lines(&mut data).unwrap();
    assert_eq!(count.get(), 0);
}

#[test]
fn test_each_polygon_in_a_geometry_collection() {
    let mut collection = GeoJson::from(fixtures::geometry_collection(vec![
        fixtures::point(1).into(),
        fixtures::polygon(2, 3).into(),
        fixtures::line_string(3, 10).into(),
        fixtures::polygon(4, 2).into(),
        fixtures::point(5).into(),
        fixtures::polygon(6, 1).into(),
    ]));

    let count = Cell::new(0);
    let mut count_polygons = each_polygon(|_| {
        count.set(count.get() + 1);
    });

    count_polygons(&mut collection).unwrap();
    assert_eq!(count.get(), 3);
}

#[test]
fn test_each_polygon_skips_multi_polygon_parts() {
    let count = Cell::new(0);
    let mut count_polygons = each_polygon(|_| {
        count.set(count.get() + 1);
    });

    let mut data = GeoJson::from(fixtures::multi_polygon(1, 3));
    count_polygons(&mut data).unwrap();
    assert_eq!(count.get(), 0);
}

#[test]
fn test_each_geometry_in_a_feature_collection() {
    let features = fixtures::array_of(9, |i| match i % 3 {
        0 => fixtures::feature(fixtures::point(i as u64).into()),
        1 => fixtures::feature(fixtures::polygon(i as u64, 3).into()),
        _ => fixtures::feature(fixtures::line_string(i as u64, 10).into()),
    });
    let total = features.len();
    let mut collection = GeoJson::from(fixtures::feature_collection(features));

    let count = Cell::new(0);
    let mut count_geometries = each_geometry(|_| {
        count.set(count.get() + 1);
    });

    count_geometries(&mut collection).unwrap();
    assert_eq!(count.get(), total);
}

#[test]
fn test_each_geometry_visits_collection_members_only() {
    let mut collection = GeoJson::from(fixtures::geometry_collection(vec![
        fixtures::point(1).into(),
        fixtures::polygon(2, 3).into(),
        fixtures::line_string(3, 10).into(),
    ]));

    let count = Cell::new(0);
    let mut count_geometries = each_geometry(|_| {
        count.set(count.get() + 1);
    });

    count_geometries(&mut collection).unwrap();
    assert_eq!(count.get(), 3);
}

#[test]
fn test_each_coordinate_in_a_line_string() {
    let length = 10;
    let mut data = GeoJson::from(fixtures::line_string(1, length));

    let count = Cell::new(0);
    let mut count_coordinates = each_coordinate(|position| {
        count.set(count.get() + 1);
        // fixture coordinates stay on the globe
        assert!((-180.0..=180.0).contains(&position.lon));
        assert!((-90.0..=90.0).contains(&position.lat));
        assert!(position.alt.is_none());
    });

    count_coordinates(&mut data).unwrap();
    assert_eq!(count.get(), length);
}

#[test]
fn test_each_coordinate_in_a_feature_collection() {
    let mut collection = GeoJson::from(fixtures::feature_collection(vec![
        fixtures::feature(fixtures::point(1).into()),
        fixtures::feature(fixtures::line_string(2, 10).into()),
        fixtures::feature(fixtures::polygon(3, 4).into()),
    ]));

    let count = Cell::new(0);
    let mut count_coordinates = each_coordinate(|_| {
        count.set(count.get() + 1);
    });

    count_coordinates(&mut collection).unwrap();
    assert_eq!(count.get(), 27);
}

#[test]
fn test_each_wrapper_for_every_remaining_type() {
    let mut data = GeoJson::from(fixtures::feature(
        fixtures::geometry_collection(vec![
            fixtures::multi_point(1, 4).into(),
            fixtures::multi_line_string(2, 3).into(),
            fixtures::multi_polygon(3, 2).into(),
        ])
        .into(),
    ));

    let multi_points = Cell::new(0);
    let mut visitor = each_multi_point(|_| multi_points.set(multi_points.get() + 1));
    visitor(&mut data).unwrap();
    assert_eq!(multi_points.get(), 1);

    let multi_lines = Cell::new(0);
    let mut visitor = each_multi_line_string(|_| multi_lines.set(multi_lines.get() + 1));
    visitor(&mut data).unwrap();
    assert_eq!(multi_lines.get(), 1);

    let multi_polygons = Cell::new(0);
    let mut visitor = each_multi_polygon(|_| multi_polygons.set(multi_polygons.get() + 1));
    visitor(&mut data).unwrap();
    assert_eq!(multi_polygons.get(), 1);

    let collections = Cell::new(0);
    let mut visitor = each_geometry_collection(|_| collections.set(collections.get() + 1));
    visitor(&mut data).unwrap();
    assert_eq!(collections.get(), 1);

    let features = Cell::new(0);
    let mut visitor = each_feature(|_| features.set(features.get() + 1));
    visitor(&mut data).unwrap();
    assert_eq!(features.get(), 1);
}

#[test]
fn test_each_with_a_full_registry() {
    let mut data = GeoJson::from(fixtures::feature_collection(vec![
        fixtures::feature(fixtures::point(1).into()),
        fixtures::feature(fixtures::line_string(2, 4).into()),
    ]));

    let points = Cell::new(0);
    let features = Cell::new(0);
    let mut walk = each(
        Callbacks::new()
            .on_point(|_| {
                points.set(points.get() + 1);
                Outcome::Keep
            })
            .on_feature(|_| {
                features.set(features.get() + 1);
                Outcome::Keep
            }),
    );

    walk(&mut data).unwrap();
    assert_eq!(points.get(), 1);
    assert_eq!(features.get(), 2);
}

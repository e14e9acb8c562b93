//! GeoJSON tree traversal
//!
//! This module implements the depth-first visitor over the object
//! model. Callers register callbacks in a [`Callbacks`] registry and
//! hand a tree to [`visit`]; each callback's verdict is applied to the
//! tree in place.

pub mod callbacks;
pub mod each;
pub mod engine;
#[cfg(test)]
mod tests;

pub use callbacks::{Callbacks, Flow, Outcome, Visit};
pub use each::{
    each, each_coordinate, each_feature, each_geometry, each_geometry_collection,
    each_line_string, each_multi_line_string, each_multi_point, each_multi_polygon, each_point,
    each_polygon,
};
pub use engine::visit;

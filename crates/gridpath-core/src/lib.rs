//! **gridpath-core** — terrain grid and geometry for grid path search.
//!
//! This crate provides the data model underneath the search engine: the
//! [`Coord`] geometry type, the [`Terrain`] classes and [`CostModel`],
//! the paintable [`Grid`] with its Start/End markers and freeze flag,
//! and distance helpers for heuristics.

pub mod coord;
pub mod distance;
pub mod grid;
pub mod terrain;

pub use coord::Coord;
pub use distance::{chebyshev, octile};
pub use grid::{DEFAULT_SIDE, Grid, GridError, MAX_SIDE};
pub use terrain::{CostModel, Terrain};

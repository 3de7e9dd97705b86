//! The paintable terrain grid.
//!
//! [`Grid`] is a square `side × side` field of [`Terrain`] cells plus
//! exactly one Start and one End marker. It is backed by shared storage
//! (`Rc<RefCell<...>>`) so that a presentation layer and an active
//! search run can hold handles to the same grid; `Clone` is a shallow
//! handle copy, not a deep copy.
//!
//! While a run is active the grid is frozen: every mutating call fails
//! with [`GridError::Frozen`] and leaves the grid untouched.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::coord::Coord;
use crate::terrain::{CostModel, Terrain};

/// Default side length of a freshly created grid.
pub const DEFAULT_SIDE: i32 = 20;

/// Largest accepted side length; keeps index arithmetic well inside
/// `usize` range.
pub const MAX_SIDE: i32 = 4096;

/// Errors from grid queries and paint operations.
///
/// All variants are locally recoverable: the offending call has no
/// effect and the grid keeps its prior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate outside `[0, side)` on either axis.
    OutOfBounds(Coord),
    /// Start/End collision with `Blocked` terrain or with each other,
    /// or terrain painted over a marker.
    InvalidPlacement(Coord),
    /// Mutation attempted while a search run holds the grid.
    Frozen,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(c) => write!(f, "coordinate {c} is outside the grid"),
            Self::InvalidPlacement(c) => write!(f, "invalid placement at {c}"),
            Self::Frozen => write!(f, "grid is frozen by an active search run"),
        }
    }
}

impl std::error::Error for GridError {}

#[derive(Debug)]
struct GridInner {
    side: i32,
    cells: Vec<Terrain>,
    start: Coord,
    end: Coord,
    frozen: bool,
}

impl GridInner {
    fn index(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.row >= self.side || c.col < 0 || c.col >= self.side {
            return None;
        }
        Some(c.row as usize * self.side as usize + c.col as usize)
    }
}

/// A square terrain grid with Start and End markers.
#[derive(Debug, Clone)]
pub struct Grid {
    inner: Rc<RefCell<GridInner>>,
    costs: CostModel,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create the default grid: side 20, all `Clear`, Start at the
    /// top-left corner and End at the bottom-right corner.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_SIDE, CostModel::default())
    }

    /// Create a grid with a custom side length and cost model.
    ///
    /// The side is clamped to `[2, MAX_SIDE]`: at least 2 so the Start
    /// and End markers can occupy distinct cells, at most [`MAX_SIDE`]
    /// so the cell count cannot overflow.
    pub fn with_config(side: i32, costs: CostModel) -> Self {
        let side = side.clamp(2, MAX_SIDE);
        let inner = GridInner {
            side,
            cells: vec![Terrain::Clear; side as usize * side as usize],
            start: Coord::ZERO,
            end: Coord::new(side - 1, side - 1),
            frozen: false,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
            costs,
        }
    }

    /// Side length of the grid.
    pub fn side(&self) -> i32 {
        self.inner.borrow().side
    }

    /// The current Start marker.
    pub fn start(&self) -> Coord {
        self.inner.borrow().start
    }

    /// The current End marker.
    pub fn end(&self) -> Coord {
        self.inner.borrow().end
    }

    /// The cost model used for edge costs.
    pub fn cost_model(&self) -> &CostModel {
        &self.costs
    }

    /// Whether the coordinate lies inside the grid.
    pub fn contains(&self, c: Coord) -> bool {
        self.inner.borrow().index(c).is_some()
    }

    /// Terrain at a coordinate.
    pub fn terrain_at(&self, c: Coord) -> Result<Terrain, GridError> {
        let inner = self.inner.borrow();
        match inner.index(c) {
            Some(i) => Ok(inner.cells[i]),
            None => Err(GridError::OutOfBounds(c)),
        }
    }

    /// Whether the cell can be entered: in bounds and not `Blocked`.
    pub fn is_traversable(&self, c: Coord) -> bool {
        let inner = self.inner.borrow();
        match inner.index(c) {
            Some(i) => inner.cells[i].passable(),
            None => false,
        }
    }

    /// Paint terrain at a coordinate.
    ///
    /// Rejected with [`GridError::InvalidPlacement`] if the cell holds
    /// the Start or End marker; painting must not overwrite endpoints.
    pub fn set_terrain(&self, c: Coord, t: Terrain) -> Result<(), GridError> {
        let mut inner = self.inner.borrow_mut();
        if inner.frozen {
            return Err(GridError::Frozen);
        }
        let i = inner.index(c).ok_or(GridError::OutOfBounds(c))?;
        if c == inner.start || c == inner.end {
            return Err(GridError::InvalidPlacement(c));
        }
        inner.cells[i] = t;
        Ok(())
    }

    /// Move the Start marker.
    ///
    /// The previous Start cell reverts to `Clear`, and the destination
    /// cell's terrain is overwritten with `Clear` as well: the cell
    /// beneath a marker never carries a terrain cost of its own.
    /// Rejected if the target is `Blocked` or currently holds the End
    /// marker.
    pub fn set_start(&self, c: Coord) -> Result<(), GridError> {
        self.set_marker(c, true)
    }

    /// Move the End marker. Same rules as [`Grid::set_start`].
    pub fn set_end(&self, c: Coord) -> Result<(), GridError> {
        self.set_marker(c, false)
    }

    fn set_marker(&self, c: Coord, start: bool) -> Result<(), GridError> {
        let mut inner = self.inner.borrow_mut();
        if inner.frozen {
            return Err(GridError::Frozen);
        }
        let i = inner.index(c).ok_or(GridError::OutOfBounds(c))?;
        if !inner.cells[i].passable() {
            return Err(GridError::InvalidPlacement(c));
        }
        // Start and End must never coincide.
        let other = if start { inner.end } else { inner.start };
        if c == other {
            return Err(GridError::InvalidPlacement(c));
        }
        // The vacated cell reverts to Clear, and whatever terrain sat at
        // the destination is overwritten: marker cells are always
        // Clear-cost.
        let old = if start { inner.start } else { inner.end };
        if let Some(oi) = inner.index(old) {
            inner.cells[oi] = Terrain::Clear;
        }
        inner.cells[i] = Terrain::Clear;
        if start {
            inner.start = c;
        } else {
            inner.end = c;
        }
        Ok(())
    }

    /// Restore the all-`Clear` grid with Start and End back in the
    /// top-left and bottom-right corners.
    pub fn reset(&self) -> Result<(), GridError> {
        let mut inner = self.inner.borrow_mut();
        if inner.frozen {
            return Err(GridError::Frozen);
        }
        let side = inner.side;
        inner.cells.fill(Terrain::Clear);
        inner.start = Coord::ZERO;
        inner.end = Coord::new(side - 1, side - 1);
        Ok(())
    }

    /// Cost of the edge from `from` to its neighbour `to`.
    ///
    /// `None` when `to` is out of bounds, `Blocked`, or not 8-adjacent
    /// to `from`. The cost depends only on the terrain being entered:
    /// orthogonal/diagonal base cost, multiplied for `Water`.
    pub fn edge_cost(&self, from: Coord, to: Coord) -> Option<i32> {
        if !from.adjacent_to(to) {
            return None;
        }
        let inner = self.inner.borrow();
        let i = inner.index(to)?;
        inner.index(from)?;
        self.costs.step_cost(from.diagonal_to(to), inner.cells[i])
    }

    /// Row-major iterator over every coordinate of the grid.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let side = self.inner.borrow().side;
        (0..side).flat_map(move |row| (0..side).map(move |col| Coord::new(row, col)))
    }

    /// Whether the grid is currently frozen by a run.
    pub fn is_frozen(&self) -> bool {
        self.inner.borrow().frozen
    }

    /// Freeze the grid for the duration of a run.
    ///
    /// Fails with [`GridError::Frozen`] if already frozen, which also
    /// serves as the one-run-per-grid guard.
    pub fn freeze(&self) -> Result<(), GridError> {
        let mut inner = self.inner.borrow_mut();
        if inner.frozen {
            return Err(GridError::Frozen);
        }
        inner.frozen = true;
        Ok(())
    }

    /// Release the freeze after a run completes or is cancelled.
    pub fn thaw(&self) {
        self.inner.borrow_mut().frozen = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_grid_defaults() {
        let g = Grid::new();
        assert_eq!(g.side(), 20);
        assert_eq!(g.start(), Coord::new(0, 0));
        assert_eq!(g.end(), Coord::new(19, 19));
        assert_eq!(g.terrain_at(Coord::new(7, 3)), Ok(Terrain::Clear));
        assert_eq!(g.coords().count(), 400);
    }

    #[test]
    fn terrain_at_out_of_bounds() {
        let g = Grid::new();
        let c = Coord::new(20, 0);
        assert_eq!(g.terrain_at(c), Err(GridError::OutOfBounds(c)));
        assert_eq!(
            g.terrain_at(Coord::new(0, -1)),
            Err(GridError::OutOfBounds(Coord::new(0, -1)))
        );
    }

    #[test]
    fn terrain_at_idempotent() {
        let g = Grid::new();
        g.set_terrain(Coord::new(4, 4), Terrain::Water).unwrap();
        let a = g.terrain_at(Coord::new(4, 4));
        let b = g.terrain_at(Coord::new(4, 4));
        assert_eq!(a, b);
        assert_eq!(a, Ok(Terrain::Water));
    }

    #[test]
    fn paint_over_marker_rejected() {
        let g = Grid::new();
        let err = g.set_terrain(g.start(), Terrain::Blocked);
        assert_eq!(err, Err(GridError::InvalidPlacement(g.start())));
        let err = g.set_terrain(g.end(), Terrain::Water);
        assert_eq!(err, Err(GridError::InvalidPlacement(g.end())));
        // Grid unchanged.
        assert_eq!(g.terrain_at(g.start()), Ok(Terrain::Clear));
    }

    #[test]
    fn marker_displacement() {
        let g = Grid::new();
        g.set_start(Coord::new(5, 5)).unwrap();
        assert_eq!(g.start(), Coord::new(5, 5));
        // The old start cell is plain terrain again and can be painted.
        g.set_terrain(Coord::new(0, 0), Terrain::Blocked).unwrap();
    }

    #[test]
    fn marker_onto_blocked_rejected() {
        let g = Grid::new();
        g.set_terrain(Coord::new(3, 3), Terrain::Blocked).unwrap();
        assert_eq!(
            g.set_start(Coord::new(3, 3)),
            Err(GridError::InvalidPlacement(Coord::new(3, 3)))
        );
        assert_eq!(g.start(), Coord::new(0, 0));
    }

    #[test]
    fn markers_never_coincide() {
        let g = Grid::new();
        assert_eq!(
            g.set_start(g.end()),
            Err(GridError::InvalidPlacement(Coord::new(19, 19)))
        );
        assert_eq!(
            g.set_end(g.start()),
            Err(GridError::InvalidPlacement(Coord::new(0, 0)))
        );
    }

    #[test]
    fn traversable() {
        let g = Grid::new();
        g.set_terrain(Coord::new(2, 2), Terrain::Blocked).unwrap();
        g.set_terrain(Coord::new(2, 3), Terrain::Water).unwrap();
        assert!(!g.is_traversable(Coord::new(2, 2)));
        assert!(g.is_traversable(Coord::new(2, 3)));
        assert!(g.is_traversable(Coord::new(0, 0)));
        assert!(!g.is_traversable(Coord::new(-1, 0)));
        assert!(!g.is_traversable(Coord::new(0, 20)));
    }

    #[test]
    fn edge_costs() {
        let g = Grid::new();
        g.set_terrain(Coord::new(1, 1), Terrain::Water).unwrap();
        g.set_terrain(Coord::new(1, 2), Terrain::Blocked).unwrap();
        let from = Coord::new(0, 1);
        assert_eq!(g.edge_cost(from, Coord::new(0, 2)), Some(10));
        assert_eq!(g.edge_cost(from, Coord::new(1, 1)), Some(20));
        assert_eq!(g.edge_cost(from, Coord::new(0, 0)), Some(10));
        // Diagonal into water.
        assert_eq!(g.edge_cost(Coord::new(0, 0), Coord::new(1, 1)), Some(28));
        // Blocked neighbour has no edge.
        assert_eq!(g.edge_cost(from, Coord::new(1, 2)), None);
        // Not adjacent.
        assert_eq!(g.edge_cost(from, Coord::new(0, 3)), None);
        // Off the grid.
        assert_eq!(g.edge_cost(Coord::new(0, 0), Coord::new(-1, 0)), None);
    }

    #[test]
    fn freeze_rejects_mutation() {
        let g = Grid::new();
        g.freeze().unwrap();
        assert_eq!(
            g.set_terrain(Coord::new(1, 1), Terrain::Water),
            Err(GridError::Frozen)
        );
        assert_eq!(g.set_start(Coord::new(1, 1)), Err(GridError::Frozen));
        assert_eq!(g.set_end(Coord::new(1, 1)), Err(GridError::Frozen));
        assert_eq!(g.reset(), Err(GridError::Frozen));
        // Double freeze is rejected too.
        assert_eq!(g.freeze(), Err(GridError::Frozen));
        g.thaw();
        g.set_terrain(Coord::new(1, 1), Terrain::Water).unwrap();
    }

    #[test]
    fn clone_shares_storage() {
        let g = Grid::new();
        let view = g.clone();
        g.set_terrain(Coord::new(9, 9), Terrain::Blocked).unwrap();
        assert_eq!(view.terrain_at(Coord::new(9, 9)), Ok(Terrain::Blocked));
    }

    #[test]
    fn reset_restores_defaults() {
        let g = Grid::new();
        g.set_terrain(Coord::new(9, 9), Terrain::Blocked).unwrap();
        g.set_start(Coord::new(4, 4)).unwrap();
        g.reset().unwrap();
        assert_eq!(g.start(), Coord::new(0, 0));
        assert_eq!(g.end(), Coord::new(19, 19));
        assert_eq!(g.terrain_at(Coord::new(9, 9)), Ok(Terrain::Clear));
    }

    #[test]
    fn marker_placement_clears_terrain() {
        let g = Grid::new();
        g.set_terrain(Coord::new(5, 5), Terrain::Water).unwrap();
        g.set_end(Coord::new(5, 5)).unwrap();
        // The cell beneath a marker is always Clear-cost.
        assert_eq!(g.terrain_at(Coord::new(5, 5)), Ok(Terrain::Clear));
        assert_eq!(g.edge_cost(Coord::new(5, 4), Coord::new(5, 5)), Some(10));
        // Displacing the marker leaves Clear behind, not the old Water.
        g.set_end(Coord::new(6, 6)).unwrap();
        assert_eq!(g.terrain_at(Coord::new(5, 5)), Ok(Terrain::Clear));
    }

    #[test]
    fn side_clamped_to_bounds() {
        let g = Grid::with_config(1, CostModel::default());
        assert_eq!(g.side(), 2);
        assert_ne!(g.start(), g.end());

        let g = Grid::with_config(i32::MAX, CostModel::default());
        assert_eq!(g.side(), MAX_SIDE);
        assert_eq!(g.end(), Coord::new(MAX_SIDE - 1, MAX_SIDE - 1));
        assert!(g.contains(g.end()));
    }
}

//! Per-run distance and parent bookkeeping.

use gridpath_core::Coord;

/// Sentinel distance for cells not yet discovered.
pub const UNREACHABLE: i32 = i32::MAX;

const NO_PARENT: usize = usize::MAX;

/// Best-known cumulative cost and predecessor per cell, plus the
/// first-discovery counter.
///
/// A `SearchState` is owned by exactly one run: it is built fresh when
/// the run starts and dropped with it, so no bookkeeping from a
/// cancelled or completed run can leak into the next one.
pub struct SearchState {
    side: i32,
    dist: Vec<i32>,
    parent: Vec<usize>,
    discovered: Vec<bool>,
    discovered_count: usize,
}

impl SearchState {
    /// Fresh table for a `side × side` grid with the start cell seeded
    /// at distance 0 and no parent.
    pub fn new(side: i32, start: Coord) -> Self {
        let len = side as usize * side as usize;
        let mut state = Self {
            side,
            dist: vec![UNREACHABLE; len],
            parent: vec![NO_PARENT; len],
            discovered: vec![false; len],
            discovered_count: 0,
        };
        if let Some(i) = state.idx(start) {
            state.dist[i] = 0;
        }
        state
    }

    #[inline]
    fn idx(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.row >= self.side || c.col < 0 || c.col >= self.side {
            return None;
        }
        Some(c.row as usize * self.side as usize + c.col as usize)
    }

    #[inline]
    fn coord(&self, idx: usize) -> Coord {
        let side = self.side as usize;
        Coord::new((idx / side) as i32, (idx % side) as i32)
    }

    /// Best-known distance to a cell, [`UNREACHABLE`] if undiscovered
    /// or out of range.
    pub fn distance(&self, c: Coord) -> i32 {
        match self.idx(c) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Predecessor of a cell on its best-known path, if any.
    pub fn parent_of(&self, c: Coord) -> Option<Coord> {
        let i = self.idx(c)?;
        match self.parent[i] {
            NO_PARENT => None,
            p => Some(self.coord(p)),
        }
    }

    /// Record an improved path to `cell`: update distance and parent.
    ///
    /// Returns `true` if this is the first time the cell has ever been
    /// relaxed in this run (bumps the discovered counter).
    pub fn relax(&mut self, cell: Coord, dist: i32, parent: Coord) -> bool {
        let (Some(i), Some(pi)) = (self.idx(cell), self.idx(parent)) else {
            return false;
        };
        debug_assert!(dist < self.dist[i]);
        self.dist[i] = dist;
        self.parent[i] = pi;
        let first = !self.discovered[i];
        if first {
            self.discovered[i] = true;
            self.discovered_count += 1;
        }
        first
    }

    /// Number of distinct cells relaxed at least once.
    pub fn discovered_count(&self) -> usize {
        self.discovered_count
    }
}

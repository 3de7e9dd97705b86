//! The search engine: frontier expansion, path reconstruction, and the
//! run lifecycle.
//!
//! [`Engine::run`] checks the endpoints, freezes the grid, and returns
//! a [`SearchRun`]. The run is an iterator over [`SearchEvent`]s: each
//! internal step performs one frontier extraction plus its relaxations,
//! and buffered events let a caller pace rendering between steps.
//! Dropping the run cancels it, thaws the grid, and frees the engine
//! for the next run with no state carried over.

use std::cell::Cell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use gridpath_core::{Coord, Grid, GridError, octile};

use crate::events::{Algorithm, Outcome, SearchEvent};
use crate::frontier::{Frontier, FrontierEntry};
use crate::state::SearchState;

/// Errors from starting a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunError {
    /// A run from this engine (or another run holding the same grid)
    /// is still active.
    AlreadyRunning,
    /// An endpoint is out of bounds or not traversable.
    Grid(GridError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRunning => write!(f, "a search run is already active"),
            Self::Grid(e) => write!(f, "cannot start run: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for RunError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Factory and lifecycle guard for search runs.
///
/// An engine is an ordinary value owned by the caller; it holds no grid
/// and no search state, only the one-active-run flag.
#[derive(Debug, Default)]
pub struct Engine {
    active: Rc<Cell<bool>>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a run from this engine is still alive.
    pub fn is_running(&self) -> bool {
        self.active.get()
    }

    /// Start a search from `start` to `end` over `grid`.
    ///
    /// The grid is frozen until the returned [`SearchRun`] is dropped
    /// or finished. Fails with [`RunError::AlreadyRunning`] while a
    /// previous run is alive, and with [`RunError::Grid`] when an
    /// endpoint is out of bounds or sits on `Blocked` terrain.
    pub fn run(
        &self,
        grid: &Grid,
        start: Coord,
        end: Coord,
        algorithm: Algorithm,
    ) -> Result<SearchRun, RunError> {
        if self.active.get() {
            return Err(RunError::AlreadyRunning);
        }
        for c in [start, end] {
            if !grid.terrain_at(c)?.passable() {
                return Err(GridError::InvalidPlacement(c).into());
            }
        }
        grid.freeze().map_err(|_| RunError::AlreadyRunning)?;
        self.active.set(true);

        log::debug!("search {start} -> {end} using {algorithm:?}");

        let state = SearchState::new(grid.side(), start);
        let mut frontier = Frontier::new();
        let key = match algorithm {
            Algorithm::Dijkstra => 0,
            Algorithm::AStar => octile(start, end, grid.cost_model()),
        };
        frontier.push(FrontierEntry {
            key,
            cost: 0,
            cell: start,
        });

        Ok(SearchRun {
            grid: grid.clone(),
            start,
            end,
            algorithm,
            state,
            frontier,
            pending: VecDeque::new(),
            outcome: None,
            active: Rc::clone(&self.active),
            released: false,
        })
    }
}

/// A single search in progress.
///
/// Iterate it to drain [`SearchEvent`]s; once the iterator is
/// exhausted, [`SearchRun::outcome`] is available. Dropping the run at
/// any point cancels it cleanly.
pub struct SearchRun {
    grid: Grid,
    start: Coord,
    end: Coord,
    algorithm: Algorithm,
    state: SearchState,
    frontier: Frontier,
    pending: VecDeque<SearchEvent>,
    outcome: Option<Outcome>,
    active: Rc<Cell<bool>>,
    released: bool,
}

impl SearchRun {
    /// The terminal outcome, `Some` once the run has terminated (there
    /// may still be buffered events to drain).
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Drain any remaining events and return the outcome.
    pub fn finish(mut self) -> Outcome {
        while self.next().is_some() {}
        let discovered = self.state.discovered_count();
        self.outcome
            .take()
            .unwrap_or(Outcome::Exhausted { discovered })
    }

    /// One frontier extraction plus its relaxations.
    fn step(&mut self) {
        let Some(entry) = self.frontier.pop() else {
            let discovered = self.state.discovered_count();
            log::debug!("frontier exhausted after {discovered} cells");
            self.settle(Outcome::Exhausted { discovered });
            return;
        };

        // Lazy stale check: the frontier is not deduplicated, so a cell
        // relaxed again after this entry was pushed leaves the old
        // entry behind with an outdated cost.
        if entry.cost > self.state.distance(entry.cell) {
            return;
        }

        // Success on extraction of the End cell: every pending frontier
        // entry now costs at least as much, so its distance is final.
        if entry.cell == self.end {
            self.succeed();
            return;
        }

        for n in entry.cell.neighbors_8() {
            let Some(step_cost) = self.grid.edge_cost(entry.cell, n) else {
                continue;
            };
            let tentative = entry.cost + step_cost;
            if tentative >= self.state.distance(n) {
                continue;
            }
            let first = self.state.relax(n, tentative, entry.cell);
            let key = match self.algorithm {
                Algorithm::Dijkstra => tentative,
                Algorithm::AStar => tentative + octile(n, self.end, self.grid.cost_model()),
            };
            self.frontier.push(FrontierEntry {
                key,
                cost: tentative,
                cell: n,
            });
            self.pending.push_back(SearchEvent::CellDiscovered {
                cell: n,
                cost: tentative,
                first,
            });
        }
    }

    fn succeed(&mut self) {
        let total = self.state.distance(self.end);
        let discovered = self.state.discovered_count();
        log::debug!("path found, cost {total}, {discovered} cells discovered");

        // Walk predecessors End -> Start, emitting path events as we go.
        let mut chain = Vec::new();
        let mut cur = self.end;
        loop {
            chain.push(cur);
            self.pending.push_back(SearchEvent::PathStep {
                cell: cur,
                remaining: total - self.state.distance(cur),
            });
            if cur == self.start {
                break;
            }
            match self.state.parent_of(cur) {
                Some(p) => cur = p,
                None => break,
            }
        }
        chain.reverse();

        self.settle(Outcome::Succeeded {
            path: chain,
            total_cost: total,
            discovered,
        });
    }

    fn settle(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.release();
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.grid.thaw();
            self.active.set(false);
        }
    }
}

impl Iterator for SearchRun {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        loop {
            if let Some(ev) = self.pending.pop_front() {
                return Some(ev);
            }
            if self.outcome.is_some() {
                return None;
            }
            self.step();
        }
    }
}

impl Drop for SearchRun {
    fn drop(&mut self) {
        self.release();
    }
}

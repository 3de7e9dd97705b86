//! **gridpath-search** — a Dijkstra/A* engine over a paintable terrain
//! grid, with an incremental event stream for visualization.
//!
//! A run proceeds in discrete steps (one frontier extraction plus its
//! relaxations per step) and surfaces each relaxation and each path
//! cell as a [`SearchEvent`]. The engine does no pacing of its own: a
//! caller animates by iterating the [`SearchRun`] at whatever rate it
//! likes, then reads the terminal [`Outcome`].
//!
//! ```
//! use gridpath_core::Grid;
//! use gridpath_search::{Algorithm, Engine, Outcome};
//!
//! let grid = Grid::new();
//! let engine = Engine::new();
//! let run = engine
//!     .run(&grid, grid.start(), grid.end(), Algorithm::Dijkstra)
//!     .unwrap();
//! match run.finish() {
//!     Outcome::Succeeded { total_cost, .. } => assert_eq!(total_cost, 266),
//!     Outcome::Exhausted { .. } => unreachable!(),
//! }
//! ```

mod engine;
mod events;
mod frontier;
mod state;

pub use engine::{Engine, RunError, SearchRun};
pub use events::{Algorithm, Outcome, SearchEvent};
pub use frontier::{Frontier, FrontierEntry};
pub use state::UNREACHABLE;

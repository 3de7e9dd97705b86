//! Events and outcomes emitted by a search run.

use gridpath_core::Coord;

/// Which ordering key drives the frontier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Plain Dijkstra: order by cumulative cost.
    #[default]
    Dijkstra,
    /// A*: order by cumulative cost plus the octile heuristic to the
    /// End cell (admissible, so results match Dijkstra's costs).
    AStar,
}

/// One step of the incremental trace, suitable for driving a
/// visualization. The engine does no pacing; consumers iterate at
/// whatever rate they like.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    /// A cell was relaxed to a new best cumulative cost. `first` is set
    /// the first time the cell is discovered in this run.
    CellDiscovered { cell: Coord, cost: i32, first: bool },
    /// One cell of the reconstructed path, emitted in End→Start order.
    /// `remaining` is the cost left from this cell to the End.
    PathStep { cell: Coord, remaining: i32 },
}

/// Terminal result of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The End cell was reached. `path` runs Start→End inclusive;
    /// `total_cost` equals the End cell's final table distance.
    Succeeded {
        path: Vec<Coord>,
        total_cost: i32,
        discovered: usize,
    },
    /// The frontier emptied before the End cell was reached: no path
    /// exists. A normal outcome, not an error.
    Exhausted { discovered: usize },
}

impl Outcome {
    /// Discovered-cell count, regardless of success.
    pub fn discovered(&self) -> usize {
        match self {
            Self::Succeeded { discovered, .. } | Self::Exhausted { discovered } => *discovered,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn event_round_trip() {
        let ev = SearchEvent::CellDiscovered {
            cell: Coord::new(3, 7),
            cost: 42,
            first: true,
        };
        let json = serde_json::to_string(&ev).unwrap();
        let back: SearchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(ev, back);
    }

    #[test]
    fn outcome_round_trip() {
        let out = Outcome::Succeeded {
            path: vec![Coord::new(0, 0), Coord::new(1, 1)],
            total_cost: 14,
            discovered: 5,
        };
        let json = serde_json::to_string(&out).unwrap();
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(out, back);
    }
}

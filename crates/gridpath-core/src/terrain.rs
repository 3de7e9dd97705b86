//! Terrain classes and the movement cost model.

/// The traversal-cost category of a cell, independent of the Start and
/// End markers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Open ground, base cost.
    #[default]
    Clear,
    /// Impassable, no edges in or out.
    Blocked,
    /// Passable at a cost multiplier.
    Water,
}

impl Terrain {
    /// Whether a cell of this terrain can be entered at all.
    #[inline]
    pub const fn passable(self) -> bool {
        !matches!(self, Terrain::Blocked)
    }
}

/// Movement costs for the 8-directional grid.
///
/// The defaults use the octile convention: orthogonal steps cost 10 and
/// diagonal steps 14 (√2 scaled by 10). Entering `Water` multiplies the
/// step cost. All costs must be strictly positive for the search's
/// non-negative-weight argument to hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    pub orthogonal: i32,
    pub diagonal: i32,
    pub water_multiplier: i32,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            orthogonal: 10,
            diagonal: 14,
            water_multiplier: 2,
        }
    }
}

impl CostModel {
    /// Cost of a step into a cell of the given terrain, or `None` if the
    /// terrain has no edges.
    #[inline]
    pub fn step_cost(&self, diagonal: bool, into: Terrain) -> Option<i32> {
        if !into.passable() {
            return None;
        }
        let base = if diagonal {
            self.diagonal
        } else {
            self.orthogonal
        };
        Some(match into {
            Terrain::Water => base * self.water_multiplier,
            _ => base,
        })
    }
}

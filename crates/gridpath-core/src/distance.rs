use crate::coord::Coord;
use crate::terrain::CostModel;

/// Chebyshev (L∞) distance between two coordinates.
#[inline]
pub fn chebyshev(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Octile distance under a cost model: the cheapest possible cost of
/// reaching `b` from `a` on an empty grid, taking diagonal steps while
/// both axes have distance left.
///
/// Uses the base (non-water) costs, and each heuristic diagonal step is
/// capped at two orthogonal steps (the search is free to go around the
/// corner when that is cheaper), so the estimate never overestimates
/// the true remaining cost and is admissible as an A* heuristic for
/// any cost model.
#[inline]
pub fn octile(a: Coord, b: Coord, costs: &CostModel) -> i32 {
    let dr = (a.row - b.row).abs();
    let dc = (a.col - b.col).abs();
    let (lo, hi) = if dr < dc { (dr, dc) } else { (dc, dr) };
    let diagonal = costs.diagonal.min(2 * costs.orthogonal);
    diagonal * lo + costs.orthogonal * (hi - lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_basic() {
        assert_eq!(chebyshev(Coord::new(0, 0), Coord::new(3, 1)), 3);
        assert_eq!(chebyshev(Coord::new(2, 2), Coord::new(2, 2)), 0);
    }

    #[test]
    fn octile_pure_diagonal() {
        let m = CostModel::default();
        assert_eq!(octile(Coord::new(0, 0), Coord::new(19, 19), &m), 19 * 14);
    }

    #[test]
    fn octile_mixed() {
        let m = CostModel::default();
        // 2 diagonal steps + 3 orthogonal.
        assert_eq!(octile(Coord::new(0, 0), Coord::new(2, 5), &m), 2 * 14 + 3 * 10);
    }

    #[test]
    fn octile_clamps_expensive_diagonal() {
        let m = CostModel {
            orthogonal: 10,
            diagonal: 25,
            water_multiplier: 2,
        };
        // A diagonal displacement is worth at most two orthogonal
        // steps, so the estimate uses 20 per diagonal, not 25.
        assert_eq!(octile(Coord::new(0, 0), Coord::new(3, 3), &m), 60);
        assert_eq!(octile(Coord::new(0, 0), Coord::new(1, 4), &m), 20 + 30);
    }

    #[test]
    fn octile_symmetric() {
        let m = CostModel::default();
        let a = Coord::new(3, 7);
        let b = Coord::new(11, 2);
        assert_eq!(octile(a, b, &m), octile(b, a, &m));
    }
}

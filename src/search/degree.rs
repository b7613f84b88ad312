use crate::board::{knight_targets, Square, VisitedSet};

/// Onward-move count: unvisited on-board squares one jump from `sq`.
/// Always in `0..=8`.
pub fn degree(sq: Square, visited: &VisitedSet) -> u8 {
    knight_targets(visited.size(), sq).filter(|&t| !visited.is_visited(t)).count() as u8
}

/// Unvisited jump targets from `from` (the candidate set of a step).
pub fn candidates(from: Square, visited: &VisitedSet) -> Vec<Square> {
    let mut out = Vec::with_capacity(8);
    for t in knight_targets(visited.size(), from) {
        if !visited.is_visited(t) { out.push(t); }
    }
    out
}

/// Candidates sharing the smallest degree, together with that degree.
/// Empty input yields `None`.
pub fn min_degree_subset(cands: &[Square], visited: &VisitedSet) -> Option<(u8, Vec<Square>)> {
    let mut best = u8::MAX;
    let mut ties: Vec<Square> = Vec::with_capacity(cands.len());
    for &c in cands {
        let d = degree(c, visited);
        if d < best { best = d; ties.clear(); }
        if d == best { ties.push(c); }
    }
    if ties.is_empty() { None } else { Some((best, ties)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_matches_candidate_enumeration() {
        let mut v = VisitedSet::new(6);
        v.mark(Square::new(0, 0));
        v.mark(Square::new(1, 2));
        v.mark(Square::new(3, 3));
        for r in 0..6 {
            for c in 0..6 {
                let sq = Square::new(r, c);
                let d = degree(sq, &v);
                assert!(d <= 8);
                assert_eq!(d as usize, candidates(sq, &v).len(), "mismatch at {sq}");
            }
        }
    }

    #[test]
    fn min_degree_keeps_all_ties() {
        // From (2,2) on an empty 5x5 board all eight targets are edge squares of degree 3
        let v = VisitedSet::new(5);
        let cands = candidates(Square::new(2, 2), &v);
        assert_eq!(cands.len(), 8);
        let (d, ties) = min_degree_subset(&cands, &v).unwrap();
        assert_eq!(d, 3);
        assert_eq!(ties.len(), 8);
        for t in &ties { assert_eq!(degree(*t, &v), d); }
        for c in &cands { assert!(degree(*c, &v) >= d); }
    }

    #[test]
    fn empty_candidates_have_no_minimum() {
        let v = VisitedSet::new(5);
        assert!(min_degree_subset(&[], &v).is_none());
    }
}

use zlattice_vec::IntVec;

use crate::seq::LatticeSeq;

/// An iterator over every vector of a lattice enumeration, yielded as
/// [`IntVec`] snapshots.
///
/// The all-zero starting vector comes first, then one vector per
/// odometer step; the iterator is fused after exhaustion. Each call to
/// [`LatticeSeq::points`] restarts from the beginning, and the order
/// and count match a manual [`LatticeSeq::advance`] loop exactly. One
/// `IntVec` is allocated per yielded point; callers that want to avoid
/// that drive `advance` over their own buffer instead.
pub struct Points<'a, S: LatticeSeq> {
    seq: &'a S,
    x: Vec<i64>,
    started: bool,
    done: bool,
    remaining: Option<u128>,
}

impl<'a, S: LatticeSeq> Points<'a, S> {
    pub(crate) fn new(seq: &'a S) -> Points<'a, S> {
        Points {
            x: seq.first(),
            started: false,
            done: false,
            remaining: seq.checked_count(),
            seq,
        }
    }
}

impl<S: LatticeSeq> Iterator for Points<'_, S> {
    type Item = IntVec;

    fn next(&mut self) -> Option<IntVec> {
        if self.done {
            return None;
        }
        if self.started && !self.seq.advance(&mut self.x) {
            self.done = true;
            return None;
        }
        self.started = true;
        if let Some(remaining) = &mut self.remaining {
            *remaining = remaining.saturating_sub(1);
        }
        Some(IntVec::new(self.x.clone()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(remaining) => match usize::try_from(remaining) {
                Ok(n) => (n, Some(n)),
                // more points than usize can hold; the lower bound is
                // still honest
                Err(_) => (usize::MAX, None),
            },
            None => (0, None),
        }
    }
}

impl<S: LatticeSeq> std::iter::FusedIterator for Points<'_, S> {}

#[cfg(test)]
mod tests {
    use zlattice_vec::IntVec;

    use crate::seq::{BoxSeq, CubeSeq, LatticeSeq};

    #[test]
    fn test_points_matches_manual_advance() {
        let seq = CubeSeq::new(3, 3).unwrap();
        let mut manual = Vec::new();
        let mut x = seq.first();
        loop {
            manual.push(IntVec::new(x.clone()));
            if !seq.advance(&mut x) {
                break;
            }
        }
        let collected: Vec<IntVec> = seq.points().collect();
        assert_eq!(collected, manual);
    }

    #[test]
    fn test_points_starts_at_zero() {
        let seq = BoxSeq::new(IntVec::new([1, 1])).unwrap();
        let points: Vec<IntVec> = seq.points().collect();
        assert_eq!(
            points,
            vec![
                IntVec::new([0, 0]),
                IntVec::new([0, 1]),
                IntVec::new([1, 0]),
                IntVec::new([1, 1]),
            ]
        );
    }

    #[test]
    fn test_points_is_fused() {
        let seq = BoxSeq::new(IntVec::zeros(2)).unwrap();
        let mut points = seq.points();
        assert_eq!(points.next(), Some(IntVec::zeros(2)));
        assert_eq!(points.next(), None);
        assert_eq!(points.next(), None);
    }

    #[test]
    fn test_size_hint_is_exact() {
        let seq = CubeSeq::new(3, 4).unwrap();
        let mut points = seq.points();
        assert_eq!(points.size_hint(), (64, Some(64)));
        points.next();
        points.next();
        assert_eq!(points.size_hint(), (62, Some(62)));
        let rest: Vec<IntVec> = points.collect();
        assert_eq!(rest.len(), 62);
    }

    #[test]
    fn test_points_restart() {
        let seq = CubeSeq::new(2, 2).unwrap();
        let first: Vec<IntVec> = seq.points().collect();
        let second: Vec<IntVec> = seq.points().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }
}

use std::cmp::Ordering;

use crate::math::Point2;

/// A point tagged with its position along a reference curve.
///
/// Ordering and equality only look at `key`, so two distinct points with
/// the same key compare equal.
#[derive(Debug, Clone, Copy)]
pub struct ComparablePoint {
    pub point: Point2,
    pub key: f64,
}

impl ComparablePoint {
    #[must_use]
    pub fn new(point: Point2, key: f64) -> Self {
        Self { point, key }
    }
}

impl PartialEq for ComparablePoint {
    fn eq(&self, other: &Self) -> bool {
        self.key.total_cmp(&other.key) == Ordering::Equal
    }
}

impl Eq for ComparablePoint {}

impl PartialOrd for ComparablePoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComparablePoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.total_cmp(&other.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_key_only() {
        let a = ComparablePoint::new(Point2::new(5.0, 5.0), 0.5);
        let b = ComparablePoint::new(Point2::new(-1.0, 0.0), 1.5);
        let c = ComparablePoint::new(Point2::new(9.0, 9.0), 0.5);
        assert!(a < b);
        assert_eq!(a, c);
        let mut v = vec![b, a];
        v.sort();
        assert_eq!(v[0].key.to_bits(), 0.5_f64.to_bits());
    }
}

//! Road relation between two cities.

use super::Budget;

/// Unordered pair of 0-based city indices.
///
/// Always stored as `(low, high)` with `low < high`, so `(a, b)` and `(b, a)`
/// name the same road and a city can never be joined to itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoadKey {
    low: usize,
    high: usize,
}

impl RoadKey {
    /// Normalise a pair. Returns `None` when both ends are the same city.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Smaller city index.
    pub fn low(&self) -> usize {
        self.low
    }

    /// Larger city index.
    pub fn high(&self) -> usize {
        self.high
    }
}

/// An existing road. A budget can only be recorded on a road that exists.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Road {
    /// Planned spend, if one has been set
    pub budget: Option<Budget>,
}

impl Road {
    /// Budget amount, `0.0` when none has been set.
    pub fn budget_amount(&self) -> f64 {
        self.budget.map(Budget::amount).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_order_independent() {
        assert_eq!(RoadKey::new(3, 1), RoadKey::new(1, 3));
        let key = RoadKey::new(3, 1).unwrap();
        assert_eq!((key.low(), key.high()), (1, 3));
    }

    #[test]
    fn self_road_rejected() {
        assert!(RoadKey::new(2, 2).is_none());
    }

    #[test]
    fn keys_sort_row_major() {
        let mut keys = vec![
            RoadKey::new(2, 1).unwrap(),
            RoadKey::new(0, 2).unwrap(),
            RoadKey::new(1, 0).unwrap(),
        ];
        keys.sort();
        let pairs: Vec<_> = keys.iter().map(|k| (k.low(), k.high())).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn unset_budget_reads_zero() {
        assert_eq!(Road::default().budget_amount(), 0.0);
    }
}

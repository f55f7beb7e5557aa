//! Edge weights and the (weight, edge-count) cost order
//!
//! `CostPair::cmp_cost` is the one comparator used by both the relaxation
//! check and the priority queue. Reachability is not encoded in the weight:
//! unreached vertices have no `CostPair` at all.

use std::cmp::Ordering;
use std::fmt::Debug;

/// A non-negative numeric edge weight.
///
/// Every value of the type is a real weight, including integer `MAX` and
/// float infinity.
pub trait Weight: Copy + PartialOrd + Debug {
    const ZERO: Self;
    const ONE: Self;

    /// Sum of two weights, `None` if it does not fit in the type.
    /// Floats never overflow (they reach infinity).
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Total comparison. Only valid for weights that passed validation (no NaN).
    fn cmp_weight(&self, other: &Self) -> Ordering;

    fn is_negative(&self) -> bool;

    fn is_nan(&self) -> bool {
        false
    }
}

macro_rules! int_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn checked_add(self, other: Self) -> Option<Self> {
                <$t>::checked_add(self, other)
            }

            fn cmp_weight(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            #[allow(unused_comparisons)]
            fn is_negative(&self) -> bool {
                *self < 0
            }
        }
    )*};
}

macro_rules! float_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn checked_add(self, other: Self) -> Option<Self> {
                Some(self + other)
            }

            // partial_cmp rather than total_cmp: -0.0 and 0.0 must tie
            fn cmp_weight(&self, other: &Self) -> Ordering {
                self.partial_cmp(other).unwrap_or(Ordering::Equal)
            }

            fn is_negative(&self) -> bool {
                *self < 0.0
            }

            fn is_nan(&self) -> bool {
                <$t>::is_nan(*self)
            }
        }
    )*};
}

int_weight!(u32, u64, usize, i32, i64);
float_weight!(f32, f64);

/// Best known (total weight, edge count) for a reached vertex
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostPair<W> {
    pub weight: W,
    pub edges: u64,
}

impl<W: Weight> CostPair<W> {
    pub const fn new(weight: W, edges: u64) -> Self {
        CostPair { weight, edges }
    }

    /// Cost of the source itself: (0, 0)
    pub const fn origin() -> Self {
        CostPair::new(W::ZERO, 0)
    }

    /// Lexicographic order: weight first, then edge count.
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        self.weight
            .cmp_weight(&other.weight)
            .then_with(|| self.edges.cmp(&other.edges))
    }

    /// Strictly better. Equal pairs are not better.
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.cmp_cost(other) == Ordering::Less
    }

    /// Strictly worse. Used to detect stale queue entries.
    pub fn is_worse_than(&self, other: &Self) -> bool {
        self.cmp_cost(other) == Ordering::Greater
    }

    /// Strictly better than the current record; any pair beats "not reached".
    pub fn improves(&self, current: Option<&Self>) -> bool {
        current.map_or(true, |best| self.is_better_than(best))
    }

    /// Cost after following one more edge, `None` if the weight overflows.
    pub fn extend(&self, edge_weight: W) -> Option<Self> {
        let weight = self.weight.checked_add(edge_weight)?;
        Some(CostPair::new(weight, self.edges + 1))
    }

    pub fn as_tuple(&self) -> (W, u64) {
        (self.weight, self.edges)
    }
}

impl<W: Weight> From<(W, u64)> for CostPair<W> {
    fn from((weight, edges): (W, u64)) -> Self {
        CostPair::new(weight, edges)
    }
}

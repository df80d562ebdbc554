use zlattice_vec::IntVec;

use crate::error::{Error, Result};
use crate::iter::Points;

/// A bounded region of the integer lattice, enumerable in odometer
/// order: the last coordinate varies fastest and carries propagate
/// toward the first.
///
/// The working vector lives with the caller; an enumerator holds only
/// its bound configuration. One enumerator can therefore drive any
/// number of independent enumerations at once, each over its own
/// buffer, with no locking.
pub trait LatticeSeq {
    /// Number of coordinates in every enumerated vector.
    fn dim(&self) -> usize;

    /// Advance `x` in place to the next vector of the enumeration.
    ///
    /// Scans from the last coordinate backward for the first one still
    /// below its ceiling, increments it, and zeroes every coordinate
    /// after it. Returns `false` once `x` is the maximum vector; `x`
    /// is then left at the maximum, not reset.
    ///
    /// `x` must have length [`dim`](LatticeSeq::dim) and hold a vector
    /// reachable by this enumeration (the all-zero vector to start);
    /// anything else is outside the contract.
    fn advance(&self, x: &mut [i64]) -> bool;

    /// Total number of vectors a full enumeration visits, the all-zero
    /// starting vector included. `None` when the count overflows
    /// `u128`.
    fn checked_count(&self) -> Option<u128>;

    /// A fresh all-zero working vector, the starting point of the
    /// enumeration.
    fn first(&self) -> Vec<i64> {
        vec![0; self.dim()]
    }

    /// Iterate over every vector of the enumeration as an [`IntVec`]
    /// snapshot, starting with the all-zero vector.
    fn points(&self) -> Points<'_, Self>
    where
        Self: Sized,
    {
        Points::new(self)
    }
}

/// The integer points of the cube `{0, .., bound - 1}^dim`: one
/// exclusive bound shared by every coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CubeSeq {
    dim: usize,
    bound: i64,
}

impl CubeSeq {
    /// Create an enumerator over `{0, .., bound - 1}^dim`.
    pub fn new(dim: usize, bound: i64) -> Result<CubeSeq> {
        if dim < 1 {
            return Err(Error::Dimension(dim));
        }
        if bound < 1 {
            return Err(Error::Bound(bound));
        }
        Ok(CubeSeq { dim, bound })
    }

    /// The exclusive upper bound applied to every coordinate.
    #[inline]
    pub fn bound(&self) -> i64 {
        self.bound
    }
}

impl LatticeSeq for CubeSeq {
    fn dim(&self) -> usize {
        self.dim
    }

    fn advance(&self, x: &mut [i64]) -> bool {
        debug_assert_eq!(x.len(), self.dim);
        for i in (0..x.len()).rev() {
            if x[i] < self.bound - 1 {
                x[i] += 1;
                for c in &mut x[i + 1..] {
                    *c = 0;
                }
                return true;
            }
        }
        false
    }

    fn checked_count(&self) -> Option<u128> {
        let dim = u32::try_from(self.dim).ok()?;
        (self.bound as u128).checked_pow(dim)
    }
}

/// The integer points of the axis-aligned box `0 <= x[i] <= bounds[i]`:
/// an independent inclusive ceiling per coordinate.
///
/// A ceiling of 0 pins its coordinate to 0; the all-zero bound vector
/// admits exactly the zero vector.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoxSeq {
    bounds: IntVec,
}

impl BoxSeq {
    /// Create an enumerator over the box with the given inclusive
    /// bounds, one per coordinate.
    pub fn new(bounds: IntVec) -> Result<BoxSeq> {
        for (index, &value) in bounds.iter().enumerate() {
            if value < 0 {
                return Err(Error::NegativeBound { index, value });
            }
        }
        Ok(BoxSeq { bounds })
    }

    /// The inclusive per-coordinate bounds.
    #[inline]
    pub fn bounds(&self) -> &IntVec {
        &self.bounds
    }
}

impl LatticeSeq for BoxSeq {
    fn dim(&self) -> usize {
        self.bounds.dim()
    }

    fn advance(&self, x: &mut [i64]) -> bool {
        debug_assert_eq!(x.len(), self.bounds.dim());
        for i in (0..x.len()).rev() {
            if x[i] < self.bounds[i] {
                x[i] += 1;
                for c in &mut x[i + 1..] {
                    *c = 0;
                }
                return true;
            }
        }
        false
    }

    fn checked_count(&self) -> Option<u128> {
        self.bounds
            .iter()
            .try_fold(1u128, |count, &b| count.checked_mul(b as u128 + 1))
    }
}

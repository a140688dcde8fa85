//! Gray successor table construction.
//!
//! For every numeral, the table stores the linear indices of all numerals
//! reachable by changing exactly one place (the Gray neighbors). Every
//! numeral has the same out-degree `K = sum(b_i - 1)`, so the table is a
//! dense `N x K` array. Rows are padded to a power-of-two stride so the hot
//! lookup is a shift and an add rather than a multiplication.
//!
//! The column order within a row is contractual (it fixes the crawler's
//! search order): for each place in ascending order, for each value of that
//! place in ascending order, skipping the row numeral's own value.

use crate::numeral::{MAX_NUMERALS, RadixVector};
use std::fmt;

// ============================================================================
// SuccessorTable
// ============================================================================

/// Dense table of Gray successors, one row per numeral.
#[derive(Clone, Debug)]
pub struct SuccessorTable {
    /// Row-major entries; `N << stride_shift` slots, padding slots zero.
    rows: Vec<u8>,
    /// Per-row shift: rows are `1 << stride_shift` slots apart.
    stride_shift: u32,
    /// Gray out-degree `K`; the number of meaningful columns per row.
    degree: usize,
    /// Number of numerals `N`.
    numerals: usize,
}

impl SuccessorTable {
    /// Builds the successor table for a radix vector.
    ///
    /// # Errors
    /// Fails with [`CapacityError::TooManyNumerals`] if the numeral count
    /// exceeds [`MAX_NUMERALS`].
    pub fn build(bases: &RadixVector) -> Result<Self, CapacityError> {
        let numerals = bases.numeral_count();
        if numerals > MAX_NUMERALS {
            return Err(CapacityError::TooManyNumerals { count: numerals });
        }
        let degree = bases.gray_degree();
        debug_assert!(degree >= 1);
        let stride_shift = degree.next_power_of_two().trailing_zeros();
        let mut rows = vec![0u8; numerals << stride_shift];

        for index in 0..numerals {
            let num = bases.unpack(index);
            let mut col = 0usize;
            for place in 0..bases.places() {
                for value in 0..bases.radix(place) {
                    if value != num.place(place) {
                        let mut succ = num;
                        succ.set_place(place, value);
                        rows[(index << stride_shift) + col] = bases.pack(&succ) as u8;
                        col += 1;
                    }
                }
            }
            debug_assert_eq!(col, degree, "row {index} has wrong successor count");
        }

        Ok(Self {
            rows,
            stride_shift,
            degree,
            numerals,
        })
    }

    /// Looks up the successor in `column` of the given numeral's row.
    #[inline(always)]
    pub fn successor(&self, numeral: usize, column: usize) -> usize {
        debug_assert!(numeral < self.numerals && column < self.degree);
        self.rows[(numeral << self.stride_shift) + column] as usize
    }

    /// The meaningful entries of one row (padding excluded).
    #[inline]
    pub fn row(&self, numeral: usize) -> &[u8] {
        let start = numeral << self.stride_shift;
        &self.rows[start..start + self.degree]
    }

    /// Gray out-degree `K`.
    #[inline(always)]
    pub const fn degree(&self) -> usize {
        self.degree
    }

    /// Per-row shift in bits.
    #[inline(always)]
    pub const fn stride_shift(&self) -> u32 {
        self.stride_shift
    }

    /// Number of numerals `N`.
    #[inline(always)]
    pub const fn numeral_count(&self) -> usize {
        self.numerals
    }

    /// Bitmask of numeral 0's successors, used for wrap prediction: bit `s`
    /// is set for every successor index `s` of numeral 0.
    ///
    /// # Errors
    /// Fails if any successor of numeral 0 has index 64 or above, since the
    /// mask is a single `u64` word.
    pub fn wrap_mask(&self) -> Result<u64, CapacityError> {
        let mut mask = 0u64;
        for &succ in self.row(0) {
            if succ >= 64 {
                return Err(CapacityError::WrapSuccessorTooHigh { successor: succ });
            }
            mask |= 1u64 << succ;
        }
        Ok(mask)
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Capacity limits violated while preparing a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapacityError {
    /// The radix vector admits more numerals than the 128-bit used mask can
    /// track.
    TooManyNumerals {
        /// The numeral count.
        count: usize,
    },
    /// A successor of numeral 0 does not fit the 64-bit wrap mask.
    WrapSuccessorTooHigh {
        /// The offending successor index.
        successor: u8,
    },
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityError::TooManyNumerals { count } => {
                write!(f, "{count} numerals exceed the crawler limit of {MAX_NUMERALS}")
            }
            CapacityError::WrapSuccessorTooHigh { successor } => {
                write!(
                    f,
                    "successor {successor} of numeral 0 does not fit the 64-bit wrap mask"
                )
            }
        }
    }
}

impl std::error::Error for CapacityError {}

// ============================================================================
// Tests
// ============================================================================

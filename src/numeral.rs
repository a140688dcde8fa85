//! Mixed-radix numerals, radix vectors, and the hexadecimal set-code syntax.
//!
//! A *numeral* is a tuple of place values `(d_0, …, d_{P-1})` with
//! `0 <= d_i < b_i` for a radix vector `B = (b_0, …, b_{P-1})`. Numerals are
//! packed to linear indices least-significant-place-first:
//! `I(d) = d_0 + d_1*b_0 + d_2*b_0*b_1 + …`.
//!
//! A *set code* compactly specifies a radix vector: each hex digit is one
//! radix, and the leftmost digit of the hexadecimal rendering corresponds to
//! the least significant place. For example, set code `0x234` produces the
//! radix vector `(2, 3, 4)`.

use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Maximum number of places in a numeral.
pub const MAX_PLACES: usize = 8;

/// Maximum numeral count a search can handle: two 64-bit used-mask words
/// minus one bit of headroom.
pub const MAX_NUMERALS: usize = 127;

/// A set code: nonzero integer whose hex digits give the radices,
/// least-significant place first (leftmost hex digit is place 0).
pub type SetCode = u64;

// ============================================================================
// Numeral
// ============================================================================

/// A mixed-radix numeral with up to [`MAX_PLACES`] places.
///
/// Places beyond the radix vector's length are always zero, so componentwise
/// equality on the full array equals equality on the meaningful places.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Numeral {
    places: [u8; MAX_PLACES],
}

impl Numeral {
    /// The all-zero numeral (linear index 0 for every radix vector).
    #[inline(always)]
    pub const fn zero() -> Self {
        Self {
            places: [0; MAX_PLACES],
        }
    }

    /// Returns the value of place `i`.
    #[inline(always)]
    pub const fn place(&self, i: usize) -> u8 {
        self.places[i]
    }

    /// Overwrites the value of place `i`.
    #[inline(always)]
    pub fn set_place(&mut self, i: usize, value: u8) {
        self.places[i] = value;
    }

    /// Returns the packed image of this numeral: all places as the bytes of
    /// a little-endian `u64`. This is the representation used by the
    /// winner-list serialization.
    #[inline(always)]
    pub const fn packed(&self) -> u64 {
        u64::from_le_bytes(self.places)
    }

    /// Reconstructs a numeral from its packed image.
    #[inline(always)]
    pub const fn from_packed(packed: u64) -> Self {
        Self {
            places: packed.to_le_bytes(),
        }
    }

    /// Returns `true` iff `self` and `other` differ in exactly one of the
    /// first `places` places (i.e. they are Gray neighbors).
    #[inline]
    pub fn is_gray_neighbor(&self, other: &Numeral, places: usize) -> bool {
        let mut diff = false;
        for i in 0..places {
            if self.places[i] != other.places[i] {
                if diff {
                    return false; // second difference; early out
                }
                diff = true;
            }
        }
        diff
    }
}

// ============================================================================
// RadixVector
// ============================================================================

/// An ordered list of per-place radices.
///
/// Invariants (enforced where stated):
/// - `places <= MAX_PLACES` (asserted by constructors),
/// - every radix fits a hex digit (`<= 15`, debug-asserted),
/// - radices `>= 2` are required by [`RadixVector::from_set_code`] and by
///   the crawler's input validation, not by [`RadixVector::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RadixVector {
    radices: [u8; MAX_PLACES],
    places: usize,
}

impl RadixVector {
    /// Creates a radix vector from a slice of radices, place 0 first.
    ///
    /// # Panics
    /// Panics if more than [`MAX_PLACES`] radices are given.
    pub fn new(radices: &[u8]) -> Self {
        assert!(
            radices.len() <= MAX_PLACES,
            "radix vector has {} places; at most {MAX_PLACES} supported",
            radices.len()
        );
        let mut arr = [0u8; MAX_PLACES];
        for (i, &b) in radices.iter().enumerate() {
            debug_assert!(b <= 15, "radix {b} at place {i} does not fit a hex digit");
            arr[i] = b;
        }
        Self {
            radices: arr,
            places: radices.len(),
        }
    }

    /// Decodes a set code into a radix vector.
    ///
    /// Hex digits are consumed from least significant to most significant;
    /// the first consumed digit becomes the *last* place, so the leftmost
    /// digit of the hexadecimal rendering ends up as place 0.
    ///
    /// # Errors
    /// Fails if the code has more than [`MAX_PLACES`] hex digits or if any
    /// digit is below 2.
    pub fn from_set_code(code: SetCode) -> Result<Self, SetCodeError> {
        if code == 0 {
            // Zero places; rejected later by place-count validation.
            return Ok(Self::new(&[]));
        }
        let digits = (64 - code.leading_zeros() as usize).div_ceil(4);
        if digits > MAX_PLACES {
            return Err(SetCodeError::TooManyPlaces { digits });
        }
        let mut radices = [0u8; MAX_PLACES];
        let mut rest = code;
        let mut places = 0usize;
        while rest != 0 {
            radices[places] = (rest & 0xf) as u8;
            places += 1;
            rest >>= 4;
        }
        // Reverse to account for the set code's big-endian digit order.
        radices[..places].reverse();
        for (place, &radix) in radices[..places].iter().enumerate() {
            if radix < 2 {
                return Err(SetCodeError::RadixTooSmall { place, radix });
            }
        }
        Ok(Self { radices, places })
    }

    /// Re-encodes this radix vector as a set code (the inverse of
    /// [`RadixVector::from_set_code`]).
    pub fn set_code(&self) -> SetCode {
        let mut code: SetCode = 0;
        for &b in self.iter() {
            code = (code << 4) | SetCode::from(b);
        }
        code
    }

    /// Number of places.
    #[inline(always)]
    pub const fn places(&self) -> usize {
        self.places
    }

    /// Radix of place `i`.
    #[inline(always)]
    pub const fn radix(&self, i: usize) -> u8 {
        self.radices[i]
    }

    /// Iterates over the radices, place 0 first.
    pub fn iter(&self) -> impl Iterator<Item = &u8> {
        self.radices[..self.places].iter()
    }

    /// Total numeral count `N = prod(b_i)`.
    pub fn numeral_count(&self) -> usize {
        self.iter().map(|&b| b as usize).product()
    }

    /// Sum of the radices.
    pub fn radix_sum(&self) -> u32 {
        self.iter().map(|&b| u32::from(b)).sum()
    }

    /// Gray out-degree `K = sum(b_i - 1)`: the number of numerals reachable
    /// from any numeral by changing exactly one place.
    pub fn gray_degree(&self) -> usize {
        self.iter().map(|&b| b as usize - 1).sum()
    }

    /// Packs a numeral into its linear index.
    #[inline]
    pub fn pack(&self, num: &Numeral) -> usize {
        debug_assert!(self.places > 0);
        let mut index = num.place(self.places - 1) as usize;
        for place in (0..self.places - 1).rev() {
            index = index * self.radices[place] as usize + num.place(place) as usize;
        }
        index
    }

    /// Unpacks a linear index into its numeral.
    #[inline]
    pub fn unpack(&self, mut index: usize) -> Numeral {
        let mut num = Numeral::zero();
        for place in 0..self.places {
            let radix = self.radices[place] as usize;
            num.set_place(place, (index % radix) as u8);
            index /= radix;
        }
        num
    }

    /// Returns all representable numerals in linear-index order.
    pub fn enumerate(&self) -> Vec<Numeral> {
        (0..self.numeral_count()).map(|i| self.unpack(i)).collect()
    }
}

impl fmt::Display for RadixVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for &b in self.iter() {
            write!(f, "{b:X}")?;
        }
        write!(f, "]")
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors encountered while decoding a set code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetCodeError {
    /// The code has more hex digits than [`MAX_PLACES`].
    TooManyPlaces {
        /// Number of hex digits in the code.
        digits: usize,
    },
    /// A hex digit (radix) is below the binary minimum.
    RadixTooSmall {
        /// Place index of the offending digit.
        place: usize,
        /// The offending radix.
        radix: u8,
    },
}

impl fmt::Display for SetCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetCodeError::TooManyPlaces { digits } => {
                write!(f, "set code has {digits} places; at most {MAX_PLACES} supported")
            }
            SetCodeError::RadixTooSmall { place, radix } => {
                write!(f, "radix {radix} at place {place} is too small; must be at least 2")
            }
        }
    }
}

impl std::error::Error for SetCodeError {}

// ============================================================================
// Tests
// ============================================================================

//! Winner records and the winner-list text serialization.
//!
//! A [`Winner`] is the immutable result of one search: the set code, the
//! metrics of the best cycle found, whether the search ran to exhaustion,
//! and the cycle itself.
//!
//! The winner-list format is whitespace-separated text: a header of
//! `<record-size> <count>` followed by `count` records, each
//! `<setcode-hex> <places> <radix-sum> <imbalance> <max-trans> <max-span>
//! [<std-dev>] <proven 0|1> <n> <packed-numeral-hex> x n`.
//! The record-size field is a schema sanity gate: readers refuse input whose
//! producer had a different in-memory record layout. The std-dev column is
//! present iff the producer tracked standard deviations; producers and
//! consumers must agree on that flag.

use crate::metrics::CycleMetrics;
use crate::numeral::{Numeral, SetCode};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::mem;
use std::path::Path;
use std::str::SplitAsciiWhitespace;

// ============================================================================
// Winner
// ============================================================================

/// The result of one completed or cancelled search.
#[derive(Clone, Debug, PartialEq)]
pub struct Winner {
    /// The set code searched.
    pub set_code: SetCode,
    /// Number of places.
    pub places: u32,
    /// Sum of the radices.
    pub radix_sum: u32,
    /// Best imbalance found.
    pub imbalance: u32,
    /// Best maximum transition count found.
    pub max_trans: u32,
    /// Best maximum span found.
    pub max_span: u32,
    /// Best standard deviation found (0 when untracked).
    pub std_dev: f64,
    /// `true` iff the crawl ran to exhaustion without cancellation.
    pub proven: bool,
    /// The winning cycle; empty if no candidate was recorded.
    pub sequence: Vec<Numeral>,
}

impl Winner {
    /// The recorded metrics as a [`CycleMetrics`] value.
    pub fn metrics(&self) -> CycleMetrics {
        CycleMetrics {
            imbalance: self.imbalance,
            max_trans: self.max_trans,
            max_span: self.max_span,
            std_dev: self.std_dev,
        }
    }

    /// Number of numerals in the recorded cycle.
    pub fn numeral_count(&self) -> usize {
        self.sequence.len()
    }
}

/// The record-size value written to and checked against list headers.
#[inline]
pub fn record_size() -> usize {
    mem::size_of::<Winner>()
}

// ============================================================================
// Writing
// ============================================================================

/// Writes a winner list to a writer.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_winner_list<W: Write>(
    mut w: W,
    winners: &[Winner],
    track_std_dev: bool,
) -> io::Result<()> {
    writeln!(w, "{} {}", record_size(), winners.len())?;
    for winner in winners {
        write!(
            w,
            "{:x} {} {} {} {} {}",
            winner.set_code,
            winner.places,
            winner.radix_sum,
            winner.imbalance,
            winner.max_trans,
            winner.max_span
        )?;
        if track_std_dev {
            write!(w, " {}", winner.std_dev)?;
        }
        write!(w, " {} {}", u8::from(winner.proven), winner.sequence.len())?;
        for num in &winner.sequence {
            write!(w, " {:x}", num.packed())?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Writes a winner list to a file.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn save_winner_list(
    path: impl AsRef<Path>,
    winners: &[Winner],
    track_std_dev: bool,
) -> Result<(), WinnerListError> {
    let file = File::create(path).map_err(|e| WinnerListError::Io(e.to_string()))?;
    write_winner_list(BufWriter::new(file), winners, track_std_dev)
        .map_err(|e| WinnerListError::Io(e.to_string()))
}

// ============================================================================
// Reading
// ============================================================================

/// Reads a winner list from a reader.
///
/// # Errors
/// Fails with [`WinnerListError::SizeMismatch`] if the header's record size
/// differs from this build's (no partial data is returned), or with
/// [`WinnerListError::Malformed`] on any parse failure.
pub fn read_winner_list<R: Read>(
    mut r: R,
    track_std_dev: bool,
) -> Result<Vec<Winner>, WinnerListError> {
    let mut text = String::new();
    r.read_to_string(&mut text)
        .map_err(|e| WinnerListError::Io(e.to_string()))?;
    let mut tokens = Tokens::new(&text);

    let size = tokens.parse_usize("record size")?;
    let count = tokens.parse_usize("record count")?;
    if size != record_size() {
        return Err(WinnerListError::SizeMismatch {
            expected: record_size(),
            got: size,
        });
    }

    let mut winners = Vec::with_capacity(count);
    for _ in 0..count {
        let set_code = tokens.parse_hex("set code")?;
        let places = tokens.parse_u32("place count")?;
        let radix_sum = tokens.parse_u32("radix sum")?;
        let imbalance = tokens.parse_u32("imbalance")?;
        let max_trans = tokens.parse_u32("max transition count")?;
        let max_span = tokens.parse_u32("max span")?;
        let std_dev = if track_std_dev {
            tokens.parse_f64("standard deviation")?
        } else {
            0.0
        };
        let proven = tokens.parse_u32("proven flag")? != 0;
        let n = tokens.parse_usize("numeral count")?;
        let mut sequence = Vec::with_capacity(n);
        for _ in 0..n {
            sequence.push(Numeral::from_packed(tokens.parse_hex("packed numeral")?));
        }
        winners.push(Winner {
            set_code,
            places,
            radix_sum,
            imbalance,
            max_trans,
            max_span,
            std_dev,
            proven,
            sequence,
        });
    }
    Ok(winners)
}

/// Reads a winner list from a file.
///
/// # Errors
/// As [`read_winner_list`], plus I/O failures opening the file.
pub fn load_winner_list(
    path: impl AsRef<Path>,
    track_std_dev: bool,
) -> Result<Vec<Winner>, WinnerListError> {
    let file = File::open(path).map_err(|e| WinnerListError::Io(e.to_string()))?;
    read_winner_list(file, track_std_dev)
}

/// Sequential whitespace token cursor over the serialized text.
struct Tokens<'a> {
    iter: SplitAsciiWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_ascii_whitespace(),
        }
    }

    fn next(&mut self, what: &str) -> Result<&'a str, WinnerListError> {
        self.iter
            .next()
            .ok_or_else(|| WinnerListError::Malformed(format!("missing {what}")))
    }

    fn parse_usize(&mut self, what: &str) -> Result<usize, WinnerListError> {
        let token = self.next(what)?;
        token
            .parse()
            .map_err(|_| WinnerListError::Malformed(format!("bad {what}: {token:?}")))
    }

    fn parse_u32(&mut self, what: &str) -> Result<u32, WinnerListError> {
        let token = self.next(what)?;
        token
            .parse()
            .map_err(|_| WinnerListError::Malformed(format!("bad {what}: {token:?}")))
    }

    fn parse_hex(&mut self, what: &str) -> Result<u64, WinnerListError> {
        let token = self.next(what)?;
        u64::from_str_radix(token, 16)
            .map_err(|_| WinnerListError::Malformed(format!("bad {what}: {token:?}")))
    }

    fn parse_f64(&mut self, what: &str) -> Result<f64, WinnerListError> {
        let token = self.next(what)?;
        token
            .parse()
            .map_err(|_| WinnerListError::Malformed(format!("bad {what}: {token:?}")))
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors encountered while reading or writing winner lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WinnerListError {
    /// I/O failure (file not found, write error, etc.).
    Io(String),
    /// The header's record size does not match this build's record layout.
    SizeMismatch {
        /// This build's record size.
        expected: usize,
        /// The record size in the header.
        got: usize,
    },
    /// A token was missing or failed to parse.
    Malformed(String),
}

impl fmt::Display for WinnerListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinnerListError::Io(msg) => write!(f, "I/O error: {msg}"),
            WinnerListError::SizeMismatch { expected, got } => write!(
                f,
                "winner record size mismatch: file says {got}, this build expects {expected}"
            ),
            WinnerListError::Malformed(msg) => write!(f, "malformed winner list: {msg}"),
        }
    }
}

impl std::error::Error for WinnerListError {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeral::RadixVector;

    fn sample_winner(code: SetCode, std_dev: f64) -> Winner {
        let bases = RadixVector::from_set_code(code).unwrap();
        Winner {
            set_code: code,
            places: bases.places() as u32,
            radix_sum: bases.radix_sum(),
            imbalance: 0,
            max_trans: 2,
            max_span: 2,
            std_dev,
            proven: true,
            sequence: [0usize, 1, 3, 2].iter().map(|&i| bases.unpack(i)).collect(),
        }
    }

    // -------------------------------------------------------------------------
    // Round-trip tests
    // -------------------------------------------------------------------------

    #[test]
    fn roundtrip_with_std_dev() {
        let winners = vec![sample_winner(0x22, 0.5), sample_winner(0x22, 0.816_496_6)];
        let mut buf = Vec::new();
        write_winner_list(&mut buf, &winners, true).unwrap();
        let back = read_winner_list(buf.as_slice(), true).unwrap();
        assert_eq!(back, winners);
    }

    #[test]
    fn roundtrip_without_std_dev() {
        let winners = vec![sample_winner(0x22, 0.0)];
        let mut buf = Vec::new();
        write_winner_list(&mut buf, &winners, false).unwrap();
        let back = read_winner_list(buf.as_slice(), false).unwrap();
        assert_eq!(back, winners);
    }

    #[test]
    fn roundtrip_empty_list() {
        let mut buf = Vec::new();
        write_winner_list(&mut buf, &[], true).unwrap();
        let back = read_winner_list(buf.as_slice(), true).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn roundtrip_unproven_and_empty_sequence() {
        let mut winner = sample_winner(0x22, 0.25);
        winner.proven = false;
        winner.sequence.clear();
        let mut buf = Vec::new();
        write_winner_list(&mut buf, std::slice::from_ref(&winner), true).unwrap();
        let back = read_winner_list(buf.as_slice(), true).unwrap();
        assert_eq!(back, vec![winner]);
    }

    // -------------------------------------------------------------------------
    // Header gate tests
    // -------------------------------------------------------------------------

    #[test]
    fn size_mismatch_is_rejected() {
        let winners = vec![sample_winner(0x22, 0.5)];
        let mut buf = Vec::new();
        write_winner_list(&mut buf, &winners, true).unwrap();
        // Corrupt the record-size header field.
        let text = String::from_utf8(buf).unwrap();
        let corrupted = text.replacen(&record_size().to_string(), "12345", 1);
        let err = read_winner_list(corrupted.as_bytes(), true).unwrap_err();
        assert_eq!(
            err,
            WinnerListError::SizeMismatch {
                expected: record_size(),
                got: 12345
            }
        );
    }

    #[test]
    fn malformed_token_is_rejected() {
        let text = format!("{} 1\nnot-hex 2 4 0 2 2 0.0 1 0\n", record_size());
        let err = read_winner_list(text.as_bytes(), true).unwrap_err();
        assert!(matches!(err, WinnerListError::Malformed(_)));
    }

    #[test]
    fn truncated_input_is_rejected() {
        let winners = vec![sample_winner(0x22, 0.5)];
        let mut buf = Vec::new();
        write_winner_list(&mut buf, &winners, true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let cut = &text[..text.len() - 4];
        let err = read_winner_list(cut.as_bytes(), true).unwrap_err();
        assert!(matches!(err, WinnerListError::Malformed(_)));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = read_winner_list(&b""[..], true).unwrap_err();
        assert!(matches!(err, WinnerListError::Malformed(_)));
    }

    // -------------------------------------------------------------------------
    // Format details
    // -------------------------------------------------------------------------

    #[test]
    fn std_dev_column_present_iff_tracked() {
        let winners = vec![sample_winner(0x22, 0.5)];
        let mut with = Vec::new();
        write_winner_list(&mut with, &winners, true).unwrap();
        let mut without = Vec::new();
        write_winner_list(&mut without, &winners, false).unwrap();

        let with = String::from_utf8(with).unwrap();
        let without = String::from_utf8(without).unwrap();
        let with_fields = with.lines().nth(1).unwrap().split_whitespace().count();
        let without_fields = without.lines().nth(1).unwrap().split_whitespace().count();
        assert_eq!(with_fields, without_fields + 1);
    }

    #[test]
    fn set_code_and_numerals_are_hex() {
        let winner = sample_winner(0x2A, 0.0);
        let mut buf = Vec::new();
        write_winner_list(&mut buf, std::slice::from_ref(&winner), true).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("2a "));
    }
}

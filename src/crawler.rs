//! The iterative depth-first crawler for balanced Gray cycles.
//!
//! The crawl enumerates Hamiltonian cycles of the Gray graph starting at
//! numeral 0, using an explicit stack of frames instead of recursion so the
//! depth can reach the full numeral count without touching the call stack.
//! Each frame carries the numeral placed at that depth, the next successor
//! column to try, and the per-place transition counts accumulated along the
//! path so far (wrap excluded).
//!
//! Branches are discarded three ways:
//! - a candidate already on the path (used-mask test),
//! - *wrap prediction*: once every successor of numeral 0 is on the path,
//!   no extension can close the cycle, so the candidate is rejected; at the
//!   leaf this same test is exactly the cycle-closure check,
//! - *threshold pruning* at interior depths on the path transition counts.
//!
//! At a leaf the wrap-adjusted metrics are measured and compared to the
//! best under the configured [`OptMode`]; strictly better candidates
//! overwrite the best (and are logged), ties are rejected, so the first
//! optimum in successor-column order is the one retained.

use crate::gray::{CapacityError, SuccessorTable};
use crate::metrics::{self, CycleMetrics, OptMode};
use crate::numeral::{MAX_PLACES, Numeral, RadixVector, SetCode, SetCodeError};
use crate::sync::CancelToken;
use crate::winner::Winner;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

// ============================================================================
// Configuration
// ============================================================================

/// Which depth the crawl starts at.
///
/// All Gray cycles from numeral 0 visit some Gray neighbor of 0 at depth 1;
/// [`StartDepth::Two`] canonicalizes over reflections by pinning that
/// neighbor to numeral 1 and starting the crawl at depth 2. The reachable
/// cycle set is complete up to that canonicalization; the recorded winner
/// may differ from [`StartDepth::One`]'s, but not its objective value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartDepth {
    /// Only numeral 0 is pre-placed.
    One,
    /// Numerals 0 and 1 are pre-placed.
    #[default]
    Two,
}

impl StartDepth {
    /// The first free depth of the crawl.
    #[inline]
    pub const fn depth(self) -> usize {
        match self {
            StartDepth::One => 1,
            StartDepth::Two => 2,
        }
    }
}

/// Search configuration parameters.
#[derive(Clone, Copy, Debug)]
pub struct CrawlConfig {
    /// Prune an interior branch if its maximum transition count exceeds
    /// this threshold. `u32::MAX` disables the check.
    pub prune_max_trans: u32,
    /// Prune an interior branch if its imbalance exceeds this threshold.
    /// `u32::MAX` disables the check. Pruning greatly reduces runtime, but
    /// winners on pruned searches are only optimal within the thresholds.
    pub prune_imbalance: u32,
    /// The lexicographic objective ordering candidates.
    pub opt_mode: OptMode,
    /// Abandon branches that can no longer wrap around to numeral 0.
    pub wrap_predict: bool,
    /// How many numerals are pre-placed before the crawl.
    pub start_depth: StartDepth,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            prune_max_trans: u32::MAX,
            prune_imbalance: 3,
            opt_mode: OptMode::default(),
            wrap_predict: true,
            start_depth: StartDepth::default(),
        }
    }
}

// ============================================================================
// Crawler state
// ============================================================================

/// One crawler stack element.
#[derive(Clone, Copy, Debug, Default)]
struct Frame {
    /// Index into the numeral array of the numeral placed at this depth.
    num: u8,
    /// Next successor column to try at this depth.
    col: u8,
    /// Per-place transition counts just after the step into this depth,
    /// wrap excluded.
    trans: [u8; MAX_PLACES],
}

/// Set of numeral indices on the current path, as two 64-bit words.
#[derive(Clone, Copy, Debug, Default)]
struct UsedMask {
    words: [u64; 2],
}

impl UsedMask {
    #[inline(always)]
    fn set(&mut self, index: usize) {
        self.words[index >> 6] |= 1u64 << (index & 63);
    }

    #[inline(always)]
    fn clear(&mut self, index: usize) {
        self.words[index >> 6] &= !(1u64 << (index & 63));
    }

    #[inline(always)]
    fn test(&self, index: usize) -> bool {
        self.words[index >> 6] & (1u64 << (index & 63)) != 0
    }

    /// The word covering numeral indices 0..63, where every successor of
    /// numeral 0 lives when wrap prediction is enabled.
    #[inline(always)]
    fn low_word(&self) -> u64 {
        self.words[0]
    }
}

// ============================================================================
// GrayCrawler
// ============================================================================

/// The search engine for one set code at a time.
///
/// The numeral array, successor table, and stack are rebuilt from scratch on
/// every [`GrayCrawler::calc`]. The optional per-search log stream is opened
/// at construction and flushed when a crawl finishes.
///
/// The cancel token is sticky: once cancelled, later crawls on the same
/// instance terminate immediately. Build one crawler per search (as the
/// driver does) when using timeouts.
pub struct GrayCrawler {
    config: CrawlConfig,
    cancel: CancelToken,
    log: Option<BufWriter<File>>,
    log_failed: bool,
}

impl GrayCrawler {
    /// Creates a crawler without a log stream.
    pub fn new(config: CrawlConfig) -> Self {
        Self {
            config,
            cancel: CancelToken::new(),
            log: None,
            log_failed: false,
        }
    }

    /// Creates a crawler logging improvements to the file at `path`.
    ///
    /// # Errors
    /// Fails with [`CrawlError::Io`] if the file cannot be created.
    pub fn create(path: impl AsRef<Path>, config: CrawlConfig) -> Result<Self, CrawlError> {
        let file = File::create(path.as_ref()).map_err(|e| {
            CrawlError::Io(format!(
                "can't open log file '{}': {e}",
                path.as_ref().display()
            ))
        })?;
        Ok(Self {
            config,
            cancel: CancelToken::new(),
            log: Some(BufWriter::new(file)),
            log_failed: false,
        })
    }

    /// A handle to this crawler's cancel flag, for a supervisor to raise.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Decodes a set code and runs the search.
    ///
    /// # Errors
    /// As [`GrayCrawler::calc`], plus set-code decoding failures.
    pub fn calc_from_code(&mut self, code: SetCode) -> Result<Winner, CrawlError> {
        let bases = RadixVector::from_set_code(code)?;
        self.calc(&bases)
    }

    /// Runs the search for one radix vector until exhaustion or
    /// cancellation and returns the winner.
    ///
    /// A cancelled crawl is not an error: the returned winner carries the
    /// best candidate observed so far with `proven = false`.
    ///
    /// # Errors
    /// Fails on invalid input (place count, radices, capacity) before any
    /// crawling happens.
    pub fn calc(&mut self, bases: &RadixVector) -> Result<Winner, CrawlError> {
        let places = bases.places();
        if !(2..=MAX_PLACES).contains(&places) {
            return Err(CrawlError::InvalidPlaceCount { got: places });
        }
        for (place, &radix) in bases.iter().enumerate() {
            if radix < 2 {
                return Err(CrawlError::RadixTooSmall { place, radix });
            }
        }
        let cfg = self.config;
        let set_code = bases.set_code();
        let table = SuccessorTable::build(bases)?;
        let n = table.numeral_count();
        let degree = table.degree();
        let numerals = bases.enumerate();
        let wrap_mask = if cfg.wrap_predict {
            Some(table.wrap_mask()?)
        } else {
            None
        };

        println!("{bases}");
        println!("places = {places}");
        println!("states = {n}");

        let track_sd = cfg.opt_mode.tracks_std_dev();
        let cancel = self.cancel.clone();
        let start_depth = cfg.start_depth.depth();

        let mut stack = vec![Frame::default(); n];
        let mut path = vec![Numeral::zero(); n];
        let mut used = UsedMask::default();
        let mut best = CycleMetrics::unbeaten();
        let mut best_perm = vec![0u8; n];
        let mut have_best = false;

        // Depth 0 is always numeral 0 with zero counts; start depth 2 also
        // pins numeral 1, whose single transition is in place 0.
        path[0] = numerals[0];
        used.set(0);
        if start_depth == 2 {
            stack[1].num = 1;
            stack[1].trans[0] = 1;
            path[1] = numerals[1];
            used.set(1);
        }
        let mut depth = start_depth;
        stack[depth].col = 0;

        while !cancel.is_cancelled() {
            let col = stack[depth].col as usize;
            if col >= degree {
                // Columns exhausted: back up a level.
                if depth == start_depth {
                    break;
                }
                depth -= 1;
                used.clear(stack[depth].num as usize);
                stack[depth].col += 1;
                continue;
            }
            let prev = stack[depth - 1].num as usize;
            let cand = table.successor(prev, col);
            if used.test(cand) {
                stack[depth].col += 1;
                continue;
            }
            if let Some(mask) = wrap_mask {
                // Every successor of numeral 0 is already on the path, so
                // the branch cannot wrap. At the leaf this is exactly the
                // cycle-closure test.
                if used.low_word() & mask == mask {
                    stack[depth].col += 1;
                    continue;
                }
            }
            let cand_num = numerals[cand];
            let prev_num = path[depth - 1];
            let mut trans = stack[depth - 1].trans;
            for place in 0..places {
                if cand_num.place(place) != prev_num.place(place) {
                    trans[place] += 1;
                }
            }
            if depth < n - 1 {
                let (min, max) = min_max_u8(&trans[..places]);
                if u32::from(max) > cfg.prune_max_trans
                    || u32::from(max - min) > cfg.prune_imbalance
                {
                    stack[depth].col += 1;
                    continue;
                }
                stack[depth].num = cand as u8;
                stack[depth].trans = trans;
                path[depth] = cand_num;
                used.set(cand);
                depth += 1;
                stack[depth].col = 0;
                continue;
            }
            // Leaf: complete permutation, a potential winner.
            if wrap_mask.is_none() && !cand_num.is_gray_neighbor(&numerals[0], places) {
                stack[depth].col += 1;
                continue;
            }
            path[depth] = cand_num;
            // Wrap adjustment: the step back to numeral 0 transitions every
            // nonzero place of the leaf numeral.
            let mut wrapped = trans;
            for place in 0..places {
                if cand_num.place(place) != 0 {
                    wrapped[place] += 1;
                }
            }
            let (min, max) = min_max_u8(&wrapped[..places]);
            let max_trans = u32::from(max);
            let imbalance = u32::from(max - min);
            if (max_trans, imbalance) > (best.max_trans, best.imbalance) {
                // The span scans cannot rescue a worse prefix.
                stack[depth].col += 1;
                continue;
            }
            let candidate = CycleMetrics {
                imbalance,
                max_trans,
                max_span: metrics::max_span(&path, places),
                std_dev: if track_sd {
                    metrics::std_dev(&path, places)
                } else {
                    0.0
                },
            };
            if candidate.improves(&best, cfg.opt_mode) {
                best = candidate;
                have_best = true;
                stack[depth].num = cand as u8;
                for (slot, frame) in best_perm.iter_mut().zip(stack.iter()) {
                    *slot = frame.num;
                }
                self.report_improvement(&candidate, track_sd, &path, places);
            }
            stack[depth].col += 1;
        }

        let proven = !cancel.is_cancelled();
        self.flush_log();

        let sequence = if have_best {
            best_perm.iter().map(|&i| numerals[i as usize]).collect()
        } else {
            Vec::new()
        };
        Ok(Winner {
            set_code,
            places: places as u32,
            radix_sum: bases.radix_sum(),
            imbalance: best.imbalance,
            max_trans: best.max_trans,
            max_span: best.max_span,
            std_dev: if track_sd { best.std_dev } else { 0.0 },
            proven,
            sequence,
        })
    }

    /// Prints a new best to stdout and appends it to the log stream.
    fn report_improvement(
        &mut self,
        m: &CycleMetrics,
        track_sd: bool,
        path: &[Numeral],
        places: usize,
    ) {
        if track_sd {
            println!(
                "balance = {}, maxtrans = {}, maxspan = {}, stddev = {}",
                m.imbalance, m.max_trans, m.max_span, m.std_dev
            );
        } else {
            println!(
                "balance = {}, maxtrans = {}, maxspan = {}",
                m.imbalance, m.max_trans, m.max_span
            );
        }
        if self.log_failed {
            return;
        }
        if let Some(w) = self.log.as_mut() {
            if let Err(e) = write_improvement(w, m, track_sd, path, places) {
                // Report once; the crawl itself keeps running.
                eprintln!("can't write log file: {e}");
                self.log_failed = true;
            }
        }
    }

    fn flush_log(&mut self) {
        if let Some(w) = self.log.as_mut() {
            let _ = w.flush();
        }
    }
}

/// One log entry: the balance line, then one row per place with the step
/// values across the cycle, then a blank line.
fn write_improvement<W: Write>(
    w: &mut W,
    m: &CycleMetrics,
    track_sd: bool,
    path: &[Numeral],
    places: usize,
) -> io::Result<()> {
    if track_sd {
        writeln!(
            w,
            "balance = {}, maxtrans = {}, maxspan = {}, stddev = {}",
            m.imbalance, m.max_trans, m.max_span, m.std_dev
        )?;
    } else {
        writeln!(
            w,
            "balance = {}, maxtrans = {}, maxspan = {}",
            m.imbalance, m.max_trans, m.max_span
        )?;
    }
    for place in 0..places {
        for num in path {
            write!(w, "{} ", num.place(place))?;
        }
        writeln!(w)?;
    }
    writeln!(w)
}

/// Minimum and maximum of a non-empty slice of byte counts.
#[inline]
fn min_max_u8(counts: &[u8]) -> (u8, u8) {
    debug_assert!(!counts.is_empty());
    let mut min = counts[0];
    let mut max = counts[0];
    for &c in &counts[1..] {
        min = min.min(c);
        max = max.max(c);
    }
    (min, max)
}

// ============================================================================
// Errors
// ============================================================================

/// Errors that stop a search before any crawling happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CrawlError {
    /// The set code has more hex digits than the place limit.
    InvalidSetCode {
        /// Number of hex digits in the code.
        digits: usize,
    },
    /// The place count is outside `2..=8`.
    InvalidPlaceCount {
        /// The offending place count.
        got: usize,
    },
    /// Some radix is below the binary minimum.
    RadixTooSmall {
        /// Place index of the offending radix.
        place: usize,
        /// The offending radix.
        radix: u8,
    },
    /// The configuration exceeds the crawler's bitmask capacity.
    CapacityExceeded(CapacityError),
    /// The per-search log file cannot be opened.
    Io(String),
}

impl fmt::Display for CrawlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrawlError::InvalidSetCode { digits } => {
                write!(f, "invalid set code: {digits} hex digits; at most {MAX_PLACES} supported")
            }
            CrawlError::InvalidPlaceCount { got } => {
                write!(f, "invalid place count {got}; must be between 2 and {MAX_PLACES}")
            }
            CrawlError::RadixTooSmall { place, radix } => {
                write!(f, "radix {radix} at place {place} is too small; must be at least 2")
            }
            CrawlError::CapacityExceeded(inner) => write!(f, "capacity exceeded: {inner}"),
            CrawlError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for CrawlError {}

impl From<SetCodeError> for CrawlError {
    fn from(err: SetCodeError) -> Self {
        match err {
            SetCodeError::TooManyPlaces { digits } => CrawlError::InvalidSetCode { digits },
            SetCodeError::RadixTooSmall { place, radix } => {
                CrawlError::RadixTooSmall { place, radix }
            }
        }
    }
}

impl From<CapacityError> for CrawlError {
    fn from(err: CapacityError) -> Self {
        CrawlError::CapacityExceeded(err)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_winner;

    fn search(code: SetCode, config: CrawlConfig) -> Winner {
        GrayCrawler::new(config).calc_from_code(code).unwrap()
    }

    // -------------------------------------------------------------------------
    // Reference scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn set_0x22_winner() {
        let winner = search(0x22, CrawlConfig::default());
        assert!(winner.proven);
        assert_eq!(winner.imbalance, 0);
        assert_eq!(winner.max_trans, 2);
        assert_eq!(winner.max_span, 2);
        assert!(winner.std_dev.abs() < 1e-12);
        assert_eq!(winner.numeral_count(), 4);
        validate_winner(&winner).unwrap();
    }

    #[test]
    fn set_0x23_winner() {
        let winner = search(0x23, CrawlConfig::default());
        assert!(winner.proven);
        assert_eq!(winner.imbalance, 2);
        assert_eq!(winner.max_trans, 4);
        assert_eq!(winner.max_span, 3);
        validate_winner(&winner).unwrap();
    }

    #[test]
    fn set_0x33_winner() {
        let winner = search(0x33, CrawlConfig::default());
        assert!(winner.proven);
        assert_eq!(winner.imbalance, 1);
        assert_eq!(winner.max_trans, 5);
        validate_winner(&winner).unwrap();
    }

    #[test]
    fn winner_record_fields() {
        let winner = search(0x23, CrawlConfig::default());
        assert_eq!(winner.set_code, 0x23);
        assert_eq!(winner.places, 2);
        assert_eq!(winner.radix_sum, 5);
        // Canonical start: numerals 0 and 1 open every recorded cycle.
        assert_eq!(winner.sequence[0], Numeral::zero());
        assert_eq!(winner.sequence[1].place(0), 1);
    }

    // -------------------------------------------------------------------------
    // Invalid inputs
    // -------------------------------------------------------------------------

    #[test]
    fn radix_below_two_is_rejected() {
        let err = GrayCrawler::new(CrawlConfig::default())
            .calc_from_code(0x1)
            .unwrap_err();
        assert_eq!(err, CrawlError::RadixTooSmall { place: 0, radix: 1 });
    }

    #[test]
    fn nine_digit_code_is_rejected() {
        let err = GrayCrawler::new(CrawlConfig::default())
            .calc_from_code(0x2_2222_2222)
            .unwrap_err();
        assert_eq!(err, CrawlError::InvalidSetCode { digits: 9 });
    }

    #[test]
    fn single_place_is_rejected() {
        let err = GrayCrawler::new(CrawlConfig::default())
            .calc_from_code(0x4)
            .unwrap_err();
        assert_eq!(err, CrawlError::InvalidPlaceCount { got: 1 });
    }

    #[test]
    fn zero_code_is_rejected() {
        let err = GrayCrawler::new(CrawlConfig::default())
            .calc_from_code(0)
            .unwrap_err();
        assert_eq!(err, CrawlError::InvalidPlaceCount { got: 0 });
    }

    #[test]
    fn eight_places_pass_count_validation() {
        // Eight places is the place-count ceiling, but even all-binary
        // radices then overflow the 127-numeral mask, so the rejection
        // comes from the capacity check rather than the place count.
        let bases = RadixVector::new(&[2; 8]);
        let err = GrayCrawler::new(CrawlConfig::default())
            .calc(&bases)
            .unwrap_err();
        assert_eq!(
            err,
            CrawlError::CapacityExceeded(CapacityError::TooManyNumerals { count: 256 })
        );
    }

    #[test]
    fn capacity_overflow_is_rejected() {
        let err = GrayCrawler::new(CrawlConfig::default())
            .calc_from_code(0x288)
            .unwrap_err();
        assert_eq!(
            err,
            CrawlError::CapacityExceeded(CapacityError::TooManyNumerals { count: 128 })
        );
    }

    #[test]
    fn wrap_mask_overflow_is_rejected() {
        // B = (2, 2, 2, 15): the place-3 successors of numeral 0 with
        // values 8 and up have indices 64 and beyond the wrap mask.
        let err = GrayCrawler::new(CrawlConfig::default())
            .calc_from_code(0x222F)
            .unwrap_err();
        assert!(matches!(
            err,
            CrawlError::CapacityExceeded(CapacityError::WrapSuccessorTooHigh { .. })
        ));
        // With wrap prediction off the same configuration is searchable.
        let config = CrawlConfig {
            wrap_predict: false,
            ..CrawlConfig::default()
        };
        let mut crawler = GrayCrawler::new(config);
        let cancel = crawler.cancel_token();
        cancel.cancel(); // don't actually crawl 120 numerals here
        assert!(crawler.calc_from_code(0x222F).is_ok());
    }

    // -------------------------------------------------------------------------
    // Metric consistency
    // -------------------------------------------------------------------------

    #[test]
    fn recorded_metrics_match_independent_recomputation() {
        for code in [0x22u64, 0x23, 0x24, 0x33] {
            let winner = search(code, CrawlConfig::default());
            let measured = CycleMetrics::measure(&winner.sequence, winner.places as usize);
            assert_eq!(winner.imbalance, measured.imbalance, "{code:X}");
            assert_eq!(winner.max_trans, measured.max_trans, "{code:X}");
            assert_eq!(winner.max_span, measured.max_span, "{code:X}");
            assert!((winner.std_dev - measured.std_dev).abs() < 1e-9, "{code:X}");
        }
    }

    // -------------------------------------------------------------------------
    // Canonicalization and pruning soundness
    // -------------------------------------------------------------------------

    #[test]
    fn start_depth_one_reaches_the_same_objective() {
        for code in [0x22u64, 0x23, 0x33] {
            let two = search(code, CrawlConfig::default());
            let one = search(
                code,
                CrawlConfig {
                    start_depth: StartDepth::One,
                    ..CrawlConfig::default()
                },
            );
            assert_eq!(one.imbalance, two.imbalance, "{code:X}");
            assert_eq!(one.max_trans, two.max_trans, "{code:X}");
            assert_eq!(one.max_span, two.max_span, "{code:X}");
            assert!((one.std_dev - two.std_dev).abs() < 1e-9, "{code:X}");
            validate_winner(&one).unwrap();
        }
    }

    #[test]
    fn disabling_pruning_changes_nothing_on_small_sets() {
        let unpruned = CrawlConfig {
            prune_max_trans: u32::MAX,
            prune_imbalance: u32::MAX,
            ..CrawlConfig::default()
        };
        for code in [0x22u64, 0x23, 0x33, 0x24] {
            let pruned = search(code, CrawlConfig::default());
            let free = search(code, unpruned);
            assert_eq!(pruned.imbalance, free.imbalance, "{code:X}");
            assert_eq!(pruned.max_trans, free.max_trans, "{code:X}");
            assert_eq!(pruned.max_span, free.max_span, "{code:X}");
            assert!((pruned.std_dev - free.std_dev).abs() < 1e-9, "{code:X}");
        }
    }

    #[test]
    fn wrap_prediction_changes_nothing_on_small_sets() {
        let no_predict = CrawlConfig {
            wrap_predict: false,
            ..CrawlConfig::default()
        };
        for code in [0x22u64, 0x23, 0x33] {
            let with = search(code, CrawlConfig::default());
            let without = search(code, no_predict);
            assert_eq!(with.sequence, without.sequence, "{code:X}");
            assert_eq!(with.metrics(), without.metrics(), "{code:X}");
        }
    }

    // -------------------------------------------------------------------------
    // Objective modes
    // -------------------------------------------------------------------------

    #[test]
    fn max_span_mode_reports_zero_std_dev() {
        let winner = search(
            0x23,
            CrawlConfig {
                opt_mode: OptMode::MaxSpan,
                ..CrawlConfig::default()
            },
        );
        assert!(winner.proven);
        assert_eq!(winner.std_dev, 0.0);
        assert_eq!(winner.imbalance, 2);
        assert_eq!(winner.max_trans, 4);
        validate_winner(&winner).unwrap();
    }

    #[test]
    fn std_dev_only_mode_still_records_max_span() {
        let winner = search(
            0x23,
            CrawlConfig {
                opt_mode: OptMode::StdDevOnly,
                ..CrawlConfig::default()
            },
        );
        assert!(winner.proven);
        assert!(winner.max_span > 0);
        validate_winner(&winner).unwrap();
    }

    // -------------------------------------------------------------------------
    // Cancellation
    // -------------------------------------------------------------------------

    #[test]
    fn pre_cancelled_crawl_returns_unproven_empty_winner() {
        let mut crawler = GrayCrawler::new(CrawlConfig::default());
        crawler.cancel_token().cancel();
        let winner = crawler.calc_from_code(0x22).unwrap();
        assert!(!winner.proven);
        assert!(winner.sequence.is_empty());
        assert_eq!(winner.imbalance, u32::MAX);
    }
}

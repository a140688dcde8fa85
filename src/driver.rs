//! The supervisor: per-set timeouts, the interval-set catalog, and the
//! sequential full-catalog run.
//!
//! One search runs on a worker thread while the supervisor waits on a
//! [`WorkerSync`] with a bounded timeout. If the timeout elapses first, the
//! supervisor raises the crawler's cancel token; either way it joins the
//! worker and takes the winner. Multiple searches run sequentially, and the
//! collected winner list is passed explicitly to the serializer and the
//! exporters.

use crate::crawler::{CrawlConfig, CrawlError, GrayCrawler};
use crate::export;
use crate::numeral::SetCode;
use crate::sync::WorkerSync;
use crate::winner::{self, Winner, WinnerListError};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

// ============================================================================
// Catalog
// ============================================================================

/// The interval-set catalog: every set code in prime form with at least two
/// places, radices of at least two, and radix sums up to twelve, ordered by
/// place count, then radix sum, then code value.
pub const INTERVAL_SET_CODES: [SetCode; 65] = [
    0x22, 0x23, 0x24, 0x33, 0x25, 0x34, 0x26, 0x35, 0x44, 0x27, 0x36, 0x45, 0x28, 0x37, 0x46,
    0x55, 0x29, 0x38, 0x47, 0x56, 0x2A, 0x39, 0x48, 0x57, 0x66, 0x222, 0x223, 0x224, 0x233,
    0x225, 0x234, 0x333, 0x226, 0x235, 0x244, 0x334, 0x227, 0x236, 0x245, 0x335, 0x344, 0x228,
    0x237, 0x246, 0x255, 0x336, 0x345, 0x444, 0x2222, 0x2223, 0x2224, 0x2233, 0x2225, 0x2234,
    0x2333, 0x2226, 0x2235, 0x2244, 0x2334, 0x3333, 0x22222, 0x22223, 0x22224, 0x22233,
    0x222222,
];

// ============================================================================
// Configuration
// ============================================================================

/// Supervisor configuration for one or more searches.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Crawler configuration, before per-set overrides.
    pub crawl: CrawlConfig,
    /// Base wall-clock cap per search.
    pub timeout: Duration,
    /// Directory receiving log files, the data file, and the exports.
    pub out_dir: PathBuf,
    /// Apply the per-set pruning and timeout overrides from the catalog
    /// notes. Disable for fully manual control.
    pub apply_set_overrides: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            crawl: CrawlConfig::default(),
            timeout: Duration::from_secs(30),
            out_dir: PathBuf::from("."),
            apply_set_overrides: true,
        }
    }
}

/// The winner of one supervised search, plus whether the worker finished
/// before the timeout.
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// The (possibly unproven) winner.
    pub winner: Winner,
    /// `true` iff the worker signalled done before the timeout elapsed.
    pub completed: bool,
}

// ============================================================================
// Per-set overrides
// ============================================================================

/// The pruning-imbalance threshold for a set code: a few sets need a looser
/// or tighter ceiling than the default to reach good winners in reasonable
/// time.
pub fn prune_imbalance_for(code: SetCode, default: u32) -> u32 {
    match code {
        0x336 | 0x2334 | 0x22233 => 4,
        0x22223 | 0x22224 => 2,
        _ => default,
    }
}

/// The wall-clock cap for a set code. Slow sets get at least two or three
/// minutes; tracking standard deviations doubles every cap.
pub fn timeout_for(code: SetCode, base: Duration, track_std_dev: bool) -> Duration {
    let timeout = match code {
        0x37 | 0x46 | 0x234 | 0x22222 => base.max(Duration::from_secs(120)),
        0x2225 => base.max(Duration::from_secs(180)),
        _ => base,
    };
    if track_std_dev { timeout * 2 } else { timeout }
}

// ============================================================================
// Supervised search
// ============================================================================

/// Runs one search on a worker thread with a wall-clock cap.
///
/// Prints `done` if the worker finished in time, `timeout` otherwise; in
/// both cases the cancel token is raised (a no-op for a finished worker)
/// and the joined winner is returned.
///
/// # Errors
/// Propagates crawler input and I/O errors; a timed-out search is not an
/// error.
pub fn search_with_timeout(code: SetCode, cfg: &RunConfig) -> Result<SearchOutcome, CrawlError> {
    let mut crawl = cfg.crawl;
    let mut timeout = cfg.timeout;
    if cfg.apply_set_overrides {
        crawl.prune_imbalance = prune_imbalance_for(code, crawl.prune_imbalance);
        timeout = timeout_for(code, cfg.timeout, crawl.opt_mode.tracks_std_dev());
    }

    let log_path = cfg.out_dir.join(format!("BalaGray {code:X}.txt"));
    let mut crawler = GrayCrawler::create(&log_path, crawl)?;
    let cancel = crawler.cancel_token();
    let sync = WorkerSync::new();

    let worker = {
        let sync = sync.clone();
        thread::spawn(move || {
            let result = crawler.calc_from_code(code);
            sync.notify_done();
            result
        })
    };

    let completed = sync.wait_for_done(timeout);
    if completed {
        println!("done");
    } else {
        println!("timeout");
    }
    cancel.cancel(); // request worker exit; harmless if already done
    let winner = worker
        .join()
        .map_err(|_| CrawlError::Io("search worker panicked".to_string()))??;
    Ok(SearchOutcome { winner, completed })
}

/// Runs the given set codes sequentially, writes the winner-list data file
/// and the presentation exports into the output directory, and returns the
/// winners.
///
/// # Errors
/// Propagates the first search or I/O failure.
pub fn run_codes(codes: &[SetCode], cfg: &RunConfig) -> Result<Vec<Winner>, CrawlError> {
    let mut winners = Vec::with_capacity(codes.len());
    for &code in codes {
        let outcome = search_with_timeout(code, cfg)?;
        winners.push(outcome.winner);
    }

    let track_sd = cfg.crawl.opt_mode.tracks_std_dev();
    winner::save_winner_list(cfg.out_dir.join("BalaGrayTable.dat"), &winners, track_sd)
        .map_err(|e| CrawlError::Io(e.to_string()))?;
    write_exports(&winners, cfg)?;
    Ok(winners)
}

/// Runs the whole interval-set catalog. See [`run_codes`].
///
/// # Errors
/// As [`run_codes`].
pub fn run_all(cfg: &RunConfig) -> Result<Vec<Winner>, CrawlError> {
    run_codes(&INTERVAL_SET_CODES, cfg)
}

/// Re-emits the presentation exports from a previously saved data file
/// instead of searching.
///
/// A record-size mismatch is reported and treated as an empty list (no
/// partial reads); the exports are still written.
///
/// # Errors
/// Fails with [`CrawlError::Io`] on unreadable or malformed data, or on
/// export file failures.
pub fn export_saved(path: impl AsRef<Path>, cfg: &RunConfig) -> Result<Vec<Winner>, CrawlError> {
    let track_sd = cfg.crawl.opt_mode.tracks_std_dev();
    let winners = match winner::load_winner_list(path, track_sd) {
        Ok(winners) => winners,
        Err(e @ WinnerListError::SizeMismatch { .. }) => {
            eprintln!("{e}; ignoring saved data");
            Vec::new()
        }
        Err(e) => return Err(CrawlError::Io(e.to_string())),
    };
    write_exports(&winners, cfg)?;
    Ok(winners)
}

/// Writes the HTML table, CSV table, and step-track CSV for a winner list.
///
/// # Errors
/// Fails with [`CrawlError::Io`] on any file failure.
pub fn write_exports(winners: &[Winner], cfg: &RunConfig) -> Result<(), CrawlError> {
    let track_sd = cfg.crawl.opt_mode.tracks_std_dev();
    let io_err = |e: std::io::Error| CrawlError::Io(e.to_string());

    let html = File::create(cfg.out_dir.join("BalaGraySetsTable.htm")).map_err(io_err)?;
    export::write_html_table(BufWriter::new(html), winners, track_sd).map_err(io_err)?;

    let csv = File::create(cfg.out_dir.join("BalaGraySetsTable.csv")).map_err(io_err)?;
    export::write_csv_table(BufWriter::new(csv), winners, track_sd).map_err(io_err)?;

    let tracks =
        File::create(cfg.out_dir.join("BalaGraySetsAsPolymeterTracks.csv")).map_err(io_err)?;
    export::write_step_tracks(BufWriter::new(tracks), winners).map_err(io_err)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

//! # Balanced Gray Code Search Engine
//!
//! A Rust library for finding balanced Gray code sequences over mixed-radix
//! numeral systems.
//!
//! This crate provides:
//! - A compact mixed-radix numeral model with pack/unpack bijections and a
//!   hexadecimal **set code** syntax for radix vectors.
//! - A precomputed Gray successor table with power-of-two row stride.
//! - An iterative depth-first **crawler** that enumerates Hamiltonian Gray
//!   cycles with branch pruning and wrap prediction, retaining the best
//!   cycle under a lexicographic balance objective.
//! - A timeout-bounded supervisor with cooperative cancellation that keeps
//!   the best result found so far.
//!
//! ## Quick Start
//!
//! ```no_run
//! use balagray::crawler::{CrawlConfig, GrayCrawler};
//!
//! // Search set code 0x234 (radices 2, 3, 4; 24 numerals).
//! let mut crawler = GrayCrawler::new(CrawlConfig::default());
//! let winner = crawler.calc_from_code(0x234).expect("valid set code");
//! println!("imbalance = {}", winner.imbalance);
//! ```
//!
//! ## Searching With a Timeout
//!
//! ```no_run
//! use std::time::Duration;
//! use balagray::driver::{search_with_timeout, RunConfig};
//!
//! let cfg = RunConfig { timeout: Duration::from_secs(30), ..Default::default() };
//! let outcome = search_with_timeout(0x234, &cfg).expect("search should start");
//! assert!(outcome.winner.proven || !outcome.completed);
//! ```
//!
//! ## Modules
//!
//! - [`numeral`]: Mixed-radix numerals, radix vectors, and set codes.
//! - [`gray`]: Gray successor table construction.
//! - [`metrics`]: Balance, span, and deviation metrics with the objective.
//! - [`crawler`]: The iterative depth-first search engine.
//! - [`sync`]: Cancellation token and one-shot done signalling.
//! - [`winner`]: Winner records and winner-list serialization.
//! - [`validate`]: Independent revalidation of winners.
//! - [`driver`]: Catalog, per-set overrides, and the timeout supervisor.
//! - [`export`]: HTML/CSV presentation tables.
//!
//! ## Performance Notes
//!
//! - The used-numeral mask is two `u64` words, limiting a search to 127
//!   numerals.
//! - Successor lookup is a shift-and-add into a dense table; no
//!   multiplication on the hot path.
//! - For maximum performance, compile with:
//!   `RUSTFLAGS="-C target-cpu=native" cargo build --release`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::cargo)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::inline_always)] // Intentional for hot-path code
#![allow(clippy::many_single_char_names)] // Mathematical variable names
#![allow(clippy::needless_range_loop)] // Often clearer for table indexing
#![allow(clippy::doc_markdown)] // Mixed-radix notation in docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::multiple_crate_versions)] // Cargo.lock management is external

pub mod crawler;
pub mod driver;
pub mod export;
pub mod gray;
pub mod metrics;
pub mod numeral;
pub mod sync;
pub mod validate;
pub mod winner;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::crawler::{CrawlConfig, CrawlError, GrayCrawler, StartDepth};
    pub use crate::driver::{RunConfig, run_all, search_with_timeout};
    pub use crate::metrics::{CycleMetrics, OptMode};
    pub use crate::numeral::{Numeral, RadixVector, SetCode};
    pub use crate::sync::{CancelToken, WorkerSync};
    pub use crate::winner::Winner;
}

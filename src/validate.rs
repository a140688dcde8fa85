//! Fast deterministic validation of winner records.
//!
//! A winner is checked independently of the crawler: the recorded sequence
//! must be a Hamiltonian Gray cycle for the decoded radix vector, and the
//! recorded metrics must equal the values recomputed from the sequence.

use crate::metrics::CycleMetrics;
use crate::numeral::RadixVector;
use crate::winner::Winner;

// ============================================================================
// Public API
// ============================================================================

/// Validates one winner record.
///
/// Checks, in order: the set code decodes and matches the recorded place
/// count; the sequence is a permutation of all representable numerals;
/// consecutive numerals (including last back to first) differ in exactly one
/// place; and the recorded metrics equal an independent recomputation.
///
/// # Errors
/// Returns a message naming the first failed check.
pub fn validate_winner(winner: &Winner) -> Result<(), String> {
    let bases = RadixVector::from_set_code(winner.set_code)
        .map_err(|e| format!("set code {:X}: {e}", winner.set_code))?;
    let places = bases.places();
    if places != winner.places as usize {
        return Err(format!(
            "place count mismatch: set code has {places}, record says {}",
            winner.places
        ));
    }
    if winner.radix_sum != bases.radix_sum() {
        return Err(format!(
            "radix sum mismatch: set code gives {}, record says {}",
            bases.radix_sum(),
            winner.radix_sum
        ));
    }

    let n = bases.numeral_count();
    if winner.sequence.is_empty() {
        return Err("no recorded sequence".to_string());
    }
    if winner.sequence.len() != n {
        return Err(format!(
            "sequence length {} does not cover all {n} numerals",
            winner.sequence.len()
        ));
    }

    // Permutation check: every numeral in range, each exactly once.
    let mut seen = vec![false; n];
    for (step, num) in winner.sequence.iter().enumerate() {
        for place in 0..places {
            if num.place(place) >= bases.radix(place) {
                return Err(format!(
                    "step {step}: place {place} value {} out of range for radix {}",
                    num.place(place),
                    bases.radix(place)
                ));
            }
        }
        let index = bases.pack(num);
        if seen[index] {
            return Err(format!("step {step}: numeral {index} repeats"));
        }
        seen[index] = true;
    }

    // Gray adjacency, wrap included.
    for step in 0..n {
        let next = (step + 1) % n;
        if !winner.sequence[step].is_gray_neighbor(&winner.sequence[next], places) {
            return Err(format!(
                "steps {step} -> {next} do not differ in exactly one place"
            ));
        }
    }

    // Metric consistency.
    let measured = CycleMetrics::measure(&winner.sequence, places);
    if winner.imbalance != measured.imbalance {
        return Err(format!(
            "imbalance mismatch: recorded {}, measured {}",
            winner.imbalance, measured.imbalance
        ));
    }
    if winner.max_trans != measured.max_trans {
        return Err(format!(
            "max transition count mismatch: recorded {}, measured {}",
            winner.max_trans, measured.max_trans
        ));
    }
    if winner.max_span != measured.max_span {
        return Err(format!(
            "max span mismatch: recorded {}, measured {}",
            winner.max_span, measured.max_span
        ));
    }
    // Std dev is recomputable only when the producer tracked it.
    if winner.std_dev != 0.0 && (winner.std_dev - measured.std_dev).abs() > 1e-9 {
        return Err(format!(
            "standard deviation mismatch: recorded {}, measured {}",
            winner.std_dev, measured.std_dev
        ));
    }
    Ok(())
}

/// Validates every winner in a list; reports the first failure with its
/// position.
///
/// # Errors
/// Returns a message naming the failing record and check.
pub fn validate_winner_list(winners: &[Winner]) -> Result<(), String> {
    for (i, winner) in winners.iter().enumerate() {
        validate_winner(winner)
            .map_err(|e| format!("winner {i} (set code {:X}): {e}", winner.set_code))?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

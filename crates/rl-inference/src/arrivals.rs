//! Discrete-event arrival flow from inter-arrival deltas.

use rl_core::types::EventRecord;
use rl_core::{Error, Result};

/// Build the cumulative event timeline from inter-arrival deltas.
///
/// A synthetic `delta = 0` record is prepended at index 0 to mark the
/// observation start, then each record's `time` is the prefix sum of the
/// deltas through it. Input order is preserved; the output has
/// `deltas.len() + 1` records and non-decreasing `time`.
///
/// Errors with `Validation` on empty input: a timeline holding only the
/// synthetic start record describes no observed flow.
pub fn event_sequence(deltas: &[f64]) -> Result<Vec<EventRecord>> {
    if deltas.is_empty() {
        return Err(Error::Validation("deltas must be non-empty".to_string()));
    }
    if deltas.iter().any(|d| !d.is_finite() || *d < 0.0) {
        return Err(Error::Validation(
            "deltas must be finite and non-negative".to_string(),
        ));
    }

    let mut out = Vec::with_capacity(deltas.len() + 1);
    out.push(EventRecord { index: 0, delta: 0.0, time: 0.0 });
    let mut time = 0.0;
    for (i, &delta) in deltas.iter().enumerate() {
        time += delta;
        out.push(EventRecord { index: i + 1, delta, time });
    }
    Ok(out)
}

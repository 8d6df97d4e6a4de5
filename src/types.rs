// src/types.rs
// Shared type aliases

use crate::field_names::FIELD_COUNT;
use ndarray::Array2;

// Compile-time assertion: FIELD_COUNT must be 2 (near/far comparison).
// The plot framework splits drawing areas into FIELD_COUNT columns and the
// comparison report pairs statistics by that count.
const _: () = assert!(FIELD_COUNT == 2, "FIELD_COUNT must be 2 (near/far)");

/// A square grid of noise samples, indexed `[i, j]` in sample order.
pub type NoiseField = Array2<f64>;

/// Near and far fields, in `FIELD_NAMES` order.
pub type FieldPair = [NoiseField; FIELD_COUNT];

/// Per-bin density values of a value histogram.
pub type HistogramDensity = Vec<f64>;

// src/data_analysis/histogram.rs

use crate::constants::{ENTROPY_LOG_FLOOR, HISTOGRAM_BINS, NOISE_VALUE_MAX, NOISE_VALUE_MIN};
use crate::types::{HistogramDensity, NoiseField};

/// Width of one histogram bin over the noise value range.
pub fn bin_width() -> f64 {
    (NOISE_VALUE_MAX - NOISE_VALUE_MIN) / HISTOGRAM_BINS as f64
}

/// Density histogram of field values over `[-1, 1]` with `HISTOGRAM_BINS`
/// equal-width bins. Out-of-range samples are clamped into the edge bins so
/// every sample is counted. Densities integrate to 1 over the value range;
/// an empty field yields all-zero densities.
pub fn density_histogram(field: &NoiseField) -> HistogramDensity {
    let total = field.len();
    if total == 0 {
        return vec![0.0; HISTOGRAM_BINS];
    }

    let width = bin_width();
    let mut counts = vec![0usize; HISTOGRAM_BINS];
    for &value in field.iter() {
        let clamped = value.clamp(NOISE_VALUE_MIN, NOISE_VALUE_MAX);
        let mut bin = ((clamped - NOISE_VALUE_MIN) / width) as usize;
        if bin >= HISTOGRAM_BINS {
            bin = HISTOGRAM_BINS - 1; // top edge lands in the last bin
        }
        counts[bin] += 1;
    }

    counts
        .iter()
        .map(|&c| c as f64 / (total as f64 * width))
        .collect()
}

/// Shannon-style entropy of a density histogram: `-sum(p * ln(p + floor))`.
///
/// The additive floor keeps empty bins finite; a nonzero density multiplied
/// by the log of a zeroed density would otherwise produce NaN for degenerate
/// fields. Matches the formulation the statistics thresholds were tuned on.
pub fn histogram_entropy(density: &[f64]) -> f64 {
    -density
        .iter()
        .map(|&p| p * (p + ENTROPY_LOG_FLOOR).ln())
        .sum::<f64>()
}


// src/data_analysis/histogram.rs

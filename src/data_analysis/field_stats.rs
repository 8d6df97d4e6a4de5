// src/data_analysis/field_stats.rs

use ndarray_stats::QuantileExt;

use crate::types::NoiseField;

/// Minimum, maximum and spread of a field's values.
///
/// An empty field has no extrema; `ndarray-stats` reports that as an error,
/// which is mapped to an all-zero result with a stderr warning so the caller
/// can keep producing a (degenerate) report.
pub fn value_range(field: &NoiseField) -> (f64, f64, f64) {
    match (field.min(), field.max()) {
        (Ok(&min), Ok(&max)) => (min, max, max - min),
        _ => {
            eprintln!("Warning: could not determine value range (empty field?), reporting 0.");
            (0.0, 0.0, 0.0)
        }
    }
}


// src/data_analysis/field_stats.rs

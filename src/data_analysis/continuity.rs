// src/data_analysis/continuity.rs

use ndarray::s;

use crate::types::NoiseField;

/// Mean absolute difference between horizontally adjacent samples.
///
/// Smooth noise keeps this small; precision loss in the lattice fractions
/// shows up as jumps between neighboring columns. Fields narrower than two
/// columns have no horizontal neighbors and report 0.
pub fn horizontal_mean_abs_diff(field: &NoiseField) -> f64 {
    let (rows, cols) = field.dim();
    if rows == 0 || cols < 2 {
        eprintln!("Warning: field too small for horizontal continuity ({rows}x{cols}), reporting 0.");
        return 0.0;
    }
    let diff = &field.slice(s![.., 1..]) - &field.slice(s![.., ..-1]);
    diff.mapv(f64::abs).mean().unwrap_or(0.0)
}

/// Mean absolute difference between vertically adjacent samples.
pub fn vertical_mean_abs_diff(field: &NoiseField) -> f64 {
    let (rows, cols) = field.dim();
    if cols == 0 || rows < 2 {
        eprintln!("Warning: field too small for vertical continuity ({rows}x{cols}), reporting 0.");
        return 0.0;
    }
    let diff = &field.slice(s![1.., ..]) - &field.slice(s![..-1, ..]);
    diff.mapv(f64::abs).mean().unwrap_or(0.0)
}


// src/data_analysis/continuity.rs

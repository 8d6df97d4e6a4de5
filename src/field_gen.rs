// src/field_gen.rs

use ndarray::Array2;

use crate::noise::perlin::Perlin;
use crate::types::NoiseField;

/// Sampling parameters for one noise field.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Coordinate offset added to both axes before sampling.
    pub offset: f64,
    /// Grid edge length in samples.
    pub size: usize,
    /// Samples per lattice unit; grid index i maps to coordinate offset + i/step.
    pub step: f64,
}

/// Samples a square noise grid according to `spec`.
pub fn generate_field(noise: &Perlin, spec: &FieldSpec) -> NoiseField {
    Array2::from_shape_fn((spec.size, spec.size), |(i, j)| {
        let x = spec.offset + i as f64 / spec.step;
        let y = spec.offset + j as f64 / spec.step;
        noise.sample(x, y)
    })
}

// src/noise/perlin.rs

use crate::noise::permutation::PermutationTable;

/// Classic 2D gradient noise over an integer lattice.
///
/// Each lattice corner hashes to one of four axis-aligned unit gradients; the
/// four corner dot products are blended with the quintic fade polynomial.
/// Output is bounded in `[-1, 1]`.
///
/// Coordinates are taken at face value: no internal wrapping or rescaling is
/// applied before the lattice decomposition, so the precision of `x - floor(x)`
/// degrades as the caller moves far from the origin. That behavior is the
/// subject of this diagnostic, not a defect of the function.
#[derive(Debug, Clone)]
pub struct Perlin {
    perm: PermutationTable,
}

impl Perlin {
    pub fn new(seed: u64) -> Self {
        Self {
            perm: PermutationTable::new(seed),
        }
    }

    /// Sample the noise value at `(x, y)`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Lattice cell, masked onto the permutation table.
        let xi = (x.floor() as i64 & 255) as usize;
        let yi = (y.floor() as i64 & 255) as usize;

        // Position within the cell.
        let xf = x - x.floor();
        let yf = y - y.floor();

        let u = fade(xf);
        let v = fade(yf);

        let p = &self.perm;
        let n00 = grad(p.hash(p.hash(xi) + yi), xf, yf);
        let n01 = grad(p.hash(p.hash(xi) + yi + 1), xf, yf - 1.0);
        let n11 = grad(p.hash(p.hash(xi + 1) + yi + 1), xf - 1.0, yf - 1.0);
        let n10 = grad(p.hash(p.hash(xi + 1) + yi), xf - 1.0, yf);

        let x1 = lerp(n00, n10, u);
        let x2 = lerp(n01, n11, u);
        lerp(x1, x2, v)
    }
}

/// Quintic smoothstep: `6t^5 - 15t^4 + 10t^3`. Zero first and second
/// derivatives at t=0 and t=1, which keeps cell boundaries seamless.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of the corner-relative offset with one of the four
/// axis-aligned unit gradients (0,1), (0,-1), (1,0), (-1,0).
#[inline]
fn grad(hash: usize, x: f64, y: f64) -> f64 {
    match hash & 3 {
        0 => y,
        1 => -y,
        2 => x,
        _ => -x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert!((fade(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn fade_is_monotone_on_unit_interval() {
        let mut prev = fade(0.0);
        for i in 1..=100 {
            let next = fade(i as f64 / 100.0);
            assert!(next >= prev, "fade decreased at t={}", i as f64 / 100.0);
            prev = next;
        }
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(-3.0, 5.0, 0.0), -3.0);
        assert_eq!(lerp(-3.0, 5.0, 1.0), 5.0);
        assert_eq!(lerp(-3.0, 5.0, 0.5), 1.0);
    }

    #[test]
    fn sample_is_bounded() {
        let noise = Perlin::new(0);
        for i in 0..200 {
            for j in 0..200 {
                let v = noise.sample(i as f64 * 0.17, j as f64 * 0.23);
                assert!(
                    (-1.0..=1.0).contains(&v),
                    "noise value {v} out of bounds at ({i}, {j})"
                );
            }
        }
    }

    #[test]
    fn sample_is_deterministic_per_seed() {
        let a = Perlin::new(123);
        let b = Perlin::new(123);
        for i in 0..50 {
            let (x, y) = (i as f64 * 0.31, i as f64 * 0.47);
            assert_eq!(a.sample(x, y), b.sample(x, y));
        }
    }

    #[test]
    fn distinct_seeds_produce_distinct_fields() {
        let a = Perlin::new(0);
        let b = Perlin::new(1);
        let differing = (0..50)
            .filter(|&i| {
                let (x, y) = (i as f64 * 0.31, i as f64 * 0.47);
                a.sample(x, y) != b.sample(x, y)
            })
            .count();
        assert!(differing > 0);
    }

    #[test]
    fn sample_is_zero_on_lattice_points() {
        // On integer coordinates both fractional offsets are zero, so the
        // blended value collapses to the (0,0)-corner dot product, which is
        // a dot with a zero offset vector.
        let noise = Perlin::new(9);
        for i in 0..10 {
            assert_eq!(noise.sample(i as f64, (i * 3) as f64), 0.0);
        }
    }
}

// src/noise/perlin.rs

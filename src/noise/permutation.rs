// src/noise/permutation.rs

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::constants::PERMUTATION_SIZE;

/// Seeded lattice permutation table.
///
/// Holds a shuffled permutation of `0..256`, stored twice back to back so the
/// nested corner lookups `p[p[xi] + yi + 1]` never index past the end without
/// an extra modulo. The same seed always produces the same table.
#[derive(Debug, Clone)]
pub struct PermutationTable {
    table: [u8; PERMUTATION_SIZE * 2],
}

impl PermutationTable {
    pub fn new(seed: u64) -> Self {
        let mut values: Vec<u8> = (0..PERMUTATION_SIZE).map(|v| v as u8).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        values.shuffle(&mut rng);

        let mut table = [0u8; PERMUTATION_SIZE * 2];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = values[i % PERMUTATION_SIZE];
        }
        Self { table }
    }

    /// Look up a table entry. `index` must be below `2 * PERMUTATION_SIZE`,
    /// which holds for every corner-hash expression the noise function forms.
    #[inline]
    pub fn hash(&self, index: usize) -> usize {
        self.table[index] as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_a_permutation_of_0_to_255() {
        let table = PermutationTable::new(0);
        let mut seen = [false; PERMUTATION_SIZE];
        for i in 0..PERMUTATION_SIZE {
            seen[table.hash(i)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn table_is_doubled() {
        let table = PermutationTable::new(42);
        for i in 0..PERMUTATION_SIZE {
            assert_eq!(table.hash(i), table.hash(i + PERMUTATION_SIZE));
        }
    }

    #[test]
    fn same_seed_same_table() {
        let a = PermutationTable::new(7);
        let b = PermutationTable::new(7);
        for i in 0..PERMUTATION_SIZE * 2 {
            assert_eq!(a.hash(i), b.hash(i));
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = PermutationTable::new(0);
        let b = PermutationTable::new(1);
        let differing = (0..PERMUTATION_SIZE).filter(|&i| a.hash(i) != b.hash(i)).count();
        assert!(differing > 0, "distinct seeds produced identical tables");
    }
}

// src/noise/permutation.rs

//! Cyclic tours and their cost evaluation.
//!
//! A [`Tour`] is a permutation of all location indices. Neighboring tours
//! differ by one pairwise swap; both engines explore that neighborhood,
//! SA by random sampling and TS by exhaustive enumeration.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::TourError;
use crate::matrix::CostMatrix;

/// An ordered visiting sequence over all N locations, closed back to its
/// starting location.
///
/// Tours have value semantics: neighbor generation returns fresh copies and
/// never aliases the source tour. `Eq + Hash` let tours sit in the tabu
/// list as value-equal entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// Builds a tour from an explicit visiting order over `n` locations.
    ///
    /// # Errors
    ///
    /// Returns [`TourError`] if the order is not a permutation of `0..n`.
    pub fn new(order: Vec<usize>, n: usize) -> Result<Self, TourError> {
        if order.len() != n {
            return Err(TourError::LengthMismatch {
                len: order.len(),
                expected: n,
            });
        }
        let mut seen = vec![false; n];
        for &index in &order {
            if index >= n {
                return Err(TourError::IndexOutOfRange { index, n });
            }
            if seen[index] {
                return Err(TourError::DuplicateIndex { index });
            }
            seen[index] = true;
        }
        Ok(Self(order))
    }

    /// A uniformly random permutation of `0..n`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self(order)
    }

    /// Number of locations visited.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The visiting order.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Total cyclic cost: every consecutive edge plus the closing edge from
    /// the last location back to the first. O(N), no side effects.
    pub fn cost(&self, matrix: &CostMatrix) -> f64 {
        debug_assert!(
            self.is_permutation_of(matrix.len()),
            "tour is not a permutation of the matrix's locations"
        );
        let order = &self.0;
        let mut total = 0.0;
        for pair in order.windows(2) {
            total += matrix.cost(pair[0], pair[1]);
        }
        total += matrix.cost(order[order.len() - 1], order[0]);
        total
    }

    /// A copy of this tour with the locations at positions `i` and `j`
    /// exchanged. The original is unmodified.
    pub fn swapped(&self, i: usize, j: usize) -> Self {
        let mut order = self.0.clone();
        order.swap(i, j);
        Self(order)
    }

    /// One random-swap neighbor: two distinct positions chosen uniformly at
    /// random, exchanged.
    pub fn random_swap<R: Rng>(&self, rng: &mut R) -> Self {
        let n = self.0.len();
        let i = rng.random_range(0..n);
        let mut j = rng.random_range(0..n);
        while j == i {
            j = rng.random_range(0..n);
        }
        self.swapped(i, j)
    }

    /// The exhaustive swap neighborhood: all C(N,2) position pairs `(i, j)`
    /// with `i < j`, enumerated in lexicographic order. That order is the
    /// tie-break order Tabu Search relies on.
    pub fn swap_neighbors(&self) -> impl Iterator<Item = Tour> + '_ {
        let n = self.0.len();
        (0..n).flat_map(move |i| ((i + 1)..n).map(move |j| self.swapped(i, j)))
    }

    fn is_permutation_of(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &index in &self.0 {
            if index >= n || seen[index] {
                return false;
            }
            seen[index] = true;
        }
        true
    }
}

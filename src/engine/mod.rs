//! The quadratic form expansion (QFE) engine: the canonical algebraic
//! representation of a stabilizer state and the update rules that keep it
//! canonical under Clifford gates and Pauli-basis measurement.
//!
//! See `SPEC_FULL.md` for the data model. Each family of update rules lives
//! in its own submodule, one routine per file, mirroring the one-operation-
//! per-file layout of this crate's teacher (`stabilizer-ch-form-rust`'s
//! `form/left_multiplication/*.rs`).

use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{QfeError, Result};

mod fold;
mod gates;
mod measurement;
mod phase;
mod principal;
mod reindex;
mod validate;

pub(crate) use phase::PhaseExponent;
pub(crate) use principal::PrincipalMap;

/// The quadratic form expansion representation of an n-qubit stabilizer
/// state: `(n, r, A, b, Q, p, g, deterministic)` of `spec.md` §3.
#[derive(Debug, Clone)]
pub struct QuadraticFormExpansion {
    pub(crate) n: usize,
    pub(crate) r: usize,
    /// `n x (n+1)` GF(2) matrix; column `n` is scratch, never part of the
    /// active `r`-column prefix between public calls.
    pub(crate) a: Array2<bool>,
    /// length-`n` GF(2) affine offset.
    pub(crate) b: Array1<bool>,
    /// `(n+1) x (n+1)` symmetric integer matrix: off-diagonal entries are
    /// kept reduced mod 2, diagonal entries mod 4, immediately after every
    /// update that touches them.
    pub(crate) q: Array2<i32>,
    /// bidirectional partial map between form-variable columns `< r` and
    /// qubit indices `< n`.
    pub(crate) p: PrincipalMap,
    /// global phase exponent, an element of Z/8.
    pub(crate) g: PhaseExponent,
    /// `true` until the first measurement samples a coin.
    pub(crate) deterministic: bool,
    pub(crate) rng: StdRng,
}

impl QuadraticFormExpansion {
    /// Constructs the computational-basis state `|0...0>` on `n` qubits,
    /// seeding its random-number generator from OS entropy.
    pub fn new(n: usize) -> Result<Self> {
        Self::new_with_rng(n, StdRng::from_entropy())
    }

    /// Constructs `|0...0>` on `n` qubits with a deterministically seeded
    /// random-number generator, for reproducible tests (`spec.md` §9: "tests
    /// rely on per-engine seeding").
    pub fn with_seed(n: usize, seed: u64) -> Result<Self> {
        Self::new_with_rng(n, StdRng::seed_from_u64(seed))
    }

    fn new_with_rng(n: usize, rng: StdRng) -> Result<Self> {
        if n == 0 {
            return Err(QfeError::InvalidNumQubits(n));
        }
        Ok(Self {
            n,
            r: 0,
            a: Array2::from_elem((n, n + 1), false),
            b: Array1::from_elem(n, false),
            q: Array2::zeros((n + 1, n + 1)),
            p: PrincipalMap::new(n),
            g: PhaseExponent::ZERO,
            deterministic: true,
            rng,
        })
    }

    pub fn n_qubits(&self) -> usize {
        self.n
    }

    /// Current number of form variables, `0 <= r <= n`.
    pub fn rank(&self) -> usize {
        self.r
    }

    pub fn is_deterministic(&self) -> bool {
        self.deterministic
    }

    pub(crate) fn check_qubit(&self, j: usize) -> Result<()> {
        if j < self.n {
            Ok(())
        } else {
            Err(QfeError::QubitIndexOutOfBounds(j, self.n))
        }
    }

    pub(crate) fn check_distinct(&self, j: usize, k: usize) -> Result<()> {
        if j != k {
            Ok(())
        } else {
            Err(QfeError::DuplicateQubitIndices(j))
        }
    }

    pub(crate) fn require_qubit(&self, j: usize) {
        if let Err(e) = self.check_qubit(j) {
            panic!("{e}");
        }
    }

    pub(crate) fn require_distinct(&self, j: usize, k: usize) {
        if let Err(e) = self.check_distinct(j, k) {
            panic!("{e}");
        }
    }

    /// The X-support of qubit `j` over the active form variables: `H_j = {h
    /// < r : A[j, h] = 1}` of `spec.md` §4.3.
    pub(crate) fn x_support(&self, j: usize) -> Vec<usize> {
        (0..self.r).filter(|&h| self.a[(j, h)]).collect()
    }

    /// Reduces `Q`'s row/column `c` (for indices `< r`) to canonical range:
    /// the diagonal entry mod 4, the off-diagonal entries mod 2. Ported from
    /// `original_source/simplex.py`'s `ReduceGramRowCol`.
    pub(crate) fn reduce_gram_row_col(&mut self, c: usize) {
        for k in 0..self.r {
            if k == c {
                self.q[(k, k)] = self.q[(k, k)].rem_euclid(4);
            } else {
                self.q[(c, k)] = self.q[(c, k)].rem_euclid(2);
                self.q[(k, c)] = self.q[(k, c)].rem_euclid(2);
            }
        }
    }

    /// Validates invariants 1-5 of `spec.md` §3 plus `rank(A[:, 0..r]) = r`.
    pub fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

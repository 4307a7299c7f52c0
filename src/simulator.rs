//! The `Simulator` facade: a thin wrapper around [`QuadraticFormExpansion`]
//! exposing the fluent, qubit-indexed API of `spec.md` §6, mirroring
//! `original_source/simplex.py`'s `Simplex` class wrapping its `QFE` engine.

use crate::engine::QuadraticFormExpansion;
use crate::error::Result;

/// A stabilizer circuit simulator over `n` qubits, initialized to
/// `|0...0>`. Gate methods mutate in place and return `&mut Self` so calls
/// can be chained; measurement methods return the sampled outcome.
#[derive(Debug, Clone)]
pub struct Simulator {
    form: QuadraticFormExpansion,
}

impl Simulator {
    /// Creates a simulator for `n` qubits, seeding its random-number
    /// generator from OS entropy.
    pub fn new(n: usize) -> Result<Self> {
        Ok(Self {
            form: QuadraticFormExpansion::new(n)?,
        })
    }

    /// Creates a simulator for `n` qubits with a deterministically seeded
    /// random-number generator, for reproducible tests.
    pub fn with_seed(n: usize, seed: u64) -> Result<Self> {
        Ok(Self {
            form: QuadraticFormExpansion::with_seed(n, seed)?,
        })
    }

    /// A deep copy, independent of `self`: mutating one afterward (including
    /// feeding it different `coin` values) never affects the other.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    pub fn n_qubits(&self) -> usize {
        self.form.n_qubits()
    }

    /// The current number of active form variables, `0 <= r <= n`.
    pub fn rank(&self) -> usize {
        self.form.rank()
    }

    /// `false` once any measurement so far has sampled a coin rather than
    /// returning a forced outcome.
    pub fn is_deterministic(&self) -> bool {
        self.form.is_deterministic()
    }

    /// Checks the engine's internal invariants (`spec.md` §3), for tests
    /// and debugging; never called on the hot path.
    pub fn validate(&self) -> Result<()> {
        self.form.validate()
    }

    pub fn x(&mut self, qubit: usize) -> &mut Self {
        self.form.apply_x(qubit);
        self
    }

    pub fn y(&mut self, qubit: usize) -> &mut Self {
        self.form.apply_y(qubit);
        self
    }

    pub fn z(&mut self, qubit: usize) -> &mut Self {
        self.form.apply_z(qubit);
        self
    }

    pub fn h(&mut self, qubit: usize) -> &mut Self {
        self.form.apply_h(qubit);
        self
    }

    pub fn s(&mut self, qubit: usize) -> &mut Self {
        self.form.apply_s(qubit);
        self
    }

    pub fn sdg(&mut self, qubit: usize) -> &mut Self {
        self.form.apply_sdg(qubit);
        self
    }

    pub fn cx(&mut self, control: usize, target: usize) -> &mut Self {
        self.form.apply_cx(control, target);
        self
    }

    pub fn cz(&mut self, first: usize, second: usize) -> &mut Self {
        self.form.apply_cz(first, second);
        self
    }

    /// Measures `qubit` in the Z basis. `coin` forces the outcome of a
    /// non-deterministic measurement (for testing); pass `None` to sample
    /// from the simulator's own random-number generator.
    pub fn meas_z(&mut self, qubit: usize, coin: Option<bool>) -> bool {
        self.form.measure_z(qubit, coin)
    }

    /// Measures `qubit` in the X basis. See [`Simulator::meas_z`] for
    /// `coin`.
    pub fn meas_x(&mut self, qubit: usize, coin: Option<bool>) -> bool {
        self.form.measure_x(qubit, coin)
    }

    /// Measures `qubit` in the Y basis. See [`Simulator::meas_z`] for
    /// `coin`.
    pub fn meas_y(&mut self, qubit: usize, coin: Option<bool>) -> bool {
        self.form.measure_y(qubit, coin)
    }
}

use thiserror::Error;

/// Error type for [`QuadraticFormExpansion`](crate::engine::QuadraticFormExpansion) and
/// [`Simulator`](crate::Simulator) operations.
///
/// Every variant except [`QfeError::InvariantViolated`] describes a contract
/// violation (a caller bug, not a runtime condition): the public gate and
/// measurement methods check for these internally and panic with the
/// variant's [`Display`](std::fmt::Display) message rather than returning
/// this type, mirroring the bare `assert` statements of the algorithm this
/// crate implements. [`QfeError::InvariantViolated`] is the one variant a
/// caller actually observes, via
/// [`QuadraticFormExpansion::validate`](crate::engine::QuadraticFormExpansion::validate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QfeError {
    /// A qubit index was not in `0..n`.
    #[error("qubit index {0} is out of bounds for {1} qubits")]
    QubitIndexOutOfBounds(usize, usize),

    /// A two-qubit gate (`CX`/`CZ`) was called with equal control and target.
    #[error("control and target qubit indices must differ, got {0} for both")]
    DuplicateQubitIndices(usize),

    /// `QuadraticFormExpansion::new` was called with zero qubits.
    #[error("number of qubits must be greater than zero, got {0}")]
    InvalidNumQubits(usize),

    /// A structural invariant of the QFE representation does not hold.
    #[error("QFE invariant violated: {0}")]
    InvariantViolated(String),
}

/// Convenience alias matching the teacher crate's `error::Result`.
pub type Result<T> = std::result::Result<T, QfeError>;

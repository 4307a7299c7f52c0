use std::ops::{Add, AddAssign, Sub, SubAssign};

/// The global phase exponent `g`, an element of Z/8 tracking the overall
/// phase as a multiple of `exp(i*pi/4)`.
///
/// Modelled as a small additive newtype in the style of the teacher crate's
/// `form::types::PhaseFactor` (`stabilizer-ch-form-rust/src/form/types/phase_factor.rs`),
/// adapted here to the additive semantics `spec.md` §4.3 actually uses
/// (`g += ...`, `g -= ...`) rather than that type's multiplicative
/// composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PhaseExponent(u8);

impl PhaseExponent {
    pub(crate) const ZERO: Self = Self(0);

    /// Adds `delta` (may be negative or exceed 8) and reduces mod 8.
    pub(crate) fn shift(self, delta: i32) -> Self {
        let reduced = (self.0 as i32 + delta).rem_euclid(8);
        Self(reduced as u8)
    }
}

impl Add<i32> for PhaseExponent {
    type Output = Self;
    fn add(self, rhs: i32) -> Self::Output {
        self.shift(rhs)
    }
}

impl AddAssign<i32> for PhaseExponent {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.shift(rhs);
    }
}

impl Sub<i32> for PhaseExponent {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self::Output {
        self.shift(-rhs)
    }
}

impl SubAssign<i32> for PhaseExponent {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.shift(-rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_modulo_eight() {
        let mut g = PhaseExponent::ZERO;
        g += 4;
        g += 6;
        assert_eq!(g, PhaseExponent(2));
        g -= 5;
        assert_eq!(g, PhaseExponent(5));
    }

    #[test]
    fn handles_large_negative_shifts() {
        let g = PhaseExponent::ZERO.shift(-13);
        assert_eq!(g, PhaseExponent(3));
    }
}

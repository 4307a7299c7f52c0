use super::super::QuadraticFormExpansion;

impl QuadraticFormExpansion {
    /// Shared body of `S(j)` and `Sdg(j)`: adds `sign` to `Q[h1, h2]` for
    /// every pair of form variables in `j`'s X-support (flipping the
    /// off-diagonal entries mod 2, shifting the diagonal ones), then
    /// canonicalizes the touched rows/columns.
    fn apply_s_like(&mut self, qubit: usize, sign: i32) {
        let support = self.x_support(qubit);
        for &h1 in &support {
            for &h2 in &support {
                self.q[(h1, h2)] += sign;
            }
        }
        for &k in &support {
            self.reduce_gram_row_col(k);
        }
    }

    /// `SimulateS(j)`.
    pub fn apply_s(&mut self, qubit: usize) {
        self.require_qubit(qubit);
        let sign = if self.b[qubit] { -1 } else { 1 };
        self.apply_s_like(qubit, sign);
        if self.b[qubit] {
            self.g += 2;
        }
    }

    /// `SimulateSdg(j)`, `S`'s inverse: the same congruence with the
    /// opposite sign and phase shift.
    pub fn apply_sdg(&mut self, qubit: usize) {
        self.require_qubit(qubit);
        let sign = if self.b[qubit] { 1 } else { -1 };
        self.apply_s_like(qubit, sign);
        if self.b[qubit] {
            self.g -= 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn s_then_sdg_is_identity() {
        let mut e = QuadraticFormExpansion::new(1).unwrap();
        e.apply_h(0);
        let before = e.clone();
        e.apply_s(0);
        e.apply_sdg(0);
        assert_eq!(e.a, before.a);
        assert_eq!(e.b, before.b);
        assert_eq!(e.q, before.q);
        assert_eq!(e.g, before.g);
    }

    #[test]
    fn s_four_times_is_identity() {
        let mut e = QuadraticFormExpansion::new(1).unwrap();
        e.apply_h(0);
        let before = e.clone();
        for _ in 0..4 {
            e.apply_s(0);
        }
        assert_eq!(e.a, before.a);
        assert_eq!(e.b, before.b);
        assert_eq!(e.q, before.q);
    }
}

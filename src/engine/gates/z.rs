use super::super::QuadraticFormExpansion;

impl QuadraticFormExpansion {
    /// `SimulateZ(j)`: shifts the global phase by `4*b[j]` and toggles the
    /// high bit of the diagonal entry for every form variable in `j`'s
    /// X-support.
    pub fn apply_z(&mut self, qubit: usize) {
        self.require_qubit(qubit);
        if self.b[qubit] {
            self.g += 4;
        }
        for h in self.x_support(qubit) {
            self.q[(h, h)] = (self.q[(h, h)] + 2).rem_euclid(4);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_on_zero_state_is_phaseless() {
        let mut e = QuadraticFormExpansion::new(1).unwrap();
        e.apply_h(0);
        let before = e.g;
        e.apply_z(0);
        e.apply_z(0);
        assert_eq!(e.g, before);
    }
}

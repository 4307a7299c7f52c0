use super::super::QuadraticFormExpansion;

impl QuadraticFormExpansion {
    /// `SimulateMeasZ(j, coin)`: if `j`'s row of `A` is all zero (up to
    /// `r`), `Z` on `j` already has a definite outcome, `b[j]`. Otherwise the
    /// outcome is free: picks the column with a `1` in row `j` whose
    /// support (column weight) is smallest, ties broken by smallest index,
    /// and folds it out fixed to the tossed outcome.
    pub fn measure_z(&mut self, qubit: usize, coin: Option<bool>) -> bool {
        self.require_qubit(qubit);
        let j = qubit;

        if (0..self.r).all(|k| !self.a[(j, k)]) {
            return self.b[j];
        }

        let beta = self.toss_coin(coin);

        let mut best: Option<(usize, usize)> = None; // (column weight, column)
        for k0 in 0..self.r {
            if !self.a[(j, k0)] {
                continue;
            }
            let weight = (0..self.n).filter(|&i| self.a[(i, k0)]).count();
            match best {
                Some((w, _)) if w <= weight => {}
                _ => best = Some((weight, k0)),
            }
        }
        let k = best.expect("row j has at least one set column by the check above").1;

        self.reindex_swap_columns(k, self.r - 1);
        self.make_principal(self.r - 1, j);
        self.fix_final_bit(beta ^ self.b[j]);
        beta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meas_z_on_computational_basis_is_deterministic() {
        let mut e = QuadraticFormExpansion::new(1).unwrap();
        e.apply_x(0);
        let outcome = e.measure_z(0, None);
        assert!(outcome);
        assert!(e.is_deterministic());
    }

    #[test]
    fn meas_z_on_plus_state_honors_supplied_coin() {
        let mut e = QuadraticFormExpansion::new(1).unwrap();
        e.apply_h(0);
        let outcome = e.measure_z(0, Some(true));
        assert!(outcome);
        assert!(!e.is_deterministic());
        assert_eq!(e.rank(), 0);
    }
}

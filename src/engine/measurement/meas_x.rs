use super::super::QuadraticFormExpansion;

impl QuadraticFormExpansion {
    /// `SimulateMeasX(j, coin)`. `principate(j)` first tries to give `j` a
    /// principal column free of other dependents. If that succeeds and the
    /// column's diagonal entry has no off-diagonal coupling left in the
    /// active block, the outcome is already determined by the diagonal
    /// entry (0 -> false, 2 -> true) or, for an odd diagonal (a Y/Z-basis
    /// remainder), resolved by a coin that gets written back as the new
    /// diagonal value. Otherwise a fresh form variable is introduced for `j`
    /// in the `X` basis and the vacated principal column (if any) is
    /// eliminated.
    pub fn measure_x(&mut self, qubit: usize, coin: Option<bool>) -> bool {
        self.require_qubit(qubit);
        let j = qubit;

        let c = self.principate(j);
        let resolved_by_diagonal = match c {
            Some(col) => !(0..self.r).any(|k| k != col && self.q[(col, k)] != 0),
            None => false,
        };

        let beta;
        if resolved_by_diagonal {
            let col = c.unwrap();
            match self.q[(col, col)] {
                0 => return false,
                2 => return true,
                _ => {
                    beta = self.toss_coin(coin);
                    self.q[(col, col)] = if beta { 2 } else { 0 };
                    return beta;
                }
            }
        } else {
            beta = self.toss_coin(coin);
        }

        let r = self.r;
        let a_row: Vec<bool> = (0..r).map(|k| self.a[(j, k)]).collect();
        for k in 0..r {
            self.a[(j, k)] = false;
        }
        for i in 0..self.n {
            self.a[(i, r)] = false;
        }
        self.a[(j, r)] = true;
        self.p.set(r, j);

        for i in 0..=r {
            self.q[(r, i)] = 0;
            self.q[(i, r)] = 0;
        }
        for (h, &ah) in a_row.iter().enumerate() {
            if beta && ah {
                self.q[(h, h)] += 2;
            }
        }
        self.q[(r, r)] = if beta { 2 } else { 0 };
        for (k, &ak) in a_row.iter().enumerate() {
            if ak {
                self.q[(k, k)] = self.q[(k, k)].rem_euclid(4);
            }
        }
        self.r += 1;
        self.b[j] = false;

        if let Some(col) = c {
            self.zero_column_elim(col);
        }
        beta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meas_x_on_plus_state_is_deterministic() {
        let mut e = QuadraticFormExpansion::new(1).unwrap();
        e.apply_h(0);
        let outcome = e.measure_x(0, None);
        assert!(!outcome);
        assert!(e.is_deterministic());
    }

    #[test]
    fn meas_x_on_zero_state_honors_supplied_coin() {
        let mut e = QuadraticFormExpansion::new(1).unwrap();
        let outcome = e.measure_x(0, Some(true));
        assert!(outcome);
        assert!(!e.is_deterministic());
    }
}

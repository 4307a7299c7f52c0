use super::super::QuadraticFormExpansion;

impl QuadraticFormExpansion {
    /// `SimulateMeasY(j, coin)`, the `Y`-basis counterpart of `measure_x`:
    /// the deterministic diagonal values are the odd residues (1 -> false,
    /// 3 -> true) instead of the even ones, and the fresh form variable
    /// introduced on the non-deterministic path carries an odd diagonal
    /// entry from the start.
    pub fn measure_y(&mut self, qubit: usize, coin: Option<bool>) -> bool {
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
                1 => return false,
                3 => return true,
                _ => {
                    beta = self.toss_coin(coin);
                    self.q[(col, col)] = if beta { 3 } else { 1 };
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
        let coeff: i32 = i32::from(self.b[j]) * 2 + i32::from(beta) * 2 + 1;
        for h1 in 0..r {
            for h2 in 0..r {
                if a_row[h1] && a_row[h2] {
                    self.q[(h1, h2)] += coeff;
                }
            }
        }
        self.q[(r, r)] = if beta { 3 } else { 1 };
        for (k, &ak) in a_row.iter().enumerate() {
            if ak {
                self.reduce_gram_row_col(k);
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
    fn meas_y_on_zero_state_honors_supplied_coin() {
        let mut e = QuadraticFormExpansion::new(1).unwrap();
        let outcome = e.measure_y(0, Some(false));
        assert!(!outcome);
        assert!(!e.is_deterministic());
        assert_eq!(e.rank(), 1);
    }

    #[test]
    fn meas_y_matches_the_sdg_h_measz_h_s_composition() {
        for seed in 0..4u64 {
            let mut direct = QuadraticFormExpansion::with_seed(2, seed).unwrap();
            direct.apply_h(0);
            direct.apply_cx(0, 1);

            let mut composed = direct.clone();

            let direct_outcome = direct.measure_y(1, Some(seed % 2 == 0));

            composed.apply_sdg(1);
            composed.apply_h(1);
            let composed_outcome = composed.measure_z(1, Some(seed % 2 == 0));
            composed.apply_h(1);
            composed.apply_s(1);

            assert_eq!(direct_outcome, composed_outcome, "seed {seed}");
            direct.validate().unwrap();
            composed.validate().unwrap();
        }
    }

    #[test]
    fn meas_y_twice_agrees_without_a_second_coin_toss() {
        let mut e = QuadraticFormExpansion::new(1).unwrap();
        let first = e.measure_y(0, Some(true));
        assert!(!e.is_deterministic());
        let second = e.measure_y(0, None);
        assert_eq!(first, second);
    }
}

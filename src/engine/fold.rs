//! `FixFinalBit` and `ZeroColumnElim` of `spec.md` §4.2 — the routines that
//! contract the form by one or two variables. `ZeroColumnElim` is, per
//! `spec.md`, "the hardest part of the engine"; it is ported here as
//! literally as possible from `original_source/simplex.py` rather than
//! re-derived, since the arithmetic (in particular, reducing an entire
//! `r x r` block mod 4 rather than splitting diagonal/off-diagonal
//! reduction in the odd-`u` branch) is exactly what the reference
//! implementation does and is easy to get subtly wrong by "cleaning it up".

use super::QuadraticFormExpansion;

impl QuadraticFormExpansion {
    /// Folds out column `r - 1` by fixing its value to `z`, decrementing
    /// `r`. Requires `r > 0`.
    pub(crate) fn fix_final_bit(&mut self, z: bool) {
        assert!(self.r > 0, "FixFinalBit requires r > 0");
        let old_r = self.r;
        let a_col: Vec<bool> = (0..self.n).map(|i| self.a[(i, old_r - 1)]).collect();
        let q_col: Vec<i32> = (0..old_r - 1).map(|i| self.q[(i, old_r - 1)]).collect();
        let u = self.q[(old_r - 1, old_r - 1)];

        self.decrement_r();

        if z {
            for (i, &q_i) in q_col.iter().enumerate() {
                self.q[(i, i)] = (self.q[(i, i)] + 2 * q_i).rem_euclid(4);
            }
            for (i, &a_i) in a_col.iter().enumerate() {
                self.b[i] ^= a_i;
            }
            self.g += 2 * u;
        }
    }

    /// Eliminates the all-zero column `c` (`A[:, c]` is all zero),
    /// contracting `r` by one or two depending on the parity of the
    /// diagonal entry being folded out.
    pub(crate) fn zero_column_elim(&mut self, c: usize) {
        let r = self.r;
        debug_assert!(r > 0 && c < r);
        debug_assert!((0..self.n).all(|i| !self.a[(i, c)]));

        self.reindex_swap_columns(c, r - 1);
        let q: Vec<i32> = (0..r - 1).map(|i| self.q[(i, r - 1)]).collect();
        let u = self.q[(r - 1, r - 1)];
        self.decrement_r();
        let r = self.r;

        if u % 2 != 0 {
            let delta = u - 2;
            for h1 in 0..r {
                for h2 in 0..r {
                    let add = delta * q[h1] * q[h2];
                    self.q[(h1, h2)] = (self.q[(h1, h2)] + add).rem_euclid(4);
                }
            }
            self.g -= delta;
        } else {
            let Some(l) = q.iter().position(|&v| v == 1) else {
                return;
            };
            for k in 0..r {
                if k != l && q[k] != 0 {
                    self.reindex_subt_column(k, l);
                }
            }
            self.reindex_swap_columns(r - 1, l);
            self.fix_final_bit(u / 2 == 1);
        }
    }
}

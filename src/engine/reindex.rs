//! `ReindexSubtColumn` and `ReindexSwapColumns` of `spec.md` §4.2, the two
//! GF(2)-column reindexing primitives every other update builds on. Ported
//! from `original_source/simplex.py`.

use super::QuadraticFormExpansion;

impl QuadraticFormExpansion {
    /// Adds column `c` into column `k` of `A` over GF(2), and updates row
    /// and column `k` of `Q` with the matching congruence change, reducing
    /// the combined diagonal mod 4 and the off-diagonals mod 2 afterward. A
    /// no-op when `k == c`.
    pub(crate) fn reindex_subt_column(&mut self, k: usize, c: usize) {
        if k == c {
            return;
        }
        for i in 0..self.n {
            self.a[(i, k)] ^= self.a[(i, c)];
        }

        // Column step reads the (still untouched) column c in full before
        // writing column k, matching the sequential semantics of the two
        // vectorized numpy statements this is ported from.
        let old_col_c: Vec<i32> = (0..self.r).map(|i| self.q[(i, c)]).collect();
        for (i, &old) in old_col_c.iter().enumerate() {
            self.q[(i, k)] -= old;
        }

        // Row step reads row c *after* the column step above, which already
        // touched the (c, k) entry.
        let row_c: Vec<i32> = (0..self.r).map(|i| self.q[(c, i)]).collect();
        for (i, &old) in row_c.iter().enumerate() {
            self.q[(k, i)] -= old;
        }

        self.reduce_gram_row_col(k);
    }

    /// Swaps columns `k` and `c` everywhere: in `A`, in `Q`'s rows and
    /// columns, and in the principal map `p`. A no-op when `k == c`.
    pub(crate) fn reindex_swap_columns(&mut self, k: usize, c: usize) {
        if k == c {
            return;
        }
        for i in 0..self.n {
            self.a.swap((i, k), (i, c));
        }
        for i in 0..=self.n {
            self.q.swap((i, k), (i, c));
        }
        for i in 0..=self.n {
            self.q.swap((k, i), (c, i));
        }
        self.p.swap_cols(k, c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subt_column_is_noop_on_equal_indices() {
        let mut e = QuadraticFormExpansion::new(2).unwrap();
        e.r = 1;
        e.q[(0, 0)] = 3;
        let before = e.clone();
        e.reindex_subt_column(0, 0);
        assert_eq!(e.a, before.a);
        assert_eq!(e.q, before.q);
    }

    #[test]
    fn swap_columns_exchanges_a_and_q() {
        let mut e = QuadraticFormExpansion::new(2).unwrap();
        e.r = 2;
        e.a[(0, 0)] = true;
        e.a[(1, 1)] = true;
        e.q[(0, 0)] = 1;
        e.q[(1, 1)] = 2;
        e.q[(0, 1)] = 1;
        e.q[(1, 0)] = 1;
        e.p.set(0, 0);
        e.p.set(1, 1);

        e.reindex_swap_columns(0, 1);

        assert!(e.a[(0, 1)]);
        assert!(e.a[(1, 0)]);
        assert_eq!(e.q[(0, 0)], 2);
        assert_eq!(e.q[(1, 1)], 1);
        assert_eq!(e.p.qubit_of(0), Some(1));
        assert_eq!(e.p.qubit_of(1), Some(0));
    }
}

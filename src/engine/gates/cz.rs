use super::super::QuadraticFormExpansion;

impl QuadraticFormExpansion {
    /// `SimulateCZ(j, k)`: adds the cross terms of `j` and `k`'s X-supports
    /// into `Q` (both orderings, so the off-diagonal entries land doubled on
    /// the shared support and get canonicalized away, leaving only a flip),
    /// applies the diagonal correction carried by each qubit's affine
    /// offset, canonicalizes every touched row/column, then shifts the
    /// global phase when both offsets are set.
    pub fn apply_cz(&mut self, first: usize, second: usize) {
        self.require_qubit(first);
        self.require_qubit(second);
        self.require_distinct(first, second);

        let r = self.r;
        let aj: Vec<bool> = (0..r).map(|h| self.a[(first, h)]).collect();
        let ak: Vec<bool> = (0..r).map(|h| self.a[(second, h)]).collect();

        for h1 in 0..r {
            for h2 in 0..r {
                if aj[h1] && ak[h2] {
                    self.q[(h1, h2)] += 1;
                }
                if ak[h1] && aj[h2] {
                    self.q[(h1, h2)] += 1;
                }
            }
        }

        let bj = self.b[first];
        let bk = self.b[second];
        for h in 0..r {
            let mut delta = 0;
            if bk && aj[h] {
                delta += 2;
            }
            if bj && ak[h] {
                delta += 2;
            }
            self.q[(h, h)] += delta;
        }

        for h in 0..r {
            if aj[h] || ak[h] {
                self.reduce_gram_row_col(h);
            }
        }

        if bj && bk {
            self.g += 4;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cz_is_its_own_inverse() {
        let mut e = QuadraticFormExpansion::new(2).unwrap();
        e.apply_h(0);
        e.apply_h(1);
        let before = e.clone();
        e.apply_cz(0, 1);
        e.apply_cz(0, 1);
        assert_eq!(e.a, before.a);
        assert_eq!(e.b, before.b);
        assert_eq!(e.q, before.q);
    }

    #[test]
    #[should_panic]
    fn cz_panics_on_equal_indices() {
        let mut e = QuadraticFormExpansion::new(2).unwrap();
        e.apply_cz(1, 1);
    }
}

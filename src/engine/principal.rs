//! The principal index map `p` and the primitives that keep it in sync with
//! `A`: `MakePrincipal`, `ReselectPrincipalRow`, `principate`, and
//! `decrement_r` of `spec.md` §4.2, ported from `original_source/simplex.py`
//! (which keeps `p` as a `bidict`).

use super::QuadraticFormExpansion;

/// A hand-rolled bidirectional partial map between form-variable columns
/// (`< r`) and qubit indices (`< n`), replacing the Python implementation's
/// `bidict`. `spec.md` §9 ("Bidirectional principal map") requires both
/// directions be kept in sync atomically; `set`/`remove_col` are the only
/// ways to mutate either side, so that invariant can't be broken locally.
#[derive(Debug, Clone)]
pub(crate) struct PrincipalMap {
    /// indexed by column, `n+1` long (column `n` is the scratch slot).
    col_to_qubit: Vec<Option<usize>>,
    /// indexed by qubit, `n` long.
    qubit_to_col: Vec<Option<usize>>,
}

impl PrincipalMap {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            col_to_qubit: vec![None; n + 1],
            qubit_to_col: vec![None; n],
        }
    }

    pub(crate) fn qubit_of(&self, col: usize) -> Option<usize> {
        self.col_to_qubit[col]
    }

    pub(crate) fn col_of(&self, qubit: usize) -> Option<usize> {
        self.qubit_to_col[qubit]
    }

    /// Records that column `col` is principal for qubit `qubit`, clearing
    /// any previous mapping either was party to.
    pub(crate) fn set(&mut self, col: usize, qubit: usize) {
        if let Some(old_qubit) = self.col_to_qubit[col] {
            self.qubit_to_col[old_qubit] = None;
        }
        if let Some(old_col) = self.qubit_to_col[qubit] {
            self.col_to_qubit[old_col] = None;
        }
        self.col_to_qubit[col] = Some(qubit);
        self.qubit_to_col[qubit] = Some(col);
    }

    pub(crate) fn remove_col(&mut self, col: usize) {
        if let Some(qubit) = self.col_to_qubit[col].take() {
            self.qubit_to_col[qubit] = None;
        }
    }

    /// Swaps whatever qubit assignments columns `k` and `c` carry (if any).
    /// Ported from `ReindexSwapColumns`'s handling of `p`.
    pub(crate) fn swap_cols(&mut self, k: usize, c: usize) {
        if k == c {
            return;
        }
        let at_k = self.col_to_qubit[k];
        let at_c = self.col_to_qubit[c];
        self.remove_col(k);
        self.remove_col(c);
        if let Some(qubit) = at_k {
            self.set(c, qubit);
        }
        if let Some(qubit) = at_c {
            self.set(k, qubit);
        }
    }
}

impl QuadraticFormExpansion {
    /// `MakePrincipal(c, j)`: if `A[j, c] = 1`, eliminate the other 1s in
    /// row `j` (among columns `< r`) by subtracting column `c` into them,
    /// then record `p[c] = j`.
    pub(crate) fn make_principal(&mut self, c: usize, j: usize) {
        if !self.a[(j, c)] {
            return;
        }
        for k in 0..self.r {
            if k != c && self.a[(j, k)] {
                self.reindex_subt_column(k, c);
            }
        }
        self.p.set(c, j);
    }

    /// `ReselectPrincipalRow(j, c)`: picks the minimum-weight row `j0 != j`
    /// with `A[j0, c] = 1` (ties broken by smallest index) and makes column
    /// `c` principal for it. `j` may be absent (pass `None`) to consider all
    /// rows, as `SimulateCX` does.
    pub(crate) fn reselect_principal_row(&mut self, j: Option<usize>, c: usize) {
        let mut best: Option<(usize, usize)> = None; // (weight, row)
        for j1 in 0..self.n {
            if Some(j1) == j {
                continue;
            }
            if !self.a[(j1, c)] {
                continue;
            }
            let weight = (0..self.r).filter(|&k| self.a[(j1, k)]).count();
            match best {
                Some((w, _)) if w <= weight => {}
                _ => best = Some((weight, j1)),
            }
        }
        if let Some((_, j0)) = best {
            self.make_principal(c, j0);
        }
    }

    /// `principate(j)`: prepares qubit `j` for an operation that needs its
    /// row free to mutate, by reselecting a principal row for its current
    /// principal column (if it has one). Returns the column if, after
    /// reselection, it is still (or again) principal for `j`; `None`
    /// otherwise.
    pub(crate) fn principate(&mut self, j: usize) -> Option<usize> {
        let c = self.p.col_of(j)?;
        self.reselect_principal_row(Some(j), c);
        if self.p.qubit_of(c) == Some(j) {
            Some(c)
        } else {
            None
        }
    }

    /// Drops the (scratch) column `r - 1` from `p` and shrinks `r`.
    pub(crate) fn decrement_r(&mut self) {
        self.p.remove_col(self.r - 1);
        self.r -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_cols_exchanges_assignments() {
        let mut p = PrincipalMap::new(3);
        p.set(0, 2);
        p.set(1, 0);
        p.swap_cols(0, 1);
        assert_eq!(p.qubit_of(0), Some(0));
        assert_eq!(p.qubit_of(1), Some(2));
        assert_eq!(p.col_of(0), Some(1));
        assert_eq!(p.col_of(2), Some(0));
    }

    #[test]
    fn swap_cols_handles_one_sided_assignment() {
        let mut p = PrincipalMap::new(3);
        p.set(0, 2);
        p.swap_cols(0, 1);
        assert_eq!(p.qubit_of(0), None);
        assert_eq!(p.qubit_of(1), Some(2));
        assert_eq!(p.col_of(2), Some(1));
    }

    #[test]
    fn set_overwrites_stale_bindings_on_both_sides() {
        let mut p = PrincipalMap::new(2);
        p.set(0, 1);
        p.set(1, 1);
        assert_eq!(p.col_of(1), Some(1));
        assert_eq!(p.qubit_of(0), None);
    }
}

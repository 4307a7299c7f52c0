use super::super::QuadraticFormExpansion;

impl QuadraticFormExpansion {
    /// `SimulateH(j)`: extends the form with a fresh variable at column `r`
    /// tied to `j`, moving `j`'s old row of `A` and the diagonal phase it
    /// carried into the new column/row of `Q`, then eliminates the principal
    /// column `j` vacated (if any).
    pub fn apply_h(&mut self, qubit: usize) {
        self.require_qubit(qubit);
        let j = qubit;

        let mut freed = self.p.col_of(j);
        if let Some(col) = freed {
            self.reselect_principal_row(Some(j), col);
            if self.p.qubit_of(col) != Some(j) {
                freed = None;
            }
        }

        let r = self.r;
        let old_row: Vec<bool> = (0..r).map(|k| self.a[(j, k)]).collect();
        for k in 0..r {
            self.a[(j, k)] = false;
        }
        for i in 0..self.n {
            self.a[(i, r)] = false;
        }
        self.a[(j, r)] = true;
        self.p.set(r, j);

        for (k, &v) in old_row.iter().enumerate() {
            let entry = if v { 1 } else { 0 };
            self.q[(r, k)] = entry;
            self.q[(k, r)] = entry;
        }
        self.q[(r, r)] = if self.b[j] { 2 } else { 0 };
        self.b[j] = false;
        self.r += 1;

        if let Some(col) = freed {
            self.zero_column_elim(col);
        }
    }
}

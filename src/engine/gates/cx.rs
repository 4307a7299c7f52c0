use super::super::QuadraticFormExpansion;

impl QuadraticFormExpansion {
    /// `SimulateCX(control, target)`: adds the control's row of `A` into the
    /// target's row over GF(2), XORs the affine offsets to match, then
    /// reselects a principal row for the target's old principal column (if
    /// it had one), since that row just changed under it.
    pub fn apply_cx(&mut self, control: usize, target: usize) {
        self.require_qubit(control);
        self.require_qubit(target);
        self.require_distinct(control, target);

        for k in 0..self.r {
            if self.a[(control, k)] {
                self.a[(target, k)] ^= true;
            }
        }
        self.b[target] ^= self.b[control];

        if let Some(col) = self.p.col_of(target) {
            self.reselect_principal_row(None, col);
        }
    }
}

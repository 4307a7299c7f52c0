use rand::Rng;

use super::super::QuadraticFormExpansion;

impl QuadraticFormExpansion {
    /// Resolves a measurement outcome that isn't forced by the state:
    /// returns the caller-supplied `coin` if given, otherwise samples a fair
    /// coin from the engine's own RNG. Either way, the state is no longer
    /// guaranteed deterministic from here on (`spec.md` §4.4, §9).
    pub(crate) fn toss_coin(&mut self, coin: Option<bool>) -> bool {
        self.deterministic = false;
        match coin {
            Some(bit) => bit,
            None => self.rng.gen_bool(0.5),
        }
    }
}

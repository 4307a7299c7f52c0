//! Clifford generator updates of `spec.md` §4.3, one gate per file, mirroring
//! the teacher crate's `form/left_multiplication/*.rs` layout.

mod cx;
mod cz;
mod h;
mod s;
mod x;
mod y;
mod z;

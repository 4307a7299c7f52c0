//! Pauli-basis measurement of `spec.md` §4.4: `MeasZ`, `MeasX`, `MeasY`, and
//! the shared coin toss that reports a measurement as probabilistic.

mod coin;
mod meas_x;
mod meas_y;
mod meas_z;

//! Invariant checking of `spec.md` §3: symmetry and range of `Q`, principal
//! map consistency with `A`, and `rank(A[:, 0..r]) = r`. The rank check is
//! an in-crate GF(2) Gaussian elimination, replacing
//! `original_source/simplex.py`'s `rank.sage` subprocess call (see
//! `DESIGN.md`).

use super::QuadraticFormExpansion;
use crate::error::{QfeError, Result};

pub(crate) fn validate(e: &QuadraticFormExpansion) -> Result<()> {
    if e.r > e.n {
        return Err(QfeError::InvariantViolated(format!(
            "r = {} exceeds n = {}",
            e.r, e.n
        )));
    }

    for i in 0..e.r {
        for j in 0..e.r {
            if e.q[(i, j)] != e.q[(j, i)] {
                return Err(QfeError::InvariantViolated(format!(
                    "Q is not symmetric at ({i}, {j}): {} != {}",
                    e.q[(i, j)],
                    e.q[(j, i)]
                )));
            }
        }
        let diag = e.q[(i, i)];
        if !(0..4).contains(&diag) {
            return Err(QfeError::InvariantViolated(format!(
                "Q[{i}, {i}] = {diag} is out of range 0..4"
            )));
        }
        for j in 0..e.r {
            if i == j {
                continue;
            }
            let off = e.q[(i, j)];
            if off != 0 && off != 1 {
                return Err(QfeError::InvariantViolated(format!(
                    "Q[{i}, {j}] = {off} is out of range {{0, 1}}"
                )));
            }
        }
    }

    for c in 0..e.r {
        let Some(j) = e.p.qubit_of(c) else {
            continue;
        };
        if !e.a[(j, c)] {
            return Err(QfeError::InvariantViolated(format!(
                "p maps column {c} to qubit {j}, but A[{j}, {c}] = 0"
            )));
        }
        let weight = (0..e.r).filter(|&k| e.a[(j, k)]).count();
        if weight != 1 {
            return Err(QfeError::InvariantViolated(format!(
                "row {j} of A has weight {weight} over the active columns, expected 1 (principal for column {c})"
            )));
        }
    }

    let rank = gf2_rank(e);
    if rank != e.r {
        return Err(QfeError::InvariantViolated(format!(
            "rank(A[:, 0..r]) = {rank} != r = {}",
            e.r
        )));
    }

    Ok(())
}

/// GF(2) rank of `A[:, 0..r]` by Gaussian elimination, replacing the
/// reference implementation's external `rank.sage` call.
fn gf2_rank(e: &QuadraticFormExpansion) -> usize {
    let mut rows: Vec<Vec<bool>> = (0..e.n)
        .map(|i| (0..e.r).map(|j| e.a[(i, j)]).collect())
        .collect();

    let mut rank = 0;
    for col in 0..e.r {
        let Some(pivot) = (rank..e.n).find(|&row| rows[row][col]) else {
            continue;
        };
        rows.swap(rank, pivot);
        for row in 0..e.n {
            if row != rank && rows[row][col] {
                for c in 0..e.r {
                    let pivot_val = rows[rank][c];
                    rows[row][c] ^= pivot_val;
                }
            }
        }
        rank += 1;
    }
    rank
}

// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! Input validation for density matrices.

use ndarray::Array2;
use num_complex::Complex64;

use crate::config::ValidationConfig;
use crate::error::{Result, ValidationError};
use crate::linalg::trace;

/// Hilbert space dimension of the two-qubit model.
pub const DIM: usize = 4;

/// Validate a density matrix entering the pipeline.
///
/// Always checks the 4×4 shape and entry finiteness. In strict mode also
/// checks Hermiticity and unit trace within the configured tolerance.
pub fn validate_density_matrix(rho: &Array2<Complex64>, config: &ValidationConfig) -> Result<()> {
    if rho.nrows() != DIM || rho.ncols() != DIM {
        return Err(ValidationError::Shape {
            expected: (DIM, DIM),
            actual: (rho.nrows(), rho.ncols()),
        }
        .into());
    }

    for ((i, j), z) in rho.indexed_iter() {
        if !z.re.is_finite() || !z.im.is_finite() {
            return Err(ValidationError::NonFiniteEntry { row: i, col: j }.into());
        }
    }

    if config.strict {
        for i in 0..DIM {
            for j in i..DIM {
                let delta = (rho[[i, j]] - rho[[j, i]].conj()).norm();
                if delta > config.tolerance {
                    return Err(ValidationError::PhysicsConstraint(format!(
                        "density matrix is not Hermitian: |rho[{i},{j}] - conj(rho[{j},{i}])| = {delta:.3e}"
                    ))
                    .into());
                }
            }
        }

        let tr = trace(rho);
        if (tr.re - 1.0).abs() > config.tolerance || tr.im.abs() > config.tolerance {
            return Err(ValidationError::PhysicsConstraint(format!(
                "density matrix trace is {:.6} + {:.3e}i, expected 1",
                tr.re, tr.im
            ))
            .into());
        }
    }

    Ok(())
}

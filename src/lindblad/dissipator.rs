// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! Lindblad dissipator for a single jump operator.

use ndarray::Array2;
use num_complex::Complex64;

use crate::linalg::dagger;

use super::types::JumpOperator;

/// Compute the dissipator contribution D[L](ρ) = γ (L ρ L† − ½ L†L ρ − ½ ρ L†L).
///
/// Returns the zero matrix when the rate vanishes, so a γ = 0 run leaves
/// the state untouched.
pub fn dissipator(op: &JumpOperator, rho: &Array2<Complex64>) -> Array2<Complex64> {
    if op.rate == 0.0 {
        return Array2::zeros(rho.raw_dim());
    }

    let l = &op.matrix;
    let l_dag = dagger(l);
    let l_dag_l = l_dag.dot(l);

    let l_rho_ldag = l.dot(rho).dot(&l_dag);
    let ldl_rho = l_dag_l.dot(rho);
    let rho_ldl = rho.dot(&l_dag_l);

    let half = Complex64::new(0.5, 0.0);
    (&l_rho_ldag - half * &ldl_rho - half * &rho_ldl) * Complex64::new(op.rate, 0.0)
}

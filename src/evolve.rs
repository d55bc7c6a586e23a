// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! Unitary time evolution of density matrices.
//!
//! A Hermitian generator H evolved for time t yields the propagator
//! U = exp(−i·H·t/ħ); states advance by conjugation ρ → U ρ U†, which
//! preserves trace and Hermiticity exactly (to numerical precision).

use ndarray::Array2;
use num_complex::Complex64;

use crate::linalg::{dagger, expm};

/// Build the unitary propagator U = exp(−i·H·t/ħ) for a generator H.
///
/// Precondition: `hamiltonian` is square and Hermitian. This is not checked
/// here; the crate only constructs generators that satisfy it, and the
/// property tests assert unitarity of the result for both of them.
pub fn propagator(hamiltonian: &Array2<Complex64>, duration: f64, h_bar: f64) -> Array2<Complex64> {
    let phase = Complex64::new(0.0, -duration / h_bar);
    expm(&hamiltonian.mapv(|z| z * phase))
}

/// Advance a density matrix by conjugation: ρ → U ρ U†.
pub fn conjugate(u: &Array2<Complex64>, rho: &Array2<Complex64>) -> Array2<Complex64> {
    u.dot(rho).dot(&dagger(u))
}

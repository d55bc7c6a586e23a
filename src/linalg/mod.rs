// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! Small complex linear-algebra helpers shared across the pipeline.
//!
//! Everything here operates on dense `Array2<Complex64>`; the simulator's
//! Hilbert space is fixed at dimension 4, so no effort is spent on large-d
//! performance.

pub mod expm;

pub use expm::expm;

use ndarray::Array2;
use num_complex::Complex64;

/// Conjugate transpose (dagger) of a matrix.
pub fn dagger(m: &Array2<Complex64>) -> Array2<Complex64> {
    m.t().mapv(|z| z.conj())
}

/// Trace of a square matrix.
pub fn trace(m: &Array2<Complex64>) -> Complex64 {
    let d = m.nrows();
    let mut tr = Complex64::new(0.0, 0.0);
    for i in 0..d {
        tr += m[[i, i]];
    }
    tr
}

/// Purity Tr(ρ²) of a density matrix.
pub fn purity(rho: &Array2<Complex64>) -> f64 {
    trace(&rho.dot(rho)).re
}

/// n×n complex identity matrix.
pub fn identity(n: usize) -> Array2<Complex64> {
    Array2::from_diag_elem(n, Complex64::new(1.0, 0.0))
}

/// Kronecker (tensor) product a ⊗ b.
pub fn kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let (ar, ac) = (a.nrows(), a.ncols());
    let (br, bc) = (b.nrows(), b.ncols());
    let mut out = Array2::zeros((ar * br, ac * bc));
    for i in 0..ar {
        for j in 0..ac {
            for k in 0..br {
                for l in 0..bc {
                    out[[i * br + k, j * bc + l]] = a[[i, j]] * b[[k, l]];
                }
            }
        }
    }
    out
}

/// True if every entry of the matrix is finite.
pub fn all_finite(m: &Array2<Complex64>) -> bool {
    m.iter().all(|z| z.re.is_finite() && z.im.is_finite())
}

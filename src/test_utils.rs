// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared test fixtures and matrix assertions.

use ndarray::Array2;
use num_complex::Complex64;

/// ρ = |++⟩⟨++|: the uniform superposition projector, every entry 1/4.
pub fn plus_plus_density() -> Array2<Complex64> {
    Array2::from_elem((4, 4), Complex64::new(0.25, 0.0))
}

/// Maximally mixed two-qubit state I/4.
pub fn maximally_mixed_density() -> Array2<Complex64> {
    Array2::from_diag_elem(4, Complex64::new(0.25, 0.0))
}

/// Assert two complex matrices agree entrywise within `tol`.
pub fn assert_matrix_close(a: &Array2<Complex64>, b: &Array2<Complex64>, tol: f64) {
    assert_eq!(a.shape(), b.shape());
    for ((i, j), val) in a.indexed_iter() {
        let diff = (val - b[[i, j]]).norm();
        assert!(
            diff < tol,
            "Mismatch at ({}, {}): {:?} vs {:?} (diff={})",
            i,
            j,
            val,
            b[[i, j]],
            diff
        );
    }
}

/// Assert a matrix equals its conjugate transpose within `tol`.
pub fn assert_hermitian(m: &Array2<Complex64>, tol: f64) {
    for ((i, j), val) in m.indexed_iter() {
        let diff = (val - m[[j, i]].conj()).norm();
        assert!(
            diff < tol,
            "Not Hermitian at ({}, {}): {:?} vs conj {:?} (diff={})",
            i,
            j,
            val,
            m[[j, i]],
            diff
        );
    }
}

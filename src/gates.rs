// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! Gate Hamiltonians and fixed operators of the two-qubit model.
//!
//! Gates are not applied as abstract matrices: each one is realized by a
//! constant Hermitian generator whose π-rotation time evolution produces
//! the gate unitary. The two generators here are the only ones the
//! Deutsch–Jozsa sequence needs.

use ndarray::Array2;
use num_complex::Complex64;

use crate::linalg::{identity, kron};

/// Generator realizing a Hadamard on both qubits jointly.
///
/// H_12 = −(b/4) · M with the fixed sign pattern
///
/// ```text
///   [ 1  1  1  1 ]
///   [ 1 -1  1 -1 ]
///   [ 1  1 -1 -1 ]
///   [ 1 -1 -1  1 ]
/// ```
///
/// M equals 2·(H ⊗ H), so conjugation by exp(−i·H_12·t_h/ħ) with
/// t_h = π·ħ/b acts as H ⊗ H on a density matrix (up to global phase).
pub fn hadamard_generator(coupling: f64) -> Array2<Complex64> {
    const PATTERN: [[f64; 4]; 4] = [
        [1.0, 1.0, 1.0, 1.0],
        [1.0, -1.0, 1.0, -1.0],
        [1.0, 1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0, 1.0],
    ];
    let scale = -coupling / 4.0;
    Array2::from_shape_fn((4, 4), |(i, j)| Complex64::new(scale * PATTERN[i][j], 0.0))
}

/// Generator realizing a phase flip (Z) on the second qubit only.
///
/// H_z2 = (b/2) · diag(1, −1, 1, −1) = (b/2) · (I ⊗ Z).
pub fn phase_flip_generator(coupling: f64) -> Array2<Complex64> {
    let scale = coupling / 2.0;
    let mut h = Array2::zeros((4, 4));
    for i in 0..4 {
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        h[[i, i]] = Complex64::new(scale * sign, 0.0);
    }
    h
}

/// Lowering (jump) operator for amplitude damping on the second qubit:
/// L = I₂ ⊗ σ⁻ with σ⁻ = |0⟩⟨1|.
pub fn lowering_operator() -> Array2<Complex64> {
    let mut sigma_minus = Array2::zeros((2, 2));
    sigma_minus[[0, 1]] = Complex64::new(1.0, 0.0);
    kron(&identity(2), &sigma_minus)
}

/// Density matrix |i⟩⟨i| of a two-qubit computational basis state.
///
/// Index order matches the basis labels: 0 → |00⟩, 1 → |01⟩, 2 → |10⟩,
/// 3 → |11⟩.
///
/// # Panics
/// Panics if `index > 3`.
pub fn basis_state_density(index: usize) -> Array2<Complex64> {
    assert!(index < 4, "two-qubit basis index must be 0..=3");
    let mut rho = Array2::zeros((4, 4));
    rho[[index, index]] = Complex64::new(1.0, 0.0);
    rho
}

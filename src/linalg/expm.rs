// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! Matrix exponential via scaling-and-squaring with Padé(13) approximation.
//!
//! Implements the algorithm from:
//!   Higham (2005), "The Scaling and Squaring Method for the Matrix
//!   Exponential Revisited", SIAM J. Matrix Anal. Appl. 26(4), 1179.
//!
//! The simulator only ever exponentiates (anti-Hermitian) 4×4 generators
//! whose scaled norm sits comfortably below the Padé(13) threshold, so a
//! single approximant order suffices.

use ndarray::Array2;
use num_complex::Complex64;

/// Padé(13,13) numerator coefficients b0..b13 (Higham 2005, Table 10.4).
const B: [f64; 14] = [
    64_764_752_532_480_000.0,
    32_382_376_266_240_000.0,
    7_771_770_303_897_600.0,
    1_187_353_796_428_800.0,
    129_060_195_264_000.0,
    10_559_470_521_600.0,
    670_442_572_800.0,
    33_522_128_640.0,
    1_323_241_920.0,
    40_840_800.0,
    960_960.0,
    16_380.0,
    182.0,
    1.0,
];

/// Scaling threshold θ₁₃ (Higham 2005, Table 10.2).
const THETA_13: f64 = 5.371_920_351_148_152;

/// Compute the matrix exponential exp(A) of a square complex matrix.
///
/// # Panics
/// Panics if `a` is not square.
pub fn expm(a: &Array2<Complex64>) -> Array2<Complex64> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "expm requires a square matrix");

    // Scaling: bring ||A/2^s||₁ below θ₁₃
    let norm = one_norm(a);
    let s = if norm > THETA_13 {
        (norm / THETA_13).log2().ceil() as u32
    } else {
        0
    };
    let scaled = a.mapv(|z| z / (1u64 << s) as f64);

    // Padé(13) approximant of exp(A/2^s)
    let mut result = pade13(&scaled);

    // Undo the scaling: exp(A) = exp(A/2^s)^(2^s)
    for _ in 0..s {
        result = result.dot(&result);
    }
    result
}

/// Padé(13,13) approximation exp(A) ≈ (V − U)⁻¹ (V + U), where U collects
/// the odd powers of A and V the even powers.
fn pade13(a: &Array2<Complex64>) -> Array2<Complex64> {
    let n = a.nrows();
    let eye = Array2::from_diag_elem(n, Complex64::new(1.0, 0.0));

    let a2 = a.dot(a);
    let a4 = a2.dot(&a2);
    let a6 = a2.dot(&a4);

    // Odd part: U = A (A6 (b13 A6 + b11 A4 + b9 A2) + b7 A6 + b5 A4 + b3 A2 + b1 I)
    let u_inner = &a6 * c(B[13]) + &a4 * c(B[11]) + &a2 * c(B[9]);
    let u = a.dot(
        &(u_inner.dot(&a6) + &a6 * c(B[7]) + &a4 * c(B[5]) + &a2 * c(B[3]) + &eye * c(B[1])),
    );

    // Even part: V = A6 (b12 A6 + b10 A4 + b8 A2) + b6 A6 + b4 A4 + b2 A2 + b0 I
    let v_inner = &a6 * c(B[12]) + &a4 * c(B[10]) + &a2 * c(B[8]);
    let v = v_inner.dot(&a6) + &a6 * c(B[6]) + &a4 * c(B[4]) + &a2 * c(B[2]) + &eye * c(B[0]);

    // (V − U) is nonsingular for ||A||₁ ≤ θ₁₃ (Higham 2005, §3), so the
    // solve below is well posed.
    solve(&v - &u, &v + &u)
}

#[inline]
fn c(x: f64) -> Complex64 {
    Complex64::new(x, 0.0)
}

/// Solve A X = B by LU factorization with partial pivoting.
fn solve(a: Array2<Complex64>, b: Array2<Complex64>) -> Array2<Complex64> {
    let n = a.nrows();
    let m = b.ncols();
    let mut lu = a;
    let mut x = b;

    // Factor: after elimination, lu holds L (below diagonal, unit diagonal
    // implied) and U (on and above). Row swaps are applied to x directly.
    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_mag = lu[[col, col]].norm();
        for row in (col + 1)..n {
            let mag = lu[[row, col]].norm();
            if mag > pivot_mag {
                pivot_mag = mag;
                pivot_row = row;
            }
        }
        if pivot_row != col {
            for j in 0..n {
                lu.swap([col, j], [pivot_row, j]);
            }
            for j in 0..m {
                x.swap([col, j], [pivot_row, j]);
            }
        }

        let pivot = lu[[col, col]];
        for row in (col + 1)..n {
            let factor = lu[[row, col]] / pivot;
            lu[[row, col]] = factor;
            for j in (col + 1)..n {
                let above = lu[[col, j]];
                lu[[row, j]] -= factor * above;
            }
            for j in 0..m {
                let above = x[[col, j]];
                x[[row, j]] -= factor * above;
            }
        }
    }

    // Back substitution with U
    for col in (0..n).rev() {
        let pivot = lu[[col, col]];
        for j in 0..m {
            let mut sum = x[[col, j]];
            for k in (col + 1)..n {
                sum -= lu[[col, k]] * x[[k, j]];
            }
            x[[col, j]] = sum / pivot;
        }
    }
    x
}

/// 1-norm of a complex matrix: maximum absolute column sum.
fn one_norm(a: &Array2<Complex64>) -> f64 {
    let mut max_sum = 0.0f64;
    for j in 0..a.ncols() {
        let col_sum: f64 = (0..a.nrows()).map(|i| a[[i, j]].norm()).sum();
        max_sum = max_sum.max(col_sum);
    }
    max_sum
}

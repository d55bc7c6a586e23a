// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! First-order damping steps with guarded trace renormalization.

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{NumericalError, Result};
use crate::linalg::{all_finite, trace};

use super::dissipator::dissipator;
use super::types::{DampingSchedule, JumpOperator};

/// Minimum trace magnitude accepted by the renormalization division.
const TRACE_FLOOR: f64 = 1e-12;

/// Advance a density matrix by one Euler step of the damping channel:
/// ρ' = (ρ + D[L](ρ)·Δt) / Tr(ρ + D[L](ρ)·Δt).
///
/// The renormalization runs unconditionally, matching the reference model;
/// it restores unit trace but not positive-semidefiniteness. The division
/// is guarded: a vanishing or non-finite trace aborts the run instead of
/// propagating NaN/Inf into the reported probabilities.
pub fn damp_step(
    rho: &Array2<Complex64>,
    op: &JumpOperator,
    delta_t: f64,
) -> Result<Array2<Complex64>> {
    let d = dissipator(op, rho);
    let updated = rho + &(d * Complex64::new(delta_t, 0.0));

    if !all_finite(&updated) {
        return Err(NumericalError::NonFinite {
            stage: "damping update".into(),
        }
        .into());
    }

    let tr = trace(&updated);
    if !tr.re.is_finite() || !tr.im.is_finite() || tr.norm() < TRACE_FLOOR {
        return Err(NumericalError::VanishingTrace { trace: tr.re }.into());
    }

    Ok(updated.mapv(|z| z / tr))
}

/// Run the full damping loop over the schedule's Δt progression.
pub fn damp(
    mut rho: Array2<Complex64>,
    op: &JumpOperator,
    schedule: &DampingSchedule,
) -> Result<Array2<Complex64>> {
    for (step, delta_t) in schedule.increments().into_iter().enumerate() {
        rho = damp_step(&rho, op, delta_t)?;
        tracing::trace!(step, delta_t, "damping step applied");
    }
    Ok(rho)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::basis_state_density;
    use crate::test_utils::{assert_hermitian, assert_matrix_close, plus_plus_density};
    use approx::assert_relative_eq;

    fn damping(rate: f64) -> JumpOperator {
        JumpOperator::second_qubit_damping(rate)
    }

    #[test]
    fn test_step_renormalizes_trace() {
        let rho = plus_plus_density();
        let out = damp_step(&rho, &damping(0.1), 1.0).unwrap();
        assert_relative_eq!(trace(&out).re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(trace(&out).im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_step_preserves_hermiticity() {
        let rho = plus_plus_density();
        let out = damp_step(&rho, &damping(0.1), 1.0).unwrap();
        assert_hermitian(&out, 1e-12);
    }

    #[test]
    fn test_zero_rate_leaves_state_unchanged() {
        // γ = 0: the dissipator is zero and renormalization divides by 1
        let rho = plus_plus_density();
        let out = damp_step(&rho, &damping(0.0), 1.0).unwrap();
        assert_matrix_close(&out, &rho, 1e-15);
    }

    #[test]
    fn test_excited_population_moves_to_ground() {
        // One step on |01⟩⟨01| with γ = 0.1, Δt = 1:
        // ρ' = 0.9 |01⟩⟨01| + 0.1 |00⟩⟨00|
        let out = damp_step(&basis_state_density(1), &damping(0.1), 1.0).unwrap();
        assert_relative_eq!(out[[0, 0]].re, 0.1, epsilon = 1e-12);
        assert_relative_eq!(out[[1, 1]].re, 0.9, epsilon = 1e-12);
        assert_relative_eq!(out[[2, 2]].re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(out[[3, 3]].re, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_loop_follows_schedule() {
        // Three steps use Δt = 1, 1, 2. With D recomputed each step the
        // excited population contracts by (1 − γΔt) per step (the trace
        // stays 1 for diagonal states under this channel).
        let gamma = 0.1;
        let out = damp(
            basis_state_density(1),
            &damping(gamma),
            &DampingSchedule::new(3),
        )
        .unwrap();
        let expected_excited = (1.0 - gamma) * (1.0 - gamma) * (1.0 - 2.0 * gamma);
        assert_relative_eq!(out[[1, 1]].re, expected_excited, epsilon = 1e-12);
        assert_relative_eq!(trace(&out).re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vanishing_trace_is_an_error() {
        let zero = Array2::<Complex64>::zeros((4, 4));
        let result = damp_step(&zero, &damping(0.1), 1.0);
        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("trace"));
    }

    #[test]
    fn test_non_finite_input_is_an_error() {
        let mut rho = basis_state_density(1);
        rho[[0, 0]] = Complex64::new(f64::NAN, 0.0);
        assert!(damp_step(&rho, &damping(0.1), 1.0).is_err());
    }
}

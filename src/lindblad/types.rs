// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! Types for the discrete damping loop.

use ndarray::Array2;
use num_complex::Complex64;

use crate::gates::lowering_operator;

/// A Lindblad jump operator with its rate.
///
/// The model has a single dissipation channel: amplitude damping of the
/// second qubit, L = I₂ ⊗ σ⁻ at rate γ.
#[derive(Debug, Clone)]
pub struct JumpOperator {
    /// Operator matrix (4 × 4, pre-tensored to the full Hilbert space).
    pub matrix: Array2<Complex64>,
    /// Decay rate γ.
    pub rate: f64,
    /// Human-readable label.
    pub label: String,
}

impl JumpOperator {
    /// Amplitude damping channel on the second qubit.
    pub fn second_qubit_damping(rate: f64) -> Self {
        Self {
            matrix: lowering_operator(),
            rate,
            label: "T1_q1".into(),
        }
    }
}

/// The Δt progression of the discrete damping loop.
///
/// The reference model starts at Δt = 1 and adds the loop index after each
/// iteration, so for k = 0, 1, 2, ... the increments used are 1, 1, 2, 4,
/// 7, ... The sequence is precomputed here instead of mutating an
/// accumulator inside the loop.
#[derive(Debug, Clone)]
pub struct DampingSchedule {
    /// Number of Euler steps.
    pub steps: usize,
}

impl DampingSchedule {
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }

    /// The Δt value used at each iteration.
    pub fn increments(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.steps);
        let mut delta_t = 1.0;
        for k in 0..self.steps {
            out.push(delta_t);
            delta_t += k as f64;
        }
        out
    }
}

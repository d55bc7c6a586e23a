// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! The full Deutsch–Jozsa pulse sequence.
//!
//! A run is a linear pipeline over one density matrix:
//!
//! ```text
//! init → Hadamard pulse → oracle → Hadamard pulse → damping loop → done
//! ```
//!
//! Each stage consumes its input state and produces the next one; nothing
//! is retried or branched outside the oracle.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::evolve::{conjugate, propagator};
use crate::gates::hadamard_generator;
use crate::lindblad::{damp, DampingSchedule, JumpOperator};
use crate::linalg::{purity, trace};
use crate::oracle::{Oracle, OracleMode};
use crate::validation::validate_density_matrix;

/// Result of a Deutsch–Jozsa run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Final density matrix after the damping loop.
    pub final_density_matrix: Array2<Complex64>,
    /// Which oracle branch ran.
    pub oracle_mode: OracleMode,
    /// Trace of the final density matrix (should be ~1.0).
    pub final_trace: f64,
    /// Purity Tr(ρ²) of the final state (< 1.0 once damping mixes it).
    pub final_purity: f64,
    /// Number of damping steps taken.
    pub damping_steps: usize,
}

/// Run the Deutsch–Jozsa sequence from a caller-supplied initial state.
///
/// The canonical initial state is |00⟩⟨00| (`gates::basis_state_density(0)`),
/// but any well-formed 4×4 density matrix is accepted. The oracle carries
/// the balanced/constant decision; this function never inspects it.
pub fn run(
    initial_rho: &Array2<Complex64>,
    oracle: &Oracle,
    config: &Config,
) -> Result<RunResult> {
    validate_density_matrix(initial_rho, &config.validation)?;

    // One propagator serves both Hadamard pulses
    let u_h = propagator(
        &hadamard_generator(config.physics.coupling),
        config.physics.hadamard_duration(),
        config.physics.h_bar,
    );

    let rho = conjugate(&u_h, initial_rho);
    debug!("first Hadamard pulse applied");

    let rho = oracle.apply(rho);

    let rho = conjugate(&u_h, &rho);
    debug!("second Hadamard pulse applied");

    let channel = JumpOperator::second_qubit_damping(config.noise.relaxation_rate);
    let schedule = DampingSchedule::new(config.noise.evolution_steps);
    let rho = damp(rho, &channel, &schedule)?;

    let final_trace = trace(&rho).re;
    let final_purity = purity(&rho);
    info!(
        oracle = %oracle.mode(),
        final_trace,
        final_purity,
        damping_steps = schedule.steps,
        "run complete"
    );

    Ok(RunResult {
        final_density_matrix: rho,
        oracle_mode: oracle.mode(),
        final_trace,
        final_purity,
        damping_steps: schedule.steps,
    })
}

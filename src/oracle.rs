// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! The Deutsch–Jozsa oracle.
//!
//! The oracle is the only place the balanced/constant distinction lives:
//! the surrounding algorithm applies whatever oracle it is handed and never
//! inspects the mode itself. A balanced oracle conjugates the state with the
//! phase-flip unitary on the second qubit; a constant oracle is an exact
//! pass-through (not a near-identity conjugation).

use ndarray::Array2;
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::config::PhysicsConfig;
use crate::evolve::{conjugate, propagator};
use crate::gates::phase_flip_generator;

/// Which kind of hidden function the oracle encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OracleMode {
    /// Balanced function: apply the second-qubit phase flip.
    Balanced,
    /// Constant function: leave the state untouched.
    Constant,
}

impl OracleMode {
    pub fn is_balanced(self) -> bool {
        matches!(self, OracleMode::Balanced)
    }
}

impl std::fmt::Display for OracleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleMode::Balanced => write!(f, "balanced"),
            OracleMode::Constant => write!(f, "constant"),
        }
    }
}

/// A Deutsch–Jozsa oracle with its phase-flip propagator prebuilt.
#[derive(Debug, Clone)]
pub struct Oracle {
    mode: OracleMode,
    phase_flip: Array2<Complex64>,
}

impl Oracle {
    /// Build an oracle for the given mode under the run's physical constants.
    ///
    /// The phase-flip unitary U_z = exp(−i·H_z2·t_z/ħ) is computed once here,
    /// even for constant oracles, so that swapping modes never changes the
    /// cost profile of the run.
    pub fn new(mode: OracleMode, physics: &PhysicsConfig) -> Self {
        let u_z = propagator(
            &phase_flip_generator(physics.coupling),
            physics.phase_flip_duration(),
            physics.h_bar,
        );
        Self {
            mode,
            phase_flip: u_z,
        }
    }

    pub fn mode(&self) -> OracleMode {
        self.mode
    }

    /// Apply the oracle to a density matrix.
    pub fn apply(&self, rho: Array2<Complex64>) -> Array2<Complex64> {
        match self.mode {
            OracleMode::Balanced => {
                tracing::debug!(mode = %self.mode, "oracle applied phase flip");
                conjugate(&self.phase_flip, &rho)
            }
            OracleMode::Constant => {
                tracing::debug!(mode = %self.mode, "oracle passed state through");
                rho
            }
        }
    }
}

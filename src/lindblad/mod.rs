// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! Discrete-time Lindblad amplitude damping.
//!
//! Models irreversible relaxation of the second qubit with the
//! Gorini–Kossakowski–Sudarshan–Lindblad dissipator
//!
//!   D[L](ρ) = γ (L ρ L† − ½ L†L ρ − ½ ρ L†L)
//!
//! advanced by coarse first-order Euler steps with unconditional trace
//! renormalization after each step. This reproduces the reference model's
//! discretization exactly; it is not a completely-positive map and no
//! positivity projection is applied. See DESIGN.md for why this is kept.
//!
//! # References
//!
//! - Lindblad, G. (1976). Commun. Math. Phys. 48, 119.
//! - Breuer, H.-P. & Petruccione, F. (2002). "The Theory of Open Quantum
//!   Systems." Oxford.

pub mod damping;
pub mod dissipator;
pub mod types;

pub use damping::{damp, damp_step};
pub use dissipator::dissipator;
pub use types::{DampingSchedule, JumpOperator};

// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pulse-level Deutsch–Jozsa simulator with Lindblad amplitude damping.
//!
//! Instead of applying abstract logic gates, the simulator derives the
//! Hermitian generators that realize each gate via unitary time evolution,
//! runs the two-qubit Deutsch–Jozsa sequence by matrix exponentiation and
//! conjugation, and degrades the result with a discrete amplitude-damping
//! step on the second qubit.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────┐   ┌───────────────┐   ┌────────┐   ┌───────────────┐   ┌─────────┐
//! │ |00⟩⟨00| │ → │ Hadamard pulse│ → │ Oracle │ → │ Hadamard pulse│ → │ damping │
//! └──────────┘   └───────────────┘   └────────┘   └───────────────┘   └─────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`]: Layered configuration (defaults, env, YAML, CLI)
//! - [`gates`]: Gate Hamiltonians and fixed operators
//! - [`evolve`]: Propagator construction and unitary conjugation
//! - [`oracle`]: The balanced/constant oracle seam
//! - [`lindblad`]: Discrete-time amplitude damping
//! - [`algorithm`]: The full run pipeline
//! - [`report`]: Probability projection for output
//! - [`validation`]: Density-matrix input checks
//! - [`error`]: Error types

pub mod algorithm;
pub mod config;
pub mod error;
pub mod evolve;
pub mod gates;
pub mod lindblad;
pub mod linalg;
pub mod oracle;
pub mod report;
pub mod validation;

pub use algorithm::{run, RunResult};
pub use config::Config;
pub use error::{Error, Result};
pub use oracle::{Oracle, OracleMode};

#[cfg(test)]
pub mod test_utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

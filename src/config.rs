// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! Configuration management for the simulator.
//!
//! Configuration is loaded from multiple sources with the following priority
//! (later sources override earlier ones):
//!
//! 1. Built-in defaults (the reference physical model)
//! 2. Environment variables (DJSIM_*)
//! 3. config.yaml file
//! 4. CLI arguments

use serde::{Deserialize, Serialize};
use std::env;
use std::f64::consts::PI;
use std::path::Path;

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Physical constants of the two-qubit model
    #[serde(default)]
    pub physics: PhysicsConfig,

    /// Dissipation settings
    #[serde(default)]
    pub noise: NoiseConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Validation settings
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl Config {
    /// Load configuration from file and environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut config = Config::default();

        // Load from file if specified
        if let Some(path) = config_path {
            if path.exists() {
                let content = std::fs::read_to_string(path)?;
                config = serde_yaml::from_str(&content)?;
            }
        } else {
            // Try default locations
            for path in &["config.yaml", "config.yml"] {
                let path = Path::new(path);
                if path.exists() {
                    let content = std::fs::read_to_string(path)?;
                    config = serde_yaml::from_str(&content)?;
                    break;
                }
            }
        }

        // Override with environment variables
        config.apply_env_overrides();

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("DJSIM_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("DJSIM_COUPLING") {
            if let Ok(b) = val.parse() {
                self.physics.coupling = b;
            }
        }
        if let Ok(val) = env::var("DJSIM_RELAXATION_RATE") {
            if let Ok(gamma) = val.parse() {
                self.noise.relaxation_rate = gamma;
            }
        }
        if let Ok(val) = env::var("DJSIM_EVOLUTION_STEPS") {
            if let Ok(steps) = val.parse() {
                self.noise.evolution_steps = steps;
            }
        }
        if let Ok(val) = env::var("DJSIM_STRICT_VALIDATION") {
            self.validation.strict = val.to_lowercase() == "true" || val == "1";
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if self.physics.h_bar <= 0.0 || !self.physics.h_bar.is_finite() {
            return Err(Error::Config(format!(
                "h_bar must be positive and finite, got {}",
                self.physics.h_bar
            )));
        }
        if self.physics.coupling == 0.0 || !self.physics.coupling.is_finite() {
            return Err(Error::Config(format!(
                "coupling must be nonzero and finite, got {}",
                self.physics.coupling
            )));
        }
        if self.noise.relaxation_rate < 0.0 || !self.noise.relaxation_rate.is_finite() {
            return Err(Error::Config(format!(
                "relaxation_rate must be non-negative and finite, got {}",
                self.noise.relaxation_rate
            )));
        }
        if self.noise.evolution_steps == 0 {
            return Err(Error::Config("evolution_steps must be > 0".into()));
        }
        Ok(())
    }
}

/// Physical constants of the two-qubit model.
///
/// The reference model works in natural units: ħ = 1, coupling b = 1
/// (an abstraction of ħ, the gyromagnetic ratio, and the field strength
/// folded into a single scalar). Gate durations are derived, not stored:
/// each gate performs a π rotation, so t = π·ħ/b.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Reduced-Planck-constant analogue
    #[serde(default = "default_h_bar")]
    pub h_bar: f64,

    /// Coupling strength b
    #[serde(default = "default_coupling")]
    pub coupling: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            h_bar: default_h_bar(),
            coupling: default_coupling(),
        }
    }
}

impl PhysicsConfig {
    /// Duration of the two-qubit Hadamard pulse (π rotation).
    pub fn hadamard_duration(&self) -> f64 {
        PI * self.h_bar / self.coupling
    }

    /// Duration of the second-qubit phase-flip pulse (π rotation).
    pub fn phase_flip_duration(&self) -> f64 {
        PI * self.h_bar / self.coupling
    }
}

fn default_h_bar() -> f64 {
    1.0
}

fn default_coupling() -> f64 {
    1.0
}

/// Dissipation settings for the amplitude-damping channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Relaxation rate γ of the second qubit
    #[serde(default = "default_relaxation_rate")]
    pub relaxation_rate: f64,

    /// Number of discrete Euler steps for the damping loop
    #[serde(default = "default_evolution_steps")]
    pub evolution_steps: usize,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            relaxation_rate: default_relaxation_rate(),
            evolution_steps: default_evolution_steps(),
        }
    }
}

fn default_relaxation_rate() -> f64 {
    0.1
}

fn default_evolution_steps() -> usize {
    1
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

/// Validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Strict mode additionally checks Hermiticity and unit trace of the
    /// initial state, not just shape and finiteness.
    #[serde(default = "default_true")]
    pub strict: bool,

    /// Tolerance for the strict Hermiticity and trace checks.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict: true,
            tolerance: default_tolerance(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tolerance() -> f64 {
    1e-9
}

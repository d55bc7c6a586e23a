// Copyright 2026 djsim Contributors
// SPDX-License-Identifier: Apache-2.0

//! Projection of the final state into reportable probabilities.

use ndarray::Array2;
use num_complex::Complex64;
use serde::Serialize;

use crate::algorithm::RunResult;

/// Two-qubit computational basis labels, in diagonal index order.
pub const BASIS_LABELS: [&str; 4] = ["00", "01", "10", "11"];

/// Real diagonal of the density matrix: the basis-state probabilities.
///
/// Imaginary parts of the diagonal are ≈0 for any valid density matrix and
/// are discarded. The values are reported as-is; unit normalization is the
/// damping loop's responsibility, not re-asserted here.
pub fn probabilities(rho: &Array2<Complex64>) -> [f64; 4] {
    let mut probs = [0.0; 4];
    for (i, p) in probs.iter_mut().enumerate() {
        *p = rho[[i, i]].re;
    }
    probs
}

/// Serializable summary of a run, for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct ProbabilityReport {
    /// Which oracle branch ran.
    pub oracle: String,
    /// Basis labels, aligned with `probabilities`.
    pub basis_states: Vec<String>,
    /// Final measurement probabilities.
    pub probabilities: Vec<f64>,
    /// Trace of the final density matrix.
    pub final_trace: f64,
    /// Purity Tr(ρ²) of the final state.
    pub final_purity: f64,
}

impl ProbabilityReport {
    pub fn from_run(result: &RunResult) -> Self {
        Self {
            oracle: result.oracle_mode.to_string(),
            basis_states: BASIS_LABELS.iter().map(|s| s.to_string()).collect(),
            probabilities: probabilities(&result.final_density_matrix).to_vec(),
            final_trace: result.final_trace,
            final_purity: result.final_purity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::run;
    use crate::config::Config;
    use crate::gates::basis_state_density;
    use crate::oracle::{Oracle, OracleMode};
    use approx::assert_relative_eq;

    #[test]
    fn test_probabilities_read_diagonal() {
        let mut rho = basis_state_density(1);
        rho[[0, 1]] = Complex64::new(0.3, 0.2); // coherences are ignored
        let probs = probabilities(&rho);
        assert_relative_eq!(probs[0], 0.0);
        assert_relative_eq!(probs[1], 1.0);
    }

    #[test]
    fn test_probabilities_discard_imaginary_parts() {
        let mut rho = basis_state_density(0);
        rho[[0, 0]] = Complex64::new(0.7, 1e-14);
        assert_relative_eq!(probabilities(&rho)[0], 0.7);
    }

    #[test]
    fn test_labels_align_with_indices() {
        assert_eq!(BASIS_LABELS, ["00", "01", "10", "11"]);
    }

    #[test]
    fn test_report_from_run() {
        let config = Config::default();
        let oracle = Oracle::new(OracleMode::Balanced, &config.physics);
        let result = run(&basis_state_density(0), &oracle, &config).unwrap();

        let report = ProbabilityReport::from_run(&result);
        assert_eq!(report.oracle, "balanced");
        assert_eq!(report.basis_states.len(), 4);
        assert_relative_eq!(report.probabilities[1], 0.9, epsilon = 1e-9);
        assert_relative_eq!(report.final_trace, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let config = Config::default();
        let oracle = Oracle::new(OracleMode::Constant, &config.physics);
        let result = run(&basis_state_density(0), &oracle, &config).unwrap();

        let json = serde_json::to_string(&ProbabilityReport::from_run(&result)).unwrap();
        assert!(json.contains("\"oracle\":\"constant\""));
        assert!(json.contains("\"00\""));
    }
}

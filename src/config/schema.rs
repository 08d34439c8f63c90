use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::fingerprint::Signature;
use crate::scoring::{validate_weights, WeightOverrides};

/// When to colour terminal output.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorMode::Auto => is_terminal,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("'{}' is not one of auto, always, never", other)),
        }
    }
}

/// Application configuration.
///
/// Example YAML:
/// ```yaml
/// results_dir: ./results
/// save_results: true
/// color: auto
/// weights:
///   narcissism:
///     grandiosity: 0.25
///     ...
/// fingerprint:
///   reference: [4.51, 0.693, 0.55, 70.82, 1.82, 38.5]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Where result files go (default: current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_dir: Option<PathBuf>,

    /// Write a JSON result after each questionnaire (default: true)
    #[serde(default = "default_save_results")]
    pub save_results: bool,

    #[serde(default)]
    pub color: ColorMode,

    /// Per-instrument overall weights, replacing the built-in rule
    #[serde(default, skip_serializing_if = "WeightOverrides::is_empty")]
    pub weights: WeightOverrides,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<FingerprintConfig>,
}

fn default_save_results() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_dir: None,
            save_results: true,
            color: ColorMode::Auto,
            weights: WeightOverrides::default(),
            fingerprint: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FingerprintConfig {
    /// Reference signature: wal, ttr, hlr, sal, sac, pal
    pub reference: Vec<f64>,
}

impl Config {
    pub fn results_dir(&self) -> PathBuf {
        self.results_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Configured reference signature, if any and well formed.
    pub fn reference(&self) -> Option<Signature> {
        self.fingerprint
            .as_ref()
            .and_then(|fp| Signature::from_slice(&fp.reference).ok())
    }

    /// Validate the whole config at startup.
    /// Returns all validation errors at once (not just the first).
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = match validate_weights(&self.weights) {
            Ok(()) => Vec::new(),
            Err(errors) => errors,
        };

        if let Some(fingerprint) = &self.fingerprint {
            if let Err(e) = Signature::from_slice(&fingerprint.reference) {
                errors.push(format!("fingerprint.reference: {}", e));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

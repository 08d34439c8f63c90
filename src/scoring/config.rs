use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Weight table for one instrument: subscale key -> share of the overall score.
pub type Weights = BTreeMap<String, f64>;

/// Per-instrument weight overrides.
///
/// Instruments listed here aggregate their overall score as a weighted sum
/// instead of their built-in rule. Weights must cover every subscale and sum
/// to 1.0; see [`super::validate_weights`].
///
/// Example YAML:
/// ```yaml
/// weights:
///   bipolar:
///     manic_episodes: 0.30
///     depressive_episodes: 0.30
///     mixed_episodes: 0.10
///     functional_impairment: 0.20
///     family_history: 0.05
///     substance_use: 0.02
///     sleep_patterns: 0.02
///     psychotic_features: 0.01
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct WeightOverrides(pub BTreeMap<String, Weights>);

impl WeightOverrides {
    pub fn get(&self, instrument: &str) -> Option<&Weights> {
        self.0.get(instrument)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

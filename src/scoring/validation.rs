use super::config::{WeightOverrides, Weights};
use crate::instrument::{self, Instrument};

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Validate configured weight overrides at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_weights(overrides: &WeightOverrides) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (key, weights) in &overrides.0 {
        match instrument::find(key) {
            Some(instrument) => errors.extend(check_weights(instrument, weights)),
            None => errors.push(format!("weights.{}: unknown instrument", key)),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check one weight table against an instrument's subscales.
pub fn check_weights(instrument: &Instrument, weights: &Weights) -> Vec<String> {
    let mut errors = Vec::new();
    let prefix = format!("weights.{}", instrument.key);

    for (key, weight) in weights {
        if instrument.subscale(key).is_none() {
            errors.push(format!("{}.{}: unknown subscale", prefix, key));
        }
        if !weight.is_finite() {
            errors.push(format!("{}.{}: must be a finite number", prefix, key));
        } else if *weight < 0.0 {
            errors.push(format!("{}.{}: must be non-negative", prefix, key));
        }
    }

    for subscale in instrument.subscales {
        if !weights.contains_key(subscale.key) {
            errors.push(format!("{}.{}: missing weight", prefix, subscale.key));
        }
    }

    let total: f64 = weights.values().sum();
    if !total.is_finite() || (total - 1.0).abs() > WEIGHT_TOLERANCE {
        errors.push(format!("{}: weights sum to {:.4}, expected 1.0", prefix, total));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::{mythomania, personality, ALL};
    use std::collections::BTreeMap;

    fn even_weights(instrument: &Instrument) -> Weights {
        let share = 1.0 / instrument.subscales.len() as f64;
        instrument
            .subscales
            .iter()
            .map(|s| (s.key.to_string(), share))
            .collect()
    }

    fn overrides(key: &str, weights: Weights) -> WeightOverrides {
        let mut map = BTreeMap::new();
        map.insert(key.to_string(), weights);
        WeightOverrides(map)
    }

    #[test]
    fn test_empty_overrides() {
        assert!(validate_weights(&WeightOverrides::default()).is_ok());
    }

    #[test]
    fn test_builtin_weights_sum_to_one() {
        for instrument in ALL {
            if let Some(builtin) = instrument.weights {
                let weights: Weights = builtin.iter().map(|(k, w)| (k.to_string(), *w)).collect();
                let errors = check_weights(instrument, &weights);
                assert!(errors.is_empty(), "{}: {:?}", instrument.key, errors);
            }
        }
    }

    #[test]
    fn test_even_weights_valid() {
        let config = overrides("personality", even_weights(&personality::INSTRUMENT));
        assert!(validate_weights(&config).is_ok());
    }

    #[test]
    fn test_unknown_instrument() {
        let config = overrides("astrology", Weights::new());
        let errors = validate_weights(&config).unwrap_err();
        assert_eq!(errors, vec!["weights.astrology: unknown instrument".to_string()]);
    }

    #[test]
    fn test_unknown_subscale() {
        let mut weights = even_weights(&personality::INSTRUMENT);
        weights.insert("charisma".to_string(), 0.0);
        let errors = validate_weights(&overrides("personality", weights)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("weights.personality.charisma"));
    }

    #[test]
    fn test_missing_subscale_and_bad_total() {
        let mut weights = even_weights(&mythomania::INSTRUMENT);
        weights.remove("comportamento_teatral");
        let errors = validate_weights(&overrides("mythomania", weights)).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("comportamento_teatral: missing weight"));
        assert!(errors[1].contains("expected 1.0"));
    }

    #[test]
    fn test_negative_weight() {
        let mut weights = even_weights(&personality::INSTRUMENT);
        weights.insert("openness".to_string(), -0.2);
        weights.insert("neuroticism".to_string(), 0.6);
        let errors = validate_weights(&overrides("personality", weights)).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("openness: must be non-negative")));
    }

    #[test]
    fn test_nan_weights_rejected() {
        let weights: Weights = personality::INSTRUMENT
            .subscales
            .iter()
            .map(|s| (s.key.to_string(), f64::NAN))
            .collect();
        let errors = validate_weights(&overrides("personality", weights)).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert!(errors[0].contains("must be a finite number"));
        assert!(errors[5].contains("expected 1.0"));
    }

    #[test]
    fn test_infinite_weight_rejected() {
        let mut weights = even_weights(&personality::INSTRUMENT);
        weights.insert("openness".to_string(), f64::INFINITY);
        let errors = validate_weights(&overrides("personality", weights)).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("openness: must be a finite number")));
        assert!(errors.iter().any(|e| e.contains("expected 1.0")));
    }
}

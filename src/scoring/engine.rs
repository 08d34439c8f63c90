use std::collections::BTreeMap;

use super::config::WeightOverrides;
use super::likert::{Likert, ScoreError};
use crate::instrument::{Instrument, Subscale};

#[derive(Debug, Clone, PartialEq)]
pub struct SubscaleScore {
    pub key: &'static str,
    pub label: &'static str,
    pub raw: Option<u32>, // Sum of applied responses; None for demo or stored scores
    pub max: u32,         // questions * 5
    pub score: f64,       // 0-100
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSheet {
    pub instrument: &'static str,
    pub overall_key: &'static str,
    pub subscales: Vec<SubscaleScore>,
    pub overall: f64,
}

impl ScoreSheet {
    pub fn get(&self, key: &str) -> Option<f64> {
        if key == self.overall_key {
            return Some(self.overall);
        }
        self.subscales.iter().find(|s| s.key == key).map(|s| s.score)
    }

    /// Subscales sorted by score descending. Ties keep catalog order.
    pub fn ranked(&self) -> Vec<&SubscaleScore> {
        let mut ranked: Vec<&SubscaleScore> = self.subscales.iter().collect();
        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    pub fn highest(&self) -> Option<&SubscaleScore> {
        self.ranked().first().copied()
    }

    pub fn lowest(&self) -> Option<&SubscaleScore> {
        self.ranked().last().copied()
    }

    /// Flat key -> score map including the overall entry, as persisted in result files.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        let mut map: BTreeMap<String, f64> = self
            .subscales
            .iter()
            .map(|s| (s.key.to_string(), s.score))
            .collect();
        map.insert(self.overall_key.to_string(), self.overall);
        map
    }
}

/// Rule for folding subscale scores into the overall score.
#[derive(Debug, Clone, PartialEq)]
pub enum Aggregation {
    Mean,
    Weighted(Vec<(String, f64)>),
}

impl Aggregation {
    /// Configured overrides win over the instrument's built-in weights.
    pub fn resolve(instrument: &Instrument, overrides: &WeightOverrides) -> Self {
        if let Some(weights) = overrides.get(instrument.key) {
            return Aggregation::Weighted(weights.iter().map(|(k, w)| (k.clone(), *w)).collect());
        }
        match instrument.weights {
            Some(weights) => {
                Aggregation::Weighted(weights.iter().map(|(k, w)| (k.to_string(), *w)).collect())
            }
            None => Aggregation::Mean,
        }
    }

    pub fn overall(&self, scores: &[SubscaleScore]) -> f64 {
        match self {
            Aggregation::Mean => {
                if scores.is_empty() {
                    0.0
                } else {
                    scores.iter().map(|s| s.score).sum::<f64>() / scores.len() as f64
                }
            }
            Aggregation::Weighted(weights) => weights
                .iter()
                .filter_map(|(key, weight)| {
                    scores
                        .iter()
                        .find(|s| s.key == key.as_str())
                        .map(|s| s.score * weight)
                })
                .sum(),
        }
    }
}

/// Scale a raw sum to 0-100.
pub fn normalize(raw: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        (raw as f64 / max as f64) * 100.0
    }
}

pub fn score_subscale(
    subscale: &'static Subscale,
    responses: &[Likert],
) -> Result<SubscaleScore, ScoreError> {
    if responses.len() != subscale.questions.len() {
        return Err(ScoreError::ResponseCount {
            subscale: subscale.key.to_string(),
            expected: subscale.questions.len(),
            actual: responses.len(),
        });
    }

    let raw: u32 = subscale
        .questions
        .iter()
        .zip(responses)
        .map(|(question, response)| u32::from(question.direction.apply(*response).value()))
        .sum();
    let max = subscale.max_points();

    Ok(SubscaleScore {
        key: subscale.key,
        label: subscale.label,
        raw: Some(raw),
        max,
        score: normalize(raw, max),
    })
}

/// Score a completed questionnaire. `responses` holds one group per subscale, in catalog order.
pub fn score_responses(
    instrument: &'static Instrument,
    responses: &[Vec<Likert>],
    aggregation: &Aggregation,
) -> Result<ScoreSheet, ScoreError> {
    if responses.len() != instrument.subscales.len() {
        return Err(ScoreError::SubscaleCount {
            instrument: instrument.key.to_string(),
            expected: instrument.subscales.len(),
            actual: responses.len(),
        });
    }

    let subscales = instrument
        .subscales
        .iter()
        .zip(responses)
        .map(|(subscale, group)| score_subscale(subscale, group))
        .collect::<Result<Vec<_>, _>>()?;
    let overall = aggregation.overall(&subscales);

    Ok(ScoreSheet {
        instrument: instrument.key,
        overall_key: instrument.overall_key,
        subscales,
        overall,
    })
}

/// Build a sheet from already-normalized scores (demo data or a saved result).
///
/// Every subscale must be present. An entry under the instrument's overall key
/// is kept as the overall score; otherwise it is computed with `aggregation`.
pub fn sheet_from_scores(
    instrument: &'static Instrument,
    scores: &BTreeMap<String, f64>,
    aggregation: &Aggregation,
) -> Result<ScoreSheet, ScoreError> {
    for (key, score) in scores {
        if key != instrument.overall_key && instrument.subscale(key).is_none() {
            return Err(ScoreError::UnknownSubscale(key.clone()));
        }
        if !(0.0..=100.0).contains(score) {
            return Err(ScoreError::ScoreOutOfRange {
                key: key.clone(),
                score: *score,
            });
        }
    }

    let subscales = instrument
        .subscales
        .iter()
        .map(|subscale| {
            scores
                .get(subscale.key)
                .map(|score| SubscaleScore {
                    key: subscale.key,
                    label: subscale.label,
                    raw: None,
                    max: subscale.max_points(),
                    score: *score,
                })
                .ok_or_else(|| ScoreError::MissingSubscale(subscale.key.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let overall = scores
        .get(instrument.overall_key)
        .copied()
        .unwrap_or_else(|| aggregation.overall(&subscales));

    Ok(ScoreSheet {
        instrument: instrument.key,
        overall_key: instrument.overall_key,
        subscales,
        overall,
    })
}

/// The instrument's demo scores with a computed overall.
pub fn demo_sheet(
    instrument: &'static Instrument,
    aggregation: &Aggregation,
) -> Result<ScoreSheet, ScoreError> {
    let scores: BTreeMap<String, f64> = instrument
        .demo
        .iter()
        .map(|(key, score)| (key.to_string(), *score))
        .collect();
    sheet_from_scores(instrument, &scores, aggregation)
}

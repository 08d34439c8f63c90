use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while turning answers into scores.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScoreError {
    #[error("'{0}' is not a whole number")]
    NotANumber(String),

    #[error("response {0} is outside the 1-5 scale")]
    InvalidResponse(i64),

    #[error("subscale '{subscale}' expects {expected} responses, got {actual}")]
    ResponseCount {
        subscale: String,
        expected: usize,
        actual: usize,
    },

    #[error("instrument '{instrument}' has {expected} subscales, got {actual} response groups")]
    SubscaleCount {
        instrument: String,
        expected: usize,
        actual: usize,
    },

    #[error("missing score for subscale '{0}'")]
    MissingSubscale(String),

    #[error("unknown subscale '{0}'")]
    UnknownSubscale(String),

    #[error("score {score} for '{key}' is outside 0-100")]
    ScoreOutOfRange { key: String, score: f64 },
}

/// A single answer on the five-point agreement scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Likert(u8);

impl Likert {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, ScoreError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Likert(value as u8))
        } else {
            Err(ScoreError::InvalidResponse(value))
        }
    }

    /// Parse a typed answer. Surrounding whitespace and a leading `+` are accepted.
    pub fn parse(input: &str) -> Result<Self, ScoreError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ScoreError::NotANumber(trimmed.to_string()))?;
        Self::new(value)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// How a question's answer feeds its subscale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Direct,
    Reverse,
}

impl Direction {
    /// Reverse items mirror the scale: 1<->5, 2<->4, 3 stays.
    pub fn apply(self, response: Likert) -> Likert {
        match self {
            Direction::Direct => response,
            Direction::Reverse => Likert(Likert::MAX + Likert::MIN - response.0),
        }
    }
}

pub mod config;
pub mod engine;
pub mod likert;
pub mod validation;

pub use config::{WeightOverrides, Weights};
pub use engine::{
    demo_sheet, normalize, score_responses, score_subscale, sheet_from_scores, Aggregation,
    ScoreSheet, SubscaleScore,
};
pub use likert::{Direction, Likert, ScoreError};
pub use validation::{check_weights, validate_weights};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::instrument::Instrument;
use crate::scoring::ScoreSheet;

pub const SCHEMA_VERSION: u32 = 1;

/// A saved questionnaire result, as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultRecord {
    pub schema: u32,
    pub timestamp: DateTime<Utc>,
    pub instrument: String,
    pub assessment_type: String,
    pub version: String,
    #[serde(default)]
    pub demo: bool,
    pub scores: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub resources: BTreeMap<String, String>,
}

impl ResultRecord {
    pub fn new(instrument: &Instrument, sheet: &ScoreSheet, demo: bool) -> Self {
        Self {
            schema: SCHEMA_VERSION,
            timestamp: Utc::now(),
            instrument: instrument.key.to_string(),
            assessment_type: instrument.assessment_type.to_string(),
            version: instrument.version.to_string(),
            demo,
            scores: sheet.to_map(),
            disclaimer: instrument.disclaimer.map(str::to_string),
            resources: instrument
                .resources
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

use crate::scoring::{Direction, ScoreSheet};

use super::report::{Checkpoint, Report};

/// Language of an instrument's prompts and interpretation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Pt,
}

impl Locale {
    pub fn not_a_number(self) -> &'static str {
        match self {
            Locale::En => "Please enter a valid number",
            Locale::Pt => "Por favor, digite um número válido",
        }
    }

    pub fn out_of_range(self) -> &'static str {
        match self {
            Locale::En => "Please enter a number between 1 and 5",
            Locale::Pt => "Por favor, digite um número entre 1 e 5",
        }
    }

    pub fn yes_no_hint(self) -> &'static str {
        match self {
            Locale::En => "(y/n)",
            Locale::Pt => "(s/n)",
        }
    }

    pub fn is_yes(self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        match self {
            Locale::En => answer == "y" || answer == "yes",
            Locale::Pt => answer == "s" || answer == "sim",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub direction: Direction,
}

impl Question {
    pub const fn direct(text: &'static str) -> Self {
        Self {
            text,
            direction: Direction::Direct,
        }
    }

    pub const fn reverse(text: &'static str) -> Self {
        Self {
            text,
            direction: Direction::Reverse,
        }
    }
}

/// A scored category of questions (a trait, subscale or behaviour).
#[derive(Debug)]
pub struct Subscale {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub questions: &'static [Question],
}

impl Subscale {
    pub fn max_points(&self) -> u32 {
        self.questions.len() as u32 * u32::from(crate::scoring::Likert::MAX)
    }
}

/// Colour family used when rendering a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Caution,
    Alert,
}

/// One row of a score band table. Tables are ordered by descending `floor`.
#[derive(Debug)]
pub struct Band {
    pub floor: f64,
    pub label: &'static str,
    pub summary: &'static str,
    pub tone: Tone,
}

static UNBANDED: Band = Band {
    floor: 0.0,
    label: "-",
    summary: "",
    tone: Tone::Caution,
};

/// First band whose floor is at or below `score`.
pub fn classify(bands: &'static [Band], score: f64) -> &'static Band {
    bands
        .iter()
        .find(|band| score >= band.floor)
        .unwrap_or(&UNBANDED)
}

/// Question asked before the questionnaire starts; declining cancels the session.
#[derive(Debug)]
pub struct StartGate {
    pub notes: &'static [&'static str],
    pub question: &'static str,
    pub cancel_message: &'static str,
}

pub struct Instrument {
    pub key: &'static str,
    pub title: &'static str,
    pub assessment_type: &'static str,
    pub version: &'static str,
    pub locale: Locale,
    pub intro: &'static [&'static str],
    pub scale: &'static [&'static str],
    pub start_gate: Option<StartGate>,
    pub subscales: &'static [Subscale],
    pub weights: Option<&'static [(&'static str, f64)]>,
    pub overall_key: &'static str,
    pub overall_label: &'static str,
    pub overall_bands: &'static [Band],
    pub subscale_bands: &'static [Band],
    pub disclaimer: Option<&'static str>,
    pub resources: &'static [(&'static str, &'static str)],
    pub closing: &'static [&'static str],
    pub demo: &'static [(&'static str, f64)],
    pub interpret: fn(&'static Instrument, &ScoreSheet) -> Report,
    pub checkpoint: Option<fn(&ScoreSheet) -> Option<Checkpoint>>,
}

impl Instrument {
    pub fn question_count(&self) -> usize {
        self.subscales.iter().map(|s| s.questions.len()).sum()
    }

    pub fn subscale(&self, key: &str) -> Option<&'static Subscale> {
        self.subscales.iter().find(|s| s.key == key)
    }

    pub fn overall_band(&self, score: f64) -> &'static Band {
        classify(self.overall_bands, score)
    }

    pub fn subscale_band(&self, score: f64) -> &'static Band {
        classify(self.subscale_bands, score)
    }

    pub fn description(&self, key: &str) -> &'static str {
        self.subscale(key).map(|s| s.description).unwrap_or("")
    }

    pub fn report(&'static self, sheet: &ScoreSheet) -> Report {
        (self.interpret)(self, sheet)
    }
}

impl std::fmt::Debug for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instrument")
            .field("key", &self.key)
            .field("subscales", &self.subscales.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static BANDS: [Band; 3] = [
        Band { floor: 70.0, label: "High", summary: "", tone: Tone::Alert },
        Band { floor: 50.0, label: "Moderate", summary: "", tone: Tone::Caution },
        Band { floor: 0.0, label: "Low", summary: "", tone: Tone::Good },
    ];

    #[test]
    fn test_classify_boundaries_are_inclusive() {
        assert_eq!(classify(&BANDS, 70.0).label, "High");
        assert_eq!(classify(&BANDS, 69.99).label, "Moderate");
        assert_eq!(classify(&BANDS, 50.0).label, "Moderate");
        assert_eq!(classify(&BANDS, 0.0).label, "Low");
    }

    #[test]
    fn test_classify_below_every_floor() {
        assert_eq!(classify(&BANDS, -1.0).label, "-");
    }

    #[test]
    fn test_locale_yes_answers() {
        assert!(Locale::En.is_yes("Y"));
        assert!(Locale::En.is_yes(" yes "));
        assert!(!Locale::En.is_yes("s"));
        assert!(Locale::Pt.is_yes("S"));
        assert!(Locale::Pt.is_yes("sim"));
        assert!(!Locale::Pt.is_yes("y"));
    }
}

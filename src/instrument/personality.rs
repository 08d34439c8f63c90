//! Big Five (OCEAN) personality assessment.

use super::report::{bullets, Report};
use super::types::{Band, Instrument, Locale, Question, Subscale, Tone};
use crate::scoring::ScoreSheet;

static SUBSCALES: [Subscale; 5] = [
    Subscale {
        key: "openness",
        label: "Openness",
        description: "Creativity, curiosity, and openness to new experiences",
        questions: &[
            Question::direct("I enjoy exploring new ideas and concepts"),
            Question::direct("I appreciate art, music, and creative expression"),
            Question::reverse("I prefer routine and familiar activities"),
            Question::direct("I enjoy philosophical discussions"),
            Question::direct("I am curious about how things work"),
            Question::reverse("I prefer practical over abstract thinking"),
            Question::direct("I enjoy trying new foods and experiences"),
            Question::reverse("I value tradition and conventional approaches"),
        ],
    },
    Subscale {
        key: "conscientiousness",
        label: "Conscientiousness",
        description: "Organization, responsibility, and goal-directed behavior",
        questions: &[
            Question::direct("I complete tasks thoroughly and on time"),
            Question::direct("I am organized and systematic in my approach"),
            Question::reverse("I often procrastinate on important tasks"),
            Question::direct("I plan ahead and prepare for challenges"),
            Question::direct("I pay attention to details"),
            Question::reverse("I find it hard to stick to my commitments"),
            Question::direct("I work hard to achieve my goals"),
            Question::reverse("I often act impulsively without thinking"),
        ],
    },
    Subscale {
        key: "extraversion",
        label: "Extraversion",
        description: "Sociability, assertiveness, and positive emotionality",
        questions: &[
            Question::direct("I enjoy being the center of attention"),
            Question::direct("I feel energized by social interactions"),
            Question::reverse("I prefer quiet, solitary activities"),
            Question::direct("I find it easy to start conversations with strangers"),
            Question::direct("I am comfortable speaking in groups"),
            Question::reverse("I need time alone to recharge after socializing"),
            Question::direct("I am assertive in expressing my opinions"),
            Question::reverse("I prefer working alone rather than in teams"),
        ],
    },
    Subscale {
        key: "agreeableness",
        label: "Agreeableness",
        description: "Cooperation, trust, and concern for others",
        questions: &[
            Question::direct("I trust others and assume good intentions"),
            Question::direct("I enjoy helping others solve their problems"),
            Question::reverse("I can be skeptical of others' motives"),
            Question::direct("I compromise easily to avoid conflict"),
            Question::direct("I am sympathetic to others' difficulties"),
            Question::reverse("I prioritize my own needs over others'"),
            Question::direct("I am forgiving when others make mistakes"),
            Question::reverse("I find it easy to criticize others"),
        ],
    },
    Subscale {
        key: "neuroticism",
        label: "Neuroticism",
        description: "Emotional instability, anxiety, and stress sensitivity",
        questions: &[
            Question::direct("I worry frequently about various things"),
            Question::reverse("I remain calm under pressure"),
            Question::direct("I get stressed easily by daily challenges"),
            Question::reverse("I bounce back quickly from setbacks"),
            Question::direct("I feel anxious in uncertain situations"),
            Question::reverse("I maintain emotional stability during conflicts"),
            Question::direct("I often feel overwhelmed by responsibilities"),
            Question::reverse("I handle criticism well"),
        ],
    },
];

static BANDS: [Band; 3] = [
    Band {
        floor: 70.0,
        label: "HIGH",
        summary: "High (top 30%)",
        tone: Tone::Good,
    },
    Band {
        floor: 50.0,
        label: "AVERAGE",
        summary: "Average (middle 40%)",
        tone: Tone::Caution,
    },
    Band {
        floor: 0.0,
        label: "LOW",
        summary: "Below average",
        tone: Tone::Alert,
    },
];

pub static INSTRUMENT: Instrument = Instrument {
    key: "personality",
    title: "EVIDENCE-BASED PERSONALITY ASSESSMENT",
    assessment_type: "Big Five Personality Assessment",
    version: "1.0",
    locale: Locale::En,
    intro: &["Based on the scientifically validated Big Five model"],
    scale: &[
        "1 = Strongly Disagree",
        "2 = Disagree",
        "3 = Neutral",
        "4 = Agree",
        "5 = Strongly Agree",
    ],
    start_gate: None,
    subscales: &SUBSCALES,
    weights: None,
    overall_key: "overall_personality",
    overall_label: "Overall profile (mean of traits)",
    overall_bands: &BANDS,
    subscale_bands: &BANDS,
    disclaimer: None,
    resources: &[],
    closing: &[],
    demo: &[
        ("openness", 75.0),
        ("conscientiousness", 65.0),
        ("extraversion", 45.0),
        ("agreeableness", 80.0),
        ("neuroticism", 35.0),
    ],
    interpret,
    checkpoint: None,
};

fn high_implication(key: &str) -> &'static str {
    match key {
        "openness" => "You are very creative, curious, and open to new experiences. You enjoy abstract thinking and novel ideas.",
        "conscientiousness" => "You are highly organized, disciplined, and goal-oriented. You tend to be reliable and thorough in your work.",
        "extraversion" => "You are very sociable, assertive, and energetic. You enjoy being around people and seek stimulation.",
        "agreeableness" => "You are very cooperative, trusting, and empathetic. You prioritize harmony and helping others.",
        "neuroticism" => "You may experience stress, anxiety, and emotional instability more frequently than others.",
        _ => "High score on this trait.",
    }
}

fn low_implication(key: &str) -> &'static str {
    match key {
        "openness" => "You prefer familiar routines and practical approaches. You may be more traditional in your thinking.",
        "conscientiousness" => "You may be more flexible and spontaneous. You might struggle with organization or long-term planning.",
        "extraversion" => "You are more introverted, preferring solitude or small groups. You may be reserved in social situations.",
        "agreeableness" => "You are more competitive and skeptical. You may prioritize your own interests and be direct in communication.",
        "neuroticism" => "You are emotionally stable and resilient. You handle stress well and remain calm under pressure.",
        _ => "Low score on this trait.",
    }
}

fn implication(key: &str, label: &str, score: f64) -> String {
    if score >= 70.0 {
        high_implication(key).to_string()
    } else if score >= 50.0 {
        format!(
            "You show typical levels of {}. You likely demonstrate balanced behaviors in this area.",
            label.to_lowercase()
        )
    } else {
        low_implication(key).to_string()
    }
}

fn interpret(instrument: &'static Instrument, sheet: &ScoreSheet) -> Report {
    let mut report = Report::new("DETAILED PERSONALITY ANALYSIS");

    for trait_score in &sheet.subscales {
        let band = instrument.subscale_band(trait_score.score);
        report.section(
            format!("{}: {:.1}/100", trait_score.label.to_uppercase(), trait_score.score),
            [
                format!("Level: {}", band.label),
                format!("Description: {}", instrument.description(trait_score.key)),
                format!(
                    "Implications: {}",
                    implication(trait_score.key, trait_score.label, trait_score.score)
                ),
            ],
        );
    }

    if let (Some(highest), Some(lowest)) = (sheet.highest(), sheet.lowest()) {
        report.section(
            "PERSONALITY INSIGHTS",
            [
                format!("Highest Trait: {} ({:.0})", highest.label, highest.score),
                instrument.description(highest.key).to_string(),
                format!("Lowest Trait: {} ({:.0})", lowest.label, lowest.score),
                instrument.description(lowest.key).to_string(),
            ],
        );
    }

    report.section(
        "SCORE INTERPRETATION",
        bullets(&[
            "70-100: High (top 30%)",
            "50-69: Average (middle 40%)",
            "30-49: Below Average (bottom 30%)",
            "0-29: Very Low (bottom 16%)",
        ]),
    );
    report.section(
        "NOTE",
        [
            "This assessment is based on the scientifically validated Big Five model.",
            "All traits represent normal personality variations, not disorders or deficits.",
        ],
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{demo_sheet, Aggregation};

    #[test]
    fn test_catalog_shape() {
        assert_eq!(INSTRUMENT.subscales.len(), 5);
        assert_eq!(INSTRUMENT.question_count(), 40);
        for subscale in INSTRUMENT.subscales {
            let reversed = subscale
                .questions
                .iter()
                .filter(|q| q.direction == crate::scoring::Direction::Reverse)
                .count();
            assert_eq!(reversed, 3, "{}", subscale.key);
        }
    }

    #[test]
    fn test_implication_levels() {
        assert!(implication("openness", "Openness", 80.0).starts_with("You are very creative"));
        assert!(implication("openness", "Openness", 60.0).contains("typical levels of openness"));
        assert!(implication("openness", "Openness", 20.0).starts_with("You prefer familiar"));
    }

    #[test]
    fn test_demo_report() {
        let sheet = demo_sheet(&INSTRUMENT, &Aggregation::Mean).unwrap();
        let report = INSTRUMENT.report(&sheet);

        let openness = report.find("OPENNESS: 75.0/100").unwrap();
        assert_eq!(openness.lines[0], "Level: HIGH");

        let extraversion = report.find("EXTRAVERSION: 45.0/100").unwrap();
        assert_eq!(extraversion.lines[0], "Level: LOW");

        let insights = report.find("PERSONALITY INSIGHTS").unwrap();
        assert_eq!(insights.lines[0], "Highest Trait: Agreeableness (80)");
        assert_eq!(insights.lines[2], "Lowest Trait: Neuroticism (35)");
    }
}

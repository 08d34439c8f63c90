//! Bipolar-spectrum risk screening (MDQ / BSDS inspired).

use super::report::{bullets, numbered, Checkpoint, Report};
use super::types::{Band, Instrument, Locale, Question, StartGate, Subscale, Tone};
use crate::scoring::ScoreSheet;

static SUBSCALES: [Subscale; 8] = [
    Subscale {
        key: "manic_episodes",
        label: "Manic Episodes",
        description: "Elevated mood, energy, and activity periods",
        questions: &[
            Question::direct("I have had periods where I felt so good or energetic that others thought I was not my normal self"),
            Question::direct("I have had times when I was more talkative or spoke faster than usual"),
            Question::direct("I have had periods when I needed much less sleep than usual"),
            Question::direct("I have had times when I was much more self-confident than usual"),
            Question::direct("I have had periods when I did things that were unusual for me or others thought were excessive"),
            Question::direct("I have had times when I was much more active or did many more things than usual"),
            Question::reverse("I have never experienced periods of unusually elevated mood"),
        ],
    },
    Subscale {
        key: "depressive_episodes",
        label: "Depressive Episodes",
        description: "Low mood, energy, and motivation periods",
        questions: &[
            Question::direct("I have had periods lasting at least 2 weeks when I felt sad, depressed, or empty most of the day"),
            Question::direct("I have experienced times when I lost interest in activities I usually enjoyed"),
            Question::direct("I have had periods when I felt worthless or excessively guilty"),
            Question::direct("I have experienced significant changes in appetite or weight during low periods"),
            Question::direct("I have had difficulty concentrating or making decisions during depressive periods"),
            Question::direct("I have had thoughts of death or suicide during low periods"),
            Question::reverse("I have never experienced extended periods of depression"),
        ],
    },
    Subscale {
        key: "mixed_episodes",
        label: "Mixed Episodes",
        description: "Simultaneous manic and depressive symptoms",
        questions: &[
            Question::direct("I have had periods when I felt both energetic and depressed at the same time"),
            Question::direct("I have experienced times when my mood changed rapidly from high to low"),
            Question::direct("I have had periods when I felt agitated and restless while also feeling sad"),
            Question::direct("I have experienced times when I had racing thoughts while feeling hopeless"),
            Question::direct("I have had periods when I was irritable and had increased energy simultaneously"),
            Question::reverse("My mood episodes are always clearly either high or low, never mixed"),
        ],
    },
    Subscale {
        key: "functional_impairment",
        label: "Functional Impairment",
        description: "Impact on work, relationships, and daily life",
        questions: &[
            Question::direct("My mood changes have caused problems in my work or school performance"),
            Question::direct("My mood episodes have strained my relationships with family or friends"),
            Question::direct("I have made important decisions during mood episodes that I later regretted"),
            Question::direct("My mood changes have led to financial problems or poor spending decisions"),
            Question::direct("I have been hospitalized or needed intensive treatment for mood episodes"),
            Question::reverse("My mood changes have never significantly impacted my daily functioning"),
        ],
    },
    Subscale {
        key: "family_history",
        label: "Family History",
        description: "Genetic and family factors",
        questions: &[
            Question::direct("One or more of my biological relatives has been diagnosed with bipolar disorder"),
            Question::direct("Family members have experienced severe depression requiring treatment"),
            Question::direct("Relatives have had problems with alcohol or substance abuse"),
            Question::direct("Family members have been hospitalized for psychiatric reasons"),
            Question::reverse("There is no history of mental health issues in my family"),
        ],
    },
    Subscale {
        key: "substance_use",
        label: "Substance Use",
        description: "Alcohol/drug use patterns during mood episodes",
        questions: &[
            Question::direct("I have used alcohol or drugs more during periods of elevated mood"),
            Question::direct("I have used substances to cope with depressive episodes"),
            Question::direct("My substance use has increased during mood episodes"),
            Question::direct("I have made poor decisions about alcohol/drugs during mood changes"),
            Question::reverse("My substance use patterns do not change with my mood"),
        ],
    },
    Subscale {
        key: "sleep_patterns",
        label: "Sleep Patterns",
        description: "Changes in sleep during mood episodes",
        questions: &[
            Question::direct("During elevated periods, I have needed much less sleep than usual (3-4 hours)"),
            Question::direct("I have had periods where I barely slept for days but still felt energetic"),
            Question::direct("During low periods, I sleep much more than usual or have trouble sleeping"),
            Question::direct("My sleep patterns change dramatically with my mood"),
            Question::reverse("My sleep remains consistent regardless of my mood"),
        ],
    },
    Subscale {
        key: "psychotic_features",
        label: "Psychotic Features",
        description: "Hallucinations or delusions during episodes",
        questions: &[
            Question::direct("I have heard voices or seen things others could not during mood episodes"),
            Question::direct("I have had beliefs that others thought were unrealistic during mood periods"),
            Question::direct("During mood episodes, I have felt like I had special powers or abilities"),
            Question::direct("I have experienced paranoid thoughts during mood changes"),
            Question::reverse("I have never experienced unusual perceptions or beliefs"),
        ],
    },
];

static WEIGHTS: [(&str, f64); 8] = [
    ("manic_episodes", 0.25),
    ("depressive_episodes", 0.25),
    ("mixed_episodes", 0.15),
    ("functional_impairment", 0.20),
    ("family_history", 0.05),
    ("substance_use", 0.05),
    ("sleep_patterns", 0.03),
    ("psychotic_features", 0.02),
];

static OVERALL_BANDS: [Band; 4] = [
    Band {
        floor: 70.0,
        label: "HIGH RISK",
        summary: "High risk - immediate professional help needed. Significant bipolar disorder indicators. Seek immediate professional help.",
        tone: Tone::Alert,
    },
    Band {
        floor: 50.0,
        label: "ELEVATED RISK",
        summary: "Elevated risk - professional evaluation recommended. Multiple risk factors present. Strongly recommend psychiatric evaluation.",
        tone: Tone::Alert,
    },
    Band {
        floor: 30.0,
        label: "MODERATE RISK",
        summary: "Moderate risk - monitoring recommended. Some concerning patterns. Consider professional consultation.",
        tone: Tone::Caution,
    },
    Band {
        floor: 0.0,
        label: "LOW RISK",
        summary: "Low risk for bipolar disorder. Responses suggest low likelihood of bipolar disorder. Continue healthy habits.",
        tone: Tone::Good,
    },
];

static SUBSCALE_BANDS: [Band; 3] = [
    Band {
        floor: 70.0,
        label: "HIGH",
        summary: "",
        tone: Tone::Alert,
    },
    Band {
        floor: 50.0,
        label: "MODERATE",
        summary: "",
        tone: Tone::Caution,
    },
    Band {
        floor: 0.0,
        label: "LOW",
        summary: "",
        tone: Tone::Good,
    },
];

// Safety gate fires above these, checked right after scoring.
const GATE_OVERALL: f64 = 70.0;
const GATE_DEPRESSIVE: f64 = 80.0;

// Report-level safety concern.
const CONCERN_OVERALL: f64 = 85.0;
const CONCERN_DEPRESSIVE: f64 = 70.0;

const PROFESSIONAL_TRACK: f64 = 50.0;

pub static INSTRUMENT: Instrument = Instrument {
    key: "bipolar",
    title: "BIPOLAR DISORDER SCREENING TOOL",
    assessment_type: "Bipolar Disorder Screening Tool",
    version: "1.0",
    locale: Locale::En,
    intro: &[
        "CRITICAL DISCLAIMERS:",
        "• This is NOT a diagnostic tool for bipolar disorder",
        "• Only licensed professionals can diagnose bipolar disorder",
        "• High scores indicate need for professional evaluation",
        "• Bipolar disorder requires professional treatment",
        "• If having thoughts of self-harm, seek immediate help",
        "• Results should be discussed with a healthcare provider",
        "",
        "CRISIS RESOURCES:",
        "• National Suicide Prevention Lifeline: 988",
        "• Crisis Text Line: Text HOME to 741741",
        "• Emergency: Call 911",
    ],
    scale: &[
        "1 = Never/Strongly Disagree",
        "2 = Rarely/Disagree",
        "3 = Sometimes/Neutral",
        "4 = Often/Agree",
        "5 = Very Often/Strongly Agree",
    ],
    start_gate: Some(StartGate {
        notes: &[
            "Before starting:",
            "• This screening takes 10-15 minutes",
            "• Answer honestly for accurate results",
            "• Seek professional help if you're in crisis",
        ],
        question: "Ready to begin?",
        cancel_message: "Assessment cancelled. Seek professional help if needed.",
    }),
    subscales: &SUBSCALES,
    weights: Some(&WEIGHTS),
    overall_key: "overall_risk",
    overall_label: "Overall bipolar risk",
    overall_bands: &OVERALL_BANDS,
    subscale_bands: &SUBSCALE_BANDS,
    disclaimer: Some(
        "This is a screening tool, not a diagnostic instrument. Seek professional help for diagnosis.",
    ),
    resources: &[
        ("suicide_prevention_lifeline", "988"),
        ("crisis_text_line", "Text HOME to 741741"),
        ("emergency", "911"),
    ],
    closing: &[
        "Remember: This is a screening tool, not a diagnosis.",
        "Please discuss results with a mental health professional.",
        "If you're in crisis, contact 988 or go to the nearest emergency room.",
    ],
    demo: &[
        ("manic_episodes", 65.0),
        ("depressive_episodes", 75.0),
        ("mixed_episodes", 55.0),
        ("functional_impairment", 70.0),
        ("family_history", 40.0),
        ("substance_use", 35.0),
        ("sleep_patterns", 80.0),
        ("psychotic_features", 25.0),
    ],
    interpret,
    checkpoint: Some(safety_gate),
};

fn depressive(sheet: &ScoreSheet) -> f64 {
    sheet.get("depressive_episodes").unwrap_or(0.0)
}

fn safety_gate(sheet: &ScoreSheet) -> Option<Checkpoint> {
    if sheet.overall <= GATE_OVERALL && depressive(sheet) <= GATE_DEPRESSIVE {
        return None;
    }
    let mut lines = vec![
        "HIGH RISK DETECTED - PLEASE READ CAREFULLY".to_string(),
        "Your responses indicate significant mental health concerns.".to_string(),
        "We strongly recommend you:".to_string(),
    ];
    lines.extend(bullets(&[
        "Contact a mental health professional immediately",
        "Call 988 (Suicide Prevention Lifeline) if having thoughts of self-harm",
        "Go to nearest emergency room if in crisis",
        "Reach out to trusted friends or family for support",
    ]));
    Some(Checkpoint::Gate {
        lines,
        question: "Do you want to continue with the assessment?",
        abort_message: "Please prioritize your safety and seek professional help.",
    })
}

fn recommendations(overall: f64, top: &[&str]) -> Vec<String> {
    let first = top.first().copied().unwrap_or_default();
    if overall < 30.0 {
        bullets(&[
            "Continue monitoring mood patterns",
            "Maintain healthy sleep schedule",
            "Practice stress management",
            "Regular exercise and social support",
            "Annual mental health check-ups",
        ])
    } else if overall < 50.0 {
        vec![
            "• Consult mental health professional".to_string(),
            "• Consider mood tracking apps".to_string(),
            format!("• Address top concerns: {}", first),
            "• Learn about bipolar disorder".to_string(),
            "• Build strong support network".to_string(),
        ]
    } else if overall < 70.0 {
        let pair: Vec<&str> = top.iter().take(2).copied().collect();
        vec![
            "• URGENT: See psychiatrist/psychologist".to_string(),
            "• Comprehensive bipolar evaluation".to_string(),
            format!("• Address: {}", pair.join(", ")),
            "• Family/relationship counseling".to_string(),
        ]
    } else {
        bullets(&[
            "IMMEDIATE professional evaluation",
            "Psychiatric assessment for bipolar disorder",
            "Crisis safety planning",
            "Involve family/support system",
        ])
    }
}

fn interpret(instrument: &'static Instrument, sheet: &ScoreSheet) -> Report {
    let mut report = Report::new("DETAILED BIPOLAR DISORDER SCREENING ANALYSIS");
    let band = instrument.overall_band(sheet.overall);

    report.section(
        format!("OVERALL BIPOLAR RISK SCORE: {:.1}/100", sheet.overall),
        [
            format!("RISK LEVEL: {}", band.label),
            format!("INTERPRETATION: {}", band.summary),
        ],
    );

    let ranked = sheet.ranked();
    let mut analysis = Vec::new();
    for subscale in &ranked {
        analysis.push(format!(
            "• {}: {:.1} ({})",
            subscale.label,
            subscale.score,
            instrument.subscale_band(subscale.score).label
        ));
        analysis.push(format!("  {}", instrument.description(subscale.key)));
    }
    report.section("DETAILED SUBSCALE ANALYSIS", analysis);

    let top: Vec<&str> = ranked.iter().take(3).map(|s| s.label).collect();
    report.section(
        "TOP 3 CONCERNS",
        ranked
            .iter()
            .take(3)
            .enumerate()
            .map(|(i, s)| format!("{}. {}: {:.0}", i + 1, s.label, s.score)),
    );

    let safety = if depressive(sheet) > CONCERN_DEPRESSIVE || sheet.overall > CONCERN_OVERALL {
        let mut lines = vec!["ELEVATED SAFETY CONCERN".to_string()];
        lines.extend(bullets(&[
            "High depression scores may indicate suicide risk",
            "Contact crisis hotline: 988",
            "Consider emergency room if having thoughts of self-harm",
        ]));
        lines
    } else {
        vec!["No immediate safety concerns indicated".to_string()]
    };
    report.section("SAFETY ASSESSMENT", safety);

    report.section("RECOMMENDATIONS", recommendations(sheet.overall, &top));

    let next_steps = if sheet.overall >= PROFESSIONAL_TRACK {
        numbered(&[
            "Schedule appointment with psychiatrist or psychologist",
            "Bring these results to your appointment",
            "Consider mood tracking between now and appointment",
            "Inform trusted family/friends about concerns",
            "Avoid major life decisions until evaluated",
        ])
    } else {
        numbered(&[
            "Continue monitoring mood patterns",
            "Maintain healthy lifestyle habits",
            "Consider annual mental health check-ups",
            "Learn stress management techniques",
        ])
    };
    report.section("RECOMMENDED NEXT STEPS", next_steps);

    report.section(
        "CRISIS RESOURCES",
        bullets(&[
            "National Suicide Prevention Lifeline: 988",
            "Crisis Text Line: Text HOME to 741741",
            "Emergency: Call 911",
        ]),
    );
    report.section(
        "EDUCATIONAL RESOURCES",
        bullets(&[
            "National Alliance on Mental Illness (NAMI): nami.org",
            "International Bipolar Foundation: ibpf.org",
            "Depression and Bipolar Support Alliance: dbsalliance.org",
        ]),
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{demo_sheet, sheet_from_scores, Aggregation, WeightOverrides};
    use std::collections::BTreeMap;

    fn sheet(overall: f64, depressive: f64) -> ScoreSheet {
        let mut scores: BTreeMap<String, f64> = INSTRUMENT
            .demo
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        scores.insert("depressive_episodes".to_string(), depressive);
        scores.insert("overall_risk".to_string(), overall);
        sheet_from_scores(&INSTRUMENT, &scores, &Aggregation::Mean).unwrap()
    }

    #[test]
    fn test_catalog_shape() {
        let counts: Vec<usize> = INSTRUMENT.subscales.iter().map(|s| s.questions.len()).collect();
        assert_eq!(counts, vec![7, 7, 6, 6, 5, 5, 5, 5]);
        assert_eq!(INSTRUMENT.question_count(), 46);
        assert!(INSTRUMENT.start_gate.is_some());
    }

    #[test]
    fn test_weights_cover_every_subscale() {
        let weights = INSTRUMENT.weights.unwrap();
        for subscale in INSTRUMENT.subscales {
            assert!(weights.iter().any(|(k, _)| *k == subscale.key), "{}", subscale.key);
        }
        let total: f64 = weights.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_safety_gate_thresholds() {
        assert!(safety_gate(&sheet(70.0, 80.0)).is_none());
        assert!(matches!(safety_gate(&sheet(70.1, 10.0)), Some(Checkpoint::Gate { .. })));
        assert!(matches!(safety_gate(&sheet(10.0, 80.1)), Some(Checkpoint::Gate { .. })));
    }

    #[test]
    fn test_safety_assessment_in_report() {
        let report = INSTRUMENT.report(&sheet(40.0, 60.0));
        let safety = report.find("SAFETY ASSESSMENT").unwrap();
        assert_eq!(safety.lines, vec!["No immediate safety concerns indicated"]);

        let report = INSTRUMENT.report(&sheet(86.0, 10.0));
        let safety = report.find("SAFETY ASSESSMENT").unwrap();
        assert_eq!(safety.lines[0], "ELEVATED SAFETY CONCERN");
    }

    #[test]
    fn test_demo_report() {
        let aggregation = Aggregation::resolve(&INSTRUMENT, &WeightOverrides::default());
        let sheet = demo_sheet(&INSTRUMENT, &aggregation).unwrap();
        let report = INSTRUMENT.report(&sheet);

        let overall = report.find("OVERALL BIPOLAR RISK SCORE: 63.9/100").unwrap();
        assert_eq!(overall.lines[0], "RISK LEVEL: ELEVATED RISK");

        let top = report.find("TOP 3 CONCERNS").unwrap();
        assert_eq!(
            top.lines,
            vec![
                "1. Sleep Patterns: 80",
                "2. Depressive Episodes: 75",
                "3. Functional Impairment: 70",
            ]
        );

        let recommendations = report.find("RECOMMENDATIONS").unwrap();
        assert!(recommendations
            .lines
            .contains(&"• Address: Sleep Patterns, Depressive Episodes".to_string()));

        let next = report.find("RECOMMENDED NEXT STEPS").unwrap();
        assert!(next.lines[0].starts_with("1. Schedule appointment"));
    }
}

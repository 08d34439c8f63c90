//! Narcissistic traits screening, modelled on NPI subscales.

use super::report::{bullets, Report};
use super::types::{Band, Instrument, Locale, Question, Subscale, Tone};
use crate::scoring::ScoreSheet;

static SUBSCALES: [Subscale; 7] = [
    Subscale {
        key: "grandiosity",
        label: "Grandiosity",
        description: "Inflated sense of self-importance and uniqueness",
        questions: &[
            Question::direct("I think I am a special person"),
            Question::direct("I am more capable than other people"),
            Question::direct("I have a natural talent for influencing people"),
            Question::reverse("I am essentially a modest person"),
            Question::reverse("I see myself as an ordinary person"),
            Question::direct("I believe I am destined for greatness"),
        ],
    },
    Subscale {
        key: "entitlement",
        label: "Entitlement",
        description: "Expectation of special treatment and recognition",
        questions: &[
            Question::direct("I expect a great deal from other people"),
            Question::direct("I deserve more recognition for my contributions"),
            Question::direct("People should respect my authority"),
            Question::reverse("I am content with ordinary achievements"),
            Question::reverse("I don't expect special treatment from others"),
            Question::direct("Rules should apply to me differently than others"),
        ],
    },
    Subscale {
        key: "exploitation",
        label: "Exploitation",
        description: "Using others for personal gain without empathy",
        questions: &[
            Question::direct("I find it easy to manipulate people"),
            Question::direct("I can make anyone believe anything I want them to"),
            Question::direct("I get upset when others don't notice how I look"),
            Question::reverse("I genuinely care about others' feelings"),
            Question::direct("I often use others to get what I want"),
            Question::reverse("Other people's needs are as important as mine"),
        ],
    },
    Subscale {
        key: "vanity",
        label: "Vanity",
        description: "Excessive focus on appearance and admiration",
        questions: &[
            Question::direct("I like to look at myself in the mirror"),
            Question::direct("I really like to be the center of attention"),
            Question::reverse("I am less attractive than most people"),
            Question::reverse("Physical appearance is not important to me"),
            Question::direct("I often check my appearance in reflective surfaces"),
            Question::direct("Compliments about my looks are very important to me"),
        ],
    },
    Subscale {
        key: "authority",
        label: "Authority",
        description: "Need to dominate and control others",
        questions: &[
            Question::direct("I like having authority over other people"),
            Question::direct("I would prefer to be a leader"),
            Question::direct("I don't like being told what to do"),
            Question::reverse("I prefer to follow rather than lead"),
            Question::direct("People naturally look to me for leadership"),
            Question::direct("I enjoy making decisions for others"),
        ],
    },
    Subscale {
        key: "self_sufficiency",
        label: "Self-Sufficiency",
        description: "Belief in superiority and independence",
        questions: &[
            Question::direct("I can live my life the way I want to"),
            Question::direct("I am independent of others"),
            Question::direct("I don't need others to validate my worth"),
            Question::reverse("I often seek advice from others"),
            Question::reverse("I rely heavily on others for emotional support"),
            Question::direct(
                "I function better when others depend on me than when I depend on others",
            ),
        ],
    },
    Subscale {
        key: "exhibitionism",
        label: "Exhibitionism",
        description: "Attention-seeking and showing off behaviors",
        questions: &[
            Question::direct("I know that I am good because everybody keeps telling me so"),
            Question::reverse("When people compliment me I get embarrassed"),
            Question::direct("I enjoy performing in front of others"),
            Question::reverse("I prefer to blend into the background"),
            Question::direct("I like to share my achievements with others"),
            Question::direct("I enjoy being photographed"),
        ],
    },
];

static OVERALL_BANDS: [Band; 4] = [
    Band {
        floor: 80.0,
        label: "VERY HIGH CONCERN",
        summary: "Very high narcissistic traits (seek help). Severe narcissistic patterns requiring professional attention.",
        tone: Tone::Alert,
    },
    Band {
        floor: 60.0,
        label: "HIGH CONCERN",
        summary: "High narcissistic traits (concerning). Significant narcissistic patterns that may affect relationships and functioning.",
        tone: Tone::Alert,
    },
    Band {
        floor: 30.0,
        label: "MODERATE",
        summary: "Moderate narcissistic traits. Some narcissistic tendencies present. Monitor for impact on relationships.",
        tone: Tone::Caution,
    },
    Band {
        floor: 0.0,
        label: "LOW RISK",
        summary: "Low narcissistic traits (healthy range). You show healthy levels of self-confidence with good empathy and interpersonal skills.",
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

const GUIDANCE_THRESHOLD: f64 = 60.0;

pub static INSTRUMENT: Instrument = Instrument {
    key: "narcissism",
    title: "NARCISSISTIC TRAITS SCREENING TOOL",
    assessment_type: "Narcissism Screening Tool",
    version: "1.0",
    locale: Locale::En,
    intro: &[
        "IMPORTANT DISCLAIMERS:",
        "• This is NOT a diagnostic tool for personality disorders",
        "• Only licensed professionals can diagnose NPD",
        "• High scores indicate traits, not necessarily pathology",
        "• Results are for self-awareness and educational purposes only",
        "• Consider professional consultation if results concern you",
    ],
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
    overall_key: "overall_narcissism",
    overall_label: "Overall narcissism index",
    overall_bands: &OVERALL_BANDS,
    subscale_bands: &SUBSCALE_BANDS,
    disclaimer: Some("This is a screening tool, not a diagnostic instrument"),
    resources: &[],
    closing: &[
        "REMEMBER: This is a screening tool, not a clinical diagnosis.",
        "Professional consultation is recommended for concerning results.",
    ],
    demo: &[
        ("grandiosity", 65.0),
        ("entitlement", 70.0),
        ("exploitation", 45.0),
        ("vanity", 55.0),
        ("authority", 80.0),
        ("self_sufficiency", 75.0),
        ("exhibitionism", 60.0),
    ],
    interpret,
    checkpoint: None,
};

fn recommendations(overall: f64, highest: &str) -> Vec<String> {
    let highest = highest.to_lowercase();
    if overall < 30.0 {
        bullets(&[
            "Healthy self-confidence level",
            "Continue building empathy",
            "Maintain balanced relationships",
            "Consider leadership roles",
            "Keep developing self-awareness",
        ])
    } else if overall < 60.0 {
        vec![
            format!("• Monitor {} tendencies", highest),
            "• Practice active listening".to_string(),
            "• Seek feedback from others".to_string(),
            "• Focus on empathy building".to_string(),
            "• Consider counseling for growth".to_string(),
        ]
    } else if overall < 80.0 {
        vec![
            format!("• Address {} patterns", highest),
            "• Seek professional counseling".to_string(),
            "• Practice humility exercises".to_string(),
            "• Work on empathy skills".to_string(),
            "• Consider impact on relationships".to_string(),
        ]
    } else {
        bullets(&[
            "Strongly consider professional help",
            "Therapy focusing on narcissistic traits",
            "Relationship counseling if applicable",
            "Mindfulness and empathy training",
            "Regular self-reflection practices",
        ])
    }
}

fn guidance(overall: f64) -> Vec<String> {
    if overall >= GUIDANCE_THRESHOLD {
        bullets(&[
            "Consider consultation with a mental health professional",
            "Therapy can help address narcissistic patterns",
            "Focus on empathy and relationship skills",
        ])
    } else {
        bullets(&[
            "Scores in normal range, professional help not urgent",
            "Continue self-awareness and personal growth",
            "Monitor for changes over time",
        ])
    }
}

fn interpret(instrument: &'static Instrument, sheet: &ScoreSheet) -> Report {
    let mut report = Report::new("DETAILED NARCISSISM SCREENING ANALYSIS");
    let band = instrument.overall_band(sheet.overall);

    report.section(
        format!("OVERALL NARCISSISM INDEX: {:.1}/100", sheet.overall),
        [
            format!("RISK LEVEL: {}", band.label),
            format!("INTERPRETATION: {}", band.summary),
        ],
    );

    let mut breakdown = Vec::new();
    for subscale in sheet.ranked() {
        breakdown.push(format!(
            "• {}: {:.1} ({})",
            subscale.label,
            subscale.score,
            instrument.subscale_band(subscale.score).label
        ));
        breakdown.push(format!("  {}", instrument.description(subscale.key)));
    }
    report.section("SUBSCALE BREAKDOWN", breakdown);

    let highest_label = match sheet.highest() {
        Some(highest) => {
            report.section(
                "HIGHEST CONCERN",
                [format!("{} ({:.1})", highest.label, highest.score)],
            );
            highest.label
        }
        None => "",
    };

    report.section("RECOMMENDATIONS", recommendations(sheet.overall, highest_label));
    report.section("PROFESSIONAL GUIDANCE", guidance(sheet.overall));
    report.section(
        "NEXT STEPS",
        bullets(&[
            "Reflect on results and their accuracy",
            "Seek feedback from trusted friends/family",
            "Consider retaking assessment in 6 months",
            "Focus on empathy and perspective-taking",
        ]),
    );

    report
}

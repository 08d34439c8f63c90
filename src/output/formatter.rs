use std::io::IsTerminal;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

use crate::config::ColorMode;
use crate::fingerprint::{Evaluation, Signature};
use crate::instrument::{Band, Instrument, Locale, Report, Tone};
use crate::scoring::ScoreSheet;

const BAR_WIDTH: usize = 20;
const MIN_BAR_WIDTH: usize = 5;

/// Decide on colour output from the configured mode and whether stdout is a TTY
pub fn should_use_colors(mode: ColorMode) -> bool {
    mode.enabled(std::io::stdout().is_terminal())
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn paint(text: &str, tone: Tone, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match tone {
        Tone::Good => text.green().to_string(),
        Tone::Caution => text.yellow().to_string(),
        Tone::Alert => text.red().to_string(),
    }
}

/// A 0-100 score as a bar of `width` cells: "████░░░░"
pub fn score_bar(score: f64, width: usize) -> String {
    let ratio = (score / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn score_row(
    label: &str,
    label_width: usize,
    score: f64,
    band: &Band,
    bar_width: usize,
    use_colors: bool,
) -> String {
    let label = format!(
        "{:<width$}",
        truncate_label(label, label_width),
        width = label_width
    );
    let bar = score_bar(score, bar_width);
    format!(
        "{}  {:>5.1}  {}  {}",
        label,
        score,
        paint(&bar, band.tone, use_colors),
        paint(band.label, band.tone, use_colors)
    )
}

/// Subscale scores in catalog order with bars, then the overall score
pub fn format_score_table(instrument: &Instrument, sheet: &ScoreSheet, use_colors: bool) -> String {
    let natural_width = sheet
        .subscales
        .iter()
        .map(|s| s.label.chars().count())
        .chain(std::iter::once(instrument.overall_label.chars().count()))
        .max()
        .unwrap_or(0);

    // label + score (5) + band label (~16) + separators (6)
    let (label_width, bar_width) = match get_terminal_width() {
        Some(width) => {
            let fixed = 5 + 16 + 6;
            let room = width.saturating_sub(fixed + BAR_WIDTH);
            if room >= natural_width {
                (natural_width, BAR_WIDTH)
            } else {
                (room.max(12).min(natural_width), MIN_BAR_WIDTH)
            }
        }
        None => (natural_width, BAR_WIDTH),
    };

    let mut lines: Vec<String> = sheet
        .subscales
        .iter()
        .map(|s| {
            let band = instrument.subscale_band(s.score);
            score_row(s.label, label_width, s.score, band, bar_width, use_colors)
        })
        .collect();

    lines.push("-".repeat(label_width + 9 + bar_width));
    let overall = score_row(
        instrument.overall_label,
        label_width,
        sheet.overall,
        instrument.overall_band(sheet.overall),
        bar_width,
        use_colors,
    );
    lines.push(heading(&overall, use_colors));

    lines.join("\n")
}

/// Title, then every section as a heading followed by its lines
pub fn format_report(report: &Report, use_colors: bool) -> String {
    let rule = "=".repeat(report.title.chars().count().min(60));
    let mut out = vec![heading(&report.title, use_colors), rule];

    for section in &report.sections {
        out.push(String::new());
        out.push(heading(&section.heading, use_colors));
        out.extend(section.lines.iter().cloned());
    }

    out.join("\n")
}

struct FooterText {
    scores: &'static str,
    resources: &'static str,
    disclaimer: &'static str,
}

fn footer_text(locale: Locale) -> FooterText {
    match locale {
        Locale::En => FooterText {
            scores: "SCORES",
            resources: "SUPPORT RESOURCES",
            disclaimer: "Disclaimer",
        },
        Locale::Pt => FooterText {
            scores: "PONTUAÇÕES",
            resources: "RECURSOS DE APOIO",
            disclaimer: "Aviso",
        },
    }
}

/// Closing lines, support resources and the disclaimer
pub fn format_footer(instrument: &Instrument, use_colors: bool) -> String {
    let text = footer_text(instrument.locale);
    let mut out: Vec<String> = Vec::new();

    if !instrument.resources.is_empty() {
        out.push(heading(text.resources, use_colors));
        out.extend(
            instrument
                .resources
                .iter()
                .map(|(key, value)| format!("  {}: {}", key.replace('_', " "), value)),
        );
        out.push(String::new());
    }

    out.extend(instrument.closing.iter().map(|line| line.to_string()));

    if let Some(disclaimer) = instrument.disclaimer {
        if !instrument.closing.is_empty() {
            out.push(String::new());
        }
        let line = format!("{}: {}", text.disclaimer, disclaimer);
        out.push(if use_colors { line.dimmed().to_string() } else { line });
    }

    out.join("\n")
}

/// Everything shown after a questionnaire: scores, interpretation, footer
pub fn format_result(
    instrument: &'static Instrument,
    sheet: &ScoreSheet,
    use_colors: bool,
) -> String {
    let text = footer_text(instrument.locale);
    let report = instrument.report(sheet);

    let mut parts = vec![
        heading(text.scores, use_colors),
        format_score_table(instrument, sheet, use_colors),
        String::new(),
        format_report(&report, use_colors),
    ];
    let footer = format_footer(instrument, use_colors);
    if !footer.is_empty() {
        parts.push(String::new());
        parts.push(footer);
    }
    parts.join("\n")
}

/// One line per instrument: key, question count, title
pub fn format_instrument_list(instruments: &[&Instrument], use_colors: bool) -> String {
    let key_width = instruments.iter().map(|i| i.key.len()).max().unwrap_or(0);

    instruments
        .iter()
        .map(|instrument| {
            let key = format!("{:<width$}", instrument.key, width = key_width);
            let count = format!("{:>3} questions", instrument.question_count());
            if use_colors {
                format!("{}  {}  {}", key.bold(), count.dimmed(), instrument.title)
            } else {
                format!("{}  {}  {}", key, count, instrument.title)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn signature_cells(signature: &Signature) -> String {
    signature
        .as_array()
        .iter()
        .map(|v| format!("{:>9.4}", v))
        .collect::<Vec<_>>()
        .join("")
}

/// Reference signature, then one row per text with its distance.
/// The suspect row is marked with `*`.
pub fn format_signature_table(evaluation: &Evaluation, use_colors: bool) -> String {
    let label_width = 11;
    let names: String = Signature::NAMES.iter().map(|n| format!("{:>9}", n)).collect();

    let mut lines = vec![
        heading(&format!("  {:<label_width$}{}{:>11}", "", names, "distância"), use_colors),
        format!("  {:<label_width$}{}", "referência", signature_cells(&evaluation.reference)),
    ];

    for row in &evaluation.rows {
        let marker = if row.index == evaluation.suspect { "*" } else { " " };
        let line = format!(
            "{} {:<label_width$}{}{:>11.4}",
            marker,
            format!("texto {}", row.index),
            signature_cells(&row.signature),
            row.distance
        );
        if use_colors && row.index == evaluation.suspect {
            lines.push(line.red().bold().to_string());
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

pub fn format_verdict(evaluation: &Evaluation) -> String {
    format!("O autor do texto {} está infectado com COH-PIAH", evaluation.suspect)
}

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::console::{Console, SessionError};
use crate::instrument::{Checkpoint, Instrument};
use crate::scoring::{score_responses, Aggregation, ScoreSheet};

const RULE_WIDTH: usize = 70;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Completed(ScoreSheet),
    /// The user declined to start.
    Cancelled(&'static str),
    /// The user declined to go on after a checkpoint. Nothing is rendered or saved.
    Aborted(&'static str),
}

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Walk the user through every question of `instrument` and score the answers.
pub fn administer<R: BufRead, W: Write>(
    instrument: &'static Instrument,
    aggregation: &Aggregation,
    console: &mut Console<R, W>,
) -> Result<Outcome, SessionError> {
    let locale = instrument.locale;

    if let Some(gate) = &instrument.start_gate {
        console.blank()?;
        console.say_all(gate.notes)?;
        console.blank()?;
        if !console.confirm(gate.question, locale)? {
            info!(instrument = instrument.key, "session cancelled before start");
            console.say(gate.cancel_message)?;
            return Ok(Outcome::Cancelled(gate.cancel_message));
        }
    }

    console.say(rule('=', RULE_WIDTH))?;
    console.say(instrument.title)?;
    console.say(rule('=', RULE_WIDTH))?;
    console.blank()?;
    console.say_all(instrument.intro)?;
    console.blank()?;
    console.say_all(instrument.scale)?;
    console.say(rule('-', RULE_WIDTH))?;

    let mut responses = Vec::with_capacity(instrument.subscales.len());
    for subscale in instrument.subscales {
        console.blank()?;
        console.say(format!(
            "{}: {}",
            subscale.label.to_uppercase(),
            subscale.description
        ))?;
        console.say(rule('-', 50))?;

        let mut group = Vec::with_capacity(subscale.questions.len());
        for (i, question) in subscale.questions.iter().enumerate() {
            let message = format!("{}. {}: ", i + 1, question.text);
            group.push(console.ask_likert(&message, locale)?);
        }
        responses.push(group);
    }

    let sheet = score_responses(instrument, &responses, aggregation)?;
    debug!(
        instrument = instrument.key,
        overall = sheet.overall,
        "questionnaire scored"
    );

    if let Some(checkpoint) = instrument.checkpoint.and_then(|check| check(&sheet)) {
        console.blank()?;
        console.say(rule('=', RULE_WIDTH))?;
        match checkpoint {
            Checkpoint::Notice { lines } => {
                console.say_all(&lines)?;
                console.say(rule('=', RULE_WIDTH))?;
            }
            Checkpoint::Gate {
                lines,
                question,
                abort_message,
            } => {
                console.say_all(&lines)?;
                console.say(rule('=', RULE_WIDTH))?;
                console.blank()?;
                if !console.confirm(question, locale)? {
                    info!(instrument = instrument.key, "session stopped at checkpoint");
                    console.say(abort_message)?;
                    return Ok(Outcome::Aborted(abort_message));
                }
            }
        }
    }

    Ok(Outcome::Completed(sheet))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::{bipolar, mythomania, personality};
    use crate::scoring::WeightOverrides;
    use std::io::Cursor;

    type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(input: String) -> TestConsole {
        Console::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    fn output(console: &TestConsole) -> String {
        String::from_utf8(console.writer().clone()).unwrap()
    }

    fn answers(instrument: &Instrument, value: u8) -> String {
        format!("{}\n", value).repeat(instrument.question_count())
    }

    fn run(instrument: &'static Instrument, input: String) -> (Outcome, String) {
        let aggregation = Aggregation::resolve(instrument, &WeightOverrides::default());
        let mut console = console(input);
        let outcome = administer(instrument, &aggregation, &mut console).unwrap();
        (outcome, output(&console))
    }

    #[test]
    fn test_personality_session() {
        let (outcome, out) = run(&personality::INSTRUMENT, answers(&personality::INSTRUMENT, 3));
        let Outcome::Completed(sheet) = outcome else {
            panic!("expected a completed session");
        };
        assert!((sheet.overall - 60.0).abs() < 1e-9);
        assert!(out.contains("EVIDENCE-BASED PERSONALITY ASSESSMENT"));
        assert!(out.contains("OPENNESS: Creativity, curiosity, and openness to new experiences"));
        assert!(out.contains("8. I handle criticism well: "));
    }

    #[test]
    fn test_bad_answers_are_reasked() {
        let input = format!("x\n6\n{}", answers(&personality::INSTRUMENT, 5));
        let (outcome, out) = run(&personality::INSTRUMENT, input);
        assert!(matches!(outcome, Outcome::Completed(_)));
        assert!(out.contains("Please enter a valid number"));
        assert!(out.contains("Please enter a number between 1 and 5"));
    }

    #[test]
    fn test_truncated_input() {
        let aggregation = Aggregation::Mean;
        let mut console = console("3\n3\n".to_string());
        let err = administer(&personality::INSTRUMENT, &aggregation, &mut console).unwrap_err();
        assert!(matches!(err, SessionError::EndOfInput));
    }

    #[test]
    fn test_start_gate_declined() {
        let (outcome, out) = run(&bipolar::INSTRUMENT, "n\n".to_string());
        assert_eq!(
            outcome,
            Outcome::Cancelled("Assessment cancelled. Seek professional help if needed.")
        );
        assert!(out.contains("Ready to begin? (y/n): "));
        assert!(!out.contains("BIPOLAR DISORDER SCREENING TOOL"));
    }

    #[test]
    fn test_safety_gate_declined_aborts() {
        // All 5s: reverse items score 1, overall well above 70.
        let input = format!("y\n{}n\n", answers(&bipolar::INSTRUMENT, 5));
        let (outcome, out) = run(&bipolar::INSTRUMENT, input);
        assert!(matches!(outcome, Outcome::Aborted(_)));
        assert!(out.contains("HIGH RISK DETECTED"));
        assert!(out.contains("Please prioritize your safety"));
    }

    #[test]
    fn test_safety_gate_accepted_continues() {
        let input = format!("y\n{}y\n", answers(&bipolar::INSTRUMENT, 5));
        let (outcome, _) = run(&bipolar::INSTRUMENT, input);
        assert!(matches!(outcome, Outcome::Completed(_)));
    }

    #[test]
    fn test_low_bipolar_scores_skip_gate() {
        let input = format!("y\n{}", answers(&bipolar::INSTRUMENT, 1));
        let (outcome, out) = run(&bipolar::INSTRUMENT, input);
        assert!(matches!(outcome, Outcome::Completed(_)));
        assert!(!out.contains("HIGH RISK DETECTED"));
    }

    #[test]
    fn test_mythomania_feedback_notice() {
        let input = format!("sim\n{}", answers(&mythomania::INSTRUMENT, 3));
        let (outcome, out) = run(&mythomania::INSTRUMENT, input);
        let Outcome::Completed(sheet) = outcome else {
            panic!("expected a completed session");
        };
        assert!((sheet.overall - 60.0).abs() < 1e-9);
        assert!(out.contains("Pronto para começar com honestidade? (s/n): "));
        assert!(out.contains("FEEDBACK IMEDIATO"));
        assert!(out.contains("PONTUAÇÃO MODERADA"));
        assert!(out.contains("Sua pontuação: 60.0/100"));
    }
}

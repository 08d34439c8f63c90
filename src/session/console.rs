use std::io::{BufRead, StdinLock, Stdout, Write};

use thiserror::Error;

use crate::instrument::Locale;
use crate::scoring::{Likert, ScoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input ended before the session was finished")]
    EndOfInput,
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Line-oriented prompt/answer channel. Stdin/stdout in the binary, cursors in tests.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> Result<(), SessionError> {
        writeln!(self.writer, "{}", text.as_ref())?;
        Ok(())
    }

    pub fn say_all<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<(), SessionError> {
        for line in lines {
            self.say(line)?;
        }
        Ok(())
    }

    pub fn blank(&mut self) -> Result<(), SessionError> {
        self.say("")
    }

    /// Print `message` and read one line, without its line ending.
    /// Returns `None` once input is exhausted.
    pub fn read_line(&mut self, message: &str) -> Result<Option<String>, SessionError> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        let trimmed_len = input.trim_end_matches(['\n', '\r']).len();
        input.truncate(trimmed_len);
        Ok(Some(input))
    }

    /// Prompt and return the trimmed answer. End of input is an error.
    pub fn prompt(&mut self, message: &str) -> Result<String, SessionError> {
        match self.read_line(message)? {
            Some(input) => Ok(input.trim().to_string()),
            None => Err(SessionError::EndOfInput),
        }
    }

    /// Prompt with a default value. Returns default if input is empty.
    pub fn prompt_with_default(
        &mut self,
        message: &str,
        default: &str,
    ) -> Result<String, SessionError> {
        let input = self.prompt(&format!("{} [{}]: ", message, default))?;
        if input.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(input)
        }
    }

    /// Yes/no question with a default for empty input.
    pub fn prompt_yes_no(
        &mut self,
        message: &str,
        default_yes: bool,
    ) -> Result<bool, SessionError> {
        let hint = if default_yes { "Y/n" } else { "y/N" };
        let input = self.prompt(&format!("{} [{}]: ", message, hint))?;
        if input.is_empty() {
            Ok(default_yes)
        } else {
            Ok(Locale::En.is_yes(&input))
        }
    }

    /// Yes/no question in the instrument's language. Anything but a yes is a no.
    pub fn confirm(&mut self, question: &str, locale: Locale) -> Result<bool, SessionError> {
        let input = self.prompt(&format!("{} {}: ", question, locale.yes_no_hint()))?;
        Ok(locale.is_yes(&input))
    }

    /// Ask until the answer is an integer in 1..=5.
    pub fn ask_likert(&mut self, message: &str, locale: Locale) -> Result<Likert, SessionError> {
        loop {
            let input = self.prompt(message)?;
            match Likert::parse(&input) {
                Ok(likert) => return Ok(likert),
                Err(ScoreError::InvalidResponse(_)) => self.say(locale.out_of_range())?,
                Err(_) => self.say(locale.not_a_number())?,
            }
        }
    }

    /// Ask until the answer parses as a finite number.
    pub fn ask_number(&mut self, message: &str, locale: Locale) -> Result<f64, SessionError> {
        loop {
            let input = self.prompt(message)?;
            match input.replace(',', ".").parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => self.say(locale.not_a_number())?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.writer().clone()).unwrap()
    }

    #[test]
    fn test_ask_likert_retries_until_valid() {
        let mut console = console("abc\n9\n\n4\n");
        let answer = console.ask_likert("1. Question: ", Locale::En).unwrap();
        assert_eq!(answer.value(), 4);

        let out = output(&console);
        assert_eq!(out.matches("1. Question: ").count(), 4);
        assert_eq!(out.matches("Please enter a valid number").count(), 2);
        assert_eq!(out.matches("Please enter a number between 1 and 5").count(), 1);
    }

    #[test]
    fn test_ask_likert_portuguese_messages() {
        let mut console = console("0\nx\n2\n");
        console.ask_likert("> ", Locale::Pt).unwrap();
        let out = output(&console);
        assert!(out.contains("Por favor, digite um número entre 1 e 5"));
        assert!(out.contains("Por favor, digite um número válido"));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut console = console("7\n");
        let err = console.ask_likert("> ", Locale::En).unwrap_err();
        assert!(matches!(err, SessionError::EndOfInput));
    }

    #[test]
    fn test_confirm_uses_locale() {
        let mut console = console("y\ns\nsim\nyes\n");
        assert!(console.confirm("Ready?", Locale::En).unwrap());
        assert!(!console.confirm("Ready?", Locale::En).unwrap());
        assert!(console.confirm("Pronto?", Locale::Pt).unwrap());
        assert!(console.confirm("Ready?", Locale::En).unwrap());
        assert!(output(&console).contains("Pronto? (s/n): "));
    }

    #[test]
    fn test_prompt_defaults() {
        let mut console = console("\ncustom\n\nn\n");
        assert_eq!(console.prompt_with_default("Dir", "./out").unwrap(), "./out");
        assert_eq!(console.prompt_with_default("Dir", "./out").unwrap(), "custom");
        assert!(console.prompt_yes_no("Save?", true).unwrap());
        assert!(!console.prompt_yes_no("Save?", true).unwrap());
    }

    #[test]
    fn test_ask_number_accepts_decimal_comma() {
        let mut console = console("abc\n4,51\n");
        assert_eq!(console.ask_number("wal: ", Locale::Pt).unwrap(), 4.51);
    }

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut console = console("  Alô, mundo.  \r\n");
        assert_eq!(
            console.read_line("> ").unwrap().as_deref(),
            Some("  Alô, mundo.  ")
        );
        assert_eq!(console.read_line("> ").unwrap(), None);
    }
}

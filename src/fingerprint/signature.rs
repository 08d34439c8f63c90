use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tokenize::{
    char_len, distinct_words, hapax_words, split_phrases, split_sentences, split_words,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FingerprintError {
    #[error("text has no words to measure")]
    EmptyText,

    #[error("text {0} has no words to measure")]
    EmptyTextAt(usize),

    #[error("no texts to evaluate")]
    NoTexts,

    #[error("a signature needs {expected} values, got {0}", expected = Signature::LEN)]
    ReferenceLength(usize),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
}

/// Six lexical statistics describing an author's writing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    /// Mean word length.
    pub wal: f64,
    /// Type-token ratio.
    pub ttr: f64,
    /// Hapax legomena ratio.
    pub hlr: f64,
    /// Mean sentence length.
    pub sal: f64,
    /// Phrases per sentence.
    pub sac: f64,
    /// Mean phrase length.
    pub pal: f64,
}

impl Signature {
    pub const LEN: usize = 6;

    /// Short names, in field order.
    pub const NAMES: [&'static str; 6] = ["wal", "ttr", "hlr", "sal", "sac", "pal"];

    /// Prompt labels, in field order.
    pub const LABELS: [&'static str; 6] = [
        "Entre o tamanho médio de palavra",
        "Entre a relação Type-Token",
        "Entre a Razão Hapax Legomana",
        "Entre o tamanho médio de sentença",
        "Entre a complexidade média da sentença",
        "Entre o tamanho medio de frase",
    ];

    pub fn compute(text: &str) -> Result<Self, FingerprintError> {
        let sentences = split_sentences(text);
        let phrases: Vec<&str> = sentences.iter().flat_map(|s| split_phrases(s)).collect();
        let words: Vec<&str> = phrases.iter().flat_map(|p| split_words(p)).collect();

        if words.is_empty() {
            return Err(FingerprintError::EmptyText);
        }

        let n_words = words.len() as f64;
        let n_sentences = sentences.len() as f64;
        let n_phrases = phrases.len() as f64;
        let word_chars: usize = words.iter().map(|w| char_len(w)).sum();
        let sentence_chars: usize = sentences.iter().map(|s| char_len(s)).sum();
        let phrase_chars: usize = phrases.iter().map(|p| char_len(p)).sum();

        Ok(Self {
            wal: word_chars as f64 / n_words,
            ttr: distinct_words(&words) as f64 / n_words,
            hlr: hapax_words(&words) as f64 / n_words,
            sal: sentence_chars as f64 / n_sentences,
            sac: n_phrases / n_sentences,
            pal: phrase_chars as f64 / n_phrases,
        })
    }

    pub fn as_array(&self) -> [f64; 6] {
        [self.wal, self.ttr, self.hlr, self.sal, self.sac, self.pal]
    }

    /// Rejects the wrong number of values and NaN or infinite entries.
    pub fn from_slice(values: &[f64]) -> Result<Self, FingerprintError> {
        if let Some((name, _)) = Self::NAMES
            .iter()
            .zip(values)
            .find(|(_, v)| !v.is_finite())
        {
            return Err(FingerprintError::NonFinite(*name));
        }
        match values {
            [wal, ttr, hlr, sal, sac, pal] => Ok(Self {
                wal: *wal,
                ttr: *ttr,
                hlr: *hlr,
                sal: *sal,
                sac: *sac,
                pal: *pal,
            }),
            _ => Err(FingerprintError::ReferenceLength(values.len())),
        }
    }
}

impl From<[f64; 6]> for Signature {
    fn from(values: [f64; 6]) -> Self {
        let [wal, ttr, hlr, sal, sac, pal] = values;
        Self {
            wal,
            ttr,
            hlr,
            sal,
            sac,
            pal,
        }
    }
}

/// Parses `a,b,c,d,e,f`.
impl FromStr for Signature {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<f64>()
                    .map_err(|_| FingerprintError::InvalidNumber(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_slice(&values)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.as_array().iter().map(|v| format!("{:.4}", v)).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Degree of similarity between two signatures: `|sum(a_i - b_i)| / 6`.
/// Lower means more alike.
pub fn compare(a: &Signature, b: &Signature) -> f64 {
    let sum: f64 = a
        .as_array()
        .iter()
        .zip(b.as_array())
        .map(|(x, y)| x - y)
        .sum();
    sum.abs() / Signature::LEN as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_compute_short_passage() {
        let sig =
            Signature::compute("Alô, mundo. Aqui quem fala é o Frio! Bug ou não?").unwrap();
        assert!(close(sig.wal, 34.0 / 11.0));
        assert!(close(sig.ttr, 1.0));
        assert!(close(sig.hlr, 1.0));
        assert!(close(sig.sal, 15.0));
        assert!(close(sig.sac, 4.0 / 3.0));
        assert!(close(sig.pal, 11.0));
    }

    #[test]
    fn test_compute_repeated_words() {
        // words: o, gato, e, o, rato, O, gato -> distinct {o, gato, e, rato}, hapax {e, rato}
        let sig = Signature::compute("O gato e o rato. O gato.").unwrap();
        assert!(close(sig.ttr, 4.0 / 7.0));
        assert!(close(sig.hlr, 2.0 / 7.0));
        // "O gato e o rato" (15) + " O gato" (7)
        assert!(close(sig.sal, 11.0));
        assert!(close(sig.sac, 1.0));
    }

    #[test]
    fn test_compute_empty_text() {
        assert_eq!(Signature::compute(""), Err(FingerprintError::EmptyText));
        assert_eq!(Signature::compute("...  !?"), Err(FingerprintError::EmptyText));
    }

    #[test]
    fn test_compare() {
        let a = Signature::from([4.5, 0.7, 0.5, 70.0, 2.0, 35.0]);
        assert_eq!(compare(&a, &a), 0.0);

        let b = Signature::from([4.0, 0.7, 0.5, 64.0, 2.0, 35.0]);
        // (0.5 + 6.0) / 6
        assert!(close(compare(&a, &b), 6.5 / 6.0));
        assert!(close(compare(&b, &a), 6.5 / 6.0));
    }

    #[test]
    fn test_compare_differences_cancel() {
        let a = Signature::from([5.0, 0.0, 0.0, 60.0, 0.0, 0.0]);
        let b = Signature::from([4.0, 0.0, 0.0, 61.0, 0.0, 0.0]);
        assert_eq!(compare(&a, &b), 0.0);
    }

    #[test]
    fn test_parse_reference() {
        let sig: Signature = "4.51, 0.693, 0.55, 70.82, 1.82, 38.5".parse().unwrap();
        assert_eq!(sig.as_array(), [4.51, 0.693, 0.55, 70.82, 1.82, 38.5]);

        let err = "1,2,3".parse::<Signature>().unwrap_err();
        assert_eq!(err, FingerprintError::ReferenceLength(3));

        let err = "1,2,x,4,5,6".parse::<Signature>().unwrap_err();
        assert_eq!(err, FingerprintError::InvalidNumber("x".to_string()));

        let err = "NaN,1,1,1,1,1".parse::<Signature>().unwrap_err();
        assert_eq!(err, FingerprintError::NonFinite("wal"));

        let err = "1,1,1,inf,1,-inf".parse::<Signature>().unwrap_err();
        assert_eq!(err, FingerprintError::NonFinite("sal"));
    }
}

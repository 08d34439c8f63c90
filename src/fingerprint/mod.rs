//! COH-PIAH detector: lexical signatures of Portuguese texts and a naive
//! closeness test against a reference signature.

mod evaluate;
mod input;
mod signature;
mod tokenize;

pub use evaluate::{evaluate, Evaluation, Row};
pub use input::{load_texts, read_reference, read_texts};
pub use signature::{compare, FingerprintError, Signature};
pub use tokenize::{distinct_words, hapax_words, split_phrases, split_sentences, split_words};

pub mod bipolar;
pub mod mythomania;
pub mod narcissism;
pub mod personality;
mod report;
mod types;

pub use report::{bullets, numbered, Checkpoint, Report, Section};
pub use types::{classify, Band, Instrument, Locale, Question, StartGate, Subscale, Tone};

/// Every questionnaire, in menu order.
pub static ALL: [&Instrument; 4] = [
    &personality::INSTRUMENT,
    &narcissism::INSTRUMENT,
    &bipolar::INSTRUMENT,
    &mythomania::INSTRUMENT,
];

pub fn find(key: &str) -> Option<&'static Instrument> {
    ALL.iter().copied().find(|instrument| instrument.key == key)
}

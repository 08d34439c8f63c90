use tracing::debug;

use super::signature::{compare, FingerprintError, Signature};

/// One measured text.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based position in the input list.
    pub index: usize,
    pub signature: Signature,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub reference: Signature,
    pub rows: Vec<Row>,
    /// 1-based index of the text closest to the reference.
    pub suspect: usize,
}

/// Measure every text against `reference` and pick the closest one.
/// Ties go to the earliest text.
pub fn evaluate<S: AsRef<str>>(
    texts: &[S],
    reference: &Signature,
) -> Result<Evaluation, FingerprintError> {
    if texts.is_empty() {
        return Err(FingerprintError::NoTexts);
    }

    let mut rows = Vec::with_capacity(texts.len());
    for (i, text) in texts.iter().enumerate() {
        let index = i + 1;
        let signature = Signature::compute(text.as_ref()).map_err(|e| match e {
            FingerprintError::EmptyText => FingerprintError::EmptyTextAt(index),
            other => other,
        })?;
        let distance = compare(&signature, reference);
        debug!(index, distance, "text measured");
        rows.push(Row {
            index,
            signature,
            distance,
        });
    }

    let mut suspect = &rows[0];
    for row in &rows[1..] {
        if row.distance < suspect.distance {
            suspect = row;
        }
    }
    let suspect = suspect.index;

    Ok(Evaluation {
        reference: *reference,
        rows,
        suspect,
    })
}

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::signature::Signature;
use crate::instrument::Locale;
use crate::session::{Console, SessionError};

/// Ask for the six reference values, one per prompt.
pub fn read_reference<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Signature, SessionError> {
    console.say("Bem-vindo ao detector automático de COH-PIAH.")?;
    console.say("Informe a assinatura típica de um aluno infectado:")?;

    let mut values = [0.0; Signature::LEN];
    for (value, label) in values.iter_mut().zip(Signature::LABELS) {
        *value = console.ask_number(&format!("{}: ", label), Locale::Pt)?;
    }
    Ok(Signature::from(values))
}

/// Read one text per line until an empty line or end of input.
pub fn read_texts<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Vec<String>, SessionError> {
    let mut texts = Vec::new();
    loop {
        let message = format!("Digite o texto {} (aperte enter para sair): ", texts.len() + 1);
        match console.read_line(&message)? {
            Some(text) if !text.trim().is_empty() => texts.push(text),
            _ => break,
        }
    }
    Ok(texts)
}

/// One text per file. Trailing whitespace is dropped so a final newline
/// does not count as an extra sentence.
pub fn load_texts(paths: &[PathBuf]) -> Result<Vec<String>> {
    paths
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read text file: {}", path.display()))?;
            Ok(content.trim_end().to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_reference() {
        let mut console = console("4.51\n0.693\nabc\n0.55\n70.82\n1.82\n38.5\n");
        let sig = read_reference(&mut console).unwrap();
        assert_eq!(sig.as_array(), [4.51, 0.693, 0.55, 70.82, 1.82, 38.5]);

        let out = String::from_utf8(console.writer().clone()).unwrap();
        assert!(out.contains("Entre a Razão Hapax Legomana: "));
        assert!(out.contains("Por favor, digite um número válido"));
    }

    #[test]
    fn test_read_reference_end_of_input() {
        let mut console = console("4.51\n");
        assert!(matches!(
            read_reference(&mut console),
            Err(SessionError::EndOfInput)
        ));
    }

    #[test]
    fn test_read_texts_stops_at_blank_line() {
        let mut console = console("Primeiro texto.\nSegundo texto!\n\nignorado\n");
        let texts = read_texts(&mut console).unwrap();
        assert_eq!(texts, vec!["Primeiro texto.", "Segundo texto!"]);
    }

    #[test]
    fn test_read_texts_stops_at_end_of_input() {
        let mut console = console("Só um.");
        assert_eq!(read_texts(&mut console).unwrap(), vec!["Só um."]);
    }

    #[test]
    fn test_load_texts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "Alô, mundo.\n\n").unwrap();

        let texts = load_texts(&[path]).unwrap();
        assert_eq!(texts, vec!["Alô, mundo."]);

        let missing = dir.path().join("missing.txt");
        assert!(load_texts(&[missing]).is_err());
    }
}

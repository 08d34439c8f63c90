use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::info;

use crate::config::{get_config_path, ColorMode, Config, FingerprintConfig};
use crate::fingerprint::Signature;
use crate::scoring::WeightOverrides;
use crate::session::Console;

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the suggested config file path.
/// Otherwise, suggests ~/.config/psyscreen/config.yaml.
///
/// Returns the path written, or `None` when the user declined to overwrite.
pub fn run_init_wizard<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    default_path: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    console.blank()?;
    console.say("psyscreen configuration wizard")?;
    console.say("==============================")?;
    console.blank()?;

    // 1. Results
    console.say("Questionnaire results are saved as JSON files after each run.")?;
    let save_results = console.prompt_yes_no("Save results automatically?", true)?;
    let results_dir = if save_results {
        let dir = console.prompt_with_default("Directory for result files", ".")?;
        (dir != ".").then(|| PathBuf::from(dir))
    } else {
        None
    };

    // 2. Colour
    console.blank()?;
    let color = loop {
        let input = console.prompt_with_default("Colour output (auto/always/never)", "auto")?;
        match input.parse::<ColorMode>() {
            Ok(mode) => break mode,
            Err(e) => console.say(format!("  Invalid: {}. Try again.", e))?,
        }
    };

    // 3. Fingerprint reference
    console.blank()?;
    console.say("The fingerprint command compares texts against a reference signature.")?;
    console.say(
        "Values: word length, type-token, hapax ratio, sentence length, \
         sentence complexity, phrase length.",
    )?;
    let fingerprint = if console.prompt_yes_no("Store a default reference signature?", false)? {
        let signature = loop {
            let input = console.prompt("  Six comma-separated values: ")?;
            match input.parse::<Signature>() {
                Ok(signature) => break signature,
                Err(e) => console.say(format!("  Invalid: {}. Try again.", e))?,
            }
        };
        Some(FingerprintConfig {
            reference: signature.as_array().to_vec(),
        })
    } else {
        None
    };

    // 4. Config path
    let default_config_path = match default_path {
        Some(path) => path,
        None => get_config_path()?,
    };
    console.blank()?;
    let path_str = console.prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = console.prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            console.say("Aborted.")?;
            return Ok(None);
        }
    }

    // 5. Write config
    let config = Config {
        results_dir,
        save_results,
        color,
        weights: WeightOverrides::default(),
        fingerprint,
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(&config_path)
        .with_context(|| format!("Failed to open atomic write file at {}", config_path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    info!(path = %config_path.display(), "config written");
    console.blank()?;
    console.say(format!("Config written to {}", config_path.display()))?;
    console.say("Per-instrument weights can be added under `weights:` in the file.")?;
    console.say("Run `psyscreen list` to see the available questionnaires.")?;

    Ok(Some(config_path))
}

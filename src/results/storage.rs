use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use tracing::debug;

use super::record::{ResultRecord, SCHEMA_VERSION};

/// `my_<key>_results.json`, or `demo_<key>_results.json` for demo runs.
pub fn default_result_path(dir: &Path, instrument: &str, demo: bool) -> PathBuf {
    let prefix = if demo { "demo" } else { "my" };
    dir.join(format!("{}_{}_results.json", prefix, instrument))
}

/// Load a result file written by [`save_result`].
///
/// Fails on unsupported schema versions and unknown instruments.
pub fn load_result(path: &Path) -> Result<ResultRecord> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open result file at {}", path.display()))?;

    let record: ResultRecord = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse result file at {}", path.display()))?;

    if record.schema != SCHEMA_VERSION {
        anyhow::bail!("Unsupported result schema version: {}", record.schema);
    }
    if crate::instrument::find(&record.instrument).is_none() {
        anyhow::bail!("Unknown instrument in result file: {}", record.instrument);
    }

    Ok(record)
}

/// Save a result as indented JSON, atomically.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_result(path: &Path, record: &ResultRecord) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, record).context("Failed to serialize result")?;

    file.commit()
        .with_context(|| format!("Failed to save result to {}", path.display()))?;

    debug!(path = %path.display(), instrument = %record.instrument, "result saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::{mythomania, narcissism};
    use crate::scoring::{demo_sheet, Aggregation, WeightOverrides};

    fn record(instrument: &'static crate::instrument::Instrument) -> ResultRecord {
        let aggregation = Aggregation::resolve(instrument, &WeightOverrides::default());
        let sheet = demo_sheet(instrument, &aggregation).unwrap();
        ResultRecord::new(instrument, &sheet, true)
    }

    #[test]
    fn test_default_result_path() {
        let dir = Path::new("results");
        assert_eq!(
            default_result_path(dir, "bipolar", false),
            PathBuf::from("results/my_bipolar_results.json")
        );
        assert_eq!(
            default_result_path(dir, "bipolar", true),
            PathBuf::from("results/demo_bipolar_results.json")
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("result.json");
        let original = record(&narcissism::INSTRUMENT);

        save_result(&path, &original).unwrap();
        let loaded = load_result(&path).unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn test_saved_json_keeps_unicode_and_indentation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mito.json");
        save_result(&path, &record(&mythomania::INSTRUMENT)).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"schema\": 1,"));
        assert!(text.contains("Procure o CAPS da sua região"));
        assert!(text.contains("\"overall_mythomania\""));
    }

    #[test]
    fn test_load_rejects_unknown_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.json");
        let mut future = record(&narcissism::INSTRUMENT);
        future.schema = 2;
        save_result(&path, &future).unwrap();

        let err = load_result(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported result schema version: 2"));
    }

    #[test]
    fn test_load_rejects_unknown_instrument() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("astro.json");
        let mut other = record(&narcissism::INSTRUMENT);
        other.instrument = "astrology".to_string();
        save_result(&path, &other).unwrap();

        let err = load_result(&path).unwrap_err();
        assert!(err.to_string().contains("Unknown instrument"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_result(&dir.path().join("nope.json")).is_err());
    }
}

use assert_cmd::Command;
use std::path::Path;

fn psyscreen(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_psyscreen"));
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_list_shows_every_questionnaire() {
    let home = tempfile::tempdir().unwrap();
    let assert = psyscreen(home.path()).arg("list").assert().success();
    let out = stdout_of(assert.get_output());

    assert!(out.contains("personality"));
    assert!(out.contains("narcissism"));
    assert!(out.contains("bipolar"));
    assert!(out.contains("mythomania"));
    assert!(out.contains(" 56 questions"));
}

#[test]
fn test_demo_without_saving() {
    let home = tempfile::tempdir().unwrap();
    let assert = psyscreen(home.path())
        .current_dir(home.path())
        .args(["personality", "--demo", "--no-save"])
        .assert()
        .success();
    let out = stdout_of(assert.get_output());

    assert!(out.contains("Openness"));
    assert!(out.contains("PERSONALITY INSIGHTS"));
    assert!(!home.path().join("demo_personality_results.json").exists());
}

#[test]
fn test_demo_save_then_show() {
    let home = tempfile::tempdir().unwrap();
    let result = home.path().join("out").join("narc.json");

    psyscreen(home.path())
        .args(["narcissism", "--demo", "--output"])
        .arg(&result)
        .assert()
        .success();

    let json = std::fs::read_to_string(&result).unwrap();
    assert!(json.contains("\"overall_narcissism\""));
    assert!(json.contains("\"demo\": true"));

    let assert = psyscreen(home.path())
        .arg("show")
        .arg(&result)
        .assert()
        .success();
    let out = stdout_of(assert.get_output());
    assert!(out.contains("(demo)"));
    assert!(out.contains("OVERALL NARCISSISM INDEX"));
}

#[test]
fn test_demo_saves_to_configured_directory() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("config.yaml");
    let results = home.path().join("results");
    std::fs::write(&config, format!("results_dir: {}\n", results.display())).unwrap();

    psyscreen(home.path())
        .arg("--config")
        .arg(&config)
        .args(["mythomania", "--demo"])
        .assert()
        .success();

    assert!(results.join("demo_mythomania_results.json").exists());
}

#[test]
fn test_fingerprint_names_the_suspect() {
    let home = tempfile::tempdir().unwrap();
    let assert = psyscreen(home.path())
        .args(["fingerprint", "--reference", "3.0,1.0,1.0,15.0,1.3,11.0"])
        .write_stdin(
            "O gato e o rato. O gato.\nAlô, mundo. Aqui quem fala é o Frio! Bug ou não?\n\n",
        )
        .assert()
        .success();
    let out = stdout_of(assert.get_output());

    assert!(out.contains("O autor do texto 2 está infectado com COH-PIAH"));
}

#[test]
fn test_fingerprint_reads_files() {
    let home = tempfile::tempdir().unwrap();
    let first = home.path().join("a.txt");
    let second = home.path().join("b.txt");
    std::fs::write(&first, "Alô, mundo. Aqui quem fala é o Frio! Bug ou não?\n").unwrap();
    std::fs::write(&second, "O gato e o rato. O gato.\n").unwrap();

    let assert = psyscreen(home.path())
        .args(["fingerprint", "--reference", "3.0,1.0,1.0,15.0,1.3,11.0"])
        .arg(&first)
        .arg(&second)
        .assert()
        .success();
    let out = stdout_of(assert.get_output());

    assert!(out.contains("O autor do texto 1 está infectado com COH-PIAH"));
}

#[test]
fn test_fingerprint_without_texts_is_input_error() {
    let home = tempfile::tempdir().unwrap();
    psyscreen(home.path())
        .args(["fingerprint", "--reference", "1,1,1,1,1,1"])
        .write_stdin("\n")
        .assert()
        .code(2);
}

#[test]
fn test_fingerprint_rejects_non_finite_reference() {
    let home = tempfile::tempdir().unwrap();
    let assert = psyscreen(home.path())
        .args(["fingerprint", "--reference", "NaN,1,1,1,1,1"])
        .write_stdin("Alô, mundo.\nO gato e o rato. O gato.\n\n")
        .assert()
        .code(2);
    let out = stdout_of(assert.get_output());
    let err = String::from_utf8(assert.get_output().stderr.clone()).unwrap();

    assert!(err.contains("wal must be a finite number"));
    assert!(!out.contains("COH-PIAH"));
}

#[test]
fn test_cancelled_before_start() {
    let home = tempfile::tempdir().unwrap();
    let assert = psyscreen(home.path())
        .current_dir(home.path())
        .arg("bipolar")
        .write_stdin("n\n")
        .assert()
        .success();
    let out = stdout_of(assert.get_output());

    assert!(out.contains("Assessment cancelled"));
    assert!(!home.path().join("my_bipolar_results.json").exists());
}

#[test]
fn test_truncated_answers_are_input_error() {
    let home = tempfile::tempdir().unwrap();
    psyscreen(home.path())
        .arg("personality")
        .write_stdin("3\n4\n")
        .assert()
        .code(2);
}

#[test]
fn test_missing_explicit_config_is_config_error() {
    let home = tempfile::tempdir().unwrap();
    psyscreen(home.path())
        .arg("--config")
        .arg(home.path().join("absent.yaml"))
        .arg("list")
        .assert()
        .code(4);
}

#[test]
fn test_invalid_weights_are_config_error() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("config.yaml");
    std::fs::write(&config, "weights:\n  bipolar:\n    manic_episodes: 2.0\n").unwrap();

    let assert = psyscreen(home.path())
        .arg("--config")
        .arg(&config)
        .arg("list")
        .assert()
        .code(4);
    let err = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(err.contains("Config errors:"));
    assert!(err.contains("weights.bipolar"));
}

mod common;

use common::{run_candor, TestEnv};

#[test]
fn candor_help_shows_usage() {
    let output = run_candor(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("analyze"));
}

#[test]
fn candor_version_shows_version() {
    let output = run_candor(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--version should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("candor "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_candor(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("candor"));
}

#[test]
fn templates_lists_both_variants() {
    let output = run_candor(&["templates"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("general"));
    assert!(stdout.contains("proctor"));
}

#[test]
fn config_path_points_into_isolated_home() {
    let env = TestEnv::new();
    let path = env.config_path();
    assert!(path.ends_with("config.toml"));
}

#[test]
fn config_init_writes_defaults() {
    let env = TestEnv::new();

    let output = env.run(&["config", "init"]);
    assert!(
        output.status.success(),
        "config init should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let contents = std::fs::read_to_string(env.config_path()).expect("read config file");
    assert!(contents.contains("gemini-2.5-flash"));
    assert!(contents.contains("template"));

    // A second init without --force must refuse to overwrite.
    let output = env.run(&["config", "init"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));
}

#[test]
fn config_show_prints_toml() {
    let output = run_candor(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("[llm]"));
    assert!(stdout.contains("provider = \"gemini\""));
}

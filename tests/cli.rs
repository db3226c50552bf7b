use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchboard_cmd() -> Command {
    Command::cargo_bin("sketchboard").expect("binary exists")
}

#[test]
fn sketchboard_help_prints_usage() {
    sketchboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Layered raster sketching engine with pen and shape tools",
        ));
}

#[test]
fn script_and_output_are_required() {
    sketchboard_cmd().assert().failure().stderr(predicate::str::contains(
        "required arguments were not provided",
    ));
}

#[test]
fn replay_writes_a_png() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.json");
    let output = temp.path().join("out.png");

    std::fs::write(
        &script,
        r#"[
            {"event": "tool", "name": "rectangle"},
            {"event": "width", "value": 4.0},
            {"event": "press", "x": 10, "y": 10},
            {"event": "motion", "x": 50, "y": 30},
            {"event": "release", "x": 50, "y": 30}
        ]"#,
    )
    .unwrap();

    sketchboard_cmd()
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .arg("--width")
        .arg("100")
        .arg("--height")
        .arg("100")
        .assert()
        .success();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}

#[test]
fn malformed_script_fails_with_context() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.json");
    std::fs::write(&script, "this is not json").unwrap();

    sketchboard_cmd()
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse script"));
}

#[test]
fn unknown_tool_in_script_fails_replay() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("script.json");
    std::fs::write(&script, r#"[{"event": "tool", "name": "spray"}]"#).unwrap();

    sketchboard_cmd()
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Script replay failed"));
}

#[test]
fn config_file_is_applied() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    let script = temp.path().join("script.json");
    let output = temp.path().join("out.png");

    std::fs::write(&config, "sizes = [6.0]\nhide_tools = true\n").unwrap();
    std::fs::write(
        &script,
        r#"[
            {"event": "press", "x": 5, "y": 5},
            {"event": "motion", "x": 25, "y": 25},
            {"event": "release", "x": 25, "y": 25}
        ]"#,
    )
    .unwrap();

    sketchboard_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn malformed_config_fails_with_context() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    let script = temp.path().join("script.json");
    std::fs::write(&config, "sizes = \"wat\"").unwrap();
    std::fs::write(&script, "[]").unwrap();

    sketchboard_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

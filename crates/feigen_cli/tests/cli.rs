use serde_json::Value;
use std::process::{Command, Output};

fn bin() -> String {
    env!("CARGO_BIN_EXE_feigen").to_string()
}

fn run(args: &[&str]) -> Output {
    Command::new(bin()).args(args).output().expect("run")
}

fn parse_stdout(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("json document")
}

#[test]
fn cli_emits_requested_sample_count() {
    let output = run(&[
        "--r-min", "2.5", "--r-max", "4.0", "--n", "5", "--iterations", "5", "--last", "2",
    ]);
    let doc = parse_stdout(&output);

    let parameters = doc["samples"]["parameters"].as_array().expect("parameters");
    let states = doc["samples"]["states"].as_array().expect("states");
    assert_eq!(parameters.len(), 10);
    assert_eq!(states.len(), 10);
    for r in [2.5, 2.875, 3.25, 3.625, 4.0] {
        let count = parameters.iter().filter(|v| v.as_f64() == Some(r)).count();
        assert_eq!(count, 2, "r = {r}");
    }
    assert_eq!(doc["viewport"], "full");
    assert_eq!(doc["bounds"]["x_max"], 1.0);
    assert_eq!(doc["marker"]["alpha"], 0.25);
    assert_eq!(doc["marker"]["size_px"], 1.0);
}

#[test]
fn cli_zoom_flag_only_changes_framing() {
    let base = ["--n", "4", "--iterations", "20", "--last", "3"];
    let full = parse_stdout(&run(&base));
    let mut zoomed_args = base.to_vec();
    zoomed_args.push("--zoom");
    let zoomed = parse_stdout(&run(&zoomed_args));

    assert_eq!(full["samples"], zoomed["samples"]);
    assert_eq!(zoomed["viewport"], "zoom");
    assert_eq!(zoomed["bounds"]["x_min"], 0.3);
    assert_eq!(zoomed["bounds"]["x_max"], 0.7);
    assert_eq!(zoomed["title"], "Zoomed Feigenbaum Diagram");
}

#[test]
fn cli_rejects_invalid_arguments_without_output() {
    for args in [["--n", "0"], ["--iterations", "-1"], ["--last", "-4"]] {
        let output = run(&args);
        assert!(!output.status.success(), "args {args:?} should fail");
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid argument"), "stderr: {stderr}");
    }
}

#[test]
fn cli_empty_window_yields_empty_samples() {
    let doc = parse_stdout(&run(&["--n", "8", "--iterations", "0"]));
    assert_eq!(doc["samples"]["parameters"].as_array().map(Vec::len), Some(0));
}

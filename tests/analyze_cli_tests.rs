//! CLI tests for the analyze and summarize commands.

#![cfg(unix)]

mod common;

use common::TestEnv;

fn write_transcript(env: &TestEnv, text: &str) -> std::path::PathBuf {
    let path = env.data_path().join("transcript.txt");
    std::fs::write(&path, text).expect("write transcript");
    path
}

#[test]
fn analyze_help_is_available() {
    let output = TestEnv::new().run(&["analyze", "--help"]);
    assert!(
        output.status.success(),
        "analyze --help should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn analyze_prints_action_items_and_keywords() {
    let env = TestEnv::new();
    env.write_config(&env.install_worker(
        "cat > /dev/null\nprintf '{\"keywords\": [\"budget\", \"report\"]}'\n",
    ));
    let transcript = write_transcript(&env, "Please submit the report and review the budget.");

    let output = env.run(&["analyze", transcript.to_str().expect("utf8 path")]);
    assert!(
        output.status.success(),
        "analyze should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("submit"), "stdout was:\n{stdout}");
    assert!(stdout.contains("review"), "stdout was:\n{stdout}");
    assert!(stdout.contains("budget, report"), "stdout was:\n{stdout}");
}

#[test]
fn analyze_json_emits_a_full_record() {
    let env = TestEnv::new();
    env.write_config(&env.install_worker(
        "cat > /dev/null\nprintf '{\"keywords\": [\"deadline\"]}'\n",
    ));
    let transcript = write_transcript(&env, "We must finish the report before the deadline.");

    let output = env.run(&[
        "analyze",
        "--json",
        transcript.to_str().expect("utf8 path"),
    ]);
    assert!(
        output.status.success(),
        "analyze --json should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let record: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be one JSON record");
    assert_eq!(record["analysis"]["keywords"][0], "deadline");
    assert_eq!(
        record["analysis"]["word_count"],
        record["analysis"]["tokens"]
            .as_array()
            .expect("tokens array")
            .len()
    );
    assert!(record["summary"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(record["created_at"].is_string());
}

#[test]
fn analyze_blank_transcript_skips_the_worker() {
    let env = TestEnv::new();
    // Deliberately broken worker: blank input must not reach it.
    env.write_config("[worker]\ncommand = \"/nonexistent/interpreter\"\n");
    let transcript = write_transcript(&env, "   \n");

    let output = env.run(&["analyze", transcript.to_str().expect("utf8 path")]);
    assert!(
        output.status.success(),
        "blank transcript should not fail\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Words: 0"), "stdout was:\n{stdout}");
}

#[test]
fn analyze_reports_worker_failure() {
    let env = TestEnv::new();
    env.write_config(&env.install_worker("cat > /dev/null\nexit 1\n"));
    let transcript = write_transcript(&env, "Review the budget.");

    let output = env.run(&["analyze", transcript.to_str().expect("utf8 path")]);
    assert!(
        !output.status.success(),
        "worker failure should fail the command\nstdout:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("analysis failed") || stderr.contains("Keyword"),
        "expected a keyword extraction error, stderr was:\n{stderr}"
    );
}

#[test]
fn summarize_reads_from_stdin() {
    let env = TestEnv::new();
    let output = env.run_with_stdin(&["summarize"], "The budget review is tomorrow.");

    assert!(
        output.status.success(),
        "summarize should succeed\nstderr:\n{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("The budget review is tomorrow."));
}

#[test]
fn summarize_empty_input_prints_sentinel() {
    let env = TestEnv::new();
    let output = env.run_with_stdin(&["summarize"], "");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "No summary available");
}

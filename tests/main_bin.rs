#![cfg(feature = "std")]

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_entropy-battleship"))
        .args(args)
        .env("ENTROPY_BATTLESHIP_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to run entropy-battleship");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("failed to wait on child")
}

fn stdout_of(output: Output) -> String {
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("non utf8 output")
}

#[test]
fn solve_shows_probabilities_before_each_turn() {
    let stdout = stdout_of(run(&["solve", "--seed", "1", "--probabilities"], ""));
    let turns = stdout.lines().filter(|l| l.starts_with("Turn ")).count();
    assert!(turns >= 9);
    assert_eq!(stdout.matches("Hit probability:").count(), turns);
    assert!(stdout.contains("VICTORY"));
}

#[test]
fn solve_without_flag_hides_probabilities() {
    let stdout = stdout_of(run(&["solve", "--seed", "1"], ""));
    assert!(!stdout.contains("Hit probability:"));
}

#[test]
fn solve_json_stays_machine_readable() {
    let stdout = stdout_of(run(&["solve", "--seed", "4", "--json", "--probabilities"], ""));
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["status"], "Won");
    assert_eq!(v["universe_size"], 1638);
}

#[test]
fn play_without_tips_prints_no_advice() {
    let stdout = stdout_of(run(&["play", "--seed", "2", "--probabilities"], "n\nexit\n"));
    assert!(stdout.contains("Hit probability:"));
    assert!(stdout.contains("Current Entropy: 10.6777 bits"));
    assert!(!stdout.contains("Strategy Tip"));
    assert!(!stdout.contains("No more tips needed"));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn play_with_tips_suggests_the_center() {
    let stdout = stdout_of(run(&["play", "--seed", "2"], "y\nexit\n"));
    assert!(stdout.contains("Strategy Tip 💡 : Guess (2, 2) to maximize information gain."));
    assert!(!stdout.contains("Hit probability:"));
}

#![cfg(feature = "std")]

use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "5"])
        .env("ENTROPY_BATTLESHIP_LOG", "off")
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 5);
    assert_eq!(v["universe_size"], 1638);
    assert_eq!(v["config"]["grid_size"], 5);
    assert!(v["min_turns"].as_u64().unwrap() >= 9);
    assert!(v["max_turns"].as_u64().unwrap() <= 25);
}

#[test]
fn sim_binary_rejects_bad_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}

use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--games", "3", "--seed", "12345"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 3);
    assert_eq!(v["seed"], 12345);
    let wins = v["wins"]["one"].as_u64().unwrap() + v["wins"]["two"].as_u64().unwrap();
    assert_eq!(wins, 3);
    assert!(v["average_shots"].as_f64().unwrap() >= 17.0);
}

#[test]
fn sim_rejects_board_too_small_for_fleet() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--width", "3", "--height", "3", "--seed", "1"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}

#[test]
fn sim_rejects_oversized_board_without_panicking() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--width", "50000", "--height", "50000", "--seed", "1"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked"), "sim panicked: {stderr}");
    assert!(stderr.contains("Board dimensions are invalid or too large"));
}

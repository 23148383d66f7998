use std::fs;
use std::process::Command;

#[test]
fn breaks_literal_ciphertext() {
    let exe = env!("CARGO_BIN_EXE_cezar");
    let dir = tempfile::tempdir().unwrap();
    let solution = dir.path().join("solution.txt");

    let output = Command::new(exe)
        .current_dir(dir.path())
        .args([
            "epomj ezno yudndve",
            "--output",
            solution.to_str().unwrap(),
        ])
        .output()
        .expect("run failed");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Odszyfrowana wiadomość: jutro jest dzisiaj"));
    assert!(stdout.contains("Ilość przesunięć: 21"));
    assert_eq!(fs::read_to_string(&solution).unwrap(), "jutro jest dzisiaj");
}

#[test]
fn reads_default_input_file() {
    let exe = env!("CARGO_BIN_EXE_cezar");
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("ciphertext.txt"), "epomj ezno yudndve\n").unwrap();

    let status = Command::new(exe)
        .current_dir(dir.path())
        .status()
        .expect("run failed");
    assert!(status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("solution.txt")).unwrap(),
        "jutro jest dzisiaj"
    );
}

#[test]
fn json_output_uses_config_file() {
    let exe = env!("CARGO_BIN_EXE_cezar");
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("cezar.json");
    fs::write(&config, r#"{ "json": true, "output": "wynik.txt" }"#).unwrap();

    let output = Command::new(exe)
        .current_dir(dir.path())
        .args([
            "--config",
            config.to_str().unwrap(),
            "epomj ezno yudndve",
        ])
        .output()
        .expect("run failed");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["best_shift"], 21);
    assert_eq!(json["best_text"], "jutro jest dzisiaj");
    assert_eq!(
        fs::read_to_string(dir.path().join("wynik.txt")).unwrap(),
        "jutro jest dzisiaj"
    );
}

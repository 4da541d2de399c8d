use std::{
    io::Write,
    process::{Command, Output},
};

use tempfile::NamedTempFile;

const FOUR_CITIES: &str = "0 10 15 20\n10 0 35 25\n15 35 0 30\n20 25 30 0\n";

fn instance_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn run(binary: &str, args: &[&str]) -> Output {
    Command::new(binary)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn cheapest_tour_prints_optimum() {
    let file = instance_file(FOUR_CITIES);
    let path = file.path().to_str().unwrap();
    let output = run(env!("CARGO_BIN_EXE_cheapest_tour"), &["4", path]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "optimal tour: 0 1 3 2 0 \ntour cost:    80\n"
    );
}

#[test]
fn heuristic_tour_prints_tour() {
    let file = instance_file(FOUR_CITIES);
    let path = file.path().to_str().unwrap();
    let output = run(env!("CARGO_BIN_EXE_heuristic_tour"), &["4", path]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "heuristic tour: 0 1 2 3 0 \ntour cost:    95\n"
    );
}

#[test]
fn wrong_argument_count() {
    for binary in [
        env!("CARGO_BIN_EXE_cheapest_tour"),
        env!("CARGO_BIN_EXE_heuristic_tour"),
    ] {
        let output = run(binary, &["4"]);
        assert_eq!(output.status.code(), Some(1), "{binary}");
        assert!(output.stdout.is_empty(), "{binary}");
    }
}

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let path = path.to_str().unwrap();

    for binary in [
        env!("CARGO_BIN_EXE_cheapest_tour"),
        env!("CARGO_BIN_EXE_heuristic_tour"),
    ] {
        let output = run(binary, &["4", path]);
        assert_eq!(output.status.code(), Some(1), "{binary}");
        assert!(output.stdout.is_empty(), "{binary}");
        assert!(
            String::from_utf8_lossy(&output.stderr).contains("Error loading input file"),
            "{binary}"
        );
    }
}

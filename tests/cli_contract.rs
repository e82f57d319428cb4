// tests/cli_contract.rs - Exit code and handler contract tests
use std::fs;

use clap::Parser;
use dotrank_core::cli::{handlers, Cli};
use dotrank_core::exit::DotRankExit;
use tempfile::TempDir;

fn fixture(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("g.dot");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn full_run_succeeds_on_valid_input() {
    let dir = tempfile::tempdir().unwrap();
    let file = fixture(&dir, "digraph G {\nA -> B ;\nB -> A ;\n}\n");
    let cli = Cli::try_parse_from([
        "dotrank", "-s", "-r", "100", "-m", "100", "-p", "20", "--seed", "1", &file,
    ])
    .unwrap();
    let result = handlers::run(&cli);
    assert!(result.is_ok(), "{result:?}");
    assert_eq!(DotRankExit::from(result), DotRankExit::Success);
}

#[test]
fn json_run_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let file = fixture(&dir, "digraph G {\nA -> B ;\n}\n");
    let cli =
        Cli::try_parse_from(["dotrank", "--json", "-s", "-m", "10", "--seed", "3", &file]).unwrap();
    assert!(handlers::run(&cli).is_ok());
}

#[test]
fn ingestion_failure_maps_to_error_exit() {
    let dir = tempfile::tempdir().unwrap();
    let file = fixture(&dir, "digraph {\nA -> B ;\n}\n");
    let cli = Cli::try_parse_from(["dotrank", "-s", &file]).unwrap();
    let result = handlers::run(&cli);
    assert!(result.is_err());
    assert_eq!(DotRankExit::from(result), DotRankExit::Error);
}

#[test]
fn missing_file_maps_to_error_exit() {
    let cli = Cli::try_parse_from(["dotrank", "-s", "/no/such/file.dot"]).unwrap();
    assert_eq!(DotRankExit::from(handlers::run(&cli)), DotRankExit::Error);
}

#[test]
fn no_action_flags_is_still_success() {
    let dir = tempfile::tempdir().unwrap();
    let file = fixture(&dir, "digraph G {\nA -> B ;\n}\n");
    let cli = Cli::try_parse_from(["dotrank", &file]).unwrap();
    assert_eq!(DotRankExit::from(handlers::run(&cli)), DotRankExit::Success);
}

#[test]
fn exit_codes_are_stable() {
    assert_eq!(DotRankExit::Success.code(), 0);
    assert_eq!(DotRankExit::Error.code(), 1);
}

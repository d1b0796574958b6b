use std::fs;
use std::path::PathBuf;

use salvo::loader::{load_board, load_fleet};

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("salvo-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_board_and_fleet_files() {
    let board = write_temp("board.json", r#"{"board": [[0, 0, 2], [0, 0, 2], [3, 3, 3]]}"#);
    let fleet = write_temp("fleet.json", r#"{"fleet": {"2": 1, "3": 1}}"#);

    assert_eq!(load_board(&board).unwrap().len(), 3);
    let fleet_def = load_fleet(&fleet).unwrap();
    assert_eq!(fleet_def.to_string(), "2:1 3:1");

    fs::remove_file(board).unwrap();
    fs::remove_file(fleet).unwrap();
}

#[test]
fn missing_file_names_the_path() {
    let err = load_fleet("/nonexistent/salvo-fleet.json").unwrap_err();
    assert!(format!("{:#}", err).contains("salvo-fleet.json"), "{:#}", err);
}

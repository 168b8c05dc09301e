// tests/export_conflict.rs
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use jarchive_scrape::config::options::{ExportFormat, ExportOptions, ExportType, OnConflict};
use jarchive_scrape::csv::parse_rows;
use jarchive_scrape::error::ExportError;
use jarchive_scrape::file::export_rows;
use jarchive_scrape::record::{ClueRow, NOTES_COLUMN};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("jarchive_export_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn row(game_id: u32, order: u32) -> ClueRow {
    ClueRow {
        show_num: 5829,
        game_id,
        date: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
        clue_id: Some(u64::from(order)),
        clue_location: format!("J_1_{order}"),
        round_num: 1,
        value: Some(200 * order),
        order_num: order,
        category: "CAPITALS, EUROPE".into(),
        answer: "It's on the \"Seine\"".into(),
        correct_response: "Paris".into(),
        name: Some("Amy Tran".into()),
        player_id: Some(3),
        was_correct: Some(true),
        was_revealed: true,
        was_triple_stumper: false,
        was_daily_double: false,
        wager: None,
        game_notes: Some("notes".into()),
    }
}

fn single(dir: &PathBuf, on_conflict: OnConflict) -> ExportOptions {
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("games.csv").to_str().unwrap());
    opts.on_conflict = on_conflict;
    opts
}

#[test]
fn fail_refuses_existing_file() {
    let dir = tmp_dir("fail");
    let opts = single(&dir, OnConflict::Fail);
    export_rows(&[row(1, 1)], &opts).unwrap();
    let err = export_rows(&[row(1, 2)], &opts).unwrap_err();
    assert!(matches!(err, ExportError::Exists(p) if p == dir.join("games.csv")));
    // untouched
    assert_eq!(parse_rows(&fs::read_to_string(dir.join("games.csv")).unwrap(), ',').len(), 2);
}

#[test]
fn append_writes_no_second_header() {
    let dir = tmp_dir("append");
    let opts = single(&dir, OnConflict::Append);
    export_rows(&[row(1, 1)], &opts).unwrap();
    export_rows(&[row(2, 1), row(2, 2)], &opts).unwrap();

    let table = parse_rows(&fs::read_to_string(dir.join("games.csv")).unwrap(), ',');
    assert_eq!(table.len(), 4);
    assert_eq!(table.iter().filter(|r| r[0] == "show_num").count(), 1);
    // quoted cells survive
    assert_eq!(table[1][8], "CAPITALS, EUROPE");
    assert_eq!(table[1][9], "It's on the \"Seine\"");
}

#[test]
fn append_rejects_foreign_header() {
    let dir = tmp_dir("foreign");
    fs::write(dir.join("games.csv"), "a,b,c\n1,2,3\n").unwrap();
    let opts = single(&dir, OnConflict::Append);
    assert!(matches!(export_rows(&[row(1, 1)], &opts), Err(ExportError::HeaderMismatch(_))));
}

#[test]
fn replace_truncates() {
    let dir = tmp_dir("replace");
    let opts = single(&dir, OnConflict::Replace);
    export_rows(&[row(1, 1), row(1, 2), row(1, 3)], &opts).unwrap();
    export_rows(&[row(2, 1)], &opts).unwrap();
    let table = parse_rows(&fs::read_to_string(dir.join("games.csv")).unwrap(), ',');
    assert_eq!(table.len(), 2);
    assert_eq!(table[1][1], "2");
}

#[test]
fn per_game_tsv_with_notes() {
    let dir = tmp_dir("per_game");
    let mut opts = ExportOptions::default();
    opts.export_type = ExportType::PerGame;
    opts.format = ExportFormat::Tsv;
    opts.include_notes = true;
    opts.set_path(dir.to_str().unwrap());

    let written = export_rows(&[row(9, 1), row(3, 1), row(9, 2)], &opts).unwrap();
    assert_eq!(written, vec![dir.join("show_3.tsv"), dir.join("show_9.tsv")]);

    let table = parse_rows(&fs::read_to_string(dir.join("show_9.tsv")).unwrap(), '\t');
    assert_eq!(table.len(), 3);
    assert_eq!(table[0].last().map(String::as_str), Some(NOTES_COLUMN));
    assert_eq!(table[1].last().map(String::as_str), Some("notes"));
}

#[test]
fn no_header_when_disabled() {
    let dir = tmp_dir("no_header");
    let mut opts = single(&dir, OnConflict::Replace);
    opts.include_headers = false;
    export_rows(&[row(1, 1)], &opts).unwrap();
    let table = parse_rows(&fs::read_to_string(dir.join("games.csv")).unwrap(), ',');
    assert_eq!(table.len(), 1);
    assert_eq!(table[0][0], "5829");
}

#[test]
fn nothing_to_write_writes_nothing() {
    let dir = tmp_dir("empty");
    let opts = single(&dir, OnConflict::Fail);
    assert!(export_rows(&[], &opts).unwrap().is_empty());
    assert!(!dir.join("games.csv").exists());
}

// src/record.rs
//! The output row: one per (clue, response attempt), fixed column order.

use chrono::NaiveDate;

pub const COLUMNS: [&str; 18] = [
    "show_num",
    "game_id",
    "date",
    "clue_id",
    "clue_location",
    "round_num",
    "value",
    "order_num",
    "category",
    "answer",
    "correct_response",
    "name",
    "player_id",
    "was_correct",
    "was_revealed",
    "was_triple_stumper",
    "was_daily_double",
    "wager",
];

pub const NOTES_COLUMN: &str = "game_notes";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClueRow {
    pub show_num: u32,
    pub game_id: u32,
    pub date: NaiveDate,
    pub clue_id: Option<u64>,
    pub clue_location: String,
    pub round_num: u8,
    pub value: Option<u32>,
    pub order_num: u32,
    pub category: String,
    /// The clue prompt (the archive calls it the answer).
    pub answer: String,
    pub correct_response: String,
    pub name: Option<String>,
    pub player_id: Option<u32>,
    pub was_correct: Option<bool>,
    pub was_revealed: bool,
    pub was_triple_stumper: bool,
    pub was_daily_double: bool,
    pub wager: Option<u32>,
    pub game_notes: Option<String>,
}

/// Header cells, optionally with the trailing notes column.
pub fn header(include_notes: bool) -> Vec<String> {
    let mut h: Vec<String> = COLUMNS.iter().map(|c| s!(*c)).collect();
    if include_notes {
        h.push(s!(NOTES_COLUMN));
    }
    h
}

impl ClueRow {
    /// Cells in `COLUMNS` order: null → "", dates ISO, bools `true`/`false`.
    pub fn to_cells(&self, include_notes: bool) -> Vec<String> {
        let mut cells = vec![
            self.show_num.to_string(),
            self.game_id.to_string(),
            self.date.format("%Y-%m-%d").to_string(),
            opt(self.clue_id),
            self.clue_location.clone(),
            self.round_num.to_string(),
            opt(self.value),
            self.order_num.to_string(),
            self.category.clone(),
            self.answer.clone(),
            self.correct_response.clone(),
            self.name.clone().unwrap_or_default(),
            opt(self.player_id),
            opt(self.was_correct),
            self.was_revealed.to_string(),
            self.was_triple_stumper.to_string(),
            self.was_daily_double.to_string(),
            opt(self.wager),
        ];
        if include_notes {
            cells.push(self.game_notes.clone().unwrap_or_default());
        }
        cells
    }
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

// src/types.rs
//! Typed records for one game page, from metadata down to single responses.
//! Every nullable field is an explicit `Option`; nothing here is mutated after
//! the assembler has turned it into rows.

use std::fmt;

use chrono::NaiveDate;

/// Ordered `full name → player id`, in the order the page declares contestants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<(String, u32)>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, name: impl Into<String>, id: u32) {
        self.entries.push((name.into(), id));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(n, id)| (n.as_str(), *id))
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Registry {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut reg = Registry::new();
        for (name, id) in iter {
            reg.push(name, id);
        }
        reg
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameMetadata {
    pub date: NaiveDate,
    pub show_num: u32,
    pub contestants: Registry,
    pub notes: Option<String>,
}

/// Canonical board coordinate. Categories and rows are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    Board { round: u8, category: u8, row: u8 },
    Final,
}

impl Location {
    pub fn round_num(&self) -> u8 {
        match self {
            Location::Board { round, .. } => *round,
            Location::Final => 3,
        }
    }

    /// Depth on the board (1 = cheapest). `None` for the final clue.
    pub fn row(&self) -> Option<u8> {
        match self {
            Location::Board { row, .. } => Some(*row),
            Location::Final => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Board { round: 2, category, row } => write!(f, "DJ_{category}_{row}"),
            Location::Board { category, row, .. } => write!(f, "J_{category}_{row}"),
            Location::Final => f.write_str("FJ"),
        }
    }
}

/// One responder on one clue. `was_correct == None` is the synthetic
/// "nobody tried" record (no responder either).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attempt {
    pub responder: Option<String>,
    pub was_correct: Option<bool>,
}

impl Attempt {
    pub fn correct(name: impl Into<String>) -> Self {
        Self { responder: Some(name.into()), was_correct: Some(true) }
    }
    pub fn incorrect(name: impl Into<String>) -> Self {
        Self { responder: Some(name.into()), was_correct: Some(false) }
    }
    pub fn no_attempt() -> Self {
        Self { responder: None, was_correct: None }
    }
}

/// Outcome of classifying a response fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub correct_response: String,
    pub attempts: Vec<Attempt>,
    pub was_triple_stumper: bool,
}

impl Response {
    /// Placeholder for a clue that was never revealed.
    pub fn unrevealed() -> Self {
        Self {
            correct_response: s!(),
            attempts: vec![Attempt::no_attempt()],
            was_triple_stumper: true,
        }
    }
}

/// What the clue extractor reads out of one board cell, before the board
/// gives it a position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClueCell {
    pub was_revealed: bool,
    pub clue_id: Option<u64>,
    pub prompt: String,
    /// Play order within the round; 0 for clues never played.
    pub order_num: u32,
    pub value: Option<u32>,
    pub was_daily_double: bool,
    pub wager: Option<u32>,
    pub response: Response,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClueSlot {
    pub location: Location,
    pub category: String,
    pub was_revealed: bool,
    pub clue_id: Option<u64>,
    pub prompt: String,
    pub order_num: u32,
    pub value: Option<u32>,
    pub was_daily_double: bool,
    pub wager: Option<u32>,
    pub correct_response: String,
    pub was_triple_stumper: bool,
    pub attempts: Vec<Attempt>,
}

impl ClueSlot {
    pub fn round_num(&self) -> u8 { self.location.round_num() }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    /// 1 or 2
    pub index: u8,
    pub categories: Vec<String>,
    /// Traversal order: category-major, depth-minor.
    pub clues: Vec<ClueSlot>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalAttempt {
    pub responder: String,
    pub response: String,
    pub wager: Option<u32>,
    pub was_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FinalClue {
    pub category: String,
    pub prompt: String,
    pub correct_response: String,
    pub was_triple_stumper: bool,
    pub attempts: Vec<FinalAttempt>,
}

impl FinalClue {
    pub const LOCATION: Location = Location::Final;
    pub const ORDER_NUM: u32 = 1;
}

/// Everything extracted from one page, before rows are built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub meta: GameMetadata,
    pub rounds: Vec<Round>,
    pub final_clue: FinalClue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_tokens() {
        assert_eq!(Location::Board { round: 1, category: 3, row: 2 }.to_string(), "J_3_2");
        assert_eq!(Location::Board { round: 2, category: 6, row: 5 }.to_string(), "DJ_6_5");
        assert_eq!(Location::Final.to_string(), "FJ");
        assert_eq!(Location::Final.round_num(), 3);
        assert_eq!(Location::Final.row(), None);
    }

    #[test]
    fn registry_keeps_declaration_order() {
        let reg: Registry = [("Jerome Wilson", 1), ("Jenny Ames", 2)].into_iter().collect();
        let names: Vec<&str> = reg.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Jerome Wilson", "Jenny Ames"]);
        assert_eq!(reg.len(), 2);
    }
}

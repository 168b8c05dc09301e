// src/infer/location.rs
//! Board coordinates are reconstructed from traversal position, never read
//! from cell ids: unrevealed cells carry no reliable marker.

use crate::config::consts::CLUES_PER_ROUND;
use crate::specs::board::Board;
use crate::types::{ClueCell, ClueSlot, Location, Round};

/// (category, row), 1-based, indexed by traversal position.
pub static LOCATIONS: [(u8, u8); CLUES_PER_ROUND] = [
    (1, 1), (1, 2), (1, 3), (1, 4), (1, 5),
    (2, 1), (2, 2), (2, 3), (2, 4), (2, 5),
    (3, 1), (3, 2), (3, 3), (3, 4), (3, 5),
    (4, 1), (4, 2), (4, 3), (4, 4), (4, 5),
    (5, 1), (5, 2), (5, 3), (5, 4), (5, 5),
    (6, 1), (6, 2), (6, 3), (6, 4), (6, 5),
];

/// Coordinate of the clue at `index` in traversal order of round `round`.
pub fn location_at(round: u8, index: usize) -> Location {
    let (category, row) = LOCATIONS[index];
    Location::Board { round, category, row }
}

/// 0-based category slot for traversal position `index`.
pub fn category_slot(index: usize) -> usize {
    LOCATIONS[index].0 as usize - 1
}

/// Give every cell of a board its coordinate and category name.
/// The board extractor has already checked the 6x5 shape.
pub fn place(board: Board) -> Round {
    let Board { index: round, categories, cells } = board;

    let clues = cells
        .into_iter()
        .enumerate()
        .map(|(i, cell)| slot(location_at(round, i), categories[category_slot(i)].clone(), cell))
        .collect();

    Round { index: round, categories, clues }
}

/* ---- helpers ---- */

fn slot(location: Location, category: String, cell: ClueCell) -> ClueSlot {
    let ClueCell { was_revealed, clue_id, prompt, order_num, value, was_daily_double, wager, response } = cell;
    ClueSlot {
        location,
        category,
        was_revealed,
        clue_id,
        prompt,
        order_num,
        value,
        was_daily_double,
        wager,
        correct_response: response.correct_response,
        was_triple_stumper: response.was_triple_stumper,
        attempts: response.attempts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use scraper::Html;

    use crate::specs::board::{self, tests::board_markup};

    #[test]
    fn thirty_unique_coordinates_per_round() {
        for round in [1u8, 2] {
            let set: HashSet<String> = (0..CLUES_PER_ROUND).map(|i| location_at(round, i).to_string()).collect();
            assert_eq!(set.len(), 30);
        }
        assert_eq!(location_at(1, 0).to_string(), "J_1_1");
        assert_eq!(location_at(1, 4).to_string(), "J_1_5");
        assert_eq!(location_at(1, 5).to_string(), "J_2_1");
        assert_eq!(location_at(2, 29).to_string(), "DJ_6_5");
    }

    #[test]
    fn table_is_category_major() {
        for (i, (cat, row)) in LOCATIONS.iter().enumerate() {
            assert_eq!(*cat as usize, i / 5 + 1);
            assert_eq!(*row as usize, i % 5 + 1);
            assert_eq!(category_slot(i), i / 5);
        }
    }

    #[test]
    fn placed_clues_match_their_category_and_position() {
        let doc = Html::parse_document(&board_markup(2, &[(4, 2)]));
        let table = doc.select(selector!("table.round")).next().unwrap();
        let board = board::extract(table, 2).unwrap();
        let round = place(board);
        assert_eq!(round.index, 2);
        assert_eq!(round.clues.len(), 30);
        for clue in round.clues.iter().filter(|c| c.was_revealed) {
            let Location::Board { category, row, .. } = clue.location else { panic!("board clue") };
            // prompts in the test board name their own grid cell
            assert_eq!(clue.prompt, format!("c{category}r{row}"));
            assert_eq!(clue.category, format!("CAT {category}"));
        }
        let hole = round.clues.iter().find(|c| !c.was_revealed).unwrap();
        assert_eq!(hole.location.to_string(), "DJ_4_2");
        assert_eq!(hole.category, "CAT 4");
    }
}

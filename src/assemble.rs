// src/assemble.rs
//! Flatten a parsed game into output rows: one per (clue, attempt), names
//! resolved, sorted by (round, play order).

use crate::error::ResolutionError;
use crate::names::{NameMatcher, NameResolver};
use crate::record::ClueRow;
use crate::types::{ClueSlot, FinalClue, Game, GameMetadata, Location};

/// Appends finished rows for one game. Dropped after `finish`.
pub struct RowBuilder<'a> {
    game_id: u32,
    meta: &'a GameMetadata,
    resolver: NameResolver<'a>,
    rows: Vec<ClueRow>,
}

impl<'a> RowBuilder<'a> {
    pub fn new(game_id: u32, meta: &'a GameMetadata, matcher: &'a dyn NameMatcher) -> Self {
        Self {
            game_id,
            meta,
            resolver: NameResolver::new(&meta.contestants, matcher),
            rows: Vec::new(),
        }
    }

    /// One row per attempt, in attempt order.
    pub fn push_clue(&mut self, clue: &ClueSlot) -> Result<(), ResolutionError> {
        for attempt in &clue.attempts {
            let (name, player_id) = match attempt.responder.as_deref() {
                Some(raw) => {
                    let hit = self.resolver.resolve(raw)?;
                    (Some(hit.name), Some(hit.player_id))
                }
                None => (None, None),
            };
            let row = ClueRow {
                clue_id: clue.clue_id,
                clue_location: clue.location.to_string(),
                round_num: clue.round_num(),
                value: clue.value,
                order_num: clue.order_num,
                category: clue.category.clone(),
                answer: clue.prompt.clone(),
                correct_response: clue.correct_response.clone(),
                name,
                player_id,
                was_correct: attempt.was_correct,
                was_revealed: clue.was_revealed,
                was_triple_stumper: clue.was_triple_stumper,
                was_daily_double: clue.was_daily_double,
                wager: clue.wager,
                ..self.game_fields()
            };
            self.rows.push(row);
        }
        Ok(())
    }

    /// One row per contestant in the final response table.
    pub fn push_final(&mut self, fj: &FinalClue) -> Result<(), ResolutionError> {
        for attempt in &fj.attempts {
            let hit = self.resolver.resolve(&attempt.responder)?;
            let row = ClueRow {
                clue_id: None,
                clue_location: FinalClue::LOCATION.to_string(),
                round_num: Location::Final.round_num(),
                value: None,
                order_num: FinalClue::ORDER_NUM,
                category: fj.category.clone(),
                answer: fj.prompt.clone(),
                correct_response: fj.correct_response.clone(),
                name: Some(hit.name),
                player_id: Some(hit.player_id),
                was_correct: Some(attempt.was_correct),
                was_revealed: true,
                was_triple_stumper: fj.was_triple_stumper,
                was_daily_double: false,
                wager: attempt.wager,
                ..self.game_fields()
            };
            self.rows.push(row);
        }
        Ok(())
    }

    /// Sorted by (round_num, order_num); unplayed clues (order 0) go last in
    /// their round. The sort is stable, so attempt order survives within a clue.
    pub fn finish(mut self) -> Vec<ClueRow> {
        self.rows.sort_by_key(|r| {
            let order = if r.order_num == 0 { u32::MAX } else { r.order_num };
            (r.round_num, order)
        });
        self.rows
    }

    /* ---- helpers ---- */

    /// Game-level fields; the clue fields are overwritten by the caller.
    fn game_fields(&self) -> ClueRow {
        ClueRow {
            show_num: self.meta.show_num,
            game_id: self.game_id,
            date: self.meta.date,
            clue_id: None,
            clue_location: s!(),
            round_num: 0,
            value: None,
            order_num: 0,
            category: s!(),
            answer: s!(),
            correct_response: s!(),
            name: None,
            player_id: None,
            was_correct: None,
            was_revealed: false,
            was_triple_stumper: false,
            was_daily_double: false,
            wager: None,
            game_notes: self.meta.notes.clone(),
        }
    }
}

/// All rows of one game.
pub fn assemble(game_id: u32, game: &Game, matcher: &dyn NameMatcher) -> Result<Vec<ClueRow>, ResolutionError> {
    let mut rb = RowBuilder::new(game_id, &game.meta, matcher);
    for round in &game.rounds {
        for clue in &round.clues {
            rb.push_clue(clue)?;
        }
    }
    rb.push_final(&game.final_clue)?;
    Ok(rb.finish())
}

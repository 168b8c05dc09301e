// src/game.rs
//! Single entry point of the pure pipeline: page markup in, sorted rows out.

use std::time::Instant;

use scraper::Html;

use crate::assemble::assemble;
use crate::error::{ParseError, ScrapeError};
use crate::infer;
use crate::names::NameMatcher;
use crate::record::ClueRow;
use crate::specs::{board, final_round, metadata};
use crate::types::Game;

/// Read everything the page states and infer what it doesn't.
pub fn extract_game(doc: &Html) -> Result<Game, ParseError> {
    let meta = metadata::extract(doc)?;

    let rounds = board::extract_rounds(doc)?
        .into_iter()
        .map(|b| {
            let mut round = infer::place(b);
            infer::fill_values(&mut round, meta.date);
            round
        })
        .collect();

    let final_clue = final_round::extract(doc)?;

    Ok(Game { meta, rounds, final_clue })
}

/// Parse one `showgame.php` page into its rows. Atomic: any failure yields no rows.
pub fn parse_game(html: &str, game_id: u32, matcher: &dyn NameMatcher) -> Result<Vec<ClueRow>, ScrapeError> {
    let started = Instant::now();
    let doc = Html::parse_document(html);
    let game = extract_game(&doc)?;
    let rows = assemble(game_id, &game, matcher)?;
    logd!(
        "Game {}: show #{}, {} rows in {:?}",
        game_id,
        game.meta.show_num,
        rows.len(),
        started.elapsed()
    );
    Ok(rows)
}

// src/specs/clue.rs

use scraper::ElementRef;

use crate::core::html::{attr, is_blank, require, select_one, text_of};
use crate::core::sanitize::{number_after, parse_amount};
use crate::error::ParseError;
use crate::specs::response;
use crate::types::{ClueCell, Response};

/// One `td.clue` board cell. A cell without visible text was never revealed.
pub fn extract(cell: ElementRef<'_>) -> Result<ClueCell, ParseError> {
    if is_blank(cell) {
        return Ok(unrevealed());
    }

    let (value, was_daily_double, wager) = read_stake(cell)?;

    let prompt = response::prompt_of(cell).ok_or(ParseError::Missing("clue text"))?;

    let order_txt = text_of(require(cell, selector!(".clue_order_number"), "order number")?);
    let order_num = order_txt
        .parse::<u32>()
        .map_err(|_| ParseError::malformed("order number", order_txt.as_str()))?;

    let clue_id = read_clue_id(cell).ok_or(ParseError::Missing("clue reference"))?;

    let response = response::classify_cell(cell)?;

    Ok(ClueCell {
        was_revealed: true,
        clue_id: Some(clue_id),
        prompt,
        order_num,
        value,
        was_daily_double,
        wager,
        response,
    })
}

/* ---- helpers ---- */

fn unrevealed() -> ClueCell {
    ClueCell {
        was_revealed: false,
        clue_id: None,
        prompt: s!(),
        order_num: 0,
        value: None,
        was_daily_double: false,
        wager: None,
        response: Response::unrevealed(),
    }
}

/// (value, was_daily_double, wager)
fn read_stake(cell: ElementRef<'_>) -> Result<(Option<u32>, bool, Option<u32>), ParseError> {
    if let Some(dd) = select_one(cell, selector!(".clue_value_daily_double")) {
        let txt = text_of(dd);
        let wager = parse_amount(&txt).ok_or_else(|| ParseError::malformed("daily double wager", txt.as_str()))?;
        return Ok((None, true, Some(wager)));
    }
    let txt = text_of(require(cell, selector!(".clue_value"), "stake marker")?);
    let value = parse_amount(&txt).ok_or_else(|| ParseError::malformed("clue value", txt.as_str()))?;
    Ok((Some(value), false, None))
}

/// `suggestcorrection.php?clue_id=123` on the first link that carries one;
/// otherwise the digits after the last `=` of the first link.
fn read_clue_id(cell: ElementRef<'_>) -> Option<u64> {
    let mut hrefs = cell.select(selector!("a[href]")).filter_map(|a| attr(a, "href"));
    let first = hrefs.next()?;
    if let Some(id) = number_after(first, "clue_id=") {
        return Some(id);
    }
    hrefs
        .find_map(|h| number_after(h, "clue_id="))
        .or_else(|| first.rsplit('=').next().and_then(|t| t.parse().ok()))
}

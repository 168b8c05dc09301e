// src/specs/metadata.rs

use chrono::NaiveDate;
use scraper::Html;

use crate::core::html::{attr, require, select_one, text_of};
use crate::core::sanitize::number_after;
use crate::error::ParseError;
use crate::types::{GameMetadata, Registry};

const DATE_FMT: &str = "%B %d, %Y";

/// Title, contestants and notes of one game page.
pub fn extract(doc: &Html) -> Result<GameMetadata, ParseError> {
    let root = doc.root_element();

    let title = text_of(require(root, selector!("#game_title"), "game title")?);
    let date = parse_title_date(&title)?;
    let show_num = parse_show_num(&title)?;

    let mut contestants = Registry::new();
    for entry in root.select(selector!(".contestants")) {
        let text = text_of(entry);
        let name = text.split(',').next().unwrap_or_default().trim();
        let href = select_one(entry, selector!("a"))
            .and_then(|a| attr(a, "href"))
            .ok_or(ParseError::Missing("contestant link"))?;
        let id = number_after(href, "=")
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ParseError::malformed("contestant link", href))?;
        if name.is_empty() {
            return Err(ParseError::malformed("contestant", text));
        }
        contestants.push(name, id);
    }

    let notes = select_one(root, selector!("#game_comments"))
        .map(text_of)
        .filter(|s| !s.is_empty());

    Ok(GameMetadata { date, show_num, contestants, notes })
}

/* ---- helpers ---- */

/// "Show #5829 - Friday, January 1, 2010" → 2010-01-01
fn parse_title_date(title: &str) -> Result<NaiveDate, ParseError> {
    let (_, long_date) = title
        .split_once(',')
        .ok_or_else(|| ParseError::malformed("game title", title))?;
    NaiveDate::parse_from_str(long_date.trim(), DATE_FMT)
        .map_err(|_| ParseError::malformed("game date", long_date.trim()))
}

/// "Show #5829 - Friday, …" → 5829
fn parse_show_num(title: &str) -> Result<u32, ParseError> {
    let (_, after) = title
        .split_once('#')
        .ok_or_else(|| ParseError::malformed("show number", title))?;
    let token = after.split(' ').next().unwrap_or_default();
    token
        .parse()
        .map_err(|_| ParseError::malformed("show number", token))
}

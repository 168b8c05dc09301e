// src/specs/response.rs
//! Response fragment of a revealed clue: the correct response plus who rang in.
//!
//! Two page layouts carry the fragment:
//! - older pages: third JS string argument of the cell's `onmouseover` handler
//! - newer pages: a hidden `.clue_text` cell whose id ends in `_r`

use scraper::ElementRef;

use crate::core::html::{attr, parse_fragment, require, select_one, text_of};
use crate::core::sanitize::js_string_args;
use crate::error::ParseError;
use crate::types::{Attempt, Response};

const TRIPLE_STUMPER: &str = "Triple Stumper";

/// Raw markup of the response fragment inside `cell`, if either layout is present.
pub fn fragment_of(cell: ElementRef<'_>) -> Option<String> {
    if let Some(handler) = select_one(cell, selector!("div[onmouseover]"))
        .and_then(|div| attr(div, "onmouseover"))
    {
        if let Some(markup) = js_string_args(handler).into_iter().nth(2) {
            return Some(markup);
        }
    }
    cell.select(selector!(".clue_text"))
        .find(|el| attr(*el, "id").is_some_and(|id| id.ends_with("_r")))
        .map(|el| el.inner_html())
}

/// The visible prompt cell: the first `.clue_text` that is neither the hidden
/// response (`_r`) nor the "stuck" placeholder (`_stuck`).
pub fn prompt_of(container: ElementRef<'_>) -> Option<String> {
    container
        .select(selector!(".clue_text"))
        .find(|el| !attr(*el, "id").is_some_and(|id| id.ends_with("_r") || id.ends_with("_stuck")))
        .map(text_of)
}

/// Classify the response fragment of a revealed board clue.
pub fn classify_cell(cell: ElementRef<'_>) -> Result<Response, ParseError> {
    let markup = fragment_of(cell).ok_or(ParseError::Missing("response fragment"))?;
    classify(&markup)
}

/// Correct responder first, then incorrect ones in markup order. The
/// "Triple Stumper" marker is not a responder. An empty result becomes one
/// synthetic no-attempt record.
pub fn classify(markup: &str) -> Result<Response, ParseError> {
    let frag = parse_fragment(markup);
    let root = frag.root_element();

    let correct_response = text_of(require(root, selector!(".correct_response"), "correct response")?);

    let mut attempts = Vec::new();
    if let Some(right) = select_one(root, selector!(".right")) {
        let name = text_of(right);
        if !name.is_empty() {
            attempts.push(Attempt::correct(name));
        }
    }

    let mut marker = false;
    for wrong in root.select(selector!(".wrong")) {
        let name = text_of(wrong);
        if name == TRIPLE_STUMPER {
            marker = true;
        } else if !name.is_empty() {
            attempts.push(Attempt::incorrect(name));
        }
    }

    let any_correct = attempts.iter().any(|a| a.was_correct == Some(true));
    if marker && any_correct {
        logd!("Response: stumper marker next to a correct responder ({})", correct_response);
    }
    if attempts.is_empty() {
        attempts.push(Attempt::no_attempt());
    }

    Ok(Response {
        correct_response,
        attempts,
        was_triple_stumper: !any_correct,
    })
}

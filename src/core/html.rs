// src/core/html.rs
// Thin helpers over `scraper` element refs.
// Text is always whitespace-normalized; entities are already decoded by the parser.

use scraper::{ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;
use crate::error::ParseError;

/// Visible text of an element, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// True when the element has no visible text at all.
pub fn is_blank(el: ElementRef<'_>) -> bool {
    el.text().all(|t| t.trim().is_empty())
}

pub fn select_one<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// Like `select_one`, but a miss is a `ParseError::Missing(what)`.
pub fn require<'a>(
    el: ElementRef<'a>,
    sel: &Selector,
    what: &'static str,
) -> Result<ElementRef<'a>, ParseError> {
    select_one(el, sel).ok_or(ParseError::Missing(what))
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Parse an embedded markup fragment (tooltip payloads, hidden response cells).
pub fn parse_fragment(markup: &str) -> Html {
    Html::parse_fragment(markup)
}

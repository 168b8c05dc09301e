// src/specs/mod.rs
//! # Page readers for `showgame.php`
//!
//! Each module here knows **where the ground truth lives** in one part of a
//! J! Archive game page and how to pull it out into the typed records of
//! `crate::types`.
//!
//! ## What lives here
//! - **Pure markup reading** over a parsed `scraper::Html` document.
//! - **Selector choice & fallbacks** (e.g. the tooltip `onmouseover` payload vs
//!   the hidden inline response cell used by newer pages).
//! - **Shape checks** that turn unexpected markup into `ParseError`.
//!
//! ## What does **not** live here
//! - **Inference** (board coordinates, implied daily-double values) – see `crate::infer`.
//! - **Name resolution and row shaping** – see `crate::names` and `crate::assemble`.
//! - **Fetching, caching, export** – handled by `fetch`, `store` and `file`.
//!
//! ## Typical call chain
//! ```text
//! game::parse_game → metadata::extract
//!                  → board::extract_rounds → clue::extract → response::classify
//!                  → final_round::extract
//! ```
//!
//! ## Conventions & invariants
//! - Text is read through `core::html::text_of` (whitespace collapsed, entities decoded).
//! - Boards come back in **traversal order** (category-major, depth-minor); the
//!   location table in `infer::location` relies on it.
//! - A reader either returns a complete record or fails; nothing partial leaks out.
//!
//! ## Testing notes
//! - Every reader is tested offline against small inline markup snippets;
//!   the full-page fixture lives under `tests/fixtures/`.
pub mod board;
pub mod clue;
pub mod final_round;
pub mod metadata;
pub mod response;

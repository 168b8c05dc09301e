// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;
pub mod infer;
pub mod types;

pub mod assemble;
pub mod csv;
pub mod fetch;
pub mod file;
pub mod game;
pub mod names;
pub mod progress;
pub mod record;
pub mod runner;
pub mod scrape;
pub mod store;

pub use game::{extract_game, parse_game};
pub use record::ClueRow;

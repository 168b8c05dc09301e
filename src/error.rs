// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Markup did not have the shape the page readers expect.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing {0}")]
    Missing(&'static str),

    #[error("malformed {what}: {text:?}")]
    Malformed { what: &'static str, text: String },

    #[error("round {round}: expected {expected} {what}, found {found}")]
    BoardShape {
        round: u8,
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

impl ParseError {
    pub fn malformed(what: &'static str, text: impl Into<String>) -> Self {
        ParseError::Malformed { what, text: text.into() }
    }
}

/// A responder string had no registry name above the similarity cutoff.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("no contestant matches {observed:?} (best score {best:.3}, cutoff {cutoff:.3})")]
pub struct ResolutionError {
    pub observed: String,
    pub best: f64,
    pub cutoff: f64,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("request failed for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("robots.txt disallows {0}")]
    Disallowed(String),

    #[error("page not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("refusing to overwrite existing file: {}", .0.display())]
    Exists(PathBuf),

    #[error("cannot append to {}: header does not match", .0.display())]
    HeaderMismatch(PathBuf),

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Everything that can sink one game.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetch: {0}")]
    Fetch(#[from] FetchError),

    #[error("parse: {0}")]
    Parse(#[from] ParseError),

    #[error("names: {0}")]
    Resolution(#[from] ResolutionError),
}

/// Batch-level failures (per-game failures are reported, not raised).
#[derive(Debug, Error)]
pub enum RunError {
    #[error("no game ids selected")]
    NoGames,

    #[error("export: {0}")]
    Export(#[from] ExportError),
}

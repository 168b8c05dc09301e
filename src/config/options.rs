// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

/* ---------------- Scrape ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameSelector {
    One(u32),
    Ids(Vec<u32>),
}

impl GameSelector {
    pub fn ids(&self) -> Vec<u32> {
        match self {
            GameSelector::One(id) => vec![*id],
            GameSelector::Ids(v)  => v.clone(),
        }
    }
}

/// Where raw pages come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Web,
    /// Saved pages, `<dir>/<game_id>.html`
    Dir(PathBuf),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMetric {
    JaroWinkler,
    Levenshtein,
    SorensenDice,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchOptions {
    pub metric: MatchMetric,
    pub cutoff: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            metric: MatchMetric::JaroWinkler,
            cutoff: NAME_MATCH_CUTOFF,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeOptions {
    pub games: GameSelector,
    pub source: Source,
    pub use_cache: bool,
    pub workers: usize,
    pub matching: MatchOptions,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            games: GameSelector::Ids(Vec::new()),
            source: Source::Web,
            use_cache: true,
            workers: WORKERS,
            matching: MatchOptions::default(),
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportType {
    SingleFile,
    /// One `show_<id>.<ext>` per game
    PerGame,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/// What to do when the target file already exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnConflict {
    Replace,
    Append,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    out_path: OutputPath,
    pub include_headers: bool,
    pub include_notes: bool,
    pub on_conflict: OnConflict,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::SingleFile,
            out_path: OutputPath::default(),
            include_headers: true,
            include_notes: false,
            on_conflict: OnConflict::Replace,
        }
    }
}

impl ExportOptions {
    /// File path for single-file export, directory for per-game export.
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();

        match self.export_type {
            ExportType::SingleFile => {
                let stem = self.out_path.file_stem.to_string_lossy().into_owned();
                let ext = match &self.out_path.ext {
                    Some(user_ext) => user_ext.to_string_lossy().into_owned(),
                    None => s!(self.format.ext()),
                };
                path.push(join!(stem.as_str(), ".", &ext));
            }
            ExportType::PerGame => { /* directory only */ }
        }
        path
    }

    /// Split user text into dir + stem (+ explicit extension, which then wins over format).
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();

        match self.export_type {
            ExportType::SingleFile => {
                let p = Path::new(s);
                if let Some(parent) = p.parent() {
                    self.out_path.dir = parent.to_path_buf();
                }
                if let Some(stem) = p.file_stem() {
                    self.out_path.file_stem = stem.to_os_string();
                }
                self.out_path.ext = p.extension().map(|e| e.to_os_string());
            }
            ExportType::PerGame => {
                self.out_path.dir = PathBuf::from(s);
                self.out_path.ext = None;
            }
        }
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }

    /// File name used for one game in per-game mode.
    pub fn game_file_name(&self, game_id: u32) -> String {
        format!("show_{}.{}", game_id, self.format.ext())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_GAMES_SUBDIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

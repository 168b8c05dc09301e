// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::consts::{NAME_MATCH_CUTOFF, WORKERS};
use crate::config::options::{
    AppOptions, ExportFormat, ExportType, GameSelector, MatchMetric, MatchOptions, OnConflict, Source,
};
use crate::progress::Progress;

#[derive(Parser, Debug)]
#[command(name = "jarchive")]
#[command(about = "Scrape J! Archive game pages into one row per clue response", version)]
pub struct Args {
    /// Game ids: "173", "1-5,9,12"
    #[arg(short, long, value_name = "LIST", value_parser = parse_game_list)]
    pub games: GameList,

    /// Output file (single) or directory (--per-game)
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// One show_<id> file per game
    #[arg(long)]
    pub per_game: bool,

    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// What to do when an output file already exists
    #[arg(long, value_enum, default_value_t = ConflictArg::Replace)]
    pub on_conflict: ConflictArg,

    /// Read saved pages (<dir>/<id>.html) instead of the web
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Do not read or write the local page cache
    #[arg(long)]
    pub no_cache: bool,

    #[arg(long, default_value_t = WORKERS)]
    pub workers: usize,

    /// Omit the header row
    #[arg(long)]
    pub no_headers: bool,

    /// Append a game_notes column
    #[arg(long)]
    pub notes: bool,

    /// Name similarity metric
    #[arg(long, value_enum, default_value_t = MetricArg::JaroWinkler)]
    pub metric: MetricArg,

    /// Minimum similarity for a responder name to match a contestant
    #[arg(long, default_value_t = NAME_MATCH_CUTOFF)]
    pub cutoff: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameList(pub Vec<u32>);

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg { Csv, Tsv }

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConflictArg { Replace, Append, Fail }

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MetricArg { JaroWinkler, Levenshtein, SorensenDice }

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();

        opts.scrape.games = match self.games.0.as_slice() {
            [one] => GameSelector::One(*one),
            many => GameSelector::Ids(many.to_vec()),
        };
        opts.scrape.source = match &self.dir {
            Some(d) => Source::Dir(d.clone()),
            None => Source::Web,
        };
        opts.scrape.use_cache = !self.no_cache;
        opts.scrape.workers = self.workers.max(1);
        opts.scrape.matching = MatchOptions {
            metric: match self.metric {
                MetricArg::JaroWinkler => MatchMetric::JaroWinkler,
                MetricArg::Levenshtein => MatchMetric::Levenshtein,
                MetricArg::SorensenDice => MatchMetric::SorensenDice,
            },
            cutoff: self.cutoff,
        };

        let export = &mut opts.export;
        export.format = match self.format {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        };
        export.export_type = if self.per_game { ExportType::PerGame } else { ExportType::SingleFile };
        export.on_conflict = match self.on_conflict {
            ConflictArg::Replace => OnConflict::Replace,
            ConflictArg::Append => OnConflict::Append,
            ConflictArg::Fail => OnConflict::Fail,
        };
        export.include_headers = !self.no_headers;
        export.include_notes = self.notes;
        if let Some(out) = &self.out {
            export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// Prints one line per game to stderr.
#[derive(Default)]
pub struct CliProgress {
    total: usize,
    seen: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Scraping {total} game(s)…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, game_id: u32, rows: usize) {
        self.seen += 1;
        eprintln!("[{}/{}] game {game_id}: {rows} rows", self.seen, self.total);
    }
    fn item_failed(&mut self, game_id: u32, reason: &str) {
        self.seen += 1;
        eprintln!("[{}/{}] game {game_id} FAILED: {reason}", self.seen, self.total);
    }
}

pub fn run() -> color_eyre::Result<()> {
    let args = Args::parse();
    let opts = args.to_options();

    let mut progress = CliProgress::default();
    let summary = crate::runner::run(&opts, Some(&mut progress))?;

    for path in &summary.files_written {
        println!("Wrote {}", path.display());
    }
    println!(
        "{} game(s) ok, {} failed, {} rows",
        summary.games_ok,
        summary.games_failed.len(),
        summary.rows
    );
    Ok(())
}

/* ---- helpers ---- */

fn parse_game_list(s: &str) -> Result<GameList, String> {
    parse_ids_list(s).map(GameList)
}

/// "1-5,9,12" → [1, 2, 3, 4, 5, 9, 12] (sorted, deduplicated).
pub fn parse_ids_list(s: &str) -> Result<Vec<u32>, String> {
    let mut out = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        if let Some((a, b)) = part.split_once('-') {
            let a: u32 = a.trim().parse().map_err(|_| format!("Invalid id: {}", a.trim()))?;
            let b: u32 = b.trim().parse().map_err(|_| format!("Invalid id: {}", b.trim()))?;
            if a > b { return Err(format!("Invalid range: {}", part)); }
            out.extend(a..=b);
        } else {
            let v: u32 = part.parse().map_err(|_| format!("Invalid id: {}", part))?;
            out.push(v);
        }
    }
    if out.is_empty() {
        return Err(s!("No game ids given"));
    }
    out.sort_unstable();
    out.dedup();
    Ok(out)
}

// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://j-archive.com";
pub const GAME_PATH: &str = "/showgame.php?game_id=";
pub const ROBOTS_PATH: &str = "/robots.txt";
pub const USER_AGENT: &str = concat!("jarchive_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 20;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const PAGES_SUBDIR: &str = "pages";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "JARCHIVE_LOG";

// Export
pub const DEFAULT_OUT_DIR: &str = "data";
pub const DEFAULT_GAMES_SUBDIR: &str = "episode";
pub const DEFAULT_FILE: &str = "games";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 1_000; // be polite
pub const JITTER_MS: u64 = 250; // extra 0..250 ms
pub const MAX_CRAWL_DELAY_SECS: u64 = 60;

// Game rules
/// First show with doubled board values (season 18).
pub const DOUBLING_DATE: (i32, u32, u32) = (2001, 11, 26);
pub const CATEGORIES_PER_ROUND: usize = 6;
pub const CLUES_PER_CATEGORY: usize = 5;
pub const CLUES_PER_ROUND: usize = CATEGORIES_PER_ROUND * CLUES_PER_CATEGORY;

// Name matching
/// Permissive by default; matches the archive's historical behaviour.
pub const NAME_MATCH_CUTOFF: f64 = 0.01;
/// Runner-up within this margin of the winner is logged as ambiguous.
pub const NAME_AMBIGUITY_MARGIN: f64 = 0.05;

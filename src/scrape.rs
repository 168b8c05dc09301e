// src/scrape.rs
use std::{
    thread,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }}
};

use crate::{
    config::options::MatchOptions,
    error::ScrapeError,
    fetch::Fetch,
    game::parse_game,
    names::SimilarityMatcher,
    progress::Progress,
    record::ClueRow,
};

/// Rows of every game that made it, plus the ones that didn't.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Grouped by game id (ascending), each game's rows in emitted order.
    pub rows: Vec<ClueRow>,
    pub games_ok: Vec<u32>,
    pub failed: Vec<(u32, String)>,
}

/// Fetch + parse one game.
pub fn collect_game(fetcher: &dyn Fetch, game_id: u32, matcher: &SimilarityMatcher) -> Result<Vec<ClueRow>, ScrapeError> {
    let page = fetcher.fetch(game_id)?;
    parse_game(&page, game_id, matcher)
}

/// Fetch and parse `ids` on a worker pool. One game's failure never stops the batch.
pub fn collect_games(
    ids: &[u32],
    fetcher: Arc<dyn Fetch>,
    matching: MatchOptions,
    workers: usize,
    mut progress: Option<&mut dyn Progress>,
) -> BatchOutcome {
    // Concurrency
    type GameOk = (u32, Vec<ClueRow>);
    type GameErr = (u32, String);

    let ids_arc: Arc<Vec<u32>> = Arc::new(ids.to_vec());
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Result<GameOk, GameErr>>();

    let workers = workers.min(ids.len()).max(1);
    let matcher = SimilarityMatcher::new(matching);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(ids.len());
        p.log(&format!("{} game(s) on {} worker(s)", ids.len(), workers));
    }

    // Spawn workers

    for _ in 0..workers {
        let ids = Arc::clone(&ids_arc);
        let idx = Arc::clone(&counter);
        let fetcher = Arc::clone(&fetcher);
        let tx = res_tx.clone();

        thread::spawn(
            move || {
                loop {
                    let i = idx.fetch_add(1, Ordering::Relaxed);
                    if i >= ids.len() {
                        break;
                    }
                    let game_id = ids[i];
                    let result = match collect_game(fetcher.as_ref(), game_id, &matcher) {
                        Ok(rows) => Ok((game_id, rows)),
                        Err(e) => Err((game_id, e.to_string())),
                    };
                    if tx.send(result).is_err() {
                        break;
                    }
                }
            }
        );
    }
    drop(res_tx); // main thread is sole receiver now

    // Aggregate results
    let mut per_game: Vec<(u32, Vec<ClueRow>)> = Vec::new();
    let mut failed: Vec<(u32, String)> = Vec::new();

    for _ in 0..ids_arc.len() {
        match res_rx.recv() {
            Ok(Ok((id, rows))) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id, rows.len());
                }
                per_game.push((id, rows));
            }
            Ok(Err((id, msg))) => {
                loge!("Game {id}: {msg}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(id, &msg);
                }
                failed.push((id, msg));
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Sort
    per_game.sort_by_key(|(id, _)| *id);
    failed.sort_by_key(|(id, _)| *id);

    let games_ok = per_game.iter().map(|(id, _)| *id).collect();
    let mut rows: Vec<ClueRow> = Vec::new();
    for (_, mut game_rows) in per_game {
        rows.append(&mut game_rows);
    }

    BatchOutcome { rows, games_ok, failed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    const SAMPLE: &str = include_str!("../tests/fixtures/game_sample.html");

    /// Game 173 is the sample page; everything else is missing.
    struct OnePage;
    impl Fetch for OnePage {
        fn fetch(&self, game_id: u32) -> Result<String, FetchError> {
            match game_id {
                173 => Ok(s!(SAMPLE)),
                _ => Err(FetchError::NotFound(format!("{game_id}.html").into())),
            }
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Progress for Recorder {
        fn begin(&mut self, total: usize) { self.events.push(format!("begin {total}")); }
        fn log(&mut self, msg: &str) { self.events.push(format!("log {msg}")); }
        fn item_done(&mut self, game_id: u32, rows: usize) { self.events.push(format!("done {game_id} {rows}")); }
        fn item_failed(&mut self, game_id: u32, _reason: &str) { self.events.push(format!("failed {game_id}")); }
        fn finish(&mut self) { self.events.push(s!("finish")); }
    }

    #[test]
    fn reports_each_game_and_keeps_going() {
        let mut rec = Recorder::default();
        let out = collect_games(&[175, 173, 174], Arc::new(OnePage), MatchOptions::default(), 8, Some(&mut rec));

        assert_eq!(out.games_ok, vec![173]);
        assert_eq!(out.rows.len(), 66);
        assert_eq!(out.failed.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![174, 175]);

        // workers are capped at the number of games
        assert_eq!(rec.events[..2], [s!("begin 3"), s!("log 3 game(s) on 3 worker(s)")]);
        assert_eq!(rec.events.last().map(String::as_str), Some("finish"));
        assert!(rec.events.contains(&s!("done 173 66")));
        assert_eq!(rec.events.iter().filter(|e| e.starts_with("failed")).count(), 2);
    }
}

// src/core/net.rs
// Live pages over HTTPS (ureq), one request at a time, robots.txt honoured.

use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::consts::{BASE_URL, GAME_PATH, HTTP_TIMEOUT_SECS, JITTER_MS, MAX_CRAWL_DELAY_SECS, REQUEST_PAUSE_MS, ROBOTS_PATH, USER_AGENT};
use crate::error::FetchError;
use crate::fetch::Fetch;

pub struct HttpFetcher {
    agent: ureq::Agent,
    base: String,
    robots: Robots,
    pause: Duration,
    last: Mutex<Option<Instant>>,
}

impl HttpFetcher {
    /// Fetcher for the public archive; reads robots.txt once up front.
    pub fn new() -> Self {
        Self::with_base(BASE_URL)
    }

    pub fn with_base(base: &str) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
            .build();
        let agent: ureq::Agent = config.into();
        let base = s!(base.trim_end_matches('/'));

        let robots_url = join!(base.as_str(), ROBOTS_PATH);
        let robots = match get(&agent, &robots_url) {
            Ok(text) => Robots::parse(&text),
            Err(FetchError::Status { status: 404, .. }) => Robots::default(),
            Err(e) => {
                logw!("Net: robots.txt unavailable ({}); assuming no restrictions", e);
                Robots::default()
            }
        };

        let pause = Duration::from_millis(REQUEST_PAUSE_MS).max(robots.crawl_delay.unwrap_or_default());
        logd!("Net: base {}, pause {:?}, {} disallow rules", base, pause, robots.disallow.len());

        Self { agent, base, robots, pause, last: Mutex::new(None) }
    }

    /// Runs `request` alone: waits out the pause since the previous response,
    /// then holds the turn until this one has arrived. `seed` spreads the jitter.
    fn take_turn<T>(&self, seed: u32, request: impl FnOnce() -> T) -> T {
        let mut last = match self.last.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        let gap = self.pause + Duration::from_millis(u64::from(seed) % JITTER_MS);
        if let Some(prev) = *last {
            let since = prev.elapsed();
            if since < gap {
                thread::sleep(gap - since);
            }
        }
        let out = request();
        *last = Some(Instant::now());
        out
    }
}

impl Default for HttpFetcher {
    fn default() -> Self { Self::new() }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, game_id: u32) -> Result<String, FetchError> {
        let path = format!("{GAME_PATH}{game_id}");
        if !self.robots.allows(&path) {
            return Err(FetchError::Disallowed(path));
        }
        let url = join!(self.base.as_str(), &path);
        self.take_turn(game_id, || {
            logd!("Net: GET {}", url);
            get(&self.agent, &url)
        })
    }
}

/* ---- helpers ---- */

fn get(agent: &ureq::Agent, url: &str) -> Result<String, FetchError> {
    let mut resp = agent
        .get(url)
        .header("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| match e {
            ureq::Error::StatusCode(status) => FetchError::Status { status, url: s!(url) },
            other => FetchError::Transport { url: s!(url), message: other.to_string() },
        })?;
    resp.body_mut()
        .read_to_string()
        .map_err(|e| FetchError::Transport { url: s!(url), message: e.to_string() })
}

/// The `User-agent: *` rules of a robots.txt.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Robots {
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
    pub crawl_delay: Option<Duration>,
}

impl Robots {
    pub fn parse(text: &str) -> Self {
        let mut out = Robots::default();
        let mut in_star = false;
        // consecutive User-agent lines share one group
        let mut reading_agents = false;

        for raw in text.lines() {
            let line = raw.split('#').next().unwrap_or("").trim();
            let Some((key, value)) = line.split_once(':') else { continue };
            let (key, value) = (key.trim().to_ascii_lowercase(), value.trim());

            if key == "user-agent" {
                if !reading_agents {
                    in_star = false;
                }
                in_star |= value == "*";
                reading_agents = true;
                continue;
            }
            reading_agents = false;
            if !in_star {
                continue;
            }
            match key.as_str() {
                "disallow" if !value.is_empty() => out.disallow.push(s!(value)),
                "allow" if !value.is_empty() => out.allow.push(s!(value)),
                "crawl-delay" => {
                    // capped before conversion; negatives and NaN are dropped
                    let delay = value
                        .parse::<f64>()
                        .ok()
                        .filter(|secs| !secs.is_nan())
                        .and_then(|secs| Duration::try_from_secs_f64(secs.min(MAX_CRAWL_DELAY_SECS as f64)).ok());
                    match delay {
                        Some(delay) => out.crawl_delay = Some(delay),
                        None => logw!("Net: ignoring crawl-delay {:?}", value),
                    }
                }
                _ => {}
            }
        }
        out
    }

    /// Longest matching prefix wins; `Allow` wins a tie.
    pub fn allows(&self, path: &str) -> bool {
        let longest = |rules: &[String]| {
            rules.iter().filter(|r| path.starts_with(r.as_str())).map(String::len).max()
        };
        match (longest(&self.allow), longest(&self.disallow)) {
            (_, None) => true,
            (None, Some(_)) => false,
            (Some(a), Some(d)) => a >= d,
        }
    }
}

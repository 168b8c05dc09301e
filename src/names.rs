// src/names.rs
//! Responder strings on the page are usually first names only ("Jerome").
//! They are matched against the full names of the game's contestant registry.

use std::collections::HashMap;

use crate::config::consts::NAME_AMBIGUITY_MARGIN;
use crate::config::options::{MatchMetric, MatchOptions};
use crate::error::ResolutionError;
use crate::types::Registry;

/// Similarity strategy: higher is closer, accepted at or above `cutoff()`.
pub trait NameMatcher: Send + Sync {
    fn score(&self, observed: &str, candidate: &str) -> f64;
    fn cutoff(&self) -> f64;
}

/// `strsim`-backed matcher over lowercased strings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimilarityMatcher {
    metric: MatchMetric,
    cutoff: f64,
}

impl SimilarityMatcher {
    pub fn new(opts: MatchOptions) -> Self {
        Self { metric: opts.metric, cutoff: opts.cutoff }
    }
}

impl Default for SimilarityMatcher {
    fn default() -> Self { Self::new(MatchOptions::default()) }
}

impl NameMatcher for SimilarityMatcher {
    fn score(&self, observed: &str, candidate: &str) -> f64 {
        let a = observed.to_lowercase();
        let b = candidate.to_lowercase();
        match self.metric {
            MatchMetric::JaroWinkler => strsim::jaro_winkler(&a, &b),
            MatchMetric::Levenshtein => strsim::normalized_levenshtein(&a, &b),
            MatchMetric::SorensenDice => strsim::sorensen_dice(&a, &b),
        }
    }

    fn cutoff(&self) -> f64 { self.cutoff }
}

/// Canonical identity for one responder string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub name: String,
    pub player_id: u32,
}

/// Per-game resolver; the cache lives exactly as long as the game's extraction.
pub struct NameResolver<'a> {
    registry: &'a Registry,
    matcher: &'a dyn NameMatcher,
    cache: HashMap<String, Resolved>,
}

impl<'a> NameResolver<'a> {
    pub fn new(registry: &'a Registry, matcher: &'a dyn NameMatcher) -> Self {
        Self { registry, matcher, cache: HashMap::new() }
    }

    pub fn resolve(&mut self, observed: &str) -> Result<Resolved, ResolutionError> {
        if let Some(hit) = self.cache.get(observed) {
            return Ok(hit.clone());
        }
        let resolved = self.best_match(observed)?;
        self.cache.insert(s!(observed), resolved.clone());
        Ok(resolved)
    }

    /* ---- helpers ---- */

    fn best_match(&self, observed: &str) -> Result<Resolved, ResolutionError> {
        let mut best: Option<(&str, u32, f64)> = None;
        let mut runner_up = f64::MIN;

        for (name, id) in self.registry.iter() {
            let score = self.matcher.score(observed, name);
            match best {
                // strictly greater: ties keep the earlier registry entry
                Some((_, _, top)) if score <= top => runner_up = runner_up.max(score),
                Some((_, _, top)) => {
                    runner_up = runner_up.max(top);
                    best = Some((name, id, score));
                }
                None => best = Some((name, id, score)),
            }
        }

        let cutoff = self.matcher.cutoff();
        match best {
            Some((name, player_id, score)) if score >= cutoff => {
                if self.registry.len() > 1 && score - runner_up <= NAME_AMBIGUITY_MARGIN {
                    logw!(
                        "Names: {:?} → {:?} is ambiguous (score {:.3}, runner-up {:.3})",
                        observed, name, score, runner_up
                    );
                }
                logd!("Names: {:?} → {:?} ({:.3})", observed, name, score);
                Ok(Resolved { name: s!(name), player_id })
            }
            other => Err(ResolutionError {
                observed: s!(observed),
                best: other.map(|(_, _, s)| s).unwrap_or(0.0),
                cutoff,
            }),
        }
    }
}

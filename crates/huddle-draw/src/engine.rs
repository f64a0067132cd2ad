//! The lucky draw engine.
//!
//! `DrawEngine` owns a roster snapshot, a winner [`History`], and a random
//! source. Each call to [`DrawEngine::draw`] is one draw cycle: the eligible
//! pool is computed once from the roster and history, one participant is
//! picked uniformly from it, and the winner is recorded.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use huddle_core::{Participant, Roster};

use crate::config::DrawConfig;
use crate::error::{DrawError, DrawResult};
use crate::history::History;

/// A stateful random selector over a roster.
pub struct DrawEngine<R = StdRng> {
    roster: Arc<Roster>,
    history: History,
    allow_duplicates: bool,
    rng: R,
}

impl DrawEngine<StdRng> {
    /// Create an engine from a roster and configuration.
    ///
    /// Uses a seeded `StdRng` when the config carries a seed.
    pub fn new(roster: impl Into<Arc<Roster>>, config: &DrawConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(roster, rng, config.allow_duplicates)
    }
}

impl<R: Rng> DrawEngine<R> {
    /// Create an engine with an explicit random source.
    pub fn with_rng(roster: impl Into<Arc<Roster>>, rng: R, allow_duplicates: bool) -> Self {
        Self {
            roster: roster.into(),
            history: History::new(),
            allow_duplicates,
            rng,
        }
    }

    /// The current roster.
    pub fn roster(&self) -> &Arc<Roster> {
        &self.roster
    }

    /// Replace the whole roster. Winner history is kept.
    pub fn replace_roster(&mut self, roster: impl Into<Arc<Roster>>) {
        self.roster = roster.into();
        debug!(size = self.roster.len(), "draw roster replaced");
    }

    /// Replace the roster with an empty one.
    pub fn clear_roster(&mut self) {
        self.replace_roster(Roster::new());
    }

    /// Winner history, newest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether repeat winners are allowed.
    pub fn allow_duplicates(&self) -> bool {
        self.allow_duplicates
    }

    /// Allow or forbid repeat winners from the next draw cycle onward.
    pub fn set_allow_duplicates(&mut self, allow: bool) {
        self.allow_duplicates = allow;
    }

    /// Participants eligible for the next draw.
    pub fn pool(&self) -> Vec<&Participant> {
        eligible(&self.roster, &self.history, self.allow_duplicates)
    }

    /// Size of the eligible pool.
    pub fn remaining(&self) -> usize {
        self.pool().len()
    }

    /// Pick a random eligible participant for display only.
    ///
    /// Nothing is recorded; use this to animate a spin before calling
    /// [`DrawEngine::draw`].
    pub fn sample_for_display(&mut self) -> Option<&Participant> {
        let pool = eligible(&self.roster, &self.history, self.allow_duplicates);
        if pool.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..pool.len());
        Some(pool[index])
    }

    /// Run one draw cycle and record the winner.
    pub fn draw(&mut self) -> DrawResult<Participant> {
        let roster = Arc::clone(&self.roster);
        let pool = eligible(&roster, &self.history, self.allow_duplicates);
        debug!(
            pool = pool.len(),
            roster = roster.len(),
            allow_duplicates = self.allow_duplicates,
            "draw cycle started"
        );

        if pool.is_empty() {
            let drawn = roster
                .iter()
                .filter(|p| self.history.contains(p.id))
                .count();
            return Err(DrawError::EmptyPool {
                roster_size: roster.len(),
                drawn,
            });
        }

        let index = self.rng.random_range(0..pool.len());
        let winner = pool[index].clone();
        let record = self.history.record(winner.clone());
        info!(winner = %winner.name, id = %winner.id, ordinal = record.drawn_at, "winner drawn");
        Ok(winner)
    }

    /// Clear the winner history. The roster is untouched.
    pub fn reset(&mut self) {
        self.history.clear();
        debug!("draw history cleared");
    }
}

fn eligible<'a>(
    roster: &'a Roster,
    history: &History,
    allow_duplicates: bool,
) -> Vec<&'a Participant> {
    roster
        .iter()
        .filter(|p| allow_duplicates || !history.contains(p.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use huddle_core::LineFormat;
    use proptest::prelude::*;
    use rand::RngCore;

    /// A random source that always yields zero, so every pick is the first
    /// pool member.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    fn roster(names: &[&str]) -> Roster {
        Roster::normalize(names, LineFormat::Plain)
    }

    fn seeded(names: &[&str], seed: u64) -> DrawEngine {
        DrawEngine::new(roster(names), &DrawConfig::default().with_seed(seed))
    }

    #[test]
    fn injected_rng_controls_selection() {
        let mut engine = DrawEngine::with_rng(roster(&["Alice", "Bob", "Carol"]), ZeroRng, false);
        assert_eq!(engine.draw().unwrap().name, "Alice");
        assert_eq!(engine.draw().unwrap().name, "Bob");
        assert_eq!(engine.draw().unwrap().name, "Carol");
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let names = ["A", "B", "C", "D", "E"];
        let mut a = seeded(&names, 7);
        let mut b = seeded(&names, 7);
        for _ in 0..5 {
            assert_eq!(a.draw().unwrap().name, b.draw().unwrap().name);
        }
    }

    #[test]
    fn draws_exhaust_pool_then_fail() {
        let mut engine = seeded(&["A", "B", "C"], 1);
        let mut seen = HashSet::new();
        for _ in 0..3 {
            let winner = engine.draw().unwrap();
            assert!(seen.insert(winner.id), "winner drawn twice");
        }
        assert_eq!(engine.remaining(), 0);

        let err = engine.draw().unwrap_err();
        assert_eq!(
            err,
            DrawError::EmptyPool {
                roster_size: 3,
                drawn: 3
            }
        );
        assert_eq!(engine.history().len(), 3);
    }

    #[test]
    fn empty_roster_fails() {
        let mut engine = seeded(&[], 1);
        assert!(matches!(
            engine.draw(),
            Err(DrawError::EmptyPool {
                roster_size: 0,
                drawn: 0
            })
        ));
        assert!(engine.history().is_empty());
    }

    #[test]
    fn duplicates_allowed_never_exhausts() {
        let mut engine = DrawEngine::new(
            roster(&["Solo"]),
            &DrawConfig::default().with_seed(3).with_allow_duplicates(true),
        );
        for _ in 0..100 {
            assert_eq!(engine.draw().unwrap().name, "Solo");
        }
        assert_eq!(engine.history().len(), 100);
        assert_eq!(engine.history().latest().map(|r| r.drawn_at), Some(100));
    }

    #[test]
    fn toggle_applies_to_next_cycle_only() {
        let mut engine = DrawEngine::with_rng(roster(&["Solo"]), ZeroRng, false);
        engine.draw().unwrap();
        assert!(engine.draw().is_err());

        engine.set_allow_duplicates(true);
        assert_eq!(engine.remaining(), 1);
        engine.draw().unwrap();
        assert_eq!(engine.history().len(), 2);

        engine.set_allow_duplicates(false);
        assert_eq!(engine.remaining(), 0);
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn reset_clears_history_but_keeps_roster() {
        let mut engine = seeded(&["A", "B"], 9);
        engine.draw().unwrap();
        engine.draw().unwrap();
        engine.reset();
        assert!(engine.history().is_empty());
        assert_eq!(engine.roster().len(), 2);
        assert_eq!(engine.remaining(), 2);
    }

    #[test]
    fn replacing_roster_keeps_history_and_resets_pool() {
        let mut engine = seeded(&["A", "B"], 9);
        let first = engine.draw().unwrap();
        let snapshot = Arc::clone(engine.roster());

        engine.replace_roster(roster(&["A", "B"]));
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.remaining(), 2);
        assert!(snapshot.get(first.id).is_some());

        engine.clear_roster();
        assert!(engine.roster().is_empty());
        assert!(engine.draw().is_err());
    }

    #[test]
    fn display_sampling_records_nothing() {
        let mut engine = seeded(&["A", "B", "C"], 5);
        for _ in 0..20 {
            assert!(engine.sample_for_display().is_some());
        }
        assert!(engine.history().is_empty());
        assert_eq!(engine.remaining(), 3);

        let mut empty = seeded(&[], 5);
        assert!(empty.sample_for_display().is_none());
    }

    #[test]
    fn selection_is_uniform_over_pool() {
        let names = ["A", "B", "C", "D"];
        let mut engine = DrawEngine::new(
            roster(&names),
            &DrawConfig::default().with_seed(2024).with_allow_duplicates(true),
        );
        let trials = 8000;
        let mut counts = [0usize; 4];
        for _ in 0..trials {
            let winner = engine.draw().unwrap();
            counts[winner.id.position] += 1;
        }
        let expected = trials as f64 / names.len() as f64;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        // df = 3, p = 0.001
        assert!(chi_square < 16.27, "chi-square {chi_square} counts {counts:?}");
    }

    proptest! {
        #[test]
        fn no_repeat_history_is_bounded(size in 0usize..12, draws in 0usize..20, seed in any::<u64>()) {
            let names: Vec<String> = (0..size).map(|i| format!("P{i}")).collect();
            let mut engine = DrawEngine::new(
                Roster::normalize(&names, LineFormat::Plain),
                &DrawConfig::default().with_seed(seed),
            );
            for i in 0..draws {
                let result = engine.draw();
                prop_assert_eq!(result.is_ok(), i < size);
            }
            let ids: HashSet<_> = engine.history().iter().map(|r| r.participant.id).collect();
            prop_assert_eq!(ids.len(), engine.history().len());
            prop_assert!(engine.history().len() <= size);
        }
    }
}

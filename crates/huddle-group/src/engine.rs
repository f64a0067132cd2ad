//! The grouping engine.
//!
//! `GroupingEngine` keeps the most recent partition so the host can rename,
//! display, and export it. Each call to [`GroupingEngine::partition`]
//! discards the previous result.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use huddle_core::{Group, Roster};

use crate::config::GroupingConfig;
use crate::decorate::{Decoration, decorate};
use crate::error::GroupResult;
use crate::export::to_delimited_text;
use crate::namer::GroupNamer;
use crate::partition::{clamp_group_size, group_count, partition};

/// Owns the current groups and the random source used to build them.
pub struct GroupingEngine<R = StdRng> {
    config: GroupingConfig,
    rng: R,
    groups: Vec<Group>,
}

impl GroupingEngine<StdRng> {
    /// Create an engine from configuration.
    ///
    /// Uses a seeded `StdRng` when the config carries a seed.
    pub fn new(config: GroupingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GroupingEngine<R> {
    /// Create an engine with an explicit random source.
    pub fn with_rng(config: GroupingConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            groups: Vec::new(),
        }
    }

    /// The engine configuration.
    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// Change the requested group size for the next partition.
    pub fn set_group_size(&mut self, size: usize) {
        self.config.group_size = size;
    }

    /// The group size a partition of `roster` would actually use.
    pub fn effective_group_size(&self, roster: &Roster) -> usize {
        clamp_group_size(self.config.group_size, roster.len())
    }

    /// How many groups a partition of `roster` would produce.
    pub fn preview_count(&self, roster: &Roster) -> usize {
        group_count(roster.len(), self.config.group_size)
    }

    /// Partition the roster, replacing any previous groups.
    pub fn partition(&mut self, roster: &Roster) -> &[Group] {
        self.groups = partition(roster, self.config.group_size, &mut self.rng);
        &self.groups
    }

    /// Ask `namer` for display names for the current groups.
    ///
    /// Uses the configured style and timeout. Failures leave names unchanged.
    pub async fn decorate<N>(&mut self, namer: &N) -> Decoration
    where
        N: GroupNamer + ?Sized,
    {
        let naming = &self.config.naming;
        decorate(&mut self.groups, namer, &naming.style, naming.timeout()).await
    }

    /// The current groups.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Discard the current groups.
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Export the current groups as CSV text.
    pub fn export(&self) -> GroupResult<String> {
        to_delimited_text(&self.groups)
    }
}

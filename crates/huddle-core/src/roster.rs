//! Roster normalization and duplicate handling.
//!
//! A [`Roster`] is built wholesale from raw lines of text, either typed by hand
//! or read from a spreadsheet export. It is never edited in place; every
//! change produces a new value that replaces the old one.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::participant::{Participant, ParticipantId};

const BYTE_ORDER_MARK: char = '\u{feff}';

const SAMPLE_NAMES: [&str; 15] = [
    "王小明", "李小華", "陳大文", "張曉芬", "林志玲", "周杰倫", "蔡依林", "郭台銘", "徐若瑄", "金城武",
    "劉德華", "梁朝偉", "周星馳", "成龍", "甄子丹",
];

/// How each raw line should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineFormat {
    /// One name per line.
    #[default]
    Plain,
    /// A delimited record; only the field before the first delimiter is used.
    Delimited(char),
}

impl LineFormat {
    /// Comma-separated records, the usual spreadsheet export.
    pub const CSV: Self = Self::Delimited(',');

    fn candidate<'a>(&self, line: &'a str) -> &'a str {
        let line = line.trim();
        match self {
            Self::Plain => line,
            Self::Delimited(delim) => line.split(*delim).next().unwrap_or_default().trim(),
        }
    }
}

/// The canonical, order-preserving list of current participants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize raw lines into a roster.
    ///
    /// Lines are trimmed (and cut at the delimiter for [`LineFormat::Delimited`]);
    /// blank lines are dropped. Survivors keep their order and receive ids from
    /// a fresh batch token, so duplicate names still get distinct ids.
    pub fn normalize<I, S>(lines: I, format: LineFormat) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let batch = Uuid::new_v4();
        let participants = lines
            .into_iter()
            .filter_map(|line| {
                let name = format.candidate(line.as_ref());
                (!name.is_empty()).then(|| name.to_string())
            })
            .enumerate()
            .map(|(position, name)| Participant::new(ParticipantId::new(batch, position), name))
            .collect();
        Self { participants }
    }

    /// Normalize a whole text blob, splitting on `\n` or `\r\n`.
    ///
    /// A leading byte-order mark is ignored.
    pub fn from_text(text: &str, format: LineFormat) -> Self {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        Self::normalize(text.lines(), format)
    }

    /// A small built-in roster for trying things out.
    pub fn sample() -> Self {
        Self::normalize(SAMPLE_NAMES, LineFormat::Plain)
    }

    /// All participants in roster order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Iterate participants in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }

    /// Participant names in roster order.
    pub fn names(&self) -> Vec<&str> {
        self.participants.iter().map(|p| p.name.as_str()).collect()
    }

    /// Look up a participant by id.
    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the roster has no participants.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Number of distinct names that occur more than once.
    ///
    /// `[A, B, A, C, B, B]` has a duplicate count of 2.
    pub fn duplicate_count(&self) -> usize {
        self.name_counts().values().filter(|&&n| n > 1).count()
    }

    /// Whether `name` occurs more than once.
    pub fn is_duplicate(&self, name: &str) -> bool {
        self.participants.iter().filter(|p| p.name == name).count() > 1
    }

    /// Keep only the first occurrence of each name.
    ///
    /// Surviving participants keep their ids and relative order, so applying
    /// this twice gives the same roster as applying it once.
    pub fn dedupe(&self) -> Self {
        let mut seen = HashSet::new();
        let participants = self
            .participants
            .iter()
            .filter(|p| seen.insert(p.name.as_str()))
            .cloned()
            .collect();
        Self { participants }
    }

    fn name_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for p in &self.participants {
            *counts.entry(p.name.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.participants.iter()
    }
}

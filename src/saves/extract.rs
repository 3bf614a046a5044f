//! Best-effort text extraction over save payloads.
//!
//! Saves are an external format this bot does not control, so nothing here parses a
//! schema. A save "belongs" to a player when a `player` token is followed anywhere
//! later by the player's name (case-insensitive); every `<id>:<status>` pair in such a
//! save is then read, and ids whose status is the owned sentinel count as caught.

use crate::constants::OWNED_STATUS;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

/// Caught item ids for one player over one scan pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcquisitionSet(BTreeSet<i32>);

impl AcquisitionSet {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn insert(&mut self, id: i32) -> bool {
        self.0.insert(id)
    }
    pub fn contains(&self, id: i32) -> bool {
        self.0.contains(&id)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Ascending ids.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }
    pub fn extend(&mut self, other: AcquisitionSet) {
        self.0.extend(other.0);
    }
}

impl FromIterator<i32> for AcquisitionSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Compiled patterns for one player. Build once per scan, reuse for every file.
pub struct TextExtractor {
    owner: Regex,
    pair: Regex,
}

impl TextExtractor {
    pub fn for_player(player_name: &str) -> Result<Self, regex::Error> {
        // Player names are user input; escape them so `a.b*c` only matches itself.
        let owner = RegexBuilder::new(&format!(r"player.*?{}", regex::escape(player_name)))
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()?;
        // ASCII digits only; `parse` rejects anything else.
        let pair = Regex::new(r"([0-9]+):([0-9]+)")?;
        Ok(Self { owner, pair })
    }

    pub fn belongs_to_player(&self, text: &str) -> bool {
        self.owner.is_match(text)
    }

    /// Every owned id in `text`, regardless of ownership marker.
    pub fn owned_ids(&self, text: &str) -> AcquisitionSet {
        self.pair
            .captures_iter(text)
            .filter_map(|caps| {
                // Pairs too large for the id/status types are noise, not data.
                let id = caps[1].parse::<i32>().ok()?;
                let status = caps[2].parse::<i64>().ok()?;
                (status == OWNED_STATUS).then_some(id)
            })
            .collect()
    }

    /// Owned ids when the save belongs to the player, `None` otherwise.
    pub fn extract(&self, text: &str) -> Option<AcquisitionSet> {
        self.belongs_to_player(text).then(|| self.owned_ids(text))
    }
}

use std::collections::HashMap;

use crate::types::Track;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub key: String,
    pub tracks: Vec<Track>,
}

/// Grouping key to member tracks, iterated in first-insertion order of the keys.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    groups: Vec<Group>,
    index: HashMap<String, usize>,
}

impl Partition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Partition whose groups exist up front, in the given order, even if
    /// they never receive a track.
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut partition = Self::new();
        for key in keys {
            partition.slot(key.into());
        }
        partition
    }

    pub fn push(&mut self, key: impl Into<String>, track: Track) {
        let slot = self.slot(key.into());
        self.groups[slot].tracks.push(track);
    }

    pub fn get(&self, key: &str) -> Option<&[Track]> {
        self.index
            .get(key)
            .map(|&slot| self.groups[slot].tracks.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Number of groups, empty ones included.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True if at least one group has a member.
    pub fn has_members(&self) -> bool {
        self.groups.iter().any(|g| !g.tracks.is_empty())
    }

    fn slot(&mut self, key: String) -> usize {
        if let Some(&slot) = self.index.get(&key) {
            return slot;
        }

        let slot = self.groups.len();
        self.index.insert(key.clone(), slot);
        self.groups.push(Group {
            key,
            tracks: Vec::new(),
        });
        slot
    }
}

impl<'a> IntoIterator for &'a Partition {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

//! Immutable rule store snapshots.
//!
//! A `RuleStore` is built once per load through a [`RuleStoreBuilder`] and is
//! never mutated afterwards. It uses persistent maps, so cloning is O(1) and
//! [`RuleStore::without`] shares structure with the snapshot it came from.

use embargo_foundation::{Category, DifficultySet, MapKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::record::RuleRecord;

/// Topology and available difficulties of a map named by a map rule.
///
/// Captured at load time so evaluation never reaches into external stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MapProfile {
    /// Topology class.
    pub kind: MapKind,
    /// Difficulty tiers with content data.
    pub difficulties: DifficultySet,
}

impl MapProfile {
    /// Creates a new profile.
    #[must_use]
    pub const fn new(kind: MapKind, difficulties: DifficultySet) -> Self {
        Self { kind, difficulties }
    }
}

/// One snapshot of all accepted disable rules.
///
/// Absence of an entry means "not disabled"; the store only records
/// exceptions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleStore {
    /// Rules per category, indexed by [`Category::index`].
    rules: [im::HashMap<u32, RuleRecord>; Category::COUNT],
    /// Map profiles for map and dungeon-finder rules.
    map_profiles: im::HashMap<u32, MapProfile>,
}

impl RuleStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the rule for `entry` in `category`.
    #[must_use]
    pub fn get(&self, category: Category, entry: u32) -> Option<&RuleRecord> {
        let rules = &self.rules[category.index()];
        if rules.is_empty() {
            return None;
        }
        rules.get(&entry)
    }

    /// Returns true if a rule exists for `entry` in `category`.
    #[must_use]
    pub fn contains(&self, category: Category, entry: u32) -> bool {
        self.get(category, entry).is_some()
    }

    /// Number of rules in `category`.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.rules[category.index()].len()
    }

    /// Total number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.iter().map(im::HashMap::len).sum()
    }

    /// Returns true if no rules are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.iter().all(im::HashMap::is_empty)
    }

    /// Iterates over the rules of one category in no particular order.
    pub fn entries(&self, category: Category) -> impl Iterator<Item = (u32, &RuleRecord)> {
        self.rules[category.index()]
            .iter()
            .map(|(entry, record)| (*entry, record))
    }

    /// Returns the captured profile of a map.
    #[must_use]
    pub fn map_profile(&self, map_id: u32) -> Option<MapProfile> {
        self.map_profiles.get(&map_id).copied()
    }

    /// Returns a new snapshot without the rule for `entry` in `category`.
    ///
    /// The map profile is kept if a rule in another category still needs it.
    #[must_use]
    pub fn without(&self, category: Category, entry: u32) -> Self {
        let mut next = self.clone();
        next.rules[category.index()].remove(&entry);
        if matches!(category, Category::Map | Category::LfgMap)
            && !next.contains(Category::Map, entry)
            && !next.contains(Category::LfgMap, entry)
        {
            next.map_profiles.remove(&entry);
        }
        next
    }
}

/// Accumulates rules for a new [`RuleStore`].
#[derive(Debug, Default)]
pub struct RuleStoreBuilder {
    store: RuleStore,
}

impl RuleStoreBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a rule, returning the rule it replaced, if any.
    pub fn insert(
        &mut self,
        category: Category,
        entry: u32,
        record: RuleRecord,
    ) -> Option<RuleRecord> {
        self.store.rules[category.index()].insert(entry, record)
    }

    /// Records the profile of a map referenced by a map rule.
    pub fn insert_map_profile(&mut self, map_id: u32, profile: MapProfile) {
        self.store.map_profiles.insert(map_id, profile);
    }

    /// Number of rules inserted so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if nothing has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Finishes the snapshot.
    #[must_use]
    pub fn build(self) -> RuleStore {
        self.store
    }
}

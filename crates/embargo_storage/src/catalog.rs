//! Read-only views of the game data a load validates against.
//!
//! The rule engine does not own spell, map, template or quest data. Hosts
//! implement these traits over their own stores; [`StaticCatalog`] is an
//! in-memory implementation of all of them.

use std::collections::{HashMap, HashSet};

use embargo_foundation::{DifficultySet, MapKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Spell definitions.
pub trait SpellCatalog {
    /// Returns true if a spell definition exists.
    fn contains_spell(&self, spell_id: u32) -> bool;
}

/// Map definitions and their difficulty metadata.
pub trait MapCatalog {
    /// Topology class of a map, or `None` if the map does not exist.
    fn map_kind(&self, map_id: u32) -> Option<MapKind>;

    /// Difficulty tiers with content data for a map.
    fn difficulties(&self, map_id: u32) -> DifficultySet;
}

/// Gameobject, battleground, outdoor PvP and achievement templates.
pub trait TemplateCatalog {
    /// Returns true if a gameobject template exists.
    fn contains_gameobject(&self, entry: u32) -> bool;

    /// Returns true if a battleground definition exists.
    fn contains_battleground(&self, entry: u32) -> bool;

    /// Returns true if an achievement criterion exists.
    fn contains_achievement_criteria(&self, entry: u32) -> bool;

    /// Exclusive upper bound of outdoor PvP type ids. Valid ids are `1..count`.
    fn outdoor_pvp_type_count(&self) -> u32;

    /// Returns true if `entry` is a valid outdoor PvP type id.
    fn contains_outdoor_pvp(&self, entry: u32) -> bool {
        entry > 0 && entry < self.outdoor_pvp_type_count()
    }
}

/// Quest templates. Only available after the primary load.
pub trait QuestCatalog {
    /// Returns true if a quest template exists.
    fn contains_quest(&self, quest_id: u32) -> bool;
}

/// An attribute the engine may ask the host to set on a spell definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpellAttribute {
    /// Targeting no longer requires line of sight.
    IgnoreLineOfSight,
}

/// A spell store that accepts attribute patches.
pub trait SpellPatchTarget {
    /// Sets `attribute` on a spell. Returns false if the spell does not exist.
    fn apply_attribute(&mut self, spell_id: u32, attribute: SpellAttribute) -> bool;
}

/// In-memory game data.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    spells: HashMap<u32, HashSet<SpellAttribute>>,
    maps: HashMap<u32, (MapKind, DifficultySet)>,
    gameobjects: HashSet<u32>,
    battlegrounds: HashSet<u32>,
    achievement_criteria: HashSet<u32>,
    outdoor_pvp_type_count: u32,
    quests: HashSet<u32>,
}

impl StaticCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds spell definitions.
    #[must_use]
    pub fn with_spells(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        for id in ids {
            self.spells.entry(id).or_default();
        }
        self
    }

    /// Adds a map.
    #[must_use]
    pub fn with_map(mut self, map_id: u32, kind: MapKind, difficulties: DifficultySet) -> Self {
        self.maps.insert(map_id, (kind, difficulties));
        self
    }

    /// Adds gameobject templates.
    #[must_use]
    pub fn with_gameobjects(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.gameobjects.extend(ids);
        self
    }

    /// Adds battleground definitions.
    #[must_use]
    pub fn with_battlegrounds(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.battlegrounds.extend(ids);
        self
    }

    /// Adds achievement criteria.
    #[must_use]
    pub fn with_achievement_criteria(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.achievement_criteria.extend(ids);
        self
    }

    /// Sets the exclusive upper bound of outdoor PvP type ids.
    #[must_use]
    pub fn with_outdoor_pvp_type_count(mut self, count: u32) -> Self {
        self.outdoor_pvp_type_count = count;
        self
    }

    /// Adds quest templates.
    #[must_use]
    pub fn with_quests(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.quests.extend(ids);
        self
    }

    /// Returns true if `attribute` has been applied to a spell.
    #[must_use]
    pub fn has_attribute(&self, spell_id: u32, attribute: SpellAttribute) -> bool {
        self.spells
            .get(&spell_id)
            .is_some_and(|attributes| attributes.contains(&attribute))
    }
}

impl SpellCatalog for StaticCatalog {
    fn contains_spell(&self, spell_id: u32) -> bool {
        self.spells.contains_key(&spell_id)
    }
}

impl MapCatalog for StaticCatalog {
    fn map_kind(&self, map_id: u32) -> Option<MapKind> {
        self.maps.get(&map_id).map(|(kind, _)| *kind)
    }

    fn difficulties(&self, map_id: u32) -> DifficultySet {
        self.maps
            .get(&map_id)
            .map_or_else(DifficultySet::empty, |(_, difficulties)| *difficulties)
    }
}

impl TemplateCatalog for StaticCatalog {
    fn contains_gameobject(&self, entry: u32) -> bool {
        self.gameobjects.contains(&entry)
    }

    fn contains_battleground(&self, entry: u32) -> bool {
        self.battlegrounds.contains(&entry)
    }

    fn contains_achievement_criteria(&self, entry: u32) -> bool {
        self.achievement_criteria.contains(&entry)
    }

    fn outdoor_pvp_type_count(&self) -> u32 {
        self.outdoor_pvp_type_count
    }
}

impl QuestCatalog for StaticCatalog {
    fn contains_quest(&self, quest_id: u32) -> bool {
        self.quests.contains(&quest_id)
    }
}

impl SpellPatchTarget for StaticCatalog {
    fn apply_attribute(&mut self, spell_id: u32, attribute: SpellAttribute) -> bool {
        match self.spells.get_mut(&spell_id) {
            Some(attributes) => {
                attributes.insert(attribute);
                true
            }
            None => false,
        }
    }
}

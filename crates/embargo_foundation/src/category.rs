//! Disable categories.
//!
//! The set is closed: every category has its own acceptance rule in the loader
//! and its own branch in the evaluator.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The feature domain a disable rule applies to.
///
/// Discriminants match the `category` column of the persisted rule table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Category {
    /// A spell, optionally restricted by caster kind, map, and area.
    Spell = 0,
    /// A quest.
    Quest = 1,
    /// A map, optionally restricted per difficulty.
    Map = 2,
    /// A battleground.
    Battleground = 3,
    /// An achievement criterion.
    AchievementCriteria = 4,
    /// An outdoor PvP zone type.
    OutdoorPvp = 5,
    /// Spatial-query (vmap) capabilities of a map.
    Vmap = 6,
    /// Line-of-sight blocking of a gameobject.
    GameObjectLos = 7,
    /// A map as seen by the dungeon finder.
    LfgMap = 8,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 9;

    /// All categories in discriminant order.
    pub const ALL: [Category; Self::COUNT] = [
        Self::Spell,
        Self::Quest,
        Self::Map,
        Self::Battleground,
        Self::AchievementCriteria,
        Self::OutdoorPvp,
        Self::Vmap,
        Self::GameObjectLos,
        Self::LfgMap,
    ];

    /// Dense index in `0..Category::COUNT`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The raw discriminant as stored in the rule table.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Looks up a category by its raw discriminant.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Spell),
            1 => Some(Self::Quest),
            2 => Some(Self::Map),
            3 => Some(Self::Battleground),
            4 => Some(Self::AchievementCriteria),
            5 => Some(Self::OutdoorPvp),
            6 => Some(Self::Vmap),
            7 => Some(Self::GameObjectLos),
            8 => Some(Self::LfgMap),
            _ => None,
        }
    }

    /// Human-readable name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spell => "spell",
            Self::Quest => "quest",
            Self::Map => "map",
            Self::Battleground => "battleground",
            Self::AchievementCriteria => "achievement-criterion",
            Self::OutdoorPvp => "outdoor-pvp",
            Self::Vmap => "vmap-capability",
            Self::GameObjectLos => "gameobject-line-of-sight",
            Self::LfgMap => "lfg-map",
        }
    }

    /// Returns true if stored flags take part in evaluation for this category.
    ///
    /// For the other categories a stored rule disables unconditionally.
    #[must_use]
    pub const fn uses_flags(self) -> bool {
        matches!(self, Self::Spell | Self::Map | Self::LfgMap | Self::Vmap)
    }
}

impl TryFrom<u32> for Category {
    type Error = Error;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or_else(|| Error::unknown_category(raw))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

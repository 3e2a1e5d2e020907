//! Map topology and difficulty tiers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::flags::MapDisableFlags;

/// A difficulty tier index.
///
/// Dungeons and raids share the index space: dungeons use 0 and 1, raids use
/// all four tiers. The index is always in `0..Difficulty::COUNT`, also when
/// deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Difficulty(u8);

impl Difficulty {
    /// Number of difficulty tiers.
    pub const COUNT: u8 = 4;

    /// Dungeon normal mode.
    pub const DUNGEON_NORMAL: Self = Self(0);
    /// Dungeon heroic mode.
    pub const DUNGEON_HEROIC: Self = Self(1);
    /// Raid, 10 players, normal mode.
    pub const RAID_10_NORMAL: Self = Self(0);
    /// Raid, 25 players, normal mode.
    pub const RAID_25_NORMAL: Self = Self(1);
    /// Raid, 10 players, heroic mode.
    pub const RAID_10_HEROIC: Self = Self(2);
    /// Raid, 25 players, heroic mode.
    pub const RAID_25_HEROIC: Self = Self(3);

    /// Creates a difficulty from its index, if in range.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// The tier index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The map disable bit that matches this tier.
    #[must_use]
    pub const fn status_flag(self) -> MapDisableFlags {
        MapDisableFlags::from_bits_retain(1 << self.0)
    }

    /// The tier `steps` below this one, if any.
    const fn lower(self, steps: u8) -> Option<Self> {
        match self.0.checked_sub(steps) {
            Some(index) => Some(Self(index)),
            None => None,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index).ok_or_else(|| Error::invalid_difficulty(index))
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "difficulty {}", self.0)
    }
}

/// Topology class of a map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MapKind {
    /// Open world, not instanced.
    Common,
    /// Dungeon instance.
    Instance,
    /// Raid instance.
    Raid,
    /// Battleground instance.
    Battleground,
    /// Arena instance.
    Arena,
}

impl MapKind {
    /// Dungeon or raid.
    #[must_use]
    pub const fn is_dungeon(self) -> bool {
        matches!(self, Self::Instance | Self::Raid)
    }

    /// Raid.
    #[must_use]
    pub const fn is_raid(self) -> bool {
        matches!(self, Self::Raid)
    }

    /// Battleground or arena.
    #[must_use]
    pub const fn is_pvp(self) -> bool {
        matches!(self, Self::Battleground | Self::Arena)
    }
}

impl fmt::Display for MapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Common => "world",
            Self::Instance => "instance",
            Self::Raid => "raid",
            Self::Battleground => "battleground",
            Self::Arena => "arena",
        };
        f.write_str(name)
    }
}

/// The difficulty tiers a map has content data for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DifficultySet(u8);

impl DifficultySet {
    /// No tiers.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns a new set with `difficulty` added.
    #[must_use]
    pub const fn with(self, difficulty: Difficulty) -> Self {
        Self(self.0 | (1 << difficulty.0))
    }

    /// Returns true if data exists for `difficulty`.
    #[must_use]
    pub const fn contains(self, difficulty: Difficulty) -> bool {
        self.0 & (1 << difficulty.0) != 0
    }

    /// Returns true if no tier has data.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Status bits for every tier in the set.
    #[must_use]
    pub const fn status_flags(self) -> MapDisableFlags {
        MapDisableFlags::from_bits_retain(self.0)
    }

    /// Resolves `requested` to the highest tier with data.
    ///
    /// Heroic raid tiers fall back to the normal tier of the same raid size
    /// first, every other tier falls back by one. After that one more step
    /// down is tried. Returns `None` when nothing on the way has data.
    #[must_use]
    pub const fn downscale(self, requested: Difficulty) -> Option<Difficulty> {
        if self.contains(requested) {
            return Some(requested);
        }
        let step = if requested.0 > Difficulty::RAID_25_NORMAL.0 {
            2
        } else {
            1
        };
        let Some(first) = requested.lower(step) else {
            return None;
        };
        if self.contains(first) {
            return Some(first);
        }
        let Some(second) = first.lower(1) else {
            return None;
        };
        if self.contains(second) {
            Some(second)
        } else {
            None
        }
    }
}

impl FromIterator<Difficulty> for DifficultySet {
    fn from_iter<I: IntoIterator<Item = Difficulty>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

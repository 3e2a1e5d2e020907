//! Per-category flag sets.
//!
//! Rule flags are stored as a raw `u8`; these types give the bits names.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Flags of a spell disable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct SpellDisableFlags: u8 {
        /// Disabled for players.
        const PLAYER = 1 << 0;
        /// Disabled for creatures (pets included).
        const CREATURE = 1 << 1;
        /// Disabled for pets.
        const PET = 1 << 2;
        /// Disabled outside of spellcasting, e.g. for learning or listing.
        const DEPRECATED = 1 << 3;
        /// Restricted to the maps in `params0`.
        const MAP = 1 << 4;
        /// Restricted to the areas in `params1`.
        const AREA = 1 << 5;
        /// The spell no longer needs line of sight to its target.
        const LOS = 1 << 6;
    }
}

impl SpellDisableFlags {
    /// Returns true if `raw` is nonzero and within the known bit range.
    #[must_use]
    pub const fn is_valid_raw(raw: u8) -> bool {
        raw != 0 && raw <= Self::all().bits()
    }
}

bitflags::bitflags! {
    /// Difficulty status bits of a map disable.
    ///
    /// Bit `1 << d` disables difficulty index `d`. Dungeon and raid names
    /// alias the same bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct MapDisableFlags: u8 {
        /// Dungeon normal mode.
        const DUNGEON_NORMAL = 1 << 0;
        /// Dungeon heroic mode.
        const DUNGEON_HEROIC = 1 << 1;
        /// Raid 10-player normal.
        const RAID_10_NORMAL = 1 << 0;
        /// Raid 25-player normal.
        const RAID_25_NORMAL = 1 << 1;
        /// Raid 10-player heroic.
        const RAID_10_HEROIC = 1 << 2;
        /// Raid 25-player heroic.
        const RAID_25_HEROIC = 1 << 3;
    }
}

bitflags::bitflags! {
    /// Spatial-query capabilities, both as requested and as disabled.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct VmapDisableFlags: u8 {
        /// Area flag lookups.
        const AREAFLAG = 1 << 0;
        /// Height queries.
        const HEIGHT = 1 << 1;
        /// Line-of-sight queries.
        const LOS = 1 << 2;
        /// Liquid status lookups.
        const LIQUIDSTATUS = 1 << 3;
    }
}

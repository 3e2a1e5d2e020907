//! Integration tests for difficulties and flag sets
//!
//! Tests status bits, downscaling, and the raw flag validity rules.

use embargo_foundation::{
    Difficulty, DifficultySet, ErrorKind, MapDisableFlags, SpellDisableFlags,
    VmapDisableFlags,
};

// =============================================================================
// Flag Sets
// =============================================================================

#[test]
fn spell_flag_range() {
    assert!(!SpellDisableFlags::is_valid_raw(0));
    assert!(SpellDisableFlags::is_valid_raw(0x01));
    assert!(SpellDisableFlags::is_valid_raw(0x7F));
    assert!(!SpellDisableFlags::is_valid_raw(0x80));
}

#[test]
fn map_flags_reject_high_bits() {
    assert!(MapDisableFlags::from_bits(0x0F).is_some());
    assert!(MapDisableFlags::from_bits(0x10).is_none());
}

#[test]
fn vmap_flag_values() {
    assert_eq!(VmapDisableFlags::AREAFLAG.bits(), 0x01);
    assert_eq!(VmapDisableFlags::HEIGHT.bits(), 0x02);
    assert_eq!(VmapDisableFlags::LOS.bits(), 0x04);
    assert_eq!(VmapDisableFlags::LIQUIDSTATUS.bits(), 0x08);
}

// =============================================================================
// Downscaling
// =============================================================================

#[test]
fn set_status_flags_cover_each_tier() {
    let set: DifficultySet = [Difficulty::RAID_10_NORMAL, Difficulty::RAID_25_HEROIC]
        .into_iter()
        .collect();
    assert_eq!(
        set.status_flags(),
        MapDisableFlags::RAID_10_NORMAL | MapDisableFlags::RAID_25_HEROIC
    );
}

#[test]
fn full_raid_never_downscales() {
    let set: DifficultySet = (0..Difficulty::COUNT).filter_map(Difficulty::new).collect();
    for difficulty in (0..Difficulty::COUNT).filter_map(Difficulty::new) {
        assert_eq!(set.downscale(difficulty), Some(difficulty));
    }
}

#[test]
fn heroic_raid_downscale_chain() {
    // Only 10-player normal has data: 25 heroic -> 25 normal (missing) -> 10 normal.
    let set = DifficultySet::empty().with(Difficulty::RAID_10_NORMAL);
    assert_eq!(
        set.downscale(Difficulty::RAID_25_HEROIC),
        Some(Difficulty::RAID_10_NORMAL)
    );
    // 10 heroic -> 10 normal directly.
    assert_eq!(
        set.downscale(Difficulty::RAID_10_HEROIC),
        Some(Difficulty::RAID_10_NORMAL)
    );
}

#[test]
fn downscale_never_climbs() {
    let set = DifficultySet::empty().with(Difficulty::RAID_10_NORMAL);
    let heroic_only = DifficultySet::empty().with(Difficulty::RAID_25_HEROIC);

    assert_eq!(heroic_only.downscale(Difficulty::RAID_10_NORMAL), None);
    assert_eq!(set.downscale(Difficulty::RAID_10_NORMAL), Some(Difficulty::RAID_10_NORMAL));
}

#[test]
fn difficulty_from_raw_index() {
    for index in 0..Difficulty::COUNT {
        let difficulty = Difficulty::try_from(index).unwrap();
        assert_eq!(difficulty.index(), index);
    }
    for index in [Difficulty::COUNT, 8, 9, u8::MAX] {
        let err = Difficulty::try_from(index).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidDifficulty(index));
    }
}

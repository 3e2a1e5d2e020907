//! Integration tests for collaborator catalogs
//!
//! Tests the in-memory catalog through the trait objects the loader uses.

use embargo_foundation::{Difficulty, DifficultySet, MapKind};
use embargo_storage::{
    MapCatalog, QuestCatalog, SpellAttribute, SpellCatalog, SpellPatchTarget, StaticCatalog,
    TemplateCatalog,
};

fn catalog() -> StaticCatalog {
    StaticCatalog::new()
        .with_spells([133, 116])
        .with_map(
            631,
            MapKind::Raid,
            [Difficulty::RAID_10_NORMAL, Difficulty::RAID_25_NORMAL]
                .into_iter()
                .collect(),
        )
        .with_battlegrounds([1, 2])
        .with_outdoor_pvp_type_count(7)
        .with_quests([100])
}

#[test]
fn usable_as_trait_objects() {
    let catalog = catalog();
    let spells: &dyn SpellCatalog = &catalog;
    let maps: &dyn MapCatalog = &catalog;
    let templates: &dyn TemplateCatalog = &catalog;
    let quests: &dyn QuestCatalog = &catalog;

    assert!(spells.contains_spell(116));
    assert_eq!(maps.map_kind(631), Some(MapKind::Raid));
    assert!(maps.difficulties(631).contains(Difficulty::RAID_25_NORMAL));
    assert!(!maps.difficulties(631).contains(Difficulty::RAID_25_HEROIC));
    assert!(templates.contains_battleground(2));
    assert!(templates.contains_outdoor_pvp(6));
    assert!(quests.contains_quest(100));
}

#[test]
fn unknown_map_has_no_difficulties() {
    let catalog = catalog();
    assert_eq!(catalog.map_kind(9999), None);
    assert_eq!(catalog.difficulties(9999), DifficultySet::empty());
}

#[test]
fn patch_target_through_trait_object() {
    let mut catalog = catalog();
    let target: &mut dyn SpellPatchTarget = &mut catalog;

    assert!(target.apply_attribute(133, SpellAttribute::IgnoreLineOfSight));
    assert!(!target.apply_attribute(1, SpellAttribute::IgnoreLineOfSight));
    assert!(catalog.has_attribute(133, SpellAttribute::IgnoreLineOfSight));
}

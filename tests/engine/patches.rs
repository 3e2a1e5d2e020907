//! Integration tests for spell patches
//!
//! Tests that loads describe patches and the integration step applies them.

use embargo_engine::{LoadSources, Loader, LoaderConfig, RawRule, SpellPatch, apply_spell_patches};
use embargo_foundation::Category;
use embargo_storage::{SpellAttribute, StaticCatalog};

#[test]
fn one_patch_per_los_spell() {
    let catalog = StaticCatalog::new().with_spells([133, 116, 2_825]);
    let config = LoaderConfig::default();
    let outcome = Loader::new(&config, LoadSources::from_catalog(&catalog)).load([
        RawRule::of(Category::Spell, 133, 0x41),
        RawRule::of(Category::Spell, 116, 0x01),
        RawRule::of(Category::Spell, 2_825, 0x43),
        RawRule::of(Category::Spell, 5, 0x48),
    ]);

    assert_eq!(outcome.patches, vec![
        SpellPatch::ignore_line_of_sight(133),
        SpellPatch::ignore_line_of_sight(2_825),
    ]);
}

#[test]
fn loader_never_mutates_spells() {
    let mut catalog = StaticCatalog::new().with_spells([133]);
    let config = LoaderConfig::default();
    let patches = Loader::new(&config, LoadSources::from_catalog(&catalog))
        .load([RawRule::of(Category::Spell, 133, 0x41)])
        .patches;

    assert!(!catalog.has_attribute(133, SpellAttribute::IgnoreLineOfSight));

    let summary = apply_spell_patches(&mut catalog, &patches);
    assert_eq!(summary.applied, 1);
    assert!(summary.missing.is_empty());
    assert!(catalog.has_attribute(133, SpellAttribute::IgnoreLineOfSight));
}

//! Integration tests for the Loader
//!
//! Tests acceptance and rejection per category, reports, and parsing modes.

use embargo_engine::{LoadOutcome, LoadSources, LoadWarning, Loader, LoaderConfig, RawRule};
use embargo_foundation::{Category, Difficulty, DifficultySet, ErrorKind, MapKind, ParamParsing};
use embargo_storage::StaticCatalog;

fn catalog() -> StaticCatalog {
    let raid: DifficultySet = (0..Difficulty::COUNT).filter_map(Difficulty::new).collect();
    StaticCatalog::new()
        .with_spells([133, 116, 2_825])
        .with_map(0, MapKind::Common, DifficultySet::empty())
        .with_map(631, MapKind::Raid, raid)
        .with_map(559, MapKind::Arena, DifficultySet::empty())
        .with_gameobjects([180_322])
        .with_battlegrounds([1, 2, 3])
        .with_achievement_criteria([4_224])
        .with_outdoor_pvp_type_count(7)
}

fn load_with(config: &LoaderConfig, rows: Vec<RawRule>) -> LoadOutcome {
    let catalog = catalog();
    Loader::new(config, LoadSources::from_catalog(&catalog)).load(rows)
}

fn load(rows: Vec<RawRule>) -> LoadOutcome {
    load_with(&LoaderConfig::default(), rows)
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn report_counts_rows() {
    let outcome = load(vec![
        RawRule::of(Category::Spell, 133, 0x01),
        RawRule::of(Category::Spell, 133, 0x02),
        RawRule::of(Category::Spell, 1, 0x01),
        RawRule::new(77, 1, 0),
    ]);

    assert_eq!(outcome.report.rows_read, 4);
    assert_eq!(outcome.report.accepted, 2);
    assert_eq!(outcome.report.overwritten, 1);
    assert_eq!(outcome.report.rejections.len(), 2);
    assert_eq!(outcome.store.len(), 1);
}

#[test]
fn rejections_name_their_rows() {
    let outcome = load(vec![
        RawRule::of(Category::Quest, 1, 0),
        RawRule::of(Category::Map, 559, 0),
        RawRule::of(Category::Quest, 2, 0),
        RawRule::of(Category::Battleground, 99, 0),
    ]);

    let rows: Vec<_> = outcome
        .report
        .rejections
        .iter()
        .map(|rejection| (rejection.row, rejection.entry))
        .collect();
    assert_eq!(rows, vec![(1, 559), (3, 99)]);
}

#[test]
fn source_name_flows_into_errors() {
    let config = LoaderConfig::default().with_source_name("world.disables");
    let outcome = load_with(&config, vec![RawRule::new(42, 1, 0)]);

    let context = outcome.report.rejections[0].error.context.clone().unwrap();
    assert_eq!(context.source.as_deref(), Some("world.disables"));
    assert_eq!(context.row, Some(0));
}

// =============================================================================
// Per-Category Acceptance
// =============================================================================

#[test]
fn arena_map_rejected_for_both_map_categories() {
    let outcome = load(vec![
        RawRule::of(Category::Map, 559, 0),
        RawRule::of(Category::LfgMap, 559, 0),
    ]);

    for rejection in &outcome.report.rejections {
        assert!(matches!(rejection.error.kind, ErrorKind::ForbiddenMapKind {
            kind: MapKind::Arena,
            ..
        }));
    }
    assert_eq!(outcome.report.rejections.len(), 2);
}

#[test]
fn raid_accepts_any_tier_with_data() {
    let outcome = load(vec![RawRule::of(Category::Map, 631, 0x0F)]);
    assert!(outcome.report.rejections.is_empty());
    assert_eq!(outcome.store.map_profile(631).map(|p| p.kind), Some(MapKind::Raid));
}

#[test]
fn vmap_accepts_any_map_kind() {
    let outcome = load(vec![
        RawRule::of(Category::Vmap, 0, 0x09),
        RawRule::of(Category::Vmap, 631, 0x06),
        RawRule::of(Category::Vmap, 559, 0x04),
    ]);
    assert_eq!(outcome.report.accepted, 3);
}

#[test]
fn achievement_criteria_must_exist() {
    let outcome = load(vec![
        RawRule::of(Category::AchievementCriteria, 4_224, 0),
        RawRule::of(Category::AchievementCriteria, 4_225, 0),
    ]);
    assert!(outcome.store.contains(Category::AchievementCriteria, 4_224));
    assert!(matches!(
        outcome.report.rejections[0].error.kind,
        ErrorKind::MissingEntity {
            category: Category::AchievementCriteria,
            entry: 4_225
        }
    ));
}

#[test]
fn outdoor_pvp_zero_is_invalid() {
    let outcome = load(vec![
        RawRule::of(Category::OutdoorPvp, 0, 0),
        RawRule::of(Category::OutdoorPvp, 6, 0),
    ]);
    assert!(!outcome.store.contains(Category::OutdoorPvp, 0));
    assert!(outcome.store.contains(Category::OutdoorPvp, 6));
}

// =============================================================================
// Warnings
// =============================================================================

#[test]
fn unused_params_on_presence_category() {
    let outcome = load(vec![
        RawRule::of(Category::Battleground, 2, 0)
            .with_params0("1")
            .with_params1("2"),
    ]);

    assert!(outcome.store.contains(Category::Battleground, 2));
    assert_eq!(outcome.report.warnings.len(), 2);
    assert!(
        outcome
            .report
            .warnings
            .iter()
            .all(|warning| matches!(warning, LoadWarning::UnusedParams { entry: 2, .. }))
    );
}

#[test]
fn rejected_rows_leave_no_warnings() {
    let outcome = load(vec![
        RawRule::of(Category::Spell, 133, 0x11)
            .with_params0("1,bad")
            .with_params1("9"),
    ]);
    assert!(outcome.report.warnings.is_empty());
    assert_eq!(outcome.report.rejections.len(), 1);
}

#[test]
fn lenient_parsing_from_builder() {
    let config = LoaderConfig::default().with_param_parsing(ParamParsing::Lenient);
    let outcome = load_with(&config, vec![
        RawRule::of(Category::Spell, 133, 0x21).with_params1("12, twelve, 13"),
    ]);

    let record = outcome.store.get(Category::Spell, 133).unwrap();
    assert_eq!(record.params1().iter().collect::<Vec<_>>(), vec![12, 13]);
    assert!(matches!(
        &outcome.report.warnings[..],
        [LoadWarning::DroppedParam { entry: 133, token }] if token == "twelve"
    ));
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn same_rows_same_store() {
    let rows = vec![
        RawRule::of(Category::Spell, 133, 0x31)
            .with_params0("0,1")
            .with_params1("12"),
        RawRule::of(Category::Map, 631, 0x0C),
        RawRule::of(Category::Vmap, 0, 0x05),
        RawRule::of(Category::Quest, 5, 0),
    ];

    let first = load(rows.clone());
    let second = load(rows);
    assert_eq!(first.store, second.store);
    assert_eq!(first.patches, second.patches);
}

//! Integration tests for Category
//!
//! Tests raw discriminants, names, and conversion failures.

use embargo_foundation::{Category, ErrorKind};

// =============================================================================
// Raw Discriminants
// =============================================================================

#[test]
fn raw_values_match_table_column() {
    let expected = [
        (Category::Spell, 0),
        (Category::Quest, 1),
        (Category::Map, 2),
        (Category::Battleground, 3),
        (Category::AchievementCriteria, 4),
        (Category::OutdoorPvp, 5),
        (Category::Vmap, 6),
        (Category::GameObjectLos, 7),
        (Category::LfgMap, 8),
    ];
    for (category, raw) in expected {
        assert_eq!(category.raw(), raw);
        assert_eq!(Category::from_raw(raw), Some(category));
    }
}

#[test]
fn all_is_dense() {
    for (index, category) in Category::ALL.iter().enumerate() {
        assert_eq!(category.index(), index);
    }
    assert_eq!(Category::ALL.len(), Category::COUNT);
}

#[test]
fn unknown_raw_value() {
    assert_eq!(Category::from_raw(9), None);
    let err = Category::try_from(200u32).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownCategory(200));
    assert!(err.to_string().contains("200"));
}

// =============================================================================
// Flag Usage
// =============================================================================

#[test]
fn categories_that_read_flags() {
    let reading: Vec<_> = Category::ALL
        .into_iter()
        .filter(|category| category.uses_flags())
        .collect();
    assert_eq!(reading, vec![
        Category::Spell,
        Category::Map,
        Category::Vmap,
        Category::LfgMap
    ]);
}

#[test]
fn display_uses_name() {
    for category in Category::ALL {
        assert_eq!(category.to_string(), category.name());
    }
}

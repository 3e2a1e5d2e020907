//! Quest rule finalization.
//!
//! Quest templates load after the rule table, so quest rules are accepted
//! blindly by the loader and checked here once the quest store is ready.

use embargo_foundation::Category;
use embargo_storage::{QuestCatalog, RuleStore};
use tracing::{info, warn};

use crate::config::LoaderConfig;

/// What the quest pass found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuestCheckReport {
    /// Quest rules examined.
    pub checked: usize,
    /// Rules removed because the quest does not exist, ascending.
    pub removed: Vec<u32>,
    /// Kept rules with non-zero flags, ascending.
    pub flagged: Vec<u32>,
}

/// Removes quest rules that name missing quests.
///
/// Returns the pruned snapshot; `store` itself is untouched. Running the pass
/// again on its own output changes nothing.
pub fn finalize_quests<Q>(
    store: &RuleStore,
    quests: &Q,
    config: &LoaderConfig,
) -> (RuleStore, QuestCheckReport)
where
    Q: QuestCatalog + ?Sized,
{
    let mut entries: Vec<(u32, u8)> = store
        .entries(Category::Quest)
        .map(|(entry, record)| (entry, record.flags()))
        .collect();
    entries.sort_unstable_by_key(|(entry, _)| *entry);

    let mut report = QuestCheckReport {
        checked: entries.len(),
        ..QuestCheckReport::default()
    };
    if entries.is_empty() {
        info!("checked 0 quest disables");
        return (store.clone(), report);
    }

    let mut pruned = store.clone();
    for (entry, flags) in entries {
        if !quests.contains_quest(entry) {
            warn!(quest = entry, "quest {entry} does not exist, disable removed");
            pruned = pruned.without(Category::Quest, entry);
            report.removed.push(entry);
        } else if flags != 0 {
            if config.warn_unused_data {
                warn!(quest = entry, flags, "disable flags specified for quest {entry}, useless data");
            }
            report.flagged.push(entry);
        }
    }

    info!(removed = report.removed.len(), "checked {} quest disables", report.checked);
    (pruned, report)
}

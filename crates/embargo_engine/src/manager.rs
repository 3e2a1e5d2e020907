//! The disable service.
//!
//! [`DisableManager`] owns the current [`RuleStore`] snapshot. Loads build a
//! new snapshot off to the side and publish it with one atomic swap, so
//! queries never lock and never observe a half-built table.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use arc_swap::ArcSwap;
use embargo_foundation::{Category, SpellDisableFlags, VmapDisableFlags};
use embargo_storage::{QuestCatalog, RuleStore};
use tracing::{debug, info};

use crate::config::LoaderConfig;
use crate::evaluator::{Evaluator, QueryContext};
use crate::finalize::{QuestCheckReport, finalize_quests};
use crate::loader::{LoadReport, LoadSources, Loader, RawRule};
use crate::patch::SpellPatch;

/// What a load hands back to the host once the new snapshot is live.
#[derive(Clone, Debug)]
pub struct LoadSummary {
    /// Spell patches for the host to apply.
    pub patches: Vec<SpellPatch>,
    /// Statistics and diagnostics.
    pub report: LoadReport,
    /// Result of the quest pass, for loads that ran one.
    pub quests: Option<QuestCheckReport>,
}

/// Owns the live rule snapshot and answers disable queries.
///
/// `DisableManager` is `Send + Sync`; share it behind an `Arc` or a static.
///
/// # Example
///
/// ```
/// use embargo_engine::{DisableManager, LoadSources, RawRule};
/// use embargo_foundation::Category;
/// use embargo_storage::StaticCatalog;
///
/// let catalog = StaticCatalog::new().with_gameobjects([1000]);
/// let manager = DisableManager::default();
/// manager.load(
///     [RawRule::of(Category::GameObjectLos, 1000, 0)],
///     &LoadSources::from_catalog(&catalog),
/// );
///
/// assert!(manager.is_disabled_for(Category::GameObjectLos, 1000, &Default::default(), 0));
/// ```
pub struct DisableManager {
    config: LoaderConfig,
    snapshot: ArcSwap<RuleStore>,
    loads: AtomicU64,
}

impl DisableManager {
    /// Creates a manager with an empty snapshot.
    #[must_use]
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            snapshot: ArcSwap::from_pointee(RuleStore::new()),
            loads: AtomicU64::new(0),
        }
    }

    /// The loader configuration.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Number of loads published so far.
    #[must_use]
    pub fn load_count(&self) -> u64 {
        self.loads.load(Ordering::Relaxed)
    }

    /// Loads `rows` into a new snapshot and publishes it.
    ///
    /// This is the startup load: quest templates are not available yet, so
    /// quest rules stay unchecked until [`finalize_quests`](Self::finalize_quests).
    /// The previous snapshot is replaced whole. Readers holding it keep a
    /// consistent view until they drop it.
    pub fn load<I>(&self, rows: I, sources: &LoadSources<'_>) -> LoadSummary
    where
        I: IntoIterator<Item = RawRule>,
    {
        let outcome = Loader::new(&self.config, *sources).load(rows);
        self.publish(outcome.store);

        LoadSummary {
            patches: outcome.patches,
            report: outcome.report,
            quests: None,
        }
    }

    /// Replaces the whole rule table while the server is running.
    ///
    /// Quest templates are loaded by then, so the quest pass runs on the new
    /// snapshot before it is published. Readers never see unchecked quest rules.
    pub fn reload<I, Q>(&self, rows: I, sources: &LoadSources<'_>, quests: &Q) -> LoadSummary
    where
        I: IntoIterator<Item = RawRule>,
        Q: QuestCatalog + ?Sized,
    {
        info!(source = %self.config.source_name, "reloading disables");
        let outcome = Loader::new(&self.config, *sources).load(rows);
        let (store, quest_report) = finalize_quests(&outcome.store, quests, &self.config);
        self.publish(store);

        LoadSummary {
            patches: outcome.patches,
            report: outcome.report,
            quests: Some(quest_report),
        }
    }

    fn publish(&self, store: RuleStore) {
        let rules = store.len();
        self.snapshot.store(Arc::new(store));
        let generation = self.loads.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(generation, rules, "disable snapshot published");
    }

    /// Prunes quest rules for missing quests from the live snapshot.
    ///
    /// Call after quest templates are loaded. Safe to call more than once.
    /// A load published concurrently is pruned instead of being overwritten.
    pub fn finalize_quests<Q>(&self, quests: &Q) -> QuestCheckReport
    where
        Q: QuestCatalog + ?Sized,
    {
        let mut report = QuestCheckReport::default();
        self.snapshot.rcu(|current| {
            let (pruned, pass) = finalize_quests(current, quests, &self.config);
            report = pass;
            pruned
        });
        report
    }

    /// The live snapshot. Holding it pins one consistent view of the rules.
    #[must_use]
    pub fn snapshot(&self) -> Arc<RuleStore> {
        self.snapshot.load_full()
    }

    /// Returns true if `entry` is disabled in `category` for this context.
    #[must_use]
    pub fn is_disabled_for(
        &self,
        category: Category,
        entry: u32,
        ctx: &QueryContext,
        query_flags: u8,
    ) -> bool {
        let store = self.snapshot.load();
        Evaluator::is_disabled_for(&store, category, entry, ctx, query_flags)
    }

    /// Same as [`is_disabled_for`](Self::is_disabled_for), with a raw category id.
    ///
    /// # Panics
    ///
    /// Panics if `category` is not a known category id. Callers own the
    /// category space; an unknown id is a programming error.
    #[must_use]
    pub fn is_disabled_for_raw(
        &self,
        category: u32,
        entry: u32,
        ctx: &QueryContext,
        query_flags: u8,
    ) -> bool {
        let Some(category) = Category::from_raw(category) else {
            panic!("invalid disable category {category}");
        };
        self.is_disabled_for(category, entry, ctx, query_flags)
    }

    /// Returns true if any of `flags` is disabled for terrain queries on a map.
    #[must_use]
    pub fn is_vmap_disabled_for(&self, map_id: u32, flags: VmapDisableFlags) -> bool {
        self.is_disabled_for(Category::Vmap, map_id, &QueryContext::none(), flags.bits())
    }

    /// Returns true if a spell is disabled for everyone.
    #[must_use]
    pub fn is_spell_deprecated(&self, spell_id: u32) -> bool {
        self.is_disabled_for(Category::Spell, spell_id, &QueryContext::none(), 0)
    }

    /// Returns true if a spell rule exists with any of `flags`.
    #[must_use]
    pub fn spell_has_flags(&self, spell_id: u32, flags: SpellDisableFlags) -> bool {
        self.snapshot
            .load()
            .get(Category::Spell, spell_id)
            .is_some_and(|record| record.spell_flags().intersects(flags))
    }
}

impl Default for DisableManager {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

impl std::fmt::Debug for DisableManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisableManager")
            .field("config", &self.config)
            .field("rules", &self.snapshot.load().len())
            .field("loads", &self.load_count())
            .finish()
    }
}

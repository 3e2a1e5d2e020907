//! Rule loading and validation.
//!
//! The loader turns raw rule rows into a fresh [`RuleStore`]:
//! 1. Resolves the category of each row
//! 2. Applies the category's acceptance rule against the game data catalogs
//! 3. Stores accepted rows, records a [`Rejection`] for the rest
//! 4. Collects spell patches and soft warnings along the way
//!
//! A bad row never stops the load. A row is either stored whole or not at all.

use std::time::{Duration, Instant};

use embargo_foundation::{
    Category, Error, ErrorContext, MapDisableFlags, MapKind, ParamSet, Result, SpellDisableFlags,
    VmapDisableFlags, parse_param_list,
};
use embargo_storage::{
    MapCatalog, MapProfile, RuleRecord, RuleStore, RuleStoreBuilder, SpellCatalog,
    TemplateCatalog,
};
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::LoaderConfig;
use crate::patch::SpellPatch;

// =============================================================================
// Input
// =============================================================================

/// One row of the rule table, as persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawRule {
    /// Raw category discriminant.
    pub category: u32,
    /// Id of the disabled entity.
    pub entry: u32,
    /// Category-specific flags.
    pub flags: u8,
    /// First comma-separated id list.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params0: String,
    /// Second comma-separated id list.
    #[cfg_attr(feature = "serde", serde(default))]
    pub params1: String,
}

impl RawRule {
    /// Creates a row with empty parameter lists.
    #[must_use]
    pub fn new(category: u32, entry: u32, flags: u8) -> Self {
        Self {
            category,
            entry,
            flags,
            params0: String::new(),
            params1: String::new(),
        }
    }

    /// Creates a row for a known category.
    #[must_use]
    pub fn of(category: Category, entry: u32, flags: u8) -> Self {
        Self::new(category.raw(), entry, flags)
    }

    /// Sets the first parameter list.
    #[must_use]
    pub fn with_params0(mut self, params: impl Into<String>) -> Self {
        self.params0 = params.into();
        self
    }

    /// Sets the second parameter list.
    #[must_use]
    pub fn with_params1(mut self, params: impl Into<String>) -> Self {
        self.params1 = params.into();
        self
    }

    fn has_params(&self) -> bool {
        !self.params0.trim().is_empty() || !self.params1.trim().is_empty()
    }
}

/// The game data a load validates against.
#[derive(Clone, Copy)]
pub struct LoadSources<'a> {
    /// Spell definitions.
    pub spells: &'a dyn SpellCatalog,
    /// Map definitions and difficulty metadata.
    pub maps: &'a dyn MapCatalog,
    /// Gameobject, battleground, outdoor PvP and achievement templates.
    pub templates: &'a dyn TemplateCatalog,
}

impl<'a> LoadSources<'a> {
    /// Bundles separate catalogs.
    #[must_use]
    pub fn new(
        spells: &'a dyn SpellCatalog,
        maps: &'a dyn MapCatalog,
        templates: &'a dyn TemplateCatalog,
    ) -> Self {
        Self {
            spells,
            maps,
            templates,
        }
    }

    /// Uses one catalog for everything.
    #[must_use]
    pub fn from_catalog<C>(catalog: &'a C) -> Self
    where
        C: SpellCatalog + MapCatalog + TemplateCatalog,
    {
        Self::new(catalog, catalog, catalog)
    }
}

// =============================================================================
// Output
// =============================================================================

/// Which parameter list a warning is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamList {
    /// `params0`.
    First,
    /// `params1`.
    Second,
}

/// A problem with an accepted row that does not affect its meaning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadWarning {
    /// Flags were given for a rule that never reads them.
    UnusedFlags {
        /// Category of the rule.
        category: Category,
        /// The entity id.
        entry: u32,
        /// The ignored flags.
        flags: u8,
    },
    /// A parameter list was given that the rule never reads.
    UnusedParams {
        /// Category of the rule.
        category: Category,
        /// The entity id.
        entry: u32,
        /// The ignored list.
        list: ParamList,
    },
    /// A dungeon or raid map rule with no difficulty bits; it can never match.
    NeverMatches {
        /// Category of the rule.
        category: Category,
        /// The map id.
        entry: u32,
    },
    /// A parameter token was dropped under lenient parsing.
    DroppedParam {
        /// The entity id.
        entry: u32,
        /// The dropped token.
        token: String,
    },
}

/// A row that was not stored.
#[derive(Clone, Debug)]
pub struct Rejection {
    /// Zero-based row index in the input.
    pub row: usize,
    /// The entity id of the row.
    pub entry: u32,
    /// Why the row was rejected.
    pub error: Error,
}

/// Statistics and diagnostics of one load.
#[derive(Clone, Debug, Default)]
pub struct LoadReport {
    /// Rows seen.
    pub rows_read: usize,
    /// Rows stored, overwrites included.
    pub accepted: usize,
    /// Rows that replaced an earlier row with the same key.
    pub overwritten: usize,
    /// Rows that were not stored.
    pub rejections: Vec<Rejection>,
    /// Soft problems on stored rows.
    pub warnings: Vec<LoadWarning>,
    /// Wall time of the load.
    pub elapsed: Duration,
}

/// The result of a load: a new snapshot plus everything the host must act on.
#[derive(Clone, Debug)]
pub struct LoadOutcome {
    /// The new snapshot.
    pub store: RuleStore,
    /// Spell patches for the host to apply.
    pub patches: Vec<SpellPatch>,
    /// Statistics and diagnostics.
    pub report: LoadReport,
}

/// A validated row, ready to be stored.
struct Accepted {
    category: Category,
    record: RuleRecord,
    patch: Option<SpellPatch>,
    profile: Option<MapProfile>,
    warnings: Vec<LoadWarning>,
}

impl Accepted {
    fn new(category: Category, record: RuleRecord) -> Self {
        Self {
            category,
            record,
            patch: None,
            profile: None,
            warnings: Vec::new(),
        }
    }
}

// =============================================================================
// Loader
// =============================================================================

/// Validates raw rows and builds rule store snapshots.
pub struct Loader<'a> {
    config: &'a LoaderConfig,
    sources: LoadSources<'a>,
}

impl<'a> Loader<'a> {
    /// Creates a loader over the given catalogs.
    #[must_use]
    pub fn new(config: &'a LoaderConfig, sources: LoadSources<'a>) -> Self {
        Self { config, sources }
    }

    /// Builds a new snapshot from `rows`.
    ///
    /// Every call starts from an empty store; nothing carries over from
    /// earlier loads.
    pub fn load<I>(&self, rows: I) -> LoadOutcome
    where
        I: IntoIterator<Item = RawRule>,
    {
        let started = Instant::now();
        let mut builder = RuleStoreBuilder::new();
        let mut patches = Vec::new();
        let mut report = LoadReport::default();

        for (row, raw) in rows.into_iter().enumerate() {
            report.rows_read += 1;
            match self.accept(&raw) {
                Ok(accepted) => {
                    for warning in &accepted.warnings {
                        log_warning(row, warning);
                    }
                    report.warnings.extend(accepted.warnings);
                    if let Some(profile) = accepted.profile {
                        builder.insert_map_profile(raw.entry, profile);
                    }
                    patches.extend(accepted.patch);
                    if builder
                        .insert(accepted.category, raw.entry, accepted.record)
                        .is_some()
                    {
                        debug!(
                            row,
                            category = %accepted.category,
                            entry = raw.entry,
                            "duplicate disable replaced earlier row"
                        );
                        report.overwritten += 1;
                    }
                    report.accepted += 1;
                }
                Err(error) => {
                    let error = error.with_context(
                        ErrorContext::new()
                            .with_source(self.config.source_name.clone())
                            .with_row(row),
                    );
                    warn!(
                        row,
                        category = raw.category,
                        entry = raw.entry,
                        flags = raw.flags,
                        "{error}, skipped"
                    );
                    report.rejections.push(Rejection {
                        row,
                        entry: raw.entry,
                        error,
                    });
                }
            }
        }

        report.elapsed = started.elapsed();
        if report.rows_read == 0 {
            info!("loaded 0 disables, rule table `{}` is empty", self.config.source_name);
        } else {
            info!(
                rejected = report.rejections.len(),
                elapsed = ?report.elapsed,
                "loaded {} disables",
                report.accepted
            );
        }

        LoadOutcome {
            store: builder.build(),
            patches,
            report,
        }
    }

    /// Applies the acceptance rule of the row's category.
    fn accept(&self, raw: &RawRule) -> Result<Accepted> {
        let category = Category::try_from(raw.category)?;
        let mut accepted = match category {
            Category::Spell => return self.accept_spell(raw),
            Category::Map | Category::LfgMap => self.accept_map(category, raw)?,
            Category::Vmap => self.accept_vmap(raw)?,
            Category::Quest => Accepted::new(category, RuleRecord::new(raw.flags)),
            Category::Battleground
            | Category::OutdoorPvp
            | Category::AchievementCriteria
            | Category::GameObjectLos => self.accept_template(category, raw)?,
        };
        if self.config.warn_unused_data && raw.has_params() {
            let lists = [(ParamList::First, &raw.params0), (ParamList::Second, &raw.params1)];
            for (list, text) in lists {
                if !text.trim().is_empty() {
                    accepted.warnings.push(LoadWarning::UnusedParams {
                        category,
                        entry: raw.entry,
                        list,
                    });
                }
            }
        }
        Ok(accepted)
    }

    fn accept_spell(&self, raw: &RawRule) -> Result<Accepted> {
        let flags = SpellDisableFlags::from_bits_retain(raw.flags);
        let exists = self.sources.spells.contains_spell(raw.entry);
        if !exists && !flags.contains(SpellDisableFlags::DEPRECATED) {
            return Err(Error::missing_entity(Category::Spell, raw.entry));
        }
        if !SpellDisableFlags::is_valid_raw(raw.flags) {
            return Err(Error::invalid_flags(Category::Spell, raw.entry, raw.flags));
        }

        let mut warnings = Vec::new();
        let maps = self.spell_params(
            raw,
            ParamList::First,
            flags.contains(SpellDisableFlags::MAP),
            &mut warnings,
        )?;
        let areas = self.spell_params(
            raw,
            ParamList::Second,
            flags.contains(SpellDisableFlags::AREA),
            &mut warnings,
        )?;

        let mut accepted = Accepted::new(
            Category::Spell,
            RuleRecord::new(raw.flags)
                .with_params0(maps)
                .with_params1(areas),
        );
        accepted.warnings = warnings;
        if flags.contains(SpellDisableFlags::LOS) && exists {
            accepted.patch = Some(SpellPatch::ignore_line_of_sight(raw.entry));
        }
        Ok(accepted)
    }

    /// Parses one spell parameter list if the rule reads it.
    fn spell_params(
        &self,
        raw: &RawRule,
        list: ParamList,
        used: bool,
        warnings: &mut Vec<LoadWarning>,
    ) -> Result<ParamSet> {
        let text = match list {
            ParamList::First => &raw.params0,
            ParamList::Second => &raw.params1,
        };
        if !used {
            if self.config.warn_unused_data && !text.trim().is_empty() {
                warnings.push(LoadWarning::UnusedParams {
                    category: Category::Spell,
                    entry: raw.entry,
                    list,
                });
            }
            return Ok(ParamSet::new());
        }
        let parsed = parse_param_list(raw.entry, text, self.config.param_parsing)?;
        warnings.extend(parsed.dropped.into_iter().map(|token| LoadWarning::DroppedParam {
            entry: raw.entry,
            token,
        }));
        Ok(parsed.ids)
    }

    fn accept_map(&self, category: Category, raw: &RawRule) -> Result<Accepted> {
        let kind = self
            .sources
            .maps
            .map_kind(raw.entry)
            .ok_or_else(|| Error::missing_entity(category, raw.entry))?;
        let difficulties = self.sources.maps.difficulties(raw.entry);

        if kind.is_pvp() {
            return Err(Error::forbidden_map_kind(raw.entry, kind));
        }

        let mut warnings = Vec::new();
        if kind.is_dungeon() {
            let flags = MapDisableFlags::from_bits(raw.flags)
                .ok_or_else(|| Error::invalid_flags(category, raw.entry, raw.flags))?;
            if !difficulties.status_flags().contains(flags) {
                return Err(Error::invalid_flags(category, raw.entry, raw.flags));
            }
            if flags.is_empty() && self.config.warn_unused_data {
                warnings.push(LoadWarning::NeverMatches {
                    category,
                    entry: raw.entry,
                });
            }
        } else if raw.flags != 0 {
            return Err(Error::invalid_flags(category, raw.entry, raw.flags));
        }

        let mut accepted = Accepted::new(category, RuleRecord::new(raw.flags));
        accepted.profile = Some(MapProfile::new(kind, difficulties));
        accepted.warnings = warnings;
        Ok(accepted)
    }

    fn accept_vmap(&self, raw: &RawRule) -> Result<Accepted> {
        let kind = self
            .sources
            .maps
            .map_kind(raw.entry)
            .ok_or_else(|| Error::missing_entity(Category::Vmap, raw.entry))?;
        if self.config.report_vmap_capabilities {
            report_vmap(raw.entry, kind, VmapDisableFlags::from_bits_retain(raw.flags));
        }
        Ok(Accepted::new(Category::Vmap, RuleRecord::new(raw.flags)))
    }

    fn accept_template(&self, category: Category, raw: &RawRule) -> Result<Accepted> {
        let templates = self.sources.templates;
        let exists = match category {
            Category::Battleground => templates.contains_battleground(raw.entry),
            Category::OutdoorPvp => templates.contains_outdoor_pvp(raw.entry),
            Category::AchievementCriteria => templates.contains_achievement_criteria(raw.entry),
            Category::GameObjectLos => templates.contains_gameobject(raw.entry),
            _ => true,
        };
        if !exists {
            return Err(Error::missing_entity(category, raw.entry));
        }

        let mut accepted = Accepted::new(category, RuleRecord::new(raw.flags));
        if raw.flags != 0 && !category.uses_flags() && self.config.warn_unused_data {
            accepted.warnings.push(LoadWarning::UnusedFlags {
                category,
                entry: raw.entry,
                flags: raw.flags,
            });
        }
        Ok(accepted)
    }
}

/// Logs the capabilities a vmap rule turns off, by map topology.
fn report_vmap(map_id: u32, kind: MapKind, flags: VmapDisableFlags) {
    let noted: &[(VmapDisableFlags, &str)] = match kind {
        MapKind::Common => &[
            (VmapDisableFlags::AREAFLAG, "area flag"),
            (VmapDisableFlags::LIQUIDSTATUS, "liquid status"),
        ],
        MapKind::Instance | MapKind::Raid | MapKind::Battleground | MapKind::Arena => &[
            (VmapDisableFlags::HEIGHT, "height"),
            (VmapDisableFlags::LOS, "line of sight"),
        ],
    };
    let class = match kind {
        MapKind::Common => "world",
        MapKind::Instance | MapKind::Raid => "instance",
        MapKind::Battleground => "battleground",
        MapKind::Arena => "arena",
    };
    for (flag, what) in noted {
        if flags.contains(*flag) {
            info!(map = map_id, "{what} disabled for {class} map {map_id}");
        }
    }
}

fn log_warning(row: usize, warning: &LoadWarning) {
    match warning {
        LoadWarning::UnusedFlags {
            category,
            entry,
            flags,
        } => warn!(row, flags, "disable flags specified for {category} {entry}, useless data"),
        LoadWarning::UnusedParams {
            category,
            entry,
            list,
        } => warn!(row, ?list, "parameters specified for {category} {entry}, useless data"),
        LoadWarning::NeverMatches { category, entry } => {
            warn!(row, "{category} {entry} disables no difficulty and never matches");
        }
        LoadWarning::DroppedParam { entry, token } => {
            warn!(row, "dropped malformed parameter {token:?} for entry {entry}");
        }
    }
}

//! Rule evaluation.
//!
//! Answers "is this entity disabled here, for this actor?" against one
//! [`RuleStore`] snapshot. Evaluation is pure: it reads only the snapshot and
//! the query context.

use embargo_foundation::{Category, Difficulty, MapKind, SpellDisableFlags, VmapDisableFlags};
use embargo_storage::{RuleRecord, RuleStore};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of unit a query is made for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActorKind {
    /// A player character.
    Player,
    /// A creature that is not a pet.
    Creature,
    /// A pet. Pets are also creatures.
    Pet,
}

impl ActorKind {
    /// Returns true if a spell rule with `flags` applies to this kind.
    #[must_use]
    pub fn matches(self, flags: SpellDisableFlags) -> bool {
        match self {
            Self::Player => flags.contains(SpellDisableFlags::PLAYER),
            Self::Creature => flags.contains(SpellDisableFlags::CREATURE),
            Self::Pet => flags.intersects(SpellDisableFlags::PET | SpellDisableFlags::CREATURE),
        }
    }
}

/// The unit a query is made for, with its location and difficulty settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Actor {
    /// Unit kind.
    pub kind: ActorKind,
    /// Current map.
    pub map_id: u32,
    /// Current area.
    pub area_id: u32,
    /// Selected dungeon difficulty.
    pub dungeon_difficulty: Difficulty,
    /// Selected raid difficulty.
    pub raid_difficulty: Difficulty,
}

impl Actor {
    /// Creates an actor on normal difficulties.
    #[must_use]
    pub fn new(kind: ActorKind, map_id: u32, area_id: u32) -> Self {
        Self {
            kind,
            map_id,
            area_id,
            dungeon_difficulty: Difficulty::DUNGEON_NORMAL,
            raid_difficulty: Difficulty::RAID_10_NORMAL,
        }
    }

    /// A player at `map_id`/`area_id`.
    #[must_use]
    pub fn player(map_id: u32, area_id: u32) -> Self {
        Self::new(ActorKind::Player, map_id, area_id)
    }

    /// A creature at `map_id`/`area_id`.
    #[must_use]
    pub fn creature(map_id: u32, area_id: u32) -> Self {
        Self::new(ActorKind::Creature, map_id, area_id)
    }

    /// A pet at `map_id`/`area_id`.
    #[must_use]
    pub fn pet(map_id: u32, area_id: u32) -> Self {
        Self::new(ActorKind::Pet, map_id, area_id)
    }

    /// Builder method to set the dungeon difficulty.
    #[must_use]
    pub fn with_dungeon_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.dungeon_difficulty = difficulty;
        self
    }

    /// Builder method to set the raid difficulty.
    #[must_use]
    pub fn with_raid_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.raid_difficulty = difficulty;
        self
    }

    fn difficulty_for(&self, kind: MapKind) -> Difficulty {
        if kind.is_raid() {
            self.raid_difficulty
        } else {
            self.dungeon_difficulty
        }
    }
}

/// Per-query context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryContext {
    /// The unit the query is made for, if any.
    pub actor: Option<Actor>,
}

impl QueryContext {
    /// A query with no actor.
    #[must_use]
    pub const fn none() -> Self {
        Self { actor: None }
    }

    /// A query made for `actor`.
    #[must_use]
    pub const fn for_actor(actor: Actor) -> Self {
        Self { actor: Some(actor) }
    }
}

impl From<Actor> for QueryContext {
    fn from(actor: Actor) -> Self {
        Self::for_actor(actor)
    }
}

/// Stateless rule evaluator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Returns true if `entry` is disabled in `category` for this context.
    ///
    /// `query_flags` is only read for vmap rules, where it is the capability
    /// mask being asked about.
    #[must_use]
    pub fn is_disabled_for(
        store: &RuleStore,
        category: Category,
        entry: u32,
        ctx: &QueryContext,
        query_flags: u8,
    ) -> bool {
        let Some(record) = store.get(category, entry) else {
            return false;
        };

        match category {
            Category::Spell => Self::spell_disabled(record, ctx),
            Category::Map | Category::LfgMap => Self::map_disabled(store, record, entry, ctx),
            Category::Vmap => record
                .vmap_flags()
                .intersects(VmapDisableFlags::from_bits_retain(query_flags)),
            Category::Quest
            | Category::Battleground
            | Category::OutdoorPvp
            | Category::AchievementCriteria
            | Category::GameObjectLos => true,
        }
    }

    fn spell_disabled(record: &RuleRecord, ctx: &QueryContext) -> bool {
        let flags = record.spell_flags();
        let Some(actor) = ctx.actor else {
            return flags.contains(SpellDisableFlags::DEPRECATED);
        };
        if !actor.kind.matches(flags) {
            return false;
        }

        if flags.contains(SpellDisableFlags::MAP) {
            if record.params0().contains(actor.map_id) {
                return true;
            }
            if !flags.contains(SpellDisableFlags::AREA) {
                return false;
            }
        }
        if flags.contains(SpellDisableFlags::AREA) {
            return record.params1().contains(actor.area_id);
        }
        true
    }

    fn map_disabled(store: &RuleStore, record: &RuleRecord, map_id: u32, ctx: &QueryContext) -> bool {
        let Some(actor) = ctx.actor.filter(|actor| actor.kind == ActorKind::Player) else {
            return false;
        };
        let Some(profile) = store.map_profile(map_id) else {
            return false;
        };

        match profile.kind {
            kind if kind.is_dungeon() => {
                let requested = actor.difficulty_for(kind);
                profile
                    .difficulties
                    .downscale(requested)
                    .is_some_and(|resolved| record.map_flags().contains(resolved.status_flag()))
            }
            MapKind::Common => true,
            _ => false,
        }
    }
}

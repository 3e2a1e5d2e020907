//! Rule loading, validation, evaluation, and the disable service for Embargo.
//!
//! This crate provides:
//! - [`Loader`] - Validates raw rule rows and builds snapshots
//! - [`finalize_quests`] - Second-stage pruning of quest rules
//! - [`Evaluator`] - Answers disable queries against a snapshot
//! - [`DisableManager`] - Owns the live snapshot, swaps it atomically on load
//! - [`apply_spell_patches`] - Applies the spell patches a load produces

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod evaluator;
pub mod finalize;
pub mod loader;
pub mod manager;
pub mod patch;

pub use config::LoaderConfig;
pub use evaluator::{Actor, ActorKind, Evaluator, QueryContext};
pub use finalize::{QuestCheckReport, finalize_quests};
pub use loader::{
    LoadOutcome, LoadReport, LoadSources, LoadWarning, Loader, ParamList, RawRule, Rejection,
};
pub use manager::{DisableManager, LoadSummary};
pub use patch::{PatchSummary, SpellPatch, apply_spell_patches};

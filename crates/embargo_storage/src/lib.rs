//! Rule records, rule store snapshots, and collaborator catalogs for Embargo.
//!
//! This crate provides:
//! - [`RuleRecord`] - One accepted disable rule
//! - [`RuleStore`] - Immutable snapshot with structural sharing
//! - [`RuleStoreBuilder`] - The only way to populate a snapshot
//! - Catalog traits ([`SpellCatalog`], [`MapCatalog`], [`TemplateCatalog`],
//!   [`QuestCatalog`], [`SpellPatchTarget`]) and the in-memory [`StaticCatalog`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod record;
pub mod store;

pub use catalog::{
    MapCatalog, QuestCatalog, SpellAttribute, SpellCatalog, SpellPatchTarget, StaticCatalog,
    TemplateCatalog,
};
pub use record::RuleRecord;
pub use store::{MapProfile, RuleStore, RuleStoreBuilder};

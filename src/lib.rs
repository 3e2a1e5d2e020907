//! Embargo - Disable/restriction rule engine for game servers
//!
//! This crate re-exports all layers of the Embargo system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: embargo_engine     - Loader, quest finalization, evaluator, DisableManager
//! Layer 1: embargo_storage    - Rule records, snapshot store, collaborator catalogs
//! Layer 0: embargo_foundation - Categories, flag sets, difficulties, params, Error
//! ```

pub use embargo_engine as engine;
pub use embargo_foundation as foundation;
pub use embargo_storage as storage;

//! Core types for Embargo.
//!
//! This crate provides:
//! - [`Category`] - The closed set of disable categories
//! - Flag sets ([`SpellDisableFlags`], [`MapDisableFlags`], [`VmapDisableFlags`])
//! - [`Difficulty`], [`DifficultySet`] and [`MapKind`] - Map topology and downscaling
//! - [`ParamSet`] - Persistent id sets and their comma-separated text form
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod difficulty;
pub mod error;
pub mod flags;
pub mod params;

pub use category::Category;
pub use difficulty::{Difficulty, DifficultySet, MapKind};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use flags::{MapDisableFlags, SpellDisableFlags, VmapDisableFlags};
pub use params::{ParamParsing, ParamSet, ParsedParams, parse_param_list};

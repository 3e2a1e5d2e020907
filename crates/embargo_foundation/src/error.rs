//! Error types for the Embargo system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::category::Category;
use crate::difficulty::MapKind;

/// The main error type for Embargo operations.
///
/// During loading every rejected row carries one of these; the load itself
/// keeps going.
#[derive(Clone, Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown category error.
    #[must_use]
    pub fn unknown_category(raw: u32) -> Self {
        Self::new(ErrorKind::UnknownCategory(raw))
    }

    /// Creates an out-of-range difficulty error.
    #[must_use]
    pub fn invalid_difficulty(index: u8) -> Self {
        Self::new(ErrorKind::InvalidDifficulty(index))
    }

    /// Creates a dangling reference error.
    #[must_use]
    pub fn missing_entity(category: Category, entry: u32) -> Self {
        Self::new(ErrorKind::MissingEntity { category, entry })
    }

    /// Creates an invalid flags error.
    #[must_use]
    pub fn invalid_flags(category: Category, entry: u32, flags: u8) -> Self {
        Self::new(ErrorKind::InvalidFlags {
            category,
            entry,
            flags,
        })
    }

    /// Creates an error for a battleground or arena map used in a map rule.
    #[must_use]
    pub fn forbidden_map_kind(entry: u32, kind: MapKind) -> Self {
        Self::new(ErrorKind::ForbiddenMapKind { entry, kind })
    }

    /// Creates a malformed parameter error.
    #[must_use]
    pub fn malformed_param(entry: u32, token: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedParam {
            entry,
            token: token.into(),
        })
    }

    /// Returns the row index from the context, if any.
    #[must_use]
    pub fn row(&self) -> Option<usize> {
        self.context.as_ref().and_then(|ctx| ctx.row)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The row names a category outside the known set.
    #[error("invalid disable category {0}")]
    UnknownCategory(u32),

    /// A difficulty index outside `0..Difficulty::COUNT`.
    #[error("invalid difficulty index {0}")]
    InvalidDifficulty(u8),

    /// The referenced entity does not exist in its backing store.
    #[error("{category} entry {entry} does not exist")]
    MissingEntity {
        /// Category of the rule.
        category: Category,
        /// The dangling entity id.
        entry: u32,
    },

    /// Flags are not acceptable for this category and entity.
    #[error("disable flags {flags:#04x} for {category} {entry} are invalid")]
    InvalidFlags {
        /// Category of the rule.
        category: Category,
        /// The entity id.
        entry: u32,
        /// The rejected flags.
        flags: u8,
    },

    /// A battleground or arena map was named in a map disable.
    #[error("{kind} map {entry} cannot be disabled as a map")]
    ForbiddenMapKind {
        /// The map id.
        entry: u32,
        /// Topology class of the map.
        kind: MapKind,
    },

    /// A parameter list token is not an unsigned integer.
    #[error("malformed parameter {token:?} for entry {entry}")]
    MalformedParam {
        /// The entity id.
        entry: u32,
        /// The offending token.
        token: String,
    },
}

/// Context about where an error occurred.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Rule table name.
    pub source: Option<String>,
    /// Zero-based row index in the input.
    pub row: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source table.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the row index.
    #[must_use]
    pub fn with_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.row) {
            (Some(source), Some(row)) => write!(f, "in `{source}` row {row}"),
            (Some(source), None) => write!(f, "in `{source}`"),
            (None, Some(row)) => write!(f, "at row {row}"),
            (None, None) => Ok(()),
        }
    }
}

/// Result type alias for Embargo operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Rule parameter sets and their comma-separated text form.

use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Persistent ordered set of map or area ids.
///
/// Cloning is O(1). Modifications return a new set sharing structure
/// with the original.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ParamSet(im::OrdSet<u32>);

impl ParamSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdSet::new())
    }

    /// Returns the number of ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the set contains `id`.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    /// Returns a new set with `id` inserted.
    #[must_use]
    pub fn insert(&self, id: u32) -> Self {
        Self(self.0.update(id))
    }

    /// Returns an iterator over the ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Debug for ParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for ParamSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

impl FromIterator<u32> for ParamSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(im::OrdSet::from_iter(iter))
    }
}

/// How a non-numeric token in a parameter list is handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamParsing {
    /// Reject the whole row.
    #[default]
    Strict,
    /// Drop the token and keep the row.
    Lenient,
}

/// A parsed parameter list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedParams {
    /// The ids that parsed.
    pub ids: ParamSet,
    /// Tokens dropped under [`ParamParsing::Lenient`].
    pub dropped: Vec<String>,
}

/// Parses a comma-separated id list such as `"30, 489,529"`.
///
/// Tokens are trimmed and empty tokens are skipped, so `""` and `",,"` both
/// yield an empty set.
///
/// # Errors
/// Returns [`crate::ErrorKind::MalformedParam`] under
/// [`ParamParsing::Strict`] if a token is not a `u32`.
pub fn parse_param_list(entry: u32, text: &str, mode: ParamParsing) -> Result<ParsedParams> {
    let mut parsed = ParsedParams::default();
    for token in text.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<u32>() {
            Ok(id) => parsed.ids = parsed.ids.insert(id),
            Err(_) => match mode {
                ParamParsing::Strict => return Err(Error::malformed_param(entry, token)),
                ParamParsing::Lenient => parsed.dropped.push(token.to_string()),
            },
        }
    }
    Ok(parsed)
}

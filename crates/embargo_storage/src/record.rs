//! The stored form of one disable rule.

use embargo_foundation::{MapDisableFlags, ParamSet, SpellDisableFlags, VmapDisableFlags};

/// One accepted disable rule.
///
/// What `flags`, `params0` and `params1` mean depends on the category the
/// record is stored under. Records are validated on load and trusted on query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuleRecord {
    flags: u8,
    params0: ParamSet,
    params1: ParamSet,
}

impl RuleRecord {
    /// Creates a record with the given flags and no parameters.
    #[must_use]
    pub fn new(flags: u8) -> Self {
        Self {
            flags,
            params0: ParamSet::new(),
            params1: ParamSet::new(),
        }
    }

    /// Sets the first parameter set (spell: map ids).
    #[must_use]
    pub fn with_params0(mut self, params: ParamSet) -> Self {
        self.params0 = params;
        self
    }

    /// Sets the second parameter set (spell: area ids).
    #[must_use]
    pub fn with_params1(mut self, params: ParamSet) -> Self {
        self.params1 = params;
        self
    }

    /// Raw flags.
    #[must_use]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    /// First parameter set.
    #[must_use]
    pub fn params0(&self) -> &ParamSet {
        &self.params0
    }

    /// Second parameter set.
    #[must_use]
    pub fn params1(&self) -> &ParamSet {
        &self.params1
    }

    /// Flags read as a spell rule.
    #[must_use]
    pub fn spell_flags(&self) -> SpellDisableFlags {
        SpellDisableFlags::from_bits_retain(self.flags)
    }

    /// Flags read as a map rule.
    #[must_use]
    pub fn map_flags(&self) -> MapDisableFlags {
        MapDisableFlags::from_bits_retain(self.flags)
    }

    /// Flags read as a vmap rule.
    #[must_use]
    pub fn vmap_flags(&self) -> VmapDisableFlags {
        VmapDisableFlags::from_bits_retain(self.flags)
    }
}

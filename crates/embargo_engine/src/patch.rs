//! Spell definition patches produced by a load.
//!
//! The loader never touches the spell store. It records each attribute change
//! as a [`SpellPatch`]; the host applies the list with
//! [`apply_spell_patches`] during its load window.

use embargo_storage::{SpellAttribute, SpellPatchTarget};
use tracing::{debug, warn};

/// One attribute change for one spell definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpellPatch {
    /// The spell to patch.
    pub spell_id: u32,
    /// The attribute to set.
    pub attribute: SpellAttribute,
}

impl SpellPatch {
    /// A patch that lifts the line-of-sight requirement of a spell.
    #[must_use]
    pub const fn ignore_line_of_sight(spell_id: u32) -> Self {
        Self {
            spell_id,
            attribute: SpellAttribute::IgnoreLineOfSight,
        }
    }
}

/// What happened when a patch list was applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatchSummary {
    /// Number of patches applied.
    pub applied: usize,
    /// Spells that no longer existed in the target.
    pub missing: Vec<u32>,
}

/// Applies `patches` to a spell store.
///
/// Patches are idempotent, so applying the list of a reload on top of the
/// previous load is harmless.
pub fn apply_spell_patches<T>(target: &mut T, patches: &[SpellPatch]) -> PatchSummary
where
    T: SpellPatchTarget + ?Sized,
{
    let mut summary = PatchSummary::default();
    for patch in patches {
        if target.apply_attribute(patch.spell_id, patch.attribute) {
            debug!(spell = patch.spell_id, attribute = ?patch.attribute, "spell patched");
            summary.applied += 1;
        } else {
            warn!(spell = patch.spell_id, "spell patch target no longer exists");
            summary.missing.push(patch.spell_id);
        }
    }
    summary
}

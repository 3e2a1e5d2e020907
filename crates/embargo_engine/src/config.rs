//! Configuration for rule loading.

use embargo_foundation::ParamParsing;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the loader and the quest finalization pass.
///
/// Controls parameter parsing, soft warnings, and informational output.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoaderConfig {
    /// How non-numeric parameter tokens are handled.
    pub param_parsing: ParamParsing,

    /// Record and log warnings for flags or parameters a rule ignores.
    pub warn_unused_data: bool,

    /// Log which vmap capabilities each vmap rule disables.
    pub report_vmap_capabilities: bool,

    /// Rule table name used in error contexts.
    pub source_name: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            param_parsing: ParamParsing::Strict,
            warn_unused_data: true,
            report_vmap_capabilities: true,
            source_name: "disables".to_string(),
        }
    }
}

impl LoaderConfig {
    /// Creates a configuration with no soft warnings and no vmap report.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            warn_unused_data: false,
            report_vmap_capabilities: false,
            ..Self::default()
        }
    }

    /// Creates a configuration that drops bad parameter tokens instead of rows.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            param_parsing: ParamParsing::Lenient,
            ..Self::default()
        }
    }

    /// Builder method to set parameter parsing.
    #[must_use]
    pub fn with_param_parsing(mut self, parsing: ParamParsing) -> Self {
        self.param_parsing = parsing;
        self
    }

    /// Builder method to enable/disable unused data warnings.
    #[must_use]
    pub fn with_warn_unused_data(mut self, warn: bool) -> Self {
        self.warn_unused_data = warn;
        self
    }

    /// Builder method to enable/disable the vmap capability report.
    #[must_use]
    pub fn with_report_vmap_capabilities(mut self, report: bool) -> Self {
        self.report_vmap_capabilities = report;
        self
    }

    /// Builder method to set the rule table name.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }
}

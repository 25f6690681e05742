//! Error handling for build rule construction
//!
//! All errors in this crate are configuration errors: they are raised when a
//! rule set or module registry is built from authored data, never during
//! resolution. Resolution itself is total over valid inputs.

use thiserror::Error;

/// Errors raised while constructing a rule set or registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A rule set was built with an empty module name.
    #[error("rule set has an empty module name")]
    EmptyModuleName,

    /// A `PlatformIn` predicate was given an empty platform set.
    #[error("module '{module}': rule {rule_index} restricts to an empty platform set")]
    EmptyPlatformSet { module: String, rule_index: usize },

    /// An `All` conjunction was given no sub-predicates.
    #[error("module '{module}': rule {rule_index} has an empty conjunction")]
    EmptyConjunction { module: String, rule_index: usize },

    /// A preprocessor definition was added with an empty name.
    #[error("module '{module}': rule {rule_index} adds a definition with an empty name")]
    EmptyDefinitionName { module: String, rule_index: usize },

    /// An empty module or framework name was added to a payload list.
    #[error("module '{module}': rule {rule_index} adds an empty name to '{field}'")]
    EmptyListEntry {
        module: String,
        rule_index: usize,
        field: &'static str,
    },

    /// The same module name was registered twice in a registry.
    #[error("module '{0}' is registered more than once")]
    DuplicateModule(String),
}

/// Result type for rule construction.
pub type DriftBuildResult<T> = Result<T, ConfigurationError>;

//! Core data model and resolver for Drift plugin build descriptors
//!
//! The host build orchestrator constructs one [`BuildContext`] per
//! (module, platform, engine-version) combination and resolves each module's
//! [`RuleSet`] against it, receiving a fully merged [`ModuleDescriptor`]
//! that drives the actual compiler and linker invocation. Resolution is
//! synchronous, stateless, and deterministic; all validation happens when a
//! rule set is built.

pub mod context;
pub mod descriptor;
pub mod error;
pub mod predicate;
pub mod resolver;
pub mod rules;

pub use context::{BuildContext, EngineVersion, Platform};
pub use descriptor::{
    CppStandard, ModuleDescriptor, PchMode, DEFAULT_CPP_STANDARD, DEFAULT_PCH_MODE,
};
pub use error::{ConfigurationError, DriftBuildResult};
pub use predicate::Predicate;
pub use resolver::resolve;
pub use rules::{Definition, Rule, RulePayload, RuleSet, RuleSetBuilder};

//! Registry of the plugin's module rule sets
//!
//! The orchestrator looks modules up by name or walks all of them in
//! declaration order. Registration validates every rule set and rejects
//! duplicate names.

use driftbuild_core::{
    BuildContext, ConfigurationError, DriftBuildResult, ModuleDescriptor, RuleSet,
};
use log::{debug, info};

/// Ordered collection of module rule sets, unique by module name.
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: Vec<RuleSet>,
}

impl ModuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding all modules shipped with the Drift plugin.
    pub fn standard() -> DriftBuildResult<Self> {
        let mut registry = Self::new();
        registry.register(crate::drift::rule_set()?)?;
        registry.register(crate::drift_http::rule_set()?)?;
        registry.register(crate::drift_editor::rule_set()?)?;
        registry.register(crate::error_reporter::rule_set()?)?;
        registry.register(crate::rapid_json::rule_set()?)?;
        registry.register(crate::json_archive::rule_set()?)?;
        info!("registered {} module rule sets", registry.len());
        Ok(registry)
    }

    /// Add a rule set. Module names must be unique within a registry.
    pub fn register(&mut self, rule_set: RuleSet) -> DriftBuildResult<()> {
        if self.get(rule_set.module_name()).is_some() {
            return Err(ConfigurationError::DuplicateModule(
                rule_set.module_name().to_string(),
            ));
        }
        debug!("registered module '{}'", rule_set.module_name());
        self.modules.push(rule_set);
        Ok(())
    }

    /// Look a rule set up by exact module name.
    pub fn get(&self, module_name: &str) -> Option<&RuleSet> {
        self.modules
            .iter()
            .find(|set| set.module_name() == module_name)
    }

    /// All registered rule sets in declaration order.
    pub fn modules(&self) -> &[RuleSet] {
        &self.modules
    }

    /// Registered module names in declaration order.
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|set| set.module_name())
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// True when no modules are registered.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Resolve every registered module against one context, in order.
    pub fn resolve_all(&self, ctx: &BuildContext) -> Vec<ModuleDescriptor> {
        self.modules.iter().map(|set| set.resolve(ctx)).collect()
    }
}

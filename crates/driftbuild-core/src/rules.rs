//! Rule payloads and rule sets
//!
//! A rule set is the authored description of one module's build surface: an
//! unconditional base payload plus an ordered list of conditional rules.
//! Validation happens here, when the set is built; resolution over a valid
//! set never fails.

use crate::descriptor::{CppStandard, PchMode};
use crate::error::{ConfigurationError, DriftBuildResult};
use crate::predicate::Predicate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A preprocessor definition, with or without a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub name: String,
    pub value: Option<String>,
}

impl Definition {
    /// A definition with no value, e.g. `WITH_ANALYTICS_EVENT_ATTRIBUTE_TYPES`.
    pub fn flag<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), value: None }
    }

    /// A definition with a value, e.g. `ERROR_REPORTER_PACKAGE=1`.
    pub fn valued<S: Into<String>, V: Into<String>>(name: S, value: V) -> Self {
        Self { name: name.into(), value: Some(value.into()) }
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// What one rule contributes to the descriptor.
///
/// List fields are additive: contributions from every matching rule are
/// unioned with first-seen order and duplicates removed. The `Option` fields
/// are overrides: the last matching rule that sets one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePayload {
    pub public_include_paths: Vec<String>,
    pub private_include_paths: Vec<String>,
    pub public_dependencies: Vec<String>,
    pub private_dependencies: Vec<String>,
    pub definitions: Vec<Definition>,
    pub frameworks: Vec<String>,
    pub dynamically_loaded_modules: Vec<String>,
    pub include_path_modules: Vec<String>,
    pub pch_mode: Option<PchMode>,
    pub cpp_standard: Option<CppStandard>,
    pub faster_without_unity: Option<bool>,
}

impl RulePayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add public include paths.
    pub fn public_include_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.public_include_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add private include paths.
    pub fn private_include_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.private_include_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add public dependency module names.
    pub fn public_dependencies<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.public_dependencies.extend(modules.into_iter().map(Into::into));
        self
    }

    /// Add private dependency module names.
    pub fn private_dependencies<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.private_dependencies.extend(modules.into_iter().map(Into::into));
        self
    }

    /// Add a valueless preprocessor definition.
    pub fn define<S: Into<String>>(mut self, name: S) -> Self {
        self.definitions.push(Definition::flag(name));
        self
    }

    /// Add a preprocessor definition with a value.
    pub fn define_value<S: Into<String>, V: Into<String>>(mut self, name: S, value: V) -> Self {
        self.definitions.push(Definition::valued(name, value));
        self
    }

    /// Add a platform framework to link.
    pub fn framework<S: Into<String>>(mut self, name: S) -> Self {
        self.frameworks.push(name.into());
        self
    }

    /// Add dynamically-loaded module names.
    pub fn dynamically_loaded_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dynamically_loaded_modules
            .extend(modules.into_iter().map(Into::into));
        self
    }

    /// Add include-path-only module names.
    pub fn include_path_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_path_modules.extend(modules.into_iter().map(Into::into));
        self
    }

    /// Override the precompiled-header mode.
    pub fn pch_mode(mut self, mode: PchMode) -> Self {
        self.pch_mode = Some(mode);
        self
    }

    /// Override the C++ standard.
    pub fn cpp_standard(mut self, standard: CppStandard) -> Self {
        self.cpp_standard = Some(standard);
        self
    }

    /// Mark the module as building faster without unity translation units.
    pub fn faster_without_unity(mut self, enabled: bool) -> Self {
        self.faster_without_unity = Some(enabled);
        self
    }

    /// True when the payload contributes nothing at all.
    pub fn is_empty(&self) -> bool {
        self.public_include_paths.is_empty()
            && self.private_include_paths.is_empty()
            && self.public_dependencies.is_empty()
            && self.private_dependencies.is_empty()
            && self.definitions.is_empty()
            && self.frameworks.is_empty()
            && self.dynamically_loaded_modules.is_empty()
            && self.include_path_modules.is_empty()
            && self.pch_mode.is_none()
            && self.cpp_standard.is_none()
            && self.faster_without_unity.is_none()
    }
}

/// One conditional contribution to a module's descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub predicate: Predicate,
    pub payload: RulePayload,
}

/// The ordered collection of rules defining one module's build descriptor.
///
/// Built through [`RuleSet::builder`], which validates the authored data.
/// The base payload is the `Always` rule: it is always present and applied
/// before any conditional rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    module_name: String,
    base: RulePayload,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Start building a rule set for the named module.
    pub fn builder<S: Into<String>>(module_name: S) -> RuleSetBuilder {
        RuleSetBuilder {
            module_name: module_name.into(),
            base: RulePayload::default(),
            rules: Vec::new(),
        }
    }

    /// The module this rule set describes.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// The unconditional base payload.
    pub fn base(&self) -> &RulePayload {
        &self.base
    }

    /// The conditional rules, in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// Builder for [`RuleSet`]; `build` runs validation.
#[derive(Debug, Clone)]
pub struct RuleSetBuilder {
    module_name: String,
    base: RulePayload,
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    /// Set the unconditional base payload.
    pub fn base(mut self, payload: RulePayload) -> Self {
        self.base = payload;
        self
    }

    /// Append a conditional rule.
    pub fn when(mut self, predicate: Predicate, payload: RulePayload) -> Self {
        self.rules.push(Rule { predicate, payload });
        self
    }

    /// Validate the authored data and produce the rule set.
    ///
    /// This is where configuration errors surface; resolution over the
    /// returned set is total.
    pub fn build(self) -> DriftBuildResult<RuleSet> {
        if self.module_name.is_empty() {
            return Err(ConfigurationError::EmptyModuleName);
        }

        // The base payload counts as rule 0; conditional rules follow.
        validate_payload(&self.module_name, 0, &self.base)?;
        for (offset, rule) in self.rules.iter().enumerate() {
            let rule_index = offset + 1;
            validate_predicate(&self.module_name, rule_index, &rule.predicate)?;
            validate_payload(&self.module_name, rule_index, &rule.payload)?;
        }

        Ok(RuleSet {
            module_name: self.module_name,
            base: self.base,
            rules: self.rules,
        })
    }
}

fn validate_predicate(
    module: &str,
    rule_index: usize,
    predicate: &Predicate,
) -> DriftBuildResult<()> {
    match predicate {
        Predicate::PlatformIn(platforms) if platforms.is_empty() => {
            Err(ConfigurationError::EmptyPlatformSet {
                module: module.to_string(),
                rule_index,
            })
        }
        Predicate::All(subs) => {
            if subs.is_empty() {
                return Err(ConfigurationError::EmptyConjunction {
                    module: module.to_string(),
                    rule_index,
                });
            }
            for sub in subs {
                validate_predicate(module, rule_index, sub)?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn validate_payload(module: &str, rule_index: usize, payload: &RulePayload) -> DriftBuildResult<()> {
    if payload.definitions.iter().any(|d| d.name.is_empty()) {
        return Err(ConfigurationError::EmptyDefinitionName {
            module: module.to_string(),
            rule_index,
        });
    }

    let name_lists: [(&'static str, &Vec<String>); 7] = [
        ("public_include_paths", &payload.public_include_paths),
        ("private_include_paths", &payload.private_include_paths),
        ("public_dependencies", &payload.public_dependencies),
        ("private_dependencies", &payload.private_dependencies),
        ("frameworks", &payload.frameworks),
        (
            "dynamically_loaded_modules",
            &payload.dynamically_loaded_modules,
        ),
        ("include_path_modules", &payload.include_path_modules),
    ];
    for (field, list) in name_lists {
        if list.iter().any(|entry| entry.is_empty()) {
            return Err(ConfigurationError::EmptyListEntry {
                module: module.to_string(),
                rule_index,
                field,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Platform;

    #[test]
    fn test_builder_produces_ordered_rules() {
        let set = RuleSet::builder("Drift")
            .base(RulePayload::new().public_dependencies(["Core"]))
            .when(
                Predicate::platforms([Platform::Mac]),
                RulePayload::new().framework("Security"),
            )
            .when(
                Predicate::engine_at_least(4, 19),
                RulePayload::new().define("WITH_ANALYTICS_EVENT_ATTRIBUTE_TYPES"),
            )
            .build()
            .unwrap();

        assert_eq!(set.module_name(), "Drift");
        assert_eq!(set.rules().len(), 2);
        assert_eq!(set.base().public_dependencies, vec!["Core"]);
    }

    #[test]
    fn test_empty_module_name_is_rejected() {
        let result = RuleSet::builder("").build();
        assert_eq!(result.unwrap_err(), ConfigurationError::EmptyModuleName);
    }

    #[test]
    fn test_empty_platform_set_is_rejected() {
        let result = RuleSet::builder("Drift")
            .when(Predicate::PlatformIn(vec![]), RulePayload::new())
            .build();
        assert!(matches!(
            result,
            Err(ConfigurationError::EmptyPlatformSet { rule_index: 1, .. })
        ));
    }

    #[test]
    fn test_empty_conjunction_is_rejected() {
        let result = RuleSet::builder("Drift")
            .when(Predicate::All(vec![]), RulePayload::new())
            .build();
        assert!(matches!(
            result,
            Err(ConfigurationError::EmptyConjunction { rule_index: 1, .. })
        ));
    }

    #[test]
    fn test_nested_predicates_are_validated() {
        let result = RuleSet::builder("Drift")
            .when(
                Predicate::All(vec![
                    Predicate::engine_at_least(4, 19),
                    Predicate::PlatformIn(vec![]),
                ]),
                RulePayload::new(),
            )
            .build();
        assert!(matches!(
            result,
            Err(ConfigurationError::EmptyPlatformSet { .. })
        ));
    }

    #[test]
    fn test_empty_definition_name_is_rejected() {
        let result = RuleSet::builder("Drift")
            .base(RulePayload::new().define(""))
            .build();
        assert!(matches!(
            result,
            Err(ConfigurationError::EmptyDefinitionName { rule_index: 0, .. })
        ));
    }

    #[test]
    fn test_empty_list_entry_is_rejected() {
        let result = RuleSet::builder("Drift")
            .base(RulePayload::new().public_dependencies([""]))
            .build();
        assert!(matches!(
            result,
            Err(ConfigurationError::EmptyListEntry {
                field: "public_dependencies",
                ..
            })
        ));
    }

    #[test]
    fn test_definition_display() {
        assert_eq!(Definition::flag("FOO").to_string(), "FOO");
        assert_eq!(Definition::valued("FOO", "1").to_string(), "FOO=1");
    }
}

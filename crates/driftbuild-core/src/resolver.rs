//! Descriptor resolution
//!
//! Resolution merges a module's matching rules into one descriptor: the base
//! payload first, then each conditional rule whose predicate holds, in
//! declaration order. List fields union with first-seen order and duplicates
//! removed; the PCH mode, C++ standard, and faster-without-unity overrides
//! are last-write-wins. Resolution is a pure function of its inputs and
//! never fails.

use crate::context::BuildContext;
use crate::descriptor::{CppStandard, ModuleDescriptor, PchMode};
use crate::rules::{Definition, RulePayload, RuleSet};
use log::debug;

/// Resolve a module's rule set against a build context.
pub fn resolve(rule_set: &RuleSet, ctx: &BuildContext) -> ModuleDescriptor {
    let mut acc = Accumulator::new();
    acc.merge(rule_set.base());

    for (index, rule) in rule_set.rules().iter().enumerate() {
        if rule.predicate.satisfied_by(ctx) {
            acc.merge(&rule.payload);
        } else {
            debug!(
                "module '{}': rule {} does not apply to {} {}",
                rule_set.module_name(),
                index + 1,
                ctx.platform,
                ctx.engine_version
            );
        }
    }

    acc.into_descriptor(rule_set.module_name(), ctx)
}

impl RuleSet {
    /// Resolve this rule set against a build context.
    pub fn resolve(&self, ctx: &BuildContext) -> ModuleDescriptor {
        resolve(self, ctx)
    }
}

/// Working state for one resolution. Lives only for the duration of the
/// call; the finished descriptor is moved out.
#[derive(Default)]
struct Accumulator {
    public_include_paths: Vec<String>,
    private_include_paths: Vec<String>,
    public_dependencies: Vec<String>,
    private_dependencies: Vec<String>,
    definitions: Vec<Definition>,
    frameworks: Vec<String>,
    dynamically_loaded_modules: Vec<String>,
    include_path_modules: Vec<String>,
    pch_mode: Option<PchMode>,
    cpp_standard: Option<CppStandard>,
    faster_without_unity: Option<bool>,
}

impl Accumulator {
    fn new() -> Self {
        Self::default()
    }

    fn merge(&mut self, payload: &RulePayload) {
        extend_unique(&mut self.public_include_paths, &payload.public_include_paths);
        extend_unique(&mut self.private_include_paths, &payload.private_include_paths);
        extend_unique(&mut self.public_dependencies, &payload.public_dependencies);
        extend_unique(&mut self.private_dependencies, &payload.private_dependencies);
        extend_unique(&mut self.frameworks, &payload.frameworks);
        extend_unique(
            &mut self.dynamically_loaded_modules,
            &payload.dynamically_loaded_modules,
        );
        extend_unique(&mut self.include_path_modules, &payload.include_path_modules);

        for definition in &payload.definitions {
            merge_definition(&mut self.definitions, definition);
        }

        if let Some(mode) = payload.pch_mode {
            self.pch_mode = Some(mode);
        }
        if let Some(standard) = payload.cpp_standard {
            self.cpp_standard = Some(standard);
        }
        if let Some(enabled) = payload.faster_without_unity {
            self.faster_without_unity = Some(enabled);
        }
    }

    fn into_descriptor(self, module_name: &str, ctx: &BuildContext) -> ModuleDescriptor {
        let faster_without_unity = self.faster_without_unity.unwrap_or(false);
        ModuleDescriptor {
            module_name: module_name.to_string(),
            public_include_paths: self.public_include_paths,
            private_include_paths: self.private_include_paths,
            public_dependencies: self.public_dependencies,
            private_dependencies: self.private_dependencies,
            definitions: self.definitions,
            frameworks: self.frameworks,
            dynamically_loaded_modules: self.dynamically_loaded_modules,
            include_path_modules: self.include_path_modules,
            pch_mode: self.pch_mode.unwrap_or_default(),
            cpp_standard: self.cpp_standard.unwrap_or_default(),
            use_unity_build: ctx.unity_build_requested && !faster_without_unity,
        }
    }
}

/// Append entries not already present, keeping first-seen order.
/// Matching is case-sensitive and exact; no normalization.
fn extend_unique(target: &mut Vec<String>, additions: &[String]) {
    for addition in additions {
        if !target.iter().any(|existing| existing == addition) {
            target.push(addition.clone());
        }
    }
}

/// Merge one definition, deduplicating by name. A later rule that re-adds a
/// name with a different value replaces the value in place, keeping the
/// original position. Callers are expected to keep rule sets
/// non-contradictory; this is not reported as a conflict.
fn merge_definition(target: &mut Vec<Definition>, addition: &Definition) {
    match target.iter_mut().find(|existing| existing.name == addition.name) {
        Some(existing) => {
            if existing.value != addition.value {
                existing.value = addition.value.clone();
            }
        }
        None => target.push(addition.clone()),
    }
}

//! Resolved module descriptors
//!
//! A `ModuleDescriptor` is the concrete output handed to the orchestrator:
//! every field has a definite value, including the PCH mode and C++ standard,
//! which fall back to documented defaults when no rule sets them.

use crate::rules::Definition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Precompiled-header strategy for a module's translation units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PchMode {
    /// No precompiled headers at all.
    NoPchs,
    /// Module-private PCH only; never share the engine-wide ones.
    NoSharedPchs,
    /// Use the engine's shared PCHs.
    UseSharedPchs,
    /// Use an explicit module PCH if declared, shared PCHs otherwise.
    UseExplicitOrSharedPchs,
}

/// Mode applied when a module's rules never set one.
///
/// A descriptor is always returned with a concrete mode; the orchestrator
/// has no notion of "unset".
pub const DEFAULT_PCH_MODE: PchMode = PchMode::UseSharedPchs;

impl Default for PchMode {
    fn default() -> Self {
        DEFAULT_PCH_MODE
    }
}

impl fmt::Display for PchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PchMode::NoPchs => "NoPchs",
            PchMode::NoSharedPchs => "NoSharedPchs",
            PchMode::UseSharedPchs => "UseSharedPchs",
            PchMode::UseExplicitOrSharedPchs => "UseExplicitOrSharedPchs",
        };
        f.write_str(name)
    }
}

/// C++ language standard a module is compiled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CppStandard {
    Cpp14,
    Cpp17,
    Cpp20,
}

/// Standard applied when a module's rules never set one.
pub const DEFAULT_CPP_STANDARD: CppStandard = CppStandard::Cpp14;

impl Default for CppStandard {
    fn default() -> Self {
        DEFAULT_CPP_STANDARD
    }
}

impl fmt::Display for CppStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CppStandard::Cpp14 => "c++14",
            CppStandard::Cpp17 => "c++17",
            CppStandard::Cpp20 => "c++20",
        };
        f.write_str(name)
    }
}

/// The merged build descriptor for one module under one build context.
///
/// Built fresh by every resolution call and owned by the caller. List fields
/// keep first-seen order with duplicates removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub module_name: String,
    pub public_include_paths: Vec<String>,
    pub private_include_paths: Vec<String>,
    pub public_dependencies: Vec<String>,
    pub private_dependencies: Vec<String>,
    pub definitions: Vec<Definition>,
    pub frameworks: Vec<String>,
    pub dynamically_loaded_modules: Vec<String>,
    pub include_path_modules: Vec<String>,
    pub pch_mode: PchMode,
    pub cpp_standard: CppStandard,
    /// Whether the orchestrator should build this module with unity
    /// translation units. Already folds the context's request with the
    /// module's own faster-without-unity setting.
    pub use_unity_build: bool,
}

impl ModuleDescriptor {
    /// Render the descriptor as compiler/linker style flags, one per line.
    ///
    /// This is a convenience for inspection and CLI output; the orchestrator
    /// consumes the structured fields directly.
    pub fn compiler_flags(&self) -> Vec<String> {
        let mut flags = Vec::new();

        for path in self
            .public_include_paths
            .iter()
            .chain(self.private_include_paths.iter())
        {
            flags.push(format!("-I{}", path));
        }

        for definition in &self.definitions {
            flags.push(format!("-D{}", definition));
        }

        for framework in &self.frameworks {
            flags.push(format!("-framework {}", framework));
        }

        flags.push(format!("-std={}", self.cpp_standard));
        flags.push(format!("-pch-mode={}", self.pch_mode));

        flags
    }

    /// All dependency module names, public first, in descriptor order.
    pub fn all_dependencies(&self) -> impl Iterator<Item = &str> {
        self.public_dependencies
            .iter()
            .chain(self.private_dependencies.iter())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_modes() {
        assert_eq!(PchMode::default(), PchMode::UseSharedPchs);
        assert_eq!(CppStandard::default(), CppStandard::Cpp14);
    }

    #[test]
    fn test_compiler_flag_rendering() {
        let descriptor = ModuleDescriptor {
            module_name: "Drift".to_string(),
            public_include_paths: vec!["Drift/Drift/Public".to_string()],
            private_include_paths: vec!["Drift/Drift/Private".to_string()],
            public_dependencies: vec!["Core".to_string()],
            private_dependencies: vec!["Engine".to_string()],
            definitions: vec![Definition::valued("ERROR_REPORTER_PACKAGE", "1")],
            frameworks: vec!["Security".to_string()],
            dynamically_loaded_modules: Vec::new(),
            include_path_modules: Vec::new(),
            pch_mode: PchMode::NoSharedPchs,
            cpp_standard: CppStandard::Cpp14,
            use_unity_build: false,
        };

        let flags = descriptor.compiler_flags();
        assert!(flags.contains(&"-IDrift/Drift/Public".to_string()));
        assert!(flags.contains(&"-IDrift/Drift/Private".to_string()));
        assert!(flags.contains(&"-DERROR_REPORTER_PACKAGE=1".to_string()));
        assert!(flags.contains(&"-framework Security".to_string()));
        assert!(flags.contains(&"-std=c++14".to_string()));
        assert!(flags.contains(&"-pch-mode=NoSharedPchs".to_string()));

        let deps: Vec<&str> = descriptor.all_dependencies().collect();
        assert_eq!(deps, vec!["Core", "Engine"]);
    }
}

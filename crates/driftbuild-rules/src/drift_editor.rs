//! Rule set for the DriftEditor settings/customization module.

use driftbuild_core::{DriftBuildResult, PchMode, Predicate, RulePayload, RuleSet};

/// Build rules for the DriftEditor module.
///
/// The entire module only exists for editor targets; a game or shipping
/// context resolves to an empty surface apart from the PCH default.
pub fn rule_set() -> DriftBuildResult<RuleSet> {
    RuleSet::builder("DriftEditor")
        .when(
            Predicate::EditorOnly,
            RulePayload::new()
                .pch_mode(PchMode::UseExplicitOrSharedPchs)
                .private_dependencies([
                    "Core",
                    "CoreUObject",
                    "Engine",
                    "RenderCore",
                    "RHI",
                    "Slate",
                    "SlateCore",
                    "EditorStyle",
                    "EditorWidgets",
                    "DesktopWidgets",
                    "PropertyEditor",
                    "SharedSettingsWidgets",
                    "SourceControl",
                    "UnrealEd",
                    "Http",
                    "Json",
                    "JsonUtilities",
                    "InputCore",
                ])
                .dynamically_loaded_modules(["Settings"])
                .include_path_modules(["Settings"]),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftbuild_core::{BuildContext, EngineVersion, Platform, DEFAULT_PCH_MODE};

    #[test]
    fn test_editor_context_gets_full_surface() {
        let set = rule_set().unwrap();
        let ctx = BuildContext::new(Platform::Win64, EngineVersion::new(4, 20)).with_editor(true);
        let descriptor = set.resolve(&ctx);

        assert!(descriptor.private_dependencies.contains(&"UnrealEd".to_string()));
        assert_eq!(descriptor.dynamically_loaded_modules, vec!["Settings"]);
        assert_eq!(descriptor.include_path_modules, vec!["Settings"]);
        assert_eq!(descriptor.pch_mode, PchMode::UseExplicitOrSharedPchs);
    }

    #[test]
    fn test_game_context_gets_nothing() {
        let set = rule_set().unwrap();
        let ctx = BuildContext::new(Platform::Win64, EngineVersion::new(4, 20));
        let descriptor = set.resolve(&ctx);

        assert!(descriptor.private_dependencies.is_empty());
        assert!(descriptor.dynamically_loaded_modules.is_empty());
        assert_eq!(descriptor.pch_mode, DEFAULT_PCH_MODE);
    }
}

//! Cross-module resolution tests over the shipped rule sets.

#[cfg(test)]
mod tests {
    use crate::ModuleRegistry;
    use driftbuild_core::{BuildContext, EngineVersion, Platform};

    fn contexts() -> Vec<BuildContext> {
        let mut contexts = Vec::new();
        for platform in Platform::ALL {
            for minor in [17, 19, 20, 27] {
                contexts.push(BuildContext::new(platform, EngineVersion::new(4, minor)));
                contexts.push(
                    BuildContext::new(platform, EngineVersion::new(4, minor)).with_editor(true),
                );
            }
            contexts.push(BuildContext::new(platform, EngineVersion::new(5, 0)));
        }
        contexts
    }

    #[test]
    fn test_resolution_is_deterministic_for_every_module_and_context() {
        let registry = ModuleRegistry::standard().unwrap();
        for ctx in contexts() {
            for set in registry.modules() {
                assert_eq!(set.resolve(&ctx), set.resolve(&ctx));
            }
        }
    }

    #[test]
    fn test_version_monotonicity_on_fixed_platform() {
        let registry = ModuleRegistry::standard().unwrap();
        let older = BuildContext::new(Platform::Mac, EngineVersion::new(4, 19));
        let newer = BuildContext::new(Platform::Mac, EngineVersion::new(4, 26));

        for set in registry.modules() {
            let older_descriptor = set.resolve(&older);
            let newer_descriptor = set.resolve(&newer);
            for definition in &older_descriptor.definitions {
                assert!(
                    newer_descriptor.definitions.contains(definition),
                    "module '{}': '{}' vanished at a higher engine version",
                    set.module_name(),
                    definition
                );
            }
            for dependency in older_descriptor.all_dependencies() {
                assert!(
                    newer_descriptor
                        .all_dependencies()
                        .any(|name| name == dependency),
                    "module '{}': dependency '{}' vanished at a higher engine version",
                    set.module_name(),
                    dependency
                );
            }
        }
    }

    #[test]
    fn test_no_module_duplicates_dependencies() {
        let registry = ModuleRegistry::standard().unwrap();
        for ctx in contexts() {
            for descriptor in registry.resolve_all(&ctx) {
                let deps: Vec<&str> = descriptor.all_dependencies().collect();
                let mut unique = deps.clone();
                unique.sort_unstable();
                unique.dedup();
                assert_eq!(
                    deps.len(),
                    unique.len(),
                    "module '{}' lists a dependency twice",
                    descriptor.module_name
                );
            }
        }
    }

    #[test]
    fn test_descriptors_serialize_to_json() {
        let registry = ModuleRegistry::standard().unwrap();
        let ctx = BuildContext::new(Platform::Mac, EngineVersion::new(4, 20)).with_editor(true);

        for descriptor in registry.resolve_all(&ctx) {
            let json = serde_json::to_string(&descriptor).unwrap();
            assert!(json.contains(&descriptor.module_name));
        }
    }
}

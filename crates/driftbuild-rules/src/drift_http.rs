//! Rule set for the DriftHttp request/response module.

use driftbuild_core::{DriftBuildResult, PchMode, RulePayload, RuleSet};

/// Build rules for the DriftHttp module.
///
/// Builds without unity translation units and without shared PCHs; the
/// module is small enough that sharing headers costs more than it saves.
pub fn rule_set() -> DriftBuildResult<RuleSet> {
    RuleSet::builder("DriftHttp")
        .base(
            RulePayload::new()
                .faster_without_unity(true)
                .pch_mode(PchMode::NoSharedPchs)
                .private_include_paths(["Drift/DriftHttp/Public"])
                .public_dependencies(["Core"])
                .private_dependencies([
                    "Engine",
                    "HTTP",
                    "RapidJson",
                    "ErrorReporter",
                    "Json",
                    "Launch",
                ]),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftbuild_core::{BuildContext, EngineVersion, Platform};

    #[test]
    fn test_unity_request_is_overridden() {
        let set = rule_set().unwrap();
        let ctx = BuildContext::new(Platform::Win64, EngineVersion::new(4, 20));
        assert!(ctx.unity_build_requested);

        let descriptor = set.resolve(&ctx);
        assert!(!descriptor.use_unity_build);
        assert_eq!(descriptor.pch_mode, PchMode::NoSharedPchs);
    }
}

//! Rule set for the ErrorReporter module.

use driftbuild_core::{DriftBuildResult, PchMode, RulePayload, RuleSet};

/// Build rules for the ErrorReporter module.
pub fn rule_set() -> DriftBuildResult<RuleSet> {
    RuleSet::builder("ErrorReporter")
        .base(
            RulePayload::new()
                .pch_mode(PchMode::NoSharedPchs)
                .define_value("ERROR_REPORTER_PACKAGE", "1")
                .public_dependencies(["Json"])
                .private_dependencies(["Core", "CoreUObject", "Engine"]),
        )
        .build()
}

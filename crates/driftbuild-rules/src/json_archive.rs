//! Rule set for the JsonArchive serialization module.

use driftbuild_core::{DriftBuildResult, PchMode, RulePayload, RuleSet};

/// Build rules for the JsonArchive module.
pub fn rule_set() -> DriftBuildResult<RuleSet> {
    RuleSet::builder("JsonArchive")
        .base(
            RulePayload::new()
                .faster_without_unity(true)
                .pch_mode(PchMode::UseExplicitOrSharedPchs)
                .public_dependencies(["Core", "HTTP", "Json"]),
        )
        .build()
}

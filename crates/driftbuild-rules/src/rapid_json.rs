//! Rule set for the bundled RapidJson wrapper module.

use driftbuild_core::{DriftBuildResult, PchMode, Platform, Predicate, RulePayload, RuleSet};

/// Build rules for the RapidJson module.
///
/// Win64 and PS4 toolchains need the rvalue-reference feature test told
/// explicitly; the other platforms detect it.
pub fn rule_set() -> DriftBuildResult<RuleSet> {
    RuleSet::builder("RapidJson")
        .base(
            RulePayload::new()
                .faster_without_unity(true)
                .pch_mode(PchMode::NoSharedPchs)
                .public_dependencies(["Core", "HTTP"]),
        )
        .when(
            Predicate::platforms([Platform::Win64, Platform::PS4]),
            RulePayload::new().define_value("RAPIDJSON_HAS_CXX11_RVALUE_REFS", "1"),
        )
        .build()
}

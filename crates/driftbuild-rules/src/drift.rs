//! Rule set for the main Drift runtime module.

use driftbuild_core::{DriftBuildResult, Platform, Predicate, RulePayload, RuleSet};

/// Build rules for the Drift module.
///
/// The Security framework is needed for keychain access on Apple platforms;
/// Android links the launch and application-core modules for JNI startup.
/// Analytics event attribute types exist in the host from 4.19 onward.
pub fn rule_set() -> DriftBuildResult<RuleSet> {
    RuleSet::builder("Drift")
        .base(
            RulePayload::new()
                .public_include_paths(["Drift/Drift/Public"])
                .private_include_paths(["Drift/Drift/Private"])
                .public_dependencies(["Core", "CoreUObject"])
                .private_dependencies([
                    "Engine",
                    "Slate",
                    "SlateCore",
                    "HTTP",
                    "Sockets",
                    "OnlineSubsystem",
                    "OnlineSubsystemUtils",
                    "DriftHttp",
                    "RapidJson",
                    "ErrorReporter",
                    "Json",
                ]),
        )
        .when(
            Predicate::platforms([Platform::IOS, Platform::Mac]),
            RulePayload::new().framework("Security"),
        )
        .when(
            Predicate::platforms([Platform::Android]),
            RulePayload::new().private_dependencies(["Launch", "ApplicationCore"]),
        )
        .when(
            Predicate::engine_at_least(4, 19),
            RulePayload::new().define("WITH_ANALYTICS_EVENT_ATTRIBUTE_TYPES"),
        )
        .build()
}

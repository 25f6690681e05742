//! Rule predicates and their evaluation
//!
//! A predicate decides whether a conditional rule applies to a given
//! `BuildContext`. Evaluation is total: every predicate yields a plain
//! boolean for every valid context, so resolving a module can never fail
//! at evaluation time.

use crate::context::{BuildContext, Platform};
use serde::{Deserialize, Serialize};

/// Condition attached to a rule.
///
/// Version gates are "at least" only. A feature that opens at version X.Y
/// stays open for every later version, so no "at most" form exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Applies unconditionally. The base payload of every rule set uses this.
    Always,
    /// Applies when the target platform is one of the listed platforms.
    PlatformIn(Vec<Platform>),
    /// Applies when the host engine is at version `major.minor` or later.
    EngineAtLeast { major: u16, minor: u16 },
    /// Applies only to editor targets.
    EditorOnly,
    /// Applies when every sub-predicate applies.
    All(Vec<Predicate>),
}

impl Predicate {
    /// Convenience constructor for a platform restriction.
    pub fn platforms(platforms: impl IntoIterator<Item = Platform>) -> Self {
        Predicate::PlatformIn(platforms.into_iter().collect())
    }

    /// Convenience constructor for a minimum-engine-version gate.
    pub const fn engine_at_least(major: u16, minor: u16) -> Self {
        Predicate::EngineAtLeast { major, minor }
    }

    /// Evaluate this predicate against a build context.
    pub fn satisfied_by(&self, ctx: &BuildContext) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::PlatformIn(platforms) => platforms.contains(&ctx.platform),
            Predicate::EngineAtLeast { major, minor } => {
                (ctx.engine_version.major, ctx.engine_version.minor) >= (*major, *minor)
            }
            Predicate::EditorOnly => ctx.building_editor,
            Predicate::All(subs) => subs.iter().all(|p| p.satisfied_by(ctx)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EngineVersion;

    fn ctx(platform: Platform, major: u16, minor: u16) -> BuildContext {
        BuildContext::new(platform, EngineVersion::new(major, minor))
    }

    #[test]
    fn test_always_holds() {
        assert!(Predicate::Always.satisfied_by(&ctx(Platform::Win64, 4, 17)));
        assert!(Predicate::Always.satisfied_by(&ctx(Platform::Switch, 5, 0)));
    }

    #[test]
    fn test_platform_membership() {
        let p = Predicate::platforms([Platform::IOS, Platform::Mac]);
        assert!(p.satisfied_by(&ctx(Platform::Mac, 4, 20)));
        assert!(p.satisfied_by(&ctx(Platform::IOS, 4, 20)));
        assert!(!p.satisfied_by(&ctx(Platform::Win64, 4, 20)));
    }

    #[test]
    fn test_version_gate_opens_and_stays_open() {
        let p = Predicate::engine_at_least(4, 19);
        assert!(!p.satisfied_by(&ctx(Platform::Win64, 4, 18)));
        assert!(p.satisfied_by(&ctx(Platform::Win64, 4, 19)));
        assert!(p.satisfied_by(&ctx(Platform::Win64, 4, 25)));
        assert!(p.satisfied_by(&ctx(Platform::Win64, 5, 0)));
    }

    #[test]
    fn test_version_gate_major_takes_precedence() {
        // 5.0 >= 4.19 even though 0 < 19
        let p = Predicate::engine_at_least(4, 19);
        assert!(p.satisfied_by(&ctx(Platform::Win64, 5, 0)));
        assert!(!Predicate::engine_at_least(5, 1).satisfied_by(&ctx(Platform::Win64, 4, 27)));
    }

    #[test]
    fn test_editor_only() {
        let game = ctx(Platform::Win64, 4, 20);
        let editor = game.with_editor(true);
        assert!(!Predicate::EditorOnly.satisfied_by(&game));
        assert!(Predicate::EditorOnly.satisfied_by(&editor));
    }

    #[test]
    fn test_conjunction() {
        let p = Predicate::All(vec![
            Predicate::platforms([Platform::Mac]),
            Predicate::engine_at_least(4, 19),
        ]);
        assert!(p.satisfied_by(&ctx(Platform::Mac, 4, 20)));
        assert!(!p.satisfied_by(&ctx(Platform::Mac, 4, 18)));
        assert!(!p.satisfied_by(&ctx(Platform::Win64, 4, 20)));
    }
}

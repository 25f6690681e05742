//! Build context types
//!
//! A `BuildContext` captures everything the resolver is allowed to depend on
//! for one resolution: the target platform, the host engine version, and the
//! build-mode flags. It is constructed once per (module, platform, version)
//! combination by the orchestrator and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target platforms the build rules can branch on.
///
/// This is a closed set: the rules only ever name platforms the host
/// orchestrator can actually target. Names are case-sensitive exact matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Win32,
    Win64,
    Mac,
    IOS,
    Android,
    Linux,
    PS4,
    XboxOne,
    Switch,
    HoloLens,
}

impl Platform {
    /// All supported platforms, in a stable order.
    pub const ALL: [Platform; 10] = [
        Platform::Win32,
        Platform::Win64,
        Platform::Mac,
        Platform::IOS,
        Platform::Android,
        Platform::Linux,
        Platform::PS4,
        Platform::XboxOne,
        Platform::Switch,
        Platform::HoloLens,
    ];

    /// The canonical name used by the orchestrator for this platform.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Win32 => "Win32",
            Platform::Win64 => "Win64",
            Platform::Mac => "Mac",
            Platform::IOS => "IOS",
            Platform::Android => "Android",
            Platform::Linux => "Linux",
            Platform::PS4 => "PS4",
            Platform::XboxOne => "XboxOne",
            Platform::Switch => "Switch",
            Platform::HoloLens => "HoloLens",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown platform '{}'", s))
    }
}

/// Host engine version as an ordered (major, minor) pair.
///
/// Ordering is lexicographic: major first, minor as tie-break. This is the
/// only comparison the version gates need; feature gates open at a version
/// and stay open for every later one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EngineVersion {
    pub major: u16,
    pub minor: u16,
}

impl EngineVersion {
    /// Create a version from its major and minor components.
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for EngineVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for EngineVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| format!("invalid engine version '{}': expected MAJOR.MINOR", s))?;
        let major = major
            .parse::<u16>()
            .map_err(|_| format!("invalid major version in '{}'", s))?;
        let minor = minor
            .parse::<u16>()
            .map_err(|_| format!("invalid minor version in '{}'", s))?;
        Ok(Self { major, minor })
    }
}

/// The inputs one resolution is a function of.
///
/// Constructed once per resolution by the orchestrator; the resolver only
/// reads it. `unity_build_requested` is advisory: a module may override it
/// with its `faster_without_unity` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildContext {
    /// Target platform being compiled for.
    pub platform: Platform,
    /// Version of the host engine the module is compiled into.
    pub engine_version: EngineVersion,
    /// Whether this is an editor target (as opposed to a game/shipping target).
    pub building_editor: bool,
    /// Whether the orchestrator asked for unity (combined translation unit) builds.
    pub unity_build_requested: bool,
}

impl BuildContext {
    /// Create a context for a game target with unity builds requested.
    pub fn new(platform: Platform, engine_version: EngineVersion) -> Self {
        Self {
            platform,
            engine_version,
            building_editor: false,
            unity_build_requested: true,
        }
    }

    /// Set whether this context targets the editor.
    pub fn with_editor(mut self, building_editor: bool) -> Self {
        self.building_editor = building_editor;
        self
    }

    /// Set whether the orchestrator requested unity builds.
    pub fn with_unity_build(mut self, requested: bool) -> Self {
        self.unity_build_requested = requested;
        self
    }
}

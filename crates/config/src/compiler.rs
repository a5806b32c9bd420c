//! zksolc compiler settings.
//!
//! The compiler subsystem consumes a [`CompilerSettings`] as-is. The same value must be handed to
//! the verification subsystem, otherwise the bytecode it rebuilds will not match what was deployed.

use clap::ValueEnum;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::{fmt, num::NonZeroU32};

use crate::ConfigError;

/// zksolc release used when none is configured.
pub const DEFAULT_COMPILER_VERSION: Version = Version::new(1, 5, 6);

/// Solidity release used when none is configured.
pub const DEFAULT_LANGUAGE_VERSION: Version = Version::new(0, 8, 25);

/// Optimizer runs used when none are configured.
pub const DEFAULT_OPTIMIZER_RUNS: NonZeroU32 = NonZeroU32::new(200).unwrap();

/// How the compiler subsystem obtains the `zksolc` executable.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMode {
    /// Download the prebuilt release binary.
    #[default]
    Binary,
    /// Build the compiler from source.
    #[serde(alias = "native")]
    NativeBuild,
}

impl SourceMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::NativeBuild => "native-build",
        }
    }
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated optimizer settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct OptimizerSettings {
    /// Whether the optimizer is enabled.
    pub enabled: bool,
    /// Optimizer iteration count. Must match between compile and verify.
    pub runs: NonZeroU32,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self { enabled: true, runs: DEFAULT_OPTIMIZER_RUNS }
    }
}

/// Validated compiler settings, as consumed by the compiler subsystem.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CompilerSettings {
    /// The zksolc release.
    pub version: Version,
    /// Where the zksolc executable comes from.
    pub source_mode: SourceMode,
    pub optimizer: OptimizerSettings,
}

impl CompilerSettings {
    /// Returns the optimizer runs as a plain integer.
    pub fn optimizer_runs(&self) -> u32 {
        self.optimizer.runs.get()
    }

    /// Returns true if the compiler subsystem has to download a prebuilt binary.
    pub fn uses_prebuilt_binary(&self) -> bool {
        self.source_mode == SourceMode::Binary
    }

    pub(crate) fn to_input(&self) -> CompilerSettingsInput {
        CompilerSettingsInput {
            version: self.version.to_string(),
            source: self.source_mode,
            optimizer: OptimizerInput {
                enabled: self.optimizer.enabled,
                runs: i64::from(self.optimizer.runs.get()),
            },
        }
    }
}

/// The `[compiler]` table as written on disk, before validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettingsInput {
    /// zksolc version, must be a full semantic version.
    pub version: String,
    #[serde(default)]
    pub source: SourceMode,
    #[serde(default)]
    pub optimizer: OptimizerInput,
}

impl Default for CompilerSettingsInput {
    fn default() -> Self {
        Self {
            version: DEFAULT_COMPILER_VERSION.to_string(),
            source: SourceMode::default(),
            optimizer: OptimizerInput::default(),
        }
    }
}

impl CompilerSettingsInput {
    pub(crate) fn validate(&self) -> Result<CompilerSettings, ConfigError> {
        Ok(CompilerSettings {
            version: parse_version("compiler version", &self.version)?,
            source_mode: self.source,
            optimizer: self.optimizer.validate()?,
        })
    }
}

/// The `[compiler.optimizer]` table as written on disk.
///
/// `runs` is signed so that a negative value reaches validation instead of failing to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerInput {
    pub enabled: bool,
    pub runs: i64,
}

impl Default for OptimizerInput {
    fn default() -> Self {
        Self { enabled: true, runs: i64::from(DEFAULT_OPTIMIZER_RUNS.get()) }
    }
}

impl OptimizerInput {
    fn validate(&self) -> Result<OptimizerSettings, ConfigError> {
        let runs = u32::try_from(self.runs)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(ConfigError::InvalidOptimizerRuns(self.runs))?;
        Ok(OptimizerSettings { enabled: self.enabled, runs })
    }
}

/// Parses a strict `MAJOR.MINOR.PATCH` version.
pub(crate) fn parse_version(field: &'static str, value: &str) -> Result<Version, ConfigError> {
    Version::parse(value).map_err(|source| ConfigError::InvalidVersion {
        field,
        value: value.to_string(),
        source,
    })
}

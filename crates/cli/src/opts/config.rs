use std::path::{Path, PathBuf};

use clap::{Parser, ValueHint};
use eyre::Result;
use zkdeploy_config::{SourceMode, ToolchainConfig, ToolchainConfigInput};

/// Where to load `zkdeploy.toml` from, and values merged on top of the file and environment.
#[derive(Clone, Debug, Default, Parser)]
#[command(next_help_heading = "Config options")]
pub struct ConfigArgs {
    /// The project's root path.
    ///
    /// By default this is the current working directory.
    #[arg(long, value_hint = ValueHint::DirPath, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// The network to make active instead of the default network.
    #[arg(long = "env", value_name = "NAME", env = "ZKDEPLOY_ENV")]
    pub environment: Option<String>,

    /// The zksolc version to use.
    #[arg(long = "zksolc", value_name = "VERSION", help_heading = "Compiler overrides")]
    pub compiler_version: Option<String>,

    /// Where to get zksolc from.
    #[arg(long, value_enum, value_name = "SOURCE", help_heading = "Compiler overrides")]
    pub compiler_source: Option<SourceMode>,

    /// The number of optimizer runs.
    #[arg(
        long,
        value_name = "RUNS",
        allow_negative_numbers = true,
        help_heading = "Compiler overrides"
    )]
    pub optimizer_runs: Option<i64>,

    /// Disable the optimizer.
    #[arg(long, help_heading = "Compiler overrides")]
    pub no_optimizer: bool,

    /// The Solidity version to use.
    #[arg(long, value_name = "VERSION", help_heading = "Compiler overrides")]
    pub language_version: Option<String>,

    /// Overrides `default_network`.
    #[arg(long, value_name = "NAME")]
    pub default_network: Option<String>,
}

impl ConfigArgs {
    /// Returns the project root, defaulting to the current directory.
    pub fn root(&self) -> &Path {
        self.root.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Returns the path of the config file that will be read.
    pub fn config_path(&self) -> PathBuf {
        self.root().join(ToolchainConfig::FILE_NAME)
    }

    /// Loads the file and environment layers, merges the cli overrides and validates the result.
    pub fn load_config(&self) -> Result<ToolchainConfig> {
        let input = ToolchainConfig::extract_input(ToolchainConfig::figment_with_root(self.root()))?;
        let input = self.apply_overrides(input);
        let environment = self.environment.as_deref().filter(|env| !env.is_empty());
        trace!(root = %self.root().display(), ?environment, "loading config");
        Ok(ToolchainConfig::from_input_for_environment(input, environment)?)
    }

    /// Merge the current cli arguments into the specified config input
    pub(crate) fn apply_overrides(&self, mut input: ToolchainConfigInput) -> ToolchainConfigInput {
        macro_rules! set_if_some {
            ($src:expr, $dst:expr) => {
                if let Some(src) = $src {
                    $dst = src.into();
                }
            };
        }

        set_if_some!(self.compiler_version.clone(), input.compiler.version);
        set_if_some!(self.compiler_source, input.compiler.source);
        set_if_some!(self.optimizer_runs, input.compiler.optimizer.runs);
        set_if_some!(self.no_optimizer.then_some(false), input.compiler.optimizer.enabled);
        set_if_some!(self.language_version.clone(), input.language_version);
        set_if_some!(self.default_network.clone(), input.default_network);

        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_only_what_is_set() {
        let args = ConfigArgs::parse_from([
            "zkdeploy",
            "--optimizer-runs",
            "-3",
            "--no-optimizer",
            "--compiler-source",
            "native-build",
        ]);
        let input = args.apply_overrides(ToolchainConfigInput::default());
        assert_eq!(input.compiler.optimizer.runs, -3);
        assert!(!input.compiler.optimizer.enabled);
        assert_eq!(input.compiler.source, SourceMode::NativeBuild);
        assert_eq!(input.compiler.version, ToolchainConfigInput::default().compiler.version);
        assert_eq!(input.default_network, None);
    }

    #[test]
    fn overrides_default_network() {
        let args = ConfigArgs::parse_from(["zkdeploy", "--default-network", "zksync-sepolia"]);
        let input = args.apply_overrides(ToolchainConfigInput::default());
        assert_eq!(input.default_network.as_deref(), Some("zksync-sepolia"));
    }
}

use std::{fs, path::PathBuf};

use clap::{Parser, ValueHint};
use eyre::Result;
use yansi::Paint;
use zkdeploy_config::{ToolchainConfig, ZKSYNC_MAINNET, ZKSYNC_SEPOLIA};

/// CLI arguments for `zkdeploy init`.
#[derive(Clone, Debug, Parser)]
pub struct InitArgs {
    /// The directory to write `zkdeploy.toml` to.
    ///
    /// By default this is the current working directory.
    #[arg(long, value_hint = ValueHint::DirPath, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Overwrite an existing `zkdeploy.toml`.
    #[arg(long, short)]
    pub force: bool,

    /// Make zkSync Era Sepolia the default network instead of mainnet.
    #[arg(long)]
    pub testnet: bool,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let Self { root, force, testnet } = self;
        let root = root.unwrap_or_else(|| PathBuf::from("."));
        let path = root.join(ToolchainConfig::FILE_NAME);

        if path.exists() && !force {
            eyre::bail!("`{}` already exists, pass `--force` to overwrite it", path.display());
        }

        let default_network = if testnet { ZKSYNC_SEPOLIA } else { ZKSYNC_MAINNET };
        let config = ToolchainConfig::builder()
            .with_known_networks()
            .default_network(default_network)
            .build()?;

        fs::create_dir_all(&root)?;
        fs::write(&path, config.to_string_pretty()?)?;
        debug!(path = %path.display(), default_network, "wrote config");

        println!("{} {}", "Created".green().bold(), path.display());
        Ok(())
    }
}

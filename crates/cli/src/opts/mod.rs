use clap::{Parser, Subcommand};

use crate::cmd::{check::CheckArgs, init::InitArgs, show::ShowArgs};

mod config;
pub use config::ConfigArgs;

/// Validate, inspect and scaffold the configuration of a zkSync build/deploy toolchain.
#[derive(Parser)]
#[command(name = "zkdeploy", version, next_display_order = None)]
pub struct Zkdeploy {
    #[command(subcommand)]
    pub cmd: ZkdeploySubcommand,
}

#[derive(Subcommand)]
pub enum ZkdeploySubcommand {
    /// Load and validate the configuration.
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// Print the resolved configuration, or the subsystem views of one network.
    Show(ShowArgs),

    /// Write a `zkdeploy.toml` with the default settings.
    Init(InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Zkdeploy::command().debug_assert();
    }
}

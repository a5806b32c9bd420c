use clap::Parser;
use eyre::Result;
use yansi::Paint;

use crate::opts::ConfigArgs;

/// CLI arguments for `zkdeploy check`.
#[derive(Clone, Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let config = self.config.load_config()?;
        let compiler = config.compiler();
        let target = config.active_network_target();
        info!(network = target.name, "configuration is valid");

        let path = self.config.config_path();
        if path.is_file() {
            println!("{} {}", "Valid".green().bold(), path.display());
        } else {
            println!(
                "{} configuration from `ZKDEPLOY_*` environment variables",
                "Valid".green().bold()
            );
        }
        println!("  zksolc     {} ({})", compiler.version, compiler.source_mode);
        if compiler.optimizer.enabled {
            println!("  optimizer  enabled, {} runs", compiler.optimizer_runs());
        } else {
            println!("  optimizer  disabled");
        }
        println!("  solidity   {}", config.language_version());
        println!(
            "  network    {} -> {} ({}, settles to {})",
            target.name,
            target.rpc_url,
            target.transaction_kind(),
            target.underlying_chain
        );
        if target.name != config.default_network_name() {
            println!("  default    {}", config.default_network_name());
        }
        Ok(())
    }
}

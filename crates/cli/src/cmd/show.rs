use clap::Parser;
use eyre::{Result, eyre};
use serde::Serialize;
use zkdeploy_config::{NetworkTarget, VerificationTarget};

use crate::opts::ConfigArgs;

/// CLI arguments for `zkdeploy show`.
#[derive(Clone, Debug, Parser)]
pub struct ShowArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Only show what the deployment and verification subsystems receive for this network.
    #[arg(long, value_name = "NAME")]
    pub network: Option<String>,

    /// Print JSON instead of TOML.
    #[arg(long)]
    pub json: bool,
}

/// The per-subsystem views of one network.
#[derive(Serialize)]
struct NetworkView<'a> {
    deployment: NetworkTarget<'a>,
    transaction_kind: String,
    verification: VerificationTarget<'a>,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let config = self.config.load_config()?;

        let Some(name) = self.network.as_deref() else {
            if self.json {
                println!("{}", serde_json::to_string_pretty(&config.to_input())?);
            } else {
                print!("{}", config.to_string_pretty()?);
            }
            return Ok(());
        };

        let not_configured = || {
            let available = config.networks().keys().cloned().collect::<Vec<_>>().join(", ");
            eyre!("network `{name}` is not configured (available: {available})")
        };
        let deployment = config.network_target(name).ok_or_else(not_configured)?;
        let verification = config.verification_target(name).ok_or_else(not_configured)?;

        if self.json {
            let view = NetworkView {
                deployment,
                transaction_kind: deployment.transaction_kind().to_string(),
                verification,
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        } else {
            println!("network           {}", deployment.name);
            println!("rpc url           {}", deployment.rpc_url);
            println!("underlying chain  {}", deployment.underlying_chain);
            println!("transactions      {}", deployment.transaction_kind());
            println!("verify url        {}", verification.verify_url);
            println!("zksolc            {}", verification.compiler.version);
            println!(
                "optimizer         {} ({} runs)",
                verification.compiler.optimizer.enabled,
                verification.compiler.optimizer_runs()
            );
        }
        Ok(())
    }
}

use clap::Parser;
use eyre::Result;

use crate::{
    opts::{Zkdeploy, ZkdeploySubcommand},
    utils,
};

/// Run the `zkdeploy` command line interface.
pub fn run() -> Result<()> {
    setup()?;

    let args = Zkdeploy::parse();
    run_command(args)
}

/// Setup the error handler, the global logger and terminal colors.
pub fn setup() -> Result<()> {
    color_eyre::config::HookBuilder::default()
        .capture_span_trace_by_default(false)
        .display_env_section(false)
        .install()?;
    utils::enable_paint();
    utils::subscriber();

    Ok(())
}

/// Run the subcommand.
pub fn run_command(args: Zkdeploy) -> Result<()> {
    match args.cmd {
        ZkdeploySubcommand::Check(cmd) => cmd.run(),
        ZkdeploySubcommand::Show(cmd) => cmd.run(),
        ZkdeploySubcommand::Init(cmd) => cmd.run(),
    }
}

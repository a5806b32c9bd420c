//! Subcommands of the `zkdeploy` CLI.

pub mod check;
pub mod init;
pub mod show;

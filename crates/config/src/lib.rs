//! zkdeploy configuration.
//!
//! [`ToolchainConfig`] is the validated, immutable descriptor the compiler, deployment and
//! verification subsystems are parametrized with. Build it from literals with [`ConfigBuilder`],
//! or load `zkdeploy.toml` layered with `ZKDEPLOY_` environment variables through
//! [`ToolchainConfig::load`].

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod builder;
pub use builder::ConfigBuilder;

pub mod compiler;
pub use compiler::{
    CompilerSettings, CompilerSettingsInput, OptimizerInput, OptimizerSettings, SourceMode,
};

mod config;
pub use config::{ToolchainConfig, ToolchainConfigInput};

mod error;
pub use error::ConfigError;

pub mod network;
pub use network::{
    IN_PROCESS_NETWORK, InProcessNetwork, NetworkDescriptor, NetworkDescriptorInput, NetworkTarget,
    TransactionKind, VerificationTarget, ZKSYNC_MAINNET, ZKSYNC_SEPOLIA,
};

mod providers;
pub use providers::HardhatCompatProvider;

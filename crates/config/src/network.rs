//! Network registry entries and the views handed to the deployment and verification subsystems.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::{CompilerSettings, ConfigError};

/// Registry key of the zkSync Era mainnet preset.
pub const ZKSYNC_MAINNET: &str = "zksync-mainnet";

/// Registry key of the zkSync Era Sepolia testnet preset.
pub const ZKSYNC_SEPOLIA: &str = "zksync-sepolia";

/// A validated registry entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NetworkDescriptor {
    /// JSON-RPC endpoint of the network.
    pub rpc_url: Url,
    /// Name of the base chain the rollup settles to, e.g. `mainnet` or `sepolia`.
    pub underlying_chain: String,
    /// Selects rollup-aware transaction encoding and gas estimation.
    pub rollup: bool,
    /// Endpoint the verification subsystem submits source and compiler metadata to.
    pub verify_url: Url,
}

impl NetworkDescriptor {
    pub fn transaction_kind(&self) -> TransactionKind {
        TransactionKind::from_rollup_flag(self.rollup)
    }

    pub(crate) fn to_input(&self) -> NetworkDescriptorInput {
        NetworkDescriptorInput {
            rpc_url: self.rpc_url.to_string(),
            underlying_chain: self.underlying_chain.clone(),
            rollup: self.rollup,
            verify_url: self.verify_url.to_string(),
        }
    }
}

/// A `[networks.<name>]` table as written on disk, before validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescriptorInput {
    pub rpc_url: String,
    pub underlying_chain: String,
    #[serde(default)]
    pub rollup: bool,
    pub verify_url: String,
}

impl NetworkDescriptorInput {
    pub fn new(
        rpc_url: impl Into<String>,
        underlying_chain: impl Into<String>,
        rollup: bool,
        verify_url: impl Into<String>,
    ) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            underlying_chain: underlying_chain.into(),
            rollup,
            verify_url: verify_url.into(),
        }
    }

    /// zkSync Era mainnet, settling to Ethereum mainnet.
    pub fn zksync_mainnet() -> Self {
        Self::new(
            "https://mainnet.era.zksync.io",
            "mainnet",
            true,
            "https://zksync2-mainnet-explorer.zksync.io/contract_verification",
        )
    }

    /// zkSync Era Sepolia testnet, settling to Sepolia.
    pub fn zksync_sepolia() -> Self {
        Self::new(
            "https://sepolia.era.zksync.dev",
            "sepolia",
            true,
            "https://explorer.sepolia.era.zksync.dev/contract_verification",
        )
    }

    /// Returns the built-in presets keyed by their registry name.
    pub fn known_networks() -> [(&'static str, Self); 2] {
        [(ZKSYNC_MAINNET, Self::zksync_mainnet()), (ZKSYNC_SEPOLIA, Self::zksync_sepolia())]
    }

    pub(crate) fn validate(&self, network: &str) -> Result<NetworkDescriptor, ConfigError> {
        let parse_url = |field: &'static str, value: &str| {
            Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
                network: network.to_string(),
                field,
                value: value.to_string(),
                source,
            })
        };

        let rpc_url = parse_url("rpc_url", &self.rpc_url)?;
        let verify_url = parse_url("verify_url", &self.verify_url)?;

        if self.underlying_chain.trim().is_empty() {
            return Err(ConfigError::EmptyUnderlyingChain(network.to_string()));
        }

        Ok(NetworkDescriptor {
            rpc_url,
            underlying_chain: self.underlying_chain.clone(),
            rollup: self.rollup,
            verify_url,
        })
    }
}

/// Name the hardhat layout gives the in-process network. It is not a registry key.
pub const IN_PROCESS_NETWORK: &str = "hardhat";

/// The host's built-in in-memory network. It has no endpoint, only the execution mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct InProcessNetwork {
    pub rollup: bool,
}

impl Default for InProcessNetwork {
    fn default() -> Self {
        Self { rollup: true }
    }
}

/// Transaction encoding and gas estimation rules the deployment subsystem must use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Rollup-aware (EIP-712) transactions with rollup gas semantics.
    Rollup,
    /// Standard-chain transactions.
    Standard,
}

impl TransactionKind {
    pub const fn from_rollup_flag(rollup: bool) -> Self {
        if rollup { Self::Rollup } else { Self::Standard }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rollup => f.write_str("rollup"),
            Self::Standard => f.write_str("standard"),
        }
    }
}

/// What the network/deployment subsystem needs to reach a network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkTarget<'a> {
    pub name: &'a str,
    pub rpc_url: &'a Url,
    pub underlying_chain: &'a str,
    pub rollup: bool,
}

impl<'a> NetworkTarget<'a> {
    pub(crate) fn new(name: &'a str, network: &'a NetworkDescriptor) -> Self {
        Self {
            name,
            rpc_url: &network.rpc_url,
            underlying_chain: &network.underlying_chain,
            rollup: network.rollup,
        }
    }

    pub fn transaction_kind(&self) -> TransactionKind {
        TransactionKind::from_rollup_flag(self.rollup)
    }
}

/// What the verification subsystem needs after a deployment: where to submit, which explorer
/// family to talk to, and the exact compiler settings the artifact was built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct VerificationTarget<'a> {
    pub network: &'a str,
    pub verify_url: &'a Url,
    pub underlying_chain: &'a str,
    pub compiler: &'a CompilerSettings,
}

impl<'a> VerificationTarget<'a> {
    pub(crate) fn new(
        name: &'a str,
        network: &'a NetworkDescriptor,
        compiler: &'a CompilerSettings,
    ) -> Self {
        Self {
            network: name,
            verify_url: &network.verify_url,
            underlying_chain: &network.underlying_chain,
            compiler,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for (name, input) in NetworkDescriptorInput::known_networks() {
            let network = input.validate(name).unwrap();
            assert!(network.rollup);
            assert_eq!(network.transaction_kind(), TransactionKind::Rollup);
        }
        let mainnet = NetworkDescriptorInput::zksync_mainnet().validate(ZKSYNC_MAINNET).unwrap();
        assert_eq!(mainnet.underlying_chain, "mainnet");
        assert_eq!(mainnet.rpc_url.host_str(), Some("mainnet.era.zksync.io"));
    }

    #[test]
    fn rejects_malformed_rpc_url() {
        let input = NetworkDescriptorInput::new("not a url", "mainnet", true, "https://x.org/v");
        let err = input.validate("broken").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidUrl { ref network, field: "rpc_url", .. } if network == "broken"
        ));
    }

    #[test]
    fn rejects_malformed_verify_url() {
        let input = NetworkDescriptorInput::new("https://x.org/rpc", "mainnet", true, "/verify");
        let err = input.validate("broken").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { field: "verify_url", .. }));
        assert!(err.to_string().contains("network `broken`"), "{err}");
    }

    #[test]
    fn rejects_blank_underlying_chain() {
        let input = NetworkDescriptorInput::new("https://x.org/rpc", "  ", false, "https://x.org/v");
        let err = input.validate("blank").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyUnderlyingChain(ref name) if name == "blank"));
    }

    #[test]
    fn standard_chain_target() {
        let network = NetworkDescriptorInput::new(
            "http://127.0.0.1:8545",
            "local",
            false,
            "http://127.0.0.1:3010/contract_verification",
        )
        .validate("l1")
        .unwrap();
        let target = NetworkTarget::new("l1", &network);
        assert_eq!(target.transaction_kind(), TransactionKind::Standard);
        assert_eq!(target.rpc_url.port(), Some(8545));
    }
}

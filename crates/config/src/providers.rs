//! Custom figment providers.

use figment::{
    Error, Metadata, Profile, Provider,
    value::{Dict, Map, Tag, Value},
};

use crate::network::IN_PROCESS_NETWORK;

/// Keys that only a real network entry carries, in either layout.
const ENDPOINT_KEYS: [&str; 6] =
    ["url", "rpc_url", "ethNetwork", "underlying_chain", "verifyURL", "verify_url"];

/// Accepts files written in the hardhat-zksync layout by translating its keys into ours.
///
/// ```toml
/// defaultNetwork = "zkSyncTestnet"
///
/// [zksolc]
/// version = "1.5.6"
/// compilerSource = "binary"
/// settings.optimizer = { enabled = true, runs = 200 }
///
/// [networks.hardhat]
/// zksync = true
///
/// [networks.zkSyncTestnet]
/// url = "https://mainnet.era.zksync.io"
/// ethNetwork = "mainnet"
/// zksync = true
/// verifyURL = "https://zksync2-mainnet-explorer.zksync.io/contract_verification"
///
/// [solidity]
/// version = "0.8.25"
/// ```
///
/// When both spellings of a key are present, ours wins.
///
/// `networks.hardhat` becomes `in_process` unless it carries endpoint keys, in which case it is
/// kept as a regular network.
pub struct HardhatCompatProvider<P>(P);

impl<P: Provider> HardhatCompatProvider<P> {
    pub fn new(inner: P) -> Self {
        Self(inner)
    }
}

impl<P: Provider> Provider for HardhatCompatProvider<P> {
    fn metadata(&self) -> Metadata {
        self.0.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut data = self.0.data()?;
        for dict in data.values_mut() {
            translate(dict);
        }
        Ok(data)
    }

    fn profile(&self) -> Option<Profile> {
        self.0.profile()
    }
}

fn translate(dict: &mut Dict) {
    rename(dict, "defaultNetwork", "default_network");

    if let Some(Value::Dict(tag, mut zksolc)) = take_dict(dict, "zksolc") {
        rename(&mut zksolc, "compilerSource", "source");
        if let Some(Value::Dict(_, mut settings)) = take_dict(&mut zksolc, "settings")
            && let Some(optimizer) = settings.remove("optimizer")
        {
            zksolc.entry("optimizer".to_string()).or_insert(optimizer);
        }
        dict.entry("compiler".to_string()).or_insert(Value::Dict(tag, zksolc));
    }

    if let Some(Value::Dict(_, mut solidity)) = take_dict(dict, "solidity")
        && let Some(version) = solidity.remove("version")
    {
        dict.entry("language_version".to_string()).or_insert(version);
    }

    let mut in_process = None;
    if let Some(Value::Dict(_, networks)) = dict.get_mut("networks") {
        if is_in_process_entry(networks.get(IN_PROCESS_NETWORK))
            && let Some(Value::Dict(_, mut hardhat)) = take_dict(networks, IN_PROCESS_NETWORK)
        {
            rename(&mut hardhat, "zksync", "rollup");
            in_process = Some(hardhat);
        } else if networks.contains_key(IN_PROCESS_NETWORK) {
            warn!(
                target: "zkdeploy::config",
                network = IN_PROCESS_NETWORK,
                "network has endpoint keys, treating it as a regular network"
            );
        }
        for (name, network) in networks.iter_mut() {
            if let Value::Dict(_, network) = network {
                trace!(target: "zkdeploy::config", %name, "translating hardhat network keys");
                rename(network, "url", "rpc_url");
                rename(network, "ethNetwork", "underlying_chain");
                rename(network, "zksync", "rollup");
                rename(network, "verifyURL", "verify_url");
            }
        }
    }
    if let Some(in_process) = in_process {
        dict.entry("in_process".to_string()).or_insert(Value::Dict(Tag::Default, in_process));
    }
}

fn is_in_process_entry(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Dict(_, entry)) => !ENDPOINT_KEYS.iter().any(|key| entry.contains_key(*key)),
        _ => false,
    }
}

fn rename(dict: &mut Dict, from: &str, to: &str) {
    if let Some(value) = dict.remove(from) {
        debug!(target: "zkdeploy::config", from, to, "using hardhat key");
        dict.entry(to.to_string()).or_insert(value);
    }
}

/// Removes `key` only if it holds a table.
fn take_dict(dict: &mut Dict, key: &str) -> Option<Value> {
    match dict.get(key) {
        Some(Value::Dict(..)) => dict.remove(key),
        _ => None,
    }
}

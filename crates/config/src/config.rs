use figment::{
    Figment, Provider,
    providers::{Env, Format, Serialized, Toml},
};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

use crate::{
    CompilerSettings, CompilerSettingsInput, ConfigBuilder, ConfigError, HardhatCompatProvider,
    InProcessNetwork, NetworkDescriptor, NetworkDescriptorInput, NetworkTarget, VerificationTarget,
    compiler::{DEFAULT_LANGUAGE_VERSION, parse_version},
    network::IN_PROCESS_NETWORK,
};

/// The validated toolchain descriptor.
///
/// Built once at startup and only read afterwards. There is no way to change a field in place;
/// reconfiguring means building a new value. It is `Send + Sync` and can be shared by reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolchainConfig {
    compiler: CompilerSettings,
    language_version: Version,
    default_network: String,
    active_network: String,
    networks: BTreeMap<String, NetworkDescriptor>,
    in_process: InProcessNetwork,
}

impl ToolchainConfig {
    /// File name of the config toml.
    pub const FILE_NAME: &'static str = "zkdeploy.toml";

    /// Prefix of environment variables overriding file values. Nested keys are separated by `__`,
    /// e.g. `ZKDEPLOY_COMPILER__OPTIMIZER__RUNS=800`.
    ///
    /// Keys are lowercased, so `ZKDEPLOY_NETWORKS__<NAME>__...` only reaches networks whose name
    /// is all lowercase. For a network named `mainRollup` it adds a separate, incomplete
    /// `mainrollup` entry and extraction fails.
    pub const ENV_PREFIX: &'static str = "ZKDEPLOY_";

    /// Environment variable selecting the active network.
    pub const ENV_SELECTOR: &'static str = "ZKDEPLOY_ENV";

    /// Returns a builder seeded with the defaults.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Loads the config from `zkdeploy.toml` in the current directory.
    ///
    /// See [`Self::load_with_root`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_root(".")
    }

    /// Loads `zkdeploy.toml` from `root`, layered with `ZKDEPLOY_` environment variables.
    ///
    /// The active network is taken from `ZKDEPLOY_ENV` if it is set.
    pub fn load_with_root(root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let environment = std::env::var(Self::ENV_SELECTOR).ok().filter(|env| !env.is_empty());
        Self::from_provider_for_environment(Self::figment_with_root(root), environment.as_deref())
    }

    /// Returns the layered providers used by [`Self::load_with_root`]: defaults, then the toml
    /// file, then the environment.
    ///
    /// Only `root/zkdeploy.toml` itself is read, parent directories are never searched.
    pub fn figment_with_root(root: impl AsRef<Path>) -> Figment {
        let path = root.as_ref().join(Self::FILE_NAME);
        trace!(target: "zkdeploy::config", path = %path.display(), "building figment");
        Figment::from(Serialized::defaults(ToolchainConfigInput::default()))
            .merge(HardhatCompatProvider::new(Toml::file_exact(path)))
            .merge(Env::prefixed(Self::ENV_PREFIX).ignore(&["env"]).split("__"))
    }

    /// Extracts and validates a config from any figment provider.
    pub fn from_provider<T: Provider>(provider: T) -> Result<Self, ConfigError> {
        Self::from_provider_for_environment(provider, None)
    }

    /// Like [`Self::from_provider`], with `environment` selecting the active network.
    pub fn from_provider_for_environment<T: Provider>(
        provider: T,
        environment: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let input = Self::extract_input(provider)?;
        Self::from_input_for_environment(input, environment)
    }

    /// Extracts the unvalidated input shape from a provider.
    pub fn extract_input<T: Provider>(provider: T) -> Result<ToolchainConfigInput, ConfigError> {
        Ok(Figment::from(provider).extract()?)
    }

    /// Validates `input`. The active network is the default network.
    pub fn from_input(input: ToolchainConfigInput) -> Result<Self, ConfigError> {
        Self::from_input_for_environment(input, None)
    }

    /// Validates `input`, making `environment` the active network if given.
    pub fn from_input_for_environment(
        input: ToolchainConfigInput,
        environment: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let compiler = input.compiler.validate()?;
        let language_version = parse_version("language version", &input.language_version)?;

        let networks = input
            .networks
            .iter()
            .map(|(name, network)| Ok((name.clone(), network.validate(name)?)))
            .collect::<Result<BTreeMap<_, _>, ConfigError>>()?;

        let default_network = input.default_network.ok_or(ConfigError::MissingDefaultNetwork)?;
        if default_network == IN_PROCESS_NETWORK && !networks.contains_key(&default_network) {
            return Err(ConfigError::InProcessDefaultNetwork(default_network));
        }
        if !networks.contains_key(&default_network) {
            return Err(ConfigError::UnknownDefaultNetwork {
                name: default_network,
                available: networks.keys().cloned().collect(),
            });
        }

        let active_network = match environment {
            Some(name) if networks.contains_key(name) => {
                debug!(target: "zkdeploy::config", environment = name, "selected environment");
                name.to_string()
            }
            Some(name) => {
                return Err(ConfigError::UnknownEnvironment {
                    name: name.to_string(),
                    available: networks.keys().cloned().collect(),
                });
            }
            None => default_network.clone(),
        };

        debug!(
            target: "zkdeploy::config",
            compiler = %compiler.version,
            language = %language_version,
            networks = networks.len(),
            active = %active_network,
            "validated toolchain config"
        );

        Ok(Self {
            compiler,
            language_version,
            default_network,
            active_network,
            networks,
            in_process: input.in_process,
        })
    }

    /// The compiler settings, exactly as the compiler subsystem must use them.
    pub fn compiler(&self) -> &CompilerSettings {
        &self.compiler
    }

    /// The Solidity version, independent of the zksolc version.
    pub fn language_version(&self) -> &Version {
        &self.language_version
    }

    pub fn default_network_name(&self) -> &str {
        &self.default_network
    }

    pub fn default_network(&self) -> &NetworkDescriptor {
        &self.networks[&self.default_network]
    }

    /// Name of the network selected by the environment, or the default network.
    pub fn active_network_name(&self) -> &str {
        &self.active_network
    }

    pub fn active_network(&self) -> &NetworkDescriptor {
        &self.networks[&self.active_network]
    }

    pub fn networks(&self) -> &BTreeMap<String, NetworkDescriptor> {
        &self.networks
    }

    pub fn network(&self, name: &str) -> Option<&NetworkDescriptor> {
        self.networks.get(name)
    }

    pub fn in_process(&self) -> InProcessNetwork {
        self.in_process
    }

    /// Returns the deployment subsystem's view of the network named `name`.
    pub fn network_target(&self, name: &str) -> Option<NetworkTarget<'_>> {
        let (name, network) = self.networks.get_key_value(name)?;
        Some(NetworkTarget::new(name, network))
    }

    pub fn active_network_target(&self) -> NetworkTarget<'_> {
        NetworkTarget::new(&self.active_network, self.active_network())
    }

    /// Returns the verification subsystem's view of the network named `name`, carrying the same
    /// compiler settings used for building.
    pub fn verification_target(&self, name: &str) -> Option<VerificationTarget<'_>> {
        let (name, network) = self.networks.get_key_value(name)?;
        Some(VerificationTarget::new(name, network, &self.compiler))
    }

    pub fn active_verification_target(&self) -> VerificationTarget<'_> {
        VerificationTarget::new(&self.active_network, self.active_network(), &self.compiler)
    }

    /// Converts back to the on-disk shape.
    pub fn to_input(&self) -> ToolchainConfigInput {
        ToolchainConfigInput {
            language_version: self.language_version.to_string(),
            default_network: Some(self.default_network.clone()),
            compiler: self.compiler.to_input(),
            networks: self
                .networks
                .iter()
                .map(|(name, network)| (name.clone(), network.to_input()))
                .collect(),
            in_process: self.in_process,
        }
    }

    /// Serializes the config as pretty `zkdeploy.toml` contents.
    pub fn to_string_pretty(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&self.to_input())?)
    }
}

impl TryFrom<ToolchainConfigInput> for ToolchainConfig {
    type Error = ConfigError;

    fn try_from(input: ToolchainConfigInput) -> Result<Self, Self::Error> {
        Self::from_input(input)
    }
}

/// The whole `zkdeploy.toml` as written on disk, before validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainConfigInput {
    /// Solidity version.
    #[serde(default = "default_language_version")]
    pub language_version: String,
    /// Must name one of `networks`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_network: Option<String>,
    #[serde(default)]
    pub compiler: CompilerSettingsInput,
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkDescriptorInput>,
    #[serde(default)]
    pub in_process: InProcessNetwork,
}

impl Default for ToolchainConfigInput {
    fn default() -> Self {
        Self {
            language_version: default_language_version(),
            default_network: None,
            compiler: Default::default(),
            networks: Default::default(),
            in_process: Default::default(),
        }
    }
}

fn default_language_version() -> String {
    DEFAULT_LANGUAGE_VERSION.to_string()
}

use crate::{
    ConfigError, NetworkDescriptorInput, SourceMode, ToolchainConfig, ToolchainConfigInput,
};

/// Creates a [`ToolchainConfig`] from literals.
///
/// Starts from the defaults: zksolc `1.5.6` from the prebuilt binary, optimizer enabled with 200
/// runs, Solidity `0.8.25`, and an empty network registry. Nothing is checked until
/// [`ConfigBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    input: ToolchainConfigInput,
    environment: Option<String>,
}

impl ConfigBuilder {
    /// Creates a new instance of [ConfigBuilder].
    pub fn new() -> Self {
        Default::default()
    }

    /// Starts from an existing input instead of the defaults.
    pub fn from_input(input: ToolchainConfigInput) -> Self {
        Self { input, environment: None }
    }

    /// Sets the zksolc version.
    pub fn compiler_version(mut self, version: impl Into<String>) -> Self {
        self.input.compiler.version = version.into();
        self
    }

    /// Sets where zksolc comes from.
    pub fn source_mode(mut self, mode: SourceMode) -> Self {
        self.input.compiler.source = mode;
        self
    }

    /// Enables or disables the optimizer.
    pub fn optimizer_enabled(mut self, enabled: bool) -> Self {
        self.input.compiler.optimizer.enabled = enabled;
        self
    }

    /// Sets the optimizer runs.
    pub fn optimizer_runs(mut self, runs: i64) -> Self {
        self.input.compiler.optimizer.runs = runs;
        self
    }

    /// Sets the Solidity version.
    pub fn language_version(mut self, version: impl Into<String>) -> Self {
        self.input.language_version = version.into();
        self
    }

    /// Sets the default network. It must be registered by the time [`Self::build`] is called.
    pub fn default_network(mut self, name: impl Into<String>) -> Self {
        self.input.default_network = Some(name.into());
        self
    }

    /// Registers a network, replacing any previous entry with the same name.
    pub fn network(mut self, name: impl Into<String>, network: NetworkDescriptorInput) -> Self {
        self.input.networks.insert(name.into(), network);
        self
    }

    /// Registers the zkSync Era mainnet and Sepolia presets.
    pub fn with_known_networks(mut self) -> Self {
        for (name, network) in NetworkDescriptorInput::known_networks() {
            self.input.networks.insert(name.to_string(), network);
        }
        self
    }

    /// Sets whether the in-process network runs in rollup mode.
    pub fn in_process_rollup(mut self, rollup: bool) -> Self {
        self.input.in_process.rollup = rollup;
        self
    }

    /// Selects the active network.
    pub fn environment(mut self, name: impl Into<String>) -> Self {
        self.environment = Some(name.into());
        self
    }

    /// Returns the accumulated, unvalidated input.
    pub fn input(&self) -> &ToolchainConfigInput {
        &self.input
    }

    /// Validates and builds the [`ToolchainConfig`].
    pub fn build(self) -> Result<ToolchainConfig, ConfigError> {
        ToolchainConfig::from_input_for_environment(self.input, self.environment.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ZKSYNC_MAINNET, ZKSYNC_SEPOLIA, compiler::DEFAULT_COMPILER_VERSION};

    #[test]
    fn defaults_mirror_the_reference_setup() {
        let config = ConfigBuilder::new()
            .with_known_networks()
            .default_network(ZKSYNC_MAINNET)
            .build()
            .unwrap();
        assert_eq!(config.compiler().version, DEFAULT_COMPILER_VERSION);
        assert_eq!(config.compiler().source_mode, SourceMode::Binary);
        assert!(config.compiler().optimizer.enabled);
        assert_eq!(config.compiler().optimizer_runs(), 200);
        assert_eq!(config.language_version().to_string(), "0.8.25");
        assert_eq!(config.networks().len(), 2);
        assert!(config.in_process().rollup);
    }

    #[test]
    fn environment_switches_without_editing_networks() {
        let builder = ConfigBuilder::new().with_known_networks().default_network(ZKSYNC_MAINNET);

        let mainnet = builder.clone().build().unwrap();
        let testnet = builder.environment(ZKSYNC_SEPOLIA).build().unwrap();

        assert_eq!(mainnet.networks(), testnet.networks());
        assert_eq!(mainnet.active_network().underlying_chain, "mainnet");
        assert_eq!(testnet.active_network().underlying_chain, "sepolia");
        assert_ne!(mainnet, testnet);
    }

    #[test]
    fn build_validates() {
        let err = ConfigBuilder::new()
            .network("l2", NetworkDescriptorInput::zksync_sepolia())
            .default_network("l2")
            .optimizer_runs(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOptimizerRuns(0)));

        let config = ConfigBuilder::new()
            .network("l2", NetworkDescriptorInput::zksync_sepolia())
            .default_network("l2")
            .compiler_version("1.5.15")
            .language_version("0.8.28")
            .source_mode(SourceMode::NativeBuild)
            .optimizer_enabled(false)
            .in_process_rollup(false)
            .build()
            .unwrap();
        assert_eq!(config.compiler().version.to_string(), "1.5.15");
        assert!(!config.compiler().uses_prebuilt_binary());
        assert!(!config.compiler().optimizer.enabled);
        assert!(!config.in_process().rollup);
    }

    #[test]
    fn from_input_keeps_values() {
        let config = ConfigBuilder::new()
            .with_known_networks()
            .default_network(ZKSYNC_SEPOLIA)
            .build()
            .unwrap();
        let rebuilt = ConfigBuilder::from_input(config.to_input()).build().unwrap();
        assert_eq!(config, rebuilt);
    }

    #[test]
    fn input_exposes_unvalidated_values() {
        let builder = ConfigBuilder::new().default_network("l2").optimizer_runs(-3);
        assert_eq!(builder.input().default_network.as_deref(), Some("l2"));
        assert_eq!(builder.input().compiler.optimizer.runs, -3);
        assert!(builder.input().networks.is_empty());

        let err = builder.build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOptimizerRuns(-3)));
    }
}

/// Everything that can go wrong while building a [`ToolchainConfig`](crate::ToolchainConfig).
///
/// Any of these is fatal: a descriptor is either fully valid or it does not exist.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `default_network` was not set.
    #[error("no default network configured, set `default_network` to one of the `[networks]`")]
    MissingDefaultNetwork,

    #[error(
        "default network `{name}` is not in the network registry (available: {list})",
        list = available_list(.available)
    )]
    UnknownDefaultNetwork { name: String, available: Vec<String> },

    /// `default_network` names the in-process network, which has no endpoint to deploy to.
    #[error(
        "default network `{0}` is the in-process network, set `default_network` to one of the `[networks]`"
    )]
    InProcessDefaultNetwork(String),

    #[error(
        "environment `{name}` does not select a configured network (available: {list})",
        list = available_list(.available)
    )]
    UnknownEnvironment { name: String, available: Vec<String> },

    #[error("optimizer runs must be a positive integer no larger than {max}, got {0}", max = u32::MAX)]
    InvalidOptimizerRuns(i64),

    #[error("invalid {field} for network `{network}`: {value:?}: {source}")]
    InvalidUrl {
        network: String,
        field: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid {field} {value:?}: {source}")]
    InvalidVersion {
        field: &'static str,
        value: String,
        #[source]
        source: semver::Error,
    },

    #[error("network `{0}` has an empty underlying chain name")]
    EmptyUnderlyingChain(String),

    /// The layered providers could not be extracted into the input shape.
    #[error("failed to extract configuration: {0}")]
    Extract(#[from] figment::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

fn available_list(available: &[String]) -> String {
    if available.is_empty() { "none".to_string() } else { available.join(", ") }
}

//! Ledger Connection Models

use serde::Deserialize;

/// Peer discovery settings for a connection.
///
/// Unset keys keep their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DiscoveryPolicy {
    /// Let the gateway discover endorsing peers from the channel
    pub enabled: bool,
    /// Map every discovered endpoint host to `localhost`
    pub as_localhost: bool,
}

impl Default for DiscoveryPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            as_localhost: true,
        }
    }
}

/// Channel and contract the gateway is bound to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractBinding {
    channel: String,
    contract: String,
}

impl ContractBinding {
    #[must_use]
    pub fn new(channel: impl Into<String>, contract: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            contract: contract.into(),
        }
    }

    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    #[must_use]
    pub fn contract(&self) -> &str {
        &self.contract
    }
}

impl std::fmt::Display for ContractBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.channel, self.contract)
    }
}

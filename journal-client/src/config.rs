//! Configuration structures for the journal client.
//!
//! All context a browser dApp would pull from framework providers (cluster
//! selection, RPC endpoint, commitment, wallet) is modeled here as explicit
//! structs, deserialized from a TOML file and passed into the data-access
//! layer by the application's composition root.

use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::CommitmentLevel;
use std::fmt;

/// The top-level configuration for the journal client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct ClientConfig {
    pub cluster: Cluster,
    pub solana: Solana,
    pub wallet: Wallet,
    pub channels: ChannelConfig,
    pub log: LogSection,
}

/// A named blockchain network environment.
///
/// Every cache key embeds the cluster's name, so results fetched on one
/// cluster can never be served for another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    #[default]
    Localnet,
    Devnet,
    Testnet,
    MainnetBeta,
    /// A custom environment, scoped by its own name.
    Custom(String),
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cluster::Localnet => "localnet",
            Cluster::Devnet => "devnet",
            Cluster::Testnet => "testnet",
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Custom(name) => name,
        };
        f.write_str(name)
    }
}

/// Defines the connection settings for the Solana cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Solana {
    pub rpc_url: String,
    #[serde(with = "serde_commitment")]
    pub commitment: CommitmentLevel,
}

/// Points at the keypair the demo binary signs with. Optional: without it the
/// client runs in read-only mode and mutations fail with a no-signer error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Wallet {
    pub keypair_path: Option<String>,
}

/// Defines capacities for the MPSC channels within the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ChannelConfig {
    /// The buffer capacity for the notification channel.
    pub notification_buffer: usize,
}

/// Logging section, forwarded verbatim to `journal-logger`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct LogSection {
    pub level: String,
}

impl Default for Solana {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8899".to_string(),
            commitment: CommitmentLevel::Confirmed,
        }
    }
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            notification_buffer: 128,
        }
    }
}

mod serde_commitment {

    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(c: &CommitmentLevel, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match c {
            CommitmentLevel::Processed => "Processed",
            CommitmentLevel::Confirmed => "Confirmed",
            CommitmentLevel::Finalized => "Finalized",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<CommitmentLevel, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        let level = match s.to_lowercase().as_str() {
            "processed" => CommitmentLevel::Processed,
            "confirmed" => CommitmentLevel::Confirmed,
            "finalized" => CommitmentLevel::Finalized,
            _ => CommitmentLevel::Confirmed,
        };
        Ok(level)
    }
}

//! A small demonstration binary for the journal client.
//!
//! Loads `journal.toml` (falling back to defaults targeting a local
//! validator), initializes logging, then lists the journal entries on the
//! configured cluster. With a wallet configured it also runs a full
//! create → fetch → update → delete round trip.

use anyhow::{Context, Result};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::{read_keypair_file, Keypair};
use std::sync::Arc;

use journal_client::client::{entry_address, JournalClient, Provider};
use journal_client::config::ClientConfig;
use journal_client::data_access::{JournalCaches, JournalProgram};
use journal_client::notify;

const CONFIG_FILE: &str = "journal";

fn load_config() -> Result<ClientConfig> {
    let config = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .build()
        .context("Failed to read configuration")?;
    config
        .try_deserialize()
        .context("Failed to parse configuration")
}

fn load_wallet(config: &ClientConfig) -> Result<Option<Arc<Keypair>>> {
    let Some(path) = config.wallet.keypair_path.as_deref() else {
        return Ok(None);
    };
    let keypair = read_keypair_file(path)
        .map_err(|err| anyhow::anyhow!("Failed to read keypair from {path}: {err}"))?;
    Ok(Some(Arc::new(keypair)))
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = load_config()?;
    journal_logger::init(&journal_logger::LogConfig {
        level: config.log.level.clone(),
        ..Default::default()
    })?;
    tracing::info!(cluster = %config.cluster, rpc_url = %config.solana.rpc_url, "Starting journal client");

    let rpc_client = Arc::new(RpcClient::new_with_commitment(
        config.solana.rpc_url.clone(),
        CommitmentConfig {
            commitment: config.solana.commitment,
        },
    ));
    let wallet = load_wallet(&config)?;

    let client = Arc::new(JournalClient::new(Provider {
        rpc_client,
        wallet: wallet.clone(),
        commitment: config.solana.commitment,
    }));

    let (notifier, notifier_handle) = notify::channel(config.channels.notification_buffer);
    tokio::spawn(notifier.run());

    let caches = Arc::new(JournalCaches::new());
    let program = JournalProgram::new(client, config.cluster.clone(), caches, notifier_handle);

    match program.program_account().await? {
        Some(account) => {
            tracing::info!(lamports = account.lamports, "Journal program account found")
        }
        None => tracing::warn!("Journal program is not deployed on this cluster"),
    }

    let entries = program.list_all().await?;
    tracing::info!(count = entries.len(), "Fetched journal entries");
    for item in &entries {
        tracing::info!(address = %item.address, title = %item.entry.title, "entry");
    }

    let Some(wallet) = wallet else {
        tracing::info!("No wallet configured; skipping the mutation round trip");
        return Ok(());
    };

    // Full round trip with the connected wallet.
    use solana_sdk::signer::Signer;
    let title = "hello-from-rust";
    let owner = wallet.pubkey();

    let signature = program.create_entry(title, "created by the demo binary").await?;
    tracing::info!(%signature, "Created entry");

    let handle = program.entry(entry_address(title, &owner));
    let entry = handle.fetch_one().await?;
    tracing::info!(message = %entry.message, "Fetched entry");

    let signature = handle.update_entry(title, "updated by the demo binary").await?;
    tracing::info!(%signature, "Updated entry");

    let signature = handle.delete_entry(title).await?;
    tracing::info!(%signature, "Deleted entry");

    Ok(())
}

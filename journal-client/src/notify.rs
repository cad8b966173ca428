//! # Notification Sink
//!
//! Mutations report their outcome here instead of returning UI concerns to
//! the caller: a confirmed transaction signature on success, a message string
//! on failure. A background [`Notifier`] drains the channel; the default
//! `run` loop logs through `tracing`, while UIs (and tests) can consume the
//! channel themselves via [`Notifier::recv`] to render toasts or assertions.

use solana_sdk::signature::Signature;
use tokio::sync::mpsc;

/// A single user-facing notification.
#[derive(Debug, Clone)]
pub enum Notification {
    /// A mutation's transaction was confirmed under this signature.
    TransactionConfirmed(Signature),
    /// A query or mutation failed; the message is ready for display.
    OperationFailed(String),
}

/// The consuming end of the notification channel.
#[derive(Debug)]
pub struct Notifier {
    rx: mpsc::Receiver<Notification>,
}

/// The sending end, cloned into every data-access handle.
#[derive(Clone, Debug)]
pub struct NotifierHandle {
    tx: mpsc::Sender<Notification>,
}

/// Creates a notification channel with the given buffer capacity.
pub fn channel(capacity: usize) -> (Notifier, NotifierHandle) {
    let (tx, rx) = mpsc::channel(capacity);
    (Notifier { rx }, NotifierHandle { tx })
}

impl NotifierHandle {
    /// Reports a confirmed transaction.
    pub async fn notify_confirmed(&self, signature: Signature) {
        if self
            .tx
            .send(Notification::TransactionConfirmed(signature))
            .await
            .is_err()
        {
            tracing::warn!("Failed to send notification, notifier may be down");
        }
    }

    /// Reports a failed operation with a display-ready message.
    pub async fn notify_error(&self, message: impl Into<String>) {
        if self
            .tx
            .send(Notification::OperationFailed(message.into()))
            .await
            .is_err()
        {
            tracing::warn!("Failed to send error notification, notifier may be down");
        }
    }
}

impl Notifier {
    /// Receives the next notification, or `None` once every handle is dropped.
    pub async fn recv(&mut self) -> Option<Notification> {
        self.rx.recv().await
    }

    /// Runs the default drain loop, logging each notification.
    pub async fn run(mut self) {
        tracing::info!("Notifier started. Waiting for mutation outcomes...");
        while let Some(notification) = self.rx.recv().await {
            match notification {
                Notification::TransactionConfirmed(signature) => {
                    tracing::info!(%signature, "Transaction confirmed");
                }
                Notification::OperationFailed(message) => {
                    tracing::error!(%message, "Operation failed");
                }
            }
        }
        tracing::info!("All notification handles closed. Notifier shutting down.");
    }
}

//! OS signal handling
//!
//! Raw mode turns Ctrl+C into a key press, so only external termination
//! (SIGTERM, SIGHUP when the terminal goes away) reaches this handler.

use propdesk_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Spawn a task that turns a termination signal into [`Message::Quit`]
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        if let Err(e) = wait_for_signal().await {
            error!("Signal handler error: {}", e);
            return;
        }

        if tx.send(Message::Quit).await.is_err() {
            debug!("UI gone before the quit signal could be delivered");
        }
    });
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;
    let mut sighup = signal(SignalKind::hangup())
        .map_err(|e| Error::terminal(format!("Failed to create SIGHUP handler: {}", e)))?;

    tokio::select! {
        _ = sigterm.recv() => info!("Received SIGTERM"),
        _ = sighup.recv() => info!("Received SIGHUP"),
    }
    Ok(())
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<()> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
    info!("Received Ctrl+C");
    Ok(())
}

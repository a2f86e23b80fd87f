//! Homework review watcher.
//!
//! Polls the Practicum homework-status API every ten minutes and forwards
//! status changes of the latest submission to a Telegram chat. Repeated
//! identical messages are suppressed; any failure inside a cycle is
//! reported to the same chat and polling continues.
//!
//! Required environment (or `.env`):
//! - `PRACTICUM_TOKEN` — OAuth token for the homework API
//! - `TELEGRAM_TOKEN` — bot token
//! - `TELEGRAM_CHAT_ID` — destination chat

use anyhow::Result;
use tracing::info;

mod config;
mod error;
mod notifier;
mod poller;
mod practicum;

use notifier::TelegramNotifier;
use poller::Poller;
use practicum::PracticumClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("🎓 Homework bot v{}", env!("CARGO_PKG_VERSION"));

    // ── Credentials, then collaborators ─────────────────────────────
    // Nothing touches the network until all three credentials are present.
    dotenv::dotenv().ok();
    let mut poller = Poller::bootstrap(
        |name| std::env::var(name).ok(),
        |config| Ok((PracticumClient::new(config)?, TelegramNotifier::new(config))),
    )?;

    // ── Poll loop ───────────────────────────────────────────────────
    poller.run_forever().await;

    Ok(())
}

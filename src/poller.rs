//! Review-status poller — fetch, validate, derive, deduplicate, notify, sleep.
//!
//! Runs forever on a fixed interval. Every error inside an iteration is
//! caught here, reported to the chat as a failure message, and the loop
//! carries on after the usual sleep.

use chrono::Utc;
use serde_json::Value;
use tokio::time;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::BotResult;
use crate::notifier::Notifier;
use crate::practicum::{check_response, derive_message, StatusSource};

/// In-memory state carried between iterations.
#[derive(Debug, Clone, Default)]
pub struct PollState {
    /// `from_date` for the next request; `None` falls back to "now".
    pub current_timestamp: Option<i64>,
    pub last_sent_message: Option<String>,
}

/// What a single iteration ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Sent(String),
    Unchanged,
    Failed(&'static str),
}

pub struct Poller<S, N> {
    config: Config,
    source: S,
    notifier: N,
    state: PollState,
}

impl<S: StatusSource, N: Notifier> Poller<S, N> {
    pub fn new(config: Config, source: S, notifier: N) -> Self {
        Self {
            config,
            source,
            notifier,
            state: PollState {
                current_timestamp: Some(Utc::now().timestamp()),
                last_sent_message: None,
            },
        }
    }

    /// Check credentials, then build the collaborators from the resulting config.
    ///
    /// `build` only runs once every credential is present, so a missing one
    /// never reaches the network.
    pub fn bootstrap<L, B>(lookup: L, build: B) -> BotResult<Self>
    where
        L: Fn(&str) -> Option<String>,
        B: FnOnce(&Config) -> BotResult<(S, N)>,
    {
        let config = Config::from_lookup(lookup).map_err(|e| {
            error!(fatal = true, "{}", e);
            e
        })?;
        info!(config = ?config, "Configuration loaded");

        let (source, notifier) = build(&config)?;
        Ok(Self::new(config, source, notifier))
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Poll until the process is killed.
    pub async fn run_forever(&mut self) {
        info!(
            interval_secs = self.config.retry_interval.as_secs(),
            "📡 Homework poller starting"
        );

        loop {
            let outcome = self.run_once().await;
            debug!(
                outcome = ?outcome,
                next_from_date = ?self.state().current_timestamp,
                "Cycle finished"
            );
            time::sleep(self.config.retry_interval).await;
        }
    }

    /// One iteration, including the best-effort failure report.
    pub async fn run_once(&mut self) -> CycleOutcome {
        match self.check_and_notify().await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(kind = e.kind(), "Сбой в работе программы: {}", e);
                let message = format!("Сбой в работе программы: {}", e);
                if let Err(send_err) = self.notifier.notify(&message).await {
                    error!("Failure report could not be delivered: {}", send_err);
                }
                CycleOutcome::Failed(e.kind())
            }
        }
    }

    async fn check_and_notify(&mut self) -> BotResult<CycleOutcome> {
        let response = self.source.fetch_status(self.state.current_timestamp).await?;
        self.state.current_timestamp = response.get("current_date").and_then(Value::as_i64);

        let homeworks = check_response(&response)?;
        let message = derive_message(homeworks)?;

        if self.state.last_sent_message.as_deref() == Some(message.as_str()) {
            info!("Status unchanged — nothing to send");
            return Ok(CycleOutcome::Unchanged);
        }

        self.notifier.notify(&message).await?;
        info!(message = %message, "📨 Status notification sent");
        self.state.last_sent_message = Some(message.clone());
        Ok(CycleOutcome::Sent(message))
    }
}

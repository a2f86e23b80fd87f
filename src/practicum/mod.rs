//! Homework review API — the source side of the poller.
//!
//! The poller only talks to [`StatusSource`]; `PracticumClient` is the real
//! HTTP implementation, tests substitute an in-memory one.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::BotResult;

pub mod client;
pub mod status;

pub use client::PracticumClient;
pub use status::{check_response, derive_message};

#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the raw status payload for submissions changed since `from_date`.
    ///
    /// `None` means "now". The body is returned unvalidated; shape checks
    /// belong to [`check_response`].
    async fn fetch_status(&self, from_date: Option<i64>) -> BotResult<Value>;
}

//! Practicum adapter — OAuth-authenticated GET against the status endpoint.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, error};

use super::StatusSource;
use crate::config::Config;
use crate::error::{BotError, BotResult};

pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(config: &Config) -> BotResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| BotError::fetch_caused_by(format!("Не удалось создать HTTP-клиент: {}", e), e))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
        })
    }
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn fetch_status(&self, from_date: Option<i64>) -> BotResult<Value> {
        let timestamp = from_date.unwrap_or_else(|| Utc::now().timestamp());
        debug!(from_date = timestamp, endpoint = %self.endpoint, "Requesting homework statuses");

        let resp = self.client.get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", timestamp)])
            .send().await
            .map_err(|e| {
                error!("Endpoint unreachable: {}", e);
                BotError::fetch_caused_by(format!("Эндпоинт {} недоступен: {}", self.endpoint, e), e)
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            error!(status = status.as_u16(), "Request failed");
            return Err(BotError::fetch(format!("Запрос не удался: код ошибки {}", status.as_u16())));
        }

        resp.json::<Value>().await.map_err(|e| {
            error!("Response body is not JSON: {}", e);
            BotError::fetch_caused_by(format!("Ответ API не является JSON: {}", e), e)
        })
    }
}

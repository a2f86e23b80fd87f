//! Error kinds raised while polling and reporting.
//!
//! Every variant except [`BotError::Token`] is recoverable: the poller
//! catches it at the iteration boundary and turns it into a failure
//! notification. `Token` only ever comes out of start-up.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    /// Transport failure, non-200 status or undecodable body.
    #[error("{message}")]
    Fetch {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Ответ API некорректен: {0}")]
    Shape(String),

    #[error("Ответ API некорректен: отсутствует ключ «{0}»")]
    MissingKey(&'static str),

    #[error("Такой домашней работы нет в системе: отсутствует поле «{0}»")]
    MissingField(&'static str),

    #[error("Такого статуса не существует: {0}")]
    UnknownStatus(String),

    #[error("Не удалось отправить сообщение: {source}")]
    Delivery {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Отсутствует обязательная переменная окружения {name}")]
    Token { name: &'static str },
}

pub type BotResult<T> = Result<T, BotError>;

impl BotError {
    pub fn fetch(message: impl Into<String>) -> Self {
        BotError::Fetch { message: message.into(), source: None }
    }

    pub fn fetch_caused_by<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        BotError::Fetch { message: message.into(), source: Some(Box::new(source)) }
    }

    pub fn delivery<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        BotError::Delivery { source: Box::new(source) }
    }

    /// Short stable tag, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            BotError::Fetch { .. } => "fetch",
            BotError::Shape(_) => "shape",
            BotError::MissingKey(_) => "missing_key",
            BotError::MissingField(_) => "missing_field",
            BotError::UnknownStatus(_) => "unknown_status",
            BotError::Delivery { .. } => "delivery",
            BotError::Token { .. } => "token",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_message_includes_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = BotError::fetch_caused_by("Эндпоинт недоступен: refused", io);
        assert_eq!(err.kind(), "fetch");
        assert!(err.to_string().contains("refused"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_token_error_names_variable() {
        let err = BotError::Token { name: "TELEGRAM_TOKEN" };
        assert_eq!(
            err.to_string(),
            "Отсутствует обязательная переменная окружения TELEGRAM_TOKEN"
        );
    }
}

//! Response validation and status → message mapping.
//!
//! Both functions work on the raw JSON so every malformed payload maps to a
//! precise [`BotError`] kind instead of a generic deserialisation failure.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{BotError, BotResult};

pub const NO_HOMEWORK_MESSAGE: &str = "В указанные даты домашних заданий не найдено";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Check the payload shape and return its `homeworks` list unchanged.
///
/// Order of checks: top level is an object, both `current_date` and
/// `homeworks` are present, `homeworks` is an array.
pub fn check_response(response: &Value) -> BotResult<&Vec<Value>> {
    let obj = response.as_object().ok_or_else(|| {
        error!("API response is not an object");
        BotError::Shape("ответ API не является словарем".into())
    })?;

    for key in ["current_date", "homeworks"] {
        if !obj.contains_key(key) {
            error!(key, "API response is missing a required key");
            return Err(BotError::MissingKey(key));
        }
    }

    let homeworks = obj["homeworks"].as_array().ok_or_else(|| {
        error!("API response `homeworks` is not a list");
        BotError::Shape("по ключу «homeworks» находится не список".into())
    })?;

    debug!(count = homeworks.len(), "API response is valid");
    Ok(homeworks)
}

/// Build the notification for the most recent submission (first element).
pub fn derive_message(homeworks: &[Value]) -> BotResult<String> {
    let Some(homework) = homeworks.first() else {
        return Ok(NO_HOMEWORK_MESSAGE.to_string());
    };

    let name = homework
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            error!(homework = %homework, "Homework record has no name");
            BotError::MissingField("homework_name")
        })?;

    let raw_status = homework.get("status").cloned().unwrap_or(Value::Null);
    let status = HomeworkStatus::deserialize(&raw_status).map_err(|_| {
        error!(status = %raw_status, "Unknown homework status");
        BotError::UnknownStatus(raw_status.to_string())
    })?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

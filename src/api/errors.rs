use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (ростер, индексы).
    BadRequest(String),

    /// Команда не может быть выполнена в текущем состоянии.
    InvalidCommand(String),

    /// Ошибка движка ротации.
    EngineError(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::RosterTooSmall(_) | EngineError::DuplicateName(_) => {
                ApiError::BadRequest(err.to_string())
            }
            _ => ApiError::EngineError(err.to_string()),
        }
    }
}

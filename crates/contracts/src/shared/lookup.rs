//! Контракт всплывающего окна поиска (lookup popup)
//!
//! Окно поиска возвращает выбранное значение странице-владельцу через
//! `postMessage`. Сообщение типизировано и проверяется на приёмной стороне.

use serde::{Deserialize, Serialize};

/// Значение поля `type` сообщения с выбранным значением
pub const LOOKUP_MESSAGE_TYPE: &str = "lookup_value";

/// Ответ справочных эндпоинтов `/api/lookup/*`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Сообщение popup → opener с выбранным значением
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    /// id поля формы в окне-владельце
    pub target: String,
    pub value: String,
}

impl LookupMessage {
    pub fn new(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            message_type: LOOKUP_MESSAGE_TYPE.to_string(),
            target: target.into(),
            value: value.into(),
        }
    }

    /// Проверка сообщения на границе окна
    pub fn validate(self) -> Result<Self, String> {
        if self.message_type != LOOKUP_MESSAGE_TYPE {
            return Err(format!("Unexpected message type: {}", self.message_type));
        }
        if self.target.trim().is_empty() {
            return Err("Lookup message without target field".to_string());
        }
        Ok(self)
    }
}

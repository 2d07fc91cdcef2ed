//! Общие serde-хелперы для DTO, приходящих из ERP

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Читает строковое поле ERP, которое может прийти строкой, числом или `null`.
///
/// `null` и отсутствующее значение превращаются в пустую строку. Пробелы по
/// краям обрезаются: CHAR-колонки SQL Server дополняются пробелами.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    })
}

/// То же, что [`lenient_string`], но пустое значение становится `None`.
pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = lenient_string(deserializer)?;
    Ok(if s.is_empty() { None } else { Some(s) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_string")]
        code: String,
        #[serde(default, deserialize_with = "lenient_opt_string")]
        note: Option<String>,
    }

    #[test]
    fn test_lenient_string_accepts_numbers_and_null() {
        let p: Probe = serde_json::from_str(r#"{"code": 42, "note": null}"#).unwrap();
        assert_eq!(p.code, "42");
        assert_eq!(p.note, None);
    }

    #[test]
    fn test_lenient_string_trims_padding() {
        let p: Probe = serde_json::from_str(r#"{"code": "  A1 ", "note": "  "}"#).unwrap();
        assert_eq!(p.code, "A1");
        assert_eq!(p.note, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.code, "");
        assert_eq!(p.note, None);
    }
}

use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::{lenient_opt_string, lenient_string};

/// Подсемейство артикула (строка справочника ERP).
///
/// Код уникален только в пределах своего семейства.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubfamilyDto {
    #[serde(rename = "COD_SUBFAM", default, deserialize_with = "lenient_string")]
    pub code: String,

    #[serde(rename = "DES_SUBFAM", default, deserialize_with = "lenient_opt_string")]
    pub description: Option<String>,
}

impl SubfamilyDto {
    pub fn new(code: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            code: code.into(),
            description: description.map(str::to_string),
        }
    }
}

/// Ответ `GET /api/{domain}/subfamilies?family=<code>`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubfamiliesResponse {
    #[serde(default)]
    pub subfamilies: Vec<SubfamilyDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wire_names() {
        let json = r#"{"subfamilies":[
            {"COD_SUBFAM":"A ","DES_SUBFAM":"Tornillería"},
            {"COD_SUBFAM":7,"DES_SUBFAM":null}
        ]}"#;
        let resp: SubfamiliesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            resp.subfamilies,
            vec![
                SubfamilyDto::new("A", Some("Tornillería")),
                SubfamilyDto::new("7", None),
            ]
        );
    }

    #[test]
    fn test_missing_list_is_empty() {
        let resp: SubfamiliesResponse = serde_json::from_str(r#"{"detail":"x"}"#).unwrap();
        assert!(resp.subfamilies.is_empty());
    }
}

use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::lenient_string;

/// Поставщик из `GET /api/lookup/suppliers`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDto {
    #[serde(rename = "BPSNUM_0", default, deserialize_with = "lenient_string")]
    pub number: String,

    #[serde(rename = "BPSNAM_0", default, deserialize_with = "lenient_string")]
    pub name: String,
}

/// Параметры запроса поиска поставщиков
#[derive(Debug, Clone, Serialize)]
pub struct SupplierQuery {
    pub q: String,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lookup::LookupResponse;

    #[test]
    fn test_decode_supplier_items() {
        let json = r#"{"items":[{"BPSNUM_0":"P001","BPSNAM_0":"Aceros Bilbao"}]}"#;
        let resp: LookupResponse<SupplierDto> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.items.len(), 1);
        assert_eq!(resp.items[0].number, "P001");
        assert_eq!(resp.items[0].name, "Aceros Bilbao");
    }
}

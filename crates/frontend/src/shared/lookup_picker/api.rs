use async_trait::async_trait;
use contracts::domain::a026_supplier::dto::{SupplierDto, SupplierQuery};
use contracts::domain::a027_buyer::dto::BuyerDto;
use contracts::enums::LookupKind;
use contracts::shared::lookup::LookupResponse;

use super::controller::LookupSource;
use super::item::LookupItem;
use crate::shared::api_utils::{api_url, fetch_json, FetchError};

pub const SUPPLIERS_PATH: &str = "/api/lookup/suppliers";
pub const BUYERS_PATH: &str = "/api/lookup/buyers";

/// Путь поиска поставщиков с параметрами `q` и `limit`
pub fn suppliers_path(term: &str, limit: u32) -> Result<String, FetchError> {
    let query = SupplierQuery {
        q: term.to_string(),
        limit,
    };
    let qs = serde_qs::to_string(&query)
        .map_err(|e| FetchError::Network(format!("query encoding failed: {}", e)))?;
    Ok(format!("{}?{}", SUPPLIERS_PATH, qs))
}

pub async fn fetch_suppliers(term: &str, limit: u32) -> Result<Vec<SupplierDto>, FetchError> {
    let url = api_url(&suppliers_path(term, limit)?);
    let data: LookupResponse<SupplierDto> = fetch_json(&url).await?;
    Ok(data.items)
}

/// Полный список закупщиков (фильтруется на клиенте)
pub async fn fetch_buyers() -> Result<Vec<BuyerDto>, FetchError> {
    let data: LookupResponse<BuyerDto> = fetch_json(&api_url(BUYERS_PATH)).await?;
    Ok(data.items)
}

/// Справочники `/api/lookup/*`
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiLookupSource;

#[async_trait(?Send)]
impl LookupSource for ApiLookupSource {
    async fn search(
        &self,
        kind: LookupKind,
        term: &str,
        limit: u32,
    ) -> Result<Vec<LookupItem>, FetchError> {
        let items = match kind {
            LookupKind::Suppliers => fetch_suppliers(term, limit)
                .await?
                .into_iter()
                .map(LookupItem::from)
                .collect(),
            LookupKind::Buyers => fetch_buyers()
                .await?
                .into_iter()
                .map(LookupItem::from)
                .collect(),
        };
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::lookup_picker::traits::LookupSelectable;

    #[test]
    fn test_suppliers_path() {
        assert_eq!(
            suppliers_path("ab", 80).unwrap(),
            "/api/lookup/suppliers?q=ab&limit=80"
        );
    }

    #[test]
    fn test_buyers_payload_maps_to_items() {
        let json = r#"{"items":[{"COD_COM_0":"C01"},{"COD_COM_0":7}]}"#;
        let resp: LookupResponse<BuyerDto> = serde_json::from_str(json).unwrap();
        let items: Vec<LookupItem> = resp.items.into_iter().map(LookupItem::from).collect();
        let values: Vec<&str> = items.iter().map(|item| item.value()).collect();
        assert_eq!(values, vec!["C01", "7"]);
    }
}

use async_trait::async_trait;
use contracts::domain::a025_article_family::dto::{SubfamiliesResponse, SubfamilyDto};

use crate::domain::a025_article_family::ui::subfamily_panel::controller::SubfamilySource;
use crate::shared::api_utils::{api_url, fetch_json, FetchError};

/// Раздел API, если контейнер не задал `data-domain`
pub const DEFAULT_DOMAIN: &str = "zproveart";

/// Путь справочника подсемейств для семейства
pub fn subfamilies_path(domain: &str, family: &str) -> String {
    format!(
        "/api/{}/subfamilies?family={}",
        domain,
        urlencoding::encode(family)
    )
}

/// Получить подсемейства семейства
pub async fn fetch_subfamilies(domain: &str, family: &str) -> Result<Vec<SubfamilyDto>, FetchError> {
    let url = api_url(&subfamilies_path(domain, family));
    let data: SubfamiliesResponse = fetch_json(&url).await?;
    Ok(data.subfamilies)
}

/// Источник подсемейств поверх HTTP API
pub struct ApiSubfamilySource {
    domain: String,
}

impl ApiSubfamilySource {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

#[async_trait(?Send)]
impl SubfamilySource for ApiSubfamilySource {
    async fn subfamilies(&self, family: &str) -> Result<Vec<SubfamilyDto>, FetchError> {
        fetch_subfamilies(&self.domain, family).await
    }
}

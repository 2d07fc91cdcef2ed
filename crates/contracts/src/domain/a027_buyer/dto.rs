use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::lenient_string;

/// Закупщик (код comprador) из `GET /api/lookup/buyers`.
///
/// Сервер отдаёт полный список без фильтрации.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerDto {
    #[serde(rename = "COD_COM_0", default, deserialize_with = "lenient_string")]
    pub code: String,
}

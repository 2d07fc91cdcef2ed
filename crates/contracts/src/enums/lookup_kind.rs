use serde::{Deserialize, Serialize};

/// Виды справочников, открываемых во всплывающем окне поиска
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupKind {
    /// Поставщики: поиск по тексту на сервере
    Suppliers,
    /// Закупщики: фиксированный список, фильтруется на клиенте
    Buyers,
}

impl LookupKind {
    /// Получить код вида (значение `data-kind` и параметра `kind`)
    pub fn code(&self) -> &'static str {
        match self {
            LookupKind::Suppliers => "suppliers",
            LookupKind::Buyers => "buyers",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            LookupKind::Suppliers => "Proveedores",
            LookupKind::Buyers => "Compradores",
        }
    }

    /// Получить все виды
    pub fn all() -> Vec<LookupKind> {
        vec![LookupKind::Suppliers, LookupKind::Buyers]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "suppliers" => Some(LookupKind::Suppliers),
            "buyers" => Some(LookupKind::Buyers),
            _ => None,
        }
    }
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

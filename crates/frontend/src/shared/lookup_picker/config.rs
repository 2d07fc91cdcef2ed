use std::time::Duration;

use contracts::enums::LookupKind;

pub const DEFAULT_DEBOUNCE_MS: u64 = 250;
pub const DEFAULT_MIN_CHARS: usize = 1;
pub const DEFAULT_SUPPLIER_LIMIT: u32 = 80;

/// Политика запуска поиска
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Поиск по тексту на сервере: debounce + минимальная длина
    FreeText,
    /// Весь список за один запрос, фильтрация на клиенте
    FixedList,
}

impl From<LookupKind> for SearchMode {
    fn from(kind: LookupKind) -> Self {
        match kind {
            LookupKind::Suppliers => SearchMode::FreeText,
            LookupKind::Buyers => SearchMode::FixedList,
        }
    }
}

/// Конфигурация окна поиска, которую страница задаёт через `data-*` атрибуты
#[derive(Debug, Clone, PartialEq)]
pub struct LookupConfig {
    pub kind: LookupKind,
    /// id поля формы в окне-владельце
    pub target: String,
    pub debounce: Duration,
    pub min_chars: usize,
    pub limit: u32,
    /// Загрузить фиксированный список сразу при открытии
    pub autoload: bool,
}

impl LookupConfig {
    pub fn new(kind: LookupKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            min_chars: DEFAULT_MIN_CHARS,
            limit: DEFAULT_SUPPLIER_LIMIT,
            autoload: true,
        }
    }

    /// Читает конфигурацию из атрибутов корневого элемента.
    ///
    /// `None`, если нет корректных `data-kind` и `data-target`: окно поиска
    /// тогда просто не активируется. Некорректные необязательные значения
    /// заменяются значениями по умолчанию.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let kind = LookupKind::from_code(&attr("data-kind")?)?;
        let target = attr("data-target")?.trim().to_string();
        if target.is_empty() {
            return None;
        }

        let mut config = Self::new(kind, target);
        if let Some(ms) = attr("data-debounce-ms").and_then(|v| v.trim().parse::<u64>().ok()) {
            config.debounce = Duration::from_millis(ms);
        }
        if let Some(n) = attr("data-min-chars").and_then(|v| v.trim().parse::<usize>().ok()) {
            config.min_chars = n;
        }
        if let Some(n) = attr("data-limit").and_then(|v| v.trim().parse::<u32>().ok()) {
            if n > 0 {
                config.limit = n;
            }
        }
        if let Some(v) = attr("data-autoload") {
            config.autoload = !matches!(v.trim(), "false" | "0" | "no");
        }
        Some(config)
    }

    pub fn mode(&self) -> SearchMode {
        self.kind.into()
    }
}

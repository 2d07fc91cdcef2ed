/// Базовый трейт для элементов, которые можно выбрать в окне поиска
pub trait LookupSelectable {
    /// Значение, которое уходит в поле формы окна-владельца
    fn value(&self) -> &str;
    fn display_name(&self) -> String;
}

/// Трейт для элементов, которые можно отобразить строкой таблицы результатов
pub trait TableDisplayable: LookupSelectable {
    fn cells(&self) -> Vec<String>;
}

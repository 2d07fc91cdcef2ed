use super::traits::{LookupSelectable, TableDisplayable};
use contracts::domain::a026_supplier::dto::SupplierDto;
use contracts::domain::a027_buyer::dto::BuyerDto;

/// Строка результата: поставщик
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupplierItem {
    pub id: String,
    pub name: String,
}

impl From<SupplierDto> for SupplierItem {
    fn from(dto: SupplierDto) -> Self {
        Self {
            id: dto.number,
            name: dto.name,
        }
    }
}

impl LookupSelectable for SupplierItem {
    fn value(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.id, self.name)
    }
}

impl TableDisplayable for SupplierItem {
    fn cells(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone()]
    }
}

/// Строка результата: закупщик (только код)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuyerItem {
    pub id: String,
}

impl From<BuyerDto> for BuyerItem {
    fn from(dto: BuyerDto) -> Self {
        Self { id: dto.code }
    }
}

impl LookupSelectable for BuyerItem {
    fn value(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> String {
        self.id.clone()
    }
}

impl TableDisplayable for BuyerItem {
    fn cells(&self) -> Vec<String> {
        vec![self.id.clone()]
    }
}

/// Результат поиска любого вида
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupItem {
    Supplier(SupplierItem),
    Buyer(BuyerItem),
}

impl LookupItem {
    /// Подстрочный поиск без учёта регистра по значению и названию
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.value().to_lowercase().contains(&term)
            || self.display_name().to_lowercase().contains(&term)
    }
}

impl LookupSelectable for LookupItem {
    fn value(&self) -> &str {
        match self {
            LookupItem::Supplier(item) => item.value(),
            LookupItem::Buyer(item) => item.value(),
        }
    }

    fn display_name(&self) -> String {
        match self {
            LookupItem::Supplier(item) => item.display_name(),
            LookupItem::Buyer(item) => item.display_name(),
        }
    }
}

impl TableDisplayable for LookupItem {
    fn cells(&self) -> Vec<String> {
        match self {
            LookupItem::Supplier(item) => item.cells(),
            LookupItem::Buyer(item) => item.cells(),
        }
    }
}

impl From<SupplierDto> for LookupItem {
    fn from(dto: SupplierDto) -> Self {
        LookupItem::Supplier(dto.into())
    }
}

impl From<BuyerDto> for LookupItem {
    fn from(dto: BuyerDto) -> Self {
        LookupItem::Buyer(dto.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier(id: &str, name: &str) -> LookupItem {
        LookupItem::Supplier(SupplierItem {
            id: id.to_string(),
            name: name.to_string(),
        })
    }

    #[test]
    fn test_matches_is_case_insensitive_on_value_and_name() {
        let item = supplier("P001", "Aceros Bilbao");
        assert!(item.matches("p00"));
        assert!(item.matches("BILB"));
        assert!(item.matches("   "));
        assert!(!item.matches("madrid"));
    }

    #[test]
    fn test_variants_render_different_cells() {
        let buyer = LookupItem::Buyer(BuyerItem { id: "C07".to_string() });
        assert_eq!(buyer.cells(), vec!["C07"]);
        assert_eq!(buyer.value(), "C07");
        assert_eq!(supplier("P001", "Aceros").cells(), vec!["P001", "Aceros"]);
    }
}

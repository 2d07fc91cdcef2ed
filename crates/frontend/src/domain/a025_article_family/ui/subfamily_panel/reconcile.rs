//! Сведение предвыбора подсемейств из нескольких источников.
//!
//! Источники: живые чекбоксы панели и параметры `subfam_<family>` из URL.
//! Пустое множество для семейства означает «применяются все подсемейства».

use std::collections::{BTreeMap, BTreeSet};

use url::form_urlencoded;

/// Семейство → отмеченные коды подсемейств
pub type SelectionSet = BTreeMap<String, BTreeSet<String>>;

/// Префикс параметров URL с подсемействами (`subfam_10=A&subfam_10=B`)
pub const SUBFAM_PARAM_PREFIX: &str = "subfam_";

/// Состояние одного отрисованного чекбокса
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxState {
    pub family: Option<String>,
    pub subfamily: Option<String>,
    pub checked: bool,
}

/// Живое состояние: учитываются только чекбоксы с обоими тегами.
///
/// Семейство попадает в результат, даже если в нём ничего не отмечено.
pub fn live_selection<'a>(boxes: impl IntoIterator<Item = &'a CheckboxState>) -> SelectionSet {
    let mut map = SelectionSet::new();
    for cb in boxes {
        let (Some(family), Some(subfamily)) = (&cb.family, &cb.subfamily) else {
            continue;
        };
        let set = map.entry(family.clone()).or_default();
        if cb.checked {
            set.insert(subfamily.clone());
        }
    }
    map
}

/// Предвыбор из параметров URL вида `subfam_<family>`
pub fn selection_from_query<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> SelectionSet
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut map = SelectionSet::new();
    for (key, value) in pairs {
        let Some(family) = key.as_ref().strip_prefix(SUBFAM_PARAM_PREFIX) else {
            continue;
        };
        if family.is_empty() {
            continue;
        }
        map.entry(family.to_string())
            .or_default()
            .insert(value.as_ref().to_string());
    }
    map
}

/// Разбор query string (`?a=1&b=2`) как `application/x-www-form-urlencoded`
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

/// Выбор авторитетного источника.
///
/// Как только в панели есть хотя бы одно отслеживаемое семейство, живое
/// состояние главнее URL целиком, даже если в нём ничего не отмечено.
pub fn reconcile(live: SelectionSet, from_url: SelectionSet) -> SelectionSet {
    if live.is_empty() {
        from_url
    } else {
        live
    }
}

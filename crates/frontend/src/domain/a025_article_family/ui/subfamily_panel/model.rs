use std::collections::BTreeSet;

use contracts::domain::a025_article_family::dto::SubfamilyDto;

use super::reconcile::{CheckboxState, SUBFAM_PARAM_PREFIX};

pub const LABEL_SELECT_ALL: &str = "Marcar todas";
pub const LABEL_DESELECT_ALL: &str = "Desmarcar todas";

/// Строка чекбокса подсемейства
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubfamilyRow {
    pub code: String,
    /// Подсказка (tooltip), inline не показывается
    pub description: Option<String>,
    pub checked: bool,
}

/// Блок одного семейства в панели фильтров
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyBlock {
    pub family: String,
    pub rows: Vec<SubfamilyRow>,
}

impl FamilyBlock {
    /// Строит блок из ответа сервера и предвыбора для этого семейства.
    ///
    /// Строки с пустым кодом пропускаются. Чекбокс отмечен тогда и только
    /// тогда, когда его код есть в `preselected`.
    pub fn build(
        family: &str,
        records: Vec<SubfamilyDto>,
        preselected: Option<&BTreeSet<String>>,
    ) -> Self {
        let rows = records
            .into_iter()
            .filter_map(|r| {
                let code = r.code.trim().to_string();
                if code.is_empty() {
                    return None;
                }
                let description = r
                    .description
                    .map(|d| d.trim().to_string())
                    .filter(|d| !d.is_empty());
                let checked = preselected.is_some_and(|set| set.contains(&code));
                Some(SubfamilyRow {
                    code,
                    description,
                    checked,
                })
            })
            .collect();

        Self {
            family: family.to_string(),
            rows,
        }
    }

    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Кнопка массового переключения есть только у блока со строками
    pub fn shows_toggle(&self) -> bool {
        self.has_rows()
    }

    pub fn any_unchecked(&self) -> bool {
        self.rows.iter().any(|r| !r.checked)
    }

    /// Имя поля формы, как его ждёт сервер (`subfam_<family>`)
    pub fn field_name(&self) -> String {
        format!("{}{}", SUBFAM_PARAM_PREFIX, self.family)
    }

    pub fn is_checked(&self, code: &str) -> bool {
        self.rows.iter().any(|r| r.code == code && r.checked)
    }

    pub fn set_checked(&mut self, code: &str, checked: bool) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.code == code) {
            row.checked = checked;
        }
    }

    /// Подпись кнопки массового переключения
    pub fn toggle_label(&self) -> &'static str {
        if self.any_unchecked() {
            LABEL_SELECT_ALL
        } else {
            LABEL_DESELECT_ALL
        }
    }

    /// Если хоть одна строка не отмечена, отметить все, иначе снять все
    pub fn toggle_all(&mut self) {
        let check = self.any_unchecked();
        for row in &mut self.rows {
            row.checked = check;
        }
    }

    pub fn checked_codes(&self) -> BTreeSet<String> {
        self.rows
            .iter()
            .filter(|r| r.checked)
            .map(|r| r.code.clone())
            .collect()
    }

    pub fn checkboxes(&self) -> impl Iterator<Item = CheckboxState> + '_ {
        self.rows.iter().map(|r| CheckboxState {
            family: Some(self.family.clone()),
            subfamily: Some(r.code.clone()),
            checked: r.checked,
        })
    }
}

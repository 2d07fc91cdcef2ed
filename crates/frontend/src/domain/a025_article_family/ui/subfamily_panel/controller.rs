//! Каскадная панель подсемейств: пересборка блоков по выбранным семействам.

use std::rc::Rc;

use async_trait::async_trait;
use contracts::domain::a025_article_family::dto::SubfamilyDto;

use super::model::FamilyBlock;
use super::reconcile::{live_selection, reconcile, CheckboxState, SelectionSet};
use crate::shared::api_utils::FetchError;
use crate::shared::request_canceler::{Cancelled, RequestCanceler};

/// Справочник подсемейств по коду семейства
#[async_trait(?Send)]
pub trait SubfamilySource {
    async fn subfamilies(&self, family: &str) -> Result<Vec<SubfamilyDto>, FetchError>;
}

/// Что отрисовать в контейнере панели
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent {
    /// Ни одно семейство не выбрано
    NoFamilies,
    Blocks {
        blocks: Vec<FamilyBlock>,
        /// Ошибка загрузки, прервавшая проход (блоки до неё показываются)
        error: Option<String>,
    },
}

/// Контейнер панели: чтение живых чекбоксов и полная перерисовка
pub trait PanelView {
    fn live_checkboxes(&self) -> Vec<CheckboxState>;
    fn render(&self, content: PanelContent);
}

pub struct SubfamilyPanel {
    source: Rc<dyn SubfamilySource>,
    view: Rc<dyn PanelView>,
    /// Предвыбор из URL на момент загрузки страницы
    url_selection: SelectionSet,
    canceler: RequestCanceler,
}

impl SubfamilyPanel {
    pub fn new(
        source: Rc<dyn SubfamilySource>,
        view: Rc<dyn PanelView>,
        url_selection: SelectionSet,
    ) -> Self {
        Self {
            source,
            view,
            url_selection,
            canceler: RequestCanceler::new(),
        }
    }

    /// Пересобрать панель под выбранные семейства (в заданном порядке).
    ///
    /// Предвыбор сводится один раз в начале прохода. Старые блоки остаются
    /// на экране до конца прохода; более новый проход вытесняет текущий.
    pub async fn refresh(&self, families: Vec<String>) {
        let live = live_selection(&self.view.live_checkboxes());
        let selection = reconcile(live, self.url_selection.clone());

        if families.is_empty() {
            self.canceler.cancel();
            self.view.render(PanelContent::NoFamilies);
            return;
        }

        let pass = build_blocks(self.source.as_ref(), &families, &selection);
        match self.canceler.run(pass).await {
            Ok(content) => self.view.render(content),
            Err(Cancelled) => log::debug!("subfamily panel: pass for {:?} superseded", families),
        }
    }
}

async fn build_blocks(
    source: &dyn SubfamilySource,
    families: &[String],
    selection: &SelectionSet,
) -> PanelContent {
    let mut blocks = Vec::with_capacity(families.len());
    let mut error = None;

    for family in families {
        match source.subfamilies(family).await {
            Ok(rows) => blocks.push(FamilyBlock::build(family, rows, selection.get(family))),
            Err(e) => {
                log::warn!("subfamily panel: loading family {} failed: {}", family, e);
                error = Some(format!("Error cargando subfamilias de la familia {}", family));
                break;
            }
        }
    }

    PanelContent::Blocks { blocks, error }
}

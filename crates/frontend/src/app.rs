use crate::domain::a025_article_family::ui::subfamily_panel;
use crate::shared::dom;
use crate::shared::lookup_picker::{self, opener};
use crate::shared::page_behaviors;

/// Подключает всё поведение к серверной странице.
///
/// Каждая часть сама проверяет, есть ли на странице её разметка, так что один
/// и тот же модуль грузится и на страницах списка, и в окне поиска.
pub fn boot() {
    let (Some(window), Some(document)) = (dom::window(), dom::document()) else {
        return;
    };

    page_behaviors::install_all(&document);

    if let Err(e) = opener::install_open_buttons(&document) {
        log::error!("lookup: open buttons not installed: {}", e);
    }
    if let Err(e) = opener::install_lookup_receiver(&window) {
        log::error!("lookup: message receiver not installed: {}", e);
    }

    subfamily_panel::mount();
    lookup_picker::mount_popup();
}

//! Поведение серверных страниц: формы, раскрывающиеся панели, экспорт PDF.

pub mod form_send;
pub mod toggles;

use web_sys::Document;

use crate::shared::export;

/// Подключить все делегированные обработчики на `document`
pub fn install_all(document: &Document) {
    let results = [
        ("form send", form_send::install(document)),
        ("toggles", toggles::install(document)),
        ("pdf export", export::install(document)),
    ];
    for (name, result) in results {
        if let Err(e) = result {
            log::error!("page behaviours: {} not installed: {}", name, e);
        }
    }
}

/// Экспорт отфильтрованного списка в PDF: сервер строит документ по тем же
/// параметрам, что и страница, поэтому достаточно собрать URL из формы фильтров.
use url::form_urlencoded;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, FormData, HtmlFormElement};

use crate::shared::dom;

pub const EXPORT_BUTTON_SELECTOR: &str = ".js-export-pdf";
const FALLBACK_FORM_ID: &str = "filtersForm";

/// URL экспорта: базовый адрес + непустые поля формы
pub fn build_export_url<K, V>(base: &str, pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut appended = 0usize;
    for (key, value) in pairs {
        if value.as_ref().trim().is_empty() {
            continue;
        }
        query.append_pair(key.as_ref(), value.as_ref());
        appended += 1;
    }

    if appended == 0 {
        return base.to_string();
    }
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, query.finish())
}

/// Текстовые поля формы (файлы пропускаются)
fn form_pairs(form: &HtmlFormElement) -> Result<Vec<(String, String)>, String> {
    let data =
        FormData::new_with_form(form).map_err(|e| format!("Failed to read form: {:?}", e))?;
    let entries = js_sys::try_iter(&data)
        .map_err(|e| format!("FormData is not iterable: {:?}", e))?
        .ok_or("FormData is not iterable")?;

    let mut pairs = Vec::new();
    for entry in entries {
        let entry = js_sys::Array::from(&entry.map_err(|e| format!("{:?}", e))?);
        if let (Some(key), Some(value)) = (entry.get(0).as_string(), entry.get(1).as_string()) {
            pairs.push((key, value));
        }
    }
    Ok(pairs)
}

fn source_form(button: &Element, document: &Document) -> Option<HtmlFormElement> {
    button
        .closest("form")
        .ok()
        .flatten()
        .or_else(|| document.get_element_by_id(FALLBACK_FORM_ID))
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
}

fn export_pdf(button: &Element) -> Result<(), String> {
    let base = dom::attr(button, "data-href").ok_or("Export button without data-href")?;
    let document = dom::document().ok_or("No document object")?;
    let pairs = match source_form(button, &document) {
        Some(form) => form_pairs(&form)?,
        None => Vec::new(),
    };

    let url = build_export_url(&base, pairs);
    let window = dom::window().ok_or("No window object")?;
    window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("window.open failed: {:?}", e))?;
    Ok(())
}

pub fn install(document: &Document) -> Result<(), String> {
    dom::listen(document, "click", |event| {
        let Some(button) = dom::closest(&event, EXPORT_BUTTON_SELECTOR) else {
            return;
        };
        event.prevent_default();
        if let Err(e) = export_pdf(&button) {
            log::error!("pdf export: {}", e);
        }
    })
}

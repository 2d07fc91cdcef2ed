//! Раскрытие меню действий карточки и панели фильтров.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::shared::dom;

pub const ACTIONS_TOGGLE_SELECTOR: &str = ".actions-toggle";
pub const FILTERS_TOGGLE_SELECTOR: &str = ".js-filters-toggle";
const CARD_OPEN_CLASS: &str = "is-actions-open";
const PAGE_FILTERS_OPEN_CLASS: &str = "is-filters-open";
const FILTERS_PANEL_SELECTOR: &str = "#filtersPanel";

pub fn aria_expanded(open: bool) -> &'static str {
    if open {
        "true"
    } else {
        "false"
    }
}

pub fn filters_aria_label(open: bool) -> &'static str {
    if open {
        "Ocultar filtros"
    } else {
        "Mostrar filtros"
    }
}

pub fn panel_display(open: bool) -> &'static str {
    if open {
        "block"
    } else {
        "none"
    }
}

pub fn install(document: &Document) -> Result<(), String> {
    dom::listen(document, "click", |event| {
        if let Some(toggle) = dom::closest(&event, ACTIONS_TOGGLE_SELECTOR) {
            toggle_card_actions(&toggle);
        } else if let Some(button) = dom::closest(&event, FILTERS_TOGGLE_SELECTOR) {
            if let Err(e) = toggle_filters(&button) {
                log::error!("filters toggle: {}", e);
            }
        }
    })
}

fn toggle_card_actions(toggle: &Element) {
    let Some(card) = toggle.closest(".card").ok().flatten() else {
        return;
    };
    let Ok(open) = card.class_list().toggle(CARD_OPEN_CLASS) else {
        return;
    };
    let _ = toggle.set_attribute("aria-expanded", aria_expanded(open));
}

fn toggle_filters(button: &Element) -> Result<(), String> {
    let Some(page) = button.closest(".page").ok().flatten() else {
        return Ok(());
    };
    let Some(panel) = page
        .query_selector(FILTERS_PANEL_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(());
    };

    let open = page
        .class_list()
        .toggle(PAGE_FILTERS_OPEN_CLASS)
        .map_err(|e| format!("classList.toggle failed: {:?}", e))?;
    panel
        .style()
        .set_property("display", panel_display(open))
        .map_err(|e| format!("style.display failed: {:?}", e))?;

    let _ = button.set_attribute("aria-expanded", aria_expanded(open));
    let _ = button.set_attribute("aria-label", filters_aria_label(open));
    Ok(())
}

pub mod controller;
pub mod model;
pub mod reconcile;
pub mod view;

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

use crate::domain::a025_article_family::api::{ApiSubfamilySource, DEFAULT_DOMAIN};
use crate::shared::dom;
use controller::SubfamilyPanel;
use reconcile::{parse_query, selection_from_query};
use view::{PanelState, SignalPanelView, SubfamilyPanelView};

/// Контейнер панели в серверной разметке
pub const CONTAINER_ID: &str = "subfamContainer";

const FAMILY_INPUT_SELECTOR: &str = r#"input[name="family"]"#;

/// Отмеченные семейства в порядке документа
pub fn selected_families(document: &Document) -> Vec<String> {
    let selector = format!("{}:checked", FAMILY_INPUT_SELECTOR);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value().trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

/// Подключает панель подсемейств, если на странице есть `#subfamContainer`.
pub fn mount() {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(container) = dom::html_element_by_id(&document, CONTAINER_ID) else {
        log::debug!("subfamily panel: #{} not on page", CONTAINER_ID);
        return;
    };

    let domain =
        dom::attr(&container, "data-domain").unwrap_or_else(|| DEFAULT_DOMAIN.to_string());
    let url_selection = selection_from_query(parse_query(&dom::location_search()));
    log::debug!(
        "subfamily panel: domain={}, url preselection for {} families",
        domain,
        url_selection.len()
    );

    let state = RwSignal::new(PanelState::default());
    let panel = Rc::new(SubfamilyPanel::new(
        Rc::new(ApiSubfamilySource::new(domain)),
        Rc::new(SignalPanelView::new(state)),
        url_selection,
    ));

    container.set_inner_html("");
    leptos::mount::mount_to(container, move || view! { <SubfamilyPanelView state=state /> })
        .forget();

    let refresh = {
        let document = document.clone();
        move || {
            let panel = panel.clone();
            let families = selected_families(&document);
            spawn_local(async move { panel.refresh(families).await });
        }
    };

    refresh();
    if let Err(e) = dom::listen(&document, "change", move |event| {
        if dom::target_matches(&event, FAMILY_INPUT_SELECTOR) {
            refresh();
        }
    }) {
        log::error!("subfamily panel: {}", e);
    }
}

//! Окно поиска поставщиков и закупщиков (popup) и его связь с формой-владельцем.

pub mod api;
pub mod component;
pub mod config;
pub mod controller;
pub mod item;
pub mod opener;
pub mod traits;

use std::rc::Rc;

use leptos::prelude::*;

use crate::shared::debouncer::BrowserClock;
use crate::shared::dom;
use crate::shared::task::BrowserSpawner;
use api::ApiLookupSource;
use component::{LookupPicker, SignalResultsView};
use config::LookupConfig;
use controller::{LookupController, LookupState};
use opener::WindowOpener;

/// Корневой элемент страницы окна поиска
pub const POPUP_ROOT_ID: &str = "lookupApp";

/// Подключает окно поиска, если страница является popup (`#lookupApp`).
pub fn mount_popup() {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(root) = dom::html_element_by_id(&document, POPUP_ROOT_ID) else {
        return;
    };
    let Some(config) = LookupConfig::from_attributes(|name| root.get_attribute(name)) else {
        log::debug!("lookup: #{} without valid data-kind/data-target", POPUP_ROOT_ID);
        return;
    };
    log::debug!("lookup: popup for {} → #{}", config.kind, config.target);

    let kind = config.kind;
    let state = RwSignal::new(LookupState::Idle);
    let controller = LookupController::new(
        config,
        Rc::new(ApiLookupSource),
        Rc::new(SignalResultsView::new(state)),
        Rc::new(WindowOpener),
        Rc::new(BrowserClock),
        Rc::new(BrowserSpawner),
    );

    let stored = StoredValue::new_local(controller.clone());
    root.set_inner_html("");
    leptos::mount::mount_to(root, move || {
        view! { <LookupPicker controller=stored state=state kind=kind /> }
    })
    .forget();

    controller.open();

    if let Some(window) = dom::window() {
        let on_hide = controller.clone();
        if let Err(e) = dom::listen(&window, "pagehide", move |_| on_hide.shutdown()) {
            log::error!("lookup: {}", e);
        }
    }
}

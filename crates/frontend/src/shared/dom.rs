//! Мелкие обёртки над web-sys для подключения поведения к серверной разметке.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// `location.search` текущей страницы (пустая строка, если недоступно)
pub fn location_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Подписка на событие без отписки: живёт столько же, сколько страница.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), String>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| format!("addEventListener({}) failed: {:?}", event, e))?;
    closure.forget();
    Ok(())
}

/// Элемент-цель события, если это Element
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Ближайший к цели события предок (включая её саму), подходящий под селектор.
/// Делегирование кликов на `document`.
pub fn closest(event: &Event, selector: &str) -> Option<Element> {
    event_element(event).and_then(|el| el.closest(selector).ok().flatten())
}

/// Цель события сама подходит под селектор
pub fn target_matches(event: &Event, selector: &str) -> bool {
    event_element(event).is_some_and(|el| el.matches(selector).unwrap_or(false))
}

pub fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Непустой (после trim) атрибут элемента
pub fn attr(element: &Element, name: &str) -> Option<String> {
    element
        .get_attribute(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn alert_with_message(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

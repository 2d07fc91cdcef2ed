//! Связь popup ↔ opener: открытие окна поиска с кнопок формы и возврат
//! выбранного значения через `postMessage`.

use contracts::enums::LookupKind;
use contracts::shared::lookup::LookupMessage;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventInit, HtmlInputElement, MessageEvent, Window};

use super::controller::OpenerChannel;
use crate::shared::dom;

pub const LOOKUP_PAGE_PATH: &str = "/lookup";
pub const OPEN_BUTTON_SELECTOR: &str = ".js-lookup-open";
const POPUP_FEATURES: &str = "width=760,height=620,resizable=yes,scrollbars=yes";
const POPUP_BLOCKED_MESSAGE: &str =
    "El navegador ha bloqueado la ventana emergente. Permite las ventanas emergentes para este sitio.";

/// Адрес окна поиска для вида справочника и поля-получателя
pub fn lookup_popup_url(kind: LookupKind, target: &str) -> String {
    format!(
        "{}?kind={}&target={}",
        LOOKUP_PAGE_PATH,
        kind.code(),
        urlencoding::encode(target)
    )
}

/// Приём сообщения в окне-владельце: только тот же origin и корректный контракт
pub fn accept_lookup_message(
    origin: &str,
    own_origin: &str,
    message: LookupMessage,
) -> Result<LookupMessage, String> {
    if origin != own_origin {
        return Err(format!("Message from foreign origin {}", origin));
    }
    message.validate()
}

/// Открыть окно поиска; при блокировке сообщение пользователю
pub fn open_lookup_popup(kind: LookupKind, target: &str) -> Result<(), String> {
    let window = dom::window().ok_or("No window object")?;
    let url = lookup_popup_url(kind, target);
    let name = format!("lookup_{}", kind.code());

    match window.open_with_url_and_target_and_features(&url, &name, POPUP_FEATURES) {
        Ok(Some(popup)) => {
            let _ = popup.focus();
            Ok(())
        }
        Ok(None) => {
            dom::alert_with_message(POPUP_BLOCKED_MESSAGE);
            Err("popup blocked".to_string())
        }
        Err(e) => {
            dom::alert_with_message(POPUP_BLOCKED_MESSAGE);
            Err(format!("window.open failed: {:?}", e))
        }
    }
}

/// Делегированный обработчик кнопок `.js-lookup-open[data-kind][data-target]`
pub fn install_open_buttons(document: &Document) -> Result<(), String> {
    dom::listen(document, "click", |event| {
        let Some(button) = dom::closest(&event, OPEN_BUTTON_SELECTOR) else {
            return;
        };
        event.prevent_default();

        let kind = dom::attr(&button, "data-kind").and_then(|k| LookupKind::from_code(&k));
        let target = dom::attr(&button, "data-target");
        let (Some(kind), Some(target)) = (kind, target) else {
            log::warn!("lookup: open button without valid data-kind/data-target");
            return;
        };
        if let Err(e) = open_lookup_popup(kind, &target) {
            log::warn!("lookup: {}", e);
        }
    })
}

/// Записать значение в поле формы и сообщить об изменении (`change`, всплывает)
pub fn deliver_lookup_value(document: &Document, target: &str, value: &str) -> Result<(), String> {
    let input = document
        .get_element_by_id(target)
        .ok_or_else(|| format!("Field #{} not found", target))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| format!("Field #{} is not an input", target))?;

    input.set_value(value);

    let init = EventInit::new();
    init.set_bubbles(true);
    let change = Event::new_with_event_init_dict("change", &init)
        .map_err(|e| format!("Failed to create change event: {:?}", e))?;
    input
        .dispatch_event(&change)
        .map_err(|e| format!("Failed to dispatch change event: {:?}", e))?;
    let _ = input.focus();
    Ok(())
}

/// Слушатель `message` в окне-владельце
pub fn install_lookup_receiver(window: &Window) -> Result<(), String> {
    let own_origin = window
        .location()
        .origin()
        .map_err(|e| format!("No location origin: {:?}", e))?;

    dom::listen(window, "message", move |event| {
        let Ok(event) = event.dyn_into::<MessageEvent>() else {
            return;
        };
        let Ok(message) = serde_wasm_bindgen::from_value::<LookupMessage>(event.data()) else {
            return;
        };
        let message = match accept_lookup_message(&event.origin(), &own_origin, message) {
            Ok(message) => message,
            Err(e) => {
                log::debug!("lookup: message ignored: {}", e);
                return;
            }
        };

        let Some(document) = dom::document() else {
            return;
        };
        if let Err(e) = deliver_lookup_value(&document, &message.target, &message.value) {
            log::warn!("lookup: {}", e);
        }
    })
}

/// Окно-владелец popup'а
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowOpener;

impl OpenerChannel for WindowOpener {
    fn deliver(&self, message: &LookupMessage) -> Result<(), String> {
        let window = dom::window().ok_or("No window object")?;
        let opener = window
            .opener()
            .map_err(|e| format!("No opener: {:?}", e))?;
        if opener.is_null() || opener.is_undefined() {
            return Err("Window has no opener".to_string());
        }
        let opener = opener
            .dyn_into::<Window>()
            .map_err(|_| "Opener is not a window".to_string())?;

        let origin = window
            .location()
            .origin()
            .map_err(|e| format!("No location origin: {:?}", e))?;
        let payload = serde_wasm_bindgen::to_value(message).map_err(|e| e.to_string())?;
        opener
            .post_message(&payload, &origin)
            .map_err(|e| format!("postMessage failed: {:?}", e))
    }

    fn close(&self) {
        if let Some(window) = dom::window() {
            let _ = window.close();
        }
    }
}

//! AJAX-отправка форм `form.js-send` без перезагрузки страницы.

use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Document, FormData, HtmlButtonElement, HtmlFormElement};

use crate::shared::api_utils::post_form;
use crate::shared::dom;

pub const FORM_SELECTOR_CLASS: &str = "js-send";
pub const LABEL_SAVING: &str = "Guardando...";
/// Через сколько вернуть исходную подпись кнопки
pub const RESTORE_AFTER_MS: u32 = 2000;

/// Итог отправки формы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    Saved,
    Failed,
}

impl SendOutcome {
    pub fn label(self) -> &'static str {
        match self {
            SendOutcome::Saved => "Guardado",
            SendOutcome::Failed => "Error",
        }
    }

    /// После успеха кнопка остаётся заблокированной до восстановления
    pub fn keeps_disabled(self) -> bool {
        matches!(self, SendOutcome::Saved)
    }
}

pub fn install(document: &Document) -> Result<(), String> {
    dom::listen(document, "submit", |event| {
        let Some(form) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        if !form.class_list().contains(FORM_SELECTOR_CLASS) {
            return;
        }
        event.prevent_default();
        spawn_local(send_form(form));
    })
}

async fn send_form(form: HtmlFormElement) {
    let button = form
        .query_selector("button[type='submit']")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let original = button
        .as_ref()
        .and_then(|b| b.text_content())
        .unwrap_or_default();

    if let Some(button) = &button {
        button.set_disabled(true);
        button.set_text_content(Some(LABEL_SAVING));
    }

    let outcome = match FormData::new_with_form(&form) {
        Ok(data) => match post_form(&form.action(), &data).await {
            Ok(()) => SendOutcome::Saved,
            Err(e) => {
                log::warn!("form send: {}", e);
                SendOutcome::Failed
            }
        },
        Err(e) => {
            log::error!("form send: cannot read form data: {:?}", e);
            SendOutcome::Failed
        }
    };

    let Some(button) = button else {
        return;
    };
    button.set_text_content(Some(outcome.label()));
    button.set_disabled(outcome.keeps_disabled());

    gloo_timers::future::TimeoutFuture::new(RESTORE_AFTER_MS).await;
    button.set_text_content(Some(&original));
    button.set_disabled(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(SendOutcome::Saved.label(), "Guardado");
        assert!(SendOutcome::Saved.keeps_disabled());
        assert_eq!(SendOutcome::Failed.label(), "Error");
        assert!(!SendOutcome::Failed.keeps_disabled());
    }
}

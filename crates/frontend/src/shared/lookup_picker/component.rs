use contracts::enums::LookupKind;
use leptos::prelude::*;
use web_sys::KeyboardEvent;

use super::controller::{LookupController, LookupState, ResultsView};
use super::item::LookupItem;
use super::traits::{LookupSelectable, TableDisplayable};

const STATUS_PROMPT: &str = "Escribe para buscar";
const STATUS_LOADING: &str = "Buscando...";
const STATUS_EMPTY: &str = "Sin resultados";
const STATUS_ERROR: &str = "Error al buscar";

/// [`ResultsView`] поверх сигнала leptos
pub struct SignalResultsView {
    state: RwSignal<LookupState>,
}

impl SignalResultsView {
    pub fn new(state: RwSignal<LookupState>) -> Self {
        Self { state }
    }
}

impl ResultsView for SignalResultsView {
    fn render(&self, state: LookupState) {
        self.state.set(state);
    }
}

/// Заголовки колонок таблицы результатов
pub fn column_headers(kind: LookupKind) -> &'static [&'static str] {
    match kind {
        LookupKind::Suppliers => &["Código", "Nombre"],
        LookupKind::Buyers => &["Código"],
    }
}

/// Текст статуса для состояний без строк
pub fn status_text(state: &LookupState) -> Option<&'static str> {
    match state {
        LookupState::Prompt => Some(STATUS_PROMPT),
        LookupState::Loading => Some(STATUS_LOADING),
        LookupState::Empty => Some(STATUS_EMPTY),
        LookupState::Error(_) => Some(STATUS_ERROR),
        LookupState::Idle | LookupState::Results(_) => None,
    }
}

fn placeholder(kind: LookupKind) -> &'static str {
    match kind {
        LookupKind::Suppliers => "Código o nombre del proveedor",
        LookupKind::Buyers => "Filtrar compradores",
    }
}

/// Окно поиска: поле ввода, кнопка «Buscar» и таблица выбираемых строк
#[component]
pub fn LookupPicker(
    controller: StoredValue<LookupController, LocalStorage>,
    state: RwSignal<LookupState>,
    kind: LookupKind,
) -> impl IntoView {
    view! {
        <div class="lookup">
            <h2 class="lookup__title">{kind.display_name()}</h2>
            <div class="lookup__search">
                <input
                    type="search"
                    class="form-control lookup__input"
                    placeholder=placeholder(kind)
                    autofocus=true
                    on:input=move |ev| {
                        let term = event_target_value(&ev);
                        controller.with_value(|c| c.on_input(term));
                    }
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            controller.with_value(|c| c.on_enter());
                        }
                    }
                />
                <button
                    type="button"
                    class="btn btn-primary"
                    on:click=move |_| controller.with_value(|c| c.on_search_button())
                >
                    "Buscar"
                </button>
            </div>
            <div class="lookup__results">
                {move || {
                    let current = state.get();
                    match current {
                        LookupState::Results(items) => {
                            view! { <ResultsTable items=items kind=kind controller=controller /> }
                                .into_any()
                        }
                        other => {
                            let is_error = matches!(other, LookupState::Error(_));
                            status_text(&other)
                                .map(|text| {
                                    view! {
                                        <div class="muted lookup__status" class:is-error=is_error>
                                            {text}
                                        </div>
                                    }
                                })
                                .into_any()
                        }
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn ResultsTable(
    items: Vec<LookupItem>,
    kind: LookupKind,
    controller: StoredValue<LookupController, LocalStorage>,
) -> impl IntoView {
    let headers = column_headers(kind)
        .iter()
        .map(|h| view! { <th>{*h}</th> })
        .collect_view();

    let rows = items
        .into_iter()
        .map(|item| {
            let value = item.value().to_string();
            let title = item.display_name();
            let cells = item
                .cells()
                .into_iter()
                .map(|cell| view! { <td>{cell}</td> })
                .collect_view();
            let clicked = value.clone();
            view! {
                <tr
                    class="lookup__row"
                    data-value=value
                    title=title
                    on:click=move |_| {
                        controller.with_value(|c| {
                            c.select(&clicked);
                        });
                    }
                >
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <table class="table lookup__table">
            <thead>
                <tr>{headers}</tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}

use leptos::prelude::*;

use super::controller::{PanelContent, PanelView};
use super::model::FamilyBlock;
use super::reconcile::CheckboxState;

const HINT_EMPTY_SELECTION: &str =
    "Si no marcas ninguna subfamilia, se aplican todas las de esta familia.";
const HINT_NO_SUBFAMILIES: &str = "Esta familia no tiene subfamilias; se aplica completa.";
const PLACEHOLDER_NO_FAMILIES: &str =
    "Selecciona una o varias familias para ver sus subfamilias.";

/// Содержимое контейнера панели
#[derive(Clone, Default)]
pub enum PanelState {
    /// До первого прохода
    #[default]
    Initial,
    NoFamilies,
    Blocks {
        blocks: Vec<ArcRwSignal<FamilyBlock>>,
        error: Option<String>,
    },
}

/// [`PanelView`] поверх сигнала leptos
pub struct SignalPanelView {
    state: RwSignal<PanelState>,
}

impl SignalPanelView {
    pub fn new(state: RwSignal<PanelState>) -> Self {
        Self { state }
    }
}

impl PanelView for SignalPanelView {
    fn live_checkboxes(&self) -> Vec<CheckboxState> {
        self.state.with_untracked(|state| match state {
            PanelState::Blocks { blocks, .. } => blocks
                .iter()
                .flat_map(|block| block.with_untracked(|b| b.checkboxes().collect::<Vec<_>>()))
                .collect(),
            _ => Vec::new(),
        })
    }

    fn render(&self, content: PanelContent) {
        let next = match content {
            PanelContent::NoFamilies => PanelState::NoFamilies,
            PanelContent::Blocks { blocks, error } => PanelState::Blocks {
                blocks: blocks.into_iter().map(ArcRwSignal::new).collect(),
                error,
            },
        };
        self.state.set(next);
    }
}

/// Контейнер панели: полностью перерисовывается на каждом проходе
#[component]
pub fn SubfamilyPanelView(state: RwSignal<PanelState>) -> impl IntoView {
    view! {
        {move || match state.get() {
            PanelState::Initial => ().into_any(),
            PanelState::NoFamilies => {
                view! { <div class="muted">{PLACEHOLDER_NO_FAMILIES}</div> }.into_any()
            }
            PanelState::Blocks { blocks, error } => {
                view! {
                    <div class="subfam-wrapper">
                        {blocks
                            .into_iter()
                            .map(|block| view! { <FamilyBlockView block=block /> })
                            .collect_view()}
                        {error.map(|e| view! { <div class="muted subfam-error">{e}</div> })}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// Блок семейства: заголовок, кнопка «Marcar/Desmarcar todas», чекбоксы, подсказка
#[component]
pub fn FamilyBlockView(block: ArcRwSignal<FamilyBlock>) -> impl IntoView {
    let snapshot = block.get_untracked();
    let has_rows = snapshot.has_rows();
    let family = snapshot.family.clone();
    let field_name = snapshot.field_name();

    let toggle = snapshot.shows_toggle().then(|| {
        let label_block = block.clone();
        let toggle_block = block.clone();
        view! {
            <button
                type="button"
                class="btn btn-secondary subfam-block__toggle"
                on:click=move |_| toggle_block.update(|b| b.toggle_all())
            >
                {move || label_block.with(|b| b.toggle_label())}
            </button>
        }
    });

    let rows = snapshot
        .rows
        .into_iter()
        .map(|row| {
            let checked_block = block.clone();
            let change_block = block.clone();
            let code_for_checked = row.code.clone();
            let code_for_change = row.code.clone();

            view! {
                <label
                    class="subfam-item"
                    data-tooltip=row.description.clone()
                    title=row.description.clone()
                >
                    <input
                        type="checkbox"
                        name=field_name.clone()
                        value=row.code.clone()
                        data-family=family.clone()
                        data-subfam=row.code.clone()
                        prop:checked=move || checked_block.with(|b| b.is_checked(&code_for_checked))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            change_block.update(|b| b.set_checked(&code_for_change, checked));
                        }
                    />
                    <span class="subfam-item__text">{row.code}</span>
                </label>
            }
        })
        .collect_view();

    let hint = if has_rows {
        HINT_EMPTY_SELECTION
    } else {
        HINT_NO_SUBFAMILIES
    };

    view! {
        <div class="subfam-block" data-family=family.clone()>
            <div class="subfam-block__header">
                <div class="subfam-block__title">{format!("Familia {}", family)}</div>
                {toggle}
            </div>
            <div class="subfam-block__list">{rows}</div>
            <div class="muted subfam-hint">{hint}</div>
        </div>
    }
}

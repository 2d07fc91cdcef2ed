//! Контроллер окна поиска (typeahead).
//!
//! Состояния: `Idle → Loading → {Results | Empty | Error}`; каждый новый
//! запуск снова переводит в `Loading`. Вытесненный запрос молча отбрасывает
//! свой результат и не меняет отображаемое состояние.
//!
//! Контроллер не знает ни про DOM, ни про HTTP: данные приходят через
//! [`LookupSource`], отрисовка уходит в [`ResultsView`], выбранное значение
//! в [`OpenerChannel`].

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use contracts::enums::LookupKind;
use contracts::shared::lookup::LookupMessage;
use futures::task::{LocalSpawn, LocalSpawnExt};

use super::config::{LookupConfig, SearchMode};
use super::item::LookupItem;
use super::traits::LookupSelectable;
use crate::shared::api_utils::FetchError;
use crate::shared::debouncer::{Clock, Debouncer};
use crate::shared::request_canceler::{Cancelled, RequestCanceler};

/// Что показывает область результатов
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    /// Термин короче минимума: «escribe para buscar»
    Prompt,
    Loading,
    Results(Vec<LookupItem>),
    Empty,
    Error(String),
}

/// Удалённый справочник
#[async_trait(?Send)]
pub trait LookupSource {
    async fn search(
        &self,
        kind: LookupKind,
        term: &str,
        limit: u32,
    ) -> Result<Vec<LookupItem>, FetchError>;
}

/// Отрисовка списка выбираемых строк и статусов
pub trait ResultsView {
    fn render(&self, state: LookupState);
}

/// Связь с окном, открывшим popup
pub trait OpenerChannel {
    fn deliver(&self, message: &LookupMessage) -> Result<(), String>;
    fn close(&self);
}

struct Inner {
    config: LookupConfig,
    source: Rc<dyn LookupSource>,
    view: Rc<dyn ResultsView>,
    opener: Rc<dyn OpenerChannel>,
    spawner: Rc<dyn LocalSpawn>,
    debouncer: Debouncer,
    canceler: RequestCanceler,
    term: RefCell<String>,
    rendered: RefCell<Vec<LookupItem>>,
}

/// Состояние одного окна поиска. Клонирование дешёвое (общий `Rc`).
#[derive(Clone)]
pub struct LookupController {
    inner: Rc<Inner>,
}

impl LookupController {
    pub fn new(
        config: LookupConfig,
        source: Rc<dyn LookupSource>,
        view: Rc<dyn ResultsView>,
        opener: Rc<dyn OpenerChannel>,
        clock: Rc<dyn Clock>,
        spawner: Rc<dyn LocalSpawn>,
    ) -> Self {
        let debouncer = Debouncer::new(config.debounce, clock);
        Self {
            inner: Rc::new(Inner {
                config,
                source,
                view,
                opener,
                spawner,
                debouncer,
                canceler: RequestCanceler::new(),
                term: RefCell::new(String::new()),
                rendered: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.inner.config
    }

    pub fn term(&self) -> String {
        self.inner.term.borrow().clone()
    }

    /// Окно открыто: фиксированный список загружается сразу,
    /// для поиска по тексту показываем подсказку.
    pub fn open(&self) {
        match self.inner.config.mode() {
            SearchMode::FixedList if self.inner.config.autoload => self.spawn_search(String::new()),
            SearchMode::FixedList => self.show(LookupState::Idle),
            SearchMode::FreeText => self.show(LookupState::Prompt),
        }
    }

    /// Ввод в поле поиска
    pub fn on_input(&self, term: String) {
        *self.inner.term.borrow_mut() = term.clone();
        if self.inner.config.mode() != SearchMode::FreeText {
            return;
        }

        let this = self.clone();
        let settled = self.inner.debouncer.settle();
        self.spawn(async move {
            if settled.await {
                this.trigger_search(term).await;
            }
        });
    }

    /// Enter в поле поиска: без debounce
    pub fn on_enter(&self) {
        self.search_now();
    }

    /// Кнопка «Buscar»: без debounce
    pub fn on_search_button(&self) {
        self.search_now();
    }

    /// Окно закрывается или страница выгружается
    pub fn shutdown(&self) {
        self.inner.debouncer.cancel();
        self.inner.canceler.cancel();
    }

    fn search_now(&self) {
        self.inner.debouncer.cancel();
        self.spawn_search(self.term());
    }

    fn spawn_search(&self, term: String) {
        let this = self.clone();
        self.spawn(async move { this.trigger_search(term).await });
    }

    fn spawn(&self, task: impl std::future::Future<Output = ()> + 'static) {
        if let Err(e) = self.inner.spawner.spawn_local(task) {
            log::error!("lookup: failed to spawn search task: {}", e);
        }
    }

    /// Запуск поиска с учётом политики вида справочника
    pub async fn trigger_search(&self, term: String) {
        let inner = &self.inner;
        let mode = inner.config.mode();

        if mode == SearchMode::FreeText && term.trim().chars().count() < inner.config.min_chars {
            inner.canceler.cancel();
            self.show(LookupState::Prompt);
            return;
        }

        self.show(LookupState::Loading);

        let query = match mode {
            SearchMode::FreeText => term.trim(),
            SearchMode::FixedList => "",
        };
        let request = inner.source.search(inner.config.kind, query, inner.config.limit);

        match inner.canceler.run(request).await {
            Err(Cancelled) => {
                log::debug!("lookup: request for '{}' superseded", term);
            }
            Ok(Err(e)) => {
                log::warn!("lookup: {} search failed: {}", inner.config.kind, e);
                self.show(LookupState::Error(e.to_string()));
            }
            Ok(Ok(items)) => {
                let items: Vec<LookupItem> = match mode {
                    SearchMode::FreeText => items,
                    SearchMode::FixedList => {
                        items.into_iter().filter(|item| item.matches(&term)).collect()
                    }
                };
                if items.is_empty() {
                    self.show(LookupState::Empty);
                } else {
                    self.show(LookupState::Results(items));
                }
            }
        }
    }

    /// Выбор строки результата.
    ///
    /// Возможен только для значения из отрисованных строк; иначе ничего не
    /// делает и возвращает `false`. После отправки значения окно закрывается
    /// в любом случае.
    pub fn select(&self, value: &str) -> bool {
        let known = self
            .inner
            .rendered
            .borrow()
            .iter()
            .any(|item| item.value() == value);
        if !known {
            return false;
        }

        let message = LookupMessage::new(self.inner.config.target.clone(), value);
        if let Err(e) = self.inner.opener.deliver(&message) {
            log::warn!("lookup: could not deliver value to opener: {}", e);
        }
        self.shutdown();
        self.inner.opener.close();
        true
    }

    fn show(&self, state: LookupState) {
        *self.inner.rendered.borrow_mut() = match &state {
            LookupState::Results(items) => items.clone(),
            _ => Vec::new(),
        };
        self.inner.view.render(state);
    }
}

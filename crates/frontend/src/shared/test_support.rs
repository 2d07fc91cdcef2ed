//! Test doubles for the browser-facing seams: clock, sources, views, opener.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use contracts::domain::a025_article_family::dto::SubfamilyDto;
use contracts::enums::LookupKind;
use contracts::shared::lookup::LookupMessage;
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;

use crate::domain::a025_article_family::ui::subfamily_panel::controller::{
    PanelContent, PanelView, SubfamilySource,
};
use crate::domain::a025_article_family::ui::subfamily_panel::model::FamilyBlock;
use crate::domain::a025_article_family::ui::subfamily_panel::reconcile::CheckboxState;
use crate::shared::api_utils::FetchError;
use crate::shared::debouncer::Clock;
use crate::shared::lookup_picker::controller::{
    LookupSource, LookupState, OpenerChannel, ResultsView,
};
use crate::shared::lookup_picker::item::LookupItem;

/// Clock that only moves when the test says so.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<Duration>,
    timers: RefCell<Vec<(Duration, oneshot::Sender<()>)>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
        let now = self.now.get();
        let due: Vec<_> = {
            let mut timers = self.timers.borrow_mut();
            let (due, rest): (Vec<_>, Vec<_>) =
                timers.drain(..).partition(|(deadline, _)| *deadline <= now);
            *timers = rest;
            due
        };
        for (_, tx) in due {
            let _ = tx.send(());
        }
    }
}

impl Clock for ManualClock {
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel();
        self.timers.borrow_mut().push((self.now.get() + delay, tx));
        Box::pin(async move {
            let _ = rx.await;
        })
    }
}

type LookupReply = Result<Vec<LookupItem>, FetchError>;

/// Lookup source that either answers immediately or parks every call until
/// the test resolves it by call index.
#[derive(Default)]
pub struct FakeLookupSource {
    calls: RefCell<Vec<(LookupKind, String, u32)>>,
    auto: RefCell<Option<LookupReply>>,
    pending: RefCell<Vec<Option<oneshot::Sender<LookupReply>>>>,
}

impl FakeLookupSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_with(&self, reply: LookupReply) {
        *self.auto.borrow_mut() = Some(reply);
    }

    pub fn reply_manually(&self) {
        *self.auto.borrow_mut() = None;
    }

    pub fn resolve(&self, call: usize, reply: LookupReply) {
        let tx = self
            .pending
            .borrow_mut()
            .get_mut(call)
            .and_then(Option::take);
        if let Some(tx) = tx {
            let _ = tx.send(reply);
        }
    }

    pub fn calls(&self) -> Vec<(LookupKind, String, u32)> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl LookupSource for FakeLookupSource {
    async fn search(&self, kind: LookupKind, term: &str, limit: u32) -> LookupReply {
        self.calls.borrow_mut().push((kind, term.to_string(), limit));
        let auto = self.auto.borrow().clone();
        if let Some(reply) = auto {
            self.pending.borrow_mut().push(None);
            return reply;
        }
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push(Some(tx));
        rx.await
            .unwrap_or_else(|_| Err(FetchError::Network("reply dropped".to_string())))
    }
}

#[derive(Default)]
pub struct RecordingResultsView {
    states: RefCell<Vec<LookupState>>,
}

impl RecordingResultsView {
    pub fn states(&self) -> Vec<LookupState> {
        self.states.borrow().clone()
    }

    pub fn last(&self) -> Option<LookupState> {
        self.states.borrow().last().cloned()
    }

    pub fn errors(&self) -> usize {
        self.states
            .borrow()
            .iter()
            .filter(|s| matches!(s, LookupState::Error(_)))
            .count()
    }
}

impl ResultsView for RecordingResultsView {
    fn render(&self, state: LookupState) {
        self.states.borrow_mut().push(state);
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    delivered: RefCell<Vec<LookupMessage>>,
    closed: Cell<bool>,
    fail: Cell<bool>,
}

impl RecordingOpener {
    pub fn fail_delivery(&self) {
        self.fail.set(true);
    }

    pub fn delivered(&self) -> Vec<LookupMessage> {
        self.delivered.borrow().clone()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

impl OpenerChannel for RecordingOpener {
    fn deliver(&self, message: &LookupMessage) -> Result<(), String> {
        if self.fail.get() {
            return Err("opener is gone".to_string());
        }
        self.delivered.borrow_mut().push(message.clone());
        Ok(())
    }

    fn close(&self) {
        self.closed.set(true);
    }
}

type SubfamilyReply = Result<Vec<SubfamilyDto>, FetchError>;

/// Subfamily source backed by a map; unknown families have no rows.
/// While held, calls wait until [`release`](Self::release).
#[derive(Default)]
pub struct FakeSubfamilySource {
    data: RefCell<HashMap<String, SubfamilyReply>>,
    calls: RefCell<Vec<String>>,
    hold: Cell<bool>,
    parked: RefCell<Vec<(String, oneshot::Sender<SubfamilyReply>)>>,
}

impl FakeSubfamilySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(self, family: &str, codes: &[(&str, Option<&str>)]) -> Self {
        let rows = codes
            .iter()
            .map(|(code, desc)| SubfamilyDto::new(*code, *desc))
            .collect();
        self.data.borrow_mut().insert(family.to_string(), Ok(rows));
        self
    }

    pub fn failing(self, family: &str, error: FetchError) -> Self {
        self.data.borrow_mut().insert(family.to_string(), Err(error));
        self
    }

    pub fn hold(&self) {
        self.hold.set(true);
    }

    /// Answer every parked call, in the order they were made.
    pub fn release(&self) {
        self.hold.set(false);
        let parked: Vec<_> = self.parked.borrow_mut().drain(..).collect();
        for (family, tx) in parked {
            let _ = tx.send(self.reply_for(&family));
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn reply_for(&self, family: &str) -> SubfamilyReply {
        self.data
            .borrow()
            .get(family)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[async_trait(?Send)]
impl SubfamilySource for FakeSubfamilySource {
    async fn subfamilies(&self, family: &str) -> SubfamilyReply {
        self.calls.borrow_mut().push(family.to_string());
        if !self.hold.get() {
            return self.reply_for(family);
        }
        let (tx, rx) = oneshot::channel();
        self.parked.borrow_mut().push((family.to_string(), tx));
        rx.await
            .unwrap_or_else(|_| Err(FetchError::Network("reply dropped".to_string())))
    }
}

/// Panel view keeping the rendered blocks as the "live DOM".
#[derive(Default)]
pub struct RecordingPanelView {
    pub blocks: RefCell<Vec<FamilyBlock>>,
    renders: RefCell<Vec<PanelContent>>,
}

impl RecordingPanelView {
    pub fn renders(&self) -> Vec<PanelContent> {
        self.renders.borrow().clone()
    }

    pub fn last(&self) -> Option<PanelContent> {
        self.renders.borrow().last().cloned()
    }

    pub fn block(&self, family: &str) -> Option<FamilyBlock> {
        self.blocks
            .borrow()
            .iter()
            .find(|b| b.family == family)
            .cloned()
    }
}

impl PanelView for RecordingPanelView {
    fn live_checkboxes(&self) -> Vec<CheckboxState> {
        self.blocks
            .borrow()
            .iter()
            .flat_map(|b| b.checkboxes())
            .collect()
    }

    fn render(&self, content: PanelContent) {
        *self.blocks.borrow_mut() = match &content {
            PanelContent::Blocks { blocks, .. } => blocks.clone(),
            PanelContent::NoFamilies => Vec::new(),
        };
        self.renders.borrow_mut().push(content);
    }
}

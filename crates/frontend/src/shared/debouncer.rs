//! Debounce: ждём паузы во вводе перед запуском поиска.
//!
//! Одна ячейка на экземпляр: новый вызов [`Debouncer::settle`] снимает
//! предыдущий ожидающий таймер.

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable, LocalBoxFuture};

/// Источник времени для таймеров (в браузере `setTimeout`).
pub trait Clock {
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Таймеры браузера через gloo-timers
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(delay))
    }
}

pub struct Debouncer {
    delay: Duration,
    clock: Rc<dyn Clock>,
    pending: Rc<RefCell<Option<AbortHandle>>>,
}

impl Debouncer {
    pub fn new(delay: Duration, clock: Rc<dyn Clock>) -> Self {
        Self {
            delay,
            clock,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Есть ли нажатие, ожидающее паузы
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Снять ожидающий таймер
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Ставит таймер на `delay` тишины и возвращает ожидание его срабатывания.
    ///
    /// Таймер занимает ячейку сразу, в момент вызова, а не при первом опросе
    /// future. Результат `true`, если за это время не было нового вызова, и
    /// `false`, если ожидание вытеснено более поздним вводом или `cancel()`.
    pub fn settle(&self) -> impl Future<Output = bool> + 'static {
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.pending.replace(Some(handle)) {
            previous.abort();
        }

        let sleep = self.clock.sleep(self.delay);
        let pending = Rc::clone(&self.pending);
        async move {
            let fired = Abortable::new(sleep, registration).await.is_ok();
            if fired {
                pending.borrow_mut().take();
            }
            fired
        }
    }
}

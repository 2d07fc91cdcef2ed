//! Single-slot request cancellation for one logical search channel.
//!
//! Every call to [`RequestCanceler::run`] supersedes the previous one: the
//! previous future is aborted (its fetch is dropped, which aborts the browser
//! request) and its result, should it still arrive, is discarded. The last
//! *issued* request wins, not the last *completed* one.

use std::cell::{Cell, RefCell};
use std::future::Future;

use futures::future::{AbortHandle, Abortable};

/// The request was superseded or cancelled by its own channel.
///
/// Not an error for the user: callers drop the outcome silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("request superseded")]
pub struct Cancelled;

#[derive(Debug, Default)]
pub struct RequestCanceler {
    generation: Cell<u64>,
    inflight: RefCell<Option<AbortHandle>>,
}

impl RequestCanceler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the outstanding request, if any.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }
    }

    /// `true` while a request issued through this channel is unresolved.
    pub fn is_pending(&self) -> bool {
        self.inflight.borrow().is_some()
    }

    /// Run `request` as the only relevant request of this channel.
    ///
    /// Returns `Err(Cancelled)` when a newer request was issued (or
    /// [`cancel`](Self::cancel) was called) before this one resolved.
    pub async fn run<F: Future>(&self, request: F) -> Result<F::Output, Cancelled> {
        self.cancel();
        let generation = self.generation.get();

        let (handle, registration) = AbortHandle::new_pair();
        *self.inflight.borrow_mut() = Some(handle);

        let outcome = Abortable::new(request, registration).await;

        // Only the cancellation we caused ourselves ends up here.
        if self.generation.get() != generation {
            return Err(Cancelled);
        }
        self.inflight.borrow_mut().take();
        outcome.map_err(|_| Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use std::rc::Rc;

    #[test]
    fn test_single_request_resolves() {
        let canceler = RequestCanceler::new();
        let result = futures::executor::block_on(canceler.run(async { 7 }));
        assert_eq!(result, Ok(7));
        assert!(!canceler.is_pending());
    }

    #[test]
    fn test_newer_request_supersedes_older() {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();
        let canceler = Rc::new(RequestCanceler::new());
        let outcomes: Rc<RefCell<Vec<(&str, Result<u32, Cancelled>)>>> = Rc::default();

        let (tx_a, rx_a) = oneshot::channel::<u32>();
        let (tx_b, rx_b) = oneshot::channel::<u32>();

        for (name, rx) in [("a", rx_a), ("b", rx_b)] {
            let canceler = canceler.clone();
            let outcomes = outcomes.clone();
            spawner
                .spawn_local(async move {
                    let result = canceler.run(async move { rx.await.unwrap_or(0) }).await;
                    outcomes.borrow_mut().push((name, result));
                })
                .unwrap();
            pool.run_until_stalled();
        }

        // A was aborted as soon as B was issued.
        assert_eq!(outcomes.borrow().as_slice(), &[("a", Err(Cancelled))]);
        assert!(canceler.is_pending());

        let _ = tx_b.send(2);
        pool.run_until_stalled();
        // A "resolving" after B changes nothing: its receiver is gone.
        assert!(tx_a.send(1).is_err());
        pool.run_until_stalled();

        assert_eq!(
            outcomes.borrow().as_slice(),
            &[("a", Err(Cancelled)), ("b", Ok(2))]
        );
        assert!(!canceler.is_pending());
    }

    #[test]
    fn test_cancel_drops_outstanding_request() {
        let mut pool = LocalPool::new();
        let canceler = Rc::new(RequestCanceler::new());
        let result: Rc<RefCell<Option<Result<(), Cancelled>>>> = Rc::default();
        let (_tx, rx) = oneshot::channel::<()>();

        {
            let canceler = canceler.clone();
            let result = result.clone();
            pool.spawner()
                .spawn_local(async move {
                    let r = canceler.run(async move { rx.await.unwrap_or(()) }).await;
                    *result.borrow_mut() = Some(r);
                })
                .unwrap();
        }
        pool.run_until_stalled();
        assert!(canceler.is_pending());

        canceler.cancel();
        pool.run_until_stalled();
        assert_eq!(*result.borrow(), Some(Err(Cancelled)));
        assert!(!canceler.is_pending());
    }
}

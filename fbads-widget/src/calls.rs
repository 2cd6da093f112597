//! Managed remote calls.
//!
//! The host tracks one outstanding call per widget instance. Starting a new
//! call for an instance aborts the previous one, so a response that arrives
//! after a re-render can never reach the replaced chart.

use crate::error::RemoteCallFailure;
use crate::LocalBoxFuture;
use futures::future::{AbortHandle, Abortable, Aborted};
use futures::FutureExt;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Transport for plugin commands.
///
/// Implementations should issue the request when `call` is invoked, not when
/// the returned future is first polled.
pub trait CommandClient {
    fn call(
        &self,
        endpoint: &str,
        method: &str,
        params: Value,
    ) -> LocalBoxFuture<'static, Result<Value, RemoteCallFailure>>;
}

struct Tracked {
    ticket: u64,
    handle: AbortHandle,
}

/// Tracks outstanding calls per widget instance.
///
/// Cheaply cloneable; clones share the same tracking table.
#[derive(Clone)]
pub struct CallManager {
    client: Rc<dyn CommandClient>,
    active: Rc<RefCell<HashMap<String, Tracked>>>,
    next_ticket: Rc<Cell<u64>>,
}

impl CallManager {
    pub fn new(client: impl CommandClient + 'static) -> Self {
        Self::from_rc(Rc::new(client))
    }

    pub fn from_rc(client: Rc<dyn CommandClient>) -> Self {
        Self {
            client,
            active: Rc::new(RefCell::new(HashMap::new())),
            next_ticket: Rc::new(Cell::new(0)),
        }
    }

    /// Handle scoped to one widget instance.
    pub fn for_widget(&self, instance_id: impl Into<String>) -> WidgetCalls {
        WidgetCalls {
            manager: self.clone(),
            instance_id: instance_id.into(),
        }
    }

    /// Number of widget instances with a call in flight.
    pub fn outstanding(&self) -> usize {
        self.active.borrow().len()
    }

    pub fn is_outstanding(&self, instance_id: &str) -> bool {
        self.active.borrow().contains_key(instance_id)
    }

    /// Abort every outstanding call (dashboard teardown).
    pub fn stop_all(&self) {
        for (instance_id, tracked) in self.active.borrow_mut().drain() {
            log::debug!("stopping call for widget {}", instance_id);
            tracked.handle.abort();
        }
    }

    fn release(&self, instance_id: &str, ticket: u64) {
        let mut active = self.active.borrow_mut();
        if active.get(instance_id).map(|t| t.ticket) == Some(ticket) {
            active.remove(instance_id);
        }
    }
}

/// The managed-call API as seen by one widget instance.
#[derive(Clone)]
pub struct WidgetCalls {
    manager: CallManager,
    instance_id: String,
}

impl WidgetCalls {
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Stop this instance's previous call, then start a new one.
    ///
    /// The request is issued before this returns. If it is stopped before it
    /// completes, the returned future resolves to [`RemoteCallFailure::Cancelled`].
    pub fn start_call_stop(
        &self,
        endpoint: &str,
        method: &str,
        params: Value,
    ) -> LocalBoxFuture<'static, Result<Value, RemoteCallFailure>> {
        self.stop();

        let ticket = self.manager.next_ticket.get();
        self.manager.next_ticket.set(ticket + 1);

        let (handle, registration) = AbortHandle::new_pair();
        self.manager
            .active
            .borrow_mut()
            .insert(self.instance_id.clone(), Tracked { ticket, handle });

        log::debug!(
            "widget {} calling {}::{}",
            self.instance_id,
            endpoint,
            method
        );
        let call = Abortable::new(
            self.manager.client.call(endpoint, method, params),
            registration,
        );

        let manager = self.manager.clone();
        let instance_id = self.instance_id.clone();
        async move {
            let result = call.await;
            manager.release(&instance_id, ticket);
            match result {
                Ok(outcome) => outcome,
                Err(Aborted) => Err(RemoteCallFailure::Cancelled),
            }
        }
        .boxed_local()
    }

    /// Abort the outstanding call, if any. Returns whether one was stopped.
    pub fn stop(&self) -> bool {
        let stopped = self.manager.active.borrow_mut().remove(&self.instance_id);
        match stopped {
            Some(tracked) => {
                log::debug!("stopping previous call for widget {}", self.instance_id);
                tracked.handle.abort();
                true
            }
            None => false,
        }
    }
}

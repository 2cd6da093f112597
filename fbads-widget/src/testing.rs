//! Recording doubles for the host-side traits, shared by the unit tests.

use crate::calls::CommandClient;
use crate::chart::{Chart, ChartFactory, ChartKind, ChartOptions, Container, MountPoint};
use crate::error::RemoteCallFailure;
use crate::LocalBoxFuture;
use futures::channel::oneshot;
use futures::FutureExt;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Reply = Result<Value, RemoteCallFailure>;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub endpoint: String,
    pub method: String,
    pub params: Value,
}

/// Command client whose responses are supplied by the test after the call is issued.
#[derive(Clone, Default)]
pub struct DeferredClient {
    requests: Rc<RefCell<Vec<RecordedRequest>>>,
    senders: Rc<RefCell<Vec<Option<oneshot::Sender<Reply>>>>>,
}

impl DeferredClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    /// Deliver the reply for the `index`-th request.
    pub fn resolve(&self, index: usize, reply: Reply) {
        let sender = self.senders.borrow_mut()[index].take();
        if let Some(sender) = sender {
            let _ = sender.send(reply);
        }
    }
}

impl CommandClient for DeferredClient {
    fn call(&self, endpoint: &str, method: &str, params: Value) -> LocalBoxFuture<'static, Reply> {
        let (tx, rx) = oneshot::channel();
        self.requests.borrow_mut().push(RecordedRequest {
            endpoint: endpoint.to_string(),
            method: method.to_string(),
            params,
        });
        self.senders.borrow_mut().push(Some(tx));
        async move {
            rx.await
                .unwrap_or_else(|_| Err(RemoteCallFailure::Transport("request dropped".to_string())))
        }
        .boxed_local()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    Created { chart: usize, kind: ChartKind, mount: MountPoint },
    Config { chart: usize, options: ChartOptions },
    Data { chart: usize, data: Value },
    Error { chart: usize, error: RemoteCallFailure },
}

/// Chart factory that logs every chart interaction in order.
#[derive(Clone, Default)]
pub struct RecordingFactory {
    events: Rc<RefCell<Vec<ChartEvent>>>,
    created: Rc<Cell<usize>>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ChartEvent> {
        self.events.borrow().clone()
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn data_for(&self, chart: usize) -> Vec<Value> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ChartEvent::Data { chart: c, data } if c == chart => Some(data),
                _ => None,
            })
            .collect()
    }

    pub fn errors_for(&self, chart: usize) -> Vec<RemoteCallFailure> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ChartEvent::Error { chart: c, error } if c == chart => Some(error),
                _ => None,
            })
            .collect()
    }
}

impl ChartFactory for RecordingFactory {
    fn create(&self, kind: ChartKind, mount: &MountPoint) -> Box<dyn Chart> {
        let chart = self.created.get();
        self.created.set(chart + 1);
        self.events.borrow_mut().push(ChartEvent::Created {
            chart,
            kind,
            mount: mount.clone(),
        });
        Box::new(RecordingChart {
            chart,
            events: self.events.clone(),
        })
    }
}

struct RecordingChart {
    chart: usize,
    events: Rc<RefCell<Vec<ChartEvent>>>,
}

impl Chart for RecordingChart {
    fn update_config(&mut self, options: ChartOptions) {
        self.events.borrow_mut().push(ChartEvent::Config {
            chart: self.chart,
            options,
        });
    }

    fn set_data(&mut self, data: Value) {
        self.events.borrow_mut().push(ChartEvent::Data {
            chart: self.chart,
            data,
        });
    }

    fn set_error(&mut self, error: RemoteCallFailure) {
        self.events.borrow_mut().push(ChartEvent::Error {
            chart: self.chart,
            error,
        });
    }
}

/// Container that hands out sequential child ids.
#[derive(Clone)]
pub struct RecordingContainer {
    prefix: String,
    children: Rc<RefCell<Vec<MountPoint>>>,
    broken: bool,
}

impl RecordingContainer {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            children: Rc::new(RefCell::new(Vec::new())),
            broken: false,
        }
    }

    /// A container whose element creation always fails.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::new("broken")
        }
    }

    pub fn children(&self) -> Vec<MountPoint> {
        self.children.borrow().clone()
    }
}

impl Container for RecordingContainer {
    fn append_child(&self) -> anyhow::Result<MountPoint> {
        if self.broken {
            anyhow::bail!("container {} is detached", self.prefix);
        }
        let mut children = self.children.borrow_mut();
        let mount = MountPoint::new(format!("{}-{}", self.prefix, children.len()));
        children.push(mount.clone());
        Ok(mount)
    }
}

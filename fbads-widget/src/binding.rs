//! The insights widget render function.
//!
//! `render` runs synchronously up to issuing the remote call, then hands the
//! host a [`PendingRender`] holding the continuation. Driving it to completion
//! routes the call result into the chart: data on fulfillment, error on
//! rejection, never both.

use crate::calls::WidgetCalls;
use crate::chart::{ChartFactory, ChartKind, ChartOptions, Container};
use crate::config::{ChartMode, InsightQueryParams, WidgetConfig};
use crate::{LocalBoxFuture, COMMAND_ENDPOINT, GET_INSIGHTS};
use futures::FutureExt;
use std::future::{ready, IntoFuture};
use std::rc::Rc;

/// Hole ratio of the "sum" donut chart.
pub const PIE_HOLE: f64 = 0.5;

/// Collaborators injected by the host into every render.
#[derive(Clone)]
pub struct WidgetContext {
    /// Managed-call API scoped to the widget instance being rendered.
    pub calls: WidgetCalls,
    pub charts: Rc<dyn ChartFactory>,
}

/// How a render settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Unrecognized mode: no chart, no call.
    Ignored,
    /// The call succeeded and the chart received its data.
    Rendered,
    /// The call failed and the chart shows the error.
    Failed,
}

/// Continuation of one render, awaiting the remote call.
#[must_use = "the chart is only updated once the pending render is driven"]
pub struct PendingRender {
    continuation: Option<LocalBoxFuture<'static, RenderOutcome>>,
}

impl PendingRender {
    fn ignored() -> Self {
        Self { continuation: None }
    }

    /// True when nothing was issued and awaiting yields [`RenderOutcome::Ignored`].
    pub fn is_ignored(&self) -> bool {
        self.continuation.is_none()
    }
}

impl IntoFuture for PendingRender {
    type Output = RenderOutcome;
    type IntoFuture = LocalBoxFuture<'static, RenderOutcome>;

    fn into_future(self) -> Self::IntoFuture {
        match self.continuation {
            Some(continuation) => continuation,
            None => ready(RenderOutcome::Ignored).boxed_local(),
        }
    }
}

/// Render one widget instance into `container`.
///
/// Always attaches a fresh child element first. For `"sum"` a donut chart is
/// created and the call asks for an action breakdown; for `"evolution"` a
/// line chart is created and the call asks for daily values. Any other mode
/// is a silent no-op apart from stopping the instance's previous call.
pub fn render(
    container: &dyn Container,
    config: &WidgetConfig,
    context: &WidgetContext,
) -> anyhow::Result<PendingRender> {
    let mount = container.append_child()?;

    let (mut chart, action_breakdown) = match config.mode {
        ChartMode::Sum => {
            let mut chart = context.charts.create(ChartKind::Pie, &mount);
            chart.update_config(ChartOptions::donut(PIE_HOLE));
            (chart, true)
        }
        ChartMode::Evolution => (context.charts.create(ChartKind::Line, &mount), false),
        ChartMode::Unrecognized => {
            // Nothing replaces the previous chart, so its result must not land.
            context.calls.stop();
            log::debug!(
                "widget {} has unrecognized type, nothing to render",
                context.calls.instance_id()
            );
            return Ok(PendingRender::ignored());
        }
    };

    let params = InsightQueryParams::new(config, action_breakdown);
    let call = context
        .calls
        .start_call_stop(COMMAND_ENDPOINT, GET_INSIGHTS, params.to_value());

    let instance_id = context.calls.instance_id().to_string();
    let continuation = async move {
        match call.await {
            Ok(data) => {
                chart.set_data(data);
                RenderOutcome::Rendered
            }
            Err(error) => {
                log::warn!("insights for widget {} failed: {}", instance_id, error);
                chart.set_error(error);
                RenderOutcome::Failed
            }
        }
    };

    Ok(PendingRender {
        continuation: Some(continuation.boxed_local()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calls::CallManager;
    use crate::chart::MountPoint;
    use crate::error::RemoteCallFailure;
    use crate::testing::{ChartEvent, DeferredClient, RecordingContainer, RecordingFactory};
    use futures::executor::block_on;
    use serde_json::json;

    struct Harness {
        client: DeferredClient,
        manager: CallManager,
        charts: RecordingFactory,
    }

    impl Harness {
        fn new() -> Self {
            let client = DeferredClient::new();
            Self {
                manager: CallManager::new(client.clone()),
                client,
                charts: RecordingFactory::new(),
            }
        }

        fn context(&self, instance_id: &str) -> WidgetContext {
            WidgetContext {
                calls: self.manager.for_widget(instance_id),
                charts: Rc::new(self.charts.clone()),
            }
        }
    }

    fn config(mode: &str) -> WidgetConfig {
        WidgetConfig::from_value(json!({
            "type": mode,
            "insight": "42",
            "service": {"config": {"account": "acct_1"}}
        }))
        .unwrap()
    }

    #[test]
    fn sum_creates_donut_and_requests_breakdown() {
        let h = Harness::new();
        let container = RecordingContainer::new("w1");

        let pending = render(&container, &config("sum"), &h.context("w1")).unwrap();
        assert!(!pending.is_ignored());

        assert_eq!(
            h.charts.events(),
            vec![
                ChartEvent::Created {
                    chart: 0,
                    kind: ChartKind::Pie,
                    mount: MountPoint::new("w1-0"),
                },
                ChartEvent::Config {
                    chart: 0,
                    options: ChartOptions::donut(0.5),
                },
            ]
        );

        let requests = h.client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].endpoint, "serverboards.facebookads/command");
        assert_eq!(requests[0].method, "get_insights");
        assert_eq!(
            requests[0].params,
            json!({
                "insight_id": "42",
                "action_breakdown": true,
                "service": {"config": {"account": "acct_1"}}
            })
        );
    }

    #[test]
    fn evolution_creates_line_chart_without_breakdown() {
        let h = Harness::new();
        let container = RecordingContainer::new("w1");

        let _pending = render(&container, &config("evolution"), &h.context("w1")).unwrap();

        assert_eq!(
            h.charts.events(),
            vec![ChartEvent::Created {
                chart: 0,
                kind: ChartKind::Line,
                mount: MountPoint::new("w1-0"),
            }]
        );
        let requests = h.client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].params["action_breakdown"], json!(false));
        assert_eq!(requests[0].params["insight_id"], json!("42"));
    }

    #[test]
    fn unrecognized_mode_is_a_silent_noop() {
        let h = Harness::new();
        let container = RecordingContainer::new("w1");

        let pending = render(&container, &config("histogram"), &h.context("w1")).unwrap();
        assert!(pending.is_ignored());
        assert_eq!(block_on(pending.into_future()), RenderOutcome::Ignored);

        assert_eq!(h.charts.created(), 0);
        assert!(h.client.requests().is_empty());
        // The child element is still attached before the mode is inspected.
        assert_eq!(container.children().len(), 1);
    }

    #[test]
    fn fulfillment_sets_data_once() {
        let h = Harness::new();
        let container = RecordingContainer::new("w1");
        let pending = render(&container, &config("sum"), &h.context("w1")).unwrap();

        let data = json!({"labels": ["A", "B"], "values": [1, 2]});
        h.client.resolve(0, Ok(data.clone()));

        assert_eq!(block_on(pending.into_future()), RenderOutcome::Rendered);
        assert_eq!(h.charts.data_for(0), vec![data]);
        assert!(h.charts.errors_for(0).is_empty());
    }

    #[test]
    fn rejection_sets_error_once() {
        let h = Harness::new();
        let container = RecordingContainer::new("w1");
        let pending = render(&container, &config("evolution"), &h.context("w1")).unwrap();

        let error = RemoteCallFailure::Remote(json!("invalid OAuth access token"));
        h.client.resolve(0, Err(error.clone()));

        assert_eq!(block_on(pending.into_future()), RenderOutcome::Failed);
        assert_eq!(h.charts.errors_for(0), vec![error]);
        assert!(h.charts.data_for(0).is_empty());
    }

    #[test]
    fn renders_on_fresh_containers_are_independent() {
        let h = Harness::new();
        let first_container = RecordingContainer::new("a");
        let second_container = RecordingContainer::new("b");

        let first = render(&first_container, &config("sum"), &h.context("a")).unwrap();
        let second = render(&second_container, &config("sum"), &h.context("b")).unwrap();
        assert_eq!(h.charts.created(), 2);
        assert_eq!(h.client.requests().len(), 2);

        h.client.resolve(1, Ok(json!({"Likes": 5})));
        h.client.resolve(0, Err(RemoteCallFailure::Transport("offline".to_string())));

        assert_eq!(block_on(second.into_future()), RenderOutcome::Rendered);
        assert_eq!(block_on(first.into_future()), RenderOutcome::Failed);

        assert_eq!(h.charts.data_for(1), vec![json!({"Likes": 5})]);
        assert!(h.charts.errors_for(1).is_empty());
        assert!(h.charts.data_for(0).is_empty());
        assert_eq!(h.charts.errors_for(0).len(), 1);
        assert_eq!(first_container.children(), vec![MountPoint::new("a-0")]);
        assert_eq!(second_container.children(), vec![MountPoint::new("b-0")]);
    }

    #[test]
    fn rerender_cancels_stale_call() {
        let h = Harness::new();
        let container = RecordingContainer::new("w1");
        let context = h.context("w1");

        let stale = render(&container, &config("sum"), &context).unwrap();
        let fresh = render(&container, &config("evolution"), &context).unwrap();

        h.client.resolve(0, Ok(json!({"Likes": 1})));
        h.client.resolve(1, Ok(json!([{"name": "CTR", "values": [["2017-02-01", "1.2"]]}])));

        assert_eq!(block_on(stale.into_future()), RenderOutcome::Failed);
        assert_eq!(block_on(fresh.into_future()), RenderOutcome::Rendered);

        assert!(h.charts.data_for(0).is_empty());
        assert_eq!(h.charts.errors_for(0), vec![RemoteCallFailure::Cancelled]);
        assert_eq!(h.charts.data_for(1).len(), 1);
    }

    #[test]
    fn unrecognized_rerender_stops_previous_call() {
        let h = Harness::new();
        let container = RecordingContainer::new("w1");
        let context = h.context("w1");

        let stale = render(&container, &config("sum"), &context).unwrap();
        assert!(h.manager.is_outstanding("w1"));

        let ignored = render(&container, &config("histogram"), &context).unwrap();
        assert!(ignored.is_ignored());
        assert!(!h.manager.is_outstanding("w1"));

        h.client.resolve(0, Ok(json!({"Likes": 1})));
        assert_eq!(block_on(stale.into_future()), RenderOutcome::Failed);
        assert!(h.charts.data_for(0).is_empty());
        assert_eq!(h.charts.errors_for(0), vec![RemoteCallFailure::Cancelled]);
        assert_eq!(h.client.requests().len(), 1);
    }

    #[test]
    fn container_failure_is_reported_without_call() {
        let h = Harness::new();
        let result = render(&RecordingContainer::broken(), &config("sum"), &h.context("w1"));

        assert!(result.is_err());
        assert_eq!(h.charts.created(), 0);
        assert!(h.client.requests().is_empty());
    }
}

// Streaming dashboard service - Progressive per-widget loading
use crate::application::fetch_adapter::TelemetryFetchAdapter;
use crate::application::interpreter::DashboardInterpreter;
use crate::application::telemetry_repository::{TelemetryError, TelemetryRepository};
use crate::application::widget_registry::lookup;
use crate::domain::dashboard::NormalizedDashboard;
use crate::domain::stream::{DashboardSkeleton, StreamMessage, WidgetSkeleton, WidgetStatus};
use crate::domain::widget::{NormalizedWidget, WidgetKind};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 100;

#[derive(Clone)]
pub struct StreamingDashboardService {
    repository: Arc<dyn TelemetryRepository>,
    interpreter: DashboardInterpreter,
    fetcher: TelemetryFetchAdapter,
    channel_capacity: usize,
}

impl StreamingDashboardService {
    pub fn new(
        repository: Arc<dyn TelemetryRepository>,
        interpreter: DashboardInterpreter,
        channel_capacity: usize,
    ) -> Self {
        Self {
            fetcher: TelemetryFetchAdapter::new(repository.clone()),
            repository,
            interpreter,
            channel_capacity: channel_capacity.max(1),
        }
    }

    pub fn interpreter(&self) -> &DashboardInterpreter {
        &self.interpreter
    }

    /// Load a dashboard document from the backend and interpret it
    pub async fn load_dashboard(&self, dashboard_id: &str) -> Result<NormalizedDashboard, TelemetryError> {
        let raw = self.repository.get_dashboard(dashboard_id).await?;
        Ok(self.interpreter.interpret(raw))
    }

    pub async fn stream_dashboard(
        &self,
        dashboard_id: &str,
    ) -> Result<mpsc::Receiver<StreamMessage>, TelemetryError> {
        let dashboard = self.load_dashboard(dashboard_id).await?;
        Ok(self.stream(dashboard).await)
    }

    /// Stream a skeleton, then one message per widget as its fetch finishes,
    /// then a completion event. Widgets are fetched concurrently and a failed
    /// widget never holds back its siblings.
    pub async fn stream(&self, dashboard: NormalizedDashboard) -> mpsc::Receiver<StreamMessage> {
        let (tx, rx) = mpsc::channel(self.channel_capacity);
        let start_time = Instant::now();
        let total_widgets = dashboard.widgets.len();

        // 1. Skeleton first so the client can lay out every widget
        let skeleton = build_skeleton(&dashboard);
        let _ = tx.send(StreamMessage::Skeleton(skeleton)).await;

        // 2. One task per widget
        let tasks: Vec<_> = dashboard
            .widgets
            .into_iter()
            .map(|widget| {
                let tx = tx.clone();
                let fetcher = self.fetcher.clone();
                tokio::spawn(async move {
                    let msg = fetch_widget(&fetcher, widget).await;
                    let _ = tx.send(msg).await;
                })
            })
            .collect();

        // 3. Completion once every widget task has finished
        tokio::spawn(async move {
            futures::future::join_all(tasks).await;

            let duration_ms = start_time.elapsed().as_millis() as i64;
            tracing::debug!("Dashboard stream finished: {} widgets in {}ms", total_widgets, duration_ms);
            let _ = tx
                .send(StreamMessage::Complete {
                    total_widgets,
                    duration_ms,
                })
                .await;
        });

        rx
    }
}

fn build_skeleton(dashboard: &NormalizedDashboard) -> DashboardSkeleton {
    let renderers = dashboard
        .widgets
        .iter()
        .map(|w| WidgetSkeleton {
            id: w.id.clone(),
            renderer: lookup(w.kind),
        })
        .collect();

    DashboardSkeleton {
        dashboard: dashboard.clone(),
        renderers,
    }
}

async fn fetch_widget(fetcher: &TelemetryFetchAdapter, widget: NormalizedWidget) -> StreamMessage {
    let status = |status| StreamMessage::WidgetStatus {
        widget_id: widget.id.clone(),
        status,
    };

    let Some(entity) = widget.entity.as_ref() else {
        return status(WidgetStatus::NoDataSource);
    };
    if widget.kind == WidgetKind::Unknown {
        return status(WidgetStatus::Unsupported);
    }
    if widget.keys.is_empty() {
        return status(WidgetStatus::NoKeys);
    }

    let result = match widget.kind {
        WidgetKind::Timeseries => fetcher
            .fetch_series(entity, &widget.keys, &widget.timewindow)
            .await
            .map(|series| StreamMessage::SeriesUpdate {
                widget_id: widget.id.clone(),
                series,
            }),
        _ => fetcher
            .fetch_latest(entity, &widget.keys)
            .await
            .map(|values| StreamMessage::LatestUpdate {
                widget_id: widget.id.clone(),
                values,
            }),
    };

    result.unwrap_or_else(|e| {
        tracing::warn!("Fetch failed for widget {}: {}", widget.id, e);
        status(WidgetStatus::FetchFailed { message: e.to_string() })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fetch_adapter::tests::RecordingRepository;
    use crate::domain::widget::RendererHandle;
    use serde_json::json;
    use std::collections::HashMap;

    fn document() -> serde_json::Value {
        json!({
            "id": {"id": "dash-1"},
            "title": "Boiler room",
            "configuration": {
                "entityAliases": {"boiler": {"filter": {"type": "singleEntity", "singleEntity": {"entityType": "DEVICE", "id": "boiler-1"}}}},
                "widgets": {
                    "chart": {"config": {"title": "Temp Chart", "datasources": [{
                        "entityId": {"entityType": "DEVICE", "id": "dev-1"},
                        "dataKeys": [{"name": "temperature"}, {"name": "humidity"}]
                    }]}},
                    "card": {"typeAlias": "simple_value", "config": {"datasources": [{
                        "entityAliasId": "boiler",
                        "dataKeys": [{"name": "pressure"}]
                    }]}},
                    "broken": {"config": {"title": "Broken value", "datasources": [{
                        "entityId": {"entityType": "DEVICE", "id": "dev-x"},
                        "dataKeys": [{"name": "t"}]
                    }]}},
                    "orphan": {"config": {"title": "Orphan"}},
                    "mystery": {"config": {"datasources": [{"entityId": {"entityType": "DEVICE", "id": "dev-1"}}]}},
                    "keyless": {"typeAlias": "latest", "config": {"datasources": [{"entityId": {"entityType": "DEVICE", "id": "dev-1"}}]}}
                }
            }
        })
    }

    fn service(repo: Arc<RecordingRepository>) -> StreamingDashboardService {
        StreamingDashboardService::new(repo, DashboardInterpreter::default(), DEFAULT_CHANNEL_CAPACITY)
    }

    async fn collect(mut rx: mpsc::Receiver<StreamMessage>) -> Vec<StreamMessage> {
        let mut messages = Vec::new();
        while let Some(msg) = rx.recv().await {
            messages.push(msg);
        }
        messages
    }

    #[tokio::test]
    async fn test_stream_degrades_per_widget() {
        let repo = Arc::new(RecordingRepository {
            dashboard: Some(document()),
            failing_entities: vec!["dev-x".to_string()],
            ..Default::default()
        });
        let messages = collect(service(repo.clone()).stream_dashboard("dash-1").await.unwrap()).await;

        // skeleton + six widgets + completion
        assert_eq!(messages.len(), 8);

        let StreamMessage::Skeleton(skeleton) = &messages[0] else {
            panic!("first message must be the skeleton");
        };
        assert_eq!(skeleton.dashboard.id, "dash-1");
        assert_eq!(skeleton.renderers[0].renderer, RendererHandle::TimeSeriesRenderer);
        assert_eq!(skeleton.renderers[4].renderer, RendererHandle::SingleValueRenderer);

        assert!(matches!(
            messages.last(),
            Some(StreamMessage::Complete { total_widgets: 6, .. })
        ));

        let by_widget: HashMap<&str, &StreamMessage> = messages
            .iter()
            .filter_map(|m| m.widget_id().map(|id| (id, m)))
            .collect();

        assert!(matches!(by_widget["chart"], StreamMessage::SeriesUpdate { series, .. } if series.len() == 2));
        assert!(matches!(by_widget["card"], StreamMessage::LatestUpdate { values, .. } if values.contains_key("pressure")));
        assert!(matches!(
            by_widget["broken"],
            StreamMessage::WidgetStatus { status: WidgetStatus::FetchFailed { .. }, .. }
        ));
        assert!(matches!(
            by_widget["orphan"],
            StreamMessage::WidgetStatus { status: WidgetStatus::NoDataSource, .. }
        ));
        assert!(matches!(
            by_widget["mystery"],
            StreamMessage::WidgetStatus { status: WidgetStatus::Unsupported, .. }
        ));
        assert!(matches!(
            by_widget["keyless"],
            StreamMessage::WidgetStatus { status: WidgetStatus::NoKeys, .. }
        ));

        // only the three fetchable widgets reached the backend
        let latest = repo.latest.lock().unwrap().len();
        let series = repo.series.lock().unwrap().len();
        assert_eq!(latest + series, 3);
    }

    #[tokio::test]
    async fn test_missing_dashboard_is_an_error() {
        let repo = Arc::new(RecordingRepository::default());
        let err = service(repo).stream_dashboard("nope").await.unwrap_err();
        assert!(matches!(err, TelemetryError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_empty_dashboard_still_completes() {
        let repo = Arc::new(RecordingRepository::default());
        let dashboard = DashboardInterpreter::default().interpret(json!({}));
        let messages = collect(service(repo).stream(dashboard).await).await;
        assert_eq!(messages.len(), 2);
        assert!(matches!(messages[1], StreamMessage::Complete { total_widgets: 0, .. }));
    }
}

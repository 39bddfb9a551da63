// Application state for HTTP handlers
use crate::application::streaming_service::StreamingDashboardService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: StreamingDashboardService,
}

//! Dashboard runtime: interprets authoring-tool dashboard documents into a
//! normalized widget model and fetches the telemetry each widget needs.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::fetch_adapter::TelemetryFetchAdapter;
pub use application::interpreter::{interpret, DashboardInterpreter};
pub use application::widget_registry::lookup;
pub use domain::dashboard::NormalizedDashboard;
pub use domain::entity::{EntityRef, EntityType};
pub use domain::timewindow::Timewindow;
pub use domain::widget::{NormalizedWidget, RendererHandle, WidgetKind};

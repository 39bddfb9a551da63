// Domain layer - Normalized dashboard model and telemetry values
pub mod dashboard;
pub mod entity;
pub mod stream;
pub mod telemetry;
pub mod timewindow;
pub mod widget;

// Application layer - Interpretation, lookup and fetch use cases
pub mod fetch_adapter;
pub mod interpreter;
pub mod streaming_service;
pub mod telemetry_repository;
pub mod widget_registry;

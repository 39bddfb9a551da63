// Widget component registry - Kind to renderer lookup
use crate::domain::widget::{RendererHandle, WidgetKind};

/// Renderer for a widget kind. Kinds without a dedicated renderer use the
/// single value card, which shows them as unsupported.
pub fn lookup(kind: WidgetKind) -> RendererHandle {
    match kind {
        WidgetKind::SingleValue => RendererHandle::SingleValueRenderer,
        WidgetKind::Timeseries => RendererHandle::TimeSeriesRenderer,
        WidgetKind::Unknown => RendererHandle::SingleValueRenderer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup(WidgetKind::SingleValue), RendererHandle::SingleValueRenderer);
        assert_eq!(lookup(WidgetKind::Timeseries), RendererHandle::TimeSeriesRenderer);
        assert_eq!(lookup(WidgetKind::Unknown), RendererHandle::SingleValueRenderer);
    }
}

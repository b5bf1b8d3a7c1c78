use std::collections::HashSet;
use std::sync::Arc;

use widgets::{InMemoryWidgetStore, Widget, WidgetRequest, WidgetService, WidgetStore};

// ==========================
// CORE TEST FACTORIES
// ==========================

/// Creates an empty in-memory store behind the trait object the service takes.
pub fn test_store() -> Arc<dyn WidgetStore> {
    Arc::new(InMemoryWidgetStore::new())
}

/// Creates a service over a fresh in-memory store.
pub fn test_service() -> Arc<WidgetService> {
    Arc::new(WidgetService::new(test_store()))
}

/// A 10x10 widget centred at the origin.
pub fn square() -> WidgetRequest {
    WidgetRequest::new(0, 0, 10.0, 10.0)
}

/// Adds one widget per entry of `zs`, in order, and returns them as stored.
pub fn add_at(service: &WidgetService, zs: &[i64]) -> Vec<Widget> {
    zs.iter()
        .map(|&z| service.add(square().with_z(z)).unwrap())
        .collect()
}

/// Every widget, ascending by Z.
pub fn all_widgets(service: &WidgetService) -> Vec<Widget> {
    service.get_all(0, usize::MAX, None)
}

pub fn z_of(service: &WidgetService, widget: &Widget) -> i64 {
    service.get_by_id(&widget.id).unwrap().z
}

// ==========================
// ASSERTION HELPERS
// ==========================

/// Asserts no two stored widgets share a Z-index.
pub fn assert_unique_z(service: &WidgetService) {
    let widgets = all_widgets(service);
    let distinct: HashSet<i64> = widgets.iter().map(|w| w.z).collect();
    assert_eq!(
        distinct.len(),
        widgets.len(),
        "duplicate Z-index in {:?}",
        widgets.iter().map(|w| w.z).collect::<Vec<_>>()
    );
}

/// Asserts the watermark is at least every stored Z.
pub fn assert_watermark_covers(service: &WidgetService) {
    let highest = all_widgets(service).iter().map(|w| w.z).max();
    if let Some(highest) = highest {
        assert!(service.highest_z() >= highest);
    }
}

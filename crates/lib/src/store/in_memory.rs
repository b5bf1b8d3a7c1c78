//! In-memory widget store
//!
//! Widgets live in a sharded concurrent map keyed by id. Operations on
//! different keys usually land on different shards and do not contend; there
//! is no lock over the whole map. Nothing is persisted: the store starts
//! empty and is lost with the process.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::trace;

use super::{WidgetStore, paginate_by_z, sort_by_z};
use crate::widget::{InsideArea, Widget, WidgetId};

/// A [`WidgetStore`] backed by a `DashMap`.
#[derive(Debug, Default)]
pub struct InMemoryWidgetStore {
    widgets: DashMap<WidgetId, Widget>,
}

impl InMemoryWidgetStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self {
            widgets: DashMap::new(),
        }
    }

    /// Creates an empty store pre-sized for `capacity` widgets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            widgets: DashMap::with_capacity(capacity),
        }
    }

    /// Returns the ids of all stored widgets.
    pub fn all_ids(&self) -> Vec<WidgetId> {
        self.widgets.iter().map(|entry| *entry.key()).collect()
    }

    fn collect_where(&self, keep: impl Fn(&Widget) -> bool) -> Vec<Widget> {
        self.widgets
            .iter()
            .filter(|entry| keep(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }
}

impl WidgetStore for InMemoryWidgetStore {
    fn save(&self, widget: Widget) -> Widget {
        // The entry guard holds the shard lock, so the replacement is atomic
        // with respect to other writers of the same id.
        match self.widgets.entry(widget.id) {
            Entry::Occupied(mut occupied) => {
                let current = occupied.get_mut();
                current.x = widget.x;
                current.y = widget.y;
                current.z = widget.z;
                current.width = widget.width;
                current.height = widget.height;
                current.last_modification_date = widget.last_modification_date;
                current.clone()
            }
            Entry::Vacant(vacant) => vacant.insert(widget).value().clone(),
        }
    }

    fn find_by_id(&self, id: &WidgetId) -> Option<Widget> {
        self.widgets.get(id).map(|entry| entry.value().clone())
    }

    fn find_all(&self) -> Vec<Widget> {
        self.collect_where(|_| true)
    }

    fn find_all_ordered_by_z(&self, page: usize, size: usize) -> Vec<Widget> {
        trace!(page, size, "ordered scan");
        if size == 0 {
            return Vec::new();
        }
        paginate_by_z(self.find_all(), page, size)
    }

    fn find_all_in_area_ordered_by_z(
        &self,
        page: usize,
        size: usize,
        area: &InsideArea,
    ) -> Vec<Widget> {
        trace!(page, size, ?area, "area scan");
        if size == 0 {
            return Vec::new();
        }
        paginate_by_z(self.collect_where(|w| area.test(w)), page, size)
    }

    fn find_all_with_z_at_least(&self, z: i64) -> Vec<Widget> {
        let mut widgets = self.collect_where(|w| w.z >= z);
        sort_by_z(&mut widgets);
        widgets
    }

    fn delete_by_id(&self, id: &WidgetId) {
        self.widgets.remove(id);
    }

    fn len(&self) -> usize {
        self.widgets.len()
    }
}

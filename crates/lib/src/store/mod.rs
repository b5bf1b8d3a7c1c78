//! Widget storage.
//!
//! This module provides the [`WidgetStore`] trait and its in-memory
//! implementation. A store is a keyed container with no ordering invariant of
//! its own: every ordered view is computed at query time. The ordering rules
//! (unique Z, shifting) live one layer up in [`WidgetService`](crate::WidgetService).
//!
//! Stores never fail. "Not found" is an empty `Option` or an empty `Vec`.

mod in_memory;

pub use in_memory::InMemoryWidgetStore;

use crate::widget::{InsideArea, Widget, WidgetId};

/// Storage abstraction for widgets.
///
/// All implementations must be `Send` and `Sync`; the service shares one
/// store between every request thread. Each individual operation is atomic,
/// but there is no transaction spanning several operations.
pub trait WidgetStore: Send + Sync {
    /// Upserts a widget by id.
    ///
    /// If a widget with the same id exists, its mutable fields (x, y, z,
    /// width, height, lastModificationDate) are replaced in one atomic step.
    /// Otherwise the widget is inserted. Returns the stored value.
    fn save(&self, widget: Widget) -> Widget;

    /// Retrieves a widget by id.
    fn find_by_id(&self, id: &WidgetId) -> Option<Widget>;

    /// Returns every stored widget in no particular order.
    ///
    /// The result is a snapshot and need not be linearizable with
    /// concurrent writers.
    fn find_all(&self) -> Vec<Widget>;

    /// Returns page `page` of all widgets sorted ascending by Z, at most
    /// `size` entries, after skipping `page * size`.
    fn find_all_ordered_by_z(&self, page: usize, size: usize) -> Vec<Widget>;

    /// Like [`find_all_ordered_by_z`](Self::find_all_ordered_by_z), restricted
    /// to widgets inside `area`. The filter applies before sorting and paging.
    fn find_all_in_area_ordered_by_z(
        &self,
        page: usize,
        size: usize,
        area: &InsideArea,
    ) -> Vec<Widget>;

    /// Returns every widget with `z >= z`, sorted ascending by Z.
    fn find_all_with_z_at_least(&self, z: i64) -> Vec<Widget>;

    /// Removes a widget. Removing an unknown id is a no-op.
    fn delete_by_id(&self, id: &WidgetId);

    /// Number of stored widgets.
    fn len(&self) -> usize;

    /// True if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sorts ascending by Z and cuts out one page.
///
/// Ties on Z (only possible after an update moved a widget onto an occupied
/// index) are broken by id so that consecutive pages never overlap.
pub(crate) fn paginate_by_z(mut widgets: Vec<Widget>, page: usize, size: usize) -> Vec<Widget> {
    sort_by_z(&mut widgets);
    widgets
        .into_iter()
        .skip(page.saturating_mul(size))
        .take(size)
        .collect()
}

pub(crate) fn sort_by_z(widgets: &mut [Widget]) {
    widgets.sort_unstable_by(|a, b| a.z.cmp(&b.z).then_with(|| a.id.cmp(&b.id)));
}

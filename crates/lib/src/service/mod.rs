//! Widget ordering service.
//!
//! [`WidgetService`] owns the rule that no two widgets share a Z-index. It
//! resolves collisions on insert by shifting the occupied run upwards, keeps
//! the highest-Z [`Watermark`] used for foreground placement, and serves the
//! ordered and area-filtered reads.
//!
//! ## Locking
//!
//! The store is safe for concurrent point operations on its own. On top of
//! it the service holds an ordering lock: every operation that can change
//! the Z layout (add, update, delete) takes it exclusively, listing takes it
//! shared, and lookups by id do not take it at all. A shift saves each moved
//! widget individually, so without the exclusive lock a concurrent reader
//! could observe the momentary duplicate between two of those saves.

mod errors;
mod watermark;


use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

pub use errors::WidgetError;
pub use watermark::{UpdateOutcome, Watermark, bounded_update};

use crate::Result;
use crate::clock::{Clock, SystemClock};
use crate::constants::{INITIAL_HIGHEST_Z, WATERMARK_UPDATE_ATTEMPTS};
use crate::store::WidgetStore;
use crate::widget::{
    IdGenerator, UuidGenerator, Widget, WidgetAreaFilter, WidgetId, WidgetRequest,
};

/// Enforces Z-index uniqueness over a [`WidgetStore`] and answers queries.
///
/// The service is `Send + Sync` and meant to be shared behind an `Arc`.
pub struct WidgetService {
    store: Arc<dyn WidgetStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    highest_z: Watermark,
    ordering: RwLock<()>,
}

impl WidgetService {
    /// Creates a service over `store` using the system clock and random ids.
    pub fn new(store: Arc<dyn WidgetStore>) -> Self {
        Self::with_environment(store, Arc::new(SystemClock), Arc::new(UuidGenerator))
    }

    /// Creates a service with explicit time and id sources.
    pub fn with_environment(
        store: Arc<dyn WidgetStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            store,
            clock,
            ids,
            highest_z: Watermark::new(INITIAL_HIGHEST_Z, WATERMARK_UPDATE_ATTEMPTS),
            ordering: RwLock::new(()),
        }
    }

    /// Creates a widget from `request` and returns it as stored.
    ///
    /// Without a `z` the widget goes to the foreground, above every Z
    /// assigned so far. With a `z` that is already taken, the occupant and
    /// every widget in the contiguous run above it move up by one first.
    ///
    /// # Errors
    /// [`WidgetError::ZIndexExhausted`] if either step would overflow `i64`.
    /// Nothing is written in that case.
    pub fn add(&self, request: WidgetRequest) -> Result<Widget> {
        let _ordering = self.ordering.write();

        let z = match request.z {
            None => self.highest_z.next().ok_or(WidgetError::ZIndexExhausted {
                z: self.highest_z.get(),
            })?,
            Some(z) => {
                self.shift_occupied_run(z)?;
                z
            }
        };

        let widget = Widget::from_request(self.ids.next_id(), &request, z, self.clock.now());
        let stored = self.save_and_raise_watermark(widget);
        debug!(id = %stored.id, z = stored.z, explicit_z = request.z.is_some(), "added widget");
        Ok(stored)
    }

    /// Looks up a widget by id.
    ///
    /// # Errors
    /// [`WidgetError::NotFound`] if no widget has this id.
    pub fn get_by_id(&self, id: &WidgetId) -> Result<Widget> {
        trace!(%id, "get widget");
        self.store
            .find_by_id(id)
            .ok_or_else(|| WidgetError::NotFound { id: *id }.into())
    }

    /// Returns one page of widgets in ascending Z order.
    ///
    /// An absent or incomplete `filter` lists everything. A complete filter
    /// describing a line or a point matches nothing and the store is not
    /// consulted. Otherwise only widgets whose bounding box lies inside the
    /// filter area are listed.
    pub fn get_all(
        &self,
        page: usize,
        size: usize,
        filter: Option<&WidgetAreaFilter>,
    ) -> Vec<Widget> {
        let _ordering = self.ordering.read();

        match filter.and_then(WidgetAreaFilter::predicate) {
            None => self.store.find_all_ordered_by_z(page, size),
            Some(area) if area.is_line_or_point() => {
                trace!(?area, "degenerate area filter");
                Vec::new()
            }
            Some(area) => self.store.find_all_in_area_ordered_by_z(page, size, &area),
        }
    }

    /// Replaces the widget's geometry and Z, keeping its id.
    ///
    /// An absent `z` keeps the current one. Unlike [`add`](Self::add), no
    /// shift is performed: moving onto an occupied Z leaves both widgets
    /// sharing it.
    ///
    /// # Errors
    /// [`WidgetError::NotFound`] if no widget has this id.
    pub fn update_by_id(&self, id: &WidgetId, request: WidgetRequest) -> Result<Widget> {
        let _ordering = self.ordering.write();

        let current = self
            .store
            .find_by_id(id)
            .ok_or(WidgetError::NotFound { id: *id })?;
        let z = request.z.unwrap_or(current.z);

        let updated = Widget::from_request(current.id, &request, z, self.clock.now());
        let stored = self.save_and_raise_watermark(updated);
        debug!(%id, from_z = current.z, to_z = stored.z, "updated widget");
        Ok(stored)
    }

    /// Removes a widget. Other widgets keep their Z-indices.
    ///
    /// # Errors
    /// [`WidgetError::NotFound`] if no widget has this id.
    pub fn delete_by_id(&self, id: &WidgetId) -> Result<()> {
        let _ordering = self.ordering.write();

        if self.store.find_by_id(id).is_none() {
            return Err(WidgetError::NotFound { id: *id }.into());
        }
        self.store.delete_by_id(id);
        debug!(%id, "deleted widget");
        Ok(())
    }

    /// Current value of the highest-Z watermark.
    pub fn highest_z(&self) -> i64 {
        self.highest_z.get()
    }

    /// Number of stored widgets.
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Moves the run of widgets occupying `z, z+1, ...` up by one.
    ///
    /// Widgets are moved in ascending order, one save each. Widgets above
    /// the first free index are untouched.
    fn shift_occupied_run(&self, z: i64) -> Result<()> {
        let run = occupied_run(self.store.find_all_with_z_at_least(z), z);
        let Some(top) = run.last() else {
            return Ok(());
        };
        if top.z == i64::MAX {
            return Err(WidgetError::ZIndexExhausted { z: top.z }.into());
        }

        for widget in &run {
            let moved = widget.moved_to(widget.z + 1, self.clock.now());
            self.save_and_raise_watermark(moved);
        }
        debug!(requested_z = z, shifted = run.len(), "shifted occupied run");
        Ok(())
    }

    fn save_and_raise_watermark(&self, widget: Widget) -> Widget {
        let stored = self.store.save(widget);
        if let UpdateOutcome::Abandoned { attempts } = self.highest_z.raise_to(stored.z) {
            warn!(
                z = stored.z,
                attempts, "highest-Z watermark update abandoned under contention"
            );
        }
        stored
    }
}

impl std::fmt::Debug for WidgetService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetService")
            .field("clock", &self.clock)
            .field("ids", &self.ids)
            .field("highest_z", &self.highest_z)
            .field("count", &self.store.len())
            .finish()
    }
}

/// The prefix of `ascending` that occupies `z` and every index after it
/// without a gap.
///
/// Empty if nothing sits at exactly `z`. Widgets sharing an index (left
/// behind by an update) all belong to the run.
fn occupied_run(ascending: Vec<Widget>, z: i64) -> Vec<Widget> {
    if ascending.first().is_none_or(|w| w.z != z) {
        return Vec::new();
    }

    let mut top = z;
    ascending
        .into_iter()
        .take_while(|w| {
            let contiguous = w.z == top || Some(w.z) == top.checked_add(1);
            if contiguous {
                top = w.z;
            }
            contiguous
        })
        .collect()
}

//! Constants used throughout the widgets library.
//!
//! This module provides central definitions for pagination defaults and the
//! retry bound of the highest-Z watermark.

/// Page size used when a listing request does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page size the HTTP adapter accepts.
pub const MAX_PAGE_SIZE: usize = 500;

/// Number of compare-and-swap attempts before a watermark update is abandoned.
pub const WATERMARK_UPDATE_ATTEMPTS: usize = 3;

/// Starting value of the highest-Z watermark.
///
/// The first foreground widget therefore lands at `i64::MIN + 1`.
pub const INITIAL_HIGHEST_Z: i64 = i64::MIN;

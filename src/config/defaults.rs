// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.
//!
//! Bounds live next to the newtypes that enforce them; this module only
//! re-exports them so `settings.toml` defaults have one place to look.

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::viewer::page_size_bounds;

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Default page width in pixels.
pub const DEFAULT_PAGE_WIDTH: u32 = page_size_bounds::DEFAULT_WIDTH;

/// Default page height in pixels.
pub const DEFAULT_PAGE_HEIGHT: u32 = page_size_bounds::DEFAULT_HEIGHT;

/// Smallest accepted page dimension.
pub const MIN_PAGE_DIMENSION: u32 = page_size_bounds::MIN;

/// Largest accepted page dimension.
pub const MAX_PAGE_DIMENSION: u32 = page_size_bounds::MAX;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of lifecycle events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

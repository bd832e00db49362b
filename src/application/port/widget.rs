// SPDX-License-Identifier: MPL-2.0
//! Page-flip widget port definition.
//!
//! This module defines the [`FlipWidget`] trait: the three-operation
//! capability set the viewer lifecycle is polymorphic over. The flip
//! animation itself lives behind this trait and is opaque to the viewer.
//!
//! # Design Notes
//!
//! - The widget is **stateful** - each construction returns an owned instance
//! - The mount surface and instance types are chosen by the adapter
//! - Methods are synchronous; an adapter with asynchronous internals must
//!   finish `destroy` before returning
//! - Uses domain types only (`FlipConfig`, `PageNode`)

use crate::domain::page::PageNode;
use crate::domain::viewer::FlipConfig;
use std::fmt;

// =============================================================================
// WidgetError
// =============================================================================

/// Errors reported by a widget adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// The surface handle does not point at anything drawable.
    SurfaceUnavailable,

    /// The widget rejected the call.
    Rejected(String),

    /// The adapter failed to read or write its backing storage.
    Io(String),

    /// The widget does not provide this capability.
    Unsupported,
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::SurfaceUnavailable => write!(f, "Surface is unavailable"),
            WidgetError::Rejected(msg) => write!(f, "Widget rejected the call: {msg}"),
            WidgetError::Io(msg) => write!(f, "I/O error: {msg}"),
            WidgetError::Unsupported => write!(f, "Operation not supported by widget"),
        }
    }
}

impl std::error::Error for WidgetError {}

impl From<std::io::Error> for WidgetError {
    fn from(err: std::io::Error) -> Self {
        WidgetError::Io(err.to_string())
    }
}

// =============================================================================
// FlipWidget Trait
// =============================================================================

/// Port for a page-flip presentation widget.
///
/// # Lifecycle
///
/// 1. `construct()` builds one instance against a mount surface
/// 2. `load_batch()` receives the full ordered page set in one call
/// 3. `destroy()` releases the instance
///
/// The viewer never holds more than one instance of a widget at a time and
/// always destroys the previous one before constructing the next.
///
/// # Example
///
/// ```ignore
/// use flipbook::application::port::FlipWidget;
/// use flipbook::domain::page::{PageNode, PageSet};
/// use flipbook::domain::viewer::FlipConfig;
///
/// fn show<W: FlipWidget>(widget: &mut W, surface: &W::Surface, pages: &PageSet) {
///     let mut instance = widget.construct(surface, &FlipConfig::default()).unwrap();
///     widget.load_batch(&mut instance, &PageNode::from_pages(pages)).unwrap();
///     let _ = widget.destroy(instance);
/// }
/// ```
pub trait FlipWidget {
    /// Handle to the drawable surface the widget renders into.
    ///
    /// The host owns the surface; the viewer only keeps a cloned handle.
    /// Equality decides whether a re-attach moved the viewer.
    type Surface: Clone + PartialEq;

    /// One live rendering of the widget.
    type Instance;

    /// Builds an instance bound to `surface`.
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError`] if the widget cannot be built on this surface.
    fn construct(
        &mut self,
        surface: &Self::Surface,
        config: &FlipConfig,
    ) -> Result<Self::Instance, WidgetError>;

    /// Loads the ordered page containers into an instance.
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError`] if the pages cannot be loaded.
    fn load_batch(
        &mut self,
        instance: &mut Self::Instance,
        pages: &[PageNode],
    ) -> Result<(), WidgetError>;

    /// Destroys an instance.
    ///
    /// The default models a widget without teardown capability: the instance
    /// is dropped and [`WidgetError::Unsupported`] is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`WidgetError`] if the widget failed to clean up.
    fn destroy(&mut self, instance: Self::Instance) -> Result<(), WidgetError> {
        drop(instance);
        Err(WidgetError::Unsupported)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, so the viewer lifecycle stays
//! independent of any concrete widget.
//!
//! # Available Ports
//!
//! - [`widget`]: Page-flip widget construction, page loading and teardown

pub mod widget;

pub use widget::{FlipWidget, WidgetError};

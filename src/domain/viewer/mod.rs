// SPDX-License-Identifier: MPL-2.0
//! Viewer domain types.
//!
//! - [`FlipConfig`]: presentation parameters handed to the widget
//! - [`PageDimension`]: range-checked page edge length
//! - [`ShadowOpacity`], [`SizeMode`]: fixed presentation values

mod newtypes;

pub use newtypes::{page_size_bounds, FlipConfig, PageDimension, ShadowOpacity, SizeMode};

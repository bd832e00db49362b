// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`html`]: Renders the flipbook into a static HTML file (implements [`FlipWidget`])
//! - [`recording`]: In-memory widget that records every call (implements [`FlipWidget`])
//!
//! [`FlipWidget`]: crate::application::port::FlipWidget

pub mod html;
pub mod recording;

pub use html::{HtmlInstance, StaticHtmlWidget};
pub use recording::{
    CallLog, RecordedInstance, RecordingSurface, RecordingWidget, TeardownBehavior, WidgetCall,
};

// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports between the viewer and its adapters.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The viewer lifecycle is generic over the ports
//!
//! # Example
//!
//! ```ignore
//! use flipbook::application::port::FlipWidget;
//! use flipbook::viewer::ViewerLifecycle;
//!
//! // Infrastructure implements the port trait
//! struct CanvasWidget { /* ... */ }
//! impl FlipWidget for CanvasWidget { /* ... */ }
//!
//! let viewer = ViewerLifecycle::new(CanvasWidget { /* ... */ });
//! ```

pub mod port;

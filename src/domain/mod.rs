// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`error`]: Domain error types ([`ViewerError`](error::ViewerError))
//! - [`page`]: Page types ([`PageContent`](page::PageContent), [`PageSet`](page::PageSet),
//!   [`PageNode`](page::PageNode))
//! - [`viewer`]: Presentation parameters ([`FlipConfig`](viewer::FlipConfig),
//!   [`ShadowOpacity`](viewer::ShadowOpacity))

pub mod diagnostics;
pub mod error;
pub mod page;
pub mod viewer;

// SPDX-License-Identifier: MPL-2.0
//! Page domain types.
//!
//! A flipbook is an ordered set of opaque markup strings. This module provides:
//! - [`PageContent`]: one page of markup
//! - [`PageSet`]: the ordered, shared page sequence with an identity
//! - [`PageNode`]: the page container handed to the presentation widget

mod node;
mod set;

pub use node::{PageNode, PAGE_CLASS_NAME};
pub use set::{PageContent, PageSet};

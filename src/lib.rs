// SPDX-License-Identifier: MPL-2.0
//! `flipbook` binds an ordered set of page markup strings to a page-flip
//! presentation widget.
//!
//! The [`viewer::ViewerLifecycle`] constructs one widget instance on a mount
//! surface, loads every page in a single batch, and releases the instance
//! before each rebuild and on detach. Widgets plug in through the
//! [`application::port::FlipWidget`] trait.

#![doc(html_root_url = "https://docs.rs/flipbook/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod viewer;

#[cfg(test)]
mod test_utils;

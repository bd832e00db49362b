// SPDX-License-Identifier: MPL-2.0
//! Viewer lifecycle management.
//!
//! [`ViewerLifecycle`] is the only stateful component: it is driven either
//! directly through [`ViewerLifecycle::mount`], [`ViewerLifecycle::unmount`]
//! and [`ViewerLifecycle::bind`], or through host notifications with
//! [`ViewerLifecycle::handle`].

mod lifecycle;

pub use lifecycle::{Effect, LifecycleStats, Message, MountOutcome, ViewerLifecycle};

// SPDX-License-Identifier: MPL-2.0
//! Diagnostics domain types.
//!
//! - [`BufferCapacity`]: Capacity of the lifecycle event log

mod newtypes;

pub use newtypes::{buffer_capacity_bounds, BufferCapacity};

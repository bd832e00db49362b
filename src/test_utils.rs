// SPDX-License-Identifier: MPL-2.0
//! Test helpers shared by unit tests.
//!
//! Float assertions come from the `approx` crate.

pub use approx::assert_abs_diff_eq;

/// Epsilon for f32 comparisons of presentation values.
pub const F32_EPSILON: f32 = 1e-6;

// SPDX-License-Identifier: MPL-2.0
//! Viewer presentation newtypes.
//!
//! Page dimensions are clamped to a valid range; the other presentation
//! parameters are fixed.

// =============================================================================
// Page Size Bounds
// =============================================================================

/// Page dimension bounds, in CSS pixels.
pub mod page_size_bounds {
    /// Smallest page edge.
    pub const MIN: u32 = 50;
    /// Largest page edge.
    pub const MAX: u32 = 4000;
    /// Default page width.
    pub const DEFAULT_WIDTH: u32 = 550;
    /// Default page height.
    pub const DEFAULT_HEIGHT: u32 = 733;
}

// =============================================================================
// PageDimension
// =============================================================================

/// One page edge length in pixels, guaranteed to be within 50–4000.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDimension(u32);

impl PageDimension {
    /// Creates a page dimension, clamping the value to the valid range.
    #[must_use]
    pub fn new(pixels: u32) -> Self {
        Self(pixels.clamp(page_size_bounds::MIN, page_size_bounds::MAX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Default page width.
    #[must_use]
    pub fn default_width() -> Self {
        Self(page_size_bounds::DEFAULT_WIDTH)
    }

    /// Default page height.
    #[must_use]
    pub fn default_height() -> Self {
        Self(page_size_bounds::DEFAULT_HEIGHT)
    }
}

// =============================================================================
// ShadowOpacity
// =============================================================================

/// Maximum shadow opacity drawn during a page flip.
///
/// The viewer always uses 0.2; the type only exists so the value cannot be
/// confused with other floats in the widget record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowOpacity(f32);

impl ShadowOpacity {
    /// Opacity used for every flip.
    pub const DEFAULT: f32 = 0.2;

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ShadowOpacity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

// =============================================================================
// SizeMode
// =============================================================================

/// How the widget sizes pages relative to its mount surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    /// Pages stretch to fill the surface, keeping the configured ratio.
    #[default]
    Stretch,
}

impl SizeMode {
    /// Returns the identifier used by the widget configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SizeMode::Stretch => "stretch",
        }
    }
}

// =============================================================================
// FlipConfig
// =============================================================================

/// Presentation parameters passed to the widget at construction.
///
/// Only the page size varies between viewers. Sizing mode, cover display
/// and shadow opacity are the same for every instance and have no setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipConfig {
    /// Page width.
    pub width: PageDimension,
    /// Page height.
    pub height: PageDimension,
    size_mode: SizeMode,
    show_cover: bool,
    max_shadow_opacity: ShadowOpacity,
}

impl FlipConfig {
    /// Record for the given page size.
    #[must_use]
    pub fn new(width: PageDimension, height: PageDimension) -> Self {
        Self {
            width,
            height,
            size_mode: SizeMode::Stretch,
            show_cover: true,
            max_shadow_opacity: ShadowOpacity::default(),
        }
    }

    /// Always [`SizeMode::Stretch`].
    #[must_use]
    pub fn size_mode(&self) -> SizeMode {
        self.size_mode
    }

    /// Always `true`: the first page is shown alone as a cover.
    #[must_use]
    pub fn show_cover(&self) -> bool {
        self.show_cover
    }

    /// Always 0.2.
    #[must_use]
    pub fn max_shadow_opacity(&self) -> ShadowOpacity {
        self.max_shadow_opacity
    }
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self::new(PageDimension::default_width(), PageDimension::default_height())
    }
}

// =============================================================================
// Tests
// =============================================================================

// SPDX-License-Identifier: MPL-2.0
//! Static HTML widget adapter.
//!
//! Renders the flipbook as a single `flipbook.html` file inside the mount
//! directory. The page markup is written verbatim inside one container per
//! page; the flip parameters are embedded as JSON for a client-side
//! page-flip script to pick up.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::application::port::{FlipWidget, WidgetError};
use crate::domain::page::PageNode;
use crate::domain::viewer::FlipConfig;

/// File name written into the mount directory.
pub const OUTPUT_FILE: &str = "flipbook.html";

/// A rendered flipbook file.
#[derive(Debug)]
pub struct HtmlInstance {
    path: PathBuf,
    config: FlipConfig,
    page_count: usize,
}

impl HtmlInstance {
    /// Path of the rendered file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of pages written by the last batch.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }
}

/// Widget that renders into a directory.
#[derive(Debug, Default)]
pub struct StaticHtmlWidget {
    keep_output: bool,
}

impl StaticHtmlWidget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaves the rendered file on disk when an instance is destroyed.
    #[must_use]
    pub fn keep_output(mut self, keep: bool) -> Self {
        self.keep_output = keep;
        self
    }
}

impl FlipWidget for StaticHtmlWidget {
    type Surface = PathBuf;
    type Instance = HtmlInstance;

    fn construct(
        &mut self,
        surface: &PathBuf,
        config: &FlipConfig,
    ) -> Result<HtmlInstance, WidgetError> {
        if !surface.is_dir() {
            return Err(WidgetError::SurfaceUnavailable);
        }

        let instance = HtmlInstance {
            path: surface.join(OUTPUT_FILE),
            config: *config,
            page_count: 0,
        };
        fs::write(&instance.path, render_document(&instance.config, &[]))?;
        Ok(instance)
    }

    fn load_batch(
        &mut self,
        instance: &mut HtmlInstance,
        pages: &[PageNode],
    ) -> Result<(), WidgetError> {
        fs::write(&instance.path, render_document(&instance.config, pages))?;
        instance.page_count = pages.len();
        Ok(())
    }

    fn destroy(&mut self, instance: HtmlInstance) -> Result<(), WidgetError> {
        if self.keep_output {
            return Ok(());
        }
        fs::remove_file(&instance.path)?;
        Ok(())
    }
}

/// Renders the complete document for one batch of pages.
#[must_use]
pub fn render_document(config: &FlipConfig, pages: &[PageNode]) -> String {
    let flip_config = json!({
        "width": config.width.value(),
        "height": config.height.value(),
        "size": config.size_mode().as_str(),
        "showCover": config.show_cover(),
        "maxShadowOpacity": round_opacity(config.max_shadow_opacity().value()),
    });

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>Flipbook</title>\n</head>\n<body>\n");
    let _ = writeln!(
        html,
        "<div class=\"flipbook\" data-flip-config=\"{}\">",
        escape_attribute(&flip_config.to_string())
    );

    for node in pages {
        let cover = if config.show_cover() && node.index() == 0 {
            " page-cover"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<div class=\"{}{cover}\" data-page-index=\"{}\">{}</div>",
            node.class_name(),
            node.index(),
            node.inner_html()
        );
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

// f32 -> f64 widening would print 0.2 as 0.20000000298023224.
fn round_opacity(value: f32) -> f64 {
    (f64::from(value) * 1000.0).round() / 1000.0
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// SPDX-License-Identifier: MPL-2.0
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use flipbook::config;
use flipbook::diagnostics::{generate_default_filename, DiagnosticsCollector};
use flipbook::domain::page::{PageContent, PageSet};
use flipbook::error::{Error, Result};
use flipbook::infrastructure::html::OUTPUT_FILE;
use flipbook::infrastructure::StaticHtmlWidget;
use flipbook::viewer::{Effect, Message, ViewerLifecycle};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: flipbook [OPTIONS] PAGE_FILE...

Options:
  --config-dir DIR     Read settings.toml from DIR
  --out DIR            Mount directory for flipbook.html (default: .)
  --diagnostics FILE   Export lifecycle diagnostics as JSON; a directory
                       gets a timestamped file name
  --keep               Keep flipbook.html after the viewer detaches
  -h, --help           Print this help
";

struct Flags {
    config_dir: Option<PathBuf>,
    out_dir: PathBuf,
    diagnostics: Option<PathBuf>,
    keep: bool,
    page_files: Vec<PathBuf>,
}

fn parse_flags() -> std::result::Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_os_str("--config-dir", parse_path)?,
        out_dir: args
            .opt_value_from_os_str("--out", parse_path)?
            .unwrap_or_else(|| PathBuf::from(".")),
        diagnostics: args.opt_value_from_os_str("--diagnostics", parse_path)?,
        keep: args.contains("--keep"),
        page_files: args.finish().into_iter().map(PathBuf::from).collect(),
    };
    Ok(Some(flags))
}

fn parse_path(value: &std::ffi::OsStr) -> std::result::Result<PathBuf, std::convert::Infallible> {
    Ok(PathBuf::from(value))
}

fn read_pages(files: &[PathBuf]) -> Result<PageSet> {
    files
        .iter()
        .map(|path| {
            fs::read_to_string(path)
                .map(PageContent::new)
                .map_err(|err| Error::Io(format!("{}: {err}", path.display())))
        })
        .collect::<Result<Vec<_>>>()
        .map(PageSet::new)
}

/// Indices of pages with no visible markup.
fn blank_pages(pages: &PageSet) -> impl Iterator<Item = usize> + '_ {
    pages
        .iter()
        .enumerate()
        .filter_map(|(index, page)| page.is_blank().then_some(index))
}

/// What the run left behind, checked after the viewer detached.
fn render_summary(page_count: usize, output: &Path) -> String {
    if output.is_file() {
        format!("Rendered {page_count} page(s) to {}", output.display())
    } else {
        format!(
            "Rendered {page_count} page(s); {} was removed on detach (use --keep to retain it)",
            output.display()
        )
    }
}

fn run(flags: Flags) -> Result<()> {
    let (settings, warning) = config::load_with_override(flags.config_dir);
    if let Some(warning) = warning {
        warn!("{warning}");
    }

    let pages = read_pages(&flags.page_files)?;
    for index in blank_pages(&pages) {
        warn!(file = %flags.page_files[index].display(), "page file is blank");
    }
    let mut collector = DiagnosticsCollector::new(settings.buffer_capacity());
    let mut viewer = ViewerLifecycle::new(StaticHtmlWidget::new().keep_output(flags.keep))
        .with_config(settings.flip_config())
        .with_diagnostics(collector.handle());

    let surface = flags.out_dir.is_dir().then(|| flags.out_dir.clone());
    if surface.is_none() {
        warn!(dir = %flags.out_dir.display(), "output directory does not exist");
    }

    viewer.handle(Message::PagesChanged(pages));
    let effect = viewer.handle(Message::Attached { surface });

    let (rendered, failure) = match effect {
        Effect::Mounted { page_count } | Effect::Rebuilt { page_count } => {
            info!(page_count, "flipbook rendered");
            (Some(page_count), None)
        }
        Effect::SkippedMissingSurface => {
            println!("No mount surface; nothing rendered");
            (None, None)
        }
        Effect::Failed(err) => (None, Some(err)),
        Effect::None | Effect::Unmounted => (None, None),
    };

    viewer.handle(Message::Detached);
    let stats = viewer.stats();
    info!(
        constructions = stats.constructions,
        teardowns = stats.teardowns,
        teardown_failures = stats.teardown_failures,
        "viewer detached"
    );
    drop(viewer);

    if let Some(page_count) = rendered {
        println!(
            "{}",
            render_summary(page_count, &flags.out_dir.join(OUTPUT_FILE))
        );
    }

    if let Some(target) = flags.diagnostics {
        collector.process_pending();
        let path = if target.is_dir() {
            target.join(generate_default_filename())
        } else {
            target
        };
        let written = collector.export_to_file(&path)?;
        println!("Diagnostics written to {}", written.display());
    }

    match failure {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) if !flags.page_files.is_empty() => flags,
        Ok(_) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("flipbook: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("flipbook: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn blank_page_files_are_reported_by_index() {
        let dir = tempdir().expect("failed to create temp dir");
        let files: Vec<PathBuf> = [
            ("cover.html", "<p>Cover</p>"),
            ("empty.html", " \n\t"),
            ("p1.html", "<p>1</p>"),
        ]
        .iter()
        .map(|(name, markup)| {
            let path = dir.path().join(name);
            fs::write(&path, markup).expect("failed to write page");
            path
        })
        .collect();

        let pages = read_pages(&files).expect("pages read");

        assert_eq!(pages.len(), 3);
        assert_eq!(blank_pages(&pages).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn unreadable_page_file_names_the_path() {
        let dir = tempdir().expect("failed to create temp dir");
        let missing = dir.path().join("missing.html");

        let err = read_pages(&[missing]).expect_err("missing file");
        assert!(err.to_string().contains("missing.html"));
    }

    #[test]
    fn summary_names_the_snapshot_only_when_it_survived_detach() {
        let dir = tempdir().expect("failed to create temp dir");
        let output = dir.path().join(OUTPUT_FILE);

        let removed = render_summary(2, &output);
        assert!(removed.contains("removed on detach"));
        assert!(removed.contains("--keep"));

        fs::write(&output, "<html></html>").expect("failed to write snapshot");
        let kept = render_summary(2, &output);
        assert_eq!(kept, format!("Rendered 2 page(s) to {}", output.display()));
    }

    #[test]
    fn detached_viewer_without_keep_leaves_no_snapshot() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut viewer = ViewerLifecycle::new(StaticHtmlWidget::new());

        viewer.handle(Message::PagesChanged(PageSet::from_markup(["<p>a</p>"])));
        viewer.handle(Message::Attached {
            surface: Some(dir.path().to_path_buf()),
        });
        viewer.handle(Message::Detached);

        let summary = render_summary(1, &dir.path().join(OUTPUT_FILE));
        assert!(summary.contains("removed on detach"));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Viewer lifecycle - binds a page set to one page-flip widget instance.
//!
//! The lifecycle owns at most one widget instance at a time. It builds the
//! instance when the host attaches a surface or hands over a new page set,
//! and releases it before every rebuild, on detach, and when dropped.
//!
//! ## Rebind protocol
//!
//! A rebuild is triggered by a change of page set *identity*, not content:
//! a freshly built [`PageSet`] with equal pages still rebuilds. The old
//! instance is always released before the new one is constructed, inside a
//! single `&mut self` call, so the host never sees a half-built state.
//!
//! ## Failure policy
//!
//! - No surface: mounting is skipped silently; the next lifecycle call retries.
//! - Construction or load failure: no instance is kept and nothing is retried
//!   until the page set identity or the surface changes.
//! - Teardown failure (error, panic, or no teardown capability): swallowed.
//!   The handle is forgotten either way.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::application::port::{FlipWidget, WidgetError};
use crate::diagnostics::{DiagnosticsHandle, LifecycleEvent};
use crate::domain::error::ViewerError;
use crate::domain::page::{PageNode, PageSet};
use crate::domain::viewer::FlipConfig;

/// Host lifecycle notifications.
#[derive(Debug, Clone)]
pub enum Message<S> {
    /// The host attached (or re-attached) its surface. `None` means the
    /// surface exists in the host but is not drawable yet.
    Attached {
        /// Handle to the mount surface.
        surface: Option<S>,
    },
    /// The host produced a page set. Only an identity change rebuilds.
    PagesChanged(PageSet),
    /// The host is detaching the viewer.
    Detached,
}

/// Effects produced by lifecycle messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// A first instance was built and loaded.
    Mounted {
        /// Number of pages loaded.
        page_count: usize,
    },
    /// The previous instance was released and a new one built.
    Rebuilt {
        /// Number of pages loaded into the new instance.
        page_count: usize,
    },
    /// No surface was available; no instance exists.
    SkippedMissingSurface,
    /// Construction or loading failed; no instance exists.
    Failed(ViewerError),
    /// The live instance was released.
    Unmounted,
}

/// Result of a single mount attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum MountOutcome {
    /// An instance is live with `page_count` pages.
    Mounted {
        /// Number of pages loaded.
        page_count: usize,
    },
    /// The page set identity matched the current binding; nothing was done.
    Unchanged,
    /// No surface was available.
    SkippedMissingSurface,
    /// Construction or loading failed.
    Failed(ViewerError),
}

/// Counters over the lifetime of one viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifecycleStats {
    /// Successful `construct` calls.
    pub constructions: usize,
    /// Calls to `unmount`, including no-op calls.
    pub unmount_calls: usize,
    /// Instances handed to `destroy`.
    pub teardowns: usize,
    /// Teardowns that returned an error or panicked.
    pub teardown_failures: usize,
    /// Mounts skipped for lack of a surface.
    pub skipped_mounts: usize,
    /// Mounts that failed in construction or loading.
    pub failed_mounts: usize,
}

struct ActiveInstance<I> {
    instance: I,
    pages: PageSet,
}

/// Owns the binding between a page set and one widget instance.
pub struct ViewerLifecycle<W: FlipWidget> {
    widget: W,
    config: FlipConfig,
    surface: Option<W::Surface>,
    pages: Option<PageSet>,
    /// Page set of the last construction attempt, live or failed.
    attempted: Option<PageSet>,
    active: Option<ActiveInstance<W::Instance>>,
    stats: LifecycleStats,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<W: FlipWidget> ViewerLifecycle<W> {
    /// Creates an unmounted viewer with the default flip parameters.
    #[must_use]
    pub fn new(widget: W) -> Self {
        Self {
            widget,
            config: FlipConfig::default(),
            surface: None,
            pages: None,
            attempted: None,
            active: None,
            stats: LifecycleStats::default(),
            diagnostics: None,
        }
    }

    /// Sets the flip parameters used for every instance.
    #[must_use]
    pub fn with_config(mut self, config: FlipConfig) -> Self {
        self.config = config;
        self
    }

    /// Routes lifecycle events to a diagnostics collector.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    // ═══════════════════════════════════════════════════════════════════════
    // HOST HOOKS
    // ═══════════════════════════════════════════════════════════════════════

    /// Handles a host lifecycle notification.
    pub fn handle(&mut self, msg: Message<W::Surface>) -> Effect {
        match msg {
            Message::Attached { surface } => {
                if self.surface != surface {
                    // Instances are bound to the surface they were built on.
                    self.attempted = None;
                    self.surface = surface;
                }
                match self.pages.clone() {
                    Some(pages) => self.rebind(&pages),
                    None => Effect::None,
                }
            }
            Message::PagesChanged(pages) => {
                self.pages = Some(pages.clone());
                self.rebind(&pages)
            }
            Message::Detached => {
                let was_mounted = self.is_mounted();
                self.unmount();
                self.surface = None;
                if was_mounted {
                    Effect::Unmounted
                } else {
                    Effect::None
                }
            }
        }
    }

    fn rebind(&mut self, pages: &PageSet) -> Effect {
        let was_mounted = self.is_mounted();
        let surface = self.surface.clone();
        match self.bind(pages, surface.as_ref()) {
            MountOutcome::Unchanged => Effect::None,
            MountOutcome::Mounted { page_count } if was_mounted => Effect::Rebuilt { page_count },
            MountOutcome::Mounted { page_count } => Effect::Mounted { page_count },
            MountOutcome::SkippedMissingSurface if was_mounted => Effect::Unmounted,
            MountOutcome::SkippedMissingSurface => Effect::SkippedMissingSurface,
            MountOutcome::Failed(err) => Effect::Failed(err),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // OPERATIONS
    // ═══════════════════════════════════════════════════════════════════════

    /// Binds `pages`, rebuilding the widget if the page set identity changed.
    ///
    /// Issues exactly one [`unmount`](Self::unmount) before the construction.
    pub fn bind(&mut self, pages: &PageSet, surface: Option<&W::Surface>) -> MountOutcome {
        if self
            .attempted
            .as_ref()
            .is_some_and(|current| current.same_identity(pages))
        {
            return MountOutcome::Unchanged;
        }

        let was_mounted = self.is_mounted();
        self.unmount();
        self.build(pages, surface, was_mounted)
    }

    /// Constructs one instance on `surface` and loads every page in one batch.
    ///
    /// Without a surface this is a no-op. A live instance is released first.
    pub fn mount(&mut self, pages: &PageSet, surface: Option<&W::Surface>) -> MountOutcome {
        let replacing = surface.is_some() && self.is_mounted();
        self.build(pages, surface, replacing)
    }

    /// Records [`LifecycleEvent::Rebuilt`] instead of `Mounted` when
    /// `replacing` an instance.
    fn build(
        &mut self,
        pages: &PageSet,
        surface: Option<&W::Surface>,
        replacing: bool,
    ) -> MountOutcome {
        let Some(surface) = surface else {
            self.stats.skipped_mounts += 1;
            debug!(pages = pages.len(), "mount skipped: surface not available");
            self.record(LifecycleEvent::MountSkipped);
            return MountOutcome::SkippedMissingSurface;
        };

        if self.active.is_some() {
            self.unmount();
        }
        self.attempted = Some(pages.clone());

        let mut instance = match self.widget.construct(surface, &self.config) {
            Ok(instance) => instance,
            Err(err) => return self.fail(ViewerError::ConstructionFailed(err.to_string())),
        };
        self.stats.constructions += 1;

        let nodes = PageNode::from_pages(pages);
        if let Err(err) = self.widget.load_batch(&mut instance, &nodes) {
            self.release(instance);
            return self.fail(ViewerError::LoadFailed(err.to_string()));
        }

        let page_count = nodes.len();
        if replacing {
            debug!(page_count, "viewer rebuilt");
            self.record(LifecycleEvent::Rebuilt { page_count });
        } else {
            debug!(page_count, "viewer mounted");
            self.record(LifecycleEvent::Mounted { page_count });
        }
        self.active = Some(ActiveInstance {
            instance,
            pages: pages.clone(),
        });
        MountOutcome::Mounted { page_count }
    }

    /// Releases the live instance, if any. Never fails.
    pub fn unmount(&mut self) {
        self.stats.unmount_calls += 1;
        self.attempted = None;

        if let Some(active) = self.active.take() {
            self.release(active.instance);
            debug!(pages = active.pages.len(), "viewer unmounted");
            self.record(LifecycleEvent::Unmounted);
        }
    }

    fn release(&mut self, instance: W::Instance) {
        self.stats.teardowns += 1;

        let widget = &mut self.widget;
        let result = panic::catch_unwind(AssertUnwindSafe(|| widget.destroy(instance)));

        let failure = match result {
            Ok(Ok(())) => return,
            Ok(Err(WidgetError::Unsupported)) => {
                debug!("widget has no teardown capability, handle dropped");
                return;
            }
            Ok(Err(err)) => ViewerError::TeardownFailed(err.to_string()),
            Err(payload) => ViewerError::TeardownFailed(panic_message(payload.as_ref())),
        };

        self.stats.teardown_failures += 1;
        warn!(error = %failure, "ignoring widget teardown failure");
        if let Some(handle) = &self.diagnostics {
            handle.log_warning(failure.to_string());
        }
        self.record(LifecycleEvent::TeardownFailed {
            code: failure.code().to_string(),
        });
    }

    fn fail(&mut self, err: ViewerError) -> MountOutcome {
        self.stats.failed_mounts += 1;
        warn!(error = %err, "viewer mount failed");
        if let Some(handle) = &self.diagnostics {
            handle.log_error(err.to_string());
        }
        self.record(LifecycleEvent::MountFailed {
            code: err.code().to_string(),
        });
        MountOutcome::Failed(err)
    }

    fn record(&self, event: LifecycleEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log_lifecycle(event);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Returns `true` while an instance is live.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.active.is_some()
    }

    /// Page set bound to the live instance.
    #[must_use]
    pub fn current_pages(&self) -> Option<&PageSet> {
        self.active.as_ref().map(|active| &active.pages)
    }

    /// The live instance.
    #[must_use]
    pub fn instance(&self) -> Option<&W::Instance> {
        self.active.as_ref().map(|active| &active.instance)
    }

    #[must_use]
    pub fn surface(&self) -> Option<&W::Surface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &FlipConfig {
        &self.config
    }

    #[must_use]
    pub fn stats(&self) -> LifecycleStats {
        self.stats
    }

    #[must_use]
    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }
}

impl<W: FlipWidget> Drop for ViewerLifecycle<W> {
    fn drop(&mut self) {
        if self.active.is_some() {
            self.unmount();
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "widget panicked during teardown".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{BufferCapacity, DiagnosticEventKind, DiagnosticsCollector};
    use crate::infrastructure::recording::{
        CallLog, RecordedInstance, RecordingSurface, RecordingWidget, TeardownBehavior, WidgetCall,
    };

    fn viewer() -> (ViewerLifecycle<RecordingWidget>, CallLog) {
        let log = CallLog::new();
        (ViewerLifecycle::new(RecordingWidget::new(log.clone())), log)
    }

    fn surface() -> RecordingSurface {
        RecordingSurface::new("container")
    }

    fn loaded_markup(instance: &RecordedInstance) -> Vec<&str> {
        instance.pages.iter().map(PageNode::inner_html).collect()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // MOUNT
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn mount_loads_pages_in_order_in_one_batch() {
        let (mut viewer, log) = viewer();
        let pages = PageSet::from_markup(["<p>Cover</p>", "<p>Page 1</p>", "<p>Page 2</p>"]);

        let outcome = viewer.mount(&pages, Some(&surface()));

        assert_eq!(outcome, MountOutcome::Mounted { page_count: 3 });
        let instance = viewer.instance().expect("instance is live");
        assert_eq!(
            loaded_markup(instance),
            vec!["<p>Cover</p>", "<p>Page 1</p>", "<p>Page 2</p>"]
        );
        let batches = log
            .calls()
            .iter()
            .filter(|call| matches!(call, WidgetCall::LoadBatch { .. }))
            .count();
        assert_eq!(batches, 1);
    }

    #[test]
    fn mount_passes_fixed_config() {
        let (mut viewer, _log) = viewer();
        viewer.mount(&PageSet::from_markup(["a"]), Some(&surface()));

        let instance = viewer.instance().unwrap();
        assert_eq!(instance.config, FlipConfig::default());
        assert_eq!(instance.surface, "container");
    }

    #[test]
    fn mount_without_surface_is_a_silent_no_op() {
        let (mut viewer, log) = viewer();

        let outcome = viewer.mount(&PageSet::from_markup(["a"]), None);

        assert_eq!(outcome, MountOutcome::SkippedMissingSurface);
        assert!(!viewer.is_mounted());
        assert!(log.calls().is_empty());
        assert_eq!(viewer.stats().skipped_mounts, 1);
    }

    #[test]
    fn mount_with_empty_page_set_still_builds_instance() {
        let (mut viewer, log) = viewer();

        let outcome = viewer.mount(&PageSet::default(), Some(&surface()));

        assert_eq!(outcome, MountOutcome::Mounted { page_count: 0 });
        assert_eq!(log.last_batch(), Some(Vec::new()));
    }

    #[test]
    fn mount_over_live_instance_releases_it_first() {
        let (mut viewer, log) = viewer();
        viewer.mount(&PageSet::from_markup(["a"]), Some(&surface()));
        viewer.mount(&PageSet::from_markup(["b"]), Some(&surface()));

        assert_eq!(log.constructions(), 2);
        assert_eq!(log.destroys(), 1);
        assert_eq!(viewer.instance().unwrap().id, 2);
    }

    #[test]
    fn construction_failure_leaves_no_instance_and_no_retry() {
        let (mut viewer, log) = viewer();
        viewer.widget_mut().set_fail_construct(true);
        let pages = PageSet::from_markup(["a"]);

        let outcome = viewer.bind(&pages, Some(&surface()));
        assert!(matches!(
            outcome,
            MountOutcome::Failed(ViewerError::ConstructionFailed(_))
        ));
        assert!(!viewer.is_mounted());

        viewer.widget_mut().set_fail_construct(false);
        assert_eq!(
            viewer.bind(&pages.clone(), Some(&surface())),
            MountOutcome::Unchanged
        );
        assert_eq!(log.constructions(), 0);

        let fresh = PageSet::from_markup(["a"]);
        assert_eq!(
            viewer.bind(&fresh, Some(&surface())),
            MountOutcome::Mounted { page_count: 1 }
        );
    }

    #[test]
    fn load_failure_destroys_the_half_built_instance() {
        let (mut viewer, log) = viewer();
        viewer.widget_mut().set_fail_load(true);

        let outcome = viewer.mount(&PageSet::from_markup(["a"]), Some(&surface()));

        assert!(matches!(
            outcome,
            MountOutcome::Failed(ViewerError::LoadFailed(_))
        ));
        assert!(!viewer.is_mounted());
        assert_eq!(log.constructions(), 1);
        assert_eq!(log.destroys(), 1);
        assert_eq!(viewer.stats().failed_mounts, 1);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // UNMOUNT
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn unmount_without_instance_is_a_no_op() {
        let (mut viewer, log) = viewer();

        viewer.unmount();
        viewer.unmount();

        assert!(log.calls().is_empty());
        assert_eq!(viewer.stats().unmount_calls, 2);
        assert_eq!(viewer.stats().teardowns, 0);
    }

    #[test]
    fn unmount_destroys_live_instance_once() {
        let (mut viewer, log) = viewer();
        viewer.mount(&PageSet::from_markup(["a"]), Some(&surface()));

        viewer.unmount();
        viewer.unmount();

        assert_eq!(log.destroys(), 1);
        assert!(!viewer.is_mounted());
        assert!(viewer.current_pages().is_none());
    }

    #[test]
    fn unmount_swallows_destroy_error() {
        let (mut viewer, _log) = viewer();
        viewer.widget_mut().set_teardown(TeardownBehavior::Fail);
        viewer.mount(&PageSet::from_markup(["a"]), Some(&surface()));

        viewer.unmount();

        assert!(!viewer.is_mounted());
        assert_eq!(viewer.stats().teardown_failures, 1);
    }

    #[test]
    fn unmount_contains_panicking_destroy() {
        let (mut viewer, log) = viewer();
        viewer.widget_mut().set_teardown(TeardownBehavior::Panic);
        viewer.mount(&PageSet::from_markup(["a"]), Some(&surface()));

        viewer.unmount();

        assert!(!viewer.is_mounted());
        assert_eq!(log.destroys(), 1);
        assert_eq!(viewer.stats().teardown_failures, 1);
    }

    #[test]
    fn unmount_tolerates_widget_without_teardown() {
        let (mut viewer, log) = viewer();
        viewer.widget_mut().set_teardown(TeardownBehavior::Unsupported);
        viewer.mount(&PageSet::from_markup(["a"]), Some(&surface()));

        viewer.unmount();

        assert!(!viewer.is_mounted());
        assert_eq!(log.destroys(), 0);
        assert_eq!(viewer.stats().teardowns, 1);
        assert_eq!(viewer.stats().teardown_failures, 0);
    }

    #[test]
    fn failed_teardown_does_not_block_next_construction() {
        let (mut viewer, log) = viewer();
        viewer.widget_mut().set_teardown(TeardownBehavior::Fail);
        viewer.bind(&PageSet::from_markup(["a"]), Some(&surface()));

        let outcome = viewer.bind(&PageSet::from_markup(["b", "c"]), Some(&surface()));

        assert_eq!(outcome, MountOutcome::Mounted { page_count: 2 });
        assert_eq!(log.constructions(), 2);
    }

    #[test]
    fn drop_releases_live_instance() {
        let (mut viewer, log) = viewer();
        viewer.mount(&PageSet::from_markup(["a"]), Some(&surface()));

        drop(viewer);

        assert_eq!(log.destroys(), 1);
    }

    #[test]
    fn drop_with_panicking_teardown_does_not_propagate() {
        let (mut viewer, log) = viewer();
        viewer.widget_mut().set_teardown(TeardownBehavior::Panic);
        viewer.mount(&PageSet::from_markup(["a"]), Some(&surface()));

        drop(viewer);

        assert_eq!(log.destroys(), 1);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // REBIND
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn same_identity_does_not_rebuild() {
        let (mut viewer, log) = viewer();
        let pages = PageSet::from_markup(["a", "b"]);

        viewer.bind(&pages, Some(&surface()));
        let outcome = viewer.bind(&pages.clone(), Some(&surface()));

        assert_eq!(outcome, MountOutcome::Unchanged);
        assert_eq!(log.constructions(), 1);
        assert_eq!(log.destroys(), 0);
    }

    #[test]
    fn equal_content_with_new_identity_rebuilds() {
        let (mut viewer, log) = viewer();

        viewer.bind(&PageSet::from_markup(["a", "b"]), Some(&surface()));
        viewer.bind(&PageSet::from_markup(["a", "b"]), Some(&surface()));

        assert_eq!(log.constructions(), 2);
        assert_eq!(log.destroys(), 1);
    }

    #[test]
    fn every_construction_is_preceded_by_one_more_unmount() {
        let (mut viewer, log) = viewer();

        for k in 1..=5 {
            let pages = PageSet::from_markup((0..k).map(|i| format!("<p>{i}</p>")));
            viewer.bind(&pages, Some(&surface()));

            let stats = viewer.stats();
            assert_eq!(stats.constructions, k);
            assert_eq!(stats.unmount_calls, k);
            assert_eq!(log.destroys(), k - 1);
        }
    }

    #[test]
    fn teardown_precedes_construction_on_rebind() {
        let (mut viewer, log) = viewer();
        viewer.bind(&PageSet::from_markup(["a"]), Some(&surface()));
        log.clear();

        viewer.bind(&PageSet::from_markup(["b"]), Some(&surface()));

        let calls = log.calls();
        assert!(matches!(calls[0], WidgetCall::Destroy { instance_id: 1 }));
        assert!(matches!(calls[1], WidgetCall::Construct { instance_id: 2, .. }));
        assert!(matches!(calls[2], WidgetCall::LoadBatch { instance_id: 2, .. }));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // HOST HOOKS
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn pages_before_surface_mount_on_attach() {
        let (mut viewer, _log) = viewer();

        let effect = viewer.handle(Message::PagesChanged(PageSet::from_markup(["a", "b"])));
        assert_eq!(effect, Effect::SkippedMissingSurface);

        let effect = viewer.handle(Message::Attached {
            surface: Some(surface()),
        });
        assert_eq!(effect, Effect::Mounted { page_count: 2 });
    }

    #[test]
    fn attach_without_drawable_surface_then_retry() {
        let (mut viewer, log) = viewer();
        viewer.handle(Message::PagesChanged(PageSet::from_markup(["a"])));

        let effect = viewer.handle(Message::Attached { surface: None });
        assert_eq!(effect, Effect::SkippedMissingSurface);
        assert_eq!(log.constructions(), 0);

        let effect = viewer.handle(Message::Attached {
            surface: Some(surface()),
        });
        assert_eq!(effect, Effect::Mounted { page_count: 1 });
    }

    #[test]
    fn pages_changed_rebuilds_and_detach_unmounts() {
        let (mut viewer, log) = viewer();
        viewer.handle(Message::Attached {
            surface: Some(surface()),
        });
        assert_eq!(
            viewer.handle(Message::PagesChanged(PageSet::from_markup(["a"]))),
            Effect::Mounted { page_count: 1 }
        );
        assert_eq!(
            viewer.handle(Message::PagesChanged(PageSet::from_markup(["a", "b"]))),
            Effect::Rebuilt { page_count: 2 }
        );

        assert_eq!(viewer.handle(Message::Detached), Effect::Unmounted);
        assert_eq!(viewer.handle(Message::Detached), Effect::None);
        assert_eq!(log.destroys(), 2);
        assert!(viewer.surface().is_none());
    }

    #[test]
    fn reattach_to_new_surface_rebuilds_same_pages() {
        let (mut viewer, log) = viewer();
        viewer.handle(Message::Attached {
            surface: Some(RecordingSurface::new("first")),
        });
        viewer.handle(Message::PagesChanged(PageSet::from_markup(["a"])));

        let effect = viewer.handle(Message::Attached {
            surface: Some(RecordingSurface::new("second")),
        });

        assert_eq!(effect, Effect::Rebuilt { page_count: 1 });
        assert_eq!(viewer.instance().unwrap().surface, "second");
        assert_eq!(log.destroys(), 1);
    }

    #[test]
    fn reattach_to_same_surface_keeps_instance() {
        let (mut viewer, log) = viewer();
        viewer.handle(Message::Attached {
            surface: Some(surface()),
        });
        viewer.handle(Message::PagesChanged(PageSet::from_markup(["a"])));

        let effect = viewer.handle(Message::Attached {
            surface: Some(surface()),
        });

        assert_eq!(effect, Effect::None);
        assert!(viewer.is_mounted());
        assert_eq!(log.constructions(), 1);
        assert_eq!(log.destroys(), 0);
    }

    #[test]
    fn reattach_to_same_surface_does_not_retry_failed_construction() {
        let (mut viewer, log) = viewer();
        viewer.widget_mut().set_fail_construct(true);
        viewer.handle(Message::Attached {
            surface: Some(surface()),
        });
        viewer.handle(Message::PagesChanged(PageSet::from_markup(["a"])));
        viewer.widget_mut().set_fail_construct(false);

        let effect = viewer.handle(Message::Attached {
            surface: Some(surface()),
        });

        assert_eq!(effect, Effect::None);
        assert_eq!(log.constructions(), 0);
        assert!(!viewer.is_mounted());
    }

    #[test]
    fn losing_surface_while_mounted_reports_unmounted() {
        let (mut viewer, _log) = viewer();
        viewer.handle(Message::Attached {
            surface: Some(surface()),
        });
        viewer.handle(Message::PagesChanged(PageSet::from_markup(["a"])));

        let effect = viewer.handle(Message::Attached { surface: None });

        assert_eq!(effect, Effect::Unmounted);
        assert!(!viewer.is_mounted());
    }

    #[test]
    fn failed_construction_surfaces_as_effect() {
        let (mut viewer, _log) = viewer();
        viewer.widget_mut().set_fail_construct(true);
        viewer.handle(Message::Attached {
            surface: Some(surface()),
        });

        let effect = viewer.handle(Message::PagesChanged(PageSet::from_markup(["a"])));

        assert!(matches!(
            effect,
            Effect::Failed(ViewerError::ConstructionFailed(_))
        ));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // DIAGNOSTICS
    // ═══════════════════════════════════════════════════════════════════════

    #[test]
    fn lifecycle_events_reach_the_collector() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let log = CallLog::new();
        let mut viewer = ViewerLifecycle::new(RecordingWidget::new(log))
            .with_diagnostics(collector.handle());
        viewer.widget_mut().set_teardown(TeardownBehavior::Fail);

        viewer.bind(&PageSet::from_markup(["a"]), Some(&surface()));
        viewer.bind(&PageSet::from_markup(["b"]), Some(&surface()));
        collector.process_pending();

        let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                DiagnosticEventKind::Lifecycle {
                    event: LifecycleEvent::Mounted { page_count: 1 }
                },
                DiagnosticEventKind::Warning {
                    message: "Widget teardown failed: Widget rejected the call: instance 1 already detached"
                        .to_string()
                },
                DiagnosticEventKind::Lifecycle {
                    event: LifecycleEvent::TeardownFailed {
                        code: "teardown-failed".to_string()
                    }
                },
                DiagnosticEventKind::Lifecycle {
                    event: LifecycleEvent::Unmounted
                },
                DiagnosticEventKind::Lifecycle {
                    event: LifecycleEvent::Rebuilt { page_count: 1 }
                },
            ]
        );
    }

    #[test]
    fn each_construction_is_recorded_once() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let log = CallLog::new();
        let mut viewer = ViewerLifecycle::new(RecordingWidget::new(log.clone()))
            .with_diagnostics(collector.handle());

        viewer.bind(&PageSet::from_markup(["a"]), Some(&surface()));
        viewer.bind(&PageSet::from_markup(["a", "b"]), Some(&surface()));
        viewer.mount(&PageSet::from_markup(["c"]), Some(&surface()));
        collector.process_pending();

        let built: Vec<_> = collector
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::Lifecycle { event } => match event {
                    LifecycleEvent::Mounted { .. } | LifecycleEvent::Rebuilt { .. } => {
                        Some(event.clone())
                    }
                    _ => None,
                },
                _ => None,
            })
            .collect();

        assert_eq!(log.constructions(), 3);
        assert_eq!(
            built,
            vec![
                LifecycleEvent::Mounted { page_count: 1 },
                LifecycleEvent::Rebuilt { page_count: 2 },
                LifecycleEvent::Rebuilt { page_count: 1 },
            ]
        );
    }
}

// SPDX-License-Identifier: MPL-2.0
//! In-memory widget adapter that records every call.
//!
//! Used to observe the viewer lifecycle from tests and benches: the shared
//! [`CallLog`] shows construction, batch loading and teardown in the order
//! they happened, and the widget can be told to fail any of them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::application::port::{FlipWidget, WidgetError};
use crate::domain::page::PageNode;
use crate::domain::viewer::FlipConfig;

/// Named surface handle. Clones refer to the same logical surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingSurface(String);

impl RecordingSurface {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// One recorded widget instance.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedInstance {
    /// Sequence number, starting at 1 for the first construction.
    pub id: u64,
    /// Name of the surface it was constructed on.
    pub surface: String,
    /// Parameters passed at construction.
    pub config: FlipConfig,
    /// Pages received through `load_batch`.
    pub pages: Vec<PageNode>,
}

/// A widget call, in the order it reached the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetCall {
    Construct { instance_id: u64, surface: String },
    LoadBatch { instance_id: u64, pages: Vec<PageNode> },
    Destroy { instance_id: u64 },
}

/// Shared, ordered log of widget calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Rc<RefCell<Vec<WidgetCall>>>);

impl CallLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, call: WidgetCall) {
        self.0.borrow_mut().push(call);
    }

    /// Snapshot of all calls so far.
    #[must_use]
    pub fn calls(&self) -> Vec<WidgetCall> {
        self.0.borrow().clone()
    }

    /// Number of `construct` calls.
    #[must_use]
    pub fn constructions(&self) -> usize {
        self.count(|call| matches!(call, WidgetCall::Construct { .. }))
    }

    /// Number of `destroy` calls, whether they succeeded or not.
    #[must_use]
    pub fn destroys(&self) -> usize {
        self.count(|call| matches!(call, WidgetCall::Destroy { .. }))
    }

    /// Pages of the most recent `load_batch` call.
    #[must_use]
    pub fn last_batch(&self) -> Option<Vec<PageNode>> {
        self.0.borrow().iter().rev().find_map(|call| match call {
            WidgetCall::LoadBatch { pages, .. } => Some(pages.clone()),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn count(&self, predicate: impl Fn(&WidgetCall) -> bool) -> usize {
        self.0.borrow().iter().filter(|call| predicate(call)).count()
    }
}

/// How a [`RecordingWidget`] tears instances down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeardownBehavior {
    /// `destroy` succeeds.
    #[default]
    Succeed,
    /// `destroy` returns an error.
    Fail,
    /// `destroy` panics.
    Panic,
    /// The widget has no teardown capability (trait default).
    Unsupported,
}

/// Widget adapter that records calls into a [`CallLog`].
#[derive(Debug, Default)]
pub struct RecordingWidget {
    log: CallLog,
    next_id: u64,
    fail_construct: bool,
    fail_load: bool,
    teardown: TeardownBehavior,
}

impl RecordingWidget {
    /// Creates a widget writing into `log`.
    #[must_use]
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    /// Makes subsequent `construct` calls fail (or succeed again).
    pub fn set_fail_construct(&mut self, fail: bool) {
        self.fail_construct = fail;
    }

    /// Makes subsequent `load_batch` calls fail (or succeed again).
    pub fn set_fail_load(&mut self, fail: bool) {
        self.fail_load = fail;
    }

    pub fn set_teardown(&mut self, behavior: TeardownBehavior) {
        self.teardown = behavior;
    }

    #[must_use]
    pub fn with_teardown(mut self, behavior: TeardownBehavior) -> Self {
        self.teardown = behavior;
        self
    }

    #[must_use]
    pub fn log(&self) -> &CallLog {
        &self.log
    }
}

impl FlipWidget for RecordingWidget {
    type Surface = RecordingSurface;
    type Instance = RecordedInstance;

    fn construct(
        &mut self,
        surface: &RecordingSurface,
        config: &FlipConfig,
    ) -> Result<RecordedInstance, WidgetError> {
        if self.fail_construct {
            return Err(WidgetError::Rejected(format!(
                "construction refused on {}",
                surface.name()
            )));
        }

        self.next_id += 1;
        self.log.push(WidgetCall::Construct {
            instance_id: self.next_id,
            surface: surface.name().to_owned(),
        });

        Ok(RecordedInstance {
            id: self.next_id,
            surface: surface.name().to_owned(),
            config: *config,
            pages: Vec::new(),
        })
    }

    fn load_batch(
        &mut self,
        instance: &mut RecordedInstance,
        pages: &[PageNode],
    ) -> Result<(), WidgetError> {
        if self.fail_load {
            return Err(WidgetError::Rejected("batch refused".to_string()));
        }

        self.log.push(WidgetCall::LoadBatch {
            instance_id: instance.id,
            pages: pages.to_vec(),
        });
        instance.pages = pages.to_vec();
        Ok(())
    }

    fn destroy(&mut self, instance: RecordedInstance) -> Result<(), WidgetError> {
        if self.teardown == TeardownBehavior::Unsupported {
            drop(instance);
            return Err(WidgetError::Unsupported);
        }

        self.log.push(WidgetCall::Destroy {
            instance_id: instance.id,
        });

        match self.teardown {
            TeardownBehavior::Succeed | TeardownBehavior::Unsupported => Ok(()),
            TeardownBehavior::Fail => Err(WidgetError::Rejected(format!(
                "instance {} already detached",
                instance.id
            ))),
            TeardownBehavior::Panic => panic!("instance {} blew up during destroy", instance.id),
        }
    }
}

//! Deferred divider layout.
//!
//! Structural changes (split, restore) happen immediately, but a divider's
//! pixel position depends on the size the split is actually given, which is
//! only known after the host has laid the widgets out. Those assignments are
//! queued here and run on the next layout pass, in the order they were queued.

use crate::pane::types::{PaneBounds, PaneNode, SplitId};
use std::collections::VecDeque;

/// Divider position used when a split has no usable size yet
pub const FALLBACK_POSITION: i32 = 400;

/// Width of the divider between two panes, in pixels
pub const DIVIDER_WIDTH: i32 = 1;

/// A pending divider assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutTask {
    /// Put the divider in the middle of the split
    Bisect(SplitId),
    /// Re-apply a saved divider position
    Restore { split: SplitId, position: i32 },
}

impl LayoutTask {
    pub fn split_id(&self) -> SplitId {
        match self {
            LayoutTask::Bisect(id) => *id,
            LayoutTask::Restore { split, .. } => *split,
        }
    }
}

/// FIFO of layout tasks waiting for the next layout pass
#[derive(Debug, Default)]
pub struct LayoutQueue {
    tasks: VecDeque<LayoutTask>,
}

impl LayoutQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: LayoutTask) {
        crate::debug_trace!("LAYOUT", "Queued {:?}", task);
        self.tasks.push_back(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Run every queued task against the current trees.
    ///
    /// Each root is laid out within `bounds` (every tab fills the same
    /// content area). Tasks whose split no longer exists are dropped.
    /// Returns the number of tasks that changed a divider.
    pub fn run<'a>(
        &mut self,
        roots: impl IntoIterator<Item = &'a mut PaneNode>,
        bounds: PaneBounds,
    ) -> usize {
        if self.tasks.is_empty() {
            return 0;
        }

        let mut roots: Vec<&mut PaneNode> = roots.into_iter().collect();
        let mut applied = 0;

        while let Some(task) = self.tasks.pop_front() {
            let split_id = task.split_id();
            let Some(root) = roots
                .iter_mut()
                .find(|root| root.find_split(split_id).is_some())
            else {
                crate::debug_log!("LAYOUT", "Split {} is gone, skipping {:?}", split_id, task);
                continue;
            };

            let extent = root
                .split_bounds(split_id, bounds, DIVIDER_WIDTH)
                .map(|(orientation, split_bounds)| split_bounds.extent(orientation))
                .unwrap_or(0);

            let position = match task {
                LayoutTask::Bisect(_) => {
                    if extent > 1 {
                        extent / 2
                    } else {
                        FALLBACK_POSITION
                    }
                }
                LayoutTask::Restore { position, .. } => {
                    if extent > 0 {
                        position.clamp(0, extent)
                    } else {
                        position
                    }
                }
            };

            root.set_split_position(split_id, position);
            crate::debug_log!(
                "LAYOUT",
                "Split {} position={} (extent {})",
                split_id,
                position,
                extent
            );
            applied += 1;
        }

        applied
    }
}

//! Pane creation and tree manipulation (split, remove)

use super::PaneManager;
use crate::pane::types::{Orientation, Pane, PaneId, PaneNode, SplitId};

/// Source of new panes and split identities.
///
/// The window implements this over its surface factory and ID counters;
/// tests implement it with fake surfaces.
pub trait PaneSpawner {
    /// Spawn a pane whose shell starts in `cwd`. Returns `None` when the
    /// surface could not be created.
    fn spawn_pane(&mut self, cwd: Option<&str>) -> Option<Pane>;

    /// Allocate an identity for a new split node
    fn next_split_id(&mut self) -> SplitId;
}

/// Result of a successful split
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOutcome {
    /// The freshly spawned pane (now focused)
    pub pane_id: PaneId,
    /// The split node that replaced the target leaf
    pub split_id: SplitId,
}

/// Result of removing a pane from a subtree
pub enum RemoveResult {
    /// The pane was removed. `None` means the subtree itself was the pane.
    Removed(Option<PaneNode>),
    /// The pane was not in this subtree; the subtree is handed back unchanged
    NotFound(PaneNode),
}

impl PaneManager {
    /// Split the focused pane.
    ///
    /// Returns `None` if no pane is focused or the new pane could not be spawned.
    pub fn split(
        &mut self,
        orientation: Orientation,
        spawner: &mut dyn PaneSpawner,
    ) -> Option<SplitOutcome> {
        let focused_id = self.focused_pane_id?;
        self.split_pane(focused_id, orientation, spawner)
    }

    /// Split `target_id` in place: the original pane becomes the first child
    /// and a new pane spawned in the same working directory becomes the
    /// second. The new pane takes focus.
    ///
    /// The divider position starts at 0 until a layout pass bisects it.
    /// A target that is not in the tree makes this a no-op.
    pub fn split_pane(
        &mut self,
        target_id: PaneId,
        orientation: Orientation,
        spawner: &mut dyn PaneSpawner,
    ) -> Option<SplitOutcome> {
        let Some(target) = self.get_pane(target_id) else {
            crate::debug_info!(
                "PANE_SPLIT",
                "Split target pane {} not found, ignoring",
                target_id
            );
            return None;
        };
        let working_dir = target.get_cwd();

        let new_pane = spawner.spawn_pane(working_dir.as_deref())?;
        let new_id = new_pane.id;
        let split_id = spawner.next_split_id();

        if let Some(root) = self.root.take() {
            let (new_root, _) = Self::split_node(root, target_id, orientation, split_id, Some(new_pane));
            self.root = Some(new_root);
        }

        self.focused_pane_id = Some(new_id);

        crate::debug_info!(
            "PANE_SPLIT",
            "Split pane {} {} (split {}), created new pane {}. First={} Second={} (focused)",
            target_id,
            orientation,
            split_id,
            new_id,
            target_id,
            new_id
        );

        Some(SplitOutcome {
            pane_id: new_id,
            split_id,
        })
    }

    /// Split a node, finding the target pane and replacing it with a split
    ///
    /// Returns (new_node, remaining_pane) where remaining_pane is Some if
    /// the target was not found in this subtree.
    pub(super) fn split_node(
        node: PaneNode,
        target_id: PaneId,
        orientation: Orientation,
        split_id: SplitId,
        new_pane: Option<Pane>,
    ) -> (PaneNode, Option<Pane>) {
        match node {
            PaneNode::Leaf(pane) => match new_pane {
                Some(new) if pane.id == target_id => (
                    PaneNode::split(split_id, orientation, 0, PaneNode::Leaf(pane), PaneNode::leaf(new)),
                    None,
                ),
                remaining => (PaneNode::Leaf(pane), remaining),
            },
            PaneNode::Split {
                id,
                orientation: split_orientation,
                position,
                first,
                second,
            } => {
                let (new_first, remaining) =
                    Self::split_node(*first, target_id, orientation, split_id, new_pane);

                if remaining.is_none() {
                    (
                        PaneNode::Split {
                            id,
                            orientation: split_orientation,
                            position,
                            first: Box::new(new_first),
                            second,
                        },
                        None,
                    )
                } else {
                    let (new_second, remaining) =
                        Self::split_node(*second, target_id, orientation, split_id, remaining);
                    (
                        PaneNode::Split {
                            id,
                            orientation: split_orientation,
                            position,
                            first: Box::new(new_first),
                            second: Box::new(new_second),
                        },
                        remaining,
                    )
                }
            }
        }
    }

    /// Remove a pane from the tree, returning the new tree structure.
    ///
    /// The sibling of the removed pane takes its parent's slot; orientation
    /// and position of every other split are untouched.
    pub(super) fn remove_pane(node: PaneNode, target_id: PaneId) -> RemoveResult {
        match node {
            PaneNode::Leaf(pane) => {
                if pane.id == target_id {
                    RemoveResult::Removed(None)
                } else {
                    RemoveResult::NotFound(PaneNode::Leaf(pane))
                }
            }
            PaneNode::Split {
                id,
                orientation,
                position,
                first,
                second,
            } => match Self::remove_pane(*first, target_id) {
                // First child was the target; the second takes this split's place
                RemoveResult::Removed(None) => RemoveResult::Removed(Some(*second)),
                RemoveResult::Removed(Some(new_first)) => RemoveResult::Removed(Some(PaneNode::Split {
                    id,
                    orientation,
                    position,
                    first: Box::new(new_first),
                    second,
                })),
                RemoveResult::NotFound(first_node) => match Self::remove_pane(*second, target_id) {
                    RemoveResult::Removed(None) => RemoveResult::Removed(Some(first_node)),
                    RemoveResult::Removed(Some(new_second)) => {
                        RemoveResult::Removed(Some(PaneNode::Split {
                            id,
                            orientation,
                            position,
                            first: Box::new(first_node),
                            second: Box::new(new_second),
                        }))
                    }
                    RemoveResult::NotFound(second_node) => RemoveResult::NotFound(PaneNode::Split {
                        id,
                        orientation,
                        position,
                        first: Box::new(first_node),
                        second: Box::new(second_node),
                    }),
                },
            },
        }
    }
}

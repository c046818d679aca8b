//! Focus and navigation operations for PaneManager
//!
//! Handles pane focus state, cyclic navigation, and closing panes with
//! automatic focus transfer.

use super::PaneManager;
use super::creation::RemoveResult;
use crate::pane::types::{Pane, PaneId};

/// Outcome of closing a pane within one tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosePaneResult {
    /// The pane is not in this tree; nothing changed
    NotFound,
    /// The pane was removed and the tree still has panes
    Closed,
    /// The pane was the last one; the tree is now empty
    Emptied,
}

impl PaneManager {
    /// Close a pane by ID.
    ///
    /// If the closed pane was focused, focus moves to the first pane of the
    /// resulting tree.
    pub fn close_pane(&mut self, id: PaneId) -> ClosePaneResult {
        crate::debug_info!("PANE_CLOSE", "close_pane called for pane {}", id);

        let Some(root) = self.root.take() else {
            return ClosePaneResult::NotFound;
        };

        match Self::remove_pane(root, id) {
            RemoveResult::Removed(new_root) => {
                self.root = new_root;

                if self.focused_pane_id == Some(id) {
                    let new_focus = self.first_pane_id();
                    crate::debug_info!(
                        "PANE_CLOSE",
                        "Closed focused pane {}, new focus: {:?}",
                        id,
                        new_focus
                    );
                    self.focused_pane_id = new_focus;
                }

                if self.root.is_none() {
                    ClosePaneResult::Emptied
                } else {
                    crate::debug_info!(
                        "PANE_CLOSE",
                        "Closed pane {}, remaining panes {:?}",
                        id,
                        self.all_pane_ids()
                    );
                    ClosePaneResult::Closed
                }
            }
            RemoveResult::NotFound(root) => {
                crate::debug_info!("PANE_CLOSE", "Pane {} not found in tree", id);
                self.root = Some(root);
                ClosePaneResult::NotFound
            }
        }
    }

    /// Move focus `direction` panes along the traversal order, wrapping.
    ///
    /// Returns the newly focused pane.
    pub fn navigate(&mut self, direction: i32) -> Option<PaneId> {
        let root = self.root.as_ref()?;
        let current = self.focused_pane_id.unwrap_or_else(|| root.first_pane().id);
        let new_id = root.navigate(current, direction)?;
        log::debug!("Navigated {} from pane {} to pane {}", direction, current, new_id);
        self.focused_pane_id = Some(new_id);
        Some(new_id)
    }

    /// Focus a specific pane by ID. Returns false if it is not in this tree.
    pub fn focus_pane(&mut self, id: PaneId) -> bool {
        if self
            .root
            .as_ref()
            .is_some_and(|r| r.contains_pane(id))
        {
            self.focused_pane_id = Some(id);
            true
        } else {
            false
        }
    }

    /// Get the currently focused pane
    pub fn focused_pane(&self) -> Option<&Pane> {
        self.focused_pane_id
            .and_then(|id| self.root.as_ref()?.find_pane(id))
    }

    /// Get the currently focused pane mutably
    pub fn focused_pane_mut(&mut self) -> Option<&mut Pane> {
        let id = self.focused_pane_id?;
        self.root.as_mut()?.find_pane_mut(id)
    }

    /// Get the focused pane ID
    pub fn focused_pane_id(&self) -> Option<PaneId> {
        self.focused_pane_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::{Orientation, PaneNode, PaneSpawner};
    use crate::test_support::FakeSpawner;

    fn three_panes(spawner: &mut FakeSpawner) -> (PaneManager, [PaneId; 3]) {
        let a = spawner.spawn_pane(None).unwrap();
        let a_id = a.id;
        let mut manager = PaneManager::with_initial_pane(a);
        let b = manager.split(Orientation::Horizontal, spawner).unwrap().pane_id;
        let c = manager.split(Orientation::Vertical, spawner).unwrap().pane_id;
        (manager, [a_id, b, c])
    }

    #[test]
    fn test_close_sibling_replaces_parent() {
        let mut spawner = FakeSpawner::default();
        let (mut manager, [a, b, c]) = three_panes(&mut spawner);
        // Tree: Split(a, Split(b, c))
        manager.root_mut().unwrap().set_split_position(1, 333);

        assert_eq!(manager.close_pane(b), ClosePaneResult::Closed);
        assert_eq!(manager.all_pane_ids(), vec![a, c]);

        // The outer split survives with its position; c took the inner split's slot
        match manager.root().unwrap() {
            PaneNode::Split {
                id,
                position,
                second,
                ..
            } => {
                assert_eq!(*id, 1);
                assert_eq!(*position, 333);
                assert!(second.is_leaf());
            }
            PaneNode::Leaf(_) => panic!("expected split root"),
        }
    }

    #[test]
    fn test_close_focused_moves_focus_to_first() {
        let mut spawner = FakeSpawner::default();
        let (mut manager, [a, _b, c]) = three_panes(&mut spawner);
        assert_eq!(manager.focused_pane_id(), Some(c));

        manager.close_pane(c);
        assert_eq!(manager.focused_pane_id(), Some(a));
    }

    #[test]
    fn test_close_unfocused_keeps_focus() {
        let mut spawner = FakeSpawner::default();
        let (mut manager, [a, _b, c]) = three_panes(&mut spawner);
        manager.close_pane(a);
        assert_eq!(manager.focused_pane_id(), Some(c));
    }

    #[test]
    fn test_close_last_pane_empties_tree() {
        let mut spawner = FakeSpawner::default();
        let pane = spawner.spawn_pane(None).unwrap();
        let id = pane.id;
        let mut manager = PaneManager::with_initial_pane(pane);

        assert_eq!(manager.close_pane(id), ClosePaneResult::Emptied);
        assert!(manager.root().is_none());
        assert!(manager.focused_pane_id().is_none());
    }

    #[test]
    fn test_close_missing_pane_is_noop() {
        let mut spawner = FakeSpawner::default();
        let (mut manager, ids) = three_panes(&mut spawner);
        assert_eq!(manager.close_pane(4242), ClosePaneResult::NotFound);
        assert_eq!(manager.all_pane_ids(), ids.to_vec());
    }

    #[test]
    fn test_navigate_cycles_through_every_pane() {
        let mut spawner = FakeSpawner::default();
        let (mut manager, ids) = three_panes(&mut spawner);
        let start = manager.focused_pane_id().unwrap();

        let mut seen = Vec::new();
        for _ in 0..ids.len() {
            seen.push(manager.navigate(1).unwrap());
        }
        assert_eq!(manager.focused_pane_id(), Some(start));
        seen.sort_unstable();
        let mut expected = ids.to_vec();
        expected.sort_unstable();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_focus_pane_rejects_foreign_id() {
        let mut spawner = FakeSpawner::default();
        let (mut manager, [a, ..]) = three_panes(&mut spawner);
        assert!(manager.focus_pane(a));
        assert!(!manager.focus_pane(777));
        assert_eq!(manager.focused_pane_id(), Some(a));
    }
}

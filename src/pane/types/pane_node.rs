//! `PaneNode`: binary tree structure for arbitrary pane nesting.

use super::bounds::PaneBounds;
use super::common::{Orientation, PaneId, SplitId};
use super::pane::Pane;

/// Tree node for pane layout
///
/// The pane tree is a binary tree where:
/// - Leaf nodes contain actual terminal panes
/// - Split nodes contain exactly two children, an orientation and a divider
///   position
pub enum PaneNode {
    /// A leaf node containing a terminal pane
    Leaf(Box<Pane>),
    /// A split containing two child nodes
    Split {
        /// Identity used by deferred layout tasks
        id: SplitId,
        orientation: Orientation,
        /// Divider offset in pixels from the start of the split, replayed verbatim
        position: i32,
        /// First child (left for horizontal, top for vertical)
        first: Box<PaneNode>,
        /// Second child (right for horizontal, bottom for vertical)
        second: Box<PaneNode>,
    },
}

impl PaneNode {
    /// Create a new leaf node with a pane
    pub fn leaf(pane: Pane) -> Self {
        PaneNode::Leaf(Box::new(pane))
    }

    /// Create a new split node
    pub fn split(
        id: SplitId,
        orientation: Orientation,
        position: i32,
        first: PaneNode,
        second: PaneNode,
    ) -> Self {
        PaneNode::Split {
            id,
            orientation,
            position,
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        matches!(self, PaneNode::Leaf(_))
    }

    /// Get the pane if this is a leaf node
    pub fn as_pane(&self) -> Option<&Pane> {
        match self {
            PaneNode::Leaf(pane) => Some(pane),
            PaneNode::Split { .. } => None,
        }
    }

    /// Find a pane by ID (recursive)
    pub fn find_pane(&self, id: PaneId) -> Option<&Pane> {
        match self {
            PaneNode::Leaf(pane) => (pane.id == id).then_some(pane.as_ref()),
            PaneNode::Split { first, second, .. } => {
                first.find_pane(id).or_else(|| second.find_pane(id))
            }
        }
    }

    /// Find a mutable pane by ID (recursive)
    pub fn find_pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        match self {
            PaneNode::Leaf(pane) => (pane.id == id).then_some(pane.as_mut()),
            PaneNode::Split { first, second, .. } => match first.find_pane_mut(id) {
                Some(pane) => Some(pane),
                None => second.find_pane_mut(id),
            },
        }
    }

    pub fn contains_pane(&self, id: PaneId) -> bool {
        self.find_pane(id).is_some()
    }

    /// Get all pane IDs in this subtree, pre-order, first child before second
    pub fn all_pane_ids(&self) -> Vec<PaneId> {
        match self {
            PaneNode::Leaf(pane) => vec![pane.id],
            PaneNode::Split { first, second, .. } => {
                let mut ids = first.all_pane_ids();
                ids.extend(second.all_pane_ids());
                ids
            }
        }
    }

    /// Get all panes in this subtree, in traversal order
    pub fn all_panes(&self) -> Vec<&Pane> {
        match self {
            PaneNode::Leaf(pane) => vec![pane],
            PaneNode::Split { first, second, .. } => {
                let mut panes = first.all_panes();
                panes.extend(second.all_panes());
                panes
            }
        }
    }

    /// Get all mutable panes in this subtree, in traversal order
    pub fn all_panes_mut(&mut self) -> Vec<&mut Pane> {
        match self {
            PaneNode::Leaf(pane) => vec![pane],
            PaneNode::Split { first, second, .. } => {
                let mut panes = first.all_panes_mut();
                panes.extend(second.all_panes_mut());
                panes
            }
        }
    }

    /// The first pane in traversal order
    pub fn first_pane(&self) -> &Pane {
        match self {
            PaneNode::Leaf(pane) => pane,
            PaneNode::Split { first, .. } => first.first_pane(),
        }
    }

    /// Count total number of panes
    pub fn pane_count(&self) -> usize {
        match self {
            PaneNode::Leaf(_) => 1,
            PaneNode::Split { first, second, .. } => first.pane_count() + second.pane_count(),
        }
    }

    /// Depth of the deepest leaf; a lone leaf has depth 0
    pub fn depth(&self) -> usize {
        match self {
            PaneNode::Leaf(_) => 0,
            PaneNode::Split { first, second, .. } => 1 + first.depth().max(second.depth()),
        }
    }

    /// Pane reached by stepping `direction` places from `current` in traversal
    /// order, wrapping cyclically.
    ///
    /// Returns the first pane when `current` is not in the tree.
    pub fn navigate(&self, current: PaneId, direction: i32) -> Option<PaneId> {
        let ids = self.all_pane_ids();
        if ids.is_empty() {
            return None;
        }
        let Some(index) = ids.iter().position(|&id| id == current) else {
            return ids.first().copied();
        };
        let count = ids.len() as i64;
        let next = (index as i64 + i64::from(direction)).rem_euclid(count);
        ids.get(next as usize).copied()
    }

    /// Orientation and position of a split by ID
    pub fn find_split(&self, split_id: SplitId) -> Option<(Orientation, i32)> {
        match self {
            PaneNode::Leaf(_) => None,
            PaneNode::Split {
                id,
                orientation,
                position,
                first,
                second,
            } => {
                if *id == split_id {
                    Some((*orientation, *position))
                } else {
                    first
                        .find_split(split_id)
                        .or_else(|| second.find_split(split_id))
                }
            }
        }
    }

    /// Set a split's divider position. Returns false if the split is gone.
    pub fn set_split_position(&mut self, split_id: SplitId, new_position: i32) -> bool {
        match self {
            PaneNode::Leaf(_) => false,
            PaneNode::Split {
                id,
                position,
                first,
                second,
                ..
            } => {
                if *id == split_id {
                    *position = new_position;
                    true
                } else {
                    first.set_split_position(split_id, new_position)
                        || second.set_split_position(split_id, new_position)
                }
            }
        }
    }

    /// Bounds allocated to a split, given the bounds of this subtree
    pub fn split_bounds(
        &self,
        split_id: SplitId,
        bounds: PaneBounds,
        divider_width: i32,
    ) -> Option<(Orientation, PaneBounds)> {
        match self {
            PaneNode::Leaf(_) => None,
            PaneNode::Split {
                id,
                orientation,
                position,
                first,
                second,
            } => {
                if *id == split_id {
                    return Some((*orientation, bounds));
                }
                let (first_bounds, second_bounds) =
                    bounds.split(*orientation, *position, divider_width);
                first
                    .split_bounds(split_id, first_bounds, divider_width)
                    .or_else(|| second.split_bounds(split_id, second_bounds, divider_width))
            }
        }
    }

    /// Calculate bounds for every pane given the total available area.
    ///
    /// The renderer uses this to project the tree onto widgets.
    pub fn calculate_bounds(
        &self,
        bounds: PaneBounds,
        divider_width: i32,
    ) -> Vec<(PaneId, PaneBounds)> {
        let mut out = Vec::new();
        self.collect_bounds(bounds, divider_width, &mut out);
        out
    }

    fn collect_bounds(
        &self,
        bounds: PaneBounds,
        divider_width: i32,
        out: &mut Vec<(PaneId, PaneBounds)>,
    ) {
        match self {
            PaneNode::Leaf(pane) => out.push((pane.id, bounds)),
            PaneNode::Split {
                orientation,
                position,
                first,
                second,
                ..
            } => {
                let (first_bounds, second_bounds) =
                    bounds.split(*orientation, *position, divider_width);
                first.collect_bounds(first_bounds, divider_width, out);
                second.collect_bounds(second_bounds, divider_width, out);
            }
        }
    }
}

impl std::fmt::Debug for PaneNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaneNode::Leaf(pane) => write!(f, "Leaf({})", pane.id),
            PaneNode::Split {
                id,
                orientation,
                position,
                first,
                second,
            } => f
                .debug_struct("Split")
                .field("id", id)
                .field("orientation", orientation)
                .field("position", position)
                .field("first", first)
                .field("second", second)
                .finish(),
        }
    }
}

//! Pane manager for coordinating pane operations within a tab
//!
//! The PaneManager owns the pane tree and provides operations for:
//! - Splitting panes
//! - Closing panes
//! - Navigating between panes in traversal order
//!
//! Sub-modules:
//! - [`creation`]: Pane creation and tree manipulation (split, remove).
//! - [`focus`]: Focus management, navigation and closing.

mod creation;
mod focus;

pub use creation::{PaneSpawner, RemoveResult, SplitOutcome};
pub use focus::ClosePaneResult;

use crate::pane::types::{Pane, PaneId, PaneNode};

/// Manages the pane tree within a single tab
#[derive(Debug, Default)]
pub struct PaneManager {
    /// Root of the pane tree (None once the last pane is closed)
    pub(super) root: Option<PaneNode>,
    /// ID of the pane focused within this tab
    pub(super) focused_pane_id: Option<PaneId>,
}

impl PaneManager {
    /// Create a new empty pane manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pane manager with a single pane, focused
    pub fn with_initial_pane(pane: Pane) -> Self {
        Self::from_root(PaneNode::leaf(pane))
    }

    /// Create a pane manager over an existing tree, focusing its first pane
    pub fn from_root(root: PaneNode) -> Self {
        let focused_pane_id = Some(root.first_pane().id);
        Self {
            root: Some(root),
            focused_pane_id,
        }
    }

    /// Get a pane by ID
    pub fn get_pane(&self, id: PaneId) -> Option<&Pane> {
        self.root.as_ref()?.find_pane(id)
    }

    /// Get a mutable pane by ID
    pub fn get_pane_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        self.root.as_mut()?.find_pane_mut(id)
    }

    /// Get all panes in traversal order
    pub fn all_panes(&self) -> Vec<&Pane> {
        self.root
            .as_ref()
            .map(|r| r.all_panes())
            .unwrap_or_default()
    }

    /// Get all mutable panes in traversal order
    pub fn all_panes_mut(&mut self) -> Vec<&mut Pane> {
        self.root
            .as_mut()
            .map(|r| r.all_panes_mut())
            .unwrap_or_default()
    }

    /// Get all pane IDs in traversal order
    pub fn all_pane_ids(&self) -> Vec<PaneId> {
        self.root
            .as_ref()
            .map(|r| r.all_pane_ids())
            .unwrap_or_default()
    }

    /// First pane in traversal order
    pub fn first_pane_id(&self) -> Option<PaneId> {
        self.root.as_ref().map(|r| r.first_pane().id)
    }

    /// Get the number of panes
    pub fn pane_count(&self) -> usize {
        self.root.as_ref().map(|r| r.pane_count()).unwrap_or(0)
    }

    /// Check if there are multiple panes
    pub fn has_multiple_panes(&self) -> bool {
        self.pane_count() > 1
    }

    /// Get the root node
    pub fn root(&self) -> Option<&PaneNode> {
        self.root.as_ref()
    }

    /// Get mutable access to the root node
    pub fn root_mut(&mut self) -> Option<&mut PaneNode> {
        self.root.as_mut()
    }
}

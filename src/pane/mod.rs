//! Pane management for split terminal support
//!
//! This module provides the pane infrastructure for split terminals:
//! - `Pane`: A single terminal surface with its cached state
//! - `PaneNode`: Binary tree of oriented splits with panes at the leaves
//! - `PaneManager`: Split, close and navigate within one tab
//! - `LayoutQueue`: Divider positions assigned on the next layout pass

pub mod layout;
mod manager;
mod types;

pub use layout::{LayoutQueue, LayoutTask};
pub use manager::{ClosePaneResult, PaneManager, PaneSpawner, RemoveResult, SplitOutcome};
pub use types::{Orientation, Pane, PaneBounds, PaneId, PaneNode, SplitId};

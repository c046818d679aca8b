//! Core types for the pane system.
//!
//! Sub-modules:
//! - [`bounds`]: `PaneBounds` pixel-space bounding box
//! - [`common`]: `PaneId`, `SplitId`, `Orientation`
//! - [`pane`]: `Pane`, a leaf's terminal surface and cached state
//! - [`pane_node`]: `PaneNode` binary tree for pane layout

mod bounds;
mod common;
mod pane;
mod pane_node;

#[cfg(test)]
mod tests;

pub use bounds::PaneBounds;
pub use common::{Orientation, PaneId, SplitId};
pub use pane::Pane;
pub use pane_node::PaneNode;

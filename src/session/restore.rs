//! Rebuild pane trees from a saved session

use super::SessionPaneNode;
use crate::pane::{LayoutQueue, LayoutTask, PaneNode, PaneSpawner};
use std::path::Path;

/// Nodes nested deeper than this are dropped during restore
pub const MAX_RESTORE_DEPTH: usize = 20;

/// Rebuild a live pane tree from a saved node.
///
/// Returns `None` when nothing in the subtree could be restored. A split
/// with only one surviving child collapses to that child. Divider positions
/// are not applied here: each rebuilt split queues a layout task so the
/// saved position (or the midpoint, when none was saved) is applied once the
/// split has been given a real size.
pub fn restore_pane_node(
    node: &SessionPaneNode,
    depth: usize,
    spawner: &mut dyn PaneSpawner,
    layout: &mut LayoutQueue,
) -> Option<PaneNode> {
    if depth > MAX_RESTORE_DEPTH {
        log::warn!(
            "Session restore: dropping subtree nested deeper than {} levels",
            MAX_RESTORE_DEPTH
        );
        return None;
    }

    match node {
        SessionPaneNode::Terminal { cwd } => {
            let cwd = validate_cwd(cwd);
            spawner.spawn_pane(cwd.as_deref()).map(PaneNode::leaf)
        }
        SessionPaneNode::Paned {
            orientation,
            position,
            child1,
            child2,
        } => {
            let first = child1
                .as_deref()
                .and_then(|c| restore_pane_node(c, depth + 1, spawner, layout));
            let second = child2
                .as_deref()
                .and_then(|c| restore_pane_node(c, depth + 1, spawner, layout));

            match (first, second) {
                (Some(first), Some(second)) => {
                    let split_id = spawner.next_split_id();
                    layout.push(match position {
                        Some(position) => LayoutTask::Restore {
                            split: split_id,
                            position: *position,
                        },
                        None => LayoutTask::Bisect(split_id),
                    });
                    Some(PaneNode::split(
                        split_id,
                        *orientation,
                        0,
                        first,
                        second,
                    ))
                }
                (Some(only), None) | (None, Some(only)) => Some(only),
                (None, None) => None,
            }
        }
        SessionPaneNode::Unknown => {
            log::warn!("Session restore: skipping node of unknown type");
            None
        }
    }
}

/// Validate that a working directory exists, falling back to `$HOME` if not
pub fn validate_cwd(cwd: &Option<String>) -> Option<String> {
    if let Some(dir) = cwd {
        if Path::new(dir).is_dir() {
            return Some(dir.clone());
        }
        log::warn!(
            "Session restore: directory '{}' no longer exists, falling back to home",
            dir
        );
    }
    dirs::home_dir().map(|p| p.to_string_lossy().to_string())
}

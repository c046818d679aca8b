//! Capture current session state from a live window

use super::{SessionDocument, SessionPaneNode};
use crate::pane::PaneNode;
use crate::tab::TabManager;

/// Capture every tab of a window, in tab order
pub fn capture_session(tabs: &TabManager, window_width: i32, window_height: i32) -> SessionDocument {
    SessionDocument {
        window_width,
        window_height,
        tabs: tabs
            .tabs()
            .iter()
            .filter_map(|tab| tab.pane_manager.root())
            .map(capture_pane_node)
            .collect(),
    }
}

/// Recursively capture a pane tree node into a session-serializable form.
///
/// A pane whose working directory cannot be determined records the home
/// directory instead.
pub fn capture_pane_node(node: &PaneNode) -> SessionPaneNode {
    match node {
        PaneNode::Leaf(pane) => SessionPaneNode::Terminal {
            cwd: Some(pane.get_cwd().unwrap_or_else(home_dir)),
        },
        PaneNode::Split {
            orientation,
            position,
            first,
            second,
            ..
        } => SessionPaneNode::Paned {
            orientation: *orientation,
            position: Some(*position),
            child1: Some(Box::new(capture_pane_node(first))),
            child2: Some(Box::new(capture_pane_node(second))),
        },
    }
}

fn home_dir() -> String {
    dirs::home_dir()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::{Orientation, Pane};
    use crate::test_support::{FakeSurface, leaf};

    #[test]
    fn test_capture_preserves_child_order_and_position() {
        let tree = PaneNode::split(
            1,
            Orientation::Horizontal,
            250,
            PaneNode::leaf(Pane::new(
                1,
                Box::new(FakeSurface {
                    cwd: Some("/left".to_string()),
                }),
                None,
            )),
            PaneNode::leaf(Pane::new(
                2,
                Box::new(FakeSurface { cwd: None }),
                Some("/right-hint".to_string()),
            )),
        );

        let captured = capture_pane_node(&tree);
        assert_eq!(
            captured,
            SessionPaneNode::Paned {
                orientation: Orientation::Horizontal,
                position: Some(250),
                child1: Some(Box::new(SessionPaneNode::Terminal {
                    cwd: Some("/left".to_string())
                })),
                child2: Some(Box::new(SessionPaneNode::Terminal {
                    cwd: Some("/right-hint".to_string())
                })),
            }
        );
    }

    #[test]
    fn test_unknown_cwd_falls_back_to_home() {
        let captured = capture_pane_node(&leaf(1));
        let SessionPaneNode::Terminal { cwd } = captured else {
            panic!("expected terminal");
        };
        assert_eq!(cwd, Some(home_dir()));
    }
}

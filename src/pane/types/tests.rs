//! Tests for PaneBounds, Orientation and PaneNode traversal.

use super::bounds::PaneBounds;
use super::common::Orientation;
use super::pane_node::PaneNode;
use crate::test_support::leaf;

#[test]
fn test_orientation_parsing_is_lenient() {
    assert_eq!(
        Orientation::from("horizontal".to_string()),
        Orientation::Horizontal
    );
    assert_eq!(Orientation::from("vertical".to_string()), Orientation::Vertical);
    assert_eq!(Orientation::from("diagonal".to_string()), Orientation::Vertical);
    assert_eq!(String::from(Orientation::Horizontal), "horizontal");
}

#[test]
fn test_bounds_split_horizontal() {
    let bounds = PaneBounds::new(0, 0, 801, 600);
    let (left, right) = bounds.split(Orientation::Horizontal, 400, 1);
    assert_eq!(left, PaneBounds::new(0, 0, 400, 600));
    assert_eq!(right, PaneBounds::new(401, 0, 400, 600));
}

#[test]
fn test_bounds_split_clamps_position() {
    let bounds = PaneBounds::new(10, 20, 100, 50);
    let (top, bottom) = bounds.split(Orientation::Vertical, 500, 0);
    assert_eq!(top.height, 50);
    assert_eq!(bottom.height, 0);
    assert_eq!(bottom.y, 70);

    let (top, _) = bounds.split(Orientation::Vertical, -5, 0);
    assert_eq!(top.height, 0);
}

#[test]
fn test_traversal_is_preorder_first_before_second() {
    // Split(1, Split(2, 3)) then Split(Split(1,2),3) both visit 1,2,3
    let tree = PaneNode::split(
        10,
        Orientation::Horizontal,
        0,
        leaf(1),
        PaneNode::split(11, Orientation::Vertical, 0, leaf(2), leaf(3)),
    );
    assert_eq!(tree.all_pane_ids(), vec![1, 2, 3]);
    assert_eq!(tree.first_pane().id, 1);
    assert_eq!(tree.pane_count(), 3);
    assert_eq!(tree.depth(), 2);

    let tree = PaneNode::split(
        10,
        Orientation::Horizontal,
        0,
        PaneNode::split(11, Orientation::Vertical, 0, leaf(1), leaf(2)),
        leaf(3),
    );
    assert_eq!(tree.all_pane_ids(), vec![1, 2, 3]);
}

#[test]
fn test_navigate_wraps_both_ways() {
    let tree = PaneNode::split(
        10,
        Orientation::Horizontal,
        0,
        leaf(1),
        PaneNode::split(11, Orientation::Vertical, 0, leaf(2), leaf(3)),
    );
    assert_eq!(tree.navigate(1, 1), Some(2));
    assert_eq!(tree.navigate(3, 1), Some(1));
    assert_eq!(tree.navigate(1, -1), Some(3));
    assert_eq!(tree.navigate(2, 4), Some(3));
    // Unknown current pane falls back to the first
    assert_eq!(tree.navigate(99, 1), Some(1));
}

#[test]
fn test_navigate_single_leaf_returns_itself() {
    let tree = leaf(7);
    assert_eq!(tree.navigate(7, 1), Some(7));
    assert_eq!(tree.navigate(7, -1), Some(7));
}

#[test]
fn test_split_lookup_and_position() {
    let mut tree = PaneNode::split(
        10,
        Orientation::Horizontal,
        0,
        leaf(1),
        PaneNode::split(11, Orientation::Vertical, 0, leaf(2), leaf(3)),
    );

    assert!(tree.set_split_position(11, 120));
    assert_eq!(tree.find_split(11), Some((Orientation::Vertical, 120)));
    assert!(!tree.set_split_position(99, 5));

    tree.set_split_position(10, 300);
    let window = PaneBounds::new(0, 0, 801, 600);
    let (orientation, bounds) = tree.split_bounds(11, window, 1).unwrap();
    assert_eq!(orientation, Orientation::Vertical);
    assert_eq!(bounds, PaneBounds::new(301, 0, 500, 600));

    let panes = tree.calculate_bounds(window, 1);
    assert_eq!(panes.len(), 3);
    assert_eq!(panes[0], (1, PaneBounds::new(0, 0, 300, 600)));
    assert_eq!(panes[1], (2, PaneBounds::new(301, 0, 500, 120)));
    assert_eq!(panes[2], (3, PaneBounds::new(301, 121, 500, 479)));
}

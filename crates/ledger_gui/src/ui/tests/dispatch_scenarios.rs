//! Click, key and update dispatch through the component tree

use super::support::{area, log, tree, FixedLedgers, Tracer};
use crate::error::GuiError;
use crate::foundation::math::Coordinate2D;
use crate::input::MouseButton;

#[test]
fn test_earlier_sibling_consumes_overlapping_click() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    tree.register_component(root, Box::new(Tracer::new("a", area(0, 0, 10, 10), &log).consuming())).unwrap();
    tree.register_component(root, Box::new(Tracer::new("b", area(5, 5, 10, 10), &log).consuming())).unwrap();

    let mut notifications = Vec::new();
    let consumed = tree.dispatch_click_inside(
        root,
        Coordinate2D::new(7, 7),
        MouseButton::Left,
        &FixedLedgers::default(),
        &mut notifications,
    );

    assert!(consumed);
    assert_eq!(*log.borrow(), vec!["inside:a@7,7".to_string()]);
    assert!(notifications.is_empty());
}

#[test]
fn test_unconsumed_click_reaches_later_sibling_then_host() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    let host = tree.register_component(root, Box::new(Tracer::new("host", area(20, 20, 50, 50), &log))).unwrap();
    tree.register_component(host, Box::new(Tracer::new("a", area(0, 0, 10, 10), &log))).unwrap();
    tree.register_component(host, Box::new(Tracer::new("b", area(5, 5, 10, 10), &log))).unwrap();

    let consumed = tree.dispatch_click_inside(
        root,
        Coordinate2D::new(27, 27),
        MouseButton::Right,
        &FixedLedgers::default(),
        &mut Vec::new(),
    );

    assert!(!consumed);
    assert_eq!(
        *log.borrow(),
        vec!["inside:a@7,7".to_string(), "inside:b@2,2".to_string(), "inside:host@7,7".to_string()]
    );
}

#[test]
fn test_hidden_children_are_skipped() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    let hidden = tree.register_component(root, Box::new(Tracer::new("hidden", area(0, 0, 10, 10), &log).consuming())).unwrap();
    tree.component_mut(hidden).unwrap().state_mut().set_visible(false);

    let consumed = tree.dispatch_click_inside(
        root,
        Coordinate2D::new(3, 3),
        MouseButton::Left,
        &FixedLedgers::default(),
        &mut Vec::new(),
    );

    assert!(!consumed);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_forced_input_child_sees_clicks_outside_itself() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    tree.register_component(root, Box::new(Tracer::new("menu", area(50, 50, 20, 20), &log).forced().consuming())).unwrap();

    let consumed = tree.dispatch_click_inside(
        root,
        Coordinate2D::new(10, 12),
        MouseButton::Left,
        &FixedLedgers::default(),
        &mut Vec::new(),
    );

    assert!(consumed);
    assert_eq!(*log.borrow(), vec!["outside:menu@-40,-38".to_string()]);
}

#[test]
fn test_forced_input_is_or_over_all_descendants() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    let panel = tree.register_component(root, Box::new(Tracer::new("panel", area(0, 0, 50, 50), &log))).unwrap();

    assert!(!tree.children_require_forced_input(panel));
    assert!(!tree.requires_forced_input(root));

    let dropdown = tree.register_component(panel, Box::new(Tracer::new("dropdown", area(0, 0, 5, 5), &log).forced())).unwrap();
    assert!(tree.children_require_forced_input(panel));
    assert!(tree.requires_forced_input(root));

    tree.component_mut(dropdown).unwrap().state_mut().set_visible(false);
    assert!(tree.children_require_forced_input(panel));
    assert!(tree.requires_forced_input(root));
}

#[test]
fn test_hidden_forced_child_gets_no_outside_click() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    let panel = tree.register_component(root, Box::new(Tracer::new("panel", area(0, 0, 50, 50), &log))).unwrap();
    let dropdown = tree
        .register_component(panel, Box::new(Tracer::new("dropdown", area(0, 0, 5, 5), &log).forced().consuming()))
        .unwrap();
    tree.component_mut(dropdown).unwrap().state_mut().set_visible(false);

    let consumed = tree.dispatch_click_inside(
        root,
        Coordinate2D::new(120, 120),
        MouseButton::Left,
        &FixedLedgers::default(),
        &mut Vec::new(),
    );

    assert!(!consumed);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_click_in_scissor_band_skips_children() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    let frame = tree
        .register_component(root, Box::new(Tracer::new("frame", area(20, 20, 30, 30), &log).clipped(4)))
        .unwrap();
    tree.register_component(frame, Box::new(Tracer::new("slot", area(0, 0, 16, 16), &log).consuming())).unwrap();

    let ledgers = FixedLedgers::default();
    let consumed = tree.dispatch_click_inside(root, Coordinate2D::new(21, 21), MouseButton::Left, &ledgers, &mut Vec::new());

    assert!(!consumed);
    assert_eq!(*log.borrow(), vec!["inside:frame@1,1".to_string()]);

    log.borrow_mut().clear();
    let consumed = tree.dispatch_click_inside(root, Coordinate2D::new(25, 25), MouseButton::Left, &ledgers, &mut Vec::new());

    assert!(consumed);
    assert_eq!(*log.borrow(), vec!["inside:slot@5,5".to_string()]);
}

#[test]
fn test_click_in_scissor_band_is_outside_for_forced_children() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    let frame = tree
        .register_component(root, Box::new(Tracer::new("frame", area(20, 20, 30, 30), &log).clipped(4)))
        .unwrap();
    tree.register_component(frame, Box::new(Tracer::new("menu", area(0, 0, 16, 16), &log).forced())).unwrap();

    tree.dispatch_click_inside(root, Coordinate2D::new(22, 21), MouseButton::Left, &FixedLedgers::default(), &mut Vec::new());

    assert_eq!(
        *log.borrow(),
        vec!["outside:menu@2,1".to_string(), "inside:frame@2,1".to_string()]
    );
}

#[test]
fn test_duplicate_id_is_rejected_and_host_unchanged() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    tree.register_component(root, Box::new(Tracer::new("slot", area(0, 0, 5, 5), &log))).unwrap();

    let result = tree.register_component(root, Box::new(Tracer::new("slot", area(9, 9, 5, 5), &log)));

    assert!(matches!(result, Err(GuiError::DuplicateComponentId { ref id, .. }) if id == "slot"));
    assert_eq!(tree.children(root).len(), 1);
    assert_eq!(tree.len(), 2);
}

#[test]
fn test_empty_id_is_rejected() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    let result = tree.register_component(root, Box::new(Tracer::new("", area(0, 0, 5, 5), &log)));
    assert!(matches!(result, Err(GuiError::EmptyComponentId)));
}

#[test]
fn test_owner_is_bound_on_registration() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    let key = tree.register_component(root, Box::new(Tracer::new("bound", area(0, 0, 5, 5), &log))).unwrap();

    let state = tree.component_mut(key).unwrap().state_mut();
    assert_eq!(state.owner(), Some(key));
    assert!(matches!(state.bind_owner(root), Err(GuiError::OwnerAlreadyBound(owner)) if owner == key));
}

#[test]
fn test_root_anchor_composes_every_ancestor() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    let outer = tree.register_component(root, Box::new(Tracer::new("outer", area(10, 20, 100, 100), &log))).unwrap();
    let inner = tree.register_component(outer, Box::new(Tracer::new("inner", area(5, 7, 40, 40), &log))).unwrap();
    let leaf = tree.register_component(inner, Box::new(Tracer::new("leaf", area(1, 1, 4, 4), &log))).unwrap();
    let ledgers = FixedLedgers::default();

    assert_eq!(tree.root_anchor(leaf, &ledgers), Some(Coordinate2D::new(16, 28)));
    assert_eq!(tree.occupied_area(leaf, &ledgers), Some(area(16, 28, 4, 4)));
    assert_eq!(tree.find_path(&["outer", "inner", "leaf"]), Some(leaf));
    assert_eq!(tree.parent(leaf), Some(inner));
}

#[test]
fn test_keys_and_updates_run_parents_first() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    let outer = tree.register_component(root, Box::new(Tracer::new("outer", area(0, 0, 50, 50), &log))).unwrap();
    tree.register_component(outer, Box::new(Tracer::new("inner", area(0, 0, 5, 5), &log))).unwrap();
    tree.register_component(root, Box::new(Tracer::new("sibling", area(60, 0, 5, 5), &log))).unwrap();

    tree.dispatch_key_typed(root, 'e');
    tree.update(Coordinate2D::ORIGIN, 0.5);

    assert_eq!(
        *log.borrow(),
        vec![
            "key:outer:e",
            "key:inner:e",
            "key:sibling:e",
            "update:outer",
            "animate:outer",
            "update:inner",
            "animate:inner",
            "update:sibling",
            "animate:sibling",
        ]
    );
}

#[test]
fn test_keys_reach_hidden_components_too() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    let hidden = tree.register_component(root, Box::new(Tracer::new("hidden", area(0, 0, 5, 5), &log))).unwrap();
    tree.component_mut(hidden).unwrap().state_mut().set_visible(false);

    tree.dispatch_key_typed(root, 'q');
    assert_eq!(*log.borrow(), vec!["key:hidden:q"]);
}

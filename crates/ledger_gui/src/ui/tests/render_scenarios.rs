//! Two-pass rendering and scissoring across a screen

use super::support::{area, log, tree, FixedLedgers, Tracer};
use crate::config::GuiConfig;
use crate::foundation::math::{colors, Coordinate2D, Plane};
use crate::ui::backend::CornerStyle;
use crate::ui::ledger::LedgerSide;
use crate::ui::manager::GuiScreen;
use crate::ui::rendering::{CommandRecorder, DrawContext, RenderCommand};
use crate::ui::resources::{FontHandle, TextureResource};
use crate::ui::widgets::{ComponentBorder, ComponentImage, ComponentLabel};

#[test]
fn test_every_background_is_drawn_before_any_foreground() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    let outer = tree.register_component(root, Box::new(Tracer::new("outer", area(10, 10, 50, 50), &log))).unwrap();
    tree.register_component(outer, Box::new(Tracer::new("inner", area(2, 3, 10, 10), &log))).unwrap();
    tree.register_component(root, Box::new(Tracer::new("sibling", area(80, 0, 10, 10), &log))).unwrap();
    let ledgers = FixedLedgers::default();

    let mut recorder = CommandRecorder::new();
    let mut ctx = DrawContext::new(&mut recorder, Coordinate2D::ORIGIN);
    tree.draw_background(root, &ledgers, &mut ctx);
    tree.draw_foreground(root, &ledgers, &mut ctx);

    assert_eq!(
        *log.borrow(),
        vec![
            "background:outer@10,10",
            "background:inner@12,13",
            "background:sibling@80,0",
            "foreground:outer@10,10",
            "foreground:inner@12,13",
            "foreground:sibling@80,0",
        ]
    );
}

#[test]
fn test_hidden_subtree_is_not_drawn() {
    let log = log();
    let mut tree = tree();
    let root = tree.root();
    let outer = tree.register_component(root, Box::new(Tracer::new("outer", area(10, 10, 50, 50), &log))).unwrap();
    tree.register_component(outer, Box::new(Tracer::new("inner", area(2, 3, 10, 10), &log))).unwrap();
    tree.component_mut(outer).unwrap().state_mut().set_visible(false);

    let mut recorder = CommandRecorder::new();
    let mut ctx = DrawContext::new(&mut recorder, Coordinate2D::ORIGIN);
    tree.draw_background(root, &FixedLedgers::default(), &mut ctx);

    assert!(log.borrow().is_empty());
}

#[test]
fn test_labels_land_on_top_of_later_borders() {
    let mut screen = GuiScreen::new("chest", GuiConfig::default()).unwrap();
    let root = screen.root();
    let font = FontHandle::new("default", 8);
    screen
        .register_component(root, ComponentLabel::new("title", Coordinate2D::new(8, 6), 80, font, colors::black(), "Chest"))
        .unwrap();
    screen
        .register_component(root, ComponentBorder::new("frame", Plane::new(Coordinate2D::new(4, 4), 168, 20), colors::white()))
        .unwrap();

    let mut recorder = CommandRecorder::new();
    screen.render(&mut recorder);

    assert_eq!(
        recorder.commands(),
        &[
            RenderCommand::BorderedRect {
                area: Plane::new(Coordinate2D::new(129, 41), 168, 20),
                color: colors::white(),
                corners: [CornerStyle::Outwards; 4],
            },
            RenderCommand::Label {
                position: Coordinate2D::new(133, 43),
                color: colors::black(),
                font: "default".to_string(),
                text: "Chest".to_string(),
            },
        ]
    );
}

#[test]
fn test_ledger_children_are_scissored() {
    let mut config = GuiConfig::default();
    config.resources.textures.push(TextureResource::new("icons/info", 16, 16));
    config.resources.textures.push(TextureResource::new("gauge", 8, 40));
    let mut screen = GuiScreen::new("machine", config).unwrap();

    let ledger = screen
        .build_ledger("info", LedgerSide::Right, "icons/info")
        .unwrap()
        .with_header("Info")
        .with_max_size(120, 80);
    let info = screen.register_ledger(ledger).unwrap();
    let gauge = screen.catalog().texture("gauge").unwrap();
    screen.register_component(info, ComponentImage::new("gauge", Coordinate2D::new(6, 30), gauge)).unwrap();

    screen.set_ledger_open(info, true).unwrap();
    for _ in 0..40 {
        screen.update(1.0);
    }

    let mut recorder = CommandRecorder::new();
    screen.render(&mut recorder);
    let commands = recorder.commands();

    let gauge_at = commands
        .iter()
        .position(|command| matches!(command, RenderCommand::Image { texture, .. } if texture == "gauge"))
        .unwrap();
    let scissor = Plane::new(Coordinate2D::new(301, 45), 112, 72);

    assert_eq!(commands[gauge_at - 1], RenderCommand::EnableClip(scissor));
    assert_eq!(commands[gauge_at + 1], RenderCommand::DisableClip);
    assert_eq!(
        commands[gauge_at],
        RenderCommand::Image { position: Coordinate2D::new(303, 71), texture: "gauge".to_string() }
    );
    assert_eq!(recorder.images(), vec!["icons/info", "gauge"]);
}

#[test]
fn test_closed_ledger_scissors_children_to_inner_area() {
    let mut config = GuiConfig::default();
    config.resources.textures.push(TextureResource::new("icons/info", 16, 16));
    let mut screen = GuiScreen::new("machine", config).unwrap();
    let ledger = screen.build_ledger("info", LedgerSide::Right, "icons/info").unwrap();
    screen.register_ledger(ledger).unwrap();

    let mut recorder = CommandRecorder::new();
    screen.render(&mut recorder);

    // 26x26 closed ledger at (297, 41) leaves an 18x18 area for children
    assert!(recorder
        .commands()
        .contains(&RenderCommand::EnableClip(Plane::new(Coordinate2D::new(301, 45), 18, 18))));
}

#[test]
fn test_tooltip_comes_from_innermost_component_under_mouse() {
    let mut screen = GuiScreen::new("chest", GuiConfig::default()).unwrap();
    let root = screen.root();
    let slot = TextureResource::new("slot", 16, 16);
    screen
        .register_component(
            root,
            ComponentImage::new("slot", Coordinate2D::new(10, 10), slot).with_tooltip(vec!["Empty slot".to_string()]),
        )
        .unwrap();

    screen.update_mouse_position(137, 49);
    assert_eq!(screen.hovered_tooltip(), vec!["Empty slot".to_string()]);

    screen.update_mouse_position(160, 80);
    assert!(screen.hovered_tooltip().is_empty());
}

#[test]
fn test_tooltip_ignores_scissored_part_of_ledger_child() {
    let mut config = GuiConfig::default();
    config.resources.textures.push(TextureResource::new("icons/info", 16, 16));
    let mut screen = GuiScreen::new("machine", config).unwrap();
    let ledger = screen.build_ledger("info", LedgerSide::Right, "icons/info").unwrap();
    let info = screen.register_ledger(ledger).unwrap();
    let gauge = TextureResource::new("gauge", 16, 16);
    screen
        .register_component(
            info,
            ComponentImage::new("gauge", Coordinate2D::ORIGIN, gauge).with_tooltip(vec!["Gauge".to_string()]),
        )
        .unwrap();

    // Band between the closed ledger edge (297, 41) and its scissor (301, 45)
    screen.update_mouse_position(298, 42);
    assert!(screen.hovered_tooltip().is_empty());

    screen.update_mouse_position(305, 50);
    assert_eq!(screen.hovered_tooltip(), vec!["Gauge".to_string()]);
}

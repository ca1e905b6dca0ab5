//! End-to-end editing session through the public API.
//!
//! Paints with pointer events, walks history, moves the cube through a saved
//! document and a block model, recolors it and lays out the printable net.

use std::cell::RefCell;
use std::rc::Rc;

use pixelcube_config::{EditorConfig, NetConfig};
use pixelcube_painting::{
    Color, DrawCommand, EditorEvent, EventBus, EventKind, FaceName, NetLayout, PaintingPipeline,
    PixelFace, PointerEvent, ReplaceScope,
};

const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);

fn fresh_pipeline() -> PaintingPipeline {
    let mut pipeline = PaintingPipeline::from_config(&EditorConfig::default(), EventBus::new());
    pipeline.model_mut().set_current_face(FaceName::Front);
    pipeline.model_mut().set_current_color(RED);
    pipeline
}

/// Drag across the first three cells of the top row (15px cells)
fn drag_top_row(pipeline: &mut PaintingPipeline) {
    pipeline.handle_pointer(PointerEvent::down(7.0, 7.0));
    pipeline.handle_pointer(PointerEvent::moved(22.0, 7.0));
    pipeline.handle_pointer(PointerEvent::moved(37.0, 7.0));
    pipeline.handle_pointer(PointerEvent::up(37.0, 7.0));
}

#[test]
fn drag_undo_redo_round_trip() {
    let mut pipeline = fresh_pipeline();
    drag_top_row(&mut pipeline);

    assert_eq!(pipeline.model().face(FaceName::Front).count(RED), 3);
    assert_eq!(pipeline.history().undo_count(), 2);

    assert!(pipeline.undo());
    assert_eq!(pipeline.model().face(FaceName::Front).count(RED), 0);
    assert!(pipeline.redo());
    assert_eq!(pipeline.model().get_pixel(FaceName::Front, 2, 0), Some(RED));
    assert!(!pipeline.can_redo());
}

#[test]
fn document_import_then_replace_then_net() {
    let mut source = fresh_pipeline();
    drag_top_row(&mut source);
    let json = source
        .export_document()
        .with_export_date("2024-05-01T12:00:00.000Z")
        .to_json_pretty()
        .unwrap();

    let mut target = fresh_pipeline();
    target.import_document(&json).unwrap();
    assert_eq!(target.model().all_faces(), source.model().all_faces());

    let replaced = target.replace_color(RED, BLUE, ReplaceScope::AllFaces);
    assert_eq!(replaced, 3);
    assert_eq!(target.history().undo_count(), 3);

    let config = NetConfig::default();
    let layout = NetLayout::from_config(target.model().all_faces(), &config).unwrap();
    let metrics = layout.metrics;
    assert_eq!(layout.width, 4 * metrics.face_px + metrics.tab_px);
    assert_eq!(layout.height, 3 * metrics.face_px + 2 * metrics.tab_px);
    assert_eq!(layout.placements.len(), 6);

    let front = layout.placement(FaceName::Front).unwrap();
    let canvas = layout.to_canvas();
    assert_eq!(canvas.get_pixel(front.origin.x, front.origin.y), Some(BLUE));

    let commands = layout.draw_commands();
    assert_eq!(commands.len(), 1 + 6 + 2 * layout.tabs.len());
    match commands.last() {
        Some(DrawCommand::StrokePath { width, color, .. }) => {
            assert_eq!(*width, config.cut_line_width);
            assert_eq!(*color, Color::BLACK);
        }
        other => panic!("expected a cut line last, got {other:?}"),
    }

    // Undoing the replace brings the red stroke back
    assert!(target.undo());
    assert_eq!(target.model().face(FaceName::Front).count(RED), 3);
}

#[test]
fn block_import_replaces_every_face() {
    let mut pipeline = fresh_pipeline();
    drag_top_row(&mut pipeline);

    let model = r#"{
        "parent": "minecraft:block/cube_column",
        "textures": { "end": "minecraft:block/oak_log_top", "side": "minecraft:block/oak_log" }
    }"#;
    let side = Color::rgb(0x6B, 0x51, 0x32);
    pipeline
        .import_block(model, |file| match file {
            "oak_log.png" => Some(PixelFace::filled(side)),
            _ => None,
        })
        .unwrap();

    let faces = pipeline.model().all_faces();
    assert_eq!(faces.front.count(side), 256);
    assert_eq!(faces.right.count(side), 256);
    assert_eq!(faces.top.count(Color::WHITE), 256);
    assert_eq!(pipeline.history().undo_count(), 3);

    assert!(pipeline.undo());
    assert_eq!(pipeline.model().face(FaceName::Front).count(RED), 3);
}

#[test]
fn undo_announces_restored_state() {
    let bus = EventBus::new();
    let restored = Rc::new(RefCell::new(0));
    let count = Rc::clone(&restored);
    bus.subscribe(EventKind::StateRestored, move |event| {
        if let EditorEvent::StateRestored { .. } = event {
            *count.borrow_mut() += 1;
        }
    });

    let mut pipeline = PaintingPipeline::new(bus);
    pipeline.model_mut().set_current_color(RED);
    drag_top_row(&mut pipeline);
    pipeline.undo();
    pipeline.redo();

    assert_eq!(*restored.borrow(), 2);
}

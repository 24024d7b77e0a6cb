use bloomgrid::{Catalog, GalleryConfig, GridLayout, ScrollSurface, Viewport};
use bloomgrid::{FrameQueue, FrameScheduler, FRICTION, STOP_THRESHOLD, WHEEL_GAIN};
use anyhow::Result;
use egui::{pos2, vec2, Vec2};
use std::fs;

const EPSILON: f32 = 1e-3;

fn approx_eq(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

/// Surface mounted mid-content so drags in any direction stay in range.
fn mounted_surface() -> ScrollSurface<FrameQueue> {
    let mut viewport = Viewport::with_max_offset(vec2(2_000.0, 2_000.0));
    viewport.scroll_to(vec2(1_000.0, 1_000.0));
    let mut surface = ScrollSurface::new(FrameQueue::new());
    surface.mount(viewport);
    surface
}

#[test]
fn test_drag_scroll_matches_negated_pointer_path() {
    let mut surface = mounted_surface();
    let start = surface.offset();

    let path = [
        pos2(200.0, 200.0),
        pos2(190.0, 215.0),
        pos2(160.0, 215.0),
        pos2(175.0, 180.0),
        pos2(120.0, 140.0),
    ];

    surface.on_pointer_down(path[0]);
    let mut total = Vec2::ZERO;
    for window in path.windows(2) {
        total += window[1] - window[0];
        surface.on_pointer_move(window[1]);
    }

    assert!(approx_eq(surface.offset() - start, -total));
    assert!(!surface.interaction().is_animating(), "no momentum while dragging");
}

#[test]
fn test_release_seeds_velocity_from_last_delta() {
    let mut surface = mounted_surface();
    surface.on_pointer_down(pos2(0.0, 0.0));
    surface.on_pointer_move(pos2(30.0, 30.0));
    surface.on_pointer_move(pos2(37.0, 25.0));
    surface.on_pointer_up();

    assert_eq!(surface.interaction().velocity(), vec2(-7.0, 5.0));
    assert!(surface.interaction().is_animating());
    assert!(!surface.captures_pointer());
}

#[test]
fn test_momentum_decays_geometrically_and_stops_below_threshold() {
    let mut surface = mounted_surface();
    let v0 = vec2(-12.0, 30.0);
    surface.on_pointer_down(pos2(100.0, 100.0));
    surface.on_pointer_move(pos2(100.0, 100.0) - v0);
    surface.on_pointer_up();
    assert_eq!(surface.interaction().velocity(), v0);

    let mut ticks = 0;
    while surface.interaction().is_animating() {
        let before = surface.offset();
        let velocity_before = surface.interaction().velocity();
        assert_eq!(surface.run_due_frames(), 1);
        ticks += 1;

        // Each tick applies the velocity it started with
        assert!(approx_eq(surface.offset() - before, velocity_before));

        let expected = v0 * FRICTION.powi(ticks);
        assert!(approx_eq(surface.interaction().velocity(), expected));

        let v = surface.interaction().velocity();
        let settled = v.x.abs() <= STOP_THRESHOLD && v.y.abs() <= STOP_THRESHOLD;
        assert_eq!(surface.interaction().is_animating(), !settled);
        assert!(ticks < 1_000, "momentum must terminate");
    }

    // 30 * 0.95^n <= 0.5 first holds at n = 80
    assert_eq!(ticks, 80);
    assert_eq!(surface.interaction().animation(), None);
    assert_eq!(surface.scheduler().pending_count(), 0);
}

#[test]
fn test_pointer_down_halts_momentum_immediately() {
    let mut surface = mounted_surface();
    surface.on_wheel(200.0);
    surface.run_due_frames();
    surface.run_due_frames();
    assert!(surface.interaction().is_animating());

    let stale = surface.interaction().animation();
    surface.on_pointer_down(pos2(5.0, 5.0));
    let frozen = surface.offset();

    assert!(!surface.interaction().is_animating());
    assert_eq!(surface.scheduler().pending_count(), 0);

    // Even if the old handle were delivered it would not move the viewport
    if let Some(handle) = stale {
        surface.on_animation_frame(handle);
    }
    for _ in 0..10 {
        surface.run_due_frames();
    }
    assert_eq!(surface.offset(), frozen);
}

#[test]
fn test_wheel_accumulates_velocity() {
    let mut surface = mounted_surface();
    surface.on_wheel(10.0);
    surface.on_wheel(10.0);

    assert_eq!(surface.interaction().velocity(), vec2(0.0, 10.0 * WHEEL_GAIN * 2.0));
    assert_eq!(surface.interaction().velocity().y, 10.0);
    // Restarting cancels the earlier request, leaving one tick in flight
    assert_eq!(surface.scheduler().pending_count(), 1);
}

#[test]
fn test_scenario_drag_then_glide() {
    let mut surface = mounted_surface();
    let start = surface.offset();

    surface.on_pointer_down(pos2(100.0, 100.0));
    surface.on_pointer_move(pos2(90.0, 110.0));
    surface.on_pointer_up();

    assert_eq!(surface.offset() - start, vec2(10.0, -10.0));
    assert_eq!(surface.interaction().velocity(), vec2(10.0, -10.0));
    assert!(surface.interaction().is_animating());

    let released_at = surface.offset();
    let mut frames = 0;
    while surface.run_due_frames() > 0 {
        frames += 1;
    }

    // 10 * 0.95^n <= 0.5 first holds at n = 59
    assert_eq!(frames, 59);
    let glide = surface.offset() - released_at;
    let expected = 10.0 * (1.0 - FRICTION.powi(59)) / (1.0 - FRICTION);
    assert!((glide.x - expected).abs() < 0.01);
    assert!((glide.y + expected).abs() < 0.01);
}

#[test]
fn test_cancel_is_idempotent_and_scheduler_agnostic() {
    let mut surface = mounted_surface();
    surface.cancel_momentum();
    surface.cancel_momentum();
    assert_eq!(surface.scheduler().pending_count(), 0);

    let handle = surface.scheduler_mut().request_frame();
    surface.scheduler_mut().cancel_frame(handle);
    surface.scheduler_mut().cancel_frame(handle);
    assert!(surface.scheduler_mut().take_due().is_empty());
}

#[test]
fn test_momentum_stops_at_content_edge_without_overshoot() {
    let mut surface = ScrollSurface::new(FrameQueue::new());
    surface.mount(Viewport::with_max_offset(vec2(0.0, 100.0)));

    surface.on_wheel(400.0);
    while surface.run_due_frames() > 0 {}

    assert_eq!(surface.offset(), vec2(0.0, 100.0));
}

#[test]
fn test_catalog_file_feeds_grid() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("flowers.json");
    fs::write(
        &path,
        r#"[
            {"id": 1, "name": "Rose", "imageUrl": "images/rose.png"},
            {"id": 2, "name": "Tulip", "imageUrl": "https://example.com/tulip.png"},
            {"id": 3, "name": "Iris", "imageUrl": ""}
        ]"#,
    )?;

    let catalog = Catalog::load(&path)?;
    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.flowers()[0].resolve_image_path(dir.path()),
        Some(dir.path().join("images/rose.png"))
    );

    let layout = GridLayout::default();
    let visible = layout.visible_cards(Vec2::ZERO, vec2(1280.0, 800.0), catalog.len());
    assert_eq!(visible, vec![0, 1, 2]);
    Ok(())
}

#[test]
fn test_config_file_resolves_relative_catalog() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("gallery.json");
    fs::write(&path, r#"{"catalog": "flowers.json", "columns": 3}"#)?;

    let config = GalleryConfig::load(&path)?;
    assert_eq!(config.catalog, Some(dir.path().join("flowers.json")));
    assert_eq!(config.columns, 3);
    assert_eq!(config.window_size, [1280.0, 800.0]);
    Ok(())
}

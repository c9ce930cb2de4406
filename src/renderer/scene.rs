//! Frame composition
//!
//! Turns a `FrameView` into one triangle list, back to front: sky, clouds,
//! pipes, bird, phase tint.

use glam::Vec2;

use super::shapes::{circle, gradient_rect, rect, rotate_about, triangle};
use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{BirdView, FrameView, GamePhase, PipeView};

/// Cap drawn at the mouth of each pipe
const CAP_HEIGHT: f32 = 20.0;
const CAP_OVERHANG: f32 = 5.0;
/// Thickness of highlight/shadow strips
const EDGE: f32 = 3.0;

/// Background clouds as (x, y, size)
const CLOUDS: [(f32, f32, f32); 4] = [
    (100.0, 50.0, 30.0),
    (250.0, 80.0, 25.0),
    (350.0, 40.0, 35.0),
    (50.0, 120.0, 20.0),
];
/// Clouds wrap this far past the right edge
const CLOUD_WRAP_MARGIN: f32 = 100.0;

/// Vertical wing travel per unit of flap
const WING_TRAVEL: f32 = 3.0;

/// Build every vertex for one frame, in playfield coordinates
pub fn build_scene(frame: &FrameView, settings: &Settings) -> Vec<Vertex> {
    let segments = settings.quality.circle_segments();
    let mut verts = Vec::with_capacity(1024);

    background(&mut verts, frame, settings);
    clouds(&mut verts, frame, settings, segments);
    for pipe in &frame.pipes {
        pipe_vertices(&mut verts, pipe);
    }
    bird_vertices(&mut verts, &frame.bird, settings, segments);
    overlay(&mut verts, frame, settings);

    verts
}

fn background(verts: &mut Vec<Vertex>, frame: &FrameView, settings: &Settings) {
    let size = Vec2::new(frame.width, frame.height);
    if settings.high_contrast {
        verts.extend(rect(Vec2::ZERO, size, colors::SKY_TOP));
    } else {
        verts.extend(gradient_rect(
            Vec2::ZERO,
            size,
            colors::SKY_TOP,
            colors::SKY_BOTTOM,
        ));
    }
}

/// Screen x of a cloud for the current scroll offset
///
/// Remainder keeps the sign of the dividend, so clouds slide off the left
/// edge before reappearing on the right.
pub fn cloud_x(base_x: f32, scroll: f32, width: f32) -> f32 {
    (base_x - scroll) % (width + CLOUD_WRAP_MARGIN)
}

fn clouds(verts: &mut Vec<Vertex>, frame: &FrameView, settings: &Settings, segments: u32) {
    for &(cx, cy, size) in CLOUDS.iter().take(settings.effective_clouds()) {
        let x = cloud_x(cx, frame.scroll, frame.width);
        // Four overlapping puffs
        for (dx, dy, r) in [
            (0.0, 0.0, 0.5),
            (0.3, 0.0, 0.7),
            (0.6, 0.0, 0.5),
            (0.3, -0.3, 0.6),
        ] {
            let center = Vec2::new(x + size * dx, cy + size * dy);
            verts.extend(circle(center, size * r, colors::CLOUD, segments));
        }
    }
}

fn pipe_vertices(verts: &mut Vec<Vertex>, pipe: &PipeView) {
    let x = pipe.x;
    let w = pipe.width;

    // Bodies
    verts.extend(rect(Vec2::new(x, 0.0), Vec2::new(w, pipe.top_height), colors::PIPE));
    verts.extend(rect(
        Vec2::new(x, pipe.bottom_y),
        Vec2::new(w, pipe.bottom_height),
        colors::PIPE,
    ));

    // Caps at the gap edges
    cap(verts, x, w, pipe.top_height - CAP_HEIGHT);
    cap(verts, x, w, pipe.bottom_y);

    // Side shading
    for (y, h) in [(0.0, pipe.top_height), (pipe.bottom_y, pipe.bottom_height)] {
        verts.extend(rect(
            Vec2::new(x, y),
            Vec2::new(EDGE, h),
            colors::PIPE_SIDE_LIGHT,
        ));
        verts.extend(rect(
            Vec2::new(x + w - EDGE, y),
            Vec2::new(EDGE, h),
            colors::PIPE_SIDE_DARK,
        ));
    }
}

fn cap(verts: &mut Vec<Vertex>, x: f32, width: f32, y: f32) {
    let min = Vec2::new(x - CAP_OVERHANG, y);
    let cap_w = width + CAP_OVERHANG * 2.0;
    verts.extend(rect(min, Vec2::new(cap_w, CAP_HEIGHT), colors::PIPE_CAP));
    verts.extend(rect(min, Vec2::new(cap_w, EDGE), colors::PIPE_HIGHLIGHT));
    verts.extend(rect(
        Vec2::new(min.x, y + CAP_HEIGHT - EDGE),
        Vec2::new(cap_w, EDGE),
        colors::PIPE_SHADOW,
    ));
}

fn bird_vertices(verts: &mut Vec<Vertex>, bird: &BirdView, settings: &Settings, segments: u32) {
    let size = Vec2::new(bird.width, bird.height);
    let min = Vec2::new(bird.x, bird.y);
    let center = min + size / 2.0;

    let mut body = rect(min, size, colors::BIRD);

    let wing_offset = if settings.effective_wing_animation() {
        bird.wing_flap * WING_TRAVEL
    } else {
        0.0
    };
    body.extend(rect(
        min + Vec2::new(5.0, 5.0 - wing_offset),
        Vec2::new(10.0, 8.0),
        colors::WING,
    ));

    // Eye
    body.extend(circle(min + Vec2::new(12.0, 6.0), 3.0, colors::EYE, segments));
    body.extend(circle(min + Vec2::new(13.0, 6.0), 1.5, colors::PUPIL, segments));

    // Beak pokes out of the leading edge
    let beak_x = min.x + size.x;
    body.extend(triangle(
        Vec2::new(beak_x, center.y - 2.0),
        Vec2::new(beak_x + 8.0, center.y),
        Vec2::new(beak_x, center.y + 2.0),
        colors::BEAK,
    ));

    rotate_about(&mut body, center, bird.rotation.to_radians());
    verts.extend(body);
}

fn overlay(verts: &mut Vec<Vertex>, frame: &FrameView, settings: &Settings) {
    let mut tint = match frame.hud.phase {
        GamePhase::Start => colors::START_TINT,
        GamePhase::GameOver => colors::GAME_OVER_TINT,
        GamePhase::Playing => return,
    };
    if settings.high_contrast {
        tint[3] = (tint[3] * 2.0).min(1.0);
    }
    verts.extend(rect(
        Vec2::ZERO,
        Vec2::new(frame.width, frame.height),
        tint,
    ));
}

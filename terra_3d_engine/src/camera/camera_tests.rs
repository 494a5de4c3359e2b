use super::*;
use glam::{Mat4, Vec3};

// ============================================================================
// Viewport
// ============================================================================

#[test]
fn test_default_viewport() {
    let camera = Camera::new();
    assert_eq!(camera.viewport_size(), (800.0, 600.0));
}

#[test]
fn test_resize_updates_projection() {
    let mut camera = Camera::new();
    let before = camera.projection_matrix();
    camera.set_viewport_size(1920.0, 1080.0);
    assert_eq!(camera.viewport_size(), (1920.0, 1080.0));
    assert_ne!(camera.projection_matrix(), before);
}

#[test]
fn test_non_positive_resize_is_ignored() {
    let mut camera = Camera::new();
    let before = camera.clone();

    camera.set_viewport_size(0.0, 600.0);
    camera.set_viewport_size(800.0, 0.0);
    camera.set_viewport_size(-100.0, -50.0);

    assert_eq!(camera, before);
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_motion_without_press_is_noop() {
    let mut camera = Camera::new();
    let before = camera.clone();
    camera.mouse_motion_event(120.0, 80.0);
    assert_eq!(camera, before);
}

#[test]
fn test_drag_orbits_camera() {
    let mut camera = Camera::new();
    let before = camera.position();

    camera.mouse_button_event(100.0, 100.0);
    camera.mouse_motion_event(150.0, 100.0);

    assert!(!camera.position().abs_diff_eq(before, 1e-6));
    // Dragging orbits; the distance to the target is unchanged.
    let orbit_distance = camera.position().distance(camera.target());
    assert!((orbit_distance - camera.distance()).abs() < 1e-4);
}

#[test]
fn test_drag_reanchors_each_motion() {
    let mut first = Camera::new();
    first.mouse_button_event(0.0, 0.0);
    first.mouse_motion_event(50.0, 0.0);
    first.mouse_motion_event(100.0, 0.0);

    let mut second = Camera::new();
    second.mouse_button_event(0.0, 0.0);
    second.mouse_motion_event(100.0, 0.0);

    // Two 50px deltas add up to one 100px delta.
    assert!(first.position().abs_diff_eq(second.position(), 1e-5));
}

#[test]
fn test_drag_pitch_is_clamped() {
    let mut camera = Camera::new();
    camera.mouse_button_event(0.0, 0.0);
    camera.mouse_motion_event(0.0, -100_000.0);

    // Even an extreme drag keeps the eye off the pole.
    let up = (camera.position() - camera.target()).normalize();
    assert!(up.y < 1.0 - 1e-4);
}

#[test]
fn test_scroll_dollies_and_clamps() {
    let mut camera = Camera::new();
    let start = camera.distance();

    camera.mouse_scroll_event(0.0, 1.0);
    assert!(camera.distance() < start);

    camera.mouse_scroll_event(0.0, -1.0);
    assert!((camera.distance() - start).abs() < 1e-4);

    for _ in 0..200 {
        camera.mouse_scroll_event(0.0, 1.0);
    }
    assert_eq!(camera.distance(), 0.5);

    for _ in 0..200 {
        camera.mouse_scroll_event(0.0, -1.0);
    }
    assert_eq!(camera.distance(), 500.0);
}

#[test]
fn test_zero_scroll_is_noop() {
    let mut camera = Camera::new();
    let before = camera.clone();
    camera.mouse_scroll_event(0.0, 0.0);
    assert_eq!(camera, before);
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_key_release_is_ignored() {
    let mut camera = Camera::new();
    let before = camera.clone();
    camera.key_event(Key::A, KeyAction::Release);
    camera.key_event(Key::W, KeyAction::Release);
    assert_eq!(camera, before);
}

#[test]
fn test_yaw_keys_orbit_horizontally() {
    let mut camera = Camera::new();
    let before = camera.position();

    camera.key_event(Key::D, KeyAction::Press);
    let after = camera.position();

    assert!(!after.abs_diff_eq(before, 1e-6));
    assert!((after.y - before.y).abs() < 1e-5);

    camera.key_event(Key::A, KeyAction::Press);
    assert!(camera.position().abs_diff_eq(before, 1e-5));
}

#[test]
fn test_pitch_keys_clamp() {
    let mut camera = Camera::new();
    for _ in 0..200 {
        camera.key_event(Key::W, KeyAction::Repeat);
    }
    let high = camera.position();

    camera.key_event(Key::W, KeyAction::Press);
    assert!(camera.position().abs_diff_eq(high, 1e-5));
}

#[test]
fn test_home_resets_orbit() {
    let mut camera = Camera::new();
    camera.key_event(Key::D, KeyAction::Press);
    camera.key_event(Key::S, KeyAction::Press);
    camera.mouse_scroll_event(0.0, 1.0);

    camera.key_event(Key::Home, KeyAction::Press);

    let home = Camera::new();
    assert!(camera.position().abs_diff_eq(home.position(), 1e-5));
    assert_eq!(camera.distance(), home.distance());
}

#[test]
fn test_unmapped_key_is_noop() {
    let mut camera = Camera::new();
    let before = camera.clone();
    camera.key_event(Key::Other, KeyAction::Press);
    assert_eq!(camera, before);
}

// ============================================================================
// Matrices
// ============================================================================

#[test]
fn test_eye_sits_at_orbit_distance() {
    let camera = Camera::new();
    let eye = camera.position();
    assert!((eye.distance(camera.target()) - camera.distance()).abs() < 1e-4);
}

#[test]
fn test_view_matrix_centers_eye() {
    let camera = Camera::new();
    let view = camera.view_matrix();

    // The eye maps to the camera-space origin, the target straight
    // down -Z at orbit distance.
    assert!(view.transform_point3(camera.position()).length() < 1e-4);
    let target_cam = view.transform_point3(camera.target());
    assert!((target_cam.z + camera.distance()).abs() < 1e-3);
}

#[test]
fn test_projection_is_perspective() {
    let camera = Camera::new();
    let expected = Mat4::perspective_rh(
        std::f32::consts::FRAC_PI_4,
        800.0 / 600.0,
        0.1,
        1000.0,
    );
    assert_eq!(camera.projection_matrix(), expected);
}

#[test]
fn test_position_formula() {
    let camera = Camera::new();
    let eye = camera.position();
    // Default yaw 0 puts the eye on the +Z side of the target.
    assert!(eye.z > 0.0);
    assert!(eye.x.abs() < 1e-4);
    assert!(eye.abs_diff_eq(
        Vec3::new(0.0, 0.3f32.sin(), 0.3f32.cos()) * 20.0,
        1e-4
    ));
}

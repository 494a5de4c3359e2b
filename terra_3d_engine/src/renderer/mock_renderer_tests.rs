use super::*;
use crate::resource::{Geometry, MaterialParams};

fn test_frame() -> FrameState {
    FrameState {
        view: Mat4::IDENTITY,
        projection: Mat4::IDENTITY,
        eye: glam::Vec3::ZERO,
        light: None,
        time: 0.0,
        gamma: 1.2,
    }
}

fn test_call(name: &str) -> DrawCall {
    DrawCall {
        geometry: Geometry::uv_sphere(name, 3).unwrap(),
        model: Mat4::IDENTITY,
        material: MaterialParams::default().to_uniform(),
    }
}

#[test]
fn test_records_frame_lifecycle() {
    let mut queue = MockRenderQueue::new();
    let frame = test_frame();

    queue.begin_frame(&frame).unwrap();
    queue.submit(test_call("a")).unwrap();
    queue.submit(test_call("b")).unwrap();
    queue.end_frame().unwrap();

    assert_eq!(queue.frames, vec![frame]);
    assert_eq!(queue.call_names(), vec!["a", "b"]);
    assert_eq!(queue.ended_frames, 1);
}

#[test]
fn test_injected_submit_failure() {
    let mut queue = MockRenderQueue::new();
    queue.fail_submit = true;

    queue.begin_frame(&test_frame()).unwrap();
    assert!(queue.submit(test_call("a")).is_err());
    assert!(queue.calls.is_empty());
}

#[test]
fn test_view_projection_combines() {
    let mut frame = test_frame();
    frame.projection = Mat4::from_scale(glam::Vec3::splat(2.0));
    frame.view = Mat4::from_translation(glam::Vec3::X);
    assert_eq!(frame.view_projection(), frame.projection * frame.view);
}

/// Mock render queue for unit tests (no GPU required)
///
/// Records every frame binding and submission so tests can assert on
/// ordering and per-frame state. An injectable submit failure lets
/// tests verify that drawables swallow their own draw errors.

#[cfg(test)]
use glam::Mat4;

#[cfg(test)]
use crate::engine_bail;
#[cfg(test)]
use crate::error::Result;
#[cfg(test)]
use crate::renderer::{DrawCall, FrameState, RenderQueue};
#[cfg(test)]
use crate::resource::MaterialUniform;

/// A recorded submission (geometry identified by name).
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub geometry_name: String,
    pub model: Mat4,
    pub material: MaterialUniform,
}

#[cfg(test)]
#[derive(Default)]
pub struct MockRenderQueue {
    pub frames: Vec<FrameState>,
    pub calls: Vec<RecordedCall>,
    pub ended_frames: u32,
    /// When set, every submit fails.
    pub fail_submit: bool,
}

#[cfg(test)]
impl MockRenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry names of all recorded calls, in submission order.
    pub fn call_names(&self) -> Vec<&str> {
        self.calls.iter().map(|c| c.geometry_name.as_str()).collect()
    }
}

#[cfg(test)]
impl RenderQueue for MockRenderQueue {
    fn begin_frame(&mut self, frame: &FrameState) -> Result<()> {
        self.frames.push(*frame);
        Ok(())
    }

    fn submit(&mut self, call: DrawCall) -> Result<()> {
        if self.fail_submit {
            engine_bail!("terra3d::MockRenderQueue", "submit failure injected");
        }
        self.calls.push(RecordedCall {
            geometry_name: call.geometry.name().to_string(),
            model: call.model,
            material: call.material,
        });
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.ended_frames += 1;
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;

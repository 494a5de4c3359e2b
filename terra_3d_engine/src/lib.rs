/*!
# Terra 3D Engine

Scene graph and render/update loop for a small real-time 3D demo.

The engine maintains a flat, insertion-ordered collection of polymorphic
drawables, one camera and an optional light, and drives them through two
decoupled per-frame passes:

- **Update**: pure state advancement from wall-clock time. Never issues
  rendering work, so it runs (and tests) without any graphics backend.
- **Draw**: binds shared per-frame state (camera matrices, light, gamma)
  and invokes each drawable in exactly the order it was added.

The graphics API itself lives behind the [`renderer::RenderQueue`]
trait: drawables describe their work as draw calls and a backend decides
how to execute them. No backend is part of this crate.
*/

// Internal modules
mod error;
mod light;
mod transform;
pub mod camera;
pub mod log;
pub mod renderer;
pub mod resource;
pub mod scene;
pub mod utils;

// Main terra3d namespace module
pub mod terra3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Spatial state
    pub use crate::transform::Transform;

    // Camera and its input event types
    pub use crate::camera::{Camera, Key, KeyAction};

    // Light state
    pub use crate::light::Light;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Renderer seam
    pub mod render {
        pub use crate::renderer::{DrawCall, FrameState, RenderQueue};
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }

    // Utilities
    pub mod utils {
        pub use crate::utils::*;
    }
}

// Re-export math library at crate root
pub use glam;

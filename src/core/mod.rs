pub mod controller;
pub mod cube_layer;
pub mod display_context;
pub mod globe_layer;
pub mod gpu_context;
pub mod input_adapter;
pub mod layer;
pub mod sphere;
pub mod surface_renderer;
pub mod timer;

pub use controller::{Button, Controller, NoInput};
pub use cube_layer::{BackgroundLogic, CubeLayerBuilder, CubeLogic};
pub use display_context::DisplayContext;
pub use globe_layer::{GlobeLayerBuilder, GlobeLogic};
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use layer::{Layer, LayerLogic, LayerOutput, LayerStack, TimedLayer};
pub use sphere::{Sphere, SphereHit};
pub use surface_renderer::SurfaceRenderer;
pub use timer::FixedHz;

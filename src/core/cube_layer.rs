use std::sync::Arc;

use glam::Vec4;

use super::controller::{Button, Controller};
use super::display_context::DisplayContext;
use super::layer::{Layer, LayerLogic, LayerOutput, TimedLayer};
use crate::scenes::{CubeScene, CubeState};

/// Spinning cube; Space pauses and resumes the spin
#[derive(Clone)]
pub struct CubeLogic {
    scene: Arc<CubeScene>,
    state: CubeState,
}

impl CubeLogic {
    pub fn new(scene: Arc<CubeScene>) -> Self {
        Self {
            scene,
            state: CubeState::default(),
        }
    }

    pub fn state(&self) -> CubeState {
        self.state
    }
}

impl LayerLogic for CubeLogic {
    /// One rotation step per tick, whatever the delta
    fn update(&self, _delta: f32, _controller: &dyn Controller) -> Self {
        Self {
            scene: self.scene.clone(),
            state: self.state.step(self.scene.spin()),
        }
    }

    fn render(&self, context: &DisplayContext) -> LayerOutput {
        LayerOutput::from_colors(&self.scene.render_colors(&self.state, context))
    }

    fn input(&self, controller: &dyn Controller) -> Self {
        let state = if controller.just_pressed(Button::Space) {
            let state = self.state.toggled();
            log::info!("Cube motion {}", if state.motion_enabled { "resumed" } else { "paused" });
            state
        } else {
            self.state
        };

        Self {
            scene: self.scene.clone(),
            state,
        }
    }
}

/// Uniform fill, drawn behind scenes with transparent pixels
#[derive(Clone)]
pub struct BackgroundLogic {
    color: Vec4,
}

impl BackgroundLogic {
    pub fn new(color: Vec4) -> Self {
        Self { color }
    }
}

impl LayerLogic for BackgroundLogic {
    fn update(&self, _delta: f32, _controller: &dyn Controller) -> Self {
        self.clone()
    }

    fn render(&self, context: &DisplayContext) -> LayerOutput {
        let texel = crate::math::to_rgba8(self.color);
        LayerOutput::opaque(texel.repeat(context.pixel_count()))
    }
}

/// Builder for the cube layer
pub struct CubeLayerBuilder {
    scene: CubeScene,
    fps: f32,
    priority: i32,
}

impl CubeLayerBuilder {
    pub fn new(scene: CubeScene) -> Self {
        Self {
            scene,
            fps: 60.0,
            priority: 0,
        }
    }

    pub fn fps(mut self, fps: f32) -> Self {
        self.fps = fps;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn build(self) -> Box<dyn Layer> {
        let logic = CubeLogic::new(Arc::new(self.scene));
        Box::new(TimedLayer::new(logic, self.fps, self.priority))
    }
}

use std::sync::Arc;

use super::controller::Controller;
use super::display_context::DisplayContext;
use super::layer::{Layer, LayerLogic, LayerOutput, TimedLayer};
use crate::scenes::GlobeScene;

/// Globe scene plus the elapsed time it is showing
///
/// Time is summed in `f64`; an `f32` sum of frame deltas falls seconds behind
/// within an hour.
#[derive(Clone)]
pub struct GlobeLogic {
    scene: Arc<GlobeScene>,
    elapsed_time: f64,
}

impl GlobeLogic {
    pub fn new(scene: Arc<GlobeScene>, start_time: f32) -> Self {
        Self {
            scene,
            elapsed_time: start_time as f64,
        }
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }
}

impl LayerLogic for GlobeLogic {
    fn update(&self, delta: f32, _controller: &dyn Controller) -> Self {
        Self {
            scene: self.scene.clone(),
            elapsed_time: self.elapsed_time + delta as f64,
        }
    }

    fn render(&self, context: &DisplayContext) -> LayerOutput {
        let frame = self.scene.advance(self.elapsed_time as f32);
        LayerOutput::from_colors(&self.scene.render_colors(&frame, context))
    }
}

/// Builder for the globe layer
pub struct GlobeLayerBuilder {
    scene: Arc<GlobeScene>,
    start_time: f32,
    fps: f32,
    priority: i32,
}

impl GlobeLayerBuilder {
    pub fn new(scene: GlobeScene) -> Self {
        Self {
            scene: Arc::new(scene),
            start_time: 0.0,
            fps: 60.0,
            priority: 0,
        }
    }

    /// Elapsed time shown by the first frame
    pub fn start_time(mut self, seconds: f32) -> Self {
        self.start_time = seconds;
        self
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
        let logic = GlobeLogic::new(self.scene, self.start_time);
        Box::new(TimedLayer::new(logic, self.fps, self.priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobeConfig;
    use crate::core::controller::NoInput;
    use crate::frame::FixedStepFrames;
    use crate::scenes::GlobeTextures;

    fn logic() -> GlobeLogic {
        let scene = GlobeScene::new(&GlobeConfig::default(), GlobeTextures::procedural());
        GlobeLogic::new(Arc::new(scene), 2.0)
    }

    #[test]
    fn update_accumulates_elapsed_time() {
        let logic = logic().update(0.5, &NoInput).update(0.25, &NoInput);
        assert!((logic.elapsed_time() - 2.75).abs() < 1e-6);
    }

    #[test]
    fn elapsed_time_tracks_frame_clock_over_an_hour() {
        let scene = GlobeScene::new(&GlobeConfig::default(), GlobeTextures::procedural());
        let mut logic = GlobeLogic::new(Arc::new(scene), 0.0);
        let mut last_time = 0.0;
        for frame in FixedStepFrames::new(60.0, 0.0, 216_001) {
            logic = logic.update(frame.delta, &NoInput);
            last_time = frame.time;
        }

        assert!((last_time - 3600.0).abs() < 0.01);
        assert!(
            (logic.elapsed_time() - last_time as f64).abs() < 0.05,
            "globe at {} while frames at {}",
            logic.elapsed_time(),
            last_time
        );
    }

    #[test]
    fn late_steps_keep_their_length() {
        let scene = GlobeScene::new(&GlobeConfig::default(), GlobeTextures::procedural());
        let six_days = 6.0 * 86_400.0;
        let mut logic = GlobeLogic::new(Arc::new(scene), six_days);
        for _ in 0..60 {
            logic = logic.update(1.0 / 60.0, &NoInput);
        }
        assert!((logic.elapsed_time() - six_days as f64 - 1.0).abs() < 1e-3);
    }

    #[test]
    fn render_fills_the_display() {
        let ctx = DisplayContext::new(12, 9);
        let output = logic().render(&ctx);
        assert_eq!(output.pixels.len(), ctx.buffer_size());
        assert!(output.alpha.as_ref().is_some_and(|a| a.iter().all(|v| *v > 0.999)));
    }
}

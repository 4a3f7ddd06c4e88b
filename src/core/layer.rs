use glam::Vec4;

use super::controller::Controller;
use super::display_context::DisplayContext;
use crate::materials::blend_over;

/// Output from a layer's render call - just pixels
#[derive(Debug, Clone)]
pub struct LayerOutput {
    /// RGBA pixel data
    pub pixels: Vec<u8>,
    /// Optional alpha mask (0.0 = transparent, 1.0 = opaque)
    pub alpha: Option<Vec<f32>>,
}

impl LayerOutput {
    /// Create output with fully opaque pixels
    pub fn opaque(pixels: Vec<u8>) -> Self {
        Self { pixels, alpha: None }
    }

    /// Create output with alpha mask
    pub fn with_alpha(pixels: Vec<u8>, alpha: Vec<f32>) -> Self {
        Self {
            pixels,
            alpha: Some(alpha),
        }
    }

    /// Build output from linear RGBA colours, keeping their alpha as the mask
    pub fn from_colors(colors: &[Vec4]) -> Self {
        let pixels: Vec<[u8; 4]> = colors.iter().map(|c| crate::math::to_rgba8(*c)).collect();
        let alpha = colors.iter().map(|c| c.w.clamp(0.0, 1.0)).collect();
        Self::with_alpha(bytemuck::cast_slice(&pixels).to_vec(), alpha)
    }

    fn alpha_at(&self, index: usize) -> f32 {
        self.alpha.as_ref().map_or(1.0, |alpha| alpha[index])
    }
}

/// Layer with independent update rate control
pub trait Layer {
    /// Update layer state with delta time
    /// Returns new layer state (functional style)
    fn update(&self, delta: f32, controller: &dyn Controller) -> Box<dyn Layer>;

    /// Render layer pixels
    fn render(&self, context: &DisplayContext) -> LayerOutput;

    /// Layer priority for composition (lower = background, higher = foreground)
    fn priority(&self) -> i32 {
        0
    }

    /// Get target update rate (Hz)
    fn target_fps(&self) -> f32 {
        60.0
    }
}

/// Core layer logic - implemented by specific layers
pub trait LayerLogic: Clone {
    /// Update layer with the time elapsed since its previous update
    fn update(&self, delta: f32, controller: &dyn Controller) -> Self;

    /// Render layer output
    fn render(&self, context: &DisplayContext) -> LayerOutput;

    /// React to input; runs every frame, even when the update is throttled
    fn input(&self, _controller: &dyn Controller) -> Self {
        self.clone()
    }
}

/// Layer that manages its own update timing with internal timer
pub struct TimedLayer<T: LayerLogic> {
    logic: T,
    timer: super::timer::FixedHz,
    /// Time accumulated since the logic last ran
    pending: f32,
    priority: i32,
}

impl<T: LayerLogic> TimedLayer<T> {
    /// Create layer with specific update rate
    pub fn new(logic: T, hz: f32, priority: i32) -> Self {
        Self {
            logic,
            timer: super::timer::FixedHz::new(hz),
            pending: 0.0,
            priority,
        }
    }

    /// Get target Hz
    pub fn hz(&self) -> f32 {
        1.0 / self.timer.interval
    }

    pub fn logic(&self) -> &T {
        &self.logic
    }
}

impl<T: LayerLogic + 'static> Layer for TimedLayer<T> {
    fn update(&self, delta: f32, controller: &dyn Controller) -> Box<dyn Layer> {
        let mut new_timer = self.timer;
        let pending = self.pending + delta;

        // Skipped updates hand their time to the next one so clocks never drift
        let logic = self.logic.input(controller);
        let (new_logic, new_pending) = if new_timer.tick(delta) {
            (logic.update(pending, controller), 0.0)
        } else {
            (logic, pending)
        };

        Box::new(TimedLayer {
            logic: new_logic,
            timer: new_timer,
            pending: new_pending,
            priority: self.priority,
        })
    }

    fn render(&self, context: &DisplayContext) -> LayerOutput {
        self.logic.render(context)
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn target_fps(&self) -> f32 {
        self.hz()
    }
}

/// Composable layer stack
pub struct LayerStack {
    layers: Vec<Box<dyn Layer>>,
}

impl LayerStack {
    /// Create empty layer stack
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Add layer and return new stack
    pub fn with_layer(mut self, layer: Box<dyn Layer>) -> Self {
        self.layers.push(layer);
        self.layers.sort_by_key(|l| l.priority());
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Update all layers - functional transformation
    pub fn update(&self, delta: f32, controller: &dyn Controller) -> LayerStack {
        LayerStack {
            layers: self
                .layers
                .iter()
                .map(|layer| layer.update(delta, controller))
                .collect(),
        }
    }

    /// Aggregate all layer outputs, background first
    pub fn render<'a>(&'a self, context: &'a DisplayContext) -> impl Iterator<Item = LayerOutput> + 'a {
        self.layers.iter().map(move |layer| layer.render(context))
    }

    /// Composite all layers back-to-front into one opaque RGBA frame
    pub fn compose(&self, context: &DisplayContext) -> Vec<u8> {
        let mut frame = vec![Vec4::ZERO; context.pixel_count()];

        for output in self.render(context) {
            if output.pixels.len() != context.buffer_size() {
                log::warn!(
                    "Skipping layer output of {} bytes, expected {}",
                    output.pixels.len(),
                    context.buffer_size()
                );
                continue;
            }
            for (i, (dst, texel)) in frame.iter_mut().zip(output.pixels.chunks_exact(4)).enumerate() {
                let rgb = Vec4::new(texel[0] as f32, texel[1] as f32, texel[2] as f32, 0.0) / 255.0;
                let src = rgb.truncate().extend(output.alpha_at(i));
                *dst = blend_over(src, *dst);
            }
        }

        let pixels: Vec<[u8; 4]> = frame
            .into_iter()
            .map(|c| crate::math::to_rgba8(c.truncate().extend(1.0)))
            .collect();
        bytemuck::cast_slice(&pixels).to_vec()
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::controller::Button;

    struct MockController;
    impl Controller for MockController {
        fn is_down(&self, _button: Button) -> bool {
            false
        }
        fn just_pressed(&self, _button: Button) -> bool {
            false
        }
    }

    #[derive(Clone)]
    struct TestLogic {
        value: u32,
        elapsed: f32,
    }

    impl LayerLogic for TestLogic {
        fn update(&self, delta: f32, _controller: &dyn Controller) -> Self {
            TestLogic {
                value: self.value + 1,
                elapsed: self.elapsed + delta,
            }
        }

        fn render(&self, _context: &DisplayContext) -> LayerOutput {
            LayerOutput::opaque(vec![self.value as u8, (self.elapsed * 1000.0).round() as u8, 0, 0])
        }
    }

    #[derive(Clone)]
    struct Fill(Vec4);

    impl LayerLogic for Fill {
        fn update(&self, _delta: f32, _controller: &dyn Controller) -> Self {
            self.clone()
        }

        fn render(&self, context: &DisplayContext) -> LayerOutput {
            LayerOutput::from_colors(&vec![self.0; context.pixel_count()])
        }
    }

    #[test]
    fn timed_layer_throttles_updates() {
        let logic = TestLogic { value: 0, elapsed: 0.0 };
        let layer = TimedLayer::new(logic, 60.0, 0);
        let controller = MockController;

        // Small delta - should not update
        let layer = layer.update(0.01, &controller);
        let ctx = DisplayContext::new(1, 1);
        let output = layer.render(&ctx);
        assert_eq!(output.pixels[0], 0); // Not updated

        // Large delta - should update
        let layer = layer.update(0.02, &controller);
        let output = layer.render(&ctx);
        assert_eq!(output.pixels[0], 1); // Updated
    }

    #[test]
    fn timed_layer_hands_skipped_time_to_next_update() {
        let layer: Box<dyn Layer> = Box::new(TimedLayer::new(TestLogic { value: 0, elapsed: 0.0 }, 60.0, 0));
        let controller = MockController;
        let ctx = DisplayContext::new(1, 1);

        let layer = layer.update(0.01, &controller);
        let layer = layer.update(0.02, &controller);
        let output = layer.render(&ctx);

        assert_eq!(output.pixels[0], 1);
        assert_eq!(output.pixels[1], 30); // elapsed ms: 10 skipped + 20
    }

    #[test]
    fn layer_stack_updates_all() {
        let logic1 = TestLogic { value: 10, elapsed: 0.0 };
        let logic2 = TestLogic { value: 20, elapsed: 0.0 };

        let layer1 = Box::new(TimedLayer::new(logic1, 60.0, 0));
        let layer2 = Box::new(TimedLayer::new(logic2, 60.0, 5));

        let stack = LayerStack::new().with_layer(layer1).with_layer(layer2);

        let controller = MockController;
        let updated = stack.update(0.02, &controller);

        let ctx = DisplayContext::new(1, 1);
        let outputs: Vec<_> = updated.render(&ctx).collect();

        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].pixels[0], 11);
        assert_eq!(outputs[1].pixels[0], 21);
    }

    #[test]
    fn compose_blends_by_priority_and_alpha() {
        let background = Box::new(TimedLayer::new(Fill(Vec4::new(0.0, 0.0, 1.0, 1.0)), 60.0, -1));
        let overlay = Box::new(TimedLayer::new(Fill(Vec4::new(1.0, 0.0, 0.0, 0.5)), 60.0, 1));

        // Added foreground first; priority still puts the background underneath
        let stack = LayerStack::new().with_layer(overlay).with_layer(background);
        let pixels = stack.compose(&DisplayContext::new(2, 1));

        assert_eq!(pixels.len(), 8);
        assert_eq!(&pixels[0..4], &[128, 0, 128, 255]);
    }

    #[test]
    fn compose_transparent_layer_keeps_background() {
        let background = Box::new(TimedLayer::new(Fill(Vec4::new(0.0, 1.0, 0.0, 1.0)), 60.0, 0));
        let clear = Box::new(TimedLayer::new(Fill(Vec4::ZERO), 60.0, 1));

        let stack = LayerStack::new().with_layer(background).with_layer(clear);
        let pixels = stack.compose(&DisplayContext::new(1, 1));
        assert_eq!(pixels, vec![0, 255, 0, 255]);
    }
}

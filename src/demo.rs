//! Assembles the layer stack for each demo.
//!
//! ```no_run
//! use bluemarble::cli::Demo;
//! use bluemarble::config::DemoConfig;
//! use bluemarble::demo::DemoBuilder;
//!
//! let layers = DemoBuilder::new(Demo::Globe, DemoConfig::default())
//!     .start_time(30.0)
//!     .build();
//! ```

use std::path::PathBuf;

use crate::cli::Demo;
use crate::config::DemoConfig;
use crate::core::{BackgroundLogic, CubeLayerBuilder, GlobeLayerBuilder, LayerStack, TimedLayer};
use crate::math::hex_to_rgba;
use crate::scenes::{CubeScene, CubeVariant, GlobeScene, GlobeTextures};

/// Background sits below every scene layer
const BACKGROUND_PRIORITY: i32 = -10;

pub struct DemoBuilder {
    demo: Demo,
    config: DemoConfig,
    textures: Option<PathBuf>,
    start_time: f32,
}

impl DemoBuilder {
    pub fn new(demo: Demo, config: DemoConfig) -> Self {
        Self {
            demo,
            config,
            textures: None,
            start_time: 0.0,
        }
    }

    /// Directory to load globe textures from; generated textures are used otherwise
    pub fn textures(mut self, dir: Option<PathBuf>) -> Self {
        self.textures = dir;
        self
    }

    pub fn start_time(mut self, seconds: f32) -> Self {
        self.start_time = seconds;
        self
    }

    pub fn build(self) -> LayerStack {
        let fps = self.config.display.target_fps;
        let clear = match self.demo {
            Demo::Snapshot => self.config.cube.snapshot_background,
            Demo::Globe | Demo::Layout => self.config.display.background,
        };
        let background = BackgroundLogic::new(hex_to_rgba(clear, 1.0));
        let stack = LayerStack::new().with_layer(Box::new(TimedLayer::new(
            background,
            fps,
            BACKGROUND_PRIORITY,
        )));

        match self.demo {
            Demo::Globe => {
                let textures = GlobeTextures::load_or_fallback(self.textures.as_deref());
                let scene = GlobeScene::new(&self.config.globe, textures);
                stack.with_layer(
                    GlobeLayerBuilder::new(scene)
                        .start_time(self.start_time)
                        .fps(fps)
                        .build(),
                )
            }
            Demo::Layout | Demo::Snapshot => {
                let variant = if self.demo == Demo::Layout {
                    CubeVariant::Layout
                } else {
                    CubeVariant::Snapshot
                };
                let scene = CubeScene::new(&self.config.cube, variant);
                stack.with_layer(CubeLayerBuilder::new(scene).fps(fps).build())
            }
        }
    }
}

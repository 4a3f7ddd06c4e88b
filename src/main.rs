use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use bluemarble::cli::{Cli, Demo};
use bluemarble::config::DemoConfig;
use bluemarble::core::{Button, Controller, DisplayContext, LayerStack, NoInput, SurfaceRenderer, WinitController};
use bluemarble::demo::DemoBuilder;
use bluemarble::display::{save_png, Display, PngSink};
use bluemarble::frame::{FixedStepFrames, FrameIterator};

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;

// === Type Aliases ===

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

struct App {
    cli: Cli,
    context: DisplayContext,
    window: Option<Arc<Window>>,
    /// Layers waiting for the window; moved into `display` on resume
    layers: Option<LayerStack>,
    display: Option<Display<SurfaceRenderer>>,
    controller: WinitController,
    frames: FrameIterator,
    frame_count: u32,
    fps_update_timer: f32,
    startup_snapshot_pending: bool,
}

impl App {
    fn new(cli: Cli, context: DisplayContext, layers: LayerStack) -> Self {
        let startup_snapshot_pending = cli.demo == Demo::Snapshot && cli.output.is_some();
        Self {
            cli,
            context,
            window: None,
            layers: Some(layers),
            display: None,
            controller: WinitController::new(),
            frames: FrameIterator::new(),
            frame_count: 0,
            fps_update_timer: 0.0,
            startup_snapshot_pending,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            if !self.cli.no_ui {
                log::info!("FPS: {:.1}", self.frame_count as f32 / self.fps_update_timer);
            }
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn window_title(&self) -> &'static str {
        match self.cli.demo {
            Demo::Globe => "Blue Marble",
            Demo::Layout => "Cube (Space toggles motion)",
            Demo::Snapshot => "Cube (P saves a snapshot)",
        }
    }

    fn redraw(&mut self) {
        let Some(display) = &mut self.display else {
            return;
        };

        // The startup snapshot shows the rest pose, before any update
        if self.startup_snapshot_pending {
            self.startup_snapshot_pending = false;
            let pixels = display.snapshot(&self.context);
            if let Err(e) = save_png(&self.cli.snapshot_path(), &pixels, &self.context) {
                log::error!("Snapshot failed: {:#}", e);
            }
        }

        let Some(frame) = self.frames.next() else {
            return;
        };
        if let Err(e) = display.draw(&frame, &self.controller, &self.context) {
            log::error!("Render error: {}", e);
        }

        if self.cli.demo == Demo::Snapshot && self.controller.just_pressed(Button::KeyP) {
            if let Err(e) = save_png(&self.cli.snapshot_path(), display.last_frame(), &self.context) {
                log::error!("Snapshot failed: {:#}", e);
            }
        }

        self.controller.end_frame();
        self.update_fps(frame.delta);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.window_title())
                .with_inner_size(winit::dpi::PhysicalSize::new(self.context.width, self.context.height)),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match SurfaceRenderer::new(window.clone()) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to initialize surface renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = renderer.dimensions();
        self.context = DisplayContext::new(width, height);
        let layers = self.layers.take().unwrap_or_default();
        self.display = Some(Display::new(layers, renderer));
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { .. } => {
                self.controller.process_event(&event);
                if self.controller.just_pressed(Button::Escape) {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(context) = self.context.resized(size.width, size.height) {
                    self.context = context;
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Render a fixed number of frames straight to PNG files
fn run_headless(cli: &Cli, context: DisplayContext, layers: LayerStack, fps: f32) -> anyhow::Result<()> {
    let output = cli
        .output
        .clone()
        .context("--headless needs --output to know where to write frames")?;

    let mut display = Display::new(layers, PngSink::new(output, cli.frames > 1));
    for frame in FixedStepFrames::new(fps, cli.time, cli.frames) {
        display
            .draw(&frame, &NoInput, &context)
            .map_err(|e| anyhow!("Frame {} failed: {}", frame.number, e))?;
    }

    log::info!("Rendered {} frame(s)", display.sink().frames_written());
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<DemoConfig> {
    let mut config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    if let Some(width) = cli.width {
        config.display.width = width;
    }
    if let Some(height) = cli.height {
        config.display.height = height;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let context = DisplayContext::new(config.display.width, config.display.height);
    let fps = config.display.target_fps;

    let layers = DemoBuilder::new(cli.demo, config)
        .textures(cli.textures.clone())
        .start_time(cli.time)
        .build();

    if cli.headless {
        run_headless(&cli, context, layers, fps)?;
        return Ok(());
    }

    if !cli.no_ui {
        log::info!("{:?} demo - Escape to quit", cli.demo);
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli, context, layers);
    event_loop.run_app(&mut app)?;

    Ok(())
}

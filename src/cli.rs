// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which demo scene to show
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Demo {
    /// Day/night globe with clouds, stars and an orbiting sun
    #[default]
    Globe,
    /// Spinning cube; Space toggles motion
    Layout,
    /// Spinning cube; P writes a PNG snapshot
    Snapshot,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "bluemarble")]
#[command(about = "Software-rendered globe and cube demos", long_about = None)]
pub struct Cli {
    #[arg(long, value_enum, default_value_t = Demo::Globe)]
    pub demo: Demo,

    /// JSON configuration file; missing fields use defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the globe textures
    #[arg(long)]
    pub textures: Option<PathBuf>,

    /// Override the configured window width
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the configured window height
    #[arg(long)]
    pub height: Option<u32>,

    /// Render without a window, writing frames to --output
    #[arg(long, default_value = "false")]
    pub headless: bool,

    /// Number of frames to render in headless mode
    #[arg(long, default_value_t = 1)]
    pub frames: u64,

    /// Elapsed time of the first frame, in seconds
    #[arg(long, default_value_t = 0.0)]
    pub time: f32,

    /// PNG path for headless frames and snapshots
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Snapshot destination, defaulting to the working directory
    pub fn snapshot_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from("snapshot.png"))
    }
}

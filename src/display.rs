use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::{Controller, DisplayContext, LayerStack};
use crate::frame::FrameInfo;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Destination for composed RGBA frames
pub trait FrameSink {
    fn present(&mut self, pixels: &[u8], context: &DisplayContext) -> Result<()>;
}

/// Write an RGBA buffer as a PNG file
pub fn save_png(path: &Path, pixels: &[u8], context: &DisplayContext) -> anyhow::Result<()> {
    let image = image::RgbaImage::from_raw(context.width, context.height, pixels.to_vec())
        .with_context(|| {
            format!(
                "Pixel buffer of {} bytes does not fit {}x{}",
                pixels.len(),
                context.width,
                context.height
            )
        })?;
    image
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

/// Frame sink that writes PNG files; numbered mode appends the frame index
pub struct PngSink {
    path: PathBuf,
    numbered: bool,
    frames_written: u64,
}

impl PngSink {
    pub fn new(path: impl Into<PathBuf>, numbered: bool) -> Self {
        Self {
            path: path.into(),
            numbered,
            frames_written: 0,
        }
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Target path for frame `index`, e.g. `out.png` -> `out_0003.png`
    pub fn frame_path(&self, index: u64) -> PathBuf {
        if !self.numbered {
            return self.path.clone();
        }
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "frame".to_string());
        let ext = self
            .path
            .extension()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "png".to_string());
        self.path.with_file_name(format!("{}_{:04}.{}", stem, index, ext))
    }
}

impl FrameSink for PngSink {
    fn present(&mut self, pixels: &[u8], context: &DisplayContext) -> Result<()> {
        save_png(&self.frame_path(self.frames_written), pixels, context)?;
        self.frames_written += 1;
        Ok(())
    }
}

/// Display combines the layer stack with a frame sink
pub struct Display<W: FrameSink> {
    layers: LayerStack,
    sink: W,
    /// Last composed frame, kept for snapshots
    last_frame: Vec<u8>,
}

impl<W: FrameSink> Display<W> {
    pub fn new(layers: LayerStack, sink: W) -> Self {
        Self {
            layers,
            sink,
            last_frame: Vec::new(),
        }
    }

    /// Full render cycle: update layers → compose → present
    pub fn draw(&mut self, frame: &FrameInfo, controller: &dyn Controller, context: &DisplayContext) -> Result<()> {
        self.layers = self.layers.update(frame.delta, controller);
        self.last_frame = self.layers.compose(context);
        self.sink.present(&self.last_frame, context)
    }

    /// Compose the layers as they stand, without advancing them
    pub fn snapshot(&self, context: &DisplayContext) -> Vec<u8> {
        self.layers.compose(context)
    }

    /// Most recently composed frame, empty before the first draw
    pub fn last_frame(&self) -> &[u8] {
        &self.last_frame
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut W {
        &mut self.sink
    }
}

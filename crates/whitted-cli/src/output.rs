use std::path::PathBuf;

use anyhow::{anyhow, Result};
use image::{buffer::ConvertBuffer, Rgb32FImage, RgbImage};

use crate::executor::OutputBuffer;

/// Writes the final image to disk, the format is deduced from the extension
pub struct FileOutput {
    pub path: PathBuf,
}

impl FileOutput {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn commit(&self, output_buffer: &OutputBuffer) -> Result<()> {
        let raw: Vec<f32> = bytemuck::cast_slice(output_buffer.pixels.as_slice()).to_vec();
        let hdr = Rgb32FImage::from_raw(output_buffer.width, output_buffer.height, raw)
            .ok_or_else(|| anyhow!("output buffer does not match the image dimensions"))?;
        let ldr: RgbImage = hdr.convert();

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        log::info!("saving image to {}", self.path.display());
        ldr.save(&self.path)?;
        Ok(())
    }
}

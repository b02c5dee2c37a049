use anyhow::{Context, Result};
use image::GenericImageView;
use lb_core::ports::ImageProbePort;

/// Decodes uploads with the `image` crate to read their size.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateProbe;

impl ImageProbePort for ImageCrateProbe {
    fn dimensions(&self, bytes: &[u8]) -> Result<(u32, u32)> {
        let decoded = image::load_from_memory(bytes).context("decode avatar image")?;
        Ok(decoded.dimensions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(width: u32, height: u32, format: image::ImageFormat) -> Vec<u8> {
        let image = image::RgbImage::new(width, height);
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(image)
            .write_to(&mut std::io::Cursor::new(&mut bytes), format)
            .unwrap();
        bytes
    }

    #[test]
    fn reads_png_and_jpeg_sizes() {
        let probe = ImageCrateProbe;
        assert_eq!(
            probe.dimensions(&encode(300, 200, image::ImageFormat::Png)).unwrap(),
            (300, 200)
        );
        assert_eq!(
            probe.dimensions(&encode(64, 32, image::ImageFormat::Jpeg)).unwrap(),
            (64, 32)
        );
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(ImageCrateProbe.dimensions(b"not an image").is_err());
    }
}

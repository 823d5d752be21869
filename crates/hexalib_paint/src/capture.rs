//! Frame capture for tests and screenshots.
//!
//! A [`CapturedFrame`] is an RGBA8 copy of a [`Surface`](crate::Surface),
//! detached from the surface so it can be sent across threads, compared
//! pixel by pixel or written out as PNG (with the `png` feature).

/// Raw captured frame data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedFrame {
    /// Raw pixel data (RGBA8)
    pub data: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl CapturedFrame {
    /// Create a new captured frame.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data,
            width,
            height,
        }
    }

    /// Get a pixel at (x, y) as RGBA.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Number of pixels that differ from `other`. Frames of different sizes
    /// differ everywhere.
    pub fn diff_pixel_count(&self, other: &CapturedFrame) -> usize {
        if self.width != other.width || self.height != other.height {
            let own = self.width as usize * self.height as usize;
            return own.max(other.width as usize * other.height as usize);
        }

        self.data
            .chunks(4)
            .zip(other.data.chunks(4))
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Check if two frames are identical.
    pub fn is_identical_to(&self, other: &CapturedFrame) -> bool {
        self == other
    }

    /// Export the frame as PNG.
    #[cfg(feature = "png")]
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        use std::fs::File;
        use std::io::BufWriter;

        let file = File::create(path.as_ref())?;
        let writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().map_err(std::io::Error::other)?;
        writer
            .write_image_data(&self.data)
            .map_err(std::io::Error::other)?;

        tracing::debug!(
            "Saved {}x{} frame to {}",
            self.width,
            self.height,
            path.as_ref().display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_frame(width: u32, height: u32, color: [u8; 4]) -> CapturedFrame {
        let data = color.repeat((width * height) as usize);
        CapturedFrame::new(data, width, height)
    }

    #[test]
    fn test_get_pixel() {
        let frame = create_test_frame(10, 10, [255, 128, 64, 255]);
        assert_eq!(frame.get_pixel(5, 5), Some([255, 128, 64, 255]));

        // Out of bounds
        assert!(frame.get_pixel(10, 0).is_none());
        assert!(frame.get_pixel(0, 10).is_none());
    }

    #[test]
    fn test_frame_comparison() {
        let red = create_test_frame(8, 8, [255, 0, 0, 255]);
        let green = create_test_frame(8, 8, [0, 255, 0, 255]);

        assert!(red.is_identical_to(&red.clone()));
        assert_eq!(red.diff_pixel_count(&red.clone()), 0);
        assert_eq!(red.diff_pixel_count(&green), 64);
    }

    #[test]
    fn test_size_mismatch_counts_every_pixel() {
        let small = create_test_frame(2, 2, [0; 4]);
        let large = create_test_frame(4, 4, [0; 4]);
        assert_eq!(small.diff_pixel_count(&large), 16);
        assert!(!small.is_identical_to(&large));
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_save_png_writes_signature() {
        let frame = create_test_frame(3, 3, [10, 20, 30, 255]);
        let path = std::env::temp_dir().join(format!(
            "hexalib_capture_{}.png",
            std::process::id()
        ));
        frame.save_png(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}

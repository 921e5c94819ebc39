//! Test images and workspace helpers.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory holding an input image.
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
}

impl Workspace {
    /// Write `pixels` (RGB triples, row-major) as `<name>.png`.
    pub fn with_rgb(name: &str, width: u32, height: u32, pixels: &[[u8; 3]]) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join(format!("{name}.png"));
        let data: Vec<u8> = pixels.iter().flatten().copied().collect();
        write_png(&input, png::ColorType::Rgb, width, height, &data);
        Self { dir, input }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Encode raw 8-bit samples to a PNG file.
pub fn write_png(path: &Path, color: png::ColorType, width: u32, height: u32, data: &[u8]) {
    let file = std::fs::File::create(path).expect("create png");
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("png header");
    writer.write_image_data(data).expect("png data");
}

/// Gray background with a saturated object away from the border.
pub fn centered_object(width: u32, height: u32) -> Vec<[u8; 3]> {
    let (w, h) = (width as usize, height as usize);
    (0..w * h)
        .map(|i| {
            let (x, y) = (i % w, i / w);
            let inside = x >= w / 3 && x < 2 * w / 3 && y >= h / 3 && y < 2 * h / 3;
            if inside {
                [230, 40, 20]
            } else {
                [110, 120, 115]
            }
        })
        .collect()
}

/// One color everywhere.
pub fn uniform(width: u32, height: u32, rgb: [u8; 3]) -> Vec<[u8; 3]> {
    vec![rgb; (width * height) as usize]
}

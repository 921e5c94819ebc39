//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;

/// Decoded grayscale PNG.
pub struct GrayImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Read a PNG and assert it is 8-bit grayscale
pub fn read_gray(path: &Path) -> GrayImage {
    let file = std::fs::File::open(path)
        .unwrap_or_else(|e| panic!("Expected {} to exist: {e}", path.display()));
    let mut reader = png::Decoder::new(std::io::BufReader::new(file))
        .read_info()
        .expect("valid png");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("png frame");

    assert_eq!(info.color_type, png::ColorType::Grayscale, "{}", path.display());
    assert_eq!(info.bit_depth, png::BitDepth::Eight, "{}", path.display());

    buf.truncate(info.buffer_size());
    GrayImage {
        width: info.width,
        height: info.height,
        pixels: buf,
    }
}

/// Assert a saliency map uses the full 0..=255 range
pub fn assert_full_range(image: &GrayImage) {
    let min = image.pixels.iter().copied().min();
    let max = image.pixels.iter().copied().max();
    assert_eq!(
        (min, max),
        (Some(0), Some(255)),
        "Expected min-max rescaled map"
    );
}

/// Assert every pixel is zero
pub fn assert_all_zero(image: &GrayImage) {
    assert!(
        image.pixels.iter().all(|&p| p == 0),
        "Expected all-zero map, got max {:?}",
        image.pixels.iter().max()
    );
}

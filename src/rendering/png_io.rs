//! PNG decoding into [`SourceImage`] and grayscale PNG encoding.

use std::io::{BufWriter, Cursor, Read};
use std::path::Path;

use bms_core::SourceImage;

use crate::error::AppError;

/// Decode an 8-bit RGB PNG.
///
/// Palette images are expanded and 16-bit samples stripped to 8 bits.
/// Anything that is not three channels afterwards (gray, gray+alpha, RGBA)
/// is rejected as invalid input.
pub fn decode_rgb<R: Read>(reader: R) -> Result<SourceImage, AppError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    if info.bit_depth != png::BitDepth::Eight {
        return Err(AppError::UnsupportedPng(format!(
            "expected 8-bit samples, got {:?}",
            info.bit_depth
        )));
    }

    let channels = info.color_type.samples();
    buf.truncate(info.buffer_size());

    SourceImage::from_interleaved(&buf, info.width as usize, info.height as usize, channels)
        .map_err(|e| AppError::Saliency(e.into()))
}

/// Decode an RGB PNG file.
pub fn read_rgb(path: &Path) -> Result<SourceImage, AppError> {
    let file = std::fs::File::open(path)?;
    decode_rgb(std::io::BufReader::new(file))
}

/// Encode 8-bit grayscale pixels as PNG bytes.
pub fn encode_gray(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    write_gray_to(&mut buf, pixels, width, height)?;
    Ok(buf.into_inner())
}

/// Write 8-bit grayscale pixels as a PNG file, replacing any existing file.
pub fn write_gray(path: &Path, pixels: &[u8], width: usize, height: usize) -> Result<(), AppError> {
    let file = std::fs::File::create(path)?;
    write_gray_to(BufWriter::new(file), pixels, width, height)
}

fn write_gray_to<W: std::io::Write>(
    out: W,
    pixels: &[u8],
    width: usize,
    height: usize,
) -> Result<(), AppError> {
    let mut encoder = png::Encoder::new(out, width as u32, height as u32);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Fast);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixels)?;
    writer.finish()?;
    Ok(())
}

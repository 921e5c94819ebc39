//! Lab channel extraction.

use super::channel_map::{Channel, ChannelMap};
use super::source::SourceImage;
use crate::color::{Lab, LinearRgb};

/// Convert the source image to 8-bit-scaled Lab and split it into
/// L, a and b channel maps, in that order.
///
/// Channel values are the rounded 8-bit encodings of [`Lab::to_u8`], so
/// thresholds behave the same as on an 8-bit Lab image.
///
/// # Example
///
/// ```
/// use bms_core::{extract_channels, Channel, SourceImage};
///
/// let image = SourceImage::from_interleaved(&[255u8; 3 * 4], 2, 2, 3).unwrap();
/// let [l, a, b] = extract_channels(&image);
/// assert_eq!(l.channel(), Channel::Lightness);
/// assert_eq!(l.values(), &[255.0; 4]);
/// assert_eq!(a.values(), &[128.0; 4]);
/// assert_eq!(b.width(), 2);
/// ```
pub fn extract_channels(image: &SourceImage) -> [ChannelMap; 3] {
    let len = image.width() * image.height();
    let mut planes: [Vec<f32>; 3] = [
        Vec::with_capacity(len),
        Vec::with_capacity(len),
        Vec::with_capacity(len),
    ];

    for &pixel in image.pixels() {
        let encoded = Lab::from(LinearRgb::from(pixel)).to_u8();
        for (plane, value) in planes.iter_mut().zip(encoded) {
            plane.push(value as f32);
        }
    }

    let [l, a, b] = planes;
    let (w, h) = (image.width(), image.height());
    [
        ChannelMap::new(Channel::Lightness, l, w, h),
        ChannelMap::new(Channel::GreenRed, a, w, h),
        ChannelMap::new(Channel::BlueYellow, b, w, h),
    ]
}

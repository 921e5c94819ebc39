//! Single-channel scalar grid.

use std::fmt;

/// The three Lab channels, in processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// L*: lightness
    Lightness,
    /// a*: green-red opponent axis
    GreenRed,
    /// b*: blue-yellow opponent axis
    BlueYellow,
}

impl Channel {
    /// All channels in processing order.
    pub const ALL: [Channel; 3] = [Channel::Lightness, Channel::GreenRed, Channel::BlueYellow];

    /// Short name used in artifact file names: `L`, `a` or `b`.
    #[inline]
    pub fn suffix(self) -> &'static str {
        match self {
            Channel::Lightness => "L",
            Channel::GreenRed => "a",
            Channel::BlueYellow => "b",
        }
    }

    /// Position in [`Channel::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Lightness => 0,
            Channel::GreenRed => 1,
            Channel::BlueYellow => 2,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// One scalar channel of the source image, row-major.
///
/// Values from [`extract_channels`](super::extract_channels) lie on the 8-bit
/// Lab scale (0.0..=255.0).
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMap {
    channel: Channel,
    values: Vec<f32>,
    width: usize,
    height: usize,
}

impl ChannelMap {
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `values.len() == width * height`.
    pub fn new(channel: Channel, values: Vec<f32>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            values.len(),
            width * height,
            "values length ({}) must match width * height ({}x{})",
            values.len(),
            width,
            height,
        );
        Self {
            channel,
            values,
            width,
            height,
        }
    }

    #[inline]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Smallest and largest value, or `None` for an empty grid.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        let mut iter = self.values.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// Values rounded and clamped to bytes, for display.
    pub fn to_u8(&self) -> Vec<u8> {
        self.values
            .iter()
            .map(|&v| v.round().clamp(0.0, 255.0) as u8)
            .collect()
    }
}

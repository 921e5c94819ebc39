//! Border seed enumeration.
//!
//! Seeds are produced row by row (left, then right) and then column by
//! column (top, then bottom). With jitter enabled each seed draws one
//! uniform sample; about 1% of seeds move inward by 5 to 24 pixels.

use rand::Rng;

/// A seed moves inward when its uniform draw exceeds this value.
const JITTER_CUTOFF: f64 = 0.99;

/// Inward offsets for jittered seeds, in pixels (upper bound exclusive).
const JITTER_OFFSETS: std::ops::Range<usize> = 5..25;

/// A pixel position, `(x, y)`.
pub type Seed = (usize, usize);

/// The four border seeds per row/column, without jitter.
pub fn border_seeds(width: usize, height: usize) -> Vec<Seed> {
    enumerate(width, height, |_| 0)
}

/// Border seeds with random inward jitter drawn from `rng`.
///
/// Offsets are clamped so every seed stays inside the grid.
pub fn jittered_border_seeds<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Vec<Seed> {
    enumerate(width, height, |limit| {
        if rng.gen::<f64>() > JITTER_CUTOFF {
            rng.gen_range(JITTER_OFFSETS).min(limit)
        } else {
            0
        }
    })
}

/// `offset(limit)` returns the inward shift for the next seed, at most `limit`.
fn enumerate(width: usize, height: usize, mut offset: impl FnMut(usize) -> usize) -> Vec<Seed> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut seeds = Vec::with_capacity(2 * (width + height));
    let (last_x, last_y) = (width - 1, height - 1);

    for y in 0..height {
        seeds.push((offset(last_x), y));
        seeds.push((last_x - offset(last_x), y));
    }
    for x in 0..width {
        seeds.push((x, offset(last_y)));
        seeds.push((x, last_y - offset(last_y)));
    }

    seeds
}

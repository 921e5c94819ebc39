//! Binary erosion and dilation with a 3x3 structuring element.
//!
//! Neighbors outside the grid are skipped: they neither erode a pixel on the
//! image border nor dilate into it.

use super::boolean_map::BooleanMap;

/// Shape of the 3x3 structuring element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StructuringElement {
    /// All 9 cells of the 3x3 neighborhood
    #[default]
    Square,
    /// Center plus the 4 edge-adjacent cells
    Cross,
}

const SQUARE: [(isize, isize); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const CROSS: [(isize, isize); 5] = [(0, -1), (-1, 0), (0, 0), (1, 0), (0, 1)];

impl StructuringElement {
    #[inline]
    fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            StructuringElement::Square => &SQUARE,
            StructuringElement::Cross => &CROSS,
        }
    }
}

/// Apply `iterations` erosions: a pixel survives only if every in-bounds
/// neighbor under the element is set.
pub fn erode(mask: &BooleanMap, element: StructuringElement, iterations: u32) -> BooleanMap {
    repeat(mask, iterations, |m| apply(m, element, true))
}

/// Apply `iterations` dilations: a pixel is set if any in-bounds neighbor
/// under the element is set.
pub fn dilate(mask: &BooleanMap, element: StructuringElement, iterations: u32) -> BooleanMap {
    repeat(mask, iterations, |m| apply(m, element, false))
}

fn repeat(
    mask: &BooleanMap,
    iterations: u32,
    step: impl Fn(&BooleanMap) -> BooleanMap,
) -> BooleanMap {
    let mut current = mask.clone();
    for _ in 0..iterations {
        current = step(&current);
    }
    current
}

/// One pass. `all` selects erosion (every neighbor set) over dilation
/// (any neighbor set).
fn apply(mask: &BooleanMap, element: StructuringElement, all: bool) -> BooleanMap {
    let (w, h) = (mask.width() as isize, mask.height() as isize);
    let bits = mask.bits();
    let mut out = Vec::with_capacity(bits.len());

    for y in 0..h {
        for x in 0..w {
            let mut neighbors = element.offsets().iter().filter_map(|&(dx, dy)| {
                let (nx, ny) = (x + dx, y + dy);
                (nx >= 0 && nx < w && ny >= 0 && ny < h).then(|| bits[(ny * w + nx) as usize])
            });
            let value = if all {
                neighbors.all(|b| b)
            } else {
                neighbors.any(|b| b)
            };
            out.push(value);
        }
    }

    BooleanMap::new(out, mask.width(), mask.height())
}

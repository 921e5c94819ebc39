//! Border-seeded background flood fill.
//!
//! Labels live in their own grid, so a pixel's mask value and its
//! background marking can never be confused.

use crate::mask::BooleanMap;

/// Fill state of one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Unvisited,
    Background,
}

const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Background labelling over one boolean map.
pub struct BackgroundFill<'a> {
    mask: &'a BooleanMap,
    labels: Vec<Label>,
    stack: Vec<(usize, usize)>,
}

impl<'a> BackgroundFill<'a> {
    pub fn new(mask: &'a BooleanMap) -> Self {
        Self {
            mask,
            labels: vec![Label::Unvisited; mask.bits().len()],
            stack: Vec::new(),
        }
    }

    #[inline]
    pub fn is_background(&self, x: usize, y: usize) -> bool {
        self.labels[y * self.mask.width() + x] == Label::Background
    }

    /// Mark every pixel 8-connected to `(x, y)` with the same mask value as
    /// background. Returns the number of newly marked pixels; a seed that
    /// is already background marks nothing.
    pub fn fill_from(&mut self, x: usize, y: usize) -> usize {
        if self.is_background(x, y) {
            return 0;
        }

        let (w, h) = (self.mask.width() as isize, self.mask.height() as isize);
        let value = self.mask.get(x, y);
        let mut marked = 0;

        self.labels[y * self.mask.width() + x] = Label::Background;
        self.stack.push((x, y));

        while let Some((cx, cy)) = self.stack.pop() {
            marked += 1;
            for (dx, dy) in NEIGHBORS_8 {
                let (nx, ny) = (cx as isize + dx, cy as isize + dy);
                if nx < 0 || nx >= w || ny < 0 || ny >= h {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                let idx = ny * self.mask.width() + nx;
                if self.labels[idx] == Label::Unvisited && self.mask.get(nx, ny) == value {
                    self.labels[idx] = Label::Background;
                    self.stack.push((nx, ny));
                }
            }
        }

        marked
    }

    /// Pixels never reached by any fill.
    pub fn foreground(&self) -> BooleanMap {
        self.to_map(Label::Unvisited)
    }

    /// Pixels reached by at least one fill.
    pub fn background(&self) -> BooleanMap {
        self.to_map(Label::Background)
    }

    fn to_map(&self, label: Label) -> BooleanMap {
        BooleanMap::new(
            self.labels.iter().map(|&l| l == label).collect(),
            self.mask.width(),
            self.mask.height(),
        )
    }
}

use std::fmt::Display;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Pixel};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

impl Side {
    /// Clockwise rotation count which moves a border from this side to the target side.
    pub fn rot_n_to(&self, target: Side) -> usize {
        usize::from((target as u8 + 4 - *self as u8) % 4)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderKind {
    pub side: Side,
    pub flipped: bool,
}

impl BorderKind {
    pub fn new(side: Side, flipped: bool) -> Self {
        Self { side, flipped }
    }

    pub fn all_kinds() -> &'static [BorderKind] {
        static ALL_KINDS: [BorderKind; 8] = [
            BorderKind { side: Side::Top, flipped: false },
            BorderKind { side: Side::Right, flipped: false },
            BorderKind { side: Side::Bottom, flipped: false },
            BorderKind { side: Side::Left, flipped: false },
            BorderKind { side: Side::Top, flipped: true },
            BorderKind { side: Side::Right, flipped: true },
            BorderKind { side: Side::Bottom, flipped: true },
            BorderKind { side: Side::Left, flipped: true },
        ];

        &ALL_KINDS
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Vec<Pixel>,
    rows_n: usize,
    cols_n: usize,
}

impl Display for PixelGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows_n {
            for c in 0..self.cols_n {
                write!(f, "{}", self.pixels[r * self.cols_n + c])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl PixelGrid {
    pub(crate) fn new(pixels: Vec<Pixel>, rows_n: usize, cols_n: usize) -> Self {
        Self {
            pixels,
            rows_n,
            cols_n,
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.rows_n, self.cols_n)
    }

    pub fn pixel(&self, r: usize, c: usize) -> Option<&Pixel> {
        if r >= self.rows_n || c >= self.cols_n {
            None
        } else {
            self.pixels.get(r * self.cols_n + c)
        }
    }

    pub(crate) fn set_pixel(&mut self, r: usize, c: usize, p: Pixel) {
        if r < self.rows_n && c < self.cols_n {
            self.pixels[r * self.cols_n + c] = p;
        }
    }

    pub fn rotate_clockwise(&mut self) {
        let mut rotated = vec![Pixel::Black; self.pixels.len()];
        // Pixel at (r, c) moves to (c, rows_n - 1 - r), rows and columns swap counts.
        for r in 0..self.rows_n {
            for c in 0..self.cols_n {
                rotated[c * self.rows_n + (self.rows_n - 1 - r)] =
                    self.pixels[r * self.cols_n + c];
            }
        }

        self.pixels = rotated;
        std::mem::swap(&mut self.rows_n, &mut self.cols_n);
    }

    pub fn flip_horizontal(&mut self) {
        if self.cols_n == 0 {
            return;
        }

        for row in self.pixels.chunks_mut(self.cols_n) {
            row.reverse();
        }
    }

    pub fn white_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p == Pixel::White).count()
    }
}

pub struct Tile {
    id: usize,
    grid: PixelGrid,
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Tile {
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn size(&self) -> (usize, usize) {
        self.grid.size()
    }

    pub fn pixel(&self, r: usize, c: usize) -> Option<&Pixel> {
        self.grid.pixel(r, c)
    }

    pub fn rotate_clockwise(&mut self) {
        self.grid.rotate_clockwise();
    }

    pub fn flip_horizontal(&mut self) {
        self.grid.flip_horizontal();
    }

    /// Folds one border's pixels into an integer, white pixels set the bit at
    /// their distance along the traversal. The flipped variants read the
    /// border as it would appear after flipping the tile horizontally.
    pub fn border_id(&self, kind: BorderKind) -> usize {
        let (rows_n, cols_n) = self.grid.size();
        match (kind.side, kind.flipped) {
            (Side::Top, false) => self.fold_border((0..cols_n).map(|c| (0, c))),
            (Side::Top, true) => self.fold_border((0..cols_n).rev().map(|c| (0, c))),
            (Side::Right, false) => self.fold_border((0..rows_n).map(|r| (r, cols_n - 1))),
            (Side::Right, true) => self.fold_border((0..rows_n).map(|r| (r, 0))),
            (Side::Bottom, false) => {
                self.fold_border((0..cols_n).rev().map(|c| (rows_n - 1, c)))
            }
            (Side::Bottom, true) => self.fold_border((0..cols_n).map(|c| (rows_n - 1, c))),
            (Side::Left, false) => self.fold_border((0..rows_n).rev().map(|r| (r, 0))),
            (Side::Left, true) => self.fold_border((0..rows_n).rev().map(|r| (r, cols_n - 1))),
        }
    }

    fn fold_border(&self, pos_iter: impl Iterator<Item = (usize, usize)>) -> usize {
        pos_iter.enumerate().fold(0, |id, (bit, (r, c))| {
            id | usize::from(self.grid.pixel(r, c).is_some_and(|p| *p == Pixel::White)) << bit
        })
    }
}

pub struct TileBuilder {
    id: usize,
    pixels: Vec<Pixel>,
    rows_n: usize,
    cols_n: Option<usize>,
}

impl TryFrom<&str> for TileBuilder {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"Tile\s+(\d+):").unwrap());

        PATTERN
            .captures(value)
            .ok_or(Error::InvalidTileHeader(value.to_string()))
            .and_then(|caps| {
                caps[1]
                    .parse::<usize>()
                    .map_err(|_| Error::InvalidTileIDText(caps[1].to_string()))
                    .map(TileBuilder::new)
            })
    }
}

impl TileBuilder {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            pixels: Vec::new(),
            rows_n: 0,
            cols_n: None,
        }
    }

    pub fn build(self) -> Tile {
        let cols_n = self.cols_n.unwrap_or(0);
        Tile {
            id: self.id,
            grid: PixelGrid::new(self.pixels, self.rows_n, cols_n),
        }
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_cols_n = text.chars().count();
        if *self.cols_n.get_or_insert(this_cols_n) != this_cols_n {
            return Err(Error::InconsistentColNum(this_cols_n, self.cols_n.unwrap()));
        }

        for c in text.chars() {
            self.pixels.push(Pixel::try_from(c)?);
        }
        self.rows_n += 1;

        Ok(())
    }
}

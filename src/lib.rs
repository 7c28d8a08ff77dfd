use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

mod image;
mod monster;
mod registry;
mod tile;

pub use image::{assemble, Image, TileGrid};
pub use monster::mark_monsters;
pub use registry::{BorderOwner, BorderRegistry};
pub use tile::{BorderKind, Side, Tile, TileBuilder};

#[derive(Debug)]
pub enum Error {
    InvalidTileHeader(String),
    InvalidTileIDText(String),
    InconsistentColNum(usize, usize), // (number of columns in current row, expected column numbers in earlier rows).
    InvalidPixelChar(char),
    InconsistentTileSize,
    TilesAreNotSquare,
    TileCountNotSquare(usize),
    UnpairedBorder(usize, usize), // (border id, number of owners).
    CornerCountNotFour(usize),
    NoAlignedCorner,
    NeighborNotFound(usize),
    TileAlreadyPlaced(usize),
    UnfilledSlot(usize, usize),
    MonsterNotFound,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidTileHeader(s) => write!(f, "Invalid tile header: {}", s),
            Error::InvalidTileIDText(s) => write!(f, "Invalid tile id: {}", s),
            Error::InconsistentColNum(this_cols_n, expect_cols_n) => write!(
                f,
                "Found inconsistent column number({}), expect {} columns according to earlier rows",
                this_cols_n, expect_cols_n
            ),
            Error::InvalidPixelChar(c) => write!(f, "Invalid character for pixel: {}", c),
            Error::InconsistentTileSize => write!(f, "Given tiles have inconsistent size."),
            Error::TilesAreNotSquare => write!(
                f,
                "Given tiles are not square, expect squares which can keep size when flip and rotate."
            ),
            Error::TileCountNotSquare(n) => write!(
                f,
                "Tile count({}) is not a perfect square, so the tiles can't form a square image",
                n
            ),
            Error::UnpairedBorder(border_id, owners_n) => write!(
                f,
                "Border id {} has {} owners, expect 1 (outer border) or 2 (interior seam)",
                border_id, owners_n
            ),
            Error::CornerCountNotFour(n) => {
                write!(f, "Found {} corner tiles, expect exactly 4", n)
            }
            Error::NoAlignedCorner => write!(
                f,
                "No corner tile has its two outer borders at the top and left sides"
            ),
            Error::NeighborNotFound(border_id) => write!(
                f,
                "No tile other than the current one owns border id {}",
                border_id
            ),
            Error::TileAlreadyPlaced(id) => {
                write!(f, "Tile {} is already placed in the image", id)
            }
            Error::UnfilledSlot(r, c) => write!(
                f,
                "No tile is placed at row {}, column {} of the image",
                r, c
            ),
            Error::MonsterNotFound => write!(
                f,
                "Failed to find any monster in all 8 orientations of the image"
            ),
        }
    }
}
impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    Black,
    White,
    Marked,
}

impl TryFrom<char> for Pixel {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '.' => Ok(Pixel::Black),
            '#' => Ok(Pixel::White),
            other => Err(Error::InvalidPixelChar(other)),
        }
    }
}

impl Display for Pixel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pixel::Black => write!(f, "."),
            Pixel::White => write!(f, "#"),
            Pixel::Marked => write!(f, "O"),
        }
    }
}

pub fn read_tiles<P: AsRef<Path>>(path: P) -> Result<Vec<Tile>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut tiles = Vec::new();
    let mut builder: Option<TileBuilder> = None;
    for (ind, l) in reader.lines().enumerate() {
        let s = l.with_context(|| format!("Failed to read line {}.", ind + 1))?;
        if s.is_empty() {
            if let Some(builder) = builder.take() {
                tiles.push(builder.build());
            }
            continue;
        }

        if let Some(builder) = builder.as_mut() {
            builder
                .add_row(s.as_str())
                .context("Failed to add a new row to the building tile.")?;
        } else {
            builder = Some(
                TileBuilder::try_from(s.as_str())
                    .context("Failed to construct a new tile builder from id line.")?,
            );
        }
    }
    if let Some(builder) = builder.take() {
        tiles.push(builder.build());
    }

    Ok(tiles)
}

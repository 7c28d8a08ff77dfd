use std::{collections::HashMap, fmt::Display};

use crate::{
    registry::BorderRegistry,
    tile::{BorderKind, PixelGrid, Side, Tile},
    Error, Pixel,
};

pub struct TileGrid {
    tiles: Vec<Tile>,
    size: usize,
}

impl TileGrid {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tile(&self, r: usize, c: usize) -> Option<&Tile> {
        if r >= self.size || c >= self.size {
            None
        } else {
            self.tiles.get(r * self.size + c)
        }
    }

    /// Strips the border ring of every placed tile and concatenates the
    /// interiors into one contiguous pixel grid.
    pub fn stitch(&self) -> Image {
        let tile_rows_n = self.tiles.first().map(|t| t.size().0).unwrap_or(0);
        let interior_n = tile_rows_n.saturating_sub(2);
        let pixel_n = self.size * interior_n;
        let mut pixels = vec![Pixel::Black; pixel_n * pixel_n];
        for (ind, tile) in self.tiles.iter().enumerate() {
            let tile_r = ind / self.size;
            let tile_c = ind % self.size;
            for r in 0..interior_n {
                for c in 0..interior_n {
                    if let Some(p) = tile.pixel(r + 1, c + 1) {
                        pixels[(tile_r * interior_n + r) * pixel_n + tile_c * interior_n + c] =
                            *p;
                    }
                }
            }
        }

        Image {
            grid: PixelGrid::new(pixels, pixel_n, pixel_n),
        }
    }
}

pub struct Image {
    grid: PixelGrid,
}

impl Display for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Image {
    pub fn size(&self) -> (usize, usize) {
        self.grid.size()
    }

    pub fn pixel(&self, r: usize, c: usize) -> Option<&Pixel> {
        self.grid.pixel(r, c)
    }

    pub(crate) fn mark(&mut self, r: usize, c: usize) {
        self.grid.set_pixel(r, c, Pixel::Marked);
    }

    pub fn rotate_clockwise(&mut self) {
        self.grid.rotate_clockwise();
    }

    pub fn flip_horizontal(&mut self) {
        self.grid.flip_horizontal();
    }

    /// Count of white pixels, after monster marking this is the roughness.
    pub fn white_count(&self) -> usize {
        self.grid.white_count()
    }
}

/// Places every tile into an n by n grid, n being the square root of the
/// tile count. Starts from a corner tile already oriented to the top left,
/// then fills in row-major order, resolving each right and bottom neighbor
/// from the border registry and re-orienting it to fit.
pub fn assemble(tiles: Vec<Tile>) -> Result<TileGrid, Error> {
    let tiles_n = tiles.len();
    let size = (0..=tiles_n).find(|n| n * n >= tiles_n).unwrap_or(0);
    if size * size != tiles_n {
        return Err(Error::TileCountNotSquare(tiles_n));
    }

    if !tiles.is_empty() && !tiles.iter().skip(1).all(|t| t.size() == tiles[0].size()) {
        return Err(Error::InconsistentTileSize);
    }
    if let Some((rows_n, cols_n)) = tiles.first().map(|t| t.size()) {
        if rows_n != cols_n {
            return Err(Error::TilesAreNotSquare);
        }
    }

    let registry = BorderRegistry::build(&tiles);
    registry.check_owner_counts()?;

    // The seed corner keeps its input orientation, so its two outer borders
    // must already lie at the top and left sides.
    let top_left_id = tiles
        .iter()
        .map(|t| t.id())
        .filter(|id| registry.is_corner(*id))
        .find(|id| {
            registry
                .unique_kinds(*id)
                .iter()
                .filter(|k| !k.flipped && matches!(k.side, Side::Top | Side::Left))
                .count()
                == 2
        })
        .ok_or(Error::NoAlignedCorner)?;

    let mut pool = tiles
        .into_iter()
        .map(|t| (t.id(), t))
        .collect::<HashMap<_, _>>();
    let mut slots = (0..tiles_n).map(|_| None).collect::<Vec<Option<Tile>>>();
    slots[0] = pool.remove(&top_left_id);

    for ind in 0..tiles_n {
        let row = ind / size;
        let col = ind % size;
        // The current tile's right border read bottom up equals the right
        // neighbor's left border read the same way, and its bottom border
        // read left to right equals the bottom neighbor's top border. Both
        // are the flipped readings of the current tile's own sides.
        let right_slot = (col + 1 < size)
            .then(|| (BorderKind::new(Side::Left, true), Side::Left, ind + 1));
        let bottom_slot = (row + 1 < size)
            .then(|| (BorderKind::new(Side::Bottom, true), Side::Top, ind + size));
        for (lookup_kind, matching_side, n_ind) in [right_slot, bottom_slot].into_iter().flatten()
        {
            if slots[n_ind].is_some() {
                continue;
            }

            let (cur_id, lookup_id) = {
                let cur = slots[ind].as_ref().ok_or(Error::UnfilledSlot(row, col))?;
                (cur.id(), cur.border_id(lookup_kind))
            };
            let neighbor = registry
                .paired_owners(lookup_id)?
                .into_iter()
                .find(|owner| owner.tile_id != cur_id)
                .ok_or(Error::NeighborNotFound(lookup_id))?;
            let mut tile = pool
                .remove(&neighbor.tile_id)
                .ok_or(Error::TileAlreadyPlaced(neighbor.tile_id))?;
            // The owner's kind is a reading of the candidate in its input
            // orientation, so flip first when the match came from a flipped
            // reading, then rotate the matched side into place.
            if neighbor.kind.flipped {
                tile.flip_horizontal();
            }
            for _ in 0..neighbor.kind.side.rot_n_to(matching_side) {
                tile.rotate_clockwise();
            }
            slots[n_ind] = Some(tile);
        }
    }

    let mut placed = Vec::with_capacity(tiles_n);
    for (ind, slot) in slots.into_iter().enumerate() {
        placed.push(slot.ok_or(Error::UnfilledSlot(ind / size, ind % size))?);
    }

    Ok(TileGrid {
        tiles: placed,
        size,
    })
}

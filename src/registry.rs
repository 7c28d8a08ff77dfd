use std::collections::HashMap;

use crate::{
    tile::{BorderKind, Tile},
    Error,
};

#[derive(Debug, Clone, Copy)]
pub struct BorderOwner {
    pub tile_id: usize,
    pub kind: BorderKind,
}

/// Index from border id to every (tile, side, flipped) reading producing it.
/// In a well formed input every border id has exactly 1 owner (outer border
/// of the assembled image) or 2 owners (interior seam).
pub struct BorderRegistry {
    owners: HashMap<usize, Vec<BorderOwner>>,
}

impl BorderRegistry {
    pub fn build(tiles: &[Tile]) -> Self {
        let mut owners: HashMap<usize, Vec<BorderOwner>> = HashMap::new();
        for tile in tiles {
            for kind in BorderKind::all_kinds() {
                owners
                    .entry(tile.border_id(*kind))
                    .or_default()
                    .push(BorderOwner {
                        tile_id: tile.id(),
                        kind: *kind,
                    });
            }
        }

        Self { owners }
    }

    pub fn owners(&self, border_id: usize) -> &[BorderOwner] {
        self.owners
            .get(&border_id)
            .map(|owners| owners.as_slice())
            .unwrap_or(&[])
    }

    /// Owners of a border id expected to be an interior seam.
    pub fn paired_owners(&self, border_id: usize) -> Result<[BorderOwner; 2], Error> {
        match self.owners(border_id) {
            &[first, second] => Ok([first, second]),
            owners => Err(Error::UnpairedBorder(border_id, owners.len())),
        }
    }

    pub fn check_owner_counts(&self) -> Result<(), Error> {
        for (border_id, owners) in &self.owners {
            if owners.is_empty() || owners.len() > 2 {
                return Err(Error::UnpairedBorder(*border_id, owners.len()));
            }
        }

        Ok(())
    }

    /// Border readings of the given tile whose id no other tile produces.
    /// One physical outer border contributes two of them, its unflipped and
    /// flipped reading.
    pub fn unique_kinds(&self, tile_id: usize) -> Vec<BorderKind> {
        self.owners
            .values()
            .filter(|owners| owners.len() == 1)
            .map(|owners| owners[0])
            .filter(|owner| owner.tile_id == tile_id)
            .map(|owner| owner.kind)
            .collect()
    }

    fn unique_kind_counts(&self) -> HashMap<usize, usize> {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for owners in self.owners.values() {
            if owners.len() == 1 {
                *counts.entry(owners[0].tile_id).or_default() += 1;
            }
        }

        counts
    }

    /// A corner tile has 2 physical outer borders, hence exactly 4 unique
    /// border readings.
    pub fn is_corner(&self, tile_id: usize) -> bool {
        self.unique_kinds(tile_id).len() == 4
    }

    pub fn corner_ids(&self) -> Result<[usize; 4], Error> {
        self.check_owner_counts()?;
        let corner_ids = self
            .unique_kind_counts()
            .iter()
            .filter(|(_, unique_n)| **unique_n == 4)
            .map(|(tile_id, _)| *tile_id)
            .collect::<Vec<_>>();
        <[usize; 4]>::try_from(corner_ids.as_slice())
            .map_err(|_| Error::CornerCountNotFour(corner_ids.len()))
    }
}

use crate::{image::Image, Error, Pixel};

// Offsets of the monster's pixels relative to its anchor, (row, col).
const MONSTER_OFFSETS: [(isize, isize); 15] = [
    (0, 0),
    (1, 1),
    (1, 4),
    (0, 5),
    (0, 6),
    (1, 7),
    (1, 10),
    (0, 11),
    (0, 12),
    (1, 13),
    (1, 16),
    (0, 17),
    (0, 18),
    (0, 19),
    (-1, 18),
];

/// Searches the image for monsters over all 8 orientations (4 rotations,
/// then flipped and 4 rotations again), leaving it in the first orientation
/// yielding at least one match with every matched pixel marked. The monster
/// count is only meaningful in the true orientation, so the scan stops on
/// the first hit.
pub fn mark_monsters(image: &mut Image) -> Result<usize, Error> {
    for arrg_ind in 0..8 {
        let monsters_n = scan_and_mark(image);
        if monsters_n > 0 {
            return Ok(monsters_n);
        }

        if arrg_ind == 3 {
            image.flip_horizontal();
        } else if arrg_ind < 7 {
            image.rotate_clockwise();
        }
    }

    Err(Error::MonsterNotFound)
}

fn scan_and_mark(image: &mut Image) -> usize {
    let (rows_n, cols_n) = image.size();
    let mut monsters_n = 0;
    for anchor_r in 0..rows_n {
        for anchor_c in 0..cols_n {
            let matched_pos = MONSTER_OFFSETS
                .iter()
                .map(|(dr, dc)| {
                    (
                        anchor_r as isize + dr,
                        anchor_c as isize + dc,
                    )
                })
                .map(|(r, c)| usize::try_from(r).ok().zip(usize::try_from(c).ok()))
                .collect::<Option<Vec<_>>>();
            let Some(matched_pos) = matched_pos else {
                continue;
            };
            if matched_pos
                .iter()
                .all(|(r, c)| image.pixel(*r, *c).is_some_and(|p| *p == Pixel::White))
            {
                for (r, c) in matched_pos {
                    image.mark(r, c);
                }
                monsters_n += 1;
            }
        }
    }

    monsters_n
}

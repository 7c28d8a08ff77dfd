use day20::{BorderKind, Side, Tile, TileBuilder};

fn build_tile(id: usize, rows: &[&str]) -> Tile {
    let mut builder = TileBuilder::new(id);
    for row in rows {
        builder.add_row(row).unwrap();
    }

    builder.build()
}

fn test_tile() -> Tile {
    build_tile(1, &[".###", "....", "...#", "#..."])
}

#[test]
fn border_id_matches_fixture_values() {
    let tile = test_tile();
    let fixtures = [
        (Side::Top, false, 14),
        (Side::Right, false, 5),
        (Side::Bottom, false, 8),
        (Side::Left, false, 1),
        (Side::Top, true, 7),
        (Side::Right, true, 8),
        (Side::Bottom, true, 1),
        (Side::Left, true, 10),
    ];

    for (side, flipped, expect_id) in fixtures {
        assert_eq!(
            tile.border_id(BorderKind::new(side, flipped)),
            expect_id,
            "border id of ({:?}, flipped: {})",
            side,
            flipped
        );
    }
}

fn reverse_bits(value: usize, len: usize) -> usize {
    (0..len).fold(0, |rev, bit| rev | (value >> bit & 1) << (len - 1 - bit))
}

// A flipped reading walks the mirrored tile's border, so it must equal the
// bit-reversal of the unflipped reading of the side it mirrors to (top and
// bottom mirror to themselves, left and right swap).
#[test]
fn flipped_border_id_is_reversed_mirrored_border_id() {
    let tiles = day20::read_tiles("sample_tiles.txt").unwrap();
    let mirrors = [
        (Side::Top, Side::Top),
        (Side::Bottom, Side::Bottom),
        (Side::Right, Side::Left),
        (Side::Left, Side::Right),
    ];
    for tile in &tiles {
        let (_, edge_len) = tile.size();
        for (side, mirrored_side) in mirrors {
            assert_eq!(
                tile.border_id(BorderKind::new(side, true)),
                reverse_bits(tile.border_id(BorderKind::new(mirrored_side, false)), edge_len),
                "tile {}, side {:?}",
                tile.id(),
                side
            );
        }
    }
}

#[test]
fn rotate_clockwise_matches_fixture() {
    let mut tile = test_tile();
    tile.rotate_clockwise();

    assert_eq!(tile.to_string(), "#...\n...#\n...#\n.#.#\n");
}

#[test]
fn flip_horizontal_matches_fixture() {
    let mut tile = test_tile();
    tile.flip_horizontal();

    assert_eq!(tile.to_string(), "###.\n....\n#...\n...#\n");
}

#[test]
fn four_rotations_restore_tile() {
    let mut tile = test_tile();
    let org_text = tile.to_string();
    for _ in 0..4 {
        tile.rotate_clockwise();
    }

    assert_eq!(tile.to_string(), org_text);
}

#[test]
fn two_flips_restore_tile() {
    let mut tile = test_tile();
    let org_text = tile.to_string();
    for _ in 0..2 {
        tile.flip_horizontal();
    }

    assert_eq!(tile.to_string(), org_text);
}

#[test]
fn read_tiles_parse_all_sample_tiles() {
    let tiles = day20::read_tiles("sample_tiles.txt").unwrap();

    assert_eq!(tiles.len(), 9);
    assert!(tiles.iter().all(|t| t.size() == (10, 10)));
}

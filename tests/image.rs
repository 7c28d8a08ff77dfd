use day20::Error;

#[test]
fn assembled_grid_corner_id_product_matches_sample_answer() {
    let tiles = day20::read_tiles("sample_tiles.txt").unwrap();
    let tile_grid = day20::assemble(tiles).unwrap();

    let size = tile_grid.size();
    assert_eq!(size, 3);
    let corner_id_product = [
        (0, 0),
        (0, size - 1),
        (size - 1, 0),
        (size - 1, size - 1),
    ]
    .iter()
    .map(|(r, c)| tile_grid.tile(*r, *c).unwrap().id())
    .product::<usize>();
    assert_eq!(corner_id_product, 20899048083289);
}

#[test]
fn assembled_grid_places_every_tile_once() {
    let tiles = day20::read_tiles("sample_tiles.txt").unwrap();
    let mut expect_ids = tiles.iter().map(|t| t.id()).collect::<Vec<_>>();
    expect_ids.sort_unstable();

    let tile_grid = day20::assemble(tiles).unwrap();
    let size = tile_grid.size();
    let mut placed_ids = (0..size)
        .flat_map(|r| (0..size).map(move |c| (r, c)))
        .map(|(r, c)| tile_grid.tile(r, c).unwrap().id())
        .collect::<Vec<_>>();
    placed_ids.sort_unstable();

    assert_eq!(placed_ids, expect_ids);
}

#[test]
fn stitched_image_drops_tile_borders() {
    let tiles = day20::read_tiles("sample_tiles.txt").unwrap();
    let tile_grid = day20::assemble(tiles).unwrap();
    let image = tile_grid.stitch();

    // 3 tiles of 10 pixels a side, minus 2 border pixels each.
    assert_eq!(image.size(), (24, 24));
}

#[test]
fn marking_monsters_yields_sample_roughness() {
    let tiles = day20::read_tiles("sample_tiles.txt").unwrap();
    let tile_grid = day20::assemble(tiles).unwrap();
    let mut image = tile_grid.stitch();

    let monsters_n = day20::mark_monsters(&mut image).unwrap();
    assert_eq!(monsters_n, 2);
    assert_eq!(image.white_count(), 273);
    // 15 marked pixels per monster, none shared.
    assert_eq!(image.to_string().matches('O').count(), 30);
}

#[test]
fn assembling_non_square_tile_count_fails() {
    let mut tiles = day20::read_tiles("sample_tiles.txt").unwrap();
    tiles.pop();

    assert!(matches!(
        day20::assemble(tiles),
        Err(Error::TileCountNotSquare(8))
    ));
}

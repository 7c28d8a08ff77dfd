use anyhow::{Context, Result};
use clap::Parser;
use day20::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let tiles = day20::read_tiles(&args.input_path).with_context(|| {
        format!(
            "Failed to read tiles from given input file({}).",
            args.input_path.display()
        )
    })?;

    let tile_grid = day20::assemble(tiles).context("Failed to assemble image from given tiles.")?;
    let mut image = tile_grid.stitch();
    day20::mark_monsters(&mut image).context("Failed to mark monsters in assembled image.")?;
    println!("Part two: {}", image.white_count());

    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use day20::{BorderRegistry, CLIArgs};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let tiles = day20::read_tiles(&args.input_path).with_context(|| {
        format!(
            "Failed to read tiles from given input file({}).",
            args.input_path.display()
        )
    })?;

    let registry = BorderRegistry::build(&tiles);
    let corner_ids = registry
        .corner_ids()
        .context("Failed to find the corner tiles of the image.")?;
    println!("Part one: {}", corner_ids.iter().product::<usize>());

    Ok(())
}

//! Printing generations without the TUI.

use crate::args::Args;
use lifegrid_lib::World;
use log::info;
use std::{
    error::Error,
    io::{self, Write},
    iter,
};

/// Prints the initial world and the following `args.generations` generations.
pub(crate) fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let world = args.config.world()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_generations(&mut out, world, args.generations, args.rle)?;
    Ok(())
}

fn print_generations<W: Write>(out: &mut W, world: World, count: u64, rle: bool) -> io::Result<()> {
    let generations = iter::once(world.clone()).chain(world.generations());
    for (gen, world) in (0..=count).zip(generations) {
        writeln!(out, "Gen: {}  Cells: {}", gen, world.cell_count())?;
        if rle {
            write!(out, "{}", world.rle())?;
        } else {
            write!(out, "{}", world)?;
        }
        writeln!(out)?;
        if world.is_empty() {
            info!("every cell is dead after {} generations", gen);
            break;
        }
    }
    Ok(())
}

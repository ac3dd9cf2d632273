mod args;
mod cli;
mod file;
#[cfg(feature = "tui")]
mod tui;

use args::Args;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());

    #[cfg(feature = "tui")]
    if !args.no_tui {
        return tui::run(args);
    }

    cli::run(args)
}

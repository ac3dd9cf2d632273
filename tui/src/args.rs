//! Parsing command-line arguments.

use crate::file::load_config;
use clap::{
    builder::PossibleValuesParser,
    crate_authors, crate_description, crate_name, crate_version,
    error::{ErrorKind, Result as ClapResult},
    value_parser, Arg, ArgAction, Command,
};
use lifegrid_lib::{Config, Fill};
use std::{env, ffi::OsString, path::PathBuf};

#[cfg(feature = "tui")]
use std::time::Duration;

/// A struct to store the parse results.
#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) generations: u64,
    pub(crate) rle: bool,
    #[cfg(feature = "tui")]
    pub(crate) interval: Duration,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

fn command() -> Command {
    let mut command = Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .long_about(
            "Conway's Game of Life on a fixed-size square grid\n\
             \n\
             Cells outside of the grid are always dead; the grid does not wrap around.\n\
             \n\
             The world is displayed in Plaintext format.\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`.\n\
             With --rle, each line is ended with `$`, and the whole pattern with `!`.\n",
        )
        .arg(
            Arg::new("SIZE")
                .help("Side length of the grid [default: 50]")
                .index(1)
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("FILL")
                .help("How to fill the initial grid [default: random]")
                .short('f')
                .long("fill")
                .value_parser(PossibleValuesParser::new([
                    "dead", "alive", "random", "d", "a", "r",
                ])),
        )
        .arg(
            Arg::new("COUNT")
                .help("Number of random cells to set alive [default: 500]")
                .long_help(
                    "Number of random cells to set alive [default: 500]\n\
                     Positions are chosen independently, so the actual number of \
                     living cells may be smaller.\n\
                     Only useful when the fill is random.\n",
                )
                .short('c')
                .long("count")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random number generator")
                .short('s')
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a file")
                .long_help(
                    "Reads the configuration from a file\n\
                     Supported formats are JSON (.json), YAML (.yaml, .yml) and TOML (.toml).\n\
                     Other command-line arguments override the values in the file.\n",
                )
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to print without the TUI")
                .short('g')
                .long("generations")
                .default_value("10")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("RLE")
                .help("Prints in RLE instead of Plaintext without the TUI")
                .long("rle")
                .action(ArgAction::SetTrue),
        );

    #[cfg(feature = "tui")]
    {
        command = command
            .arg(
                Arg::new("INTERVAL")
                    .help("Milliseconds between two generations")
                    .short('i')
                    .long("interval")
                    .default_value("1000")
                    .value_parser(value_parser!(u64).range(1..)),
            )
            .arg(
                Arg::new("NOTUI")
                    .help("Prints the generations, without entering the TUI")
                    .short('n')
                    .long("no-tui")
                    .action(ArgAction::SetTrue),
            );
    }

    command
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> ClapResult<Self> {
        Args::parse_from(env::args_os())
    }

    /// Parses the given arguments.
    ///
    /// The first item is the name of the program.
    pub(crate) fn parse_from<I, T>(args: I) -> ClapResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = command();
        let matches = command.try_get_matches_from_mut(args)?;

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => load_config(path).map_err(|e| {
                command.error(
                    ErrorKind::Io,
                    format!("unable to load {}: {}", path.display(), e),
                )
            })?,
            None => Config::default(),
        };

        if let Some(&size) = matches.get_one::<u32>("SIZE") {
            config.size = size as isize;
        }
        if let Some(fill) = matches.get_one::<String>("FILL") {
            config.fill = match fill.as_str() {
                "dead" | "d" => Fill::Dead,
                "alive" | "a" => Fill::Alive,
                _ => Fill::Random,
            };
        }
        if let Some(&count) = matches.get_one::<usize>("COUNT") {
            config.sample_count = count;
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            config.seed = Some(seed);
        }

        if config.size <= 0 {
            return Err(command.error(
                ErrorKind::InvalidValue,
                format!("size must be a positive integer, got {}", config.size),
            ));
        }

        let generations = matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(10);
        let rle = matches.get_flag("RLE");
        #[cfg(feature = "tui")]
        let interval = Duration::from_millis(
            matches.get_one::<u64>("INTERVAL").copied().unwrap_or(1000),
        );
        #[cfg(feature = "tui")]
        let no_tui = matches.get_flag("NOTUI");

        Ok(Args {
            config,
            generations,
            rle,
            #[cfg(feature = "tui")]
            interval,
            #[cfg(feature = "tui")]
            no_tui,
        })
    }
}

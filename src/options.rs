use std::path::PathBuf;
use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::AppConfig;
use crate::domain::{Board, Pattern, presets};
use crate::error::{AppError, ConfigError};

pub const DEFAULT_CONFIG_PATH: &str = "life.toml";

/// Command line arguments shared by the window and console binaries
pub struct Args {
    matches: getopts::Matches,
}

fn options() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optflag("", "help", "print this help menu");
    opts.optopt("c", "config", "config file (default life.toml)", "FILE");
    opts.optopt("r", "rows", "set board rows", "ROWS");
    opts.optopt("k", "cols", "set board columns", "COLS");
    opts.optopt("s", "speed", "generations per second", "RATE");
    opts.optopt("p", "pattern", "start with a preset pattern in the center", "NAME");
    opts.optflag("", "random", "start with a random board");
    opts.optopt("", "seed", "seed for --random", "SEED");
    opts.optopt("g", "generations", "number of generations to print (console only)", "COUNT");
    opts
}

impl Args {
    /// Parse arguments. Returns `Ok(None)` when help was requested and printed.
    pub fn new<T: AsRef<str>>(args: &[T], program: &str) -> Result<Option<Self>, ConfigError> {
        let opts = options();
        let matches = opts
            .parse(args.iter().map(T::as_ref))
            .map_err(|e| ConfigError::Arguments(e.to_string()))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage(&format!("usage: {program} [options]")));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }

    pub fn from_env(program: &str) -> Result<Option<Self>, ConfigError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(env.get(1..).unwrap_or_default(), program)
    }

    fn get<V: FromStr>(&self, name: &str) -> Result<Option<V>, ConfigError> {
        self.matches.opt_get(name).map_err(|_| {
            let raw = self.matches.opt_str(name).unwrap_or_default();
            ConfigError::Arguments(format!("invalid value for --{name}: {raw:?}"))
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.matches
            .opt_str("config")
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
    }

    pub fn generations(&self) -> Result<usize, ConfigError> {
        Ok(self.get("generations")?.unwrap_or(10))
    }

    /// Load the config file and apply command line overrides on top of it
    pub fn settings(&self) -> Result<AppConfig, ConfigError> {
        let mut config = AppConfig::load_or_default(&self.config_path())?;
        if let Some(rows) = self.get("rows")? {
            config.board.rows = rows;
        }
        if let Some(cols) = self.get("cols")? {
            config.board.cols = cols;
        }
        if let Some(speed) = self.get("speed")? {
            config.simulation.updates_per_second = speed;
        }
        config.validate()?;
        Ok(config)
    }

    /// Pattern requested with --pattern, if any
    pub fn pattern(&self) -> Result<Option<Pattern>, ConfigError> {
        self.matches
            .opt_str("pattern")
            .map(|name| presets::find(&name).ok_or(ConfigError::UnknownPattern(name)))
            .transpose()
    }

    /// Build the starting board described by the arguments
    pub fn initial_board(&self, config: &AppConfig) -> Result<Board, AppError> {
        let board = Board::new(config.board.rows, config.board.cols)?;
        let board = if self.matches.opt_present("random") {
            let mut rng = match self.get::<u64>("seed")? {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            board.randomize(&mut rng, config.simulation.random_density)
        } else {
            board
        };

        Ok(match self.pattern()? {
            Some(pattern) => {
                let (rows, cols) = board.dimensions();
                let center = ((rows / 2) as i32, (cols / 2) as i32).into();
                pattern.place_centered(&board, center)
            }
            None => board,
        })
    }
}

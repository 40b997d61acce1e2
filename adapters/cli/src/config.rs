//! Layered configuration: built-in defaults, then an optional TOML file, then
//! command-line flags.

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use life_core::{CellColor, CellSize, PatternName, Viewport};
use life_world::WorldSettings;
use serde::Deserialize;
use thiserror::Error;

/// Filter applied when neither the flag, `RUST_LOG` nor the file set one.
const DEFAULT_LOG_FILTER: &str = "info";
/// Generations per second while simulating.
const DEFAULT_TICKS_PER_SECOND: u32 = 10;

/// Interactive Conway's Game of Life.
#[derive(Debug, Default, Parser)]
#[command(name = "game-of-life", version, about)]
pub(crate) struct Args {
    /// TOML file providing defaults for every other option.
    #[arg(long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Window width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Initial cell edge length in pixels, clamped to 10..=40.
    #[arg(long)]
    cell_size: Option<u32>,

    /// Generations per second while simulating.
    #[arg(long = "tps", value_name = "TICKS")]
    ticks_per_second: Option<u32>,

    /// Initial live-cell colour (RED, GREEN, BLUE, CYAN, YELLOW, MAGENTA).
    #[arg(long)]
    color: Option<CellColor>,

    /// Initial seed pattern (EMPTY, GLIDER, PULSAR, ACORN).
    #[arg(long)]
    pattern: Option<PatternName>,

    /// Begin on the grid instead of the start screen.
    #[arg(long)]
    skip_start_screen: bool,

    /// Synchronise presentation with the display refresh rate.
    #[arg(long, value_name = "BOOL")]
    vsync: Option<bool>,

    /// Log the frame rate once per second.
    #[arg(long)]
    show_fps: bool,

    /// Tracing filter directive, e.g. `debug` or `life_world=trace`.
    #[arg(long = "log", value_name = "FILTER")]
    log_filter: Option<String>,
}

/// Contents of the optional TOML configuration file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    window_width: Option<u32>,
    window_height: Option<u32>,
    cell_size: Option<CellSize>,
    ticks_per_second: Option<u32>,
    color: Option<CellColor>,
    pattern: Option<PatternName>,
    skip_start_screen: Option<bool>,
    vsync: Option<bool>,
    show_fps: Option<bool>,
    log_filter: Option<String>,
}

impl FileConfig {
    /// Reads and parses the file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&text, path)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

/// Errors raised while assembling [`Settings`].
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {}", path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for this program.
    #[error("failed to parse config file {}", path.display())]
    Parse {
        /// File that was parsed.
        path: PathBuf,
        /// Underlying TOML failure.
        #[source]
        source: toml::de::Error,
    },
    /// Simulation cannot advance at zero generations per second.
    #[error("ticks_per_second must be positive")]
    ZeroTickRate,
}

/// Fully resolved program settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    /// Geometry and initial selections handed to the world.
    pub(crate) world: WorldSettings,
    /// Generations per second while simulating.
    pub(crate) ticks_per_second: u32,
    /// Whether the session starts immediately.
    pub(crate) skip_start_screen: bool,
    /// Whether presentation waits for the display refresh.
    pub(crate) vsync: bool,
    /// Whether the frame rate is logged at info level.
    pub(crate) show_fps: bool,
    /// Tracing filter directive.
    pub(crate) log_filter: String,
}

impl Settings {
    /// Merges flags over the file over built-in defaults.
    ///
    /// `env_filter` is the value of `RUST_LOG`, which sits between the
    /// `--log` flag and the file.
    pub(crate) fn resolve(
        args: &Args,
        file: FileConfig,
        env_filter: Option<String>,
    ) -> Result<Self, ConfigError> {
        let defaults = Viewport::DEFAULT;
        let viewport = Viewport::new(
            args.width.or(file.window_width).unwrap_or(defaults.width()),
            args.height
                .or(file.window_height)
                .unwrap_or(defaults.height()),
        );
        let cell_size = args
            .cell_size
            .map(CellSize::new)
            .or(file.cell_size)
            .unwrap_or_default();

        let ticks_per_second = args
            .ticks_per_second
            .or(file.ticks_per_second)
            .unwrap_or(DEFAULT_TICKS_PER_SECOND);
        if ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(Self {
            world: WorldSettings {
                viewport,
                cell_size,
                color: args.color.or(file.color).unwrap_or_default(),
                pattern: args.pattern.or(file.pattern).unwrap_or_default(),
            },
            ticks_per_second,
            skip_start_screen: args.skip_start_screen
                || file.skip_start_screen.unwrap_or(false),
            vsync: args.vsync.or(file.vsync).unwrap_or(true),
            show_fps: args.show_fps || file.show_fps.unwrap_or(false),
            log_filter: args
                .log_filter
                .clone()
                .or(env_filter)
                .or(file.log_filter)
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned()),
        })
    }
}

#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that boots the Game of Life window.

mod config;
mod session;

use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use life_core::GAME_TITLE;
use life_rendering::{Color, Presentation, RenderingBackend};
use life_rendering_macroquad::MacroquadBackend;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{
    config::{Args, FileConfig, Settings},
    session::Session,
};

/// Installs the global tracing subscriber.
fn configure_tracing(filter: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(filter).with_context(|| format!("invalid log filter `{filter}`"))?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_filter(filter))
        .try_init()
        .context("failed to install tracing subscriber")
}

/// Entry point for the Game of Life command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&args, file, env::var("RUST_LOG").ok())?;
    configure_tracing(&settings.log_filter)?;

    info!(
        viewport = ?settings.world.viewport,
        cell_size = %settings.world.cell_size,
        ticks_per_second = settings.ticks_per_second,
        "starting game of life"
    );

    let mut session = Session::new(&settings).context("failed to create the session")?;
    let presentation = Presentation::new(
        GAME_TITLE,
        settings.world.viewport,
        Color::WHITE,
        session.scene(),
    )?;

    MacroquadBackend::new()
        .with_vsync(settings.vsync)
        .with_show_fps(settings.show_fps)
        .run(presentation, move |dt, input, scene| {
            *scene = session.advance(dt, input);
        })
}

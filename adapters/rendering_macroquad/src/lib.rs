#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed rendering adapter for the Game of Life.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment.
//! To keep `cargo test` usable everywhere we depend on macroquad without its
//! default `audio` feature.
//!
//! Button and text drawing lives in the local `ui` module. Input is sampled
//! once per frame into [`FrameObservations`] and resolved against the shared
//! layouts before the scene update closure runs.

mod ui;

use anyhow::Result;
use glam::Vec2;
use life_core::Viewport;
use life_rendering::{
    ControlPanelLayout, FrameInput, Presentation, RenderingBackend, Scene, StartScreenLayout,
    UiAction,
};
use macroquad::input::{is_key_pressed, is_mouse_button_pressed, mouse_position, KeyCode, MouseButton};
use std::time::Duration;
use tracing::{debug, info};

/// Snapshot of edge-triggered keyboard shortcuts observed during a single frame.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyboardShortcuts {
    /// `Q` or `Escape` to quit the game loop.
    pub quit_requested: bool,
    /// `Enter` leaves the start screen.
    pub start: bool,
    /// `Space` switches between exploration and simulation.
    pub toggle_simulation: bool,
    /// `Right` or `.` advances one generation.
    pub step: bool,
    /// `Left` or `Backspace` restores the previous generation.
    pub undo: bool,
    /// `C` clears the grid.
    pub clear: bool,
    /// `=` or keypad `+` enlarges cells.
    pub grow: bool,
    /// `-` or keypad `-` shrinks cells.
    pub shrink: bool,
}

impl KeyboardShortcuts {
    fn poll() -> Self {
        let any = |keys: &[KeyCode]| keys.iter().any(|key| is_key_pressed(*key));

        Self {
            quit_requested: any(&[KeyCode::Escape, KeyCode::Q]),
            start: any(&[KeyCode::Enter, KeyCode::KpEnter]),
            toggle_simulation: any(&[KeyCode::Space]),
            step: any(&[KeyCode::Right, KeyCode::Period]),
            undo: any(&[KeyCode::Left, KeyCode::Backspace]),
            clear: any(&[KeyCode::C]),
            grow: any(&[KeyCode::Equal, KeyCode::KpAdd]),
            shrink: any(&[KeyCode::Minus, KeyCode::KpSubtract]),
        }
    }
}

/// Raw input sampled from the platform for one frame.
#[doc(hidden)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameObservations {
    /// Cursor position of a left click that started this frame, if any.
    pub click: Option<Vec2>,
    /// Keyboard shortcuts pressed this frame.
    pub keyboard: KeyboardShortcuts,
}

impl FrameObservations {
    fn poll() -> Self {
        let click = is_mouse_button_pressed(MouseButton::Left).then(|| {
            let (x, y) = mouse_position();
            Vec2::new(x, y)
        });
        Self {
            click,
            keyboard: KeyboardShortcuts::poll(),
        }
    }
}

/// Resolves one frame of raw input into the actions the scene reacts to.
///
/// The click is resolved first, followed by keyboard shortcuts in a fixed
/// order. Shortcuts that have no meaning on the current screen are dropped.
#[doc(hidden)]
#[must_use]
pub fn gather_frame_input_from_observations(
    scene: &Scene,
    viewport: Viewport,
    observations: FrameObservations,
) -> FrameInput {
    let mut actions = Vec::new();
    if let Some(point) = observations.click {
        actions.extend(scene.hit_test(viewport, point));
    }

    let keyboard = observations.keyboard;
    match scene {
        Scene::Start(_) => {
            if keyboard.start {
                actions.push(UiAction::Start);
            }
        }
        Scene::Running(_) => {
            let shortcuts = [
                (keyboard.toggle_simulation, UiAction::ToggleSimulation),
                (keyboard.step, UiAction::StepForward),
                (keyboard.undo, UiAction::Undo),
                (keyboard.clear, UiAction::Clear),
                (keyboard.grow, UiAction::Grow),
                (keyboard.shrink, UiAction::Shrink),
            ];
            actions.extend(
                shortcuts
                    .into_iter()
                    .filter_map(|(pressed, action)| pressed.then_some(action)),
            );
        }
    }

    FrameInput { actions }
}

/// Rendering backend implemented on top of macroquad.
#[derive(Clone, Copy, Debug, Default)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
    show_fps: bool,
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }

    /// Configures whether the backend logs the frame rate once per second.
    #[must_use]
    pub fn with_show_fps(mut self, show: bool) -> Self {
        self.show_fps = show;
        self
    }
}

/// Tracks the average frames-per-second produced by the render loop.
#[derive(Debug, Default)]
struct FpsCounter {
    elapsed: Duration,
    frames: u32,
}

impl FpsCounter {
    /// Records a rendered frame and returns the average rate once a second has elapsed.
    fn record_frame(&mut self, frame: Duration) -> Option<f32> {
        self.elapsed += frame;
        self.frames = self.frames.saturating_add(1);

        if self.elapsed < Duration::from_secs(1) {
            return None;
        }

        let per_second = self.frames as f32 / self.elapsed.as_secs_f32();
        self.elapsed = Duration::ZERO;
        self.frames = 0;
        Some(per_second)
    }
}

impl RenderingBackend for MacroquadBackend {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> Result<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static,
    {
        let Self {
            swap_interval,
            show_fps,
        } = self;

        let Presentation {
            window_title,
            viewport,
            clear_color,
            scene,
        } = presentation;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width: i32::try_from(viewport.width())?,
            window_height: i32::try_from(viewport.height())?,
            window_resizable: false,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        info!(
            width = viewport.width(),
            height = viewport.height(),
            ?swap_interval,
            "opening window"
        );

        macroquad::Window::from_config(config, async move {
            let mut scene = scene;
            let background = to_macroquad_color(clear_color);
            let start_layout = StartScreenLayout::new(viewport);
            let panel_layout = ControlPanelLayout::new(viewport);
            let mut fps_counter = FpsCounter::default();

            loop {
                let observations = FrameObservations::poll();
                if observations.keyboard.quit_requested {
                    info!("quit requested");
                    break;
                }

                let dt_seconds = macroquad::time::get_frame_time();
                let frame_dt = Duration::from_secs_f32(dt_seconds.max(0.0));
                let frame_input =
                    gather_frame_input_from_observations(&scene, viewport, observations);

                update_scene(frame_dt, frame_input, &mut scene);

                macroquad::window::clear_background(background);
                match &scene {
                    Scene::Start(start) => ui::draw_start_screen(&start_layout, *start),
                    Scene::Running(grid) => {
                        ui::draw_grid(grid);
                        ui::draw_control_panel(&panel_layout, grid.step, grid.simulating);
                    }
                }

                if let Some(per_second) = fps_counter.record_frame(frame_dt) {
                    if show_fps {
                        info!(fps = per_second, "frame rate");
                    } else {
                        debug!(fps = per_second, "frame rate");
                    }
                }

                macroquad::window::next_frame().await;
            }
        });

        Ok(())
    }
}

fn to_macroquad_color(color: life_rendering::Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}

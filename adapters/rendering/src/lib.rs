#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Game of Life adapters.
//!
//! Backends draw [`Scene`] snapshots and translate raw pointer input into
//! [`UiAction`] values through the layouts defined here, so hit-testing is
//! identical for every backend and testable without a window.

use anyhow::Result as AnyResult;
use glam::Vec2;
use life_core::{CellColor, CellCoord, CellSize, Grid, GridSize, PatternName, Viewport};
use std::time::Duration;
use thiserror::Error;

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Opaque white, used for the background and idle buttons.
    pub const WHITE: Self = Self::from_rgb_u8(255, 255, 255);
    /// Opaque black, used for outlines, text and selected buttons.
    pub const BLACK: Self = Self::from_rgb_u8(0, 0, 0);
    /// Light grey drawn around every cell.
    pub const GRID_LINE: Self = Self::from_rgb_u8(200, 200, 200);

    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }
}

impl From<CellColor> for Color {
    fn from(color: CellColor) -> Self {
        let [red, green, blue] = color.rgb();
        Self::from_rgb_u8(red, green, blue)
    }
}

/// Discrete intent produced by pointer or keyboard input on a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UiAction {
    /// Choose the live-cell colour on the start screen.
    SelectColor(CellColor),
    /// Choose the seed pattern on the start screen.
    SelectPattern(PatternName),
    /// Leave the start screen.
    Start,
    /// Flip a single grid cell.
    ToggleCell(CellCoord),
    /// Advance one generation.
    StepForward,
    /// Restore the previous generation.
    Undo,
    /// Kill every cell and reset the counter.
    Clear,
    /// Enlarge cells and rebuild the grid.
    Grow,
    /// Shrink cells and rebuild the grid.
    Shrink,
    /// Switch between exploration and continuous simulation.
    ToggleSimulation,
}

/// Axis-aligned rectangle in window pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonRect {
    /// Top-left corner.
    pub origin: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl ButtonRect {
    /// Creates a rectangle from its top-left corner and extent.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Reports whether `point` lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.origin + self.size;
        point.x >= self.origin.x && point.x <= max.x && point.y >= self.origin.y && point.y <= max.y
    }

    /// Centre of the rectangle, used to place button captions.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }
}

/// Text shown on the start screen.
pub mod captions {
    /// Heading centred at the top of the start screen.
    pub const TITLE: &str = "GAME OF LIFE";
    /// Label above the colour buttons.
    pub const COLOR_HEADING: &str = "COLOR OF LIFE:";
    /// Label above the pattern buttons.
    pub const PATTERN_HEADING: &str = "STARTING PATTERN:";
    /// Caption of the button that leaves the start screen.
    pub const START: &str = "START";
}

/// Geometry of the start screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StartScreenLayout {
    width: f32,
}

impl StartScreenLayout {
    /// Baseline of the title.
    pub const TITLE_Y: f32 = 50.0;
    /// Position of the colour heading.
    pub const COLOR_HEADING: Vec2 = Vec2::new(100.0, 120.0);
    /// Position of the pattern heading.
    pub const PATTERN_HEADING: Vec2 = Vec2::new(100.0, 200.0);

    /// Creates the layout for a window of the provided size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            width: viewport.width() as f32,
        }
    }

    /// Horizontal centre the title is aligned on.
    #[must_use]
    pub fn title_center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Colour buttons in display order.
    pub fn color_buttons(&self) -> impl Iterator<Item = (CellColor, ButtonRect)> {
        CellColor::ALL
            .into_iter()
            .enumerate()
            .map(|(index, color)| {
                let x = 100.0 + index as f32 * 95.0;
                (color, ButtonRect::new(x, 150.0, 90.0, 35.0))
            })
    }

    /// Pattern buttons in display order.
    pub fn pattern_buttons(&self) -> impl Iterator<Item = (PatternName, ButtonRect)> {
        PatternName::ALL
            .into_iter()
            .enumerate()
            .map(|(index, pattern)| {
                let x = 100.0 + index as f32 * 120.0;
                (pattern, ButtonRect::new(x, 230.0, 110.0, 35.0))
            })
    }

    /// Button that leaves the start screen.
    #[must_use]
    pub fn start_button(&self) -> ButtonRect {
        ButtonRect::new(self.width / 2.0 - 60.0, 300.0, 120.0, 40.0)
    }

    /// Resolves a click to the action of the button under it.
    #[must_use]
    pub fn hit_test(&self, point: Vec2) -> Option<UiAction> {
        if let Some((color, _)) = self.color_buttons().find(|(_, rect)| rect.contains(point)) {
            return Some(UiAction::SelectColor(color));
        }
        if let Some((pattern, _)) = self
            .pattern_buttons()
            .find(|(_, rect)| rect.contains(point))
        {
            return Some(UiAction::SelectPattern(pattern));
        }
        self.start_button()
            .contains(point)
            .then_some(UiAction::Start)
    }
}

/// Buttons hosted by the control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanelButton {
    /// Restores the previous generation.
    Undo,
    /// Advances one generation.
    Step,
    /// Empties the grid.
    Clear,
    /// Enlarges cells.
    Grow,
    /// Shrinks cells.
    Shrink,
    /// Switches simulation mode.
    Mode,
}

impl PanelButton {
    /// Every panel button in drawing order.
    pub const ALL: [Self; 6] = [
        Self::Undo,
        Self::Step,
        Self::Clear,
        Self::Grow,
        Self::Shrink,
        Self::Mode,
    ];

    /// Caption drawn on the button.
    #[must_use]
    pub const fn label(self, simulating: bool) -> &'static str {
        match self {
            Self::Undo => "<",
            Self::Step => ">",
            Self::Clear => "CLEAR",
            Self::Grow => "+",
            Self::Shrink => "-",
            Self::Mode if simulating => "SIM",
            Self::Mode => "EXP",
        }
    }

    /// Action triggered by clicking the button.
    #[must_use]
    pub const fn action(self) -> UiAction {
        match self {
            Self::Undo => UiAction::Undo,
            Self::Step => UiAction::StepForward,
            Self::Clear => UiAction::Clear,
            Self::Grow => UiAction::Grow,
            Self::Shrink => UiAction::Shrink,
            Self::Mode => UiAction::ToggleSimulation,
        }
    }

    const fn offset(self) -> ButtonRect {
        match self {
            Self::Undo => ButtonRect::new(10.0, 40.0, 30.0, 30.0),
            Self::Step => ButtonRect::new(50.0, 40.0, 30.0, 30.0),
            Self::Clear => ButtonRect::new(100.0, 40.0, 80.0, 30.0),
            Self::Grow => ButtonRect::new(10.0, 80.0, 30.0, 30.0),
            Self::Shrink => ButtonRect::new(50.0, 80.0, 30.0, 30.0),
            Self::Mode => ButtonRect::new(100.0, 80.0, 80.0, 30.0),
        }
    }
}

/// Geometry of the control panel anchored to the bottom-right corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPanelLayout {
    bounds: ButtonRect,
}

impl ControlPanelLayout {
    /// Panel extent in pixels.
    pub const SIZE: Vec2 = Vec2::new(190.0, 140.0);
    /// Gap the panel origin keeps from the right and bottom window edges.
    pub const INSET: Vec2 = Vec2::new(200.0, 150.0);
    /// Offset of the step counter from the panel origin.
    pub const STEP_LABEL_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

    /// Creates the layout for a window of the provided size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        let window = Vec2::new(viewport.width() as f32, viewport.height() as f32);
        let origin = window - Self::INSET;
        Self {
            bounds: ButtonRect::new(origin.x, origin.y, Self::SIZE.x, Self::SIZE.y),
        }
    }

    /// Outline of the panel.
    #[must_use]
    pub const fn bounds(&self) -> ButtonRect {
        self.bounds
    }

    /// Top-left position of the step counter text.
    #[must_use]
    pub fn step_label_position(&self) -> Vec2 {
        self.bounds.origin + Self::STEP_LABEL_OFFSET
    }

    /// Window-space rectangle of a panel button.
    #[must_use]
    pub fn button(&self, button: PanelButton) -> ButtonRect {
        let offset = button.offset();
        ButtonRect {
            origin: self.bounds.origin + offset.origin,
            size: offset.size,
        }
    }

    /// Resolves a click to the panel button under it, if any.
    #[must_use]
    pub fn hit_test(&self, point: Vec2) -> Option<PanelButton> {
        if !self.bounds.contains(point) {
            return None;
        }
        PanelButton::ALL
            .into_iter()
            .find(|button| self.button(*button).contains(point))
    }
}

/// Maps a window position to the grid cell beneath it.
///
/// Positions left of or above the origin, or beyond the last column or row,
/// map to nothing.
#[must_use]
pub fn cell_at(point: Vec2, cell_size: CellSize, size: GridSize) -> Option<CellCoord> {
    if point.x < 0.0 || point.y < 0.0 {
        return None;
    }
    let edge = cell_size.get() as f32;
    let column = (point.x / edge).floor() as u32;
    let row = (point.y / edge).floor() as u32;
    let cell = CellCoord::new(column, row);
    size.contains(cell).then_some(cell)
}

/// Snapshot of the start screen selections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StartScene {
    /// Highlighted colour button.
    pub color: CellColor,
    /// Highlighted pattern button.
    pub pattern: PatternName,
}

/// Snapshot of the running grid and its control panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridScene {
    /// Active generation.
    pub grid: Grid,
    /// Edge length of each drawn cell.
    pub cell_size: CellSize,
    /// Fill colour for live cells.
    pub color: CellColor,
    /// Generation counter shown in the panel.
    pub step: u64,
    /// Whether continuous simulation is active.
    pub simulating: bool,
}

/// Scene content that should be displayed on the next frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scene {
    /// Colour and pattern selection.
    Start(StartScene),
    /// Grid with the control panel overlay.
    Running(GridScene),
}

impl Scene {
    /// Resolves a click at `point` against whatever the scene currently shows.
    ///
    /// While the grid is shown, clicks inside the panel only ever reach panel
    /// buttons and never the cells drawn beneath it.
    #[must_use]
    pub fn hit_test(&self, viewport: Viewport, point: Vec2) -> Option<UiAction> {
        match self {
            Self::Start(_) => StartScreenLayout::new(viewport).hit_test(point),
            Self::Running(grid) => {
                let panel = ControlPanelLayout::new(viewport);
                if panel.bounds().contains(point) {
                    return panel.hit_test(point).map(PanelButton::action);
                }
                cell_at(point, grid.cell_size, grid.grid.size()).map(UiAction::ToggleCell)
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::Start(StartScene::default())
    }
}

/// Input snapshot gathered by adapters before updating the scene.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Actions triggered on this frame, in the order they were detected.
    pub actions: Vec<UiAction>,
}

/// Presentation descriptor consumed by rendering backends.
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    /// Title used by the created window.
    pub window_title: String,
    /// Window dimensions in pixels.
    pub viewport: Viewport,
    /// Solid color used to clear each frame.
    pub clear_color: Color,
    /// Scene content that should be displayed.
    pub scene: Scene,
}

impl Presentation {
    /// Constructs a new presentation descriptor.
    pub fn new<T>(
        window_title: T,
        viewport: Viewport,
        clear_color: Color,
        scene: Scene,
    ) -> Result<Self, RenderingError>
    where
        T: Into<String>,
    {
        if viewport.width() == 0 || viewport.height() == 0 {
            return Err(RenderingError::EmptyViewport {
                width: viewport.width(),
                height: viewport.height(),
            });
        }
        Ok(Self {
            window_title: window_title.into(),
            viewport,
            clear_color,
            scene,
        })
    }
}

/// Rendering backend capable of presenting Game of Life scenes.
pub trait RenderingBackend {
    /// Runs the rendering backend until it is requested to exit.
    ///
    /// The provided `update_scene` closure receives the frame delta and the
    /// actions captured by the adapter, and replaces the scene before it is
    /// rendered.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(Duration, FrameInput, &mut Scene) + 'static;
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderingError {
    /// The window must have a positive area.
    #[error("window must be at least 1x1 pixels (received {width}x{height})")]
    EmptyViewport {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_scene(cell_size: u32) -> Scene {
        let size = Viewport::DEFAULT
            .grid_size(CellSize::new(cell_size))
            .expect("default viewport fits");
        Scene::Running(GridScene {
            grid: Grid::new(size),
            cell_size: CellSize::new(cell_size),
            color: CellColor::Red,
            step: 0,
            simulating: false,
        })
    }

    #[test]
    fn cell_colors_map_to_opaque_rgb() {
        assert_eq!(Color::from(CellColor::Cyan), Color::new(0.0, 1.0, 1.0, 1.0));
        assert_eq!(Color::from(CellColor::Red).alpha, 1.0);
    }

    #[test]
    fn button_hit_test_includes_every_edge() {
        let rect = ButtonRect::new(10.0, 20.0, 30.0, 40.0);

        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(40.0, 60.0)));
        assert!(!rect.contains(Vec2::new(40.1, 60.0)));
        assert!(!rect.contains(Vec2::new(9.9, 30.0)));
    }

    #[test]
    fn start_layout_matches_reference_positions() {
        let layout = StartScreenLayout::new(Viewport::DEFAULT);
        let colors: Vec<_> = layout.color_buttons().collect();
        let patterns: Vec<_> = layout.pattern_buttons().collect();

        assert_eq!(colors.len(), 6);
        assert_eq!(colors[5].1, ButtonRect::new(575.0, 150.0, 90.0, 35.0));
        assert_eq!(patterns[3].1, ButtonRect::new(460.0, 230.0, 110.0, 35.0));
        assert_eq!(layout.start_button(), ButtonRect::new(340.0, 300.0, 120.0, 40.0));
    }

    #[test]
    fn start_layout_resolves_clicks() {
        let layout = StartScreenLayout::new(Viewport::DEFAULT);

        assert_eq!(
            layout.hit_test(Vec2::new(200.0, 160.0)),
            Some(UiAction::SelectColor(CellColor::Green))
        );
        assert_eq!(
            layout.hit_test(Vec2::new(350.0, 265.0)),
            Some(UiAction::SelectPattern(PatternName::Pulsar))
        );
        assert_eq!(layout.hit_test(Vec2::new(400.0, 320.0)), Some(UiAction::Start));
        assert_eq!(layout.hit_test(Vec2::new(50.0, 50.0)), None);
    }

    #[test]
    fn panel_buttons_sit_relative_to_bottom_right_corner() {
        let panel = ControlPanelLayout::new(Viewport::DEFAULT);

        assert_eq!(panel.bounds(), ButtonRect::new(600.0, 450.0, 190.0, 140.0));
        assert_eq!(panel.step_label_position(), Vec2::new(610.0, 460.0));
        assert_eq!(
            panel.button(PanelButton::Mode),
            ButtonRect::new(700.0, 530.0, 80.0, 30.0)
        );
        assert_eq!(panel.hit_test(Vec2::new(610.0, 490.0)), Some(PanelButton::Undo));
        assert_eq!(panel.hit_test(Vec2::new(780.0, 560.0)), Some(PanelButton::Mode));
        assert_eq!(panel.hit_test(Vec2::new(690.0, 500.0)), None);
    }

    #[test]
    fn mode_button_caption_follows_simulation_state() {
        assert_eq!(PanelButton::Mode.label(false), "EXP");
        assert_eq!(PanelButton::Mode.label(true), "SIM");
    }

    #[test]
    fn pixels_map_to_cells_by_integer_division() {
        let size = GridSize::new(40, 30).expect("non-zero");
        let cell_size = CellSize::DEFAULT;

        assert_eq!(
            cell_at(Vec2::new(39.9, 20.0), cell_size, size),
            Some(CellCoord::new(1, 1))
        );
        assert_eq!(
            cell_at(Vec2::new(799.0, 599.0), cell_size, size),
            Some(CellCoord::new(39, 29))
        );
        assert_eq!(cell_at(Vec2::new(800.0, 10.0), cell_size, size), None);
        assert_eq!(cell_at(Vec2::new(-1.0, 10.0), cell_size, size), None);
    }

    #[test]
    fn clicks_inside_the_panel_never_toggle_cells() {
        let scene = running_scene(20);

        assert_eq!(
            scene.hit_test(Viewport::DEFAULT, Vec2::new(695.0, 475.0)),
            None,
            "blank panel area swallows the click"
        );
        assert_eq!(
            scene.hit_test(Viewport::DEFAULT, Vec2::new(660.0, 495.0)),
            Some(UiAction::StepForward)
        );
        assert_eq!(
            scene.hit_test(Viewport::DEFAULT, Vec2::new(45.0, 45.0)),
            Some(UiAction::ToggleCell(CellCoord::new(2, 2)))
        );
    }

    #[test]
    fn start_scene_ignores_grid_clicks() {
        let scene = Scene::default();

        assert_eq!(scene.hit_test(Viewport::DEFAULT, Vec2::new(45.0, 45.0)), None);
    }

    #[test]
    fn presentation_rejects_empty_window() {
        let error = Presentation::new("t", Viewport::new(0, 600), Color::WHITE, Scene::default())
            .expect_err("zero width must be rejected");

        assert_eq!(
            error,
            RenderingError::EmptyViewport {
                width: 0,
                height: 600
            }
        );
    }
}

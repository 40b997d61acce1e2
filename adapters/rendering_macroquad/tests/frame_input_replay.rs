use glam::Vec2;
use life_core::{CellColor, CellCoord, CellSize, Grid, PatternName, Viewport};
use life_rendering::{GridScene, Scene, StartScene, UiAction};
use life_rendering_macroquad::{
    gather_frame_input_from_observations, FrameObservations, KeyboardShortcuts,
};

fn running_scene() -> Scene {
    let size = Viewport::DEFAULT
        .grid_size(CellSize::DEFAULT)
        .expect("default viewport fits");
    Scene::Running(GridScene {
        grid: Grid::new(size),
        cell_size: CellSize::DEFAULT,
        color: CellColor::Red,
        step: 0,
        simulating: false,
    })
}

fn replay(scene: &Scene, frames: &[FrameObservations]) -> Vec<Vec<UiAction>> {
    frames
        .iter()
        .map(|observations| {
            gather_frame_input_from_observations(scene, Viewport::DEFAULT, *observations).actions
        })
        .collect()
}

fn click(x: f32, y: f32) -> FrameObservations {
    FrameObservations {
        click: Some(Vec2::new(x, y)),
        ..FrameObservations::default()
    }
}

#[test]
fn start_screen_clicks_select_and_start() {
    let scene = Scene::Start(StartScene::default());
    let frames = [
        click(580.0, 160.0),
        click(110.0, 240.0),
        FrameObservations::default(),
        click(400.0, 320.0),
    ];

    let actions = replay(&scene, &frames);

    assert_eq!(
        actions,
        vec![
            vec![UiAction::SelectColor(CellColor::Magenta)],
            vec![UiAction::SelectPattern(PatternName::Empty)],
            vec![],
            vec![UiAction::Start],
        ]
    );
}

#[test]
fn enter_starts_only_from_the_start_screen() {
    let enter = FrameObservations {
        keyboard: KeyboardShortcuts {
            start: true,
            ..KeyboardShortcuts::default()
        },
        ..FrameObservations::default()
    };

    assert_eq!(
        replay(&Scene::Start(StartScene::default()), &[enter]),
        vec![vec![UiAction::Start]]
    );
    assert_eq!(replay(&running_scene(), &[enter]), vec![vec![]]);
}

#[test]
fn running_frame_merges_click_and_shortcuts_in_fixed_order() {
    let frame = FrameObservations {
        click: Some(Vec2::new(25.0, 5.0)),
        keyboard: KeyboardShortcuts {
            shrink: true,
            toggle_simulation: true,
            undo: true,
            ..KeyboardShortcuts::default()
        },
    };

    let first = replay(&running_scene(), &[frame]);
    let second = replay(&running_scene(), &[frame]);

    assert_eq!(
        first,
        vec![vec![
            UiAction::ToggleCell(CellCoord::new(1, 0)),
            UiAction::ToggleSimulation,
            UiAction::Undo,
            UiAction::Shrink,
        ]]
    );
    assert_eq!(first, second);
}

#[test]
fn panel_buttons_replay_deterministically() {
    let frames = [
        click(615.0, 495.0),
        click(655.0, 495.0),
        click(750.0, 500.0),
        click(615.0, 535.0),
        click(655.0, 535.0),
        click(750.0, 540.0),
        click(695.0, 580.0),
    ];

    let actions = replay(&running_scene(), &frames);

    assert_eq!(
        actions,
        vec![
            vec![UiAction::Undo],
            vec![UiAction::StepForward],
            vec![UiAction::Clear],
            vec![UiAction::Grow],
            vec![UiAction::Shrink],
            vec![UiAction::ToggleSimulation],
            vec![],
        ]
    );
}

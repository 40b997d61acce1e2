//! Immediate-mode widgets for the Macroquad rendering backend.
//!
//! This module hosts every text and button drawing call so the frame loop only
//! deals with layouts and scenes. Captions are measured here and centred the
//! same way for every button.

use life_rendering::{
    captions, ButtonRect, Color, ControlPanelLayout, GridScene, PanelButton, StartScene,
    StartScreenLayout,
};
use macroquad::{
    shapes::{draw_rectangle, draw_rectangle_lines},
    text::{draw_text, measure_text},
};

use crate::to_macroquad_color;

const BUTTON_FONT_SIZE: u16 = 20;
const HEADING_FONT_SIZE: u16 = 24;
const TITLE_FONT_SIZE: u16 = 40;
const OUTLINE_THICKNESS: f32 = 2.0;

/// Draws text with its bounding box anchored at `(x, y)`.
fn draw_text_top_left(text: &str, x: f32, y: f32, font_size: u16, color: Color) {
    let dimensions = measure_text(text, None, font_size, 1.0);
    draw_text(
        text,
        x,
        y + dimensions.offset_y,
        f32::from(font_size),
        to_macroquad_color(color),
    );
}

/// Draws a captioned button; selected buttons are inverted.
pub(crate) fn draw_button(rect: ButtonRect, caption: &str, selected: bool) {
    let (background, foreground) = if selected {
        (Color::BLACK, Color::WHITE)
    } else {
        (Color::WHITE, Color::BLACK)
    };
    let ButtonRect { origin, size } = rect;

    draw_rectangle(origin.x, origin.y, size.x, size.y, to_macroquad_color(background));
    draw_rectangle_lines(
        origin.x,
        origin.y,
        size.x,
        size.y,
        OUTLINE_THICKNESS,
        to_macroquad_color(Color::BLACK),
    );

    let dimensions = measure_text(caption, None, BUTTON_FONT_SIZE, 1.0);
    let center = rect.center();
    draw_text_top_left(
        caption,
        center.x - dimensions.width / 2.0,
        center.y - dimensions.height / 2.0,
        BUTTON_FONT_SIZE,
        foreground,
    );
}

/// Draws the colour and pattern pickers plus the start button.
pub(crate) fn draw_start_screen(layout: &StartScreenLayout, scene: StartScene) {
    let title = measure_text(captions::TITLE, None, TITLE_FONT_SIZE, 1.0);
    draw_text_top_left(
        captions::TITLE,
        layout.title_center_x() - title.width / 2.0,
        StartScreenLayout::TITLE_Y,
        TITLE_FONT_SIZE,
        Color::BLACK,
    );

    let heading = StartScreenLayout::COLOR_HEADING;
    draw_text_top_left(
        captions::COLOR_HEADING,
        heading.x,
        heading.y,
        HEADING_FONT_SIZE,
        Color::BLACK,
    );
    for (color, rect) in layout.color_buttons() {
        draw_button(rect, color.label(), color == scene.color);
    }

    let heading = StartScreenLayout::PATTERN_HEADING;
    draw_text_top_left(
        captions::PATTERN_HEADING,
        heading.x,
        heading.y,
        HEADING_FONT_SIZE,
        Color::BLACK,
    );
    for (pattern, rect) in layout.pattern_buttons() {
        draw_button(rect, pattern.label(), pattern == scene.pattern);
    }

    draw_button(layout.start_button(), captions::START, false);
}

/// Draws the panel background, the step counter and every panel button.
pub(crate) fn draw_control_panel(layout: &ControlPanelLayout, step: u64, simulating: bool) {
    let ButtonRect { origin, size } = layout.bounds();
    draw_rectangle(origin.x, origin.y, size.x, size.y, to_macroquad_color(Color::WHITE));
    draw_rectangle_lines(
        origin.x,
        origin.y,
        size.x,
        size.y,
        OUTLINE_THICKNESS,
        to_macroquad_color(Color::BLACK),
    );

    let label = layout.step_label_position();
    draw_text_top_left(
        &format!("STEP: {step}"),
        label.x,
        label.y,
        BUTTON_FONT_SIZE,
        Color::BLACK,
    );

    for button in PanelButton::ALL {
        draw_button(layout.button(button), button.label(simulating), false);
    }
}

/// Fills live cells and outlines every cell of the grid.
pub(crate) fn draw_grid(scene: &GridScene) {
    let edge = scene.cell_size.get() as f32;
    let alive = to_macroquad_color(Color::from(scene.color));
    let line = to_macroquad_color(Color::GRID_LINE);

    for (row_index, row) in scene.grid.rows().enumerate() {
        let y = row_index as f32 * edge;
        for (column_index, cell) in row.iter().enumerate() {
            let x = column_index as f32 * edge;
            if cell.is_alive() {
                draw_rectangle(x, y, edge, edge, alive);
            }
            draw_rectangle_lines(x, y, edge, edge, 1.0, line);
        }
    }
}

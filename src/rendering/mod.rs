use macroquad::prelude::*;

use crate::application::{App, Mode};
use crate::domain::ScreenCoord;
use crate::ui::{Button, MENU_WIDTH, STATUS_BAR_HEIGHT, grid_area_height, menu_x};

/// Format large numbers with K/M/B suffixes
fn format_number(n: usize) -> String {
    match n {
        1_000_000_000.. => format!("{:.1}B", n as f64 / 1_000_000_000.0),
        1_000_000.. => format!("{:.1}M", n as f64 / 1_000_000.0),
        1_000.. => format!("{:.1}K", n as f64 / 1_000.0),
        _ => n.to_string(),
    }
}

fn cell_rect(pos: ScreenCoord, cell_size: f32) -> (f32, f32) {
    (pos.x as f32 * cell_size, pos.y as f32 * cell_size)
}

/// Draw the visible part of the plane: cells that just died faintly, live cells on top
pub fn draw_world(app: &App) {
    let session = app.session();
    let viewport = app.viewport();
    let cell_size = app.config().cell_size;

    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let dying_color = Color::from_rgba(0, 80, 50, 255);

    for pos in session.visible_died(viewport) {
        let (x, y) = cell_rect(pos, cell_size);
        draw_rectangle(x, y, cell_size, cell_size, dying_color);
    }
    for pos in session.visible_live(viewport) {
        let (x, y) = cell_rect(pos, cell_size);
        draw_rectangle(x, y, cell_size, cell_size, alive_color);
    }

    // Frame around the grid area, yellow while paused
    let frame_color = if app.mode() == Mode::Pause { YELLOW } else { DARKGRAY };
    draw_rectangle_lines(0.0, 0.0, screen_width(), grid_area_height(), 2.0, frame_color);
}

/// Blinking edit cursor, shown while paused
pub fn draw_cursor(app: &App) {
    if (get_time() * 3.0) as i64 % 2 == 1 {
        return;
    }
    let cell_size = app.config().cell_size;
    let (x, y) = cell_rect(app.session().cursor.pos, cell_size);
    draw_rectangle_lines(x, y, cell_size, cell_size, 2.0, WHITE);
}

fn help_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Play => "Q quit   P pause   ARROWS move   M main menu",
        Mode::Pause => "Q quit   P start   ARROWS move   M main menu   SPACE add/remove   R random   S save",
        Mode::MainMenu => "ENTER start empty   C select config   Q quit",
        Mode::SelectConfig => "click a config to load   M main menu",
        Mode::Save => "type a name   ENTER save   ESC cancel",
    }
}

/// Bottom line: key help, counters and the latest status message
pub fn draw_status_bar(app: &App) {
    let top = grid_area_height();
    draw_rectangle(0.0, top, screen_width(), STATUS_BAR_HEIGHT, Color::from_rgba(30, 30, 30, 255));

    let engine = &app.session().engine;
    let counters = format!(
        "{} | gen {} | pop {} | {} | scale {}",
        app.mode().name(),
        engine.generation(),
        format_number(engine.population()),
        engine.algorithm().name(),
        engine.scale(),
    );
    let baseline = top + STATUS_BAR_HEIGHT - 7.0;
    draw_text(help_text(app.mode()), 6.0, baseline, 16.0, GRAY);

    let counters_width = measure_text(&counters, None, 16, 1.0).width;
    draw_text(&counters, screen_width() - counters_width - 6.0, baseline, 16.0, WHITE);

    if let Some(status) = app.status() {
        draw_text(status, 6.0, top - 8.0, 16.0, ORANGE);
    }
}

/// Title plus a column of buttons over a dimmed background
pub fn draw_menu(title: &str, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::from_rgba(0, 0, 0, 160));

    let title_size = measure_text(title, None, 32, 1.0);
    draw_text(title, (screen_width() - title_size.width) / 2.0, 50.0, 32.0, WHITE);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
}

/// Name entry box above the OK / Cancel buttons
pub fn draw_save_dialog(app: &App, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_menu("Save current config", buttons, mouse_pos);

    let x = menu_x();
    let y = screen_height() / 3.0;
    draw_text("Name:", x, y - 8.0, 18.0, GRAY);
    draw_rectangle(x, y, MENU_WIDTH, 36.0, Color::from_rgba(45, 45, 45, 255));
    draw_rectangle_lines(x, y, MENU_WIDTH, 36.0, 1.0, WHITE);
    draw_text(&format!("{}_", app.save_name()), x + 6.0, y + 25.0, 20.0, WHITE);
}

/// Draw one frame for the app's current mode
pub fn draw(app: &App, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_world(app);

    match app.mode() {
        Mode::Play => {}
        Mode::Pause => draw_cursor(app),
        Mode::MainMenu => draw_menu("Conway's Game of Life", buttons, mouse_pos),
        Mode::SelectConfig => draw_menu("Select available config", buttons, mouse_pos),
        Mode::Save => draw_save_dialog(app, buttons, mouse_pos),
    }

    draw_status_bar(app);
}

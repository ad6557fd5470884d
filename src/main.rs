use std::path::PathBuf;

use macroquad::prelude::*;
use unbounded_life::{App, Flow, SessionConfig, input, rendering, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Config path from `LIFE_CONFIG`, else `life.json` in the working directory
fn config_path() -> PathBuf {
    std::env::var_os("LIFE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("life.json"))
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let path = config_path();
    let config = SessionConfig::load_or_default(&path).unwrap_or_else(|e| {
        log::warn!("ignoring {}: {}", path.display(), e);
        SessionConfig::default()
    });
    let cell_size = config.cell_size;
    let mut app = App::new(config, ui::viewport(cell_size));

    loop {
        app.set_viewport(ui::viewport(cell_size));

        let buttons = ui::buttons_for(&app);
        let commands = input::collect_commands(app.mode(), &buttons);
        if commands.into_iter().any(|command| app.handle(command) == Flow::Quit) {
            log::info!("quitting");
            break;
        }

        app.update(get_frame_time());

        clear_background(BLACK);
        rendering::draw(&app, &buttons, mouse_position());

        next_frame().await;
    }
}

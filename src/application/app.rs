//! App state machine: which screen is active and what each command does there.

use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::{LiveSet, random_soup};

use super::config::SessionConfig;
use super::cursor::{Direction, Viewport};
use super::session::Session;
use super::storage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    MainMenu,
    SelectConfig,
    Play,
    Pause,
    Save,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::MainMenu => "Menu",
            Mode::SelectConfig => "Select config",
            Mode::Play => "Play",
            Mode::Pause => "Pause",
            Mode::Save => "Save",
        }
    }
}

/// Everything the user can ask for. Input handling turns keys and clicks into these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    StartEmpty,
    OpenConfigList,
    LoadPattern(usize),
    MainMenu,
    Quit,
    TogglePause,
    /// Pan while playing, move the cursor while paused
    Move(Direction),
    ToggleCell,
    Randomize,
    OpenSave,
    SaveInput(char),
    SaveBackspace,
    ConfirmSave,
    CancelSave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    config: SessionConfig,
    mode: Mode,
    session: Session,
    viewport: Viewport,
    patterns: Vec<PathBuf>,
    save_name: String,
    status: Option<String>,
    rng: StdRng,
}

impl App {
    pub fn new(config: SessionConfig, viewport: Viewport) -> Self {
        Self::with_rng(config, viewport, StdRng::from_os_rng())
    }

    /// Deterministic soups, for tests and replays
    pub fn with_seed(config: SessionConfig, viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(config, viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SessionConfig, viewport: Viewport, rng: StdRng) -> Self {
        let session = Session::new(LiveSet::default(), &config, viewport);
        Self {
            config,
            mode: Mode::MainMenu,
            session,
            viewport,
            patterns: Vec::new(),
            save_name: String::new(),
            status: None,
            rng,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Pattern files found the last time the config list was opened
    pub fn patterns(&self) -> &[PathBuf] {
        &self.patterns
    }

    pub fn save_name(&self) -> &str {
        &self.save_name
    }

    /// Last error or confirmation to show the user
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Follow a window resize, keeping the cursor on screen
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.session.cursor.pos = viewport.clamp(self.session.cursor.pos);
    }

    /// Replace the current session with a fresh one, paused
    fn start_session(&mut self, initial: LiveSet) {
        log::info!("starting session with {} cells", initial.len());
        self.session = Session::new(initial, &self.config, self.viewport);
        self.session.engine.set_running(false);
        self.mode = Mode::Pause;
    }

    fn refresh_patterns(&mut self) {
        match storage::list_patterns(&self.config.patterns_dir) {
            Ok(paths) => self.patterns = paths,
            Err(e) => {
                log::warn!("cannot list {}: {}", self.config.patterns_dir.display(), e);
                self.patterns.clear();
                self.status = Some(e.to_string());
            }
        }
    }

    fn load(&mut self, index: usize) {
        let Some(path) = self.patterns.get(index).cloned() else {
            log::warn!("no pattern at index {}", index);
            return;
        };
        match storage::load_pattern(&path) {
            Ok(file) => {
                self.status = None;
                self.start_session(file.cells);
            }
            Err(e) => {
                log::warn!("failed to load {}: {}", path.display(), e);
                self.status = Some(e.to_string());
            }
        }
    }

    fn save(&mut self) {
        if self.save_name.trim().is_empty() {
            return;
        }
        match storage::save_pattern(&self.config.patterns_dir, &self.save_name, self.session.engine.live()) {
            Ok(path) => self.status = Some(format!("Saved {}", path.display())),
            Err(e) => {
                log::error!("failed to save '{}': {}", self.save_name, e);
                self.status = Some(e.to_string());
            }
        }
    }

    fn randomize(&mut self) {
        let size = self.config.soup_size;
        let origin = self.session.cursor_world().offset(-size / 2, -size / 2);
        let soup = random_soup(&mut self.rng, origin, size, size, self.config.soup_density);
        log::debug!("adding soup of {} cells at {:?}", soup.len(), origin);
        for cell in soup {
            self.session.engine.insert(cell);
        }
    }

    /// Apply one command in the current mode
    pub fn handle(&mut self, command: Command) -> Flow {
        use Command as C;

        match (self.mode, command) {
            (_, C::Quit) => return Flow::Quit,

            (Mode::MainMenu, C::StartEmpty) => {
                self.status = None;
                self.start_session(LiveSet::default());
            }
            (Mode::MainMenu, C::OpenConfigList) => {
                self.status = None;
                self.refresh_patterns();
                self.mode = Mode::SelectConfig;
            }
            (Mode::SelectConfig, C::LoadPattern(index)) => self.load(index),
            (Mode::SelectConfig | Mode::Play | Mode::Pause, C::MainMenu) => {
                self.mode = Mode::MainMenu;
            }

            (Mode::Play, C::TogglePause) => {
                self.session.engine.set_running(false);
                self.mode = Mode::Pause;
            }
            (Mode::Play, C::Move(direction)) => {
                let (dx, dy) = direction.delta();
                let step = self.config.play_pan_step;
                self.session.pan_view(dx * step, dy * step);
            }

            (Mode::Pause, C::TogglePause) => {
                self.status = None;
                self.session.engine.set_running(true);
                self.mode = Mode::Play;
            }
            (Mode::Pause, C::Move(direction)) => {
                self.session.move_cursor(direction, self.viewport);
            }
            (Mode::Pause, C::ToggleCell) => {
                self.session.toggle_at_cursor();
            }
            (Mode::Pause, C::Randomize) => self.randomize(),
            (Mode::Pause, C::OpenSave) => {
                self.save_name.clear();
                self.mode = Mode::Save;
            }

            (Mode::Save, C::SaveInput(ch)) if !ch.is_control() => self.save_name.push(ch),
            (Mode::Save, C::SaveBackspace) => {
                self.save_name.pop();
            }
            (Mode::Save, C::ConfirmSave) => {
                self.save();
                self.mode = Mode::Pause;
            }
            (Mode::Save, C::CancelSave) => self.mode = Mode::Pause,

            (mode, command) => log::trace!("ignoring {:?} in {:?}", command, mode),
        }
        Flow::Continue
    }

    /// Advance the running session by `delta_time` seconds
    pub fn update(&mut self, delta_time: f32) {
        if matches!(self.mode, Mode::Play | Mode::Pause) {
            self.session.tick(delta_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use std::fs;

    fn app_with_dir(tag: &str) -> (App, PathBuf) {
        let dir = std::env::temp_dir().join(format!("unbounded_life_app_{}_{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let config = SessionConfig {
            patterns_dir: dir.clone(),
            ..SessionConfig::default()
        };
        (App::with_seed(config, Viewport::new(20, 10), 42), dir)
    }

    #[test]
    fn test_start_empty_enters_pause() {
        let (mut app, _) = app_with_dir("start");
        assert_eq!(app.mode(), Mode::MainMenu);

        assert_eq!(app.handle(Command::StartEmpty), Flow::Continue);
        assert_eq!(app.mode(), Mode::Pause);
        assert!(!app.session().engine.is_running());
        assert!(app.session().engine.live().is_empty());
    }

    #[test]
    fn test_pause_and_play_toggle_run_flag() {
        let (mut app, _) = app_with_dir("toggle");
        app.handle(Command::StartEmpty);

        app.handle(Command::TogglePause);
        assert_eq!(app.mode(), Mode::Play);
        assert!(app.session().engine.is_running());

        app.handle(Command::TogglePause);
        assert_eq!(app.mode(), Mode::Pause);
        assert!(!app.session().engine.is_running());
    }

    #[test]
    fn test_paused_update_does_not_evolve() {
        let (mut app, _) = app_with_dir("paused");
        app.handle(Command::StartEmpty);
        app.handle(Command::ToggleCell);

        for _ in 0..10 {
            app.update(1.0);
        }
        assert_eq!(app.session().engine.population(), 1);

        app.handle(Command::TogglePause);
        app.update(1.0);
        assert_eq!(app.session().engine.population(), 0);
    }

    #[test]
    fn test_play_arrows_pan_by_step() {
        let (mut app, _) = app_with_dir("pan");
        app.handle(Command::StartEmpty);
        app.handle(Command::ToggleCell);
        let placed = app.session().cursor_world();
        app.handle(Command::TogglePause);

        app.handle(Command::Move(Direction::Up));
        assert!(app.session().engine.is_alive(placed.offset(0, 2)));
        assert_eq!(app.session().pan_offset, (0, -2));
    }

    #[test]
    fn test_quit_from_any_mode() {
        let (mut app, _) = app_with_dir("quit");
        assert_eq!(app.handle(Command::Quit), Flow::Quit);
        app.handle(Command::StartEmpty);
        assert_eq!(app.handle(Command::Quit), Flow::Quit);
    }

    #[test]
    fn test_commands_outside_their_mode_are_ignored() {
        let (mut app, _) = app_with_dir("ignored");
        app.handle(Command::ToggleCell);
        app.handle(Command::OpenSave);
        assert_eq!(app.mode(), Mode::MainMenu);
        assert!(app.session().engine.live().is_empty());
    }

    #[test]
    fn test_save_then_load_through_menus() {
        let (mut app, dir) = app_with_dir("save_load");
        app.handle(Command::StartEmpty);
        app.handle(Command::ToggleCell);
        app.handle(Command::Move(Direction::Right));
        app.handle(Command::ToggleCell);
        let saved = app.session().engine.live().clone();

        app.handle(Command::OpenSave);
        for ch in "pair".chars() {
            app.handle(Command::SaveInput(ch));
        }
        app.handle(Command::SaveInput('\n'));
        app.handle(Command::ConfirmSave);
        assert_eq!(app.mode(), Mode::Pause);
        assert!(dir.join("pair.life").exists());

        app.handle(Command::MainMenu);
        app.handle(Command::OpenConfigList);
        assert_eq!(app.mode(), Mode::SelectConfig);
        assert_eq!(app.patterns(), &[dir.join("pair.life")]);

        app.handle(Command::LoadPattern(0));
        assert_eq!(app.mode(), Mode::Pause);
        assert_eq!(app.session().engine.live(), &saved);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_save_name_just_returns() {
        let (mut app, dir) = app_with_dir("empty_name");
        app.handle(Command::StartEmpty);
        app.handle(Command::OpenSave);
        app.handle(Command::SaveInput('x'));
        app.handle(Command::SaveBackspace);
        app.handle(Command::ConfirmSave);

        assert_eq!(app.mode(), Mode::Pause);
        assert!(app.status().is_none());
        assert!(!dir.exists());
    }

    #[test]
    fn test_bad_file_keeps_config_list_open() {
        let (mut app, dir) = app_with_dir("bad_file");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("broken.life"), "#Life 1.06\n1 2 3\n").unwrap();

        app.handle(Command::OpenConfigList);
        app.handle(Command::LoadPattern(0));

        assert_eq!(app.mode(), Mode::SelectConfig);
        assert!(app.status().is_some_and(|s| s.contains("line 2")));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_randomize_fills_around_cursor() {
        let (mut app, _) = app_with_dir("soup");
        app.handle(Command::StartEmpty);
        app.handle(Command::Randomize);

        let center = app.session().cursor_world();
        let live = app.session().engine.live();
        assert!(!live.is_empty());
        assert!(live.iter().all(|c: &Cell| (c.x - center.x).abs() <= 8 && (c.y - center.y).abs() <= 8));
    }

    #[test]
    fn test_resize_clamps_cursor() {
        let (mut app, _) = app_with_dir("resize");
        app.set_viewport(Viewport::new(4, 4));
        assert!(app.viewport().contains(app.session().cursor.pos));
    }
}

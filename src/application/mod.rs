mod app;
mod cursor;
mod session;
pub mod config;
pub mod storage;

pub use app::{App, Command, Flow, Mode};
pub use config::{ConfigError, SessionConfig};
pub use cursor::{Cursor, Direction, Viewport};
pub use session::Session;
pub use storage::StorageError;

//! Reading and writing `.life` files in the pattern directory.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{LifeFile, LiveSet, ParseError};

pub const LIFE_EXTENSION: &str = "life";

/// Errors that can occur while loading or saving a pattern file
#[derive(Debug)]
pub enum StorageError {
    Io(io::Error),
    Parse { path: PathBuf, source: ParseError },
    InvalidName(String),
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "IO error: {}", e),
            StorageError::Parse { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
            StorageError::InvalidName(name) => write!(f, "Invalid file name '{}'", name),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Parse { source, .. } => Some(source),
            StorageError::InvalidName(_) => None,
        }
    }
}

/// `.life` files directly inside `dir`, sorted by path. A missing directory has none.
pub fn list_patterns(dir: &Path) -> Result<Vec<PathBuf>, StorageError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == LIFE_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

pub fn load_pattern(path: &Path) -> Result<LifeFile, StorageError> {
    let text = fs::read_to_string(path)?;
    let file = LifeFile::parse(&text).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loaded {} cells from {}", file.cells.len(), path.display());
    Ok(file)
}

/// Write `cells` to `<dir>/<name>.life`, creating `dir` if needed
pub fn save_pattern(dir: &Path, name: &str, cells: &LiveSet) -> Result<PathBuf, StorageError> {
    let name = name.trim();
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(StorageError::InvalidName(name.to_owned()));
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.{}", name, LIFE_EXTENSION));
    let file = LifeFile::with_default_header(cells.clone());
    fs::write(&path, file.to_string())?;

    log::info!("saved {} cells to {}", cells.len(), path.display());
    Ok(path)
}

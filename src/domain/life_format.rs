//! Plain-text `.life` configurations.
//!
//! The first line is a free-form header. Every following line holds
//! exactly two signed base-10 integers, `x y`, naming one live cell.

use std::fmt;
use std::str::FromStr;

use super::{Cell, LiveSet};

/// Header written for configurations saved by this program
pub const LIFE_HEADER: &str = "#Life 1.06";

/// A parsed configuration: the header line as read, plus its cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeFile {
    pub header: String,
    pub cells: LiveSet,
}

/// Why a configuration could not be read. Lines are 1-based and include the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    WrongTokenCount { line: usize, found: usize },
    InvalidInteger { line: usize, token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongTokenCount { line, found } => {
                write!(f, "line {}: expected 2 coordinates, found {}", line, found)
            }
            ParseError::InvalidInteger { line, token } => {
                write!(f, "line {}: '{}' is not an integer", line, token)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl LifeFile {
    pub fn new(header: impl Into<String>, cells: LiveSet) -> Self {
        Self {
            header: header.into(),
            cells,
        }
    }

    /// A configuration with the standard header
    pub fn with_default_header(cells: LiveSet) -> Self {
        Self::new(LIFE_HEADER, cells)
    }

    /// Parse a whole configuration. Any malformed line fails the load.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut lines = text.lines();
        let header = lines.next().unwrap_or_default().to_owned();

        let cells = lines
            .enumerate()
            .map(|(i, line)| parse_cell(i + 2, line))
            .collect::<Result<LiveSet, _>>()?;

        Ok(Self { header, cells })
    }

    /// Cells sorted by (x, y), for stable output
    pub fn sorted_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        cells
    }
}

fn parse_cell(line_no: usize, line: &str) -> Result<Cell, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = tokens[..] else {
        return Err(ParseError::WrongTokenCount {
            line: line_no,
            found: tokens.len(),
        });
    };
    Ok(Cell::new(parse_coord(line_no, x)?, parse_coord(line_no, y)?))
}

fn parse_coord(line_no: usize, token: &str) -> Result<i64, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidInteger {
        line: line_no,
        token: token.to_owned(),
    })
}

impl FromStr for LifeFile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LifeFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for cell in self.sorted_cells() {
            writeln!(f, "{} {}", cell.x, cell.y)?;
        }
        Ok(())
    }
}

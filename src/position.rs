//! Source positions and ranges.
//!
//! The parser (`rustpython_parser`) hands back `Located<T>` nodes carrying its own
//! `Location`. Everything downstream — bindings, scopes, diagnostics — works in
//! terms of the plain [`Position`]/[`Range`] pair defined here instead, so that no
//! module outside this one needs to know the parser's location type.

use rustpython_parser::ast::{Located, Location};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl From<Location> for Position {
    fn from(location: Location) -> Self {
        Position::new(location.row(), location.column())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn from_located<T>(located: &Located<T>) -> Self {
        let end = located.end_location.unwrap_or(located.location);
        Range::new(located.location.into(), end.into())
    }
}

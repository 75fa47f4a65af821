//! Tokenizer for double-height offset hex grids.
//!
//! A grid section looks like this (significant spaces shown as `_`):
//!
//! ```text
//!   # # #
//!  # _ . #
//! # _ $ @ #
//!  # _ # #
//!   # #
//! ```
//!
//! Every other character is a cell, separated by single spaces, and each
//! text line holds either the even or the odd columns. Roughly:
//!
//! ```text
//! grid  ::= line+ (blank_line | EOF)
//! line  ::= ' '* '#' sep (glyph sep)* trailing_ws
//! glyph ::= '#' | ' ' | '.' | '$' | '*' | '@' | '+'
//! sep   ::= ' ' | '\n' | '\r\n' | EOF
//! ```
//!
//! The column parity of a line's first wall fixes which line of its hex row
//! it is. Sources disagree on whether the first grid line is indented by an
//! even or odd amount, so the first line calibrates: an odd first line is
//! counted as logical line 1. From there on each line must alternate.

use thiserror::Error;

use super::span::{offset_to_location, Location};
use crate::types::RectCoord;

/// A single cell glyph from a text grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Wall,
    Floor,
    Goal,
    Crate,
    CrateOnGoal,
    Player,
    PlayerOnGoal,
}

impl Glyph {
    pub const ALL: [Glyph; 7] = [
        Glyph::Wall,
        Glyph::Floor,
        Glyph::Goal,
        Glyph::Crate,
        Glyph::CrateOnGoal,
        Glyph::Player,
        Glyph::PlayerOnGoal,
    ];

    pub fn from_byte(byte: u8) -> Option<Glyph> {
        match byte {
            b'#' => Some(Glyph::Wall),
            b' ' => Some(Glyph::Floor),
            b'.' => Some(Glyph::Goal),
            b'$' => Some(Glyph::Crate),
            b'*' => Some(Glyph::CrateOnGoal),
            b'@' => Some(Glyph::Player),
            b'+' => Some(Glyph::PlayerOnGoal),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Glyph::Wall => '#',
            Glyph::Floor => ' ',
            Glyph::Goal => '.',
            Glyph::Crate => '$',
            Glyph::CrateOnGoal => '*',
            Glyph::Player => '@',
            Glyph::PlayerOnGoal => '+',
        }
    }
}

/// A glyph and where it sits in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphToken {
    pub glyph: Glyph,
    /// Column and hex row in the double-height offset grid.
    pub position: RectCoord,
    /// Where the glyph appears in the section text.
    pub location: Location,
}

/// Errors that make a grid section unreadable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("misalignment at {location}: column {column} on line {line} (columns must share the line's parity)")]
    Alignment {
        column: u32,
        /// Logical line index after calibration.
        line: u32,
        location: Location,
    },

    #[error("unexpected glyph {glyph:?} at {location}")]
    UnexpectedGlyph { glyph: char, location: Location },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    LineStart,
    Tiles,
    Eof,
}

/// Pull-based tokenizer over one grid section.
///
/// Yields tokens until a blank line or the end of input. After the first
/// error it yields nothing more.
#[derive(Debug, Clone)]
pub struct GridTokenizer<'a> {
    data: &'a [u8],
    pos: usize,
    state: State,
    /// Logical line, calibrated by the first line's parity.
    line: u32,
    column: u32,
    calibrated: bool,
}

impl<'a> GridTokenizer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            state: State::LineStart,
            line: 0,
            column: 0,
            calibrated: false,
        }
    }

    /// Bytes not yet consumed, e.g. the text after the terminating blank line.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.data.get(self.pos + offset).copied()
    }

    /// Length of a line terminator at the current position, if any.
    fn terminator_len(&self) -> Option<usize> {
        match (self.peek_at(0), self.peek_at(1)) {
            (Some(b'\n'), _) => Some(1),
            (Some(b'\r'), Some(b'\n')) => Some(2),
            _ => None,
        }
    }

    fn location(&self) -> Location {
        offset_to_location(self.data, self.pos)
    }

    fn fail(&mut self, error: GridError) -> Option<Result<GlyphToken, GridError>> {
        self.state = State::Eof;
        Some(Err(error))
    }

    fn unexpected(&mut self, byte: u8) -> Option<Result<GlyphToken, GridError>> {
        let location = self.location();
        self.fail(GridError::UnexpectedGlyph {
            glyph: byte as char,
            location,
        })
    }

    fn end_row(&mut self, terminator: usize) {
        self.pos += terminator;
        self.line += 1;
        self.column = 0;
        self.state = State::LineStart;
    }

    /// Whether only spaces, tabs or `\r` remain before the end of this line.
    fn rest_of_line_is_blank(&self) -> bool {
        self.remaining()
            .iter()
            .take_while(|&&b| b != b'\n')
            .all(|&b| b == b' ' || b == b'\t' || b == b'\r')
    }

    /// Handle leading spaces and decide whether a new row begins here.
    fn line_start(&mut self) -> Option<Result<GlyphToken, GridError>> {
        while self.peek_at(0) == Some(b' ') {
            self.column += 1;
            self.pos += 1;
        }

        if self.peek_at(0).is_none() || self.terminator_len().is_some() {
            self.state = State::Eof;
            return None;
        }

        match self.peek_at(0) {
            Some(b'#') => {
                if !self.calibrated {
                    self.calibrated = true;
                    if self.column % 2 == 1 {
                        self.line = 1;
                    }
                }
                if self.column % 2 != self.line % 2 {
                    let location = self.location();
                    return self.fail(GridError::Alignment {
                        column: self.column,
                        line: self.line,
                        location,
                    });
                }
                self.state = State::Tiles;
                self.tile()
            }
            Some(byte) => self.unexpected(byte),
            None => None,
        }
    }

    /// Read one glyph and its separator.
    fn tile(&mut self) -> Option<Result<GlyphToken, GridError>> {
        if self.rest_of_line_is_blank() {
            let skipped = self
                .remaining()
                .iter()
                .take_while(|&&b| b != b'\n')
                .count();
            self.pos += skipped;
            match self.peek_at(0) {
                Some(b'\n') => self.end_row(1),
                _ => self.state = State::Eof,
            }
            return self.next();
        }

        let byte = self.peek_at(0)?;
        let Some(glyph) = Glyph::from_byte(byte) else {
            return self.unexpected(byte);
        };

        let token = GlyphToken {
            glyph,
            position: RectCoord::new(self.column, self.line >> 1),
            location: self.location(),
        };
        self.pos += 1;

        match self.peek_at(0) {
            Some(b' ') => {
                self.pos += 1;
                self.column += 2;
            }
            None => self.state = State::Eof,
            Some(byte) => match self.terminator_len() {
                Some(len) => self.end_row(len),
                None => return self.unexpected(byte),
            },
        }

        Some(Ok(token))
    }
}

impl<'a> Iterator for GridTokenizer<'a> {
    type Item = Result<GlyphToken, GridError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            State::Eof => None,
            State::LineStart => self.line_start(),
            State::Tiles => self.tile(),
        }
    }
}

impl std::iter::FusedIterator for GridTokenizer<'_> {}

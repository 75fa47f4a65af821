use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

use crate::dialect::Dialect;

/// Main error type for hexaban operations
#[derive(Error, Diagnostic, Debug)]
pub enum HexError {
    #[error("IO error: {0}")]
    #[diagnostic(code(hexaban::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(hexaban::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(hexaban::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// The file does not start the way its dialect requires, so the reader
    /// was most likely pointed at the wrong file.
    #[error("{dialect} header mismatch: {message}")]
    #[diagnostic(
        code(hexaban::header),
        help("Check that the file matches the dialect configured for it")
    )]
    Header { dialect: Dialect, message: String },

    #[error("{} section(s) failed to convert:\n{}", .0.len(), .0)]
    #[diagnostic(code(hexaban::sections))]
    Sections(ErrorGroup),

    #[error("Validation error: {message}")]
    #[diagnostic(code(hexaban::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(hexaban::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, HexError>;

/// A puzzle section that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionError {
    /// Order of appearance in the source file (1-based).
    pub index: usize,
    pub dialect: Dialect,
    pub message: String,
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} puzzle {}: {}", self.dialect, self.index, self.message)
    }
}

/// Ordered collection of section failures from one file.
///
/// Readers keep going after a bad section, so a single file can produce
/// both puzzles and errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorGroup {
    errors: Vec<SectionError>,
}

impl ErrorGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: usize, dialect: Dialect, message: impl Into<String>) {
        self.errors.push(SectionError {
            index,
            dialect,
            message: message.into(),
        });
    }

    /// Move every error of `other` to the end of this group.
    pub fn append(&mut self, other: ErrorGroup) {
        self.errors.extend(other.errors);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionError> {
        self.errors.iter()
    }
}

impl fmt::Display for ErrorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, error) in self.errors.iter().enumerate() {
            if n > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

use std::error;
use std::fmt;

use crate::lexer;

/// A character the lexer could not match against any token rule.
/// The character is skipped and scanning continues, so this is a
/// diagnostic, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalWarning {
    pub chr: char,
    pub lineno: usize,
    pub colno: usize,
}

impl fmt::Display for LexicalWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipping unexpected character '{}' at line {} col {}",
            self.chr,
            self.lineno + 1,
            self.colno + 1
        )
    }
}

#[derive(Debug)]
pub enum ParsingErrorKind {
    /// The token stream did not start with an entry header, so no
    /// citation key is available. Carries the offending token, if the
    /// stream was not simply empty.
    MissingEntryKey(Option<String>),
    /// A field name was read, but the stream ended before its data.
    IncompleteField(String),
    /// A token that no grammar rule accepts at this point.
    UnexpectedToken(String),
}

/// Represents an error that happened during the parsing process.
/// The parse yields no entry in this case; the caller decides whether
/// to skip the record or abort.
#[derive(Debug)]
pub struct ParsingError {
    pub(crate) kind: ParsingErrorKind,
    pub(crate) info: lexer::TokenInfo,
}

impl ParsingError {
    pub fn kind(&self) -> &ParsingErrorKind {
        &self.kind
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParsingErrorKind::MissingEntryKey(tok) => match tok {
                Some(tok) => write!(
                    f,
                    "expected an entry header like '@article{{key,' before '{}' at line {} col {}",
                    tok,
                    self.info.lineno + 1,
                    self.info.colno + 1
                ),
                None => write!(f, "no entry found in input"),
            },
            ParsingErrorKind::IncompleteField(name) => match &self.info.current_key {
                Some(key) => write!(
                    f,
                    "field '{}' in entry '{}' ends without '= {{data}}'",
                    name, key
                ),
                None => write!(f, "field '{}' ends without '= {{data}}'", name),
            },
            ParsingErrorKind::UnexpectedToken(tok) => match &self.info.current_key {
                Some(key) => write!(
                    f,
                    "unexpected token '{}' in entry '{}' at line {} col {}",
                    tok,
                    key,
                    self.info.lineno + 1,
                    self.info.colno + 1
                ),
                None => write!(
                    f,
                    "unexpected token '{}' at line {} col {}",
                    tok,
                    self.info.lineno + 1,
                    self.info.colno + 1
                ),
            },
        }
    }
}

impl error::Error for ParsingError {}

/// Represents an error that happened while loading an IdentifierTable
/// from its tabular source.
#[derive(Debug)]
pub enum TableError {
    Csv(csv::Error),
    MissingColumn(&'static str),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(err) => write!(f, "cannot read table: {}", err),
            Self::MissingColumn(name) => {
                write!(f, "table has no column labelled '{}'", name)
            }
        }
    }
}

impl error::Error for TableError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Csv(err) => Some(err),
            Self::MissingColumn(_) => None,
        }
    }
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

use std::io;
use std::path;
use std::str;

use crate::errors;
use crate::lexer;
use crate::types;

/// What the parser expects from the token stream next. The grammar is
/// a single forward pass: exactly one entry header first, then zero or
/// more `name = {data}` field triples.
enum Expect {
    EntryKey,
    FieldName,
    Equals(String),
    FieldData(String),
}

/// A successfully parsed entry together with the lexical diagnostics
/// collected along the way.
#[derive(Debug)]
pub struct ParsedEntry {
    pub entry: types::BibEntry,
    pub warnings: Vec<errors::LexicalWarning>,
}

/// Parser turning the text of one `.bib` entry into a `BibEntry`.
///
/// Parsing is all-or-nothing: a token stream that does not fit the
/// grammar yields a `ParsingError` and no entry. Each `parse()` call
/// scans the source from the start with a fresh accumulator, so no
/// fields leak between calls.
pub struct Parser {
    pub(crate) lexer: lexer::Lexer,
}

impl Parser {
    /// Use a file at some filepath as source for the parsing process.
    pub fn from_file<P: AsRef<path::Path>>(path: P) -> Result<Parser, io::Error> {
        let lexer = lexer::Lexer::from_file(path)?;
        Ok(Parser { lexer })
    }

    /// Use a string as source for the parsing process.
    pub fn from_string(data: String) -> Result<Parser, io::Error> {
        let lexer = lexer::Lexer::from_string(data)?;
        Ok(Parser { lexer })
    }

    /// Parse the source as one entry.
    pub fn parse(&self) -> Result<ParsedEntry, errors::ParsingError> {
        use lexer::Token as T;

        let mut iter = self.lexer.iter();
        let mut entry = types::BibEntry::new();
        let mut expect = Expect::EntryKey;

        while let Some((token, info)) = iter.next() {
            expect = match (expect, token) {
                (Expect::EntryKey, T::EntryHeader(span)) => {
                    entry.key = lexer::citation_key(&span);
                    Expect::FieldName
                }
                (Expect::EntryKey, token) => {
                    return Err(errors::ParsingError {
                        kind: errors::ParsingErrorKind::MissingEntryKey(Some(token.to_string())),
                        info,
                    });
                }
                (Expect::FieldName, T::FieldName(name)) => Expect::Equals(name),
                (Expect::Equals(name), T::Equals) => Expect::FieldData(name),
                (Expect::FieldData(name), T::FieldValue(span)) => {
                    // strip the outer braces; “{}” stores an empty string
                    entry.fields.insert(name, span[1..span.len() - 1].to_string());
                    Expect::FieldName
                }
                (_, token) => {
                    return Err(errors::ParsingError {
                        kind: errors::ParsingErrorKind::UnexpectedToken(token.to_string()),
                        info,
                    });
                }
            };
        }

        match expect {
            Expect::EntryKey => Err(errors::ParsingError {
                kind: errors::ParsingErrorKind::MissingEntryKey(None),
                info: iter.info(),
            }),
            Expect::Equals(name) | Expect::FieldData(name) => Err(errors::ParsingError {
                kind: errors::ParsingErrorKind::IncompleteField(name),
                info: iter.info(),
            }),
            Expect::FieldName => Ok(ParsedEntry {
                entry,
                warnings: iter.warnings,
            }),
        }
    }
}

impl str::FromStr for Parser {
    type Err = io::Error;

    /// Use a string as source for the parsing process.
    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let lexer = lexer::Lexer::from_string(data.to_string())?;
        Ok(Parser { lexer })
    }
}

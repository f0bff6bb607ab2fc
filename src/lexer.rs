use std::fmt;
use std::fs;
use std::io;
use std::path;
use std::str;

use crate::errors;

/// A token is one semantic unit read from the entry text.
/// Remember, that a bib entry looks as follows:
///
/// ```tex
/// @article{works:4,
///   author     = {Shakespeare, William},
///   title      = {Sonnets},
/// }
/// ```
///
/// In this case, the lexer would emit the following Token instances:
/// (EntryHeader("@article{works:4"), FieldName("author"), Equals,
/// FieldValue("{Shakespeare, William}"), FieldName("title"), Equals,
/// FieldValue("{Sonnets}")). Commas, closing braces and whitespace are
/// structural noise in this grammar and emit nothing. Be aware that
/// Token is just the data contract between lexer and parser and not
/// meant to be externally visible.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    /// entry type and citation key in one matched span, e.g. “@article{works:4”
    EntryHeader(String),
    FieldName(String),
    Equals,
    /// the whole braced span, outer braces included, e.g. “{Sonnets}”
    FieldValue(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::EntryHeader(s) => s,
                Self::FieldName(s) => s,
                Self::Equals => "=",
                Self::FieldValue(s) => s,
            }
        )
    }
}

/// Additional source code information attached to a Token
/// for improved error messages
#[derive(Debug, Clone)]
pub(crate) struct TokenInfo {
    pub(crate) lineno: usize,
    pub(crate) colno: usize,
    /// the citation key of the current entry, once its header was read
    pub(crate) current_key: Option<String>,
}

/// Extract the citation key from an entry header span: everything
/// after the first `{`, with a trailing comma discarded.
pub(crate) fn citation_key(header: &str) -> String {
    header
        .splitn(2, '{')
        .nth(1)
        .unwrap_or("")
        .trim_end_matches(',')
        .to_string()
}

/// Match `@<letters>{<chars except comma>` at the start of `rest`.
/// Returns the byte length of the matched span.
fn match_entry_header(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, '@')) => {}
        _ => return None,
    }
    let mut saw_letter = false;
    loop {
        match chars.next() {
            Some((_, c)) if c.is_ascii_alphabetic() => saw_letter = true,
            Some((_, '{')) if saw_letter => break,
            _ => return None,
        }
    }
    for (i, c) in chars {
        if c == ',' || c == '\n' {
            return Some(i);
        }
    }
    Some(rest.len())
}

/// Match a braced span `{...}` with no nested braces at the start of
/// `rest`. Returns the byte length of the matched span, braces included.
fn match_field_value(rest: &str) -> Option<usize> {
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, '{')) => {}
        _ => return None,
    }
    for (i, c) in chars {
        match c {
            '}' => return Some(i + 1),
            '{' => return None,
            _ => {}
        }
    }
    None
}

/// Match an identifier `[A-Za-z_][A-Za-z0-9_]*` at the start of `rest`.
/// The caller already checked the first character.
fn match_field_name(rest: &str) -> usize {
    rest.char_indices()
        .find(|&(_, c)| !(c.is_ascii_alphanumeric() || c == '_'))
        .map(|(i, _)| i)
        .unwrap_or(rest.len())
}

/// Iterator scanning entry text into Tokens. Holds no state across
/// calls beyond its own scan position, so a fresh instance restarts
/// the scan from the beginning.
///
/// Characters matching no token rule are not fatal: each one is
/// recorded as a `LexicalWarning`, logged, and skipped.
pub(crate) struct LexingIterator<'s> {
    pub(crate) src: &'s str,
    pub(crate) pos: usize,
    pub(crate) lineno: usize,
    pub(crate) colno: usize,
    pub(crate) current_key: Option<String>,
    pub(crate) warnings: Vec<errors::LexicalWarning>,
}

impl<'s> LexingIterator<'s> {
    pub(crate) fn info(&self) -> TokenInfo {
        TokenInfo {
            lineno: self.lineno,
            colno: self.colno,
            current_key: self.current_key.clone(),
        }
    }

    fn bump(&mut self, chr: char) {
        self.pos += chr.len_utf8();
        if chr == '\n' {
            self.lineno += 1;
            self.colno = 0;
        } else {
            self.colno += 1;
        }
    }

    fn bump_str(&mut self, span: &str) {
        for chr in span.chars() {
            self.bump(chr);
        }
    }

    fn skip_unexpected(&mut self, chr: char) {
        let warning = errors::LexicalWarning {
            chr,
            lineno: self.lineno,
            colno: self.colno,
        };
        log::warn!("{}", warning);
        self.warnings.push(warning);
        self.bump(chr);
    }
}

impl<'s> Iterator for LexingIterator<'s> {
    type Item = (Token, TokenInfo);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.src.len() {
            let rest = &self.src[self.pos..];
            let chr = rest.chars().next()?;
            match chr {
                // structural noise: whitespace, commas, closing braces
                c if c.is_whitespace() => self.bump(c),
                ',' | '}' => self.bump(chr),
                '=' => {
                    let info = self.info();
                    self.bump(chr);
                    return Some((Token::Equals, info));
                }
                '@' => match match_entry_header(rest) {
                    Some(len) => {
                        let span = &rest[..len];
                        let info = self.info();
                        self.current_key = Some(citation_key(span));
                        let token = Token::EntryHeader(span.to_string());
                        self.bump_str(span);
                        return Some((token, info));
                    }
                    None => self.skip_unexpected(chr),
                },
                '{' => match match_field_value(rest) {
                    Some(len) => {
                        let span = &rest[..len];
                        let info = self.info();
                        let token = Token::FieldValue(span.to_string());
                        self.bump_str(span);
                        return Some((token, info));
                    }
                    None => self.skip_unexpected(chr),
                },
                c if c.is_ascii_alphabetic() || c == '_' => {
                    let len = match_field_name(rest);
                    let span = &rest[..len];
                    let info = self.info();
                    let token = Token::FieldName(span.to_string());
                    self.bump_str(span);
                    return Some((token, info));
                }
                other => self.skip_unexpected(other),
            }
        }
        None
    }
}

pub(crate) struct Lexer {
    src: String,
}

impl Lexer {
    /// Use a file stored at a `path` as source for the lexing process.
    pub(crate) fn from_file<P: AsRef<path::Path>>(path: P) -> Result<Lexer, io::Error> {
        let src = fs::read_to_string(path)?;
        Ok(Lexer { src })
    }

    /// Use a string as source for the lexing process.
    pub(crate) fn from_string(data: String) -> Result<Lexer, io::Error> {
        Ok(Lexer { src: data })
    }

    pub(crate) fn iter(&self) -> LexingIterator {
        LexingIterator {
            src: &self.src,
            pos: 0,
            lineno: 0,
            colno: 0,
            current_key: None,
            warnings: Vec::new(),
        }
    }
}

impl str::FromStr for Lexer {
    type Err = io::Error;

    /// Use a string as source for the lexing process.
    fn from_str(data: &str) -> Result<Self, Self::Err> {
        Ok(Lexer {
            src: data.to_string(),
        })
    }
}

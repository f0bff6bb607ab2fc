//! This crate reads single `.bib` entries in pure, safe rust and
//! enriches them from an author/ORCID table.
//!
//! One entry of a `.bib` file can look like this:
//!
//! ```tex
//! @article{k1,
//!     author = {Smith, J},
//!     orcid = {},
//! }
//! ```
//!
//! In this example, we call `k1` the citation key. Then we have a
//! sequence of fields with a name (like `author`) and data (like
//! `Smith, J`). The crate parses one such entry at a time into a
//! [`BibEntry`]: a citation key plus an ordered field map. An
//! [`IdentifierTable`] built from a two-column author/ORCID table
//! (e.g. exported from a spreadsheet as CSV) can then fill in a
//! missing `author` or `orcid` field, and [`compose_entry`] writes
//! the entry back out in the same textual shape, fields in source
//! order.
//!
//! The lexer is forgiving: a character it cannot match is reported as
//! a [`LexicalWarning`] and skipped, so one stray character does not
//! lose the rest of the entry. Structural problems (no entry header,
//! a field name without `= {data}`) abort the parse of that entry
//! with a [`ParsingError`] and yield nothing.
//!
//! ```rust
//! use biborcid::{IdentifierTable, Parser};
//! use std::str::FromStr;
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let parser = Parser::from_str("@article{k1,\n  author = {Smith, J},\n  orcid = {},\n}")?;
//!     let mut parsed = parser.parse()?;
//!     let table = IdentifierTable::from_records([
//!         ("Smith, J".to_string(), "0000-0001-2345-6789".to_string()),
//!     ]);
//!     table.enrich(&mut parsed.entry);
//!     assert_eq!(parsed.entry.fields.get("orcid"), Some("0000-0001-2345-6789"));
//!     print!("{}", parsed.entry);
//!     Ok(())
//! }
//! ```
//!
//! Field data is treated as opaque strings; dates, ISSNs and ORCID
//! values are not validated. Multi-entry bibliography files are out of
//! scope: the caller splits its bibliography and feeds one entry body
//! per [`Parser`].

mod errors;
mod lexer;
mod parser;
mod table;
mod types;
mod writer;

pub use crate::errors::{LexicalWarning, ParsingError, ParsingErrorKind, TableError};
pub use crate::parser::{ParsedEntry, Parser};
pub use crate::table::IdentifierTable;
pub use crate::types::{BibEntry, FieldMap};
pub use crate::writer::compose_entry;

use std::collections::HashMap;
use std::io;
use std::path;

use crate::errors;
use crate::types;

/// A bidirectional author-name ↔ ORCID table, loaded once from a
/// tabular source and read-only afterwards.
///
/// Both directions are built in one pass over the rows. The table is
/// assumed to be 1:1; a later row repeating a name or an identifier
/// silently overwrites the earlier one in the affected direction.
#[derive(Debug, Clone, Default)]
pub struct IdentifierTable {
    by_name: HashMap<String, String>,
    by_orcid: HashMap<String, String>,
}

impl IdentifierTable {
    /// Build the table from `(author, orcid)` pairs.
    pub fn from_records<I>(records: I) -> IdentifierTable
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut by_name = HashMap::new();
        let mut by_orcid = HashMap::new();
        for (name, orcid) in records {
            by_name.insert(name.clone(), orcid.clone());
            by_orcid.insert(orcid, name);
        }
        IdentifierTable { by_name, by_orcid }
    }

    /// Load the table from a CSV file with `author` and `orcid`
    /// columns (located by header, case-insensitively; other columns
    /// are ignored). Rows with an empty cell in either column are
    /// dropped.
    pub fn from_csv_path<P: AsRef<path::Path>>(path: P) -> Result<IdentifierTable, errors::TableError> {
        Self::from_csv(csv::Reader::from_path(path)?)
    }

    /// Load the table from CSV data behind any reader.
    pub fn from_reader<R: io::Read>(rdr: R) -> Result<IdentifierTable, errors::TableError> {
        Self::from_csv(csv::Reader::from_reader(rdr))
    }

    fn from_csv<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<IdentifierTable, errors::TableError> {
        let headers = rdr.headers()?.clone();
        let column = |label: &'static str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(label))
                .ok_or(errors::TableError::MissingColumn(label))
        };
        let name_col = column("author")?;
        let orcid_col = column("orcid")?;

        let mut records = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let name = record.get(name_col).unwrap_or("").trim();
            let orcid = record.get(orcid_col).unwrap_or("").trim();
            if name.is_empty() || orcid.is_empty() {
                continue;
            }
            records.push((name.to_string(), orcid.to_string()));
        }
        Ok(Self::from_records(records))
    }

    /// The identifier recorded for `name`, if any.
    pub fn orcid_for(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    /// The author name recorded for `orcid`, if any.
    pub fn name_for(&self, orcid: &str) -> Option<&str> {
        self.by_orcid.get(orcid).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Fill in a missing `author` or `orcid` field of `entry` from the
    /// table. An empty field counts as missing. At most one direction
    /// is looked up per call:
    ///
    /// * `author` present, `orcid` missing: fill `orcid` by name
    /// * `orcid` present, `author` missing: fill `author` by identifier
    /// * both present: the table is not consulted at all
    /// * both missing: there is nothing to look up by
    ///
    /// A name or identifier with no row in the table leaves the field
    /// as it was.
    pub fn enrich(&self, entry: &mut types::BibEntry) {
        let author = entry
            .fields
            .get("author")
            .filter(|v| !v.is_empty())
            .map(String::from);
        let orcid = entry
            .fields
            .get("orcid")
            .filter(|v| !v.is_empty())
            .map(String::from);

        match (author, orcid) {
            (Some(_), Some(_)) => {}
            (Some(name), None) => match self.orcid_for(&name) {
                Some(orcid) => {
                    entry.fields.insert("orcid".to_string(), orcid.to_string());
                }
                None => log::debug!("no orcid on record for '{}'", name),
            },
            (None, Some(orcid)) => match self.name_for(&orcid) {
                Some(name) => {
                    entry.fields.insert("author".to_string(), name.to_string());
                }
                None => log::debug!("no author on record for '{}'", orcid),
            },
            (None, None) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use std::error;
    use std::str::FromStr;

    fn smith_table() -> IdentifierTable {
        IdentifierTable::from_records([(
            "Smith, J".to_string(),
            "0000-0001-2345-6789".to_string(),
        )])
    }

    #[test]
    fn test_both_directions() {
        let table = smith_table();
        assert_eq!(table.orcid_for("Smith, J"), Some("0000-0001-2345-6789"));
        assert_eq!(table.name_for("0000-0001-2345-6789"), Some("Smith, J"));
        assert_eq!(table.orcid_for("Doe, A"), None);
    }

    #[test]
    fn test_later_duplicate_overwrites() {
        let table = IdentifierTable::from_records([
            ("Smith, J".to_string(), "0000-0001-0000-0001".to_string()),
            ("Smith, J".to_string(), "0000-0001-0000-0002".to_string()),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.orcid_for("Smith, J"), Some("0000-0001-0000-0002"));
        // the first identifier still resolves backwards to the name
        assert_eq!(table.name_for("0000-0001-0000-0001"), Some("Smith, J"));
    }

    #[test]
    fn test_from_reader() -> Result<(), Box<dyn error::Error>> {
        let data =
            "Author ,ORCID,link\nSmith J,0000-0001-2345-6789,x\n, 0000-0002-0000-0000,\nDoe A,,\n";
        let table = IdentifierTable::from_reader(data.as_bytes())?;
        assert_eq!(table.len(), 1);
        assert_eq!(table.orcid_for("Smith J"), Some("0000-0001-2345-6789"));
        Ok(())
    }

    #[test]
    fn test_missing_column() {
        let data = "name,orcid\nSmith J,0000-0001-2345-6789\n";
        let err = IdentifierTable::from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, errors::TableError::MissingColumn("author")));
    }

    #[test]
    fn test_enrich_fills_orcid() -> Result<(), Box<dyn error::Error>> {
        let p = Parser::from_str("@article{k1,\n author={Smith, J},\n orcid={},\n}")?;
        let mut entry = p.parse()?.entry;
        smith_table().enrich(&mut entry);
        assert_eq!(entry.fields.get("orcid"), Some("0000-0001-2345-6789"));
        Ok(())
    }

    #[test]
    fn test_enrich_fills_author() -> Result<(), Box<dyn error::Error>> {
        let p = Parser::from_str("@article{k1,\n orcid={0000-0001-2345-6789},\n}")?;
        let mut entry = p.parse()?.entry;
        smith_table().enrich(&mut entry);
        assert_eq!(entry.fields.get("author"), Some("Smith, J"));
        Ok(())
    }

    #[test]
    fn test_enrich_keeps_existing_values() -> Result<(), Box<dyn error::Error>> {
        // the entry disagrees with the table, but both fields are set
        let p = Parser::from_str(
            "@article{k1,\n author={Smith, J},\n orcid={0000-0009-9999-9999},\n}",
        )?;
        let mut entry = p.parse()?.entry;
        smith_table().enrich(&mut entry);
        assert_eq!(entry.fields.get("orcid"), Some("0000-0009-9999-9999"));
        Ok(())
    }

    #[test]
    fn test_enrich_miss_leaves_field_unset() -> Result<(), Box<dyn error::Error>> {
        let p = Parser::from_str("@article{k1,\n author={Doe, A},\n}")?;
        let mut entry = p.parse()?.entry;
        smith_table().enrich(&mut entry);
        assert_eq!(entry.fields.get("orcid"), None);
        assert_eq!(entry.fields.len(), 1);
        Ok(())
    }

    #[test]
    fn test_enrich_nothing_to_look_up_by() -> Result<(), Box<dyn error::Error>> {
        let p = Parser::from_str("@article{k1,\n year={1997},\n}")?;
        let mut entry = p.parse()?.entry;
        let before = entry.clone();
        smith_table().enrich(&mut entry);
        assert_eq!(entry, before);
        Ok(())
    }

    #[test]
    fn test_enrich_is_idempotent() -> Result<(), Box<dyn error::Error>> {
        let p = Parser::from_str("@article{k1,\n author={Smith, J},\n orcid={},\n}")?;
        let table = smith_table();
        let mut once = p.parse()?.entry;
        table.enrich(&mut once);
        let mut twice = once.clone();
        table.enrich(&mut twice);
        assert_eq!(once, twice);
        Ok(())
    }
}

use std::fmt;

/// An ordered map of field names to field data, iterating in the order
/// the fields appeared in the source text. Field names are unique:
/// inserting a name again replaces its data in place, keeping the
/// original position.
///
/// Entries hold a handful of fields at most, so lookups scan linearly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldMap {
    pairs: Vec<(String, String)>,
}

impl FieldMap {
    /// Generate a new, empty instance of FieldMap. Can also be called through the `Default` implementation.
    pub fn new() -> FieldMap {
        FieldMap { pairs: Vec::new() }
    }

    /// Store `data` under `name`. A repeated name overwrites the prior
    /// data without changing where the field sits in iteration order.
    pub fn insert(&mut self, name: String, data: String) {
        match self.pairs.iter_mut().find(|(n, _)| *n == name) {
            Some(pair) => pair.1 = data,
            None => self.pairs.push((name, data)),
        }
    }

    /// Return the data stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(name, data)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, d)| (n.as_str(), d.as_str()))
    }
}

impl FromIterator<(String, String)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (name, data) in iter {
            map.insert(name, data);
        }
        map
    }
}

/// One entry of a `.bib` file: a citation key (e.g. “works:4”) together
/// with its fields (e.g. “author” mapped to “Shakespeare, William”).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BibEntry {
    /// citation key following the entry type, e.g. “works:4”
    pub key: String,
    /// map of fields in source order
    pub fields: FieldMap,
}

impl BibEntry {
    /// Generate a new, empty instance of BibEntry.
    pub fn new() -> BibEntry {
        BibEntry {
            key: String::new(),
            fields: FieldMap::new(),
        }
    }
}

impl fmt::Display for BibEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::writer::compose_entry(self))
    }
}

use crate::types;

/// Render `entry` back into the textual entry format:
///
/// ```tex
/// @article{works:4,
///     author = {Shakespeare, William},
///     title = {Sonnets},
/// }
/// ```
///
/// A pure function of the entry. Fields appear in map order, so
/// parsing the output again yields an equal entry. The result ends
/// with a newline and can be concatenated with other entries into a
/// bibliography document.
pub fn compose_entry(entry: &types::BibEntry) -> String {
    format!("@article{{{}, \n{}}}\n", entry.key, compose_fields(entry))
}

fn compose_fields(entry: &types::BibEntry) -> String {
    entry
        .fields
        .iter()
        .map(|(name, data)| format!("    {} = {{{}}},\n", name, data))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BibEntry;

    #[test]
    fn test_compose_entry() {
        let mut entry = BibEntry::new();
        entry.key = "k1".to_string();
        entry
            .fields
            .insert("author".to_string(), "Smith, J".to_string());
        entry
            .fields
            .insert("orcid".to_string(), "0000-0001-2345-6789".to_string());
        assert_eq!(
            compose_entry(&entry),
            "@article{k1, \n    author = {Smith, J},\n    orcid = {0000-0001-2345-6789},\n}\n"
        );
    }

    #[test]
    fn test_compose_empty_value() {
        let mut entry = BibEntry::new();
        entry.key = "k1".to_string();
        entry.fields.insert("orcid".to_string(), String::new());
        assert_eq!(compose_entry(&entry), "@article{k1, \n    orcid = {},\n}\n");
    }

    #[test]
    fn test_compose_without_fields() {
        let mut entry = BibEntry::new();
        entry.key = "k1".to_string();
        assert_eq!(compose_entry(&entry), "@article{k1, \n}\n");
    }
}

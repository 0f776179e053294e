//! Purchase record parsing.
//!
//! A record is plain text holding one item name per whitespace-delimited
//! token. Parsing produces a [`FrequencyMap`] with an exact count per
//! distinct token. No case folding or trimming beyond the split is done.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::store::FrequencyMap;

/// Parse a purchase record from any buffered reader.
///
/// `origin` only labels the error if the reader fails.
pub fn parse_record<R: BufRead>(reader: R, origin: &Path) -> Result<FrequencyMap> {
    let mut map = FrequencyMap::new();

    for line in reader.lines() {
        let line = line.map_err(|source| Error::SourceUnavailable {
            path: origin.to_path_buf(),
            source,
        })?;

        for token in line.split_whitespace() {
            map.record(token);
        }
    }

    Ok(map)
}

/// Open the record at `path` and parse it.
pub fn load_record(path: &Path) -> Result<FrequencyMap> {
    let file = File::open(path).map_err(|source| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let map = parse_record(BufReader::new(file), path)?;
    log::debug!(
        "parsed {} tokens ({} distinct items) from {}",
        map.total(),
        map.len(),
        path.display()
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Lookup;
    use std::io::Cursor;

    fn parse(text: &str) -> FrequencyMap {
        parse_record(Cursor::new(text), Path::new("<memory>")).unwrap()
    }

    #[test]
    fn counts_each_distinct_token() {
        let map = parse("milk milk bread milk eggs bread");
        assert_eq!(map.len(), 3);
        assert_eq!(map.lookup("milk"), Lookup::Found(3));
        assert_eq!(map.lookup("bread"), Lookup::Found(2));
        assert_eq!(map.lookup("eggs"), Lookup::Found(1));
    }

    #[test]
    fn newlines_and_tabs_are_delimiters() {
        let map = parse("Apples\nPeas\tApples\r\n\n  Peas Apples\n");
        assert_eq!(map.lookup("Apples"), Lookup::Found(3));
        assert_eq!(map.lookup("Peas"), Lookup::Found(2));
        assert_eq!(map.total(), 5);
    }

    #[test]
    fn tokens_match_exactly() {
        let map = parse("Onions onions ONIONS Onions");
        assert_eq!(map.lookup("Onions"), Lookup::Found(2));
        assert_eq!(map.lookup("onions"), Lookup::Found(1));
        assert_eq!(map.lookup("ONIONS"), Lookup::Found(1));
        assert_eq!(map.lookup("onion"), Lookup::NotFound);
    }

    #[test]
    fn total_equals_token_count() {
        let text = "a b c a b a\nd\n\ne f a";
        let map = parse(text);
        assert_eq!(map.total(), text.split_whitespace().count() as u64);
    }

    #[test]
    fn empty_source_gives_empty_map() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\n\t ").is_empty());
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        match load_record(&path) {
            Err(Error::SourceUnavailable { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected SourceUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_source_unavailable() {
        let bytes: &[u8] = &[b'o', b'k', b' ', 0xff, 0xfe, b'\n'];
        let result = parse_record(Cursor::new(bytes), Path::new("bad.txt"));
        assert!(matches!(result, Err(Error::SourceUnavailable { .. })));
    }

    #[test]
    fn load_record_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        std::fs::write(&path, "Zucchini\nCranberries\nZucchini\n").unwrap();

        let map = load_record(&path).unwrap();
        assert_eq!(map.lookup("Zucchini"), Lookup::Found(2));
        assert_eq!(map.lookup("Cranberries"), Lookup::Found(1));
    }
}

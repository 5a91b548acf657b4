// src/sources/list.rs
// =============================================================================
// Loads the source list: one URL per line, double quotes stripped.
//
// Rules:
// - Every line becomes one entry, in file order
// - Empty lines are kept as empty strings (their fetch will simply fail)
// - A read error anywhere (including invalid UTF-8) fails the whole list;
//   the caller never gets a partial list
//
// The path "-" means "read from standard input". Command-line URLs go
// through the same clean_source() as file lines.
// =============================================================================

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::ConfigError;

// Reads the source list at `path`
//
// Returns: Vec of URL strings or a ConfigError naming the path
pub fn read_source_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    read_source_list_or(path, || io::stdin().lock())
}

// Same as read_source_list, with the stand-in for stdin supplied by the
// caller. The closure only runs when `path` is "-".
fn read_source_list_or<R, F>(path: &Path, stdin: F) -> Result<Vec<String>, ConfigError>
where
    R: BufRead,
    F: FnOnce() -> R,
{
    let to_config_error = |source: io::Error| ConfigError::SourceList {
        path: path.to_path_buf(),
        source,
    };

    if is_stdin(path) {
        return parse_source_list(stdin()).map_err(to_config_error);
    }

    let file = File::open(path).map_err(to_config_error)?;
    parse_source_list(BufReader::new(file)).map_err(to_config_error)
}

// Splits any buffered reader into source entries
//
// Separated from read_source_list so tests can feed in-memory text.
pub fn parse_source_list<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map(|l| clean_source(&l)))
        .collect()
}

/// Normalizes one entry, wherever it came from: double quotes are removed.
pub fn clean_source(entry: &str) -> String {
    entry.replace('"', "")
}

/// How a source list path is shown to the user
pub fn describe_source_list(path: &Path) -> String {
    if is_stdin(path) {
        "standard input".to_string()
    } else {
        path.display().to_string()
    }
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_strips_quotes() {
        let input = "\"https://example.com\"\nhttps://rust-lang.org\n";
        let urls = parse_source_list(Cursor::new(input)).unwrap();
        assert_eq!(urls, vec!["https://example.com", "https://rust-lang.org"]);
    }

    #[test]
    fn test_keeps_empty_lines() {
        let input = "https://a.example\n\nhttps://b.example";
        let urls = parse_source_list(Cursor::new(input)).unwrap();
        assert_eq!(urls, vec!["https://a.example", "", "https://b.example"]);
    }

    #[test]
    fn test_handles_crlf() {
        let input = "https://a.example\r\nhttps://b.example\r\n";
        let urls = parse_source_list(Cursor::new(input)).unwrap();
        assert_eq!(urls, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_invalid_utf8_fails_whole_list() {
        let input: &[u8] = b"https://a.example\n\xff\xfe\nhttps://b.example\n";
        assert!(parse_source_list(Cursor::new(input)).is_err());
    }

    #[test]
    fn test_read_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "\"http://example.com\"").unwrap();
        let urls = read_source_list(file.path()).unwrap();
        assert_eq!(urls, vec!["http://example.com"]);
    }

    #[test]
    fn test_dash_reads_stdin() {
        let stdin = Cursor::new("\"http://a.example\"\nhttp://b.example\n");
        let urls = read_source_list_or(Path::new("-"), || stdin).unwrap();
        assert_eq!(urls, vec!["http://a.example", "http://b.example"]);
    }

    #[test]
    fn test_file_path_never_touches_stdin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "http://example.com").unwrap();
        let urls = read_source_list_or(file.path(), || -> Cursor<&[u8]> {
            panic!("stdin read for a file path")
        })
        .unwrap();
        assert_eq!(urls, vec!["http://example.com"]);
    }

    #[test]
    fn test_describe_source_list() {
        assert_eq!(describe_source_list(Path::new("-")), "standard input");
        assert_eq!(describe_source_list(Path::new("./links.txt")), "./links.txt");
    }

    #[test]
    fn test_clean_source() {
        assert_eq!(clean_source("\"http://a.example/\"q\""), "http://a.example/q");
        assert_eq!(clean_source(""), "");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("links.txt");
        let err = read_source_list(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::SourceList { .. }));
    }
}

//! Delimiter and header sniffing
//!
//! Detection is intentionally shallow: a known file extension, a frequency
//! count over the first line, and a numeric-or-not look at the first row.
//! All tunables live in [`DetectConfig`] rather than module globals.

use std::path::Path;

/// Configuration for delimiter and header detection.
#[derive(Debug, Clone)]
pub struct DetectConfig {
    /// Candidate delimiters in tie-break priority order.
    pub candidates: Vec<char>,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            candidates: vec![',', '\t', '|'],
        }
    }
}

impl DetectConfig {
    /// Pick the delimiter occurring most often in `first_line`.
    ///
    /// Ties (including the all-zero case) go to the earliest candidate, so
    /// the default order means comma beats tab beats pipe.
    pub fn sniff_delimiter(&self, first_line: &str) -> char {
        let mut best = self.candidates.first().copied().unwrap_or(',');
        let mut best_count = 0;

        for &candidate in &self.candidates {
            let count = first_line.matches(candidate).count();
            if count > best_count {
                best = candidate;
                best_count = count;
            }
        }

        best
    }

    /// Guess whether the first row is a header.
    ///
    /// Needs at least two rows; a header is assumed when the first row holds
    /// at least one cell that does not parse as a number. A single row is
    /// always treated as data.
    pub fn sniff_header(&self, rows: &[Vec<String>]) -> bool {
        if rows.len() < 2 {
            return false;
        }

        rows[0]
            .iter()
            .any(|cell| cell.trim().parse::<f64>().is_err())
    }
}

/// Default delimiter for a known file extension.
///
/// `.csv` is comma, `.tsv` is tab, `.psv` is pipe; anything else is unknown
/// and left to explicit flags or [`DetectConfig::sniff_delimiter`].
pub fn delimiter_for_path(path: &Path) -> Option<char> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "csv" => Some(','),
        "tsv" => Some('\t'),
        "psv" => Some('|'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_extension_mapping() {
        assert_eq!(delimiter_for_path(Path::new("data.csv")), Some(','));
        assert_eq!(delimiter_for_path(Path::new("data.TSV")), Some('\t'));
        assert_eq!(delimiter_for_path(Path::new("data.psv")), Some('|'));
        assert_eq!(delimiter_for_path(Path::new("data.log")), None);
        assert_eq!(delimiter_for_path(Path::new("data")), None);
    }

    #[test]
    fn test_sniff_most_frequent_wins() {
        let config = DetectConfig::default();
        assert_eq!(config.sniff_delimiter("a\tb\tc,d"), '\t');
        assert_eq!(config.sniff_delimiter("a|b|c|d"), '|');
    }

    #[test]
    fn test_sniff_tie_prefers_comma() {
        let config = DetectConfig::default();
        assert_eq!(config.sniff_delimiter("a,b\tc"), ',');
        assert_eq!(config.sniff_delimiter("no delimiters here"), ',');
    }

    #[test]
    fn test_header_detected_on_text_first_row() {
        let config = DetectConfig::default();
        let data = rows(&[&["Name", "Age"], &["田中", "25"]]);
        assert!(config.sniff_header(&data));
    }

    #[test]
    fn test_numeric_first_row_is_data() {
        let config = DetectConfig::default();
        let data = rows(&[&["1", "2.5"], &["3", "4"]]);
        assert!(!config.sniff_header(&data));
    }

    #[test]
    fn test_single_row_never_header() {
        let config = DetectConfig::default();
        let data = rows(&[&["Name", "Age"]]);
        assert!(!config.sniff_header(&data));
    }
}

//! Trial-decode input reading
//!
//! Input files arrive in whatever encoding the producing system used, with
//! Japanese spreadsheet exports (Shift_JIS, EUC-JP, ISO-2022-JP) the common
//! offenders. Instead of guessing, an [`EncodingChain`] tries a fixed
//! priority list of codecs and keeps the first strict decode that succeeds.
//!
//! Some legacy labels collapse under WHATWG naming: encoding_rs' Shift_JIS
//! decoder is windows-31j and therefore also covers CP932, and windows-1252
//! is the latin-1 superset used as the permissive tail.

use encoding_rs::{
    Encoding, EUC_JP, ISO_2022_JP, SHIFT_JIS, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252,
};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Ordered fallback chain of candidate encodings.
#[derive(Debug, Clone)]
pub struct EncodingChain {
    candidates: Vec<&'static Encoding>,
}

/// A successfully decoded input file.
#[derive(Debug)]
pub struct DecodedText {
    /// The decoded content.
    pub text: String,
    /// WHATWG name of the encoding that succeeded.
    pub encoding: &'static str,
}

/// Error reading or decoding an input file.
#[derive(Debug)]
pub enum ReadError {
    /// The file could not be read at all.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// No candidate encoding produced a clean decode.
    Decode {
        path: PathBuf,
        attempted: Vec<&'static str>,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
            ReadError::Decode { path, attempted } => {
                write!(
                    f,
                    "could not decode '{}'; attempted encodings: {}",
                    path.display(),
                    attempted.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io { source, .. } => Some(source),
            ReadError::Decode { .. } => None,
        }
    }
}

impl Default for EncodingChain {
    fn default() -> Self {
        Self {
            candidates: vec![
                UTF_8,
                SHIFT_JIS,
                EUC_JP,
                ISO_2022_JP,
                UTF_16LE,
                UTF_16BE,
                WINDOWS_1252,
            ],
        }
    }
}

impl EncodingChain {
    /// Build a chain from an explicit candidate list.
    pub fn new(candidates: Vec<&'static Encoding>) -> Self {
        Self { candidates }
    }

    /// WHATWG names of the candidates, in trial order.
    pub fn names(&self) -> Vec<&'static str> {
        self.candidates.iter().map(|e| e.name()).collect()
    }

    /// Decode `bytes`, returning the first strict success.
    ///
    /// A byte-order mark wins outright when its encoding decodes cleanly;
    /// otherwise each candidate is tried in order without replacement
    /// characters, so a decode either round-trips faithfully or fails.
    pub fn decode(&self, bytes: &[u8]) -> Option<DecodedText> {
        if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
            if let Some(text) =
                encoding.decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
            {
                return Some(DecodedText {
                    text: text.into_owned(),
                    encoding: encoding.name(),
                });
            }
        }

        for &encoding in &self.candidates {
            if let Some(text) = encoding.decode_without_bom_handling_and_without_replacement(bytes)
            {
                return Some(DecodedText {
                    text: text.into_owned(),
                    encoding: encoding.name(),
                });
            }
        }

        None
    }

    /// Read `path` whole and decode it through the chain.
    ///
    /// The file handle is held only for the single read.
    pub fn read_file(&self, path: &Path) -> Result<DecodedText, ReadError> {
        let bytes = fs::read(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.decode(&bytes).ok_or_else(|| ReadError::Decode {
            path: path.to_path_buf(),
            attempted: self.names(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_utf8_wins_first() {
        let decoded = EncodingChain::default().decode("名前,年齢".as_bytes()).unwrap();
        assert_eq!(decoded.encoding, "UTF-8");
        assert_eq!(decoded.text, "名前,年齢");
    }

    #[test]
    fn test_shift_jis_fallback() {
        // "日本語" in Shift_JIS
        let bytes = [0x93, 0xFA, 0x96, 0x7B, 0x8C, 0xEA];
        let decoded = EncodingChain::default().decode(&bytes).unwrap();
        assert_eq!(decoded.encoding, "Shift_JIS");
        assert_eq!(decoded.text, "日本語");
    }

    #[test]
    fn test_utf8_bom_respected() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("a,b".as_bytes());
        let decoded = EncodingChain::default().decode(&bytes).unwrap();
        assert_eq!(decoded.encoding, "UTF-8");
        assert_eq!(decoded.text, "a,b");
    }

    #[test]
    fn test_windows_1252_is_permissive_tail() {
        // 0x82 0x20 is malformed in UTF-8, Shift_JIS (bad trail byte),
        // EUC-JP, and ISO-2022-JP; the odd length rules out UTF-16.
        // windows-1252 accepts every byte.
        let bytes = [0x82, 0x20, b'x'];
        let decoded = EncodingChain::default().decode(&bytes).unwrap();
        assert_eq!(decoded.encoding, "windows-1252");
        assert_eq!(decoded.text, "\u{201A} x");
    }

    #[test]
    fn test_decode_failure_lists_attempts() {
        let chain = EncodingChain::new(vec![UTF_8]);
        let mut invalid = tempfile::NamedTempFile::new().unwrap();
        invalid.write_all(&[0xC3, 0x28]).unwrap();

        let err = chain.read_file(invalid.path()).unwrap_err();
        match err {
            ReadError::Decode { attempted, .. } => assert_eq!(attempted, vec!["UTF-8"]),
            other => panic!("expected decode failure, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = EncodingChain::default()
            .read_file(Path::new("/nonexistent/input.csv"))
            .unwrap_err();
        assert!(matches!(err, ReadError::Io { .. }));
    }
}

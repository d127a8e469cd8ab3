//! # tabfmt
//!
//! Render delimited text (CSV/TSV/PSV) as aligned tables, with correct
//! alignment for mixed-width Unicode text such as CJK full-width characters.
//!
//! ## ASCII format
//!
//! ```text
//! +----------+-----+------+
//! | Name     | Age | City |
//! +----------+-----+------+
//! | 田中太郎 | 25  | 東京 |
//! +----------+-----+------+
//! ```
//!
//! ## Markdown format
//!
//! ```text
//! | Name     | Age | City |
//! | -------- | --- | ---- |
//! | 田中太郎 | 25  | 東京 |
//! ```
//!
//! ## Why display width
//!
//! Alignment is computed from Unicode East Asian Width display columns, not
//! character or byte counts: `田中太郎` is 4 characters, 12 bytes, and 8
//! terminal columns, and only the last number aligns a table. The full-width
//! space (U+3000) renders at width 1 or 2 depending on the terminal, so an
//! optional normalization pass replaces it with two ASCII spaces.
//!
//! ## Pipeline
//!
//! Read and trial-decode the input ([`EncodingChain`]), sniff delimiter and
//! header ([`DetectConfig`]), tokenize rows ([`tokenize()`]), build the
//! immutable [`Table`] with frozen column widths, then hand it to
//! [`AsciiRenderer`] or [`MarkdownRenderer`].

pub mod ascii;
pub mod detect;
pub mod encoding;
pub mod markdown;
pub mod table;
pub mod tokenize;
pub mod width;

pub use ascii::AsciiRenderer;
pub use detect::{delimiter_for_path, DetectConfig};
pub use encoding::{DecodedText, EncodingChain, ReadError};
pub use markdown::MarkdownRenderer;
pub use table::{Cell, Format, OptionsError, RenderOptions, Row, Table, MIN_COLUMN_WIDTH};
pub use tokenize::{split_line, tokenize};
pub use width::{display_width, normalize_fullwidth_space, truncate_to_width};

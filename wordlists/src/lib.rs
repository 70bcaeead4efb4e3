//! Localized word lists for machine names.
//!
//! Each locale has two plain-text lists, `first.txt` and `second.txt`, with
//! one word per line. Lines that are empty or start with `"# "` are skipped.
//! Lists are either compiled into this crate ([`WordListSource::Embedded`])
//! or read from a directory laid out as `<root>/<locale>/{first,second}.txt`
//! ([`WordListSource::Directory`]).
//!
//! # Compatibility
//!
//! The name of every serial number depends on the exact contents and order of
//! both lists. Any change to the embedded data files must bump
//! [`WORDLIST_VERSION`], and should be treated as a breaking change by anyone
//! who has stored generated names.

/// Locale identifiers.
mod locale;
/// Word list file format.
mod parse;
/// Embedded and on-disk word list sources.
mod source;

pub use locale::{InvalidLocale, Locale};
pub use parse::parse_word_list;
pub use source::{LoadError, WordListSource, WordLists};

/// Bumped whenever the embedded word lists change content or order.
pub const WORDLIST_VERSION: u32 = 1;

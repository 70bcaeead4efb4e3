use std::{
    collections::{BTreeSet, HashSet},
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
};

use haikunator::WordList;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{locale::Locale, parse::parse_word_list};

const FIRST_FILE: &str = "first.txt";
const SECOND_FILE: &str = "second.txt";

/// Errors which can be produced while loading word lists.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no word lists for locale '{locale}'")]
    UnknownLocale { locale: Locale },

    #[error("couldn't read '{}' for locale '{locale}'", path.display())]
    Read {
        locale: Locale,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' for locale '{locale}' contains no words", path.display())]
    Empty { locale: Locale, path: PathBuf },

    #[error("couldn't list locales in '{}'", dir.display())]
    ListLocales {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The pair of word lists for one locale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordLists {
    pub first: WordList,
    pub second: WordList,
}

impl WordLists {
    /// Compose the name for serial number `sn` from these lists.
    pub fn compose(&self, sn: u32) -> Result<String, haikunator::Error> {
        haikunator::compose(sn, &self.first, &self.second)
    }
}

/// Where word lists are loaded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordListSource {
    /// The word lists compiled into this crate.
    Embedded,
    /// A directory with one `<locale>/{first,second}.txt` pair per locale.
    Directory(PathBuf),
}

impl WordListSource {
    /// Load and parse both word lists for `locale`.
    pub fn load(&self, locale: &Locale) -> Result<WordLists, LoadError> {
        let word_lists = match self {
            Self::Embedded => load_embedded(locale)?,
            Self::Directory(root) => load_directory(root, locale)?,
        };

        debug!(
            %locale,
            first = word_lists.first.len(),
            second = word_lists.second.len(),
            "Loaded word lists",
        );
        Ok(word_lists)
    }

    /// Every locale this source has word lists for.
    pub fn list_locales(&self) -> Result<BTreeSet<Locale>, LoadError> {
        match self {
            Self::Embedded => Ok(EMBEDDED
                .iter()
                .filter_map(|embedded| Locale::from_str(embedded.locale).ok())
                .collect()),
            Self::Directory(root) => list_directory_locales(root),
        }
    }
}

// --- Embedded word lists --- //

struct EmbeddedLocale {
    locale: &'static str,
    first: &'static str,
    second: &'static str,
}

const EMBEDDED: &[EmbeddedLocale] = &[EmbeddedLocale {
    locale: "en_US.UTF-8",
    first: include_str!("../data/en_US.UTF-8/first.txt"),
    second: include_str!("../data/en_US.UTF-8/second.txt"),
}];

fn load_embedded(locale: &Locale) -> Result<WordLists, LoadError> {
    let embedded = EMBEDDED
        .iter()
        .find(|embedded| embedded.locale == locale.as_str())
        .ok_or_else(|| LoadError::UnknownLocale {
            locale: locale.clone(),
        })?;

    let resource = Path::new(embedded.locale);
    let first = check_word_list(
        locale,
        resource.join(FIRST_FILE),
        parse_word_list(embedded.first),
    )?;
    let second = check_word_list(
        locale,
        resource.join(SECOND_FILE),
        parse_word_list(embedded.second),
    )?;

    Ok(WordLists { first, second })
}

// --- Word lists on disk --- //

fn load_directory(
    root: &Path,
    locale: &Locale,
) -> Result<WordLists, LoadError> {
    let dir = root.join(locale.as_str());
    match fs::metadata(&dir) {
        Ok(metadata) if metadata.is_dir() => (),
        Ok(_) =>
            return Err(LoadError::UnknownLocale {
                locale: locale.clone(),
            }),
        Err(err) if err.kind() == io::ErrorKind::NotFound =>
            return Err(LoadError::UnknownLocale {
                locale: locale.clone(),
            }),
        Err(source) =>
            return Err(LoadError::Read {
                locale: locale.clone(),
                path: dir,
                source,
            }),
    }

    let first = read_word_list(locale, dir.join(FIRST_FILE))?;
    let second = read_word_list(locale, dir.join(SECOND_FILE))?;

    Ok(WordLists { first, second })
}

fn read_word_list(
    locale: &Locale,
    path: PathBuf,
) -> Result<WordList, LoadError> {
    match fs::read_to_string(&path) {
        Ok(contents) =>
            check_word_list(locale, path, parse_word_list(&contents)),
        Err(source) => Err(LoadError::Read {
            locale: locale.clone(),
            path,
            source,
        }),
    }
}

fn list_directory_locales(
    root: &Path,
) -> Result<BTreeSet<Locale>, LoadError> {
    let list_err = |source| LoadError::ListLocales {
        dir: root.to_path_buf(),
        source,
    };

    let mut locales = BTreeSet::new();
    for entry in fs::read_dir(root).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        if !entry.file_type().map_err(list_err)?.is_dir() {
            continue;
        }
        // Skip names that aren't valid UTF-8 or aren't usable as a locale.
        let name = entry.file_name();
        match name.to_str().map(Locale::from_str) {
            Some(Ok(locale)) => {
                locales.insert(locale);
            }
            _ => debug!(name = ?name, "Skipping non-locale directory"),
        }
    }
    Ok(locales)
}

// --- Helpers --- //

/// Reject empty lists and warn about duplicate words. Duplicates are kept
/// since removing them would shift every later index.
fn check_word_list(
    locale: &Locale,
    path: PathBuf,
    words: WordList,
) -> Result<WordList, LoadError> {
    if words.is_empty() {
        return Err(LoadError::Empty {
            locale: locale.clone(),
            path,
        });
    }

    let mut seen = HashSet::with_capacity(words.len());
    for word in words.iter() {
        if !seen.insert(word) {
            warn!(%locale, path = %path.display(), word, "Duplicate word");
        }
    }

    Ok(words)
}

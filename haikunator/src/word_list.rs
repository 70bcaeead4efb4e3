use std::{fmt, ops::Index};

/// An ordered list of words, used as one "digit" of a composed name.
///
/// The position of each word is what gives it meaning: reordering a list
/// changes the name of every serial number. A [`WordList`] is therefore
/// immutable once built.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct WordList(Vec<String>);

impl WordList {
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The list length as a mixed-radix base. Lists longer than `u32::MAX`
    /// can't be fully addressed by a `u32` anyway, so we saturate.
    #[inline]
    pub(crate) fn radix(&self) -> u32 {
        u32::try_from(self.0.len()).unwrap_or(u32::MAX)
    }
}

impl Index<usize> for WordList {
    type Output = str;

    #[inline]
    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// Word lists can hold thousands of entries; don't dump them all in logs.
impl fmt::Debug for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordList")
            .field("len", &self.0.len())
            .field("first", &self.0.first())
            .field("last", &self.0.last())
            .finish()
    }
}

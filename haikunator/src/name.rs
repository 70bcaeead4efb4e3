use std::fmt;

use thiserror::Error;

use crate::{permute::permute, word_list::WordList};

/// Errors which can be produced while composing a name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// One of the word lists has no entries, so it can't be used as a radix.
    #[error("{which} word list is empty")]
    DegenerateWordList { which: ListPosition },
}

/// Which of the two word lists an error refers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListPosition {
    First,
    Second,
}

impl fmt::Display for ListPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::First => "first",
            Self::Second => "second",
        };
        f.write_str(s)
    }
}

/// The mixed-radix digits of a permuted serial number, with radices
/// `(first_len, second_len, ..)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NameParts {
    pub first_index: u32,
    pub second_index: u32,
    /// Whatever is left after both list indices have been taken out.
    pub suffix: u32,
}

impl NameParts {
    /// Split `value` into a first-list index, a second-list index, and a
    /// numeric suffix. Both radices are checked before any division.
    pub fn decompose(
        value: u32,
        first_len: u32,
        second_len: u32,
    ) -> Result<Self, Error> {
        if first_len == 0 {
            return Err(Error::DegenerateWordList {
                which: ListPosition::First,
            });
        }
        if second_len == 0 {
            return Err(Error::DegenerateWordList {
                which: ListPosition::Second,
            });
        }

        let first_index = value % first_len;
        let quotient = value / first_len;
        let second_index = quotient % second_len;
        let suffix = quotient / second_len;

        Ok(Self {
            first_index,
            second_index,
            suffix,
        })
    }

    /// The inverse of [`NameParts::decompose`] for the same radices:
    /// `first_index + second_index * first_len + suffix * first_len *
    /// second_len`. Returns `None` if the result doesn't fit in a `u32`,
    /// which can't happen for parts produced by `decompose`.
    pub fn recompose(&self, first_len: u32, second_len: u32) -> Option<u32> {
        let first_len = u64::from(first_len);
        let second_len = u64::from(second_len);
        let value = u64::from(self.first_index)
            + u64::from(self.second_index) * first_len
            + u64::from(self.suffix) * first_len * second_len;
        u32::try_from(value).ok()
    }
}

/// Compose the name for serial number `sn`, in the form
/// `<first>-<second>-<suffix>`.
///
/// For fixed word lists this is injective: distinct serial numbers always
/// get distinct names.
///
/// ```
/// use haikunator::{compose, WordList};
///
/// let first = WordList::from_iter(["able", "baker"]);
/// let second = WordList::from_iter(["card", "dog"]);
/// let name = compose(0xdeadbeef, &first, &second).unwrap();
/// assert_eq!(name, "baker-dog-1003409401");
/// ```
pub fn compose(
    sn: u32,
    first: &WordList,
    second: &WordList,
) -> Result<String, Error> {
    let parts =
        NameParts::decompose(permute(sn), first.radix(), second.radix())?;

    // Indices are strictly less than the list lengths.
    let first_word = &first[parts.first_index as usize];
    let second_word = &second[parts.second_index as usize];
    let suffix = parts.suffix;

    Ok(format!("{first_word}-{second_word}-{suffix}"))
}

#[cfg(test)]
mod test {
    use proptest::{
        arbitrary::any, prop_assert, prop_assert_eq, prop_assert_ne, proptest,
    };

    use super::*;

    fn able_baker() -> (WordList, WordList) {
        (
            WordList::from_iter(["able", "baker"]),
            WordList::from_iter(["card", "dog"]),
        )
    }

    /// Ensures that we haven't changed our scheme.
    #[test]
    fn compose_snapshot() {
        let (first, second) = able_baker();

        #[rustfmt::skip]
        let test_vectors: [(u32, &str); 7] = [
            (0x0000_0000, "able-card-0"),
            (0x0000_0001, "able-card-536870912"),
            (0x0000_0002, "able-card-134217728"),
            (0x0000_0003, "able-card-671088640"),
            (0x0000_002a, "able-card-143130624"),
            (0xdead_beef, "baker-dog-1003409401"),
            (0xffff_ffff, "baker-dog-1073741823"),
        ];

        for (sn, expected) in test_vectors {
            assert_eq!(compose(sn, &first, &second).unwrap(), expected);
        }
    }

    #[test]
    fn empty_lists_are_rejected() {
        let (first, second) = able_baker();
        let empty = WordList::default();

        assert_eq!(
            compose(0, &empty, &second),
            Err(Error::DegenerateWordList {
                which: ListPosition::First
            }),
        );
        assert_eq!(
            compose(0, &first, &empty),
            Err(Error::DegenerateWordList {
                which: ListPosition::Second
            }),
        );
        // The first list is checked first.
        assert_eq!(
            compose(u32::MAX, &empty, &empty),
            Err(Error::DegenerateWordList {
                which: ListPosition::First
            }),
        );
    }

    #[test]
    fn error_display() {
        let err = Error::DegenerateWordList {
            which: ListPosition::Second,
        };
        assert_eq!(err.to_string(), "second word list is empty");
    }

    #[test]
    fn single_word_lists_put_everything_in_the_suffix() {
        let first = WordList::from_iter(["only"]);
        let second = WordList::from_iter(["one"]);
        proptest!(|(sn in any::<u32>())| {
            let name = compose(sn, &first, &second).unwrap();
            prop_assert_eq!(name, format!("only-one-{}", permute(sn)));
        });
    }

    #[test]
    fn decompose_recompose_roundtrip() {
        proptest!(|(
            value in any::<u32>(),
            first_len in 1..=u32::MAX,
            second_len in 1..=u32::MAX,
        )| {
            let parts =
                NameParts::decompose(value, first_len, second_len).unwrap();
            prop_assert!(parts.first_index < first_len);
            prop_assert!(parts.second_index < second_len);
            prop_assert_eq!(
                parts.recompose(first_len, second_len),
                Some(value)
            );
        });
    }

    #[test]
    fn decompose_small_radices_exhaustive() {
        // F * S * K values for F = 3, S = 5, K = 7.
        for value in 0..3 * 5 * 7 {
            let parts = NameParts::decompose(value, 3, 5).unwrap();
            assert_eq!(parts.first_index, value % 3);
            assert_eq!(parts.second_index, (value / 3) % 5);
            assert_eq!(parts.suffix, value / 15);
            assert_eq!(parts.recompose(3, 5), Some(value));
        }
    }

    #[test]
    fn recompose_overflow() {
        let parts = NameParts {
            first_index: 0,
            second_index: 0,
            suffix: u32::MAX,
        };
        assert_eq!(parts.recompose(2, 2), None);
    }

    #[test]
    fn distinct_serials_get_distinct_names() {
        let first = WordList::from_iter(["ash", "birch", "cedar", "elm"]);
        let second = WordList::from_iter(["brook", "hill", "vale"]);
        proptest!(|(a in any::<u32>(), b in any::<u32>())| {
            let name_a = compose(a, &first, &second).unwrap();
            let name_b = compose(b, &first, &second).unwrap();
            if a == b {
                prop_assert_eq!(name_a, name_b);
            } else {
                prop_assert_ne!(name_a, name_b);
            }
        });
    }

    #[test]
    fn non_ascii_words() {
        let first = WordList::from_iter(["schön"]);
        let second = WordList::from_iter(["straße", "öl"]);
        assert_eq!(compose(0, &first, &second).unwrap(), "schön-straße-0");
    }
}

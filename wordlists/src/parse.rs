use haikunator::WordList;

/// Lines starting with this prefix are comments.
const COMMENT_PREFIX: &str = "# ";

/// Parse a word list file: one word per line, in file order. Empty lines and
/// lines starting with `"# "` are skipped. A trailing `\r` is stripped so
/// files with CRLF line endings behave the same as LF.
///
/// The result is neither sorted nor deduplicated, since either would shift
/// word indices and change generated names.
pub fn parse_word_list(contents: &str) -> WordList {
    contents
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with(COMMENT_PREFIX))
        .collect()
}

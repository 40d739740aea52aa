// src/domain/text.rs
use std::sync::LazyLock;

use regex::Regex;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern is valid"));
static UNDERLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.*?)__").expect("underline pattern is valid"));
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

pub const DEFAULT_SEPARATOR: &str = ", ";
pub const LAST_WORD_SEPARATOR: &str = " and ";

/// Converts `**bold**`, `*italic*` and `__underline__` into `<b>`, `<i>` and
/// `<u>` tags.
pub fn slimdown(text: &str) -> String {
    let text = BOLD.replace_all(text, "<b>$1</b>");
    let text = ITALIC.replace_all(&text, "<i>$1</i>");
    UNDERLINE.replace_all(&text, "<u>$1</u>").into_owned()
}

pub fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}

pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// First value that is present and not empty.
pub fn firstof<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    values.into_iter().flatten().find(|v| !v.is_empty())
}

/// Joins items as a human readable list, e.g. `"a, b and c"`.
pub fn join_text<S: AsRef<str>>(items: &[S], separator: &str, last_word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_owned(),
        [init @ .., last] => {
            let head = init.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(separator);
            format!("{head}{last_word}{}", last.as_ref())
        }
    }
}

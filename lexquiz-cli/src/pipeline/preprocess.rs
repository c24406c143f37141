//! Built-in per-language preprocessors
//!
//! A preprocessor is a pure text transform producing the human-readable
//! display view of a source: line-break joining, quote normalization,
//! annotation stripping. Anything requiring morphological analysis belongs
//! to the lemmatizer stage, not here.

use fancy_regex::{Captures, Regex};
use once_cell::sync::Lazy;

/// A pure text transform.
pub type Preprocessor = fn(&str) -> String;

/// Look up the built-in preprocessor for a language tag.
pub fn preprocessor_for(lang: &str) -> Option<Preprocessor> {
    match lang {
        "en" => Some(preprocess_en),
        "ojp" => Some(preprocess_ojp),
        _ => None,
    }
}

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n\r]+").unwrap());
static SOFT_HYPHEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w)-\s+(\w)").unwrap());

/// English cleanup: join hard-wrapped lines, mend soft-hyphenated words, and
/// normalize curly quotes.
fn preprocess_en(text: &str) -> String {
    let text = LINE_BREAKS.replace_all(text, " ");
    let text = SOFT_HYPHEN.replace_all(&text, |caps: &Captures| {
        format!("{}{}", &caps[1], &caps[2])
    });
    text.replace('’', "'").replace(['“', '”'], "\"")
}

static REPEAT_VOICED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:／〃＼|＼〃／)").unwrap());
static REPEAT_UNVOICED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:／＼|＼／)").unwrap());
static ODORIJI_UNVOICED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.)ゝ").unwrap());
static ODORIJI_VOICED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(.)ゞ").unwrap());

const UNVOICED: &str = "かきくけこさしすせそたちつてとはひふへほ";
const VOICED: &str = "がぎぐげござじずぜぞだぢづでどばびぶべぼ";

fn to_voiced(ch: char) -> char {
    UNVOICED
        .chars()
        .position(|c| c == ch)
        .and_then(|index| VOICED.chars().nth(index))
        .unwrap_or(ch)
}

/// Classical Japanese cleanup: strip editorial annotations, expand
/// single-character repeat marks, normalize bracket forms, and drop the
/// quotation brackets and full-width spaces.
///
/// Multi-character repeat marks (〱/〲 standing for a whole word) need the
/// tagger's tokenization to resolve and are left to the lemmatizer stage.
fn preprocess_ojp(text: &str) -> String {
    let text = text
        .replace('（', "(")
        .replace('）', ")")
        .replace('［', "[")
        .replace('］', "]")
        .replace('｛', "{")
        .replace('｝', "}");

    let mut text = text;
    for (open, close) in [('(', ')'), ('[', ']'), ('{', '}'), ('〔', '〕'), ('【', '】')] {
        text = remove_between(&text, open, close);
    }

    let text = REPEAT_VOICED.replace_all(&text, "〲");
    let text = REPEAT_UNVOICED.replace_all(&text, "〱");
    let text = ODORIJI_UNVOICED.replace_all(&text, |caps: &Captures| {
        format!("{0}{0}", &caps[1])
    });
    let text = ODORIJI_VOICED.replace_all(&text, |caps: &Captures| {
        let prev = caps[1].chars().next().unwrap_or_default();
        format!("{prev}{}", to_voiced(prev))
    });

    text.replace('｢', "「")
        .replace('｣', "」")
        .replace(['「', '」', '『', '』'], "")
        .replace('　', "")
}

/// Drop everything between `open` and `close`, nesting-aware. Stray
/// unbalanced brackets are dropped as well.
fn remove_between(text: &str, open: char, close: char) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == open {
            depth += 1;
        } else if ch == close {
            depth = depth.saturating_sub(1);
        } else if depth == 0 {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_language_has_no_preprocessor() {
        assert!(preprocessor_for("tlh").is_none());
    }

    #[test]
    fn en_joins_hard_wrapped_lines() {
        assert_eq!(preprocess_en("one\ntwo\r\nthree"), "one two three");
    }

    #[test]
    fn en_mends_soft_hyphens() {
        assert_eq!(preprocess_en("be-\nsides"), "besides");
    }

    #[test]
    fn en_normalizes_curly_quotes() {
        assert_eq!(preprocess_en("it’s “fine”"), "it's \"fine\"");
    }

    #[test]
    fn ojp_strips_nested_annotations() {
        assert_eq!(
            preprocess_ojp("いと（注（内）釈）をかし"),
            "いとをかし"
        );
    }

    #[test]
    fn ojp_expands_single_repeat_marks() {
        assert_eq!(preprocess_ojp("つゝ"), "つつ");
        assert_eq!(preprocess_ojp("かゞ"), "かが");
    }

    #[test]
    fn ojp_drops_quotation_brackets_and_ideographic_space() {
        assert_eq!(preprocess_ojp("「いと　をかし」"), "いとをかし");
    }

    #[test]
    fn ojp_normalizes_repeat_mark_substitutions() {
        assert_eq!(preprocess_ojp("やう／＼"), "やう〱");
        assert_eq!(preprocess_ojp("かは／〃＼"), "かは〲");
    }
}

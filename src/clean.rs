//! Punctuation normalization for messy plain text.
//!
//! OCR output and ASR transcripts detach punctuation from words
//! ("hello , there") and run sentences together ("end.Next"). Both confuse
//! sentence splitting, so the pipeline offers these fixes as an opt-in
//! pre-pass. They are lossy on text that was already clean — decimal
//! numbers in particular — which is why they are not on by default.

use std::sync::OnceLock;

use regex::Regex;

fn punct_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\s*([?!.,]+(?:\s+[?!.,]+)*)\s*").expect("static regex compiles")
    })
}

fn spaces() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" +").expect("static regex compiles"))
}

fn unspaced_period() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.([^ ])").expect("static regex compiles"))
}

/// Reattach floating punctuation to the preceding word.
///
/// `"hello , there ."` becomes `"hello, there."`. Runs of punctuation
/// separated by whitespace collapse into one run followed by a single
/// space; spaced-out quotes are reattached too.
///
/// ## Example
///
/// ```rust
/// use stanza::fix_punct_spaces;
///
/// assert_eq!(fix_punct_spaces("hello , there !"), "hello, there!");
/// ```
#[must_use]
pub fn fix_punct_spaces(text: &str) -> String {
    let fixed = punct_runs().replace_all(text, |caps: &regex::Captures<'_>| {
        let run: String = caps[1].split_whitespace().collect();
        format!("{run} ")
    });
    fixed
        .replace(" ' ", "'")
        .replace(" \" ", "\"")
        .trim()
        .to_string()
}

/// Collapse runs of spaces and put a space after periods that lack one.
///
/// `"end.Next  one"` becomes `"end. Next one"`. Note this also spaces out
/// decimal points; it is meant for text where periods are sentence
/// boundaries.
///
/// ## Example
///
/// ```rust
/// use stanza::ensure_period_spacing;
///
/// assert_eq!(ensure_period_spacing("one.two.  three"), "one. two. three");
/// ```
#[must_use]
pub fn ensure_period_spacing(text: &str) -> String {
    let collapsed = spaces().replace_all(text, " ");
    unspaced_period()
        .replace_all(&collapsed, ". ${1}")
        .trim()
        .to_string()
}

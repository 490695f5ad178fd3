//! Whitespace and capitalization cleanup
//!
//! Runs last, after rule and filler passes may have left uneven spacing or a
//! lower-case sentence start behind.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// Terminator, optional whitespace, lower-case letter
static LOWERCASE_SENTENCE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.!?])\s*(\p{Ll})").unwrap());

/// Collapse every run of two or more whitespace characters to one space
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Rewrite "terminator, optional whitespace, lower-case letter" as
/// "terminator, one space, upper-case letter", left to right.
pub fn capitalize_sentences(text: &str) -> String {
    LOWERCASE_SENTENCE_START
        .replace_all(text, |caps: &Captures| {
            let mut out = String::with_capacity(caps[0].len() + 1);
            out.push_str(&caps[1]);
            out.push(' ');
            out.extend(caps[2].chars().flat_map(char::to_uppercase));
            out
        })
        .into_owned()
}

/// Full normalization: collapse whitespace, capitalize, trim
pub fn normalize(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    capitalize_sentences(&collapsed).trim().to_string()
}

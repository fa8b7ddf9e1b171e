//! The parser-service boundary.
//!
//! The engine never tokenizes or parses raw text itself; a collaborator
//! turns UTF-8 text into constituency trees. [`ParserService`] is that
//! seam. The CLI ships an implementation that shells out to an external
//! constituency parser; tests substitute in-memory fakes.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParserResult;
use crate::tree::Tree;

/// Characters a parser input is reduced to: Latin letters, digits, basic
/// punctuation, whitespace, ampersands, and percent signs.
static INPUT_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[^a-zA-Z0-9 ,.?!;:'"()\[\]{}&%-]"#).expect("valid regex")
});

/// Converts raw text into constituency trees.
///
/// A call is synchronous from the engine's point of view; it may block on
/// process or network I/O behind the scenes. Failure means no trees and
/// no record for the unit — the engine does not retry.
pub trait ParserService {
    /// Parse one document (or one sentence) of raw UTF-8 text.
    fn parse_text(&self, text: &str) -> ParserResult<Vec<Tree>>;
}

/// Normalize raw text before handing it to a parser: line breaks become
/// spaces and anything outside the accepted character set is dropped.
pub fn preprocess(text: &str) -> String {
    let flat = text.replace(['\n', '\r'], " ");
    INPUT_CHARSET.replace_all(&flat, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preprocess_flattens_line_breaks() {
        assert_eq!(preprocess("one\ntwo\r\nthree"), "one two three");
    }

    #[test]
    fn preprocess_keeps_basic_punctuation() {
        let kept = "Who, me? Yes! (really); 50% & more: \"quoted\" [ok] {fine} semi-done.";
        assert_eq!(preprocess(kept), kept);
    }

    #[test]
    fn preprocess_drops_exotic_characters() {
        assert_eq!(preprocess("caf\u{e9} \u{2014} r\u{e9}sum\u{e9}"), "caf  rsum");
        assert_eq!(preprocess("tabs\tstay out"), "tabsstay out");
    }
}

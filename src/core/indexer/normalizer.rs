//! Flattens extracted markup into a single line of index text.
//!
//! The extraction handler returns XHTML. Text nodes are collected in
//! document order (script and style bodies excluded), each one is
//! cleaned on its own, and the survivors are joined with single
//! spaces. Cleaning a fragment:
//!
//! 1. drop every `\n`
//! 2. drop every `.`
//! 3. collapse whitespace runs to one space and trim
//! 4. put a space after any `<` or `&` that would open a tag or a
//!    character reference if the text were parsed again
//!
//! Step 4 matters for escaped markup in document text: `&lt;b&gt;`
//! decodes to `<b>`, which is emitted as `< b>`. The output contains no
//! newlines, periods, repeated whitespace or anything the parser would
//! consume, so running it through [`normalize`] again is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Node};

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// `<` followed by something that starts a tag, end tag, comment or doctype
static TAG_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<([A-Za-z/!?])").expect("valid regex"));

/// `&` followed by something that starts a named or numeric reference
static REF_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"&([A-Za-z0-9#])").expect("valid regex"));

/// Elements whose text never reaches the index
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Normalize extracted markup into flat index text
pub fn normalize(markup: &str) -> String {
    text_fragments(markup)
        .iter()
        .map(|fragment| clean_fragment(fragment))
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean a single text fragment
pub fn clean_fragment(fragment: &str) -> String {
    let without_breaks: String = fragment
        .chars()
        .filter(|c| *c != '\n' && *c != '.')
        .collect();

    let collapsed = WHITESPACE.replace_all(&without_breaks, " ");
    defuse_markup(collapsed.trim())
}

/// Break up `<x` and `&x` sequences so the text parses back to itself
pub fn defuse_markup(text: &str) -> String {
    let text = TAG_OPEN.replace_all(text, "< ${1}");
    REF_OPEN.replace_all(&text, "& ${1}").into_owned()
}

/// Trimmed, non-empty text nodes of `markup` in document order
pub fn text_fragments(markup: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    let mut fragments = Vec::new();

    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
        });
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            fragments.push(trimmed.to_string());
        }
    }

    fragments
}

// SPDX-License-Identifier: GPL-3.0-only

//! Span segmentation for Textile input.
//!
//! This module partitions a Textile document into an ordered sequence of
//! tagged spans so that each transformation rule set can run on its own
//! span class without corrupting protected content (code must never be
//! touched by emphasis or list rewriting, for example).
//!
//! # Span Classes
//!
//! A document decomposes into four classes:
//!
//! - [`Span::Fenced`]: a `<pre>...</pre>` region, possibly multi-line,
//!   possibly wrapping a `<code class="LANG">` fragment
//! - [`Span::InlineCode`]: an `@...@` code span, first `@` paired with the
//!   nearest following `@`
//! - [`Span::CodeClass`]: a `<code class="LANG">...</code>` fragment
//!   appearing outside any `<pre>` block
//! - [`Span::Normal`]: everything else
//!
//! Spans carry their delimiters, so each transformer can see and strip its
//! own markers. Concatenating the spans of a segmentation reproduces the
//! input exactly.
//!
//! # Example
//!
//! ```
//! use tx2md::segmenter::{Span, segment};
//!
//! let spans = segment("See @x = 1@ for details.");
//!
//! assert_eq!(
//!     spans,
//!     vec![
//!         Span::Normal("See "),
//!         Span::InlineCode("@x = 1@"),
//!         Span::Normal(" for details."),
//!     ]
//! );
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Matches any protected region: a fenced `<pre>` block, a `<code class>`
/// fragment, or an `@` code span. Alternatives are non-greedy so an opener
/// pairs with the nearest closer of its own kind; `(?s)` lets blocks span
/// lines. Unterminated openers simply fail to match and fall through into
/// the surrounding normal text.
static PROTECTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<pre>.*?</pre>|<code class=".*?">.*?</code>|@.*?@"#)
        .expect("protected-span pattern is valid")
});

/// A contiguous piece of the input, classified into exactly one
/// transformation category.
///
/// Each variant borrows the matched text from the input, delimiters
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// A `<pre>...</pre>` region, destined for a Markdown fenced code block.
    Fenced(&'a str),

    /// An `@...@` inline code span.
    InlineCode(&'a str),

    /// A `<code class="LANG">...</code>` fragment outside a `<pre>` block.
    CodeClass(&'a str),

    /// Plain Textile text, subject to the full substitution rule chain.
    Normal(&'a str),
}

impl<'a> Span<'a> {
    /// Returns the underlying text of this span, delimiters included.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match self {
            Self::Fenced(s) | Self::InlineCode(s) | Self::CodeClass(s) | Self::Normal(s) => s,
        }
    }
}

/// Splits `text` into an ordered sequence of classified spans.
///
/// The input is scanned once; every match of a protected region becomes a
/// [`Span::Fenced`], [`Span::CodeClass`], or [`Span::InlineCode`], and the
/// gaps between matches become [`Span::Normal`]. Span order equals order of
/// appearance, and no text is dropped or duplicated: the concatenation of
/// all span texts equals the input. Empty gaps produce no span, so an input
/// that is exactly one protected block yields exactly one span.
///
/// Malformed markup never fails: an opening `<pre>` or `<code class>` with
/// no closing tag is left inside the surrounding normal text.
///
/// # Example
///
/// ```
/// use tx2md::segmenter::{Span, segment};
///
/// let spans = segment("<pre>int j = 4;</pre>");
/// assert_eq!(spans, vec![Span::Fenced("<pre>int j = 4;</pre>")]);
/// ```
#[must_use]
pub fn segment(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last = 0;

    for found in PROTECTED.find_iter(text) {
        if found.start() > last {
            spans.push(Span::Normal(&text[last..found.start()]));
        }

        let matched = found.as_str();
        spans.push(if matched.starts_with("<pre>") {
            Span::Fenced(matched)
        } else if matched.starts_with("<code") {
            Span::CodeClass(matched)
        } else {
            Span::InlineCode(matched)
        });

        last = found.end();
    }

    if last < text.len() {
        spans.push(Span::Normal(&text[last..]));
    }

    spans
}

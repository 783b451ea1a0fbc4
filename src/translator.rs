// SPDX-License-Identifier: GPL-3.0-only

//! Textile-to-Markdown translation over segmented spans.
//!
//! This module rewrites each [`Span`] class with its own rule set and
//! reassembles the results in input order:
//!
//! - Normal spans get the full substitution chain: list markers, emphasis,
//!   headings, footnotes, issue references, commit links
//! - `@...@` spans become backtick inline code
//! - `<code class>` spans become backtick inline code (GitHub cannot render
//!   language-tagged inline code, so the tag is dropped)
//! - `<pre>` blocks become fenced code blocks, carrying the language tag of
//!   an embedded `<code class>` wrapper when present
//!
//! Translation is total: unmatched markup is passed through as literal
//! text, never reported as an error.
//!
//! # Example
//!
//! ```
//! use tx2md::translator::Translator;
//!
//! let translator = Translator::new("art-framework-suite");
//! let markdown = translator.translate("h1. Title\n\nSee @x = 1@.", "");
//!
//! assert_eq!(markdown, "# Title\n\nSee `x = 1`.");
//! ```

use crate::segmenter::{Span, segment};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// The hosting platform all commit links point at.
const GITHUB_HOST: &str = "https://github.com";

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("rule pattern is valid")
}

// Normal-span rules, in application order. Order is load-bearing: list
// markers must be consumed before the bold rule can pair asterisks, and
// heading markers must be rewritten after the ordered-list rule has claimed
// line-leading `#`.
static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| rule(r"(?m)^\* "));
static UNORDERED_NESTED: LazyLock<Regex> = LazyLock::new(|| rule(r"(?m)^\*\* "));
static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| rule(r"(?m)^# "));
static ORDERED_NESTED: LazyLock<Regex> = LazyLock::new(|| rule(r"(?m)^## "));
static BOLD: LazyLock<Regex> = LazyLock::new(|| rule(r"\*(.*?)\*"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| rule(r"\b_(.*?)_\b"));
static HEADING: LazyLock<Regex> = LazyLock::new(|| rule(r"(?m)^h([1-4])\."));
static FOOTNOTE_REF: LazyLock<Regex> = LazyLock::new(|| rule(r"\[(\d+)\]"));
static FOOTNOTE_DEF: LazyLock<Regex> = LazyLock::new(|| rule(r"(?m)^fn(\d+)\. "));
static ISSUE_REF: LazyLock<Regex> = LazyLock::new(|| rule(r"(\w+)\s+#(\d{3,5})"));
static COMMIT_SCOPED: LazyLock<Regex> = LazyLock::new(|| rule(r"(\w+):commit:([a-f0-9]+)"));
static COMMIT_BARE: LazyLock<Regex> = LazyLock::new(|| rule(r"commit:([a-f0-9]+)"));

// Inline-span rules. Deliberately not DOTALL: an `@...@` span that picked
// up a newline during segmentation passes through unchanged.
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| rule(r"@(.*?)@"));
static CODE_CLASS_INLINE: LazyLock<Regex> =
    LazyLock::new(|| rule(r#"<code class=".*?">(.*?)</code>"#));
static CODE_CLASS_MULTILINE: LazyLock<Regex> =
    LazyLock::new(|| rule(r#"(?s)<code class="(.*?)">(.*?)</code>"#));

// A `<pre>` block wrapping a `<code class>` fragment. The opening tags may
// sit on their own lines; a single newline on each side of the body is
// absorbed here and re-emitted by the fence template.
static PRE_WITH_LANG: LazyLock<Regex> =
    LazyLock::new(|| rule(r#"(?s)^<pre>\n?<code class="([^"]*)">\n?(.*?)\n?</code>\n?</pre>$"#));

/// Translates Redmine Textile markup into GitHub Markdown.
///
/// The translator is constructed once with the hosting-platform
/// organization name (used to build commit URLs) and holds no other state,
/// so a single instance is safe to share across threads.
///
/// # Example
///
/// ```
/// use tx2md::translator::Translator;
///
/// let translator = Translator::new("art-framework-suite");
///
/// assert_eq!(
///     translator.translate("commit:3f2a9bc", "cetlib"),
///     "https://github.com/art-framework-suite/cetlib/commit/3f2a9bc"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    github_org: String,
}

impl Translator {
    /// Creates a translator that links commits under `github_org`.
    #[must_use]
    pub fn new(github_org: impl Into<String>) -> Self {
        Self {
            github_org: github_org.into(),
        }
    }

    /// Translates `text` from Textile to Markdown.
    ///
    /// `repo` is the repository context for bare `commit:HASH` references;
    /// pass an empty string when there is none (the resulting URL then
    /// carries an empty path segment, matching the legacy migration
    /// behavior).
    ///
    /// This is a total function: malformed or unbalanced markup degrades to
    /// literal text rather than failing.
    #[must_use]
    pub fn translate(&self, text: &str, repo: &str) -> String {
        let mut out = String::with_capacity(text.len());

        for span in segment(text) {
            match span {
                Span::Fenced(s) => out.push_str(&fenced(s)),
                Span::InlineCode(s) => out.push_str(&inline_code(s)),
                Span::CodeClass(s) => out.push_str(&code_class(s)),
                Span::Normal(s) => out.push_str(&self.normal(s, repo)),
            }
        }

        out
    }

    /// Applies the ordered substitution chain to a normal span.
    fn normal(&self, text: &str, repo: &str) -> String {
        let s = UNORDERED_ITEM.replace_all(text, "- ");
        let s = UNORDERED_NESTED.replace_all(&s, "\t- ");
        let s = ORDERED_ITEM.replace_all(&s, "1. ");
        let s = ORDERED_NESTED.replace_all(&s, "\t1. ");

        let s = BOLD.replace_all(&s, "**${1}**");
        let s = ITALIC.replace_all(&s, "*${1}*");

        // Replaced in place: any space after the marker is the source's own.
        let s = HEADING.replace_all(&s, |caps: &Captures| {
            match &caps[1] {
                "1" => "#",
                "2" => "##",
                "3" => "###",
                _ => "####",
            }
            .to_owned()
        });

        let s = FOOTNOTE_REF.replace_all(&s, "[^${1}]");
        let s = FOOTNOTE_DEF.replace_all(&s, "[^${1}]: ");

        // Bare issue numbers mean nothing on GitHub; attribute them.
        let s = ISSUE_REF.replace_all(&s, "Redmine ${1} ${2}");

        let s = COMMIT_SCOPED.replace_all(&s, |caps: &Captures| {
            format!(
                "{GITHUB_HOST}/{}/{}/commit/{}",
                self.github_org, &caps[1], &caps[2]
            )
        });
        let s = COMMIT_BARE.replace_all(&s, |caps: &Captures| {
            format!(
                "{GITHUB_HOST}/{}/{repo}/commit/{}",
                self.github_org, &caps[1]
            )
        });

        s.into_owned()
    }
}

/// Strips the `@` markers from an inline code span and wraps the contents
/// in backticks.
fn inline_code(span: &str) -> String {
    INLINE_CODE.replace_all(span, "`${1}`").into_owned()
}

/// Degrades a `<code class>` span to plain backtick inline code.
///
/// The single-line form drops the language tag entirely. A span with an
/// embedded newline falls back to stripping the tags and keeping the
/// language and body as literal text, best-effort.
fn code_class(span: &str) -> String {
    let s = CODE_CLASS_INLINE.replace_all(span, "`${1}`");
    let s = CODE_CLASS_MULTILINE.replace_all(&s, "${1}${2}");
    s.into_owned()
}

/// Converts a `<pre>` block into a Markdown fenced code block.
///
/// An embedded `<code class="LANG">` wrapper contributes its language tag
/// directly after the opening fence. Boundary newlines introduced purely by
/// tag placement are normalized to exactly one on each side of the body.
fn fenced(span: &str) -> String {
    if let Some(caps) = PRE_WITH_LANG.captures(span) {
        return format!("\n```{}\n{}\n```\n", &caps[1], &caps[2]);
    }

    let body = span
        .strip_prefix("<pre>")
        .and_then(|rest| rest.strip_suffix("</pre>"))
        .unwrap_or(span);
    let body = body.strip_prefix('\n').unwrap_or(body);
    let body = body.strip_suffix('\n').unwrap_or(body);

    format!("\n```\n{body}\n```\n")
}

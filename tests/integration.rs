// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for tx2md segmentation and translation.

use tx2md::segmenter::{Span, segment};
use tx2md::translator::Translator;

fn to_md(text: &str) -> String {
    Translator::new("art-framework-suite").translate(text, "")
}

/// The documented conversion scenarios, end to end.
#[test]
fn documented_conversions() {
    assert_eq!(to_md("<pre>int j = 4;</pre>"), "\n```\nint j = 4;\n```\n");
    assert_eq!(
        to_md("<code class=\"cpp\">int j = 4;</code>"),
        "`int j = 4;`"
    );
    assert_eq!(
        to_md("<pre><code class=\"cpp\">\nint i = 2;\n</code></pre>"),
        "\n```cpp\nint i = 2;\n```\n"
    );
    assert_eq!(
        to_md("\n* Item 1\n** Nested item 2\n"),
        "\n- Item 1\n\t- Nested item 2\n"
    );
    assert_eq!(
        to_md("\n# Item 1\n## Nested item 2\n"),
        "\n1. Item 1\n\t1. Nested item 2\n"
    );
    assert_eq!(
        to_md("As shown in [12], x = y.\n\nfn12. My reference"),
        "As shown in [^12], x = y.\n\n[^12]: My reference"
    );
    assert_eq!(to_md("@x = 1@"), "`x = 1`");
}

/// With no protected spans, translation equals the normal-span transform
/// applied to the whole input in one piece.
#[test]
fn input_without_protected_spans_is_one_normal_span() {
    let text = "h1. Title\n\n* item\n\n_emphasis_ and *bold*";
    assert_eq!(segment(text), vec![Span::Normal(text)]);
    assert_eq!(
        to_md(text),
        "# Title\n\n- item\n\n*emphasis* and **bold**"
    );
}

/// A realistic issue comment mixing most of the supported markup.
#[test]
fn translates_full_issue_comment() {
    let textile = "\
h2. Crash on startup

The fix for #4321 landed in cetlib:commit:a1b2c3. Set @debug = true@ to
reproduce:

<pre><code class=\"cpp\">
int main() { return 1; }
</code></pre>

Remaining work:
* update the docs
** mention the new flag
";

    let markdown = "\
## Crash on startup

The fix Redmine for 4321 landed in https://github.com/art-framework-suite/cetlib/commit/a1b2c3. Set `debug = true` to
reproduce:

\n```cpp\nint main() { return 1; }\n```\n

Remaining work:
- update the docs
\t- mention the new flag
";

    assert_eq!(to_md(textile), markdown);
}

/// Bare commit references resolve against the caller's repository context.
#[test]
fn repository_context_feeds_bare_commit_links() {
    let translator = Translator::new("art-framework-suite");
    assert_eq!(
        translator.translate("see commit:deadbeef", "fhicl-cpp"),
        "see https://github.com/art-framework-suite/fhicl-cpp/commit/deadbeef"
    );
}

/// Malformed markup never fails; it degrades to literal text.
#[test]
fn unbalanced_markup_is_best_effort() {
    assert_eq!(
        to_md("<pre>int j = 4; and *bold*"),
        "<pre>int j = 4; and **bold**"
    );
    assert_eq!(to_md("a lone @ sign"), "a lone @ sign");
}

/// Translation leaves protected content untouched by normal-span rules.
#[test]
fn protected_spans_shield_their_content() {
    let textile = "* real item\n<pre>\n* not an item\nh1. not a heading\n</pre>\n";
    assert_eq!(
        to_md(textile),
        "- real item\n\n```\n* not an item\nh1. not a heading\n```\n\n"
    );
}

/// The file flow the CLI performs: read Textile from disk, translate, write
/// Markdown next to it.
#[test]
fn file_round_trip_through_tempdir() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("notes.textile");
    let output = dir.path().join("notes.md");

    std::fs::write(&input, "h1. Notes\n\n@ls -la@\n").expect("write input");

    let textile = std::fs::read_to_string(&input).expect("read input");
    let markdown = to_md(&textile);
    std::fs::write(&output, &markdown).expect("write output");

    let written = std::fs::read_to_string(&output).expect("read output");
    assert_eq!(written, "# Notes\n\n`ls -la`\n");
}

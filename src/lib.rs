// SPDX-License-Identifier: GPL-3.0-only

//! Convert Redmine Textile markup to GitHub Markdown.
//!
//! This crate provides segmentation and translation functionality for
//! rewriting the Textile subset used by Redmine issues and comments into
//! Markdown suitable for GitHub.
//!
//! # Overview
//!
//! Redmine stores formatted text as Textile markup. This crate:
//!
//! 1. Segments the input into protected spans (code blocks, inline code)
//!    and normal spans
//! 2. Translates each span class with its own rule set and reassembles the
//!    result in original order
//!
//! Translation is a pure string rewrite: it never fails, performs no I/O,
//! and degrades malformed markup to literal text.
//!
//! # Example
//!
//! ```
//! use tx2md::translator::Translator;
//!
//! let translator = Translator::new("art-framework-suite");
//!
//! let markdown = translator.translate(
//!     "h2. Notes\n\n* fixed in @main.cc@\n* resolves #1234",
//!     "cetlib",
//! );
//!
//! assert_eq!(
//!     markdown,
//!     "## Notes\n\n- fixed in `main.cc`\n- Redmine resolves 1234"
//! );
//! ```
//!
//! # Modules
//!
//! - [`segmenter`]: span classification for Textile input
//! - [`translator`]: per-span-class rewriting into Markdown

#![deny(missing_docs)]

pub mod segmenter;
pub mod translator;

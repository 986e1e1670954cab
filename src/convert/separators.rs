//! Separator conventions and the per-token rewrite

use std::borrow::Cow;

/// Substring that marks a token as a header-file reference.
///
/// This is plain containment, not an extension check: `math.hpp` and even
/// `worth.having` qualify. The over-selection is intentional and preserved.
pub const HEADER_MARKER: &str = ".h";

/// A path separator convention, identified by its delimiter character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    Windows,
    Posix,
}

impl Convention {
    pub fn delimiter(self) -> char {
        match self {
            Convention::Windows => '\\',
            Convention::Posix => '/',
        }
    }
}

/// Whether a token should be selected for conversion.
pub fn is_header_token(token: &str) -> bool {
    token.contains(HEADER_MARKER)
}

/// Rewrite every `from` delimiter in `token` as the `to` delimiter.
///
/// A pure per-character mapping: no collapsing of repeated delimiters,
/// no `.`/`..` resolution, no case changes. Borrows when there is nothing
/// to rewrite.
pub fn convert_separators(token: &str, from: Convention, to: Convention) -> Cow<'_, str> {
    if from == to || !token.contains(from.delimiter()) {
        Cow::Borrowed(token)
    } else {
        Cow::Owned(token.replace(from.delimiter(), &to.delimiter().to_string()))
    }
}

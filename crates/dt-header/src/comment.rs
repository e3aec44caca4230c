//! The module containing the comment stripper.
//!
//! Block comments are removed in a first pass over the whole text and line comments in a
//! second one. A `//` inside a block comment is therefore removed with the block, and a `/*`
//! after a `//` still opens a block comment.

use logos::Logos;

/// Removes all `/* */` block comments and `//` line comments from `text`.
///
/// An unterminated block comment is left in place. Line comments inside it are still removed.
///
/// # Example
///
/// ```
/// use dt_header::strip_comments;
/// assert_eq!(strip_comments("a /* b */ c // d\ne"), "a  c \ne");
/// ```
#[must_use]
pub fn strip_comments(text: &str) -> String {
    let without_blocks = retain_code(
        text,
        BlockPass::lexer(text)
            .spanned()
            .map(|(token, span)| (token == Ok(BlockPass::Comment), span)),
    );
    retain_code(
        &without_blocks,
        LinePass::lexer(&without_blocks)
            .spanned()
            .map(|(token, span)| (token == Ok(LinePass::Comment), span)),
    )
}

fn retain_code(
    text: &str,
    tokens: impl Iterator<Item = (bool, std::ops::Range<usize>)>,
) -> String {
    let mut output = String::with_capacity(text.len());
    for (is_comment, span) in tokens {
        if !is_comment {
            output.push_str(&text[span]);
        }
    }
    output
}

/// Returned by the block pass for a `/*` without a matching `*/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct UnterminatedComment;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = UnterminatedComment)]
enum BlockPass {
    #[token("/*", callback = lex_block_comment)]
    Comment,

    #[regex("[^/]+")]
    #[token("/")]
    Text,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum LinePass {
    #[regex("//[^\n]*")]
    Comment,

    #[regex("[^/]+")]
    #[token("/")]
    Text,
}

fn lex_block_comment(lex: &mut logos::Lexer<BlockPass>) -> Result<(), UnterminatedComment> {
    let remainder: &str = lex.remainder();
    let mut asterisk_found = false;
    let mut total_len = 0;

    for c in remainder.chars() {
        total_len += c.len_utf8();

        if c == '*' {
            asterisk_found = true;
            continue;
        }

        if c == '/' && asterisk_found {
            lex.bump(total_len);
            return Ok(());
        }

        asterisk_found = false;
    }
    // Everything up to EOF is emitted as one errored token and kept verbatim
    lex.bump(total_len);
    Err(UnterminatedComment)
}

//! Lexer for author fields.
//!
//! Produces words and commas with byte spans into the input so that the
//! parser can hand back slices of the original text instead of rebuilt
//! strings. Braces and double quotes protect their contents: whitespace,
//! commas and the conjunction inside `{...}` or `"..."` do not split.

use std::ops::Range;

/// Kind of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Comma,
}

/// A token and the byte range it occupies in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    /// The token's text within `input`.
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        &input[self.span.clone()]
    }

    pub fn is_comma(&self) -> bool {
        self.kind == TokenKind::Comma
    }
}

/// Split `input` into words and commas.
///
/// Never fails. A stray `}` is kept as part of the current word, and an
/// unclosed `{` or `"` runs to the end of the input.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut depth: usize = 0;
    let mut in_quotes = false;

    for (idx, ch) in input.char_indices() {
        let protected = depth > 0 || in_quotes;
        match ch {
            '{' if !in_quotes => {
                depth += 1;
                word_start.get_or_insert(idx);
            }
            '}' if !in_quotes => {
                depth = depth.saturating_sub(1);
                word_start.get_or_insert(idx);
            }
            '"' if depth == 0 => {
                in_quotes = !in_quotes;
                word_start.get_or_insert(idx);
            }
            ',' if !protected => {
                if let Some(start) = word_start.take() {
                    tokens.push(word(start, idx));
                }
                tokens.push(Token {
                    kind: TokenKind::Comma,
                    span: idx..idx + 1,
                });
            }
            c if c.is_whitespace() && !protected => {
                if let Some(start) = word_start.take() {
                    tokens.push(word(start, idx));
                }
            }
            _ => {
                word_start.get_or_insert(idx);
            }
        }
    }

    if let Some(start) = word_start {
        tokens.push(word(start, input.len()));
    }

    tokens
}

fn word(start: usize, end: usize) -> Token {
    Token {
        kind: TokenKind::Word,
        span: start..end,
    }
}

/// Whether a word is a particle candidate: its first character is a
/// lowercase letter. Words opening with a brace or quote are protected and
/// never qualify.
pub fn is_lowercase_word(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_lowercase)
}

/// Whether a word consists only of braces and quotes, e.g. a stray `}`.
pub fn is_bare_delimiter(text: &str) -> bool {
    text.chars().all(|c| matches!(c, '{' | '}' | '"'))
}

/// Whether a word is entirely wrapped in one brace group, e.g.
/// `{World Health Organization}`.
pub fn is_brace_group(text: &str) -> bool {
    if !(text.starts_with('{') && text.ends_with('}')) || text.len() < 2 {
        return false;
    }
    // The opening brace must close at the very last character.
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return idx == text.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

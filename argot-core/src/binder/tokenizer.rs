//! Shell-like tokenization of raw argument strings.
//!
//! This module provides the first pass of binding: splitting the raw,
//! human-typed argument string into words, honoring single- and
//! double-quoted literals and backslash escapes within them.

/// Split a raw argument string into tokens.
///
/// Whitespace runs separate tokens except inside a quoted region. Quoted
/// regions keep their whitespace and lose the surrounding quote
/// characters. Inside a quoted region a backslash makes the following
/// character literal; outside quotes a backslash is an ordinary character.
/// An unterminated quote swallows the rest of the input rather than
/// erroring, and an empty input yields no tokens.
///
/// Escaping a quote character with the same kind as the enclosing region
/// is not supported: the inner quote terminates the region.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                if c == '\\' {
                    // A trailing backslash has nothing to escape and is
                    // dropped.
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                    }
                } else if c == q {
                    quote = None;
                } else {
                    current.push(c);
                }
            }
            None => {
                if c == '"' || c == '\'' {
                    quote = Some(c);
                    in_token = true;
                } else if c.is_whitespace() {
                    if in_token {
                        tokens.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                } else {
                    current.push(c);
                    in_token = true;
                }
            }
        }
    }

    if in_token {
        tokens.push(current);
    }

    tokens
}

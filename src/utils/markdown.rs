//! Telegram MarkdownV2 escaping.
//!
//! MarkdownV2 treats a wide set of punctuation as formatting; everything the
//! bot interpolates into a message (names, dates, error text) goes through
//! here first so it renders literally.

/// Escapes every MarkdownV2 special character with a backslash.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '_' | '*'
                | '['
                | ']'
                | '('
                | ')'
                | '~'
                | '`'
                | '>'
                | '#'
                | '+'
                | '-'
                | '='
                | '|'
                | '{'
                | '}'
                | '.'
                | '!'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

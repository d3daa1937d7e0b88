//! Stylesheet minifier.
//!
//! Strips block comments and collapses whitespace. It is deliberately
//! simple: no property merging or colour shortening.

use crate::traits::Transformer;
use anyhow::Result;
use std::any::Any;

/// Removes comments and insignificant whitespace from CSS.
///
/// ## Algorithm
/// 1. Copy `"` and `'` strings verbatim
/// 2. Outside strings, drop every `/* ... */` block (an unterminated
///    comment runs to EOF) and collapse runs of whitespace to one space
/// 3. Drop that space next to `{ } ; , >` and after `:`. A space before
///    `:` stays, since `a :hover` and `a:hover` select different elements
/// 4. Drop the last `;` before a closing brace
#[derive(Debug, Default)]
pub struct CssMinTransformer;

impl Transformer for CssMinTransformer {
    fn name(&self) -> &str {
        "CssMin"
    }

    fn transform(&self, content: String) -> Result<String> {
        let mut out = String::with_capacity(content.len());
        let mut chars = content.chars().peekable();
        // Last significant character written; a string counts as its quote
        let mut last: Option<char> = None;
        let mut pending_space = false;

        while let Some(c) = chars.next() {
            if c.is_whitespace() {
                pending_space = true;
                continue;
            }
            if c == '/' && chars.peek() == Some(&'*') {
                chars.next();
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    prev = skipped;
                }
                continue;
            }

            let after_punct = matches!(last, None | Some('{' | '}' | ';' | ',' | ':' | '>'));
            let before_punct = matches!(c, '{' | '}' | ';' | ',' | '>');
            if pending_space && !after_punct && !before_punct {
                out.push(' ');
            }
            pending_space = false;

            match c {
                '"' | '\'' => copy_string(c, &mut chars, &mut out),
                '}' if last == Some(';') => {
                    out.pop();
                    out.push(c);
                }
                _ => out.push(c),
            }
            last = Some(c);
        }

        Ok(out)
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Copy a string literal opened by `quote`, escapes included.
fn copy_string(quote: char, chars: &mut impl Iterator<Item = char>, out: &mut String) {
    out.push(quote);
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else if c == quote {
            break;
        }
    }
}

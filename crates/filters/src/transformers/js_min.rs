//! Script minifier.
//!
//! Removes comments and blank lines while leaving string literals intact.
//! Regular expression literals are not recognised.

use crate::traits::Transformer;
use anyhow::Result;
use std::any::Any;

/// Strips `//` and `/* */` comments, trims each line and drops empty ones.
///
/// ## Algorithm
/// 1. Scan the source, copying `'` and `"` strings and `` ` `` template
///    literals verbatim. A quote or double-quote string also ends at a
///    newline; a template literal only ends at its closing backtick
/// 2. Skip comments outside literals. A block comment becomes one space
/// 3. At each newline outside a template literal, emit the finished line
///    trimmed, unless it is empty
#[derive(Debug, Default)]
pub struct JsMinTransformer;

impl Transformer for JsMinTransformer {
    fn name(&self) -> &str {
        "JsMin"
    }

    fn transform(&self, content: String) -> Result<String> {
        Ok(minify(&content))
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn minify(input: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut chars = input.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            if c == '\n' && q != '`' {
                quote = None;
                finish_line(&mut lines, &mut line);
                continue;
            }
            line.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    line.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        let next = chars.peek().copied();
        match (c, next) {
            ('"' | '\'' | '`', _) => {
                quote = Some(c);
                line.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
                finish_line(&mut lines, &mut line);
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    prev = skipped;
                }
                line.push(' ');
            }
            ('\n', _) => finish_line(&mut lines, &mut line),
            _ => line.push(c),
        }
    }
    finish_line(&mut lines, &mut line);

    lines.join("\n")
}

/// Lines only end outside template literals, so trimming never touches
/// literal content.
fn finish_line(lines: &mut Vec<String>, line: &mut String) {
    let trimmed = line.trim();
    if !trimmed.is_empty() {
        lines.push(trimmed.to_string());
    }
    line.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_min() {
        let js = "// header\nvar a = 1; /* note */\n\n   var url = \"http://x\";\n".to_string();

        let minified = JsMinTransformer.transform(js).unwrap();

        assert_eq!(minified, "var a = 1;\nvar url = \"http://x\";");
    }

    #[test]
    fn test_comment_markers_inside_strings() {
        let js = "var s = '/* not a comment */'; // trailing".to_string();

        let minified = JsMinTransformer.transform(js).unwrap();

        assert_eq!(minified, "var s = '/* not a comment */';");
    }

    #[test]
    fn test_escaped_quotes() {
        let js = "var s = \"a \\\" // b\";".to_string();

        let minified = JsMinTransformer.transform(js.clone()).unwrap();

        assert_eq!(minified, js);
    }

    #[test]
    fn test_multiline_template_literal() {
        let js = "var s = `line1\n  // kept\n  /* also kept */\n`;\n\n  run(); // done\n".to_string();

        let minified = JsMinTransformer.transform(js).unwrap();

        assert_eq!(
            minified,
            "var s = `line1\n  // kept\n  /* also kept */\n`;\nrun();"
        );
    }

    #[test]
    fn test_unterminated_string_ends_at_newline() {
        let js = "var s = 'open\n  // gone\nrun();".to_string();

        let minified = JsMinTransformer.transform(js).unwrap();

        assert_eq!(minified, "var s = 'open\nrun();");
    }
}

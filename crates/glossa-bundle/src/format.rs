//! Positional message formatting.
//!
//! Patterns reference arguments by index: `"Accepts {0} arguments. {1}!"`.
//! A placeholder may carry a format type after a comma (`{0,number}`); the
//! type is accepted and the argument is rendered through `Display`.

use super::BundleError;
use std::fmt::Display;

/// How quotes and braces are treated in message patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatStyle {
    /// Single quotes delimit literal text and `''` is a literal quote.
    #[default]
    MessageFormat,
    /// No quoting. `{{` is a literal brace.
    Simple,
}

/// Format `pattern`, substituting `{n}` with the `n`-th argument.
///
/// Placeholders with no matching argument are kept as written.
pub fn format_message(
    pattern: &str,
    args: &[&dyn Display],
    style: FormatStyle,
) -> Result<String, BundleError> {
    let mut out = String::with_capacity(pattern.len() + args.len() * 8);
    let mut chars = pattern.char_indices().peekable();
    let mut in_quote = false;

    while let Some((start, c)) = chars.next() {
        match (style, c) {
            (FormatStyle::MessageFormat, '\'') => {
                if matches!(chars.peek(), Some((_, '\''))) {
                    chars.next();
                    out.push('\'');
                } else {
                    in_quote = !in_quote;
                }
            }
            (_, c) if in_quote => out.push(c),
            (FormatStyle::Simple, '{') if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                out.push('{');
            }
            (_, '{') => {
                let end = pattern[start..]
                    .find('}')
                    .map(|offset| start + offset)
                    .ok_or_else(|| invalid(pattern, "unmatched braces"))?;
                let placeholder = &pattern[start + 1..end];
                let index = parse_index(placeholder)
                    .ok_or_else(|| invalid(pattern, &format!("can't parse argument number: {placeholder}")))?;

                match args.get(index) {
                    Some(arg) => out.push_str(&arg.to_string()),
                    None => out.push_str(&pattern[start..=end]),
                }

                while matches!(chars.peek(), Some(&(i, _)) if i <= end) {
                    chars.next();
                }
            }
            (_, c) => out.push(c),
        }
    }

    Ok(out)
}

fn parse_index(placeholder: &str) -> Option<usize> {
    let index = placeholder.split(',').next()?.trim();
    index.parse().ok()
}

fn invalid(pattern: &str, message: &str) -> BundleError {
    BundleError::InvalidFormat {
        pattern: pattern.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mf(pattern: &str, args: &[&dyn Display]) -> String {
        format_message(pattern, args, FormatStyle::MessageFormat).unwrap()
    }

    fn simple(pattern: &str, args: &[&dyn Display]) -> String {
        format_message(pattern, args, FormatStyle::Simple).unwrap()
    }

    #[test]
    fn test_positional_arguments() {
        assert_eq!(
            mf("Accepts {0} arguments. {1}!", &[&"any", &10]),
            "Accepts any arguments. 10!"
        );
        assert_eq!(mf("{1} before {0}", &[&"a", &"b"]), "b before a");
        assert_eq!(mf("{0}{0}", &[&'x']), "xx");
        assert_eq!(mf("{ 0 }", &[&1.5]), "1.5");
        assert_eq!(mf("{0,number}", &[&42]), "42");
    }

    #[test]
    fn test_missing_argument_kept() {
        assert_eq!(mf("{0} and {2}", &[&"one"]), "one and {2}");
        assert_eq!(mf("no args {0}", &[]), "no args {0}");
    }

    #[test]
    fn test_message_format_quotes() {
        assert_eq!(mf("It''s {0}", &[&"here"]), "It's here");
        assert_eq!(mf("'{0}' is literal", &[&"x"]), "{0} is literal");
        assert_eq!(mf("Don't", &[]), "Dont");
        assert_eq!(mf("'It''s' {0}", &[&1]), "It's 1");
    }

    #[test]
    fn test_simple_style() {
        assert_eq!(simple("It's {0}", &[&"here"]), "It's here");
        assert_eq!(simple("{{0} is literal", &[&"x"]), "{0} is literal");
        assert_eq!(simple("'{0}'", &[&"x"]), "'x'");
    }

    #[test]
    fn test_invalid_patterns() {
        let result = format_message("Hello {0", &[&"x"], FormatStyle::MessageFormat);
        assert!(matches!(result, Err(BundleError::InvalidFormat { .. })));

        let result = format_message("Hello {name}", &[&"x"], FormatStyle::Simple);
        match result {
            Err(BundleError::InvalidFormat { pattern, message }) => {
                assert_eq!(pattern, "Hello {name}");
                assert!(message.contains("name"));
            }
            other => panic!("Expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_stray_closing_brace() {
        assert_eq!(mf("a } b", &[]), "a } b");
    }

    proptest! {
        #[test]
        fn test_plain_text_unchanged(text in "[^{}']*") {
            prop_assert_eq!(mf(&text, &[&"unused"]), text.clone());
            prop_assert_eq!(simple(&text, &[&"unused"]), text);
        }

        #[test]
        fn test_single_placeholder_inserts_argument(
            prefix in "[a-z ]*",
            arg in "\\PC*",
        ) {
            let pattern = format!("{prefix}{{0}}");
            prop_assert_eq!(mf(&pattern, &[&arg]), format!("{prefix}{arg}"));
        }
    }
}

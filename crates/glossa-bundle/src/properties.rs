//! `.properties` file parsing.

use super::BundleError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::Chars;

/// Key/value pairs of a properties file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Properties {
    /// Create an empty set of properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties from text.
    pub fn parse(content: &str) -> Result<Self, BundleError> {
        let mut properties = Self::new();
        let mut lines = content.lines().enumerate().peekable();

        while let Some((idx, raw)) = lines.next() {
            let line_no = idx + 1;
            let trimmed = raw.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }

            let mut logical = trimmed.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some((_, next)) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (key, value) = split_key_value(&logical);
            let key = unescape(key, line_no)?;
            let value = unescape(value, line_no)?;
            properties.insert(key, value);
        }

        Ok(properties)
    }

    /// Read and parse a properties file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BundleError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Insert a pair. A repeated key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A line continues when it ends with an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line at the first unescaped `=`, `:` or whitespace.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\x0c' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let rest = line[key_end..].trim_start_matches([' ', '\t', '\x0c']);
    let rest = rest
        .strip_prefix(['=', ':'])
        .map(|r| r.trim_start_matches([' ', '\t', '\x0c']))
        .unwrap_or(rest);

    (key, rest)
}

/// Resolve backslash escapes.
fn unescape(s: &str, line: usize) -> Result<String, BundleError> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => out.push(unicode_escape(&mut chars, line)?),
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

/// Decode the digits after `\u`, joining a UTF-16 surrogate pair spread
/// over two escapes.
fn unicode_escape(chars: &mut Chars<'_>, line: usize) -> Result<char, BundleError> {
    let malformed = |digits: &str| BundleError::Parse {
        line,
        message: format!("malformed \\uxxxx encoding: \\u{digits}"),
    };

    let (digits, high) = hex4(chars);
    let high = high.ok_or_else(|| malformed(&digits))?;

    if !(0xD800..=0xDBFF).contains(&high) {
        return char::from_u32(high).ok_or_else(|| malformed(&digits));
    }

    let mut rest = chars.clone();
    if rest.next() == Some('\\') && rest.next() == Some('u') {
        if let (_, Some(low @ 0xDC00..=0xDFFF)) = hex4(&mut rest) {
            *chars = rest;
            let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(code).ok_or_else(|| malformed(&digits));
        }
    }

    Err(malformed(&digits))
}

/// Read up to four hex digits, returning them and their value if all four parse.
fn hex4(chars: &mut Chars<'_>) -> (String, Option<u32>) {
    let digits: String = chars.by_ref().take(4).collect();
    let value = (digits.len() == 4)
        .then(|| u32::from_str_radix(&digits, 16).ok())
        .flatten();
    (digits, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        let props = Properties::parse(
            "a=1\n\
             b : 2\n\
             c 3\n\
             d\t=\t4\n\
             empty=\n\
             bare\n",
        )
        .unwrap();

        assert_eq!(props.get("a"), Some("1"));
        assert_eq!(props.get("b"), Some("2"));
        assert_eq!(props.get("c"), Some("3"));
        assert_eq!(props.get("d"), Some("4"));
        assert_eq!(props.get("empty"), Some(""));
        assert_eq!(props.get("bare"), Some(""));
        assert_eq!(props.len(), 6);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let props = Properties::parse(
            "# comment\n\
             ! also a comment\n\
             \n\
             key=value # not a comment\n",
        )
        .unwrap();

        assert_eq!(props.len(), 1);
        assert_eq!(props.get("key"), Some("value # not a comment"));
    }

    #[test]
    fn test_line_continuation() {
        let props = Properties::parse("fruits=apple, \\\n    banana, \\\n    pear\nnext=1").unwrap();
        assert_eq!(props.get("fruits"), Some("apple, banana, pear"));
        assert_eq!(props.get("next"), Some("1"));

        // An escaped trailing backslash does not continue the line.
        let props = Properties::parse("path=C:\\\\\nnext=1").unwrap();
        assert_eq!(props.get("path"), Some("C:\\"));
        assert_eq!(props.get("next"), Some("1"));
    }

    #[test]
    fn test_escapes() {
        let props = Properties::parse(
            "tab=a\\tb\n\
             newline=a\\nb\n\
             unicode=\\u00e9t\\u00E9\n\
             key\\=with\\:seps=v\n\
             key\\ space=v2\n\
             quote=It\\'s\n",
        )
        .unwrap();

        assert_eq!(props.get("tab"), Some("a\tb"));
        assert_eq!(props.get("newline"), Some("a\nb"));
        assert_eq!(props.get("unicode"), Some("été"));
        assert_eq!(props.get("key=with:seps"), Some("v"));
        assert_eq!(props.get("key space"), Some("v2"));
        assert_eq!(props.get("quote"), Some("It's"));
    }

    #[test]
    fn test_malformed_unicode_escape() {
        let result = Properties::parse("ok=1\nbad=\\u12\n");
        match result {
            Err(BundleError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected Parse error, got {other:?}"),
        }

        assert!(Properties::parse("bad=\\uZZZZ").is_err());
    }

    #[test]
    fn test_surrogate_pair_escape() {
        let props = Properties::parse("emoji=Hi \\uD83D\\uDE00\nclef=\\ud834\\udd1e!\n").unwrap();
        assert_eq!(props.get("emoji"), Some("Hi \u{1F600}"));
        assert_eq!(props.get("clef"), Some("\u{1D11E}!"));
    }

    #[test]
    fn test_lone_surrogate_escape() {
        for content in ["a=\\uD83D", "a=\\uD83Dx", "a=\\uD83D\\u0041", "a=\\uDE00"] {
            match Properties::parse(content) {
                Err(BundleError::Parse { line, message }) => {
                    assert_eq!(line, 1);
                    assert!(message.contains("\\u"), "{message}");
                }
                other => panic!("Expected Parse error for {content:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_duplicates_keep_position() {
        let props = Properties::parse("first=1\nsecond=2\nfirst=3\n").unwrap();
        assert_eq!(props.get("first"), Some("3"));
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn test_crlf_and_utf8() {
        let props = Properties::parse("greeting=Grüß dich\r\nfarewell=さようなら\r\n").unwrap();
        assert_eq!(props.get("greeting"), Some("Grüß dich"));
        assert_eq!(props.get("farewell"), Some("さようなら"));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Properties::load("/nonexistent/nls.properties");
        assert!(matches!(result, Err(BundleError::Io(_))));
    }
}

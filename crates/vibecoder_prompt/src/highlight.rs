//! Line-level syntax highlighting for Apps Script.

use serde::{Deserialize, Serialize};

const KEYWORDS: &[&str] = &[
    "function", "const", "let", "var", "if", "else", "for", "while", "return", "new", "this",
];

/// Token category of a highlighted span.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum SpanKind {
    /// Reserved word
    Keyword,
    /// Quoted string literal, quotes included
    String,
    /// Line comment to end of line
    Comment,
    /// Numeric literal
    Number,
    /// Everything else
    Plain,
}

/// A run of text with one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Category
    pub kind: SpanKind,
    /// Text covered by the span
    pub text: String,
}

impl Span {
    fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Tokenize one line of script into highlighted spans.
///
/// Concatenating the span texts reproduces the input exactly. Adjacent plain
/// text is merged into one span. Unterminated strings run to end of line.
///
/// # Examples
///
/// ```
/// use vibecoder_prompt::{highlight, SpanKind};
///
/// let spans = highlight("const n = 42; // answer");
/// assert_eq!(spans[0].kind, SpanKind::Keyword);
/// assert!(spans.iter().any(|s| s.kind == SpanKind::Number && s.text == "42"));
/// assert_eq!(spans.last().unwrap().kind, SpanKind::Comment);
/// ```
pub fn highlight(line: &str) -> Vec<Span> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut spans: Vec<Span> = Vec::new();
    let mut i = 0;

    let push = |spans: &mut Vec<Span>, kind: SpanKind, text: &str| {
        if text.is_empty() {
            return;
        }
        match spans.last_mut() {
            Some(last) if kind == SpanKind::Plain && last.kind == SpanKind::Plain => {
                last.text.push_str(text)
            }
            _ => spans.push(Span::new(kind, text)),
        }
    };
    let byte_at = |idx: usize| chars.get(idx).map(|(b, _)| *b).unwrap_or(line.len());

    while i < chars.len() {
        let (start, c) = chars[i];

        if c == '/' && chars.get(i + 1).is_some_and(|(_, n)| *n == '/') {
            push(&mut spans, SpanKind::Comment, &line[start..]);
            break;
        }

        if c == '"' || c == '\'' || c == '`' {
            let mut j = i + 1;
            let mut escaped = false;
            while j < chars.len() {
                let ch = chars[j].1;
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == c {
                    j += 1;
                    break;
                }
                j += 1;
            }
            push(&mut spans, SpanKind::String, &line[start..byte_at(j)]);
            i = j;
            continue;
        }

        if c.is_ascii_digit() {
            let prev_is_word = i > 0 && is_word_char(chars[i - 1].1);
            let mut j = i;
            while j < chars.len() && (chars[j].1.is_ascii_alphanumeric() || chars[j].1 == '.') {
                j += 1;
            }
            let kind = if prev_is_word {
                SpanKind::Plain
            } else {
                SpanKind::Number
            };
            push(&mut spans, kind, &line[start..byte_at(j)]);
            i = j;
            continue;
        }

        if is_word_char(c) {
            let mut j = i;
            while j < chars.len() && is_word_char(chars[j].1) {
                j += 1;
            }
            let word = &line[start..byte_at(j)];
            let kind = if KEYWORDS.contains(&word) {
                SpanKind::Keyword
            } else {
                SpanKind::Plain
            };
            push(&mut spans, kind, word);
            i = j;
            continue;
        }

        push(&mut spans, SpanKind::Plain, &line[start..byte_at(i + 1)]);
        i += 1;
    }

    spans
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

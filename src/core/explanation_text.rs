//! Parsing of generated narrative text into bullet sections.
//!
//! The explanation service answers with loosely formatted markdown: bullet
//! lines, `**bold**` spans and a trailing `**Next actions:**` block. The
//! parser is total; any input produces a (possibly empty) section set.

use smallvec::SmallVec;

const EMPHASIS_DELIMITER: &str = "**";
const ACTIONS_MARKER: &str = "**next actions";

/// One run of text inside a bullet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    pub emphasized: bool,
}

impl TextSpan {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    #[must_use]
    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// A bullet as alternating plain/emphasized spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExplanationBullet {
    pub spans: SmallVec<[TextSpan; 4]>,
}

impl ExplanationBullet {
    /// Bullet text with emphasis delimiters removed.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    #[must_use]
    pub fn has_emphasis(&self) -> bool {
        self.spans.iter().any(|span| span.emphasized)
    }
}

/// Body and next-action bullets derived from one explanation text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExplanationSections {
    pub body: Vec<ExplanationBullet>,
    pub actions: Vec<ExplanationBullet>,
}

impl ExplanationSections {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.actions.is_empty()
    }
}

/// What the annotation card should show for the current explanation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplanationCardContent {
    Sections(ExplanationSections),
    RawText(String),
    Placeholder(String),
}

impl ExplanationCardContent {
    /// Picks bullet sections when the body parsed into bullets, the raw text
    /// when it did not, and a placeholder while loading or when text is blank.
    #[must_use]
    pub fn resolve(text: &str, loading: bool, loading_text: &str, empty_text: &str) -> Self {
        if loading {
            return Self::Placeholder(loading_text.to_owned());
        }
        let sections = parse_explanation(text);
        if !sections.body.is_empty() {
            return Self::Sections(sections);
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Self::Placeholder(empty_text.to_owned())
        } else {
            Self::RawText(trimmed.to_owned())
        }
    }
}

/// Splits `text` at the first next-actions marker and parses both halves.
#[must_use]
pub fn parse_explanation(text: &str) -> ExplanationSections {
    let (body, actions) = match find_actions_marker(text) {
        Some((start, end)) => (&text[..start], &text[end..]),
        None => (text, ""),
    };
    ExplanationSections {
        body: parse_bullets(body),
        actions: parse_bullets(actions),
    }
}

/// Byte range of the first `**Next actions**` marker, ignoring ASCII case.
///
/// Accepts the colon inside or right after the closing delimiter.
#[must_use]
pub fn find_actions_marker(text: &str) -> Option<(usize, usize)> {
    // ASCII lowercasing keeps byte offsets aligned with `text`.
    let lower = text.to_ascii_lowercase();
    let mut from = 0;
    while let Some(relative) = lower[from..].find(ACTIONS_MARKER) {
        let start = from + relative;
        let mut end = start + ACTIONS_MARKER.len();
        let mut rest = &lower[end..];
        if let Some(stripped) = rest.strip_prefix(':') {
            rest = stripped;
            end += 1;
        }
        if let Some(stripped) = rest.strip_prefix(EMPHASIS_DELIMITER) {
            end += EMPHASIS_DELIMITER.len();
            if stripped.starts_with(':') {
                end += 1;
            }
            return Some((start, end));
        }
        from = start + ACTIONS_MARKER.len();
    }
    None
}

fn parse_bullets(segment: &str) -> Vec<ExplanationBullet> {
    segment
        .lines()
        .map(str::trim)
        .map(strip_bullet_glyph)
        .map(|line| ExplanationBullet {
            spans: parse_emphasis(line),
        })
        // Lines of bare delimiters (`****`) leave no text behind.
        .filter(|bullet| !bullet.spans.is_empty())
        .collect()
}

/// Removes one leading `*`, `•` or `-` glyph.
///
/// A leading `**` opens an emphasis span and is left untouched.
#[must_use]
pub fn strip_bullet_glyph(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix('•').or_else(|| line.strip_prefix('-')) {
        return rest.trim_start();
    }
    match line.strip_prefix('*') {
        Some(rest) if !rest.starts_with('*') => rest.trim_start(),
        _ => line,
    }
}

/// Splits a line on `**` into alternating plain/emphasized spans.
///
/// An unmatched trailing delimiter stays in the text as a literal. Adjacent
/// runs of the same kind are merged, so `**a****b**` is one emphasized span.
#[must_use]
pub fn parse_emphasis(line: &str) -> SmallVec<[TextSpan; 4]> {
    let parts: Vec<&str> = line.split(EMPHASIS_DELIMITER).collect();
    let balanced = parts.len() % 2 == 1;
    let last = parts.len() - 1;

    let mut spans = SmallVec::new();
    for (idx, part) in parts.into_iter().enumerate() {
        if !balanced && idx == last {
            push_span(&mut spans, format!("{EMPHASIS_DELIMITER}{part}"), false);
        } else {
            push_span(&mut spans, part.to_owned(), idx % 2 == 1);
        }
    }
    spans
}

fn push_span(spans: &mut SmallVec<[TextSpan; 4]>, text: String, emphasized: bool) {
    if text.is_empty() {
        return;
    }
    match spans.last_mut() {
        Some(previous) if previous.emphasized == emphasized => previous.text.push_str(&text),
        _ => spans.push(TextSpan { text, emphasized }),
    }
}

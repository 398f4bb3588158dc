//! Named placeholder templates for file paths.
//!
//! A [`PathTemplate`] is parsed once and rendered many times against a set of
//! [`TemplateValues`]. The syntax is intentionally small:
//! - `{key}` inserts the value stored under `key`
//! - `{{` and `}}` insert a literal brace
//!
//! Fields with a conversion or format spec (`{name!r}`, `{time:05d}`) are
//! rejected while parsing, as is anything else involving unbalanced braces, so a
//! template that parses can only fail to render because a value is missing.
//!
//! Field names are plain keys. There are no positional or attribute fields:
//! `{0}` looks up the key `"0"` and `{a.b}` looks up the key `"a.b"`.
//! Error offsets are byte offsets into the template.

use std::{borrow::Cow, collections::BTreeMap, fmt, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TemplateError {
    #[error("unmatched `{{` at byte {offset}")]
    UnmatchedOpen { offset: usize },

    #[error("unmatched `}}` at byte {offset}")]
    UnmatchedClose { offset: usize },

    #[error("empty placeholder at byte {offset}, placeholders must be named")]
    EmptyPlaceholder { offset: usize },

    #[error("placeholder `{field}` uses a conversion or format spec, which is not supported")]
    UnsupportedField { field: String },

    #[error("no value for placeholder `{name}`")]
    MissingPlaceholder { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed file path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    pub fn parse(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if chars.next_if(|&(_, c)| c == '{').is_some() => literal.push('{'),
                '}' if chars.next_if(|&(_, c)| c == '}').is_some() => literal.push('}'),
                '}' => return Err(TemplateError::UnmatchedClose { offset }),
                '{' => {
                    let mut field = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, '{')) | None => {
                                return Err(TemplateError::UnmatchedOpen { offset });
                            }
                            Some((_, c)) => field.push(c),
                        }
                    }

                    if field.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder { offset });
                    }
                    if field.contains([':', '!']) {
                        return Err(TemplateError::UnsupportedField { field });
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(field));
                }
                c => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { source, segments })
    }

    /// The template text as it was parsed.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Names of all placeholders, in order of appearance, duplicates included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Render the template, failing on the first placeholder without a value.
    pub fn render(&self, values: &TemplateValues) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = values.get(name).ok_or_else(|| TemplateError::MissingPlaceholder {
                        name: name.clone(),
                    })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }

    pub fn render_path(&self, values: &TemplateValues) -> Result<PathBuf, TemplateError> {
        self.render(values).map(PathBuf::from)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Values available to a [`PathTemplate`] while rendering.
///
/// Inserting a key that already exists replaces the previous value, which is
/// what makes [`merge`](Self::merge) an override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateValues(BTreeMap<Cow<'static, str>, String>);

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Copy every entry of `other` into `self`, replacing existing keys.
    pub fn merge(&mut self, other: &TemplateValues) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for TemplateValues
where
    K: Into<Cow<'static, str>>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (key, value) in iter {
            values.insert(key, value);
        }
        values
    }
}

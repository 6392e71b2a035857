//! Placeholder substitution for mirror URL templates.
//!
//! Templates embed the qualifier fields as `{{.Release}}`, `{{.Repo}}` and
//! `{{.Arch}}`. The scanner recognizes nothing else: the delimiter
//! characters `{`, `}`, `[` and `]` may only appear as part of a well-formed
//! placeholder; anything else makes the template malformed.

use thiserror::Error;

use crate::resolve::qualifier::Qualifier;

/// A template that cannot be rendered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// A `{{` without a matching `}}`.
    #[error("unterminated placeholder at byte {0}")]
    Unterminated(usize),

    /// A placeholder naming something other than the three qualifier fields.
    #[error("unknown placeholder field {0:?}")]
    UnknownField(String),

    /// A delimiter character outside any placeholder.
    #[error("stray {0:?} at byte {1}")]
    StrayDelimiter(char, usize),
}

/// Render one template against a qualifier.
///
/// Templates without placeholders pass through unchanged. Whitespace inside
/// the braces is tolerated (`{{ .Release }}`).
pub fn render(template: &str, qualifier: &Qualifier) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut pos = 0;

    while let Some(c) = rest.chars().next() {
        if rest.starts_with("{{") {
            let body = &rest[2..];
            let Some(end) = body.find("}}") else {
                return Err(TemplateError::Unterminated(pos));
            };
            let field = body[..end].trim();
            let value = match field {
                ".Release" => qualifier.release.as_str(),
                ".Repo" => qualifier.repo.as_str(),
                ".Arch" => qualifier.arch.as_str(),
                _ => return Err(TemplateError::UnknownField(field.to_string())),
            };
            out.push_str(value);
            let consumed = 2 + end + 2;
            rest = &rest[consumed..];
            pos += consumed;
        } else if matches!(c, '{' | '}' | '[' | ']') {
            return Err(TemplateError::StrayDelimiter(c, pos));
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
            pos += c.len_utf8();
        }
    }

    Ok(out)
}

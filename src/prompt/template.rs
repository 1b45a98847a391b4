//! Slot template engine.
//!
//! The built-in prompt skeleton and its fragments are plain text with named
//! `{slot}` placeholders. Each slot is resolved independently by the caller
//! and handed in as a map; this module only performs the substitution.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of slot `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Slot values are inserted verbatim and never re-scanned, so a value may
//! itself contain braces.
//!
//! Rendering is fail-safe: a slot referenced by the template but missing
//! from the map is an error, never an empty substitution.

use std::collections::HashMap;
use thiserror::Error;

/// Resolved slot values keyed by slot name.
pub type Slots = HashMap<String, String>;

/// Error type for template rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A slot was referenced but not provided.
    #[error("undefined slot '{name}' at position {position} in template")]
    UndefinedSlot { name: String, position: usize },

    /// A `{` was found without a matching `}`.
    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    /// An empty slot name was found (e.g., `{}`).
    #[error("empty slot name '{{}}' at position {position} in template")]
    EmptySlotName { position: usize },
}

/// Render a template by substituting slots.
///
/// # Examples
///
/// ```
/// use promptsmith::prompt::{render, slots};
///
/// let slots = slots([("tool", "read_file")]);
/// let text = render("Use '{tool}' to read files.", &slots).unwrap();
/// assert_eq!(text, "Use 'read_file' to read files.");
/// ```
pub fn render(template: &str, slots: &Slots) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if let Some((_, '{')) = chars.peek() {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => name.push(c),
                        None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                    }
                }

                let name = name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptySlotName { position: pos });
                }

                match slots.get(name) {
                    Some(value) => result.push_str(value),
                    None => {
                        return Err(TemplateError::UndefinedSlot {
                            name: name.to_string(),
                            position: pos,
                        });
                    }
                }
            }
            '}' => {
                // `}}` collapses to one brace; a lone `}` is literal.
                if let Some((_, '}')) = chars.peek() {
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push(ch),
        }
    }

    Ok(result)
}

/// Build a slot map from key-value pairs.
pub fn slots<I, K, V>(pairs: I) -> Slots
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

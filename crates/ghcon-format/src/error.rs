//! Error types for format rendering.
//!
//! Two very different things can go wrong while rendering a format:
//!
//! - The format itself is malformed ([`SyntaxError`]). This is an authoring
//!   defect and always aborts the render.
//! - A resolver cannot answer a query ([`ResolveError`]). The engine never
//!   produces these itself; they are passed through from the resolver.
//!
//! Unknown variables, conditions and functions are *not* errors. They degrade
//! to their unevaluated textual form instead.

use std::fmt;

/// The structural problem found in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// An opening delimiter has no matching close before the end of the template.
    Unbalanced {
        /// The delimiter that was opened.
        open: char,
        /// The delimiter that was expected.
        close: char,
    },

    /// A color span `[...]` without the `:` separating color from body.
    MissingColorSeparator,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::Unbalanced { open, close } => {
                write!(f, "unbalanced '{}': no matching '{}'", open, close)
            }
            SyntaxErrorKind::MissingColorSeparator => {
                write!(f, "color span is missing ':' between color and text")
            }
        }
    }
}

/// A malformed template.
///
/// `offset` is the byte offset of the offending directive within `template`.
/// Use [`annotate`](SyntaxError::annotate) to show the position to a user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct SyntaxError {
    /// What is wrong.
    pub kind: SyntaxErrorKind,
    /// The template the offset refers to.
    pub template: String,
    /// Byte offset of the directive that could not be parsed.
    pub offset: usize,
}

impl SyntaxError {
    pub(crate) fn new(kind: SyntaxErrorKind, template: &str, offset: usize) -> Self {
        Self {
            kind,
            template: template.to_string(),
            offset,
        }
    }

    /// Renders the offending template line with a caret under the directive.
    ///
    /// ```rust
    /// use ghcon_format::validate;
    ///
    /// let err = validate("#$number [Red:open").unwrap_err();
    /// assert_eq!(
    ///     err.annotate(),
    ///     "#$number [Red:open\n         ^ unbalanced '[': no matching ']'"
    /// );
    /// ```
    pub fn annotate(&self) -> String {
        let offset = self.offset.min(self.template.len());
        let line_start = self.template[..offset].rfind('\n').map_or(0, |i| i + 1);
        let line_end = self.template[offset..]
            .find('\n')
            .map_or(self.template.len(), |i| offset + i);
        let column = self.template[line_start..offset].chars().count();

        let mut out = String::new();
        if line_start > 0 || line_end < self.template.len() {
            let line_no = self.template[..line_start].matches('\n').count() + 1;
            out.push_str(&format!("line {}:\n", line_no));
        }
        out.push_str(&self.template[line_start..line_end]);
        out.push('\n');
        out.push_str(&" ".repeat(column));
        out.push_str(&format!("^ {}", self.kind));
        out
    }
}

/// A failure reported by a resolver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The name needs a current item, but no list is being iterated.
    #[error("`{name}` can only be used inside a list")]
    Unbound { name: String },

    /// The record cannot produce a value for the name.
    #[error("cannot resolve `{name}`: {message}")]
    Invalid { name: String, message: String },
}

impl ResolveError {
    /// Shorthand for [`ResolveError::Invalid`].
    pub fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        ResolveError::Invalid {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Error type for [`Renderer`](crate::Renderer) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The template is malformed.
    #[error("template syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// A resolver failed; passed through unmodified.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl RenderError {
    /// Returns the syntax error, if this is one.
    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            RenderError::Syntax(err) => Some(err),
            RenderError::Resolve(_) => None,
        }
    }
}

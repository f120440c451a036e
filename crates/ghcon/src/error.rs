//! Error types for settings and printing.

use std::fmt;
use std::path::PathBuf;

use ghcon_format::{RenderError, ResolveError, SyntaxError};
use ghcon_paint::{PaintError, PaletteError};

/// The listings ghcon knows how to print, each with its own format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Issues,
    Labels,
    Config,
}

impl FormatKind {
    pub const ALL: [FormatKind; 3] = [FormatKind::Issues, FormatKind::Labels, FormatKind::Config];

    pub fn name(self) -> &'static str {
        match self {
            FormatKind::Issues => "issues",
            FormatKind::Labels => "labels",
            FormatKind::Config => "config",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors loading [`Settings`](crate::Settings).
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid color settings: {0}")]
    Palette(#[from] PaletteError),

    #[error("invalid {kind} format: {source}\n{}", .source.annotate())]
    Format { kind: FormatKind, source: SyntaxError },
}

/// Errors printing a listing.
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    /// The format is malformed; the message carries a caret diagnostic.
    #[error("invalid {kind} format: {source}\n{}", .source.annotate())]
    Format { kind: FormatKind, source: SyntaxError },

    /// A resolver rejected a directive, like `$label` outside `@labels{...}`.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Paint(#[from] PaintError),
}

impl PrintError {
    pub(crate) fn render(kind: FormatKind, err: RenderError) -> Self {
        match err {
            RenderError::Syntax(source) => PrintError::Format { kind, source },
            RenderError::Resolve(err) => PrintError::Resolve(err),
        }
    }
}

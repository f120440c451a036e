//! Error types for painting and palette configuration.

use std::io;

/// Errors from [`Painter`](crate::Painter).
#[derive(Debug, thiserror::Error)]
pub enum PaintError {
    /// A span names a color that is neither a palette color nor an alias.
    #[error("unknown color '{name}' at offset {offset}")]
    UnknownColor { name: String, offset: usize },

    /// Writing the painted text failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Problems found by [`Palette::validate`](crate::Palette::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// The alias chain starting at `alias` ends at `target`, which is not a color.
    #[error("color alias '{alias}' points to unknown color '{target}'")]
    Dangling { alias: String, target: String },

    /// Following the aliases in `path` leads back to where it started.
    #[error("cycle in color aliases: {}", .path.join(" -> "))]
    Cycle { path: Vec<String> },
}

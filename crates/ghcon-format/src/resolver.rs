//! The contract between the renderer and a record type.
//!
//! The [`Renderer`] knows nothing about issues, labels or any other record.
//! Every name it meets in a template is handed to a [`Resolver`], which
//! answers one of four queries. Returning `Ok(None)` means "I don't know this
//! name"; the renderer then falls back to the unevaluated form of the
//! directive. Returning `Err` aborts the render and the error reaches the
//! caller untouched.
//!
//! Most record types don't implement the trait by hand but register handlers
//! in a [`Registry`](crate::Registry).

use crate::error::{RenderError, ResolveError};
use crate::renderer::Renderer;

/// Answers the four queries a template can make about its scope `C`.
///
/// All methods default to "unknown", so an implementation only overrides the
/// queries it supports.
pub trait Resolver<C>: Send + Sync {
    /// Value of `$name`. Unknown names render as the raw `$name` token.
    fn variable(&self, name: &str, scope: &C) -> Result<Option<String>, ResolveError> {
        let _ = (name, scope);
        Ok(None)
    }

    /// Color for `[auto:...$name...]`. `None` renders as an uncolored span.
    fn auto_color(&self, name: &str, scope: &C) -> Result<Option<String>, ResolveError> {
        let _ = (name, scope);
        Ok(None)
    }

    /// Truth of `?key{...}`. `None` keeps the directive in the output.
    fn condition(&self, key: &str, scope: &C) -> Result<Option<bool>, ResolveError> {
        let _ = (key, scope);
        Ok(None)
    }

    /// Result of `@name{arg@arg...}`.
    ///
    /// `args` are raw, unrendered sub-templates. Functions render them
    /// through `renderer`, usually against a child scope.
    fn function(
        &self,
        name: &str,
        args: &[&str],
        scope: &C,
        renderer: &Renderer<'_, C>,
    ) -> Result<Option<String>, RenderError> {
        let _ = (name, args, scope, renderer);
        Ok(None)
    }
}

/// A resolver that knows no names at all.
///
/// Rendering against it keeps every directive except color spans in its
/// unevaluated form, which is handy for previewing a format's structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl<C> Resolver<C> for Passthrough {}

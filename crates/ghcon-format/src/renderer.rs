//! The recursive directive expander.
//!
//! [`Renderer::render`] scans a template once, left to right. Literal text is
//! copied as-is; each directive is resolved and its replacement appended to
//! the output. Scanning then continues in the *template* right after the
//! directive, so text produced by a resolver (a title containing `$`, a label
//! named `[wip]`) is never interpreted as template syntax.
//!
//! ```rust
//! use ghcon_format::{Passthrough, Renderer};
//!
//! let renderer = Renderer::new(&Passthrough);
//! let out = renderer.render("[Red:#$number] ?open{x} @f{a@b}", &()).unwrap();
//! assert_eq!(out, "[Red:#$number] ?open{x} @f{a@b}");
//! ```

use tracing::{debug, trace};

use crate::error::{RenderError, SyntaxError, SyntaxErrorKind};
use crate::list::ListSeparators;
use crate::resolver::Resolver;
use crate::scan::{self, SENTINELS};

/// Renders templates against scopes of type `C` through a [`Resolver`].
///
/// A renderer holds no per-render state; the same instance can render many
/// records, from several threads, and re-entrantly from inside a function.
pub struct Renderer<'r, C> {
    resolver: &'r dyn Resolver<C>,
}

impl<C> Clone for Renderer<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Renderer<'_, C> {}

impl<C> std::fmt::Debug for Renderer<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").finish_non_exhaustive()
    }
}

/// Where the text being expanded sits inside the template given to `render`.
#[derive(Clone, Copy)]
struct Origin<'t> {
    root: &'t str,
    base: usize,
}

impl Origin<'_> {
    fn error(&self, kind: SyntaxErrorKind, at: usize) -> SyntaxError {
        let err = SyntaxError::new(kind, self.root, self.base + at);
        debug!(offset = err.offset, "template syntax error: {}", kind);
        err
    }

    fn nested(&self, start: usize) -> Self {
        Origin {
            root: self.root,
            base: self.base + start,
        }
    }
}

impl<'r, C> Renderer<'r, C> {
    /// Creates a renderer backed by `resolver`.
    pub fn new(resolver: &'r dyn Resolver<C>) -> Self {
        Self { resolver }
    }

    /// Expands every directive in `template` against `scope`.
    ///
    /// # Errors
    ///
    /// [`RenderError::Syntax`] for unbalanced delimiters or a color span
    /// without `:`; [`RenderError::Resolve`] when the resolver fails.
    pub fn render(&self, template: &str, scope: &C) -> Result<String, RenderError> {
        let mut out = String::with_capacity(template.len());
        let origin = Origin {
            root: template,
            base: 0,
        };
        self.expand(template, origin, scope, &mut out)?;
        Ok(out)
    }

    /// Renders `template` once per scope and joins the results.
    ///
    /// This is the building block of list functions: each element gets its
    /// own child scope, so the binding never outlives its render.
    pub fn render_list<I>(
        &self,
        template: &str,
        scopes: I,
        separators: &ListSeparators,
    ) -> Result<String, RenderError>
    where
        I: IntoIterator<Item = C>,
    {
        let rendered = scopes
            .into_iter()
            .map(|scope| self.render(template, &scope))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(separators.join(rendered))
    }

    fn expand(
        &self,
        text: &str,
        origin: Origin<'_>,
        scope: &C,
        out: &mut String,
    ) -> Result<(), RenderError> {
        let mut pos = 0;
        while let Some(rel) = text[pos..].find(&SENTINELS[..]) {
            let at = pos + rel;
            out.push_str(&text[pos..at]);
            pos = match text.as_bytes()[at] {
                b'[' => self.color(text, at, origin, scope, out)?,
                b'?' => self.conditional(text, at, origin, scope, out)?,
                b'@' => self.function(text, at, origin, scope, out)?,
                _ => self.variable(text, at, scope, out)?,
            };
        }
        out.push_str(&text[pos..]);
        Ok(())
    }

    fn color(
        &self,
        text: &str,
        at: usize,
        origin: Origin<'_>,
        scope: &C,
        out: &mut String,
    ) -> Result<usize, RenderError> {
        let span = scan::color_span(text, at).map_err(|kind| origin.error(kind, at))?;

        let color = if span.spec.eq_ignore_ascii_case("auto") {
            match scan::first_variable(span.body) {
                Some(name) => self.resolver.auto_color(name, scope)?.unwrap_or_default(),
                None => String::new(),
            }
        } else {
            span.spec.to_string()
        };

        out.push('[');
        out.push_str(&color);
        out.push(':');
        self.expand(span.body, origin.nested(span.body_start), scope, out)?;
        out.push(']');
        Ok(span.end)
    }

    fn conditional(
        &self,
        text: &str,
        at: usize,
        origin: Origin<'_>,
        scope: &C,
        out: &mut String,
    ) -> Result<usize, RenderError> {
        let block = scan::block(text, at).map_err(|kind| origin.error(kind, at))?;
        let body_origin = origin.nested(block.body_start);

        match self.resolver.condition(block.head, scope)? {
            Some(true) => self.expand(block.body, body_origin, scope, out)?,
            Some(false) => {}
            None => {
                trace!(condition = block.head, "unknown condition kept in output");
                out.push('?');
                out.push_str(block.head);
                out.push('{');
                self.expand(block.body, body_origin, scope, out)?;
                out.push('}');
            }
        }
        Ok(block.end)
    }

    fn function(
        &self,
        text: &str,
        at: usize,
        origin: Origin<'_>,
        scope: &C,
        out: &mut String,
    ) -> Result<usize, RenderError> {
        let block = scan::block(text, at).map_err(|kind| origin.error(kind, at))?;
        let args = scan::split_arguments(block.body);

        match self.resolver.function(block.head, &args, scope, self)? {
            Some(result) => out.push_str(&result),
            None => {
                trace!(function = block.head, "unknown function kept in output");
                out.push('@');
                out.push_str(block.head);
                out.push('{');
                out.push_str(&args.join("@"));
                out.push('}');
            }
        }
        Ok(block.end)
    }

    fn variable(
        &self,
        text: &str,
        at: usize,
        scope: &C,
        out: &mut String,
    ) -> Result<usize, RenderError> {
        let name = scan::variable_name(text, at + 1);
        if name.is_empty() {
            out.push('$');
            return Ok(at + 1);
        }

        match self.resolver.variable(name, scope)? {
            Some(value) => out.push_str(&value),
            None => {
                trace!(variable = name, "unknown variable passed through");
                out.push('$');
                out.push_str(name);
            }
        }
        Ok(at + 1 + name.len())
    }
}

/// Checks a template for syntax errors without resolving anything.
///
/// Every body is checked, including those a render would skip (false
/// conditions) and function arguments that are only rendered on demand.
/// Useful for rejecting a user-supplied format before any record is printed.
///
/// ```rust
/// use ghcon_format::validate;
///
/// assert!(validate("[auto:$+number] ?labels{@labels{[auto:$label]@, }}").is_ok());
/// assert!(validate("?labels{[Red:x}").is_err());
/// ```
pub fn validate(template: &str) -> Result<(), SyntaxError> {
    let origin = Origin {
        root: template,
        base: 0,
    };
    check(template, origin)
}

fn check(text: &str, origin: Origin<'_>) -> Result<(), SyntaxError> {
    let mut pos = 0;
    while let Some(rel) = text[pos..].find(&SENTINELS[..]) {
        let at = pos + rel;
        pos = match text.as_bytes()[at] {
            b'[' => {
                let span = scan::color_span(text, at).map_err(|kind| origin.error(kind, at))?;
                check(span.body, origin.nested(span.body_start))?;
                span.end
            }
            b'?' => {
                let block = scan::block(text, at).map_err(|kind| origin.error(kind, at))?;
                check(block.body, origin.nested(block.body_start))?;
                block.end
            }
            b'@' => {
                let block = scan::block(text, at).map_err(|kind| origin.error(kind, at))?;
                for (start, arg) in scan::argument_spans(block.body) {
                    check(arg, origin.nested(block.body_start + start))?;
                }
                block.end
            }
            _ => at + 1 + scan::variable_name(text, at + 1).len(),
        };
    }
    Ok(())
}

//! # ghcon-format - directive templates for record listings
//!
//! `ghcon-format` expands short, author-written format strings against one
//! record at a time and produces *color-tagged text*: literal text
//! interleaved with `[color:text]` spans, ready for a terminal painter.
//!
//! ## Directives
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `$name` | value of a variable; the name runs to the next whitespace |
//! | `[color:body]` | color span; `auto` derives the color from the first `$name` in `body` |
//! | `?key{body}` | `body` only when the condition holds |
//! | `@name{arg@arg...}` | function call with raw sub-template arguments (lists, mostly) |
//!
//! Anything the resolver does not know degrades instead of failing: unknown
//! variables stay `$name`, unknown conditions keep `?key{...}` around their
//! rendered body, and unknown functions keep their canonical `@name{...}`
//! text. Only malformed templates (unbalanced delimiters) are errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use ghcon_format::{ListSeparators, Registry, Renderer, Scope};
//!
//! struct Issue { number: u32, title: String, labels: Vec<String> }
//! type IssueScope<'a> = Scope<'a, Issue, String>;
//!
//! let issue = Issue {
//!     number: 12,
//!     title: "Fix bug".into(),
//!     labels: vec!["bug".into(), "ui".into()],
//! };
//! let registry = Registry::<IssueScope<'_>>::new()
//!     .add_variable("number", |s| Ok(s.record().number.to_string()))
//!     .add_variable("title", |s| Ok(s.record().title.clone()))
//!     .add_variable("label", |s| Ok(s.require_item("label")?.clone()))
//!     .add_condition("labels", |s| Ok(!s.record().labels.is_empty()))
//!     .add_function("labels", |args, s, renderer| {
//!         let Some((item, seps)) = ListSeparators::from_args(args) else {
//!             return Ok(None);
//!         };
//!         let scopes = s.record().labels.iter().map(|l| s.with_item(l));
//!         renderer.render_list(item, scopes, &seps).map(Some)
//!     });
//!
//! let out = Renderer::new(&registry)
//!     .render("[Yellow:$number] $title ?labels{(@labels{$label@, })}", &Scope::new(&issue))
//!     .unwrap();
//! assert_eq!(out, "[Yellow:12] Fix bug (bug, ui)");
//! ```
//!
//! ## Key Types
//!
//! - [`Renderer`]: the recursive expander
//! - [`Resolver`]: the four queries a template makes about its record
//! - [`Registry`]: a name→handler [`Resolver`]
//! - [`Scope`]: record + current list item, passed explicitly through every render
//! - [`ListSeparators`]: `a, b and c` join policy for list functions
//! - [`validate`]: syntax check without rendering

mod context;
mod error;
mod list;
mod registry;
mod renderer;
mod resolver;
mod scan;

pub use context::Scope;
pub use error::{RenderError, ResolveError, SyntaxError, SyntaxErrorKind};
pub use list::ListSeparators;
pub use registry::Registry;
pub use renderer::{validate, Renderer};
pub use resolver::{Passthrough, Resolver};
pub use scan::split_arguments;

//! The value a template is rendered against.
//!
//! A [`Scope`] pairs the bound record with an optional *current item*: the
//! element a list function is iterating over. Scopes are immutable and cheap
//! to copy. A list function derives one child scope per element with
//! [`Scope::with_item`] and renders its argument against the child, so the
//! binding only exists inside that render call. Outer and sibling directives
//! keep seeing their own scope, and nested lists shadow the outer item only
//! within their own body.
//!
//! ```rust
//! use ghcon_format::Scope;
//!
//! struct Issue { labels: Vec<String> }
//!
//! let issue = Issue { labels: vec!["bug".into()] };
//! let scope: Scope<'_, Issue, String> = Scope::new(&issue);
//! assert!(scope.item().is_none());
//!
//! let inner = scope.with_item(&issue.labels[0]);
//! assert_eq!(inner.item().map(String::as_str), Some("bug"));
//! assert!(scope.item().is_none());
//! ```

use std::fmt;

use crate::error::ResolveError;

/// A bound record plus the item currently being iterated, if any.
pub struct Scope<'a, R, I = ()> {
    record: &'a R,
    item: Option<&'a I>,
}

impl<'a, R, I> Scope<'a, R, I> {
    /// Creates a scope for `record` with no current item.
    pub fn new(record: &'a R) -> Self {
        Self { record, item: None }
    }

    /// The bound record.
    pub fn record(&self) -> &'a R {
        self.record
    }

    /// The current item, when inside a list.
    pub fn item(&self) -> Option<&'a I> {
        self.item
    }

    /// The current item, or [`ResolveError::Unbound`] naming the variable
    /// that needed it.
    pub fn require_item(&self, name: &str) -> Result<&'a I, ResolveError> {
        self.item.ok_or_else(|| ResolveError::Unbound {
            name: name.to_string(),
        })
    }

    /// A child scope with `item` bound. `self` is left untouched.
    pub fn with_item(&self, item: &'a I) -> Self {
        Self {
            record: self.record,
            item: Some(item),
        }
    }
}

// Manual impls: deriving would needlessly require `R: Clone` and `I: Clone`.
impl<R, I> Clone for Scope<'_, R, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, I> Copy for Scope<'_, R, I> {}

impl<R: fmt::Debug, I: fmt::Debug> fmt::Debug for Scope<'_, R, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("record", self.record)
            .field("item", &self.item)
            .finish()
    }
}

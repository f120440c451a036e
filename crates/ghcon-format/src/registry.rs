//! Name-to-handler registry implementing [`Resolver`].
//!
//! Instead of a hand-written `match` per record type, handlers are registered
//! by name. The renderer stays record agnostic and a record type only
//! describes its capabilities:
//!
//! ```rust
//! use ghcon_format::{Registry, Renderer, Scope};
//!
//! struct Entry { key: String, value: String }
//!
//! let entry = Entry { key: "issues.editor".into(), value: "vim".into() };
//!
//! let registry = Registry::<Scope<'_, Entry>>::new()
//!     .add_variable("key", |s| Ok(s.record().key.clone()))
//!     .add_variable("value", |s| Ok(s.record().value.clone()))
//!     .add_condition("value", |s| Ok(!s.record().value.is_empty()))
//!     .add_auto_color("key", |_| Ok(Some("DarkCyan".into())));
//! let out = Renderer::new(&registry)
//!     .render("[auto:$key] ?value{= $value}", &Scope::new(&entry))
//!     .unwrap();
//! assert_eq!(out, "[DarkCyan:issues.editor] = vim");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{RenderError, ResolveError};
use crate::renderer::Renderer;
use crate::resolver::Resolver;

type VariableHandler<C> = Arc<dyn Fn(&C) -> Result<String, ResolveError> + Send + Sync>;
type AutoColorHandler<C> = Arc<dyn Fn(&C) -> Result<Option<String>, ResolveError> + Send + Sync>;
type ConditionHandler<C> = Arc<dyn Fn(&C) -> Result<bool, ResolveError> + Send + Sync>;
type FunctionHandler<C> = Arc<
    dyn Fn(&[&str], &C, &Renderer<'_, C>) -> Result<Option<String>, RenderError> + Send + Sync,
>;

/// A capability map for one scope type `C`.
///
/// Handlers are shared (`Arc`), so registering one closure under several
/// names is cheap, and the registry can be used from several threads at once.
pub struct Registry<C> {
    variables: HashMap<String, VariableHandler<C>>,
    auto_colors: HashMap<String, AutoColorHandler<C>>,
    conditions: HashMap<String, ConditionHandler<C>>,
    functions: HashMap<String, FunctionHandler<C>>,
}

impl<C> Registry<C> {
    /// Creates an empty registry. Every lookup is unknown until registered.
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
            auto_colors: HashMap::new(),
            conditions: HashMap::new(),
            functions: HashMap::new(),
        }
    }

    /// Registers the value of `$name`.
    pub fn add_variable<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&C) -> Result<String, ResolveError> + Send + Sync + 'static,
    {
        self.variables.insert(name.to_string(), Arc::new(handler));
        self
    }

    /// Registers the color used by `[auto:...]` spans that contain `$name`.
    pub fn add_auto_color<F>(self, name: &str, handler: F) -> Self
    where
        F: Fn(&C) -> Result<Option<String>, ResolveError> + Send + Sync + 'static,
    {
        self.add_auto_colors(&[name], handler)
    }

    /// Registers one auto color handler under several variable names.
    ///
    /// Useful for padded variants (`number`, `+number`, `number+`) that all
    /// color the same way.
    pub fn add_auto_colors<F>(mut self, names: &[&str], handler: F) -> Self
    where
        F: Fn(&C) -> Result<Option<String>, ResolveError> + Send + Sync + 'static,
    {
        let handler: AutoColorHandler<C> = Arc::new(handler);
        for name in names {
            self.auto_colors
                .insert((*name).to_string(), Arc::clone(&handler));
        }
        self
    }

    /// Registers the truth of `?key{...}`.
    pub fn add_condition<F>(mut self, key: &str, handler: F) -> Self
    where
        F: Fn(&C) -> Result<bool, ResolveError> + Send + Sync + 'static,
    {
        self.conditions.insert(key.to_string(), Arc::new(handler));
        self
    }

    /// Registers `@name{...}`.
    ///
    /// The handler receives the raw arguments and a renderer for re-entrant
    /// rendering. Returning `Ok(None)` declines the call (for instance on a
    /// wrong number of arguments), and the directive is kept unevaluated.
    pub fn add_function<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&[&str], &C, &Renderer<'_, C>) -> Result<Option<String>, RenderError>
            + Send
            + Sync
            + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(handler));
        self
    }

    /// Whether `$name` is registered.
    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Whether `?key{...}` is registered.
    pub fn has_condition(&self, key: &str) -> bool {
        self.conditions.contains_key(key)
    }

    /// Whether `@name{...}` is registered.
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered variable names, sorted.
    pub fn variable_names(&self) -> Vec<&str> {
        sorted_keys(&self.variables)
    }
}

fn sorted_keys<V>(map: &HashMap<String, V>) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

impl<C> Default for Registry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for Registry<C> {
    fn clone(&self) -> Self {
        Self {
            variables: self.variables.clone(),
            auto_colors: self.auto_colors.clone(),
            conditions: self.conditions.clone(),
            functions: self.functions.clone(),
        }
    }
}

impl<C> fmt::Debug for Registry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("variables", &sorted_keys(&self.variables))
            .field("auto_colors", &sorted_keys(&self.auto_colors))
            .field("conditions", &sorted_keys(&self.conditions))
            .field("functions", &sorted_keys(&self.functions))
            .finish()
    }
}

impl<C> Resolver<C> for Registry<C> {
    fn variable(&self, name: &str, scope: &C) -> Result<Option<String>, ResolveError> {
        self.variables
            .get(name)
            .map(|handler| handler(scope))
            .transpose()
    }

    fn auto_color(&self, name: &str, scope: &C) -> Result<Option<String>, ResolveError> {
        match self.auto_colors.get(name) {
            Some(handler) => handler(scope),
            None => Ok(None),
        }
    }

    fn condition(&self, key: &str, scope: &C) -> Result<Option<bool>, ResolveError> {
        self.conditions
            .get(key)
            .map(|handler| handler(scope))
            .transpose()
    }

    fn function(
        &self,
        name: &str,
        args: &[&str],
        scope: &C,
        renderer: &Renderer<'_, C>,
    ) -> Result<Option<String>, RenderError> {
        match self.functions.get(name) {
            Some(handler) => handler(args, scope, renderer),
            None => Ok(None),
        }
    }
}

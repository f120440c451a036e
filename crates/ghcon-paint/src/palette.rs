//! Named color aliases.
//!
//! Formats rarely name terminal colors directly. They use semantic names like
//! `Issue_Open` that the user can remap in their settings. A [`Palette`]
//! maps such names onto [`ConsoleColor`]s, possibly through other aliases:
//!
//! ```rust
//! use ghcon_paint::{ConsoleColor, Palette};
//!
//! let palette = Palette::new()
//!     .alias("Accent", "DarkYellow")
//!     .alias("Issue_Open", "Accent");
//!
//! assert_eq!(palette.resolve("Issue_Open"), Some(ConsoleColor::DarkYellow));
//! assert_eq!(palette.resolve("red"), Some(ConsoleColor::Red));
//! assert!(palette.validate().is_ok());
//! ```

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::color::ConsoleColor;
use crate::error::PaletteError;

/// Alias name to target name, where a target is another alias or a color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    aliases: BTreeMap<String, String>,
}

impl Palette {
    /// Creates a palette with no aliases; only the sixteen color names resolve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an alias.
    pub fn alias(mut self, name: &str, target: &str) -> Self {
        self.insert(name, target);
        self
    }

    /// Adds (or replaces) an alias in place.
    pub fn insert(&mut self, name: &str, target: &str) {
        self.aliases.insert(name.to_string(), target.to_string());
    }

    /// Overlays `other` on top of this palette; its aliases win.
    pub fn merge(&mut self, other: Palette) {
        self.aliases.extend(other.aliases);
    }

    /// The target of `name`, if it is an alias.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Alias names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Resolves `name` to a terminal color.
    ///
    /// Aliases are followed first (exact match), then the final name is
    /// looked up among the palette colors (case-insensitive). Returns `None`
    /// for unknown names and for cyclic aliases; use
    /// [`validate`](Self::validate) to find out which.
    pub fn resolve(&self, name: &str) -> Option<ConsoleColor> {
        let mut current = name;
        let mut visited = HashSet::new();
        while let Some(next) = self.aliases.get(current) {
            if !visited.insert(current) {
                return None;
            }
            current = next.as_str();
        }
        ConsoleColor::from_name(current)
    }

    /// Checks that every alias ends at a palette color.
    ///
    /// Aliases are checked in name order and the first problem is returned.
    pub fn validate(&self) -> Result<(), PaletteError> {
        for (name, target) in &self.aliases {
            self.validate_chain(name, target)?;
        }
        Ok(())
    }

    fn validate_chain(&self, name: &str, target: &str) -> Result<(), PaletteError> {
        let mut path = vec![name.to_string()];
        let mut current = target;

        loop {
            if path.iter().any(|seen| seen == current) {
                path.push(current.to_string());
                return Err(PaletteError::Cycle { path });
            }
            match self.aliases.get(current) {
                Some(next) => {
                    path.push(current.to_string());
                    current = next.as_str();
                }
                None if ConsoleColor::from_name(current).is_some() => return Ok(()),
                None => {
                    return Err(PaletteError::Dangling {
                        alias: name.to_string(),
                        target: current.to_string(),
                    })
                }
            }
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Palette {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            aliases: iter
                .into_iter()
                .map(|(name, target)| (name.into(), target.into()))
                .collect(),
        }
    }
}

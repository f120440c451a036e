//! Separator policy for list functions.

/// How rendered list elements are joined.
///
/// `separator` goes between every pair except the last one, which gets
/// `last`. That allows joins such as `a, b and c`.
///
/// ```rust
/// use ghcon_format::ListSeparators;
///
/// let seps = ListSeparators::new(", ", " and ");
/// assert_eq!(seps.join(["a", "b", "c"]), "a, b and c");
/// assert_eq!(seps.join(["a", "b"]), "a and b");
/// assert_eq!(seps.join(["a"]), "a");
/// assert_eq!(seps.join(Vec::<String>::new()), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSeparators {
    separator: String,
    last: String,
}

impl ListSeparators {
    /// Creates a policy with a regular and a final separator.
    pub fn new(separator: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            last: last.into(),
        }
    }

    /// Uses the same separator everywhere.
    pub fn uniform(separator: impl Into<String>) -> Self {
        let separator = separator.into();
        Self {
            last: separator.clone(),
            separator,
        }
    }

    /// Reads the conventional argument layout of a list function.
    ///
    /// - `@f{item}` joins with a single space.
    /// - `@f{item@sep}` joins with `sep`.
    /// - `@f{item@sep@last}` joins with `sep`, and `last` before the final element.
    ///
    /// Returns the item template and the separators, or `None` when there are
    /// no arguments at all. Arguments past the third are ignored.
    pub fn from_args<'a>(args: &[&'a str]) -> Option<(&'a str, Self)> {
        match args {
            [] => None,
            [item] => Some((*item, Self::uniform(" "))),
            [item, sep] => Some((*item, Self::uniform(*sep))),
            [item, sep, last, ..] => Some((*item, Self::new(*sep, *last))),
        }
    }

    /// The separator between all but the last pair.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// The separator before the final element.
    pub fn last(&self) -> &str {
        &self.last
    }

    /// Joins already rendered elements.
    pub fn join<I, S>(&self, items: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: Vec<S> = items.into_iter().collect();
        let mut out = String::new();
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                if i + 1 == items.len() {
                    out.push_str(&self.last);
                } else {
                    out.push_str(&self.separator);
                }
            }
            out.push_str(item.as_ref());
        }
        out
    }
}

impl Default for ListSeparators {
    fn default() -> Self {
        Self::uniform(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_four() {
        let seps = ListSeparators::new(", ", " and ");
        assert_eq!(seps.join(["a", "b", "c", "d"]), "a, b, c and d");
    }

    #[test]
    fn test_from_args_single() {
        let (item, seps) = ListSeparators::from_args(&["[auto:$label]"]).unwrap();
        assert_eq!(item, "[auto:$label]");
        assert_eq!(seps, ListSeparators::uniform(" "));
    }

    #[test]
    fn test_from_args_two() {
        let (_, seps) = ListSeparators::from_args(&["x", ","]).unwrap();
        assert_eq!(seps.separator(), ",");
        assert_eq!(seps.last(), ",");
    }

    #[test]
    fn test_from_args_extra_ignored() {
        let (_, seps) = ListSeparators::from_args(&["x", ", ", " or ", "?"]).unwrap();
        assert_eq!(seps, ListSeparators::new(", ", " or "));
    }

    #[test]
    fn test_from_args_empty() {
        assert!(ListSeparators::from_args(&[]).is_none());
    }
}

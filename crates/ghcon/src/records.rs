//! The records ghcon lists.
//!
//! These are plain values. Fetching them (GitHub, a cache, a config file) is
//! the caller's business; they deserialize from the obvious JSON/YAML shape:
//!
//! ```rust
//! use ghcon::{Issue, IssueState};
//!
//! let issue: Issue = serde_json::from_str(r#"{
//!     "number": 12,
//!     "title": "Fix bug",
//!     "assignee": "bob",
//!     "labels": [{ "name": "bug", "color": "d73a4a" }]
//! }"#).unwrap();
//! assert_eq!(issue.state, IssueState::Open);
//! assert_eq!(issue.labels[0].name, "bug");
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    #[default]
    Open,
    Closed,
}

impl IssueState {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
        }
    }
}

/// A repository label. `color` is a hex string as GitHub reports it (`d73a4a`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default)]
    pub color: String,
}

impl Label {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    /// Login of the assigned user.
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub state: IssueState,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Issue {
    /// An open, unassigned, unlabeled issue without a body.
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            body: None,
            assignee: None,
            state: IssueState::Open,
            labels: Vec::new(),
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn assignee(mut self, login: impl Into<String>) -> Self {
        self.assignee = Some(login.into());
        self
    }

    pub fn label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn closed(mut self) -> Self {
        self.state = IssueState::Closed;
        self
    }

    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }

    /// Whether the issue has a non-empty body.
    pub fn has_description(&self) -> bool {
        self.body.as_deref().is_some_and(|body| !body.is_empty())
    }
}

/// One `key = value` pair from the user's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let issue = Issue::new(3, "Crash")
            .assignee("ana")
            .label(Label::new("bug", "d73a4a"))
            .closed();
        assert_eq!(issue.assignee.as_deref(), Some("ana"));
        assert_eq!(issue.labels.len(), 1);
        assert!(!issue.is_open());
    }

    #[test]
    fn test_has_description() {
        assert!(!Issue::new(1, "a").has_description());
        assert!(!Issue::new(1, "a").body("").has_description());
        assert!(Issue::new(1, "a").body("details").has_description());
    }

    #[test]
    fn test_state_serde() {
        let issue: Issue =
            serde_json::from_str(r#"{"number": 1, "title": "x", "state": "closed"}"#).unwrap();
        assert_eq!(issue.state, IssueState::Closed);
        assert_eq!(issue.state.as_str(), "closed");
        assert_eq!(serde_json::to_string(&IssueState::Open).unwrap(), "\"open\"");
    }
}

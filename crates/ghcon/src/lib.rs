//! # ghcon - formatted console listings for GitHub data
//!
//! ghcon prints issues, labels and configuration entries one line per
//! record, shaped by a user-editable format and colored through named
//! aliases:
//!
//! ```text
//! [auto:$+number] [auto:$assignee+] $title ?labels{[Issue_Par:(]@labels{[auto:$label]@, }[Issue_Par:)]}
//! ```
//!
//! A listing goes through two stages:
//!
//! 1. **Format** ([`ghcon_format`]): directives are resolved against the
//!    record. `$name` inserts a value, `?key{...}` is conditional,
//!    `@labels{...}` iterates, and `[auto:...]` picks a color from the data.
//!    The result is plain text with `[Color:...]` spans.
//! 2. **Paint** ([`ghcon_paint`]): spans are turned into ANSI styles, removed
//!    for plain output, or kept verbatim, depending on [`PaintMode`].
//!
//! ```rust
//! use ghcon::{Issue, Label, PaintMode, Printer, Settings};
//!
//! let settings = Settings::from_yaml("formats:\n  issues: '#$number $title'\n").unwrap();
//! let printer = Printer::new(settings, PaintMode::Remove);
//!
//! let issues = vec![Issue::new(12, "Fix bug").label(Label::new("bug", "d73a4a"))];
//! let mut out = Vec::new();
//! printer.issues(&mut out, &issues, None).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "#12 Fix bug\n");
//! ```
//!
//! The per-record resolvers live in [`resolvers`] and can be used with
//! [`ghcon_format::Renderer`] directly when the painter isn't wanted.

pub mod error;
mod printer;
pub mod records;
pub mod resolvers;
mod settings;

pub use error::{FormatKind, PrintError, SettingsError};
pub use printer::Printer;
pub use records::{ConfigEntry, Issue, IssueState, Label};
pub use settings::{
    Formats, Settings, DEFAULT_COLORS, DEFAULT_CONFIG_FORMAT, DEFAULT_ISSUES_FORMAT,
    DEFAULT_LABELS_FORMAT,
};

pub use ghcon_paint::{ColorMatcher, ConsoleColor, PaintMode};

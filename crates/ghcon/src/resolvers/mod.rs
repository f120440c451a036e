//! Per-record resolvers: what `$name`, `?key{...}`, `@fn{...}` and
//! `[auto:...]` mean for issues, labels and configuration entries.
//!
//! Each record type gets a [`Registry`](ghcon_format::Registry) over a
//! [`Scope`](ghcon_format::Scope) of that record. Values that end up inside
//! the painter's input are escaped, so a title like `[wip] fix` prints
//! literally.

mod config;
mod issue;
mod label;

pub use config::{config_registry, ConfigScope};
pub use issue::{issue_registry, IssueLayout, IssueScope};
pub use label::{label_registry, LabelLayout, LabelScope};

use console::{measure_text_width, pad_str, Alignment};
use ghcon_paint::{ColorMatcher, Rgb};

/// Display width in terminal columns.
pub(crate) fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Right-aligns `s` in `width` columns (`+name`).
pub(crate) fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Left-aligns `s` in `width` columns (`name+`).
pub(crate) fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// The palette color name for a hex label color, if it parses.
pub(crate) fn matched_color(hex: &str, matcher: ColorMatcher) -> Option<String> {
    Rgb::from_hex(hex).map(|rgb| matcher(rgb).to_string())
}

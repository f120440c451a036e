//! Rendering listings: format, resolve, paint.

use std::borrow::Cow;
use std::io::Write;

use ghcon_format::{Registry, Renderer, Scope};
use ghcon_paint::{nearest_color, ColorMatcher, PaintError, PaintMode, Painter};
use tracing::debug;

use crate::error::{FormatKind, PrintError};
use crate::records::{ConfigEntry, Issue, Label};
use crate::resolvers::{config_registry, issue_registry, label_registry, IssueLayout, LabelLayout};
use crate::settings::{expand_newlines, Settings};

/// Prints issues, labels and configuration entries with the configured formats.
///
/// Each listing call takes an optional format that replaces the configured
/// one for that call only, the way a `--format` flag would.
///
/// ```rust
/// use ghcon::{Issue, Label, PaintMode, Printer, Settings};
///
/// let printer = Printer::new(Settings::default(), PaintMode::Remove);
/// let issues = vec![
///     Issue::new(7, "Crash on start").assignee("ana"),
///     Issue::new(12, "Fix bug").label(Label::new("bug", "d73a4a")),
/// ];
/// let lines = printer.issue_lines(&issues, Some("[auto:$+number] $title")).unwrap();
/// assert_eq!(lines, [" 7 Crash on start", "12 Fix bug"]);
/// ```
#[derive(Debug, Clone)]
pub struct Printer {
    settings: Settings,
    painter: Painter,
    matcher: ColorMatcher,
    current_user: Option<String>,
}

impl Printer {
    pub fn new(settings: Settings, mode: PaintMode) -> Self {
        let painter = Painter::new(settings.colors().clone(), mode);
        Self {
            settings,
            painter,
            matcher: nearest_color,
            current_user: None,
        }
    }

    /// Replaces how label colors are mapped to terminal colors.
    pub fn matcher(mut self, matcher: ColorMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Login of the viewing user, for the `Issue_User_Self` color.
    pub fn current_user(mut self, login: impl Into<String>) -> Self {
        self.current_user = Some(login.into());
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn mode(&self) -> PaintMode {
        self.painter.mode()
    }

    /// Renders and paints one line per issue.
    pub fn issue_lines(
        &self,
        issues: &[Issue],
        format: Option<&str>,
    ) -> Result<Vec<String>, PrintError> {
        let layout = IssueLayout::for_issues(issues, self.current_user.as_deref());
        let registry = issue_registry(layout, self.matcher);
        self.lines(FormatKind::Issues, format, &registry, issues)
    }

    /// Renders and paints one line per label.
    pub fn label_lines(
        &self,
        labels: &[Label],
        format: Option<&str>,
    ) -> Result<Vec<String>, PrintError> {
        let registry = label_registry(LabelLayout::for_labels(labels), self.matcher);
        self.lines(FormatKind::Labels, format, &registry, labels)
    }

    /// Renders and paints one line per configuration entry.
    pub fn config_lines(
        &self,
        entries: &[ConfigEntry],
        format: Option<&str>,
    ) -> Result<Vec<String>, PrintError> {
        let registry = config_registry();
        self.lines(FormatKind::Config, format, &registry, entries)
    }

    pub fn issues<W: Write>(
        &self,
        writer: &mut W,
        issues: &[Issue],
        format: Option<&str>,
    ) -> Result<(), PrintError> {
        write_lines(writer, self.issue_lines(issues, format)?)
    }

    pub fn labels<W: Write>(
        &self,
        writer: &mut W,
        labels: &[Label],
        format: Option<&str>,
    ) -> Result<(), PrintError> {
        write_lines(writer, self.label_lines(labels, format)?)
    }

    pub fn config<W: Write>(
        &self,
        writer: &mut W,
        entries: &[ConfigEntry],
        format: Option<&str>,
    ) -> Result<(), PrintError> {
        write_lines(writer, self.config_lines(entries, format)?)
    }

    fn lines<'a, R, I>(
        &self,
        kind: FormatKind,
        format: Option<&str>,
        registry: &Registry<Scope<'a, R, I>>,
        records: &'a [R],
    ) -> Result<Vec<String>, PrintError> {
        let template = self.template(kind, format)?;
        debug!(%kind, records = records.len(), "rendering listing");

        let renderer = Renderer::new(registry);
        records
            .iter()
            .map(|record| {
                let tagged = renderer
                    .render(&template, &Scope::new(record))
                    .map_err(|err| PrintError::render(kind, err))?;
                Ok(self.painter.paint(&tagged)?)
            })
            .collect()
    }

    fn template(&self, kind: FormatKind, format: Option<&str>) -> Result<Cow<'_, str>, PrintError> {
        match format {
            None => Ok(Cow::Borrowed(self.settings.format(kind))),
            Some(format) => {
                let format = expand_newlines(format);
                ghcon_format::validate(&format)
                    .map_err(|source| PrintError::Format { kind, source })?;
                Ok(Cow::Owned(format))
            }
        }
    }
}

fn write_lines<W: Write>(writer: &mut W, lines: Vec<String>) -> Result<(), PrintError> {
    for line in lines {
        writeln!(writer, "{}", line).map_err(PaintError::from)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghcon_paint::ConsoleColor;

    fn plain() -> Printer {
        Printer::new(Settings::default(), PaintMode::Keep)
    }

    #[test]
    fn test_default_issue_format_keep_mode() {
        let issues = vec![Issue::new(12, "Fix bug")
            .assignee("bob")
            .label(Label::new("bug", "d73a4a"))
            .label(Label::new("ui", "a2eeef"))];
        let lines = plain().issue_lines(&issues, None).unwrap();
        assert_eq!(
            lines,
            ["[Issue_Open:12] [Issue_User:bob] Fix bug [Issue_Par:(][Red:bug], [Cyan:ui][Issue_Par:)]"]
        );
    }

    #[test]
    fn test_current_user_color() {
        let issues = vec![Issue::new(1, "Mine").assignee("ana")];
        let lines = plain()
            .current_user("ana")
            .issue_lines(&issues, Some("[auto:$assignee]"))
            .unwrap();
        assert_eq!(lines, ["[Issue_User_Self:ana]"]);
    }

    #[test]
    fn test_override_format_is_validated() {
        let err = plain().issue_lines(&[], Some("?labels{x")).unwrap_err();
        assert!(matches!(
            err,
            PrintError::Format {
                kind: FormatKind::Issues,
                ..
            }
        ));
    }

    #[test]
    fn test_override_expands_newlines() {
        let entries = vec![ConfigEntry::new("editor", "vim")];
        let lines = plain()
            .config_lines(&entries, Some("$key\\n  $value"))
            .unwrap();
        assert_eq!(lines, ["editor\n  vim"]);
    }

    #[test]
    fn test_label_outside_list_fails() {
        let issues = vec![Issue::new(1, "x")];
        assert!(matches!(
            plain().issue_lines(&issues, Some("$label")),
            Err(PrintError::Resolve(_))
        ));
    }

    #[test]
    fn test_unknown_color_fails() {
        let entries = vec![ConfigEntry::new("a", "b")];
        assert!(matches!(
            plain().config_lines(&entries, Some("[Nope:$key]")),
            Err(PrintError::Paint(PaintError::UnknownColor { .. }))
        ));
    }

    #[test]
    fn test_accessors() {
        let settings = Settings::default()
            .with_format(FormatKind::Labels, "$name")
            .unwrap();
        let printer = Printer::new(settings, PaintMode::Remove);
        assert_eq!(printer.mode(), PaintMode::Remove);
        assert_eq!(printer.settings().format(FormatKind::Labels), "$name");
    }

    #[test]
    fn test_custom_matcher() {
        let labels = vec![Label::new("bug", "d73a4a")];
        let lines = plain()
            .matcher(|_| ConsoleColor::Blue)
            .label_lines(&labels, None)
            .unwrap();
        assert_eq!(lines, ["[Blue:bug]"]);
    }

    #[test]
    fn test_write_listing() {
        let labels = vec![Label::new("bug", "d73a4a"), Label::new("docs", "0075ca")];
        let printer = Printer::new(Settings::default(), PaintMode::Remove);
        let mut out = Vec::new();
        printer.labels(&mut out, &labels, Some("[:$name+]|")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "bug |\ndocs|\n");
    }
}
